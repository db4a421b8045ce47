// SPDX-License-Identifier: GPL-3.0-only

pub mod elb_tag;
pub mod find_volume_id;
