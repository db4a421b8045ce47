// SPDX-License-Identifier: GPL-3.0-only

pub mod tags;

pub use tags::TagStore;
