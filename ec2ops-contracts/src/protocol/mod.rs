// SPDX-License-Identifier: GPL-3.0-only

pub mod error;
pub mod id;
pub mod requests;

pub use error::{ModuleError, ModuleErrorKind};
pub use id::InvocationId;
pub use requests::{DesiredState, ElbTagRequest, ElbTagResponse, LookupRequest};
