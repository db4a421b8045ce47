// SPDX-License-Identifier: GPL-3.0-only

pub mod protocol;
pub mod traits;

pub use protocol::{
    DesiredState, ElbTagRequest, ElbTagResponse, InvocationId, LookupRequest, ModuleError,
    ModuleErrorKind,
};
pub use traits::TagStore;
