// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleErrorKind {
    Configuration,
    Validation,
    NotFound,
    UndefinedVariable,
    ExternalService,
}

impl ModuleErrorKind {
    /// Process exit code for the invocation, sysexits-flavored.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Configuration => 78,
            Self::Validation => 64,
            Self::NotFound => 69,
            Self::UndefinedVariable => 65,
            Self::ExternalService => 76,
        }
    }
}

/// Terminal error for one invocation; serialized as `{ kind, msg }`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{kind:?}: {message}")]
pub struct ModuleError {
    pub kind: ModuleErrorKind,
    #[serde(rename = "msg")]
    pub message: String,
}

impl ModuleError {
    pub fn new(kind: ModuleErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ModuleErrorKind::Configuration, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ModuleErrorKind::Validation, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ModuleErrorKind::NotFound, message)
    }

    pub fn undefined_variable(message: impl Into<String>) -> Self {
        Self::new(ModuleErrorKind::UndefinedVariable, message)
    }

    pub fn external_service(message: impl Into<String>) -> Self {
        Self::new(ModuleErrorKind::ExternalService, message)
    }
}
