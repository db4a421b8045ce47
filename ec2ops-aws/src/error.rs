// SPDX-License-Identifier: GPL-3.0-only

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ElbClientError {
    #[error(
        "region must be specified in the request, in the AWS_REGION or AWS_DEFAULT_REGION \
         environment variables, or in the AWS configuration file"
    )]
    MissingRegion,
    #[error("can't authorize connection: {reason}")]
    Credentials { reason: String },
    #[error("ELB {name} not found")]
    LoadBalancerNotFound { name: String },
    #[error("{message}")]
    Api { message: String },
}

pub type Result<T> = std::result::Result<T, ElbClientError>;
