use thiserror::Error;

use crate::body::BodyLocation;

pub type Result<T, E = TributeError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TributeError {
    #[error("invalid location `{0}`")]
    InvalidLocation(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("{location} hitpoints {value} exceed maximum of {max}")]
    InvalidHitpoints {
        location: BodyLocation,
        value: u32,
        max: u32,
    },
}
