//! Failures while loading an input artifact.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    /// The artifact is larger than `IOLimits::max_file_size`.
    #[error("artifact is {found} bytes, over the {limit}-byte limit")]
    ArtifactTooLarge { limit: u64, found: u64 },

    #[error(transparent)]
    Read(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, IoError>;
