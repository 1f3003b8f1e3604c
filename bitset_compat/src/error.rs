use crate::Backend;
#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    #[cfg_attr(
        feature = "std",
        error("buffer too small: need {needed} bytes, have {available}")
    )]
    BufferTooSmall { needed: usize, available: usize },

    #[cfg_attr(feature = "std", error("backend {0:?} is not available on this target"))]
    BackendUnavailable(Backend),
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for CodecError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CodecError::BufferTooSmall { needed, available } => {
                write!(f, "buffer too small: need {} bytes, have {}", needed, available)
            }
            CodecError::BackendUnavailable(backend) => {
                write!(f, "backend {:?} is not available on this target", backend)
            }
        }
    }
}
