//! Draw request validation errors

use thiserror::Error;

use crate::request::MAX_POOL_SPAN;

/// Why a draw request was rejected.
///
/// Every variant is detected before any randomness is consumed, so a failed
/// draw never produces a partial result.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DrawError {
    #[error("minimum {min} cannot be greater than maximum {max}")]
    InvalidRange { min: i64, max: i64 },

    #[error("count must be greater than 0")]
    InvalidCount,

    /// The span `max - min + 1` exceeds [`MAX_POOL_SPAN`].
    #[error("range of {span} values exceeds the limit of {limit}")]
    RangeTooLarge { span: u64, limit: u64 },

    #[error("every value between {min} and {max} is excluded")]
    PoolExhausted { min: i64, max: i64 },

    #[error("cannot draw {requested} unique values from {available} available")]
    InsufficientPool { requested: usize, available: usize },
}

impl DrawError {
    pub(crate) fn range_too_large(span: u64) -> Self {
        Self::RangeTooLarge { span, limit: MAX_POOL_SPAN }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            DrawError::InvalidRange { min: 5, max: 1 }.to_string(),
            "minimum 5 cannot be greater than maximum 1"
        );
        assert_eq!(DrawError::InvalidCount.to_string(), "count must be greater than 0");
        assert_eq!(
            DrawError::PoolExhausted { min: 1, max: 3 }.to_string(),
            "every value between 1 and 3 is excluded"
        );
        assert_eq!(
            DrawError::InsufficientPool { requested: 3, available: 2 }.to_string(),
            "cannot draw 3 unique values from 2 available"
        );
        assert_eq!(
            DrawError::range_too_large(20_000_001).to_string(),
            "range of 20000001 values exceeds the limit of 10000000"
        );
    }
}
