//! Error types for weighted DTW computation.

use thiserror::Error;

/// Errors reported before the cost matrix is touched.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum WdtwError {
    /// Returned when the row count `m` or the feature dimension `n` is below 1.
    #[error("invalid dimensions: m = {rows}, n = {cols} (both must be at least 1)")]
    InvalidDimension { rows: i64, cols: i64 },

    /// Returned when the band radius is negative.
    #[error("invalid window {window}: the band radius must be non-negative")]
    InvalidWindow { window: i64 },

    /// Returned when a buffer holds fewer elements than its logical extent.
    #[error("buffer `{buffer}` too small: {required} elements required, {actual} provided")]
    BufferTooSmall {
        buffer: &'static str,
        required: usize,
        actual: usize,
    },

    /// Returned by the C entry point when a pointer argument is null.
    #[error("buffer `{buffer}` is a null pointer")]
    NullPointer { buffer: &'static str },
}

impl WdtwError {
    /// Status code returned across the C boundary. `0` is reserved for success.
    pub fn code(&self) -> i32 {
        match self {
            Self::InvalidDimension { .. } => 1,
            Self::InvalidWindow { .. } => 2,
            Self::BufferTooSmall { .. } => 3,
            Self::NullPointer { .. } => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct_and_nonzero() {
        let errors = [
            WdtwError::InvalidDimension { rows: 0, cols: 1 },
            WdtwError::InvalidWindow { window: -1 },
            WdtwError::BufferTooSmall {
                buffer: "costs",
                required: 9,
                actual: 4,
            },
            WdtwError::NullPointer { buffer: "x1" },
        ];
        let codes: Vec<i32> = errors.iter().map(|e| e.code()).collect();
        assert_eq!(codes, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_display_names_buffer() {
        let error = WdtwError::BufferTooSmall {
            buffer: "weights",
            required: 5,
            actual: 3,
        };
        assert_eq!(
            error.to_string(),
            "buffer `weights` too small: 5 elements required, 3 provided"
        );
    }
}
