//! Raster construction and addressing errors.

use core::fmt;

use crate::limits::LimitExceeded;

/// Broad category of a [`RasterError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The requested geometry or backing buffer cannot form a valid raster.
    InvalidConstruction,
    /// A coordinate lies outside the raster bounds.
    OutOfBounds,
    /// A configured [`RasterLimits`](crate::RasterLimits) cap was hit.
    LimitExceeded,
}

/// Errors from raster construction and offset queries.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum RasterError {
    /// Channel count is zero.
    InvalidChannelCount,
    /// The bounds rectangle has a negative width or height.
    NegativeDimensions {
        /// `max_x - min_x`.
        width: i64,
        /// `max_y - min_y`.
        height: i64,
    },
    /// `channels * width * height` does not fit in `usize`.
    DimensionOverflow,
    /// Backing buffer is shorter than `stride * height`.
    InsufficientData {
        /// Bytes needed.
        required: usize,
        /// Bytes supplied.
        actual: usize,
    },
    /// Coordinate outside the raster bounds.
    OutOfBounds {
        /// Requested x.
        x: i32,
        /// Requested y.
        y: i32,
    },
    /// Rejected by [`RasterLimits`](crate::RasterLimits).
    Limit(LimitExceeded),
}

impl RasterError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidChannelCount
            | Self::NegativeDimensions { .. }
            | Self::DimensionOverflow
            | Self::InsufficientData { .. } => ErrorKind::InvalidConstruction,
            Self::OutOfBounds { .. } => ErrorKind::OutOfBounds,
            Self::Limit(_) => ErrorKind::LimitExceeded,
        }
    }
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChannelCount => write!(f, "channel count must be at least 1"),
            Self::NegativeDimensions { width, height } => {
                write!(f, "bounds have negative extent {width}x{height}")
            }
            Self::DimensionOverflow => write!(f, "raster size overflows usize"),
            Self::InsufficientData { required, actual } => {
                write!(f, "buffer holds {actual} bytes, raster needs {required}")
            }
            Self::OutOfBounds { x, y } => write!(f, "pixel ({x}, {y}) is outside the bounds"),
            Self::Limit(e) => write!(f, "raster limit exceeded: {e}"),
        }
    }
}

impl core::error::Error for RasterError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Limit(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LimitExceeded> for RasterError {
    fn from(e: LimitExceeded) -> Self {
        Self::Limit(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use core::error::Error;

    #[test]
    fn construction_errors_share_a_kind() {
        for err in [
            RasterError::InvalidChannelCount,
            RasterError::NegativeDimensions {
                width: -1,
                height: 2,
            },
            RasterError::DimensionOverflow,
            RasterError::InsufficientData {
                required: 4,
                actual: 3,
            },
        ] {
            assert_eq!(err.kind(), ErrorKind::InvalidConstruction);
        }
    }

    #[test]
    fn out_of_bounds_kind() {
        let err = RasterError::OutOfBounds { x: 3, y: -1 };
        assert_eq!(err.kind(), ErrorKind::OutOfBounds);
        assert_eq!(format!("{err}"), "pixel (3, -1) is outside the bounds");
    }

    #[test]
    fn limit_wraps_source() {
        let err: RasterError = LimitExceeded::Channels { actual: 9, max: 8 }.into();
        assert_eq!(err.kind(), ErrorKind::LimitExceeded);
        assert!(err.source().is_some());
        assert!(format!("{err}").contains("channel count 9"));
    }

    #[test]
    fn display_mentions_sizes() {
        let msg = format!(
            "{}",
            RasterError::InsufficientData {
                required: 12,
                actual: 8
            }
        );
        assert!(msg.contains("12"));
        assert!(msg.contains("8"));
    }
}
