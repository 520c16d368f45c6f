//! Allocation limits for raster construction.
//!
//! [`RasterLimits`] caps what [`MultiChannelRaster::with_limits`] will
//! allocate. [`LimitExceeded`] is returned when a check fails, before any
//! pixel memory is reserved.
//!
//! [`MultiChannelRaster::with_limits`]: crate::MultiChannelRaster::with_limits

/// Caps on raster geometry and allocation size.
///
/// All fields are optional; `None` means no limit for that resource.
/// Decoders reading untrusted headers should set at least `max_memory_bytes`.
///
/// # Example
///
/// ```
/// use zenraster::RasterLimits;
///
/// let limits = RasterLimits::none()
///     .with_max_channels(16)
///     .with_max_memory(256 * 1024 * 1024);
/// assert!(limits.has_any());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct RasterLimits {
    /// Maximum raster width in pixels.
    pub max_width: Option<u64>,
    /// Maximum raster height in pixels.
    pub max_height: Option<u64>,
    /// Maximum total pixels (width × height).
    pub max_pixels: Option<u64>,
    /// Maximum samples per pixel.
    pub max_channels: Option<usize>,
    /// Maximum pixel buffer size in bytes.
    pub max_memory_bytes: Option<u64>,
}

impl RasterLimits {
    /// No limits (all fields `None`).
    pub fn none() -> Self {
        Self::default()
    }

    /// Set maximum width in pixels.
    pub fn with_max_width(mut self, width: u64) -> Self {
        self.max_width = Some(width);
        self
    }

    /// Set maximum height in pixels.
    pub fn with_max_height(mut self, height: u64) -> Self {
        self.max_height = Some(height);
        self
    }

    /// Set maximum total pixels.
    pub fn with_max_pixels(mut self, max: u64) -> Self {
        self.max_pixels = Some(max);
        self
    }

    /// Set maximum samples per pixel.
    pub fn with_max_channels(mut self, channels: usize) -> Self {
        self.max_channels = Some(channels);
        self
    }

    /// Set maximum buffer size in bytes.
    pub fn with_max_memory(mut self, bytes: u64) -> Self {
        self.max_memory_bytes = Some(bytes);
        self
    }

    /// Whether any limits are set.
    pub fn has_any(&self) -> bool {
        self.max_width.is_some()
            || self.max_height.is_some()
            || self.max_pixels.is_some()
            || self.max_channels.is_some()
            || self.max_memory_bytes.is_some()
    }

    // --- Validation methods ---

    /// Check dimensions against `max_width`, `max_height`, and `max_pixels`.
    pub fn check_dimensions(&self, width: u64, height: u64) -> Result<(), LimitExceeded> {
        if let Some(max) = self.max_width
            && width > max
        {
            return Err(LimitExceeded::Width { actual: width, max });
        }
        if let Some(max) = self.max_height
            && height > max
        {
            return Err(LimitExceeded::Height {
                actual: height,
                max,
            });
        }
        if let Some(max) = self.max_pixels {
            let pixels = width.saturating_mul(height);
            if pixels > max {
                return Err(LimitExceeded::Pixels {
                    actual: pixels,
                    max,
                });
            }
        }
        Ok(())
    }

    /// Check a channel count against `max_channels`.
    pub fn check_channels(&self, channels: usize) -> Result<(), LimitExceeded> {
        if let Some(max) = self.max_channels
            && channels > max
        {
            return Err(LimitExceeded::Channels {
                actual: channels,
                max,
            });
        }
        Ok(())
    }

    /// Check a buffer size against `max_memory_bytes`.
    pub fn check_memory(&self, bytes: u64) -> Result<(), LimitExceeded> {
        if let Some(max) = self.max_memory_bytes
            && bytes > max
        {
            return Err(LimitExceeded::Memory { actual: bytes, max });
        }
        Ok(())
    }

    /// Run every check for a raster of the given geometry.
    ///
    /// Memory is `width * height * channels` bytes, saturating.
    pub fn check_raster(
        &self,
        width: u64,
        height: u64,
        channels: usize,
    ) -> Result<(), LimitExceeded> {
        self.check_dimensions(width, height)?;
        self.check_channels(channels)?;
        let bytes = width
            .saturating_mul(height)
            .saturating_mul(channels as u64);
        self.check_memory(bytes)
    }
}

/// A raster limit was exceeded.
///
/// Each variant carries the actual value and the limit that was exceeded.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum LimitExceeded {
    /// Width exceeded `max_width`.
    Width {
        /// Actual width.
        actual: u64,
        /// Maximum allowed.
        max: u64,
    },
    /// Height exceeded `max_height`.
    Height {
        /// Actual height.
        actual: u64,
        /// Maximum allowed.
        max: u64,
    },
    /// Pixel count exceeded `max_pixels`.
    Pixels {
        /// Actual pixel count.
        actual: u64,
        /// Maximum allowed.
        max: u64,
    },
    /// Channel count exceeded `max_channels`.
    Channels {
        /// Actual channel count.
        actual: usize,
        /// Maximum allowed.
        max: usize,
    },
    /// Buffer size exceeded `max_memory_bytes`.
    Memory {
        /// Required bytes.
        actual: u64,
        /// Maximum allowed.
        max: u64,
    },
}

impl core::fmt::Display for LimitExceeded {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Width { actual, max } => write!(f, "width {actual} exceeds limit {max}"),
            Self::Height { actual, max } => write!(f, "height {actual} exceeds limit {max}"),
            Self::Pixels { actual, max } => {
                write!(f, "pixel count {actual} exceeds limit {max}")
            }
            Self::Channels { actual, max } => {
                write!(f, "channel count {actual} exceeds limit {max}")
            }
            Self::Memory { actual, max } => {
                write!(f, "buffer of {actual} bytes exceeds limit {max}")
            }
        }
    }
}

impl core::error::Error for LimitExceeded {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn default_has_no_limits() {
        let limits = RasterLimits::none();
        assert!(!limits.has_any());
        assert!(limits.check_raster(u64::MAX, u64::MAX, usize::MAX).is_ok());
    }

    #[test]
    fn builder_sets_limits() {
        let limits = RasterLimits::none()
            .with_max_pixels(1_000_000)
            .with_max_channels(8);
        assert!(limits.has_any());
        assert_eq!(limits.max_pixels, Some(1_000_000));
        assert_eq!(limits.max_channels, Some(8));
        assert!(limits.max_memory_bytes.is_none());
    }

    #[test]
    fn check_dimensions_width_exceeded() {
        let limits = RasterLimits::none().with_max_width(1920);
        assert!(limits.check_dimensions(1920, 5000).is_ok());
        let err = limits.check_dimensions(1921, 1080).unwrap_err();
        assert_eq!(
            err,
            LimitExceeded::Width {
                actual: 1921,
                max: 1920
            }
        );
    }

    #[test]
    fn check_dimensions_height_exceeded() {
        let limits = RasterLimits::none().with_max_height(1080);
        let err = limits.check_dimensions(1920, 1081).unwrap_err();
        assert_eq!(
            err,
            LimitExceeded::Height {
                actual: 1081,
                max: 1080
            }
        );
    }

    #[test]
    fn check_dimensions_pixels_exceeded() {
        let limits = RasterLimits::none().with_max_pixels(1_000_000);
        // 1001×1000 = 1,001,000 > 1,000,000
        let err = limits.check_dimensions(1001, 1000).unwrap_err();
        assert_eq!(
            err,
            LimitExceeded::Pixels {
                actual: 1_001_000,
                max: 1_000_000
            }
        );
    }

    #[test]
    fn check_channels_exceeded() {
        let limits = RasterLimits::none().with_max_channels(4);
        assert!(limits.check_channels(4).is_ok());
        assert_eq!(
            limits.check_channels(5).unwrap_err(),
            LimitExceeded::Channels { actual: 5, max: 4 }
        );
    }

    #[test]
    fn check_raster_counts_every_channel() {
        // 100×100 pixels × 6 channels = 60,000 bytes
        let limits = RasterLimits::none().with_max_memory(59_999);
        assert_eq!(
            limits.check_raster(100, 100, 6).unwrap_err(),
            LimitExceeded::Memory {
                actual: 60_000,
                max: 59_999
            }
        );
        let limits = RasterLimits::none().with_max_memory(60_000);
        assert!(limits.check_raster(100, 100, 6).is_ok());
    }

    #[test]
    fn check_raster_saturates() {
        let limits = RasterLimits::none().with_max_memory(u64::MAX - 1);
        let err = limits.check_raster(u64::MAX, 2, 2).unwrap_err();
        assert!(matches!(err, LimitExceeded::Memory { actual: u64::MAX, .. }));
    }

    #[test]
    fn display_messages() {
        let msg = format!("{}", LimitExceeded::Channels { actual: 9, max: 8 });
        assert_eq!(msg, "channel count 9 exceeds limit 8");
        let msg = format!("{}", LimitExceeded::Memory { actual: 10, max: 5 });
        assert!(msg.contains("10 bytes"));
    }
}
