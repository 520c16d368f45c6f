//! N-channel interleaved pixel storage.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use imgref::{Img, ImgRef, ImgRefMut};

use crate::error::RasterError;
use crate::limits::RasterLimits;
use crate::rect::Rect;

/// Owned raster with an arbitrary number of 8-bit channels per pixel.
///
/// Samples are channel-interleaved and rows are densely packed: the pixel
/// at `(x, y)` starts at
/// `(y - bounds.min_y) * stride + (x - bounds.min_x) * channels`, with
/// `stride == channels * width`.
///
/// Geometry is fixed at construction. Decoders write samples through
/// [`pixels_mut`](Self::pixels_mut) and encoders read them back through
/// [`pixels`](Self::pixels); neither can resize the buffer.
#[derive(Clone)]
pub struct MultiChannelRaster {
    pixels: Vec<u8>,
    stride: usize,
    rect: Rect,
    channels: usize,
    width: usize,
    height: usize,
}

/// Validated geometry for a `(rect, channels)` pair.
struct Layout {
    width: usize,
    height: usize,
    stride: usize,
    len: usize,
}

impl Layout {
    fn new(rect: Rect, channels: usize) -> Result<Self, RasterError> {
        if channels == 0 {
            return Err(RasterError::InvalidChannelCount);
        }
        let (dx, dy) = (rect.dx(), rect.dy());
        if dx < 0 || dy < 0 {
            return Err(RasterError::NegativeDimensions {
                width: dx,
                height: dy,
            });
        }
        let width = usize::try_from(dx).map_err(|_| RasterError::DimensionOverflow)?;
        let height = usize::try_from(dy).map_err(|_| RasterError::DimensionOverflow)?;
        let stride = width
            .checked_mul(channels)
            .ok_or(RasterError::DimensionOverflow)?;
        let len = stride
            .checked_mul(height)
            .ok_or(RasterError::DimensionOverflow)?;
        Ok(Self {
            width,
            height,
            stride,
            len,
        })
    }
}

impl MultiChannelRaster {
    /// Allocate a zero-filled raster covering `rect` with `channels`
    /// samples per pixel.
    ///
    /// A zero-area rectangle yields an empty buffer.
    ///
    /// # Errors
    ///
    /// [`RasterError::InvalidChannelCount`] if `channels` is zero,
    /// [`RasterError::NegativeDimensions`] if `rect` has a negative
    /// extent, and [`RasterError::DimensionOverflow`] if the buffer size
    /// does not fit in `usize`.
    pub fn new(rect: Rect, channels: usize) -> Result<Self, RasterError> {
        let layout = Layout::new(rect, channels)?;
        Ok(Self::from_layout(vec![0u8; layout.len], &layout, rect, channels))
    }

    /// Like [`new`](Self::new), but refuse to allocate a raster that
    /// `limits` does not allow.
    ///
    /// # Errors
    ///
    /// Everything [`new`](Self::new) returns, plus [`RasterError::Limit`].
    pub fn with_limits(
        rect: Rect,
        channels: usize,
        limits: &RasterLimits,
    ) -> Result<Self, RasterError> {
        let layout = Layout::new(rect, channels)?;
        if let Err(e) =
            limits.check_raster(layout.width as u64, layout.height as u64, channels)
        {
            log::debug!("rejected {channels}-channel raster {rect:?}: {e}");
            return Err(e.into());
        }
        Ok(Self::from_layout(vec![0u8; layout.len], &layout, rect, channels))
    }

    /// Wrap an existing buffer.
    ///
    /// The buffer must hold at least `channels * width * height` bytes;
    /// any excess is kept and returned by [`into_vec`](Self::into_vec).
    ///
    /// # Errors
    ///
    /// Everything [`new`](Self::new) returns, plus
    /// [`RasterError::InsufficientData`] if `data` is too short.
    pub fn from_vec(rect: Rect, channels: usize, data: Vec<u8>) -> Result<Self, RasterError> {
        let layout = Layout::new(rect, channels)?;
        if data.len() < layout.len {
            return Err(RasterError::InsufficientData {
                required: layout.len,
                actual: data.len(),
            });
        }
        Ok(Self::from_layout(data, &layout, rect, channels))
    }

    fn from_layout(pixels: Vec<u8>, layout: &Layout, rect: Rect, channels: usize) -> Self {
        Self {
            pixels,
            stride: layout.stride,
            rect,
            channels,
            width: layout.width,
            height: layout.height,
        }
    }

    /// Byte index of the first sample of the pixel at `(x, y)`.
    ///
    /// Coordinates are in the same space as [`bounds`](Self::bounds). The
    /// returned offset plus `channels - 1` is always a valid index into
    /// [`pixels`](Self::pixels).
    ///
    /// # Errors
    ///
    /// [`RasterError::OutOfBounds`] if `(x, y)` is outside the bounds.
    #[inline]
    pub fn pix_offset(&self, x: i32, y: i32) -> Result<usize, RasterError> {
        if !self.rect.contains(x, y) {
            return Err(RasterError::OutOfBounds { x, y });
        }
        // Inside the bounds both differences are in 0..width and 0..height.
        let col = (x as i64 - self.rect.min_x as i64) as usize;
        let row = (y as i64 - self.rect.min_y as i64) as usize;
        Ok(row * self.stride + col * self.channels)
    }

    /// Samples of the pixel at `(x, y)`, or `None` outside the bounds.
    pub fn pixel(&self, x: i32, y: i32) -> Option<&[u8]> {
        let start = self.pix_offset(x, y).ok()?;
        Some(&self.pixels[start..start + self.channels])
    }

    /// Mutable samples of the pixel at `(x, y)`, or `None` outside the bounds.
    pub fn pixel_mut(&mut self, x: i32, y: i32) -> Option<&mut [u8]> {
        let start = self.pix_offset(x, y).ok()?;
        Some(&mut self.pixels[start..start + self.channels])
    }

    /// Samples of row `y` (`stride` bytes), in bounds coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `y` is outside `bounds.min_y..bounds.max_y`.
    #[inline]
    pub fn row(&self, y: i32) -> &[u8] {
        let start = self.row_start(y);
        &self.pixels[start..start + self.stride]
    }

    /// Mutable samples of row `y`, in bounds coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `y` is outside `bounds.min_y..bounds.max_y`.
    #[inline]
    pub fn row_mut(&mut self, y: i32) -> &mut [u8] {
        let start = self.row_start(y);
        &mut self.pixels[start..start + self.stride]
    }

    #[track_caller]
    fn row_start(&self, y: i32) -> usize {
        assert!(
            self.rect.min_y <= y && y < self.rect.max_y,
            "row {y} out of bounds ({}..{})",
            self.rect.min_y,
            self.rect.max_y
        );
        (y as i64 - self.rect.min_y as i64) as usize * self.stride
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u8]> + '_ {
        let stride = self.stride;
        (0..self.height).map(move |r| &self.pixels[r * stride..(r + 1) * stride])
    }

    /// The whole pixel buffer.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// The whole pixel buffer, writable. The length cannot change.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// View the samples as an `imgref` image one byte per sample wide
    /// (`width * channels` samples per row).
    ///
    /// Returns `None` for a zero-area raster.
    pub fn as_imgref(&self) -> Option<ImgRef<'_, u8>> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        let len = self.stride * self.height;
        Some(Img::new_stride(
            &self.pixels[..len],
            self.stride,
            self.height,
            self.stride,
        ))
    }

    /// Mutable variant of [`as_imgref`](Self::as_imgref).
    pub fn as_imgref_mut(&mut self) -> Option<ImgRefMut<'_, u8>> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        let len = self.stride * self.height;
        Some(Img::new_stride(
            &mut self.pixels[..len],
            self.stride,
            self.height,
            self.stride,
        ))
    }

    /// Take back the backing vec.
    pub fn into_vec(self) -> Vec<u8> {
        self.pixels
    }

    /// Bounds rectangle, as passed at construction.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.rect
    }

    /// Samples per pixel.
    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Bytes between the starts of consecutive rows.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }
}

impl fmt::Debug for MultiChannelRaster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MultiChannelRaster({}x{}, {} channels, {:?})",
            self.width, self.height, self.channels, self.rect
        )
    }
}
