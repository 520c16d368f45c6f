//! The image-like interface that pipelines call on any raster.

use imgref::ImgRef;
use rgb::{ComponentBytes, Gray, Rgba};

use crate::color::{ColorModel, ColorRepresentation, unsupported_conversion};
use crate::raster::MultiChannelRaster;
use crate::rect::Rect;

/// Capabilities every raster exposes to image-handling code.
///
/// Pipeline code that needs a display color should branch on
/// [`color_model`](Raster::color_model) or [`color_at`](Raster::color_at)
/// and handle [`ColorRepresentation::RawChannels`].
/// [`rgba_at`](Raster::rgba_at) is for code paths that cannot proceed
/// without a display color; on raw channel data it panics.
pub trait Raster {
    /// Bounds rectangle.
    fn bounds(&self) -> Rect;

    /// Color model of every pixel.
    fn color_model(&self) -> ColorModel;

    /// Color at `(x, y)`, or `None` outside the bounds.
    fn color_at(&self, x: i32, y: i32) -> Option<ColorRepresentation<'_>>;

    /// Display color at `(x, y)`. Transparent black outside the bounds.
    ///
    /// # Panics
    ///
    /// Panics if the color model is [`ColorModel::RawChannels`], whatever
    /// the coordinate.
    #[track_caller]
    fn rgba_at(&self, x: i32, y: i32) -> Rgba<u8> {
        if let ColorModel::RawChannels(n) = self.color_model() {
            unsupported_conversion(n);
        }
        match self.color_at(x, y) {
            Some(c) => c.into_rgba(),
            None => Rgba::new(0, 0, 0, 0),
        }
    }
}

impl Raster for MultiChannelRaster {
    fn bounds(&self) -> Rect {
        MultiChannelRaster::bounds(self)
    }

    fn color_model(&self) -> ColorModel {
        ColorModel::RawChannels(self.channels())
    }

    fn color_at(&self, x: i32, y: i32) -> Option<ColorRepresentation<'_>> {
        self.pixel(x, y).map(ColorRepresentation::RawChannels)
    }
}

/// `imgref` sizes are `usize`; anything wider than `i32::MAX` is clamped,
/// since no `i32` coordinate can address past it.
fn clamp_extent(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

/// Position of `(x, y)` in an `imgref` buffer, or `None` outside it.
fn img_index<T>(img: &ImgRef<'_, T>, x: i32, y: i32) -> Option<usize> {
    let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
    if x >= img.width() || y >= img.height() {
        return None;
    }
    Some(y * img.stride() + x)
}

impl Raster for ImgRef<'_, Rgba<u8>> {
    fn bounds(&self) -> Rect {
        Rect::from_size(clamp_extent(self.width()), clamp_extent(self.height()))
    }

    fn color_model(&self) -> ColorModel {
        ColorModel::Rgba8
    }

    fn color_at(&self, x: i32, y: i32) -> Option<ColorRepresentation<'_>> {
        let px = self.buf()[img_index(self, x, y)?];
        Some(ColorRepresentation::Standard(px))
    }
}

impl Raster for ImgRef<'_, Gray<u8>> {
    fn bounds(&self) -> Rect {
        Rect::from_size(clamp_extent(self.width()), clamp_extent(self.height()))
    }

    fn color_model(&self) -> ColorModel {
        ColorModel::Gray8
    }

    /// Gray is expanded to RGBA with R=G=B=gray, A=255.
    fn color_at(&self, x: i32, y: i32) -> Option<ColorRepresentation<'_>> {
        let v = self.buf().as_bytes()[img_index(self, x, y)?];
        Some(ColorRepresentation::Standard(Rgba::new(v, v, v, 255)))
    }
}
