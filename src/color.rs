//! Color capability negotiation.
//!
//! Image-handling code asks every raster two questions: what color model
//! it uses, and what display color sits at a coordinate. An N-channel
//! raster has no answer to the second question. Instead of a model whose
//! conversion silently misbehaves, [`ColorModel`] and
//! [`ColorRepresentation`] are tagged so that callers branch on
//! [`RawChannels`](ColorModel::RawChannels) explicitly.
//!
//! The conversion entry points that *must* yield a display color
//! ([`ColorModel::convert`], [`ColorRepresentation::into_rgba`],
//! [`Raster::rgba_at`](crate::Raster::rgba_at)) panic on raw channel data.

use rgb::Rgba;

/// Color model of a raster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ColorModel {
    /// 8-bit red, green, blue, alpha.
    Rgba8,
    /// 8-bit luminance.
    Gray8,
    /// `n` uninterpreted samples per pixel. Not convertible to a display color.
    RawChannels(usize),
}

impl ColorModel {
    /// Samples per pixel.
    pub const fn channels(self) -> usize {
        match self {
            Self::Rgba8 => 4,
            Self::Gray8 => 1,
            Self::RawChannels(n) => n,
        }
    }

    /// Whether colors in this model map to a display color.
    pub const fn is_standard(self) -> bool {
        !matches!(self, Self::RawChannels(_))
    }

    /// Convert an RGBA color into this model.
    ///
    /// `Gray8` uses ITU-R BT.601 luma weights and keeps alpha.
    ///
    /// # Panics
    ///
    /// Always panics for [`RawChannels`](Self::RawChannels): there is no
    /// mapping between display colors and uninterpreted samples.
    #[track_caller]
    pub fn convert(self, c: Rgba<u8>) -> Rgba<u8> {
        match self {
            Self::Rgba8 => c,
            Self::Gray8 => {
                let y = luma(c);
                Rgba::new(y, y, y, c.a)
            }
            Self::RawChannels(n) => unsupported_conversion(n),
        }
    }
}

/// The color found at one pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorRepresentation<'a> {
    /// A display color.
    Standard(Rgba<u8>),
    /// The pixel's raw samples, one byte per channel.
    RawChannels(&'a [u8]),
}

impl<'a> ColorRepresentation<'a> {
    /// Number of samples behind this color.
    pub fn channels(&self) -> usize {
        match self {
            Self::Standard(_) => 4,
            Self::RawChannels(s) => s.len(),
        }
    }

    /// The display color, if there is one.
    pub fn as_standard(&self) -> Option<Rgba<u8>> {
        match self {
            Self::Standard(c) => Some(*c),
            Self::RawChannels(_) => None,
        }
    }

    /// The raw samples, if this is not a display color.
    pub fn as_raw(&self) -> Option<&'a [u8]> {
        match self {
            Self::Standard(_) => None,
            Self::RawChannels(s) => Some(s),
        }
    }

    /// The display color.
    ///
    /// # Panics
    ///
    /// Panics for [`RawChannels`](Self::RawChannels).
    #[track_caller]
    pub fn into_rgba(self) -> Rgba<u8> {
        match self {
            Self::Standard(c) => c,
            Self::RawChannels(s) => unsupported_conversion(s.len()),
        }
    }
}

fn luma(c: Rgba<u8>) -> u8 {
    let y = 299 * c.r as u32 + 587 * c.g as u32 + 114 * c.b as u32;
    ((y + 500) / 1000) as u8
}

/// Abort the current operation: `channels` raw samples were asked to
/// become a display color.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn unsupported_conversion(channels: usize) -> ! {
    log::error!("cannot convert {channels}-channel samples to RGBA");
    panic!("unsupported conversion: cannot convert {channels}-channel samples to RGBA")
}
