//! In-memory rasters with an arbitrary number of channels per pixel.
//!
//! Multi-spectral images and TIFF files with extra samples carry more
//! (or other) channels than a display color model can describe. This crate
//! stores them as plain interleaved bytes:
//!
//! - [`MultiChannelRaster`]: owned, dense, channel-interleaved pixel buffer
//!   with a fixed [`Rect`] of bounds and a checked offset formula
//! - [`Raster`]: the image-like interface pipelines call on any raster
//! - [`ColorModel`] / [`ColorRepresentation`]: tagged color capabilities;
//!   raw channel data never silently becomes a display color
//! - [`RasterLimits`]: allocation caps for untrusted headers
//!
//! Decoders allocate a raster sized to the source image, write samples at
//! [`MultiChannelRaster::pix_offset`], and encoders read them back through
//! [`MultiChannelRaster::pixels`].
//!
//! ```
//! use zenraster::{MultiChannelRaster, Rect};
//!
//! let mut raster = MultiChannelRaster::new(Rect::new(0, 0, 2, 2), 3)?;
//! let off = raster.pix_offset(1, 1)?;
//! assert_eq!(off, 9);
//! raster.pixels_mut()[off..off + 3].copy_from_slice(&[10, 20, 30]);
//! assert_eq!(raster.pixel(1, 1), Some(&[10u8, 20, 30][..]));
//! # Ok::<(), zenraster::RasterError>(())
//! ```

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

mod color;
mod error;
mod limits;
mod raster;
mod rect;
mod traits;

pub use color::{ColorModel, ColorRepresentation};
pub use error::{ErrorKind, RasterError};
pub use limits::{LimitExceeded, RasterLimits};
pub use raster::MultiChannelRaster;
pub use rect::Rect;
pub use traits::Raster;

// Re-exports for users of the raster views.
pub use imgref::{Img, ImgRef, ImgRefMut};
pub use rgb;
pub use rgb::Rgba;
