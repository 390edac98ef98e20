// SPDX-License-Identifier: MPL-2.0
//! Banner icon sources and template recoloring.
//!
//! SVG icons are tinted by the renderer through the widget style. Raster
//! icons are recolored up front: every pixel takes the template color and
//! keeps only its own alpha, so the icon's shape survives but its colors
//! do not.

use crate::error::Result;
use iced::widget::{image, svg};
use iced::Color;
use image_rs::RgbaImage;
use std::borrow::Cow;
use std::path::PathBuf;
use std::sync::Arc;

/// Decoded RGBA8 pixels of a raster icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterIcon {
    width: u32,
    height: u32,
    pixels: Arc<Vec<u8>>,
}

impl RasterIcon {
    /// Wraps raw RGBA8 pixels. Returns `None` if the buffer size does not
    /// match the dimensions.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(4)?;
        (pixels.len() == expected).then(|| Self {
            width,
            height,
            pixels: Arc::new(pixels),
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Returns a copy with every pixel set to `color`, scaled by its own alpha.
    #[must_use]
    pub fn tinted(&self, color: Color) -> Self {
        let rgba = color.into_rgba8();
        let mut buffer = RgbaImage::from_raw(self.width, self.height, self.pixels.to_vec())
            .unwrap_or_else(|| RgbaImage::new(self.width, self.height));

        for pixel in buffer.pixels_mut() {
            let alpha = u16::from(pixel.0[3]) * u16::from(rgba[3]) / 255;
            pixel.0 = [rgba[0], rgba[1], rgba[2], alpha as u8];
        }

        Self {
            width: self.width,
            height: self.height,
            pixels: Arc::new(buffer.into_raw()),
        }
    }

    /// Builds the handle the image widget draws.
    #[must_use]
    pub fn handle(&self) -> image::Handle {
        image::Handle::from_rgba(self.width, self.height, self.pixels.to_vec())
    }
}

/// Icon shown at the leading edge of a banner.
#[derive(Debug, Clone)]
pub enum BannerImage {
    Svg(svg::Handle),
    Raster(RasterIcon),
}

impl BannerImage {
    /// SVG document held in memory.
    pub fn svg_from_memory(bytes: impl Into<Cow<'static, [u8]>>) -> Self {
        BannerImage::Svg(svg::Handle::from_memory(bytes))
    }

    /// SVG document loaded lazily from disk by the renderer.
    pub fn svg_from_path(path: impl Into<PathBuf>) -> Self {
        BannerImage::Svg(svg::Handle::from_path(path))
    }

    /// Decodes an encoded raster image (PNG, JPEG, ...).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let decoded = image_rs::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = decoded.dimensions();
        Ok(BannerImage::Raster(RasterIcon {
            width,
            height,
            pixels: Arc::new(decoded.into_raw()),
        }))
    }
}

impl From<svg::Handle> for BannerImage {
    fn from(handle: svg::Handle) -> Self {
        BannerImage::Svg(handle)
    }
}

impl From<RasterIcon> for BannerImage {
    fn from(icon: RasterIcon) -> Self {
        BannerImage::Raster(icon)
    }
}
