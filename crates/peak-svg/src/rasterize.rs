//! CPU rasterization of SVG markup using resvg and tiny-skia.

use std::path::Path;

use image::{ExtendedColorType, ImageEncoder, ImageFormat, RgbaImage};
use image::codecs::png::PngEncoder;
use tiny_skia::{Pixmap, Transform};
use usvg::{Options, Tree};

use crate::error::SvgError;

/// Rasterized image, straight-alpha RGBA8.
#[derive(Debug, Clone)]
pub struct RasterImage {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl RasterImage {
    /// RGBA of the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        Some([self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3]])
    }

    /// Encodes the image as PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>, SvgError> {
        let mut out = Vec::new();
        PngEncoder::new(&mut out)
            .write_image(&self.pixels, self.width, self.height, ExtendedColorType::Rgba8)
            .map_err(|e| SvgError::Encode(e.to_string()))?;
        Ok(out)
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), SvgError> {
        let img = RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
            .ok_or_else(|| SvgError::Encode("pixel buffer does not match dimensions".into()))?;
        img.save_with_format(path, ImageFormat::Png).map_err(|e| match e {
            image::ImageError::IoError(io) => SvgError::Io(io),
            other => SvgError::Encode(other.to_string()),
        })
    }
}

/// Rasterizes `svg` to exactly `width` × `height` pixels.
///
/// The document is stretched on each axis independently, matching
/// `preserveAspectRatio="none"` on the root.
pub fn rasterize(svg: &str, width: u32, height: u32) -> Result<RasterImage, SvgError> {
    if width == 0 || height == 0 {
        return Err(SvgError::InvalidSize { width, height });
    }

    let tree = Tree::from_str(svg, &Options::default()).map_err(|e| SvgError::Parse(e.to_string()))?;

    let mut pixmap = Pixmap::new(width, height).ok_or(SvgError::InvalidSize { width, height })?;

    let size = tree.size();
    let transform = Transform::from_scale(width as f32 / size.width(), height as f32 / size.height());
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    log::debug!("rasterized svg to {width}x{height}");

    Ok(RasterImage { pixels: unpremultiply_alpha(pixmap.data()), width, height })
}

/// tiny-skia stores premultiplied alpha; PNG wants straight alpha.
fn unpremultiply_alpha(data: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(data.len());

    for chunk in data.chunks_exact(4) {
        let a = chunk[3];
        if a == 0 {
            result.extend_from_slice(&[0, 0, 0, 0]);
        } else {
            let scale = 255.0 / a as f32;
            let un = |c: u8| (c as f32 * scale).round().min(255.0) as u8;
            result.extend_from_slice(&[un(chunk[0]), un(chunk[1]), un(chunk[2]), a]);
        }
    }

    result
}
