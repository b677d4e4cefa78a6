//! Output of an encoded symbol: raster images, terminal text and the signed
//! module dump read by external image converters.

use std::path::Path;

use image::{GrayImage, ImageBuffer, Luma};

use crate::models::QrMatrix;

const BLACK: Luma<u8> = Luma([0u8]);
const WHITE: Luma<u8> = Luma([255u8]);

/// Raster layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Pixels per module
    pub module_size: u32,
    /// Quiet zone width in modules
    pub border: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            module_size: 10,
            border: 4,
        }
    }
}

/// Rasterize with black modules on a white background and quiet zone.
pub fn to_image(qr: &QrMatrix, config: &RenderConfig) -> GrayImage {
    let scale = config.module_size.max(1);
    let modules = qr.size() as u32 + 2 * config.border;
    let side = modules * scale;

    ImageBuffer::from_fn(side, side, |px, py| {
        let mx = px / scale;
        let my = py / scale;
        let inside = (config.border..config.border + qr.size() as u32).contains(&mx)
            && (config.border..config.border + qr.size() as u32).contains(&my);
        if inside && qr.is_dark((mx - config.border) as usize, (my - config.border) as usize) {
            BLACK
        } else {
            WHITE
        }
    })
}

/// Rasterize and write to `path`; the extension picks the format.
pub fn save<P: AsRef<Path>>(
    qr: &QrMatrix,
    path: P,
    config: &RenderConfig,
) -> Result<(), image::ImageError> {
    to_image(qr, config).save(path)
}

/// Two characters per module, dark as full blocks.
pub fn to_text(qr: &QrMatrix, border: usize) -> String {
    let size = qr.size();
    let side = size + 2 * border;
    let mut out = String::with_capacity(side * (side * 6 + 1));
    for y in 0..side {
        for x in 0..side {
            let dark = x >= border
                && y >= border
                && x < size + border
                && y < size + border
                && qr.is_dark(x - border, y - border);
            out.push_str(if dark { "\u{2588}\u{2588}" } else { "  " });
        }
        out.push('\n');
    }
    out
}

/// Signed module values row by row: magnitude 2 for function modules, 1 for
/// data, positive = black.
pub fn to_signed_rows(qr: &QrMatrix) -> Vec<Vec<i8>> {
    (0..qr.size())
        .map(|y| (0..qr.size()).map(|x| qr.module(x, y).signed()).collect())
        .collect()
}

/// Signed rows as whitespace-separated text, one line per row
pub fn format_signed_rows(qr: &QrMatrix) -> String {
    to_signed_rows(qr)
        .iter()
        .map(|row| {
            row.iter()
                .map(|v| format!("{:>2}", v))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
