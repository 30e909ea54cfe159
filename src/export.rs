//! Starfield
//! =========
//!
//! Canvas image export support definitions
//! -----------------------------------------
//!
//! Defines an enum for the supported image export formats and the image
//! export methods for `Canvas`.

mod raw;

#[cfg(feature = "png")]
mod png;

use crate::{Canvas, ExportError, Window};

/// Exportable canvas image formats.
///
/// Variant ordering is part of the crate's public contract: it fixes the
/// discriminant used by callers that persist the format as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ImageFormat {
    /// 16-bit linear light grayscale PNG. Requires the `png` feature.
    PngLinear16Bpp = 0,
    /// 10-bit linear light grayscale little-endian RAW
    RawLinear10BppLE = 1,
    /// 12-bit linear light grayscale little-endian RAW
    RawLinear12BppLE = 2,
    /// 8-bit gamma-compressed grayscale PNG. Requires the `png` feature.
    PngGamma8Bpp = 3,
    /// 8-bit gamma-compressed grayscale RAW
    RawGamma8Bpp = 4,
}

impl Canvas {
    /// Exports the full canvas contents in the requested image format.
    pub fn export_image(&self, format: ImageFormat) -> Result<Vec<u8>, ExportError> {
        let window = Window::new(self.width, self.height);
        self.export_window_image(window, format)
    }

    /// Exports the given window of the canvas in the requested image format.
    ///
    /// Rows and columns of `window` that fall outside the canvas are
    /// exported as zero pixels.
    pub fn export_window_image(
        &self,
        window: Window,
        format: ImageFormat,
    ) -> Result<Vec<u8>, ExportError> {
        match format {
            ImageFormat::RawGamma8Bpp => Ok(self.export_raw8bpp(window)),
            ImageFormat::RawLinear10BppLE => Ok(self.export_raw1xbpp::<10>(window)),
            ImageFormat::RawLinear12BppLE => Ok(self.export_raw1xbpp::<12>(window)),
            #[cfg(feature = "png")]
            ImageFormat::PngGamma8Bpp => self.export_png8bpp(window),
            #[cfg(feature = "png")]
            ImageFormat::PngLinear16Bpp => self.export_png16bpp(window),
            #[cfg(not(feature = "png"))]
            ImageFormat::PngGamma8Bpp | ImageFormat::PngLinear16Bpp => {
                Err(ExportError::NotImplemented)
            }
        }
    }
}
