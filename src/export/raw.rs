//! Starfield
//! =========
//!
//! Private RAW image export routines
//! -----------------------------------
//!
//! Contains implementations of private methods for the existing public
//! types.

use crate::{Canvas, Window};

impl Canvas {
    /// Exports the canvas window contents in the 8-bit gamma-compressed RAW image format.
    pub(super) fn export_raw8bpp(&self, window: Window) -> Vec<u8> {
        let mut rawbuf: Vec<u8> = Vec::with_capacity(window.len());

        for span in self.window_spans(window) {
            rawbuf.extend(span.iter().map(|p| self.gamma_curve.transform(*p)));
        }

        rawbuf
    }

    /// Exports the canvas window contents in the `X`-bit linear light grayscale
    /// little-endian RAW image format.
    ///
    /// The const generic `X` must be in the range from 9 to 16.
    pub(super) fn export_raw1xbpp<const X: u16>(&self, window: Window) -> Vec<u8> {
        let mut rawbuf: Vec<u8> = Vec::with_capacity(2 * window.len());

        for span in self.window_spans(window) {
            for p in span.iter() {
                let bytes = (*p >> (16 - X)).to_le_bytes();
                rawbuf.extend_from_slice(&bytes);
            }
        }

        rawbuf
    }
}
