//! Starfield
//! =========
//!
//! Private PNG image export routines
//! -----------------------------------
//!
//! This module is gated by the "png" feature.
//!
//! Contains implementations of optional private methods for the existing
//! public types.

use std::io::{Cursor, Write};

use png::{BitDepth, ColorType, Encoder, ScaledFloat, Writer};

use crate::gamma::GammaCurve8;
use crate::window::WindowSpans;
use crate::{Canvas, ExportError, Window};

/// Initial encoded PNG buffer capacity
const PNG_BUF_CAPACITY: usize = 0x10000;

/// Helper function to work around several `png` crate API warts.
///
/// It is essential that `png::Writer` is moved into this function and
/// dropped here.
fn png_write_8bpp<W: Write>(
    mut writer: Writer<W>,
    spans: WindowSpans,
    gamma: &GammaCurve8,
) -> Result<(), ExportError> {
    let mut stream = writer.stream_writer()?;

    for span in spans {
        for &p in span.iter() {
            let gray8 = gamma.transform(p);
            stream.write_all(&[gray8])?;
        }
    }

    Ok(())
}

/// Helper function to work around several `png` crate API warts.
///
/// It is essential that `png::Writer` is moved into this function and
/// dropped here.
fn png_write_16bpp<W: Write>(mut writer: Writer<W>, spans: WindowSpans) -> Result<(), ExportError> {
    let mut stream = writer.stream_writer()?;

    for span in spans {
        for &p in span.iter() {
            stream.write_all(&p.to_be_bytes())?;
        }
    }

    Ok(())
}

impl Canvas {
    /// Exports the canvas window contents in the 8-bit gamma-compressed PNG image format.
    pub(super) fn export_png8bpp(&self, window: Window) -> Result<Vec<u8>, ExportError> {
        let mut pngbuf: Vec<u8> = Vec::with_capacity(PNG_BUF_CAPACITY);
        let cursor = Cursor::new(&mut pngbuf);

        let mut encoder = Encoder::new(cursor, window.w, window.h);
        encoder.set_color(ColorType::Grayscale);
        encoder.set_depth(BitDepth::Eight);
        // sRGB compression gamma = 1 / 2.2 = 0.45455 (rounded)
        encoder.set_source_gamma(ScaledFloat::from_scaled(45455));

        let writer = encoder.write_header()?;
        let spans = self.window_spans(window);

        // Do not attempt to inline this: the writer must be dropped before
        // `pngbuf` is returned.
        png_write_8bpp(writer, spans, &self.gamma_curve)?;

        Ok(pngbuf)
    }

    /// Exports the canvas window contents in the 16-bit linear light PNG image format.
    pub(super) fn export_png16bpp(&self, window: Window) -> Result<Vec<u8>, ExportError> {
        let mut pngbuf: Vec<u8> = Vec::with_capacity(PNG_BUF_CAPACITY);
        let cursor = Cursor::new(&mut pngbuf);

        let mut encoder = Encoder::new(cursor, window.w, window.h);
        encoder.set_color(ColorType::Grayscale);
        encoder.set_depth(BitDepth::Sixteen);
        encoder.set_source_gamma(ScaledFloat::new(1.0));

        let writer = encoder.write_header()?;
        let spans = self.window_spans(window);

        png_write_16bpp(writer, spans)?;

        Ok(pngbuf)
    }
}
