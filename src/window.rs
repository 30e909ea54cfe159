//! Starfield
//! =========
//!
//! Canvas window definitions
//! --------------------------
//!
//! Defines `Window`, a rectangular crop of the canvas used for image
//! export, and the row iterator used by the encoders to read it.

use std::borrow::Cow;
use std::fmt;

use crate::Canvas;

/// Canvas image window coordinates
///
/// Defines a rectangular window on the canvas to export the image from.
///
/// The window origin is defined by its upper left corner. A window is not
/// required to lie entirely inside the canvas: rows and columns that fall
/// outside the canvas bounds read as zero.
///
/// Basic operations
/// ----------------
///
/// ```
/// use starfield::Window;
///
/// // Create a new rectangular window with origin at (0, 0).
/// let wnd1 = Window::new(128, 64);
///
/// // Move the window origin to (250, 150).
/// let wnd2 = wnd1.at(250, 150);
///
/// // Check the resulting string representation.
/// assert_eq!(wnd2.to_string(), "(250, 150)+(128, 64)");
/// ```
///
/// Conversions
/// -----------
///
/// ```
/// # use starfield::Window;
/// // From a tuple of tuples representing the origin coordinates
/// // and window dimensions.
/// let wnd1 = Window::from(((100, 200), (128, 128)));
///
/// // Check the resulting string representation.
/// assert_eq!(wnd1.to_string(), "(100, 200)+(128, 128)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// Window origin X coordinate
    pub x: u32,
    /// Window origin Y coordinate
    pub y: u32,
    /// Width in X direction
    pub w: u32,
    /// Height in Y direction
    pub h: u32,
}

impl Window {
    /// Creates a new window with given dimensions located at the origin.
    pub fn new(width: u32, height: u32) -> Self {
        Window {
            x: 0,
            y: 0,
            w: width,
            h: height,
        }
    }

    /// Moves the window origin to the given origin coordinates.
    pub fn at(&self, x: u32, y: u32) -> Window {
        Window {
            x,
            y,
            w: self.w,
            h: self.h,
        }
    }

    /// Checks if the window rectangle is entirely inside the canvas rectangle.
    pub fn is_inside(&self, width: u32, height: u32) -> bool {
        self.x + self.w <= width && self.y + self.h <= height
    }

    /// Returns the total number of pixels in the window.
    pub fn len(&self) -> usize {
        (self.w * self.h) as usize
    }

    /// Returns `true` if the window has no pixels.
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}

impl From<((u32, u32), (u32, u32))> for Window {
    /// Creates a window from a tuple `((x, y), (w, h))`.
    fn from(tuple: ((u32, u32), (u32, u32))) -> Self {
        let ((x, y), (w, h)) = tuple;

        Window { x, y, w, h }
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})+({}, {})", self.x, self.y, self.w, self.h)
    }
}

/// Row iterator over a canvas window.
///
/// Rows (and partial rows) that fall outside the canvas are synthesized as
/// zero-filled, owned buffers; rows that lie entirely inside the canvas are
/// borrowed directly from the pixel buffer without copying.
pub(crate) struct WindowSpans<'a> {
    canvas: &'a Canvas,
    window: Window,
    row: u32,
}

impl<'a> WindowSpans<'a> {
    pub(crate) fn new(canvas: &'a Canvas, window: Window) -> Self {
        WindowSpans {
            canvas,
            window,
            row: 0,
        }
    }
}

impl<'a> Iterator for WindowSpans<'a> {
    type Item = Cow<'a, [u16]>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.row >= self.window.h {
            return None;
        }

        let y = self.window.y + self.row;
        self.row += 1;

        let (width, height) = self.canvas.dimensions();
        let x0 = self.window.x;
        let x1 = x0.saturating_add(self.window.w);

        if y >= height || x0 >= width {
            return Some(Cow::Owned(vec![0; self.window.w as usize]));
        }

        let row_start = (y * width) as usize;

        if x1 <= width {
            let start = row_start + x0 as usize;
            let end = row_start + x1 as usize;
            Some(Cow::Borrowed(&self.canvas.pixels()[start..end]))
        } else {
            let avail = (width - x0) as usize;
            let mut buf = vec![0u16; self.window.w as usize];
            let start = row_start + x0 as usize;
            buf[..avail].copy_from_slice(&self.canvas.pixels()[start..start + avail]);
            Some(Cow::Owned(buf))
        }
    }
}

impl Canvas {
    /// Returns a row iterator over the given window, clipping rows and
    /// columns that fall outside the canvas to zero.
    pub(crate) fn window_spans(&self, window: Window) -> WindowSpans {
        WindowSpans::new(self, window)
    }
}
