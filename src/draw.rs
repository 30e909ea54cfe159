//! Starfield
//! =========
//!
//! Private light spot image drawing routines
//! -------------------------------------------
//!
//! Contains private types and implementations of private methods
//! for the existing public types.

use super::{Canvas, Pixel, Point, SpotId, SpotShape};

/// Spot bounding box coordinates in pixels
#[derive(Debug, Clone, Copy)]
struct BoundingBox {
    /// Top left corner X (inclusive)
    x0: u32,
    /// Top left corner Y (inclusive)
    y0: u32,
    /// Bottom right corner X (exclusive)
    x1: u32,
    /// Bottom right corner Y (exclusive)
    y1: u32,
}

impl BoundingBox {
    /// Calculates the bounding box for a light spot, given its composed
    /// (view-transformed) shape matrix and canvas position.
    ///
    /// Clips the box dimensions to the underlying canvas size.
    fn new(shape: &SpotShape, position: Point, width: u32, height: u32) -> Self {
        let (rx, ry) = shape.effective_radius_xy();
        let (px, py) = position;
        let (w, h) = (width as i64, height as i64);

        let x0 = ((px - rx).floor() as i64).clamp(0, w) as u32;
        let y0 = ((py - ry).floor() as i64).clamp(0, h) as u32;
        let x1 = ((px + rx).ceil() as i64).clamp(0, w) as u32;
        let y1 = ((py + ry).ceil() as i64).clamp(0, h) as u32;

        BoundingBox { x0, y0, x1, y1 }
    }

    /// Checks if the bounding box contains no pixels.
    fn is_empty(&self) -> bool {
        self.x0 == self.x1 || self.y0 == self.y1
    }
}

impl Canvas {
    /// Draws a single light spot image on the canvas.
    pub(super) fn draw_spot(&mut self, spot_id: SpotId) {
        let spot = &self.spots[spot_id.0];

        // Fast path for dark spots
        if spot.illumination <= 0.0 || spot.intensity <= 0.0 {
            return;
        }

        // Compose the spot shape with the linear part of the current view
        // transform: the spot shape is defined in world coordinates, but
        // rasterization happens in canvas coordinates.
        let shape = self.view.linear().premultiply(&spot.shape);
        let shape_inv = shape.invert();
        let position = self.view.apply(spot.position());

        let bbox = BoundingBox::new(&shape, position, self.width, self.height);

        // Check if the spot is clipped out of the canvas.
        if bbox.is_empty() {
            return;
        }

        let peak_intensity = spot.peak_intensity(self.brightness);

        for i in bbox.y0..bbox.y1 {
            let loff = (i * self.width) as usize;

            for j in bbox.x0..bbox.x1 {
                let poff = loff + j as usize;

                let pixval = self.eval_spot_pixel(&shape_inv, position, peak_intensity, j, i);

                // Compose light spot patterns using linear intensity addition
                // with numeric saturation instead of wrapping overflow.
                self.pixbuf[poff] = self.pixbuf[poff].saturating_add(pixval);
            }
        }
    }

    /// Evaluates the spot pixel intensity as a function of the radius vector
    /// drawn from the spot center.
    ///
    /// This version calculates a unit Airy disk pattern deformed by the
    /// composed `SpotShape` transformation matrix.
    fn eval_spot_pixel(
        &self,
        shape_inv: &SpotShape,
        position: Point,
        peak_intensity: f64,
        x: u32,
        y: u32,
    ) -> Pixel {
        // Image pixel intensity range
        let value_scale = Pixel::MAX as f64;

        // Current pixel radius vector
        let rvec = ((x as f64) - position.0, (y as f64) - position.1);

        // Transformed radius vector components
        let (tx, ty) = shape_inv.apply(rvec);

        // Transformed radial distance
        let rdist = tx.hypot(ty);

        // Perform pre-computed spot pattern LUT lookup for each pixel:

        // Calculate the LUT index with rounding to the nearest integer.
        let lut_index = (rdist * self.pattern_scale + 0.5) as usize;
        // Transparently zero-extend the pattern function LUT to infinity.
        let pattern_val = self.pattern_lut.get(lut_index).copied().unwrap_or(0.0);

        // Calculate the final pixel value
        (value_scale * peak_intensity * pattern_val) as Pixel
    }
}
