//! Starfield
//! =========
//!
//! Sub-pixel precision synthetic star-field rendering and export library
//! for astronomy and video tracking applications.
//!
//! A [`Canvas`] accumulates a list of light spots ([`SpotShape`]-shaped
//! Airy-disc point sources) and rasterizes them into a 16-bit linear light
//! pixel buffer under a world-to-canvas [`Transform`]. The rendered image
//! can then be exported in several raw or PNG pixel formats, optionally
//! cropped to a [`Window`].

mod draw;
mod error;
mod export;
mod gamma;
mod pattern;
mod shape;
mod transform;
mod window;

use std::fmt;

use gamma::GammaCurve8;

pub use error::{DimensionError, ExportError};
pub use export::ImageFormat;
pub use shape::SpotShape;
pub use transform::Transform;
pub use window::Window;

/// Image pixel value type: 16-bit pixels
pub type Pixel = u16;

/// 2D point coordinates: `(X, Y)`
pub type Point = (f64, f64);

/// 2D vector coordinates: `(X, Y)`
pub type Vector = (f64, f64);

/// Opaque light spot handle returned by [`Canvas::add_spot`].
///
/// A `SpotId` is only ever valid for the [`Canvas`] that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpotId(usize);

impl fmt::Display for SpotId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SpotId({})", self.0)
    }
}

/// Light spot rendering parameters
#[derive(Debug, Clone, Copy)]
struct Spot {
    /// Light spot centroid position, in world coordinates.
    position: Point,

    /// Relative spot position offset, in world coordinates.
    offset: Vector,

    /// Relative peak intensity.
    intensity: f64,

    /// Illumination based spot intensity factor.
    illumination: f64,

    /// Spot shape definition matrix, in world coordinates.
    shape: SpotShape,
}

impl Spot {
    /// Calculates the effective spot position by taking into account
    /// the associated position offset vector.
    fn position(&self) -> Point {
        (self.position.0 + self.offset.0, self.position.1 + self.offset.1)
    }

    /// Calculates the effective peak intensity.
    fn peak_intensity(&self, brightness: f64) -> f64 {
        self.intensity * self.illumination * brightness
    }
}

/// Generates the synthesized image containing multiple light spots.
pub struct Canvas {
    /// Canvas width in pixels
    width: u32,

    /// Canvas height in pixels
    height: u32,

    /// Background light level
    background: Pixel,

    /// Light spot draw list
    spots: Vec<Spot>,

    /// Global spot brightness factor
    brightness: f64,

    /// World-to-canvas view transform
    view: Transform,

    /// Image pixel buffer
    pixbuf: Vec<Pixel>,

    /// Spot pattern lookup table
    pattern_lut: Vec<f64>,

    /// Pattern LUT index scaling factor
    pattern_scale: f64,

    /// 16-bit -> 8-bit gamma compression curve
    gamma_curve: GammaCurve8,
}

impl Canvas {
    /// The maximum representable pixel value.
    pub const PIXEL_MAX: Pixel = Pixel::MAX;

    /// Creates a new clear canvas to render light spots on.
    ///
    /// Returns [`DimensionError`] if either `width` or `height` is zero.
    pub fn new(width: u32, height: u32) -> Result<Self, DimensionError> {
        if width == 0 || height == 0 {
            return Err(DimensionError { width, height });
        }

        let background = 0;
        let spots = Vec::with_capacity(8);
        let brightness = 1.0;
        let view = Transform::default();
        let pixbuf = vec![0; (width * height) as usize];
        let (pattern_lut, pattern_scale) = Self::build_pattern_lut();
        let gamma_curve = GammaCurve8::new();

        Ok(Canvas {
            width,
            height,
            background,
            spots,
            brightness,
            view,
            pixbuf,
            pattern_lut,
            pattern_scale,
            gamma_curve,
        })
    }

    /// Creates a new light spot on the canvas, in world coordinates.
    ///
    /// Returns the spot's opaque handle.
    pub fn add_spot(&mut self, position: Point, shape: SpotShape, intensity: f64) -> SpotId {
        let spot = Spot {
            position,
            offset: (0.0, 0.0),
            shape,
            intensity,
            illumination: 1.0,
        };

        let id = self.spots.len();
        self.spots.push(spot);
        SpotId(id)
    }

    /// Sets the light spot position offset vector.
    ///
    /// The position offset vector is added to the immutable spot position
    /// to calculate the spot rendering coordinates on the canvas. No-op if
    /// `spot` does not refer to a valid spot on this canvas.
    pub fn set_spot_offset(&mut self, spot: SpotId, offset: Vector) {
        if let Some(s) = self.spots.get_mut(spot.0) {
            s.offset = offset;
        }
    }

    /// Sets the light spot illumination state.
    ///
    /// The spot illumination factor is multiplied with the immutable spot
    /// intensity factor to calculate the rendered peak intensity. No-op if
    /// `spot` does not refer to a valid spot on this canvas.
    pub fn set_spot_illumination(&mut self, spot: SpotId, illumination: f64) {
        if let Some(s) = self.spots.get_mut(spot.0) {
            s.illumination = illumination;
        }
    }

    /// Returns the light spot's effective rendered position, in canvas
    /// coordinates, taking into account the offset and the current view
    /// transform. Returns `None` if `spot` does not refer to a valid spot.
    pub fn spot_position(&self, spot: SpotId) -> Option<Point> {
        self.spots.get(spot.0).map(|s| self.view.apply(s.position()))
    }

    /// Returns the light spot's effective peak intensity, taking into
    /// account illumination and the current global brightness. Returns
    /// `None` if `spot` does not refer to a valid spot.
    pub fn spot_intensity(&self, spot: SpotId) -> Option<f64> {
        self.spots
            .get(spot.0)
            .map(|s| s.peak_intensity(self.brightness))
    }

    /// Sets the world-to-canvas view transform.
    pub fn set_view_transform(&mut self, view: Transform) {
        self.view = view;
    }

    /// Clears the canvas image (fills with background pixels).
    pub fn clear(&mut self) {
        self.pixbuf.fill(self.background)
    }

    /// Draws the light spots onto the canvas image.
    pub fn draw(&mut self) {
        // Always clear the canvas first to avoid unintended overdraw.
        self.clear();

        if self.brightness <= 0.0 {
            return;
        }

        // `self.spots` can not be borrowed for `draw_spot()`.
        for spot_id in 0..self.spots.len() {
            self.draw_spot(SpotId(spot_id))
        }
    }

    /// Returns the rendered image pixels buffer.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixbuf
    }

    /// Returns the canvas dimensions as `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Sets the background light level (dark pixel value).
    pub fn set_background(&mut self, level: Pixel) {
        self.background = level;
    }

    /// Sets the global brightness level (light spot intensity adjustment).
    pub fn set_brightness(&mut self, brightness: f64) {
        self.brightness = brightness;
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Canvas({}, {})", self.width, self.height)
    }
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("background", &self.background)
            .field("brightness", &self.brightness)
            .field("view", &self.view)
            .field("spots", &self.spots.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_canvas() {
        let w = 16;
        let h = 16;

        let c = Canvas::new(w, h).unwrap();
        assert_eq!(c.width, w);
        assert_eq!(c.height, h);

        let sz = c.pixels().len();
        assert_eq!(sz, (w * h) as usize);

        let dim = c.dimensions();
        assert_eq!(dim, (w, h));
    }

    #[test]
    fn reject_zero_dimensions() {
        assert_eq!(
            Canvas::new(0, 16).unwrap_err(),
            DimensionError { width: 0, height: 16 }
        );
        assert_eq!(
            Canvas::new(16, 0).unwrap_err(),
            DimensionError { width: 16, height: 0 }
        );
    }

    #[test]
    fn display_and_debug() {
        let c = Canvas::new(1024, 768).unwrap();
        assert_eq!(c.to_string(), "Canvas(1024, 768)");
    }

    #[test]
    fn add_spots() {
        let shape = SpotShape::default();
        let mut c = Canvas::new(16, 16).unwrap();

        let spot1 = c.add_spot((1.1, 4.3), shape, 0.5);
        let spot2 = c.add_spot((4.6, 7.2), shape, 0.4);

        assert_eq!(spot1.to_string(), "SpotId(0)");
        assert_eq!(spot2.to_string(), "SpotId(1)");
    }

    #[test]
    fn clear_canvas() {
        let mut c = Canvas::new(16, 16).unwrap();

        assert_eq!(c.pixels()[0], 0);

        c.set_background(100);
        c.clear();

        assert_eq!(c.pixels()[0], 100);

        c.set_background(200);
        c.draw();

        assert_eq!(c.pixels()[0], 200);
    }

    #[test]
    fn move_spots() {
        let shape = SpotShape::default();
        let mut c = Canvas::new(16, 16).unwrap();

        let spot1 = c.add_spot((1.1, 4.3), shape, 0.5);
        let spot2 = c.add_spot((4.6, 7.2), shape, 0.4);

        c.set_spot_offset(spot1, (-3.2, 4.2));
        c.set_spot_illumination(spot2, 1.3);

        assert_eq!(c.spot_position(spot1), Some((1.1 - 3.2, 4.3 + 4.2)));
        assert_eq!(c.spot_intensity(spot2), Some(0.4 * 1.3));

        // NOP: invalid handles are silently ignored.
        c.set_spot_offset(SpotId(55), (1.1, 1.2));
        c.set_spot_illumination(SpotId(33), 0.0);

        assert_eq!(c.spot_position(SpotId(55)), None);
        assert_eq!(c.spot_intensity(SpotId(33)), None);
    }

    #[test]
    fn view_transform_moves_spots() {
        let mut c = Canvas::new(1024, 1024).unwrap();
        let spot = c.add_spot((100.0, 100.0), SpotShape::default(), 1.0);

        assert_eq!(c.spot_position(spot), Some((100.0, 100.0)));

        c.set_view_transform(Transform::default().translate((10.0, -10.0)));
        assert_eq!(c.spot_position(spot), Some((110.0, 90.0)));
    }
}
