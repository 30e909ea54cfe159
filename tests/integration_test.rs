//! Starfield crate integration tests

use starfield::{Canvas, ImageFormat, SpotShape, Transform, Window};

/// Creates a 256x256 canvas image for all export tests.
fn mkimage() -> Canvas {
    let mut c = Canvas::new(256, 256).unwrap();
    c.set_background(5000);

    let shape1 = SpotShape::default().scale(3.5);
    let shape2 = SpotShape::default().scale(5.5);

    c.add_spot((180.5, 150.7), shape1, 0.8);
    c.add_spot((100.5, 110.7), shape2, 0.6);

    c.draw();
    c
}

#[test]
fn canvas_dimensions_and_display() {
    let c = Canvas::new(1024, 768).unwrap();
    assert_eq!(c.to_string(), "Canvas(1024, 768)");
    assert_eq!(c.dimensions(), (1024, 768));

    assert!(Canvas::new(0, 768).is_err());
    assert!(Canvas::new(1024, 0).is_err());
}

#[test]
fn spot_ids_and_intensity_pipeline() {
    let mut c = Canvas::new(512, 512).unwrap();

    let spot1 = c.add_spot((100.5, 200.25), SpotShape::default(), 0.9);
    let spot2 = c.add_spot((400.5, 600.75), SpotShape::default(), 0.6);

    assert_eq!(spot1.to_string(), "SpotId(0)");
    assert_eq!(spot2.to_string(), "SpotId(1)");

    c.set_spot_offset(spot2, (5.5, -7.0));
    c.set_spot_illumination(spot2, 0.5);
    c.set_brightness(0.8);

    assert_eq!(c.spot_position(spot2), Some((406.0, 593.75)));
    assert_eq!(c.spot_intensity(spot2), Some(0.6 * 0.5 * 0.8));
}

#[test]
fn view_transform_maps_spot_positions() {
    let mut c = Canvas::new(1024, 1024).unwrap();

    let spot1 = c.add_spot((100.5, 200.25), SpotShape::from_matrix(1.0, -0.5, 0.5, 1.5), 1.0);
    let spot2 = c.add_spot((400.5, 600.75), SpotShape::default(), 1.0);
    c.set_spot_offset(spot2, (5.5, -7.0));

    let view = Transform::from_translation((-100.0, 200.0))
        .rotate(45.0)
        .compose(&Transform::from_matrix2x2(-1.0, 0.0, 0.0, 1.0));
    c.set_view_transform(view);

    let (x1, y1) = c.spot_position(spot1).unwrap();
    assert!((x1 - 282.6659).abs() < 1e-4, "x1 = {}", x1);
    assert!((y1 - 283.3730).abs() < 1e-4, "y1 = {}", y1);

    let (x2, y2) = c.spot_position(spot2).unwrap();
    assert!((x2 - 344.8913).abs() < 1e-4, "x2 = {}", x2);
    assert!((y2 - 777.6407).abs() < 1e-4, "y2 = {}", y2);
}

#[test]
fn export_raw8bpp() {
    let img = mkimage().export_image(ImageFormat::RawGamma8Bpp).unwrap();
    assert_eq!(img.len(), 65536);
    assert_eq!(img[0], 78);
    assert_eq!(img[65535], 78);
}

#[test]
fn export_raw10bpp() {
    let img = mkimage()
        .export_image(ImageFormat::RawLinear10BppLE)
        .unwrap();
    assert_eq!(img.len(), 131072);
    assert_eq!(img[0], 78);
    assert_eq!(img[1], 0);
}

#[test]
fn export_raw12bpp() {
    let img = mkimage()
        .export_image(ImageFormat::RawLinear12BppLE)
        .unwrap();
    assert_eq!(img.len(), 131072);
    assert_eq!(img[0], 56);
    assert_eq!(img[1], 1);
}

#[test]
fn export_window_raw8bpp() {
    let wnd = Window::new(32, 16).at(170, 140);

    let img = mkimage()
        .export_window_image(wnd, ImageFormat::RawGamma8Bpp)
        .unwrap();
    assert_eq!(img.len(), 512);
}

#[test]
fn export_window_raw10bpp() {
    let wnd = Window::new(32, 16).at(170, 140);

    let img = mkimage()
        .export_window_image(wnd, ImageFormat::RawLinear10BppLE)
        .unwrap();
    assert_eq!(img.len(), 1024);
}

#[test]
fn export_window_raw12bpp() {
    let wnd = Window::new(32, 16).at(90, 100);

    let img = mkimage()
        .export_window_image(wnd, ImageFormat::RawLinear12BppLE)
        .unwrap();
    assert_eq!(img.len(), 1024);
}

#[test]
#[cfg(feature = "png")]
fn export_png8bpp() {
    let img = mkimage().export_image(ImageFormat::PngGamma8Bpp).unwrap();
    assert_eq!(img.len(), 949);
}

#[test]
#[cfg(feature = "png")]
fn export_png16bpp() {
    let img = mkimage().export_image(ImageFormat::PngLinear16Bpp).unwrap();
    assert_eq!(img.len(), 1816);
}

#[test]
#[cfg(feature = "png")]
fn export_window_png8bpp() {
    let wnd = Window::new(32, 16).at(170, 140);

    let img = mkimage()
        .export_window_image(wnd, ImageFormat::PngGamma8Bpp)
        .unwrap();
    assert_eq!(img.len(), 250);
}

#[test]
#[cfg(feature = "png")]
fn export_window_png16bpp() {
    let wnd = Window::new(32, 16).at(90, 100);

    let img = mkimage()
        .export_window_image(wnd, ImageFormat::PngLinear16Bpp)
        .unwrap();
    assert_eq!(img.len(), 664);
}

#[test]
fn export_window_straddling_canvas_edge_reads_zero() {
    let wnd = Window::new(32, 32).at(240, 240);

    let img = mkimage()
        .export_window_image(wnd, ImageFormat::RawGamma8Bpp)
        .unwrap();
    assert_eq!(img.len(), 1024);
    assert_eq!(img[1023], 0);
}

#[test]
#[cfg(not(feature = "png"))]
fn png_formats_unavailable_without_feature() {
    let c = Canvas::new(4, 4).unwrap();
    assert!(c.export_image(ImageFormat::PngGamma8Bpp).is_err());
    assert!(c.export_image(ImageFormat::PngLinear16Bpp).is_err());
}
