use eframe_sketch::Surface;
use eframe_sketch::session::BACKGROUND;
use eframe_sketch::surface::SURFACE_SIZE;
use egui::{Color32, Pos2};
use image::{Rgba, RgbaImage};

fn painted_pixels(surface: &Surface) -> usize {
    surface
        .image()
        .pixels()
        .filter(|p| p.0 != [255, 255, 255, 255])
        .count()
}

#[test]
fn fresh_surface_is_800_by_800_background() {
    let surface = Surface::new();
    assert_eq!(surface.width(), SURFACE_SIZE);
    assert_eq!(surface.height(), SURFACE_SIZE);
    assert!(surface.is_uniform(BACKGROUND));
}

#[test]
fn stroke_segment_paints_along_the_path() {
    let mut surface = Surface::new();
    surface.stroke_segment(
        Pos2::new(100.0, 100.0),
        Pos2::new(200.0, 100.0),
        4.0,
        Color32::RED,
    );

    // On the line.
    assert_eq!(surface.pixel(150, 100), Color32::RED);
    // Far away from it.
    assert_eq!(surface.pixel(150, 300), Color32::WHITE);
    assert!(painted_pixels(&surface) > 0);
}

#[test]
fn stroke_width_controls_the_painted_radius() {
    let mut surface = Surface::new();
    surface.stroke_segment(
        Pos2::new(100.0, 400.0),
        Pos2::new(300.0, 400.0),
        20.0,
        Color32::BLACK,
    );
    // 8 px off-axis is inside a radius-10 stroke.
    assert_eq!(surface.pixel(200, 408), Color32::BLACK);

    let mut thin = Surface::new();
    thin.stroke_segment(
        Pos2::new(100.0, 400.0),
        Pos2::new(300.0, 400.0),
        2.0,
        Color32::BLACK,
    );
    // ...but outside a radius-1 stroke.
    assert_eq!(thin.pixel(200, 408), Color32::WHITE);
}

#[test]
fn zero_length_segment_stamps_a_round_dot() {
    let mut surface = Surface::new();
    let center = Pos2::new(400.0, 400.0);
    surface.stroke_segment(center, center, 10.0, Color32::BLUE);
    assert_eq!(surface.pixel(400, 400), Color32::BLUE);
    assert_eq!(surface.pixel(400, 403), Color32::BLUE);
    assert_eq!(surface.pixel(420, 400), Color32::WHITE);
}

#[test]
fn strokes_outside_the_bounds_are_clipped() {
    let mut surface = Surface::new();
    surface.stroke_segment(
        Pos2::new(-50.0, -50.0),
        Pos2::new(850.0, 850.0),
        10.0,
        Color32::BLACK,
    );
    // Crosses the surface diagonally without panicking.
    assert_eq!(surface.pixel(400, 400), Color32::BLACK);

    let mut far = Surface::new();
    far.stroke_segment(
        Pos2::new(-500.0, -500.0),
        Pos2::new(-400.0, -400.0),
        10.0,
        Color32::BLACK,
    );
    assert!(far.is_uniform(BACKGROUND));
}

#[test]
fn fill_overwrites_every_pixel() {
    let mut surface = Surface::new();
    surface.stroke_segment(
        Pos2::new(0.0, 0.0),
        Pos2::new(799.0, 799.0),
        8.0,
        Color32::GREEN,
    );
    surface.fill(Color32::RED);
    assert!(surface.is_uniform(Color32::RED));
}

#[test]
fn clear_resets_to_background_regardless_of_fill_history() {
    let mut surface = Surface::new();
    surface.fill(Color32::RED);
    surface.clear();
    assert!(surface.is_uniform(BACKGROUND));
}

#[test]
fn blit_stretches_the_image_over_the_whole_surface() {
    let mut surface = Surface::new();
    let src = RgbaImage::from_pixel(2, 3, Rgba([0, 0, 255, 255]));
    surface.blit_stretched(&src);

    let blue = Color32::from_rgb(0, 0, 255);
    assert_eq!(surface.pixel(0, 0), blue);
    assert_eq!(surface.pixel(799, 0), blue);
    assert_eq!(surface.pixel(0, 799), blue);
    assert_eq!(surface.pixel(799, 799), blue);
    assert_eq!(surface.pixel(400, 400), blue);
    assert!(surface.is_uniform(blue));
}

#[test]
fn blit_composites_source_alpha_over_existing_pixels() {
    let mut surface = Surface::new();
    let src = RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 128]));
    surface.blit_stretched(&src);

    // Half-transparent red over white lightens the green/blue channels.
    let blended = surface.pixel(400, 400);
    assert_eq!(blended.r(), 255);
    assert!(blended.g() > 100 && blended.g() < 160);
    assert_eq!(blended.g(), blended.b());
}

#[test]
fn dirty_flag_tracks_mutations() {
    let mut surface = Surface::new();
    // A fresh surface needs one initial upload.
    assert!(surface.take_dirty());
    assert!(!surface.take_dirty());

    surface.stroke_segment(
        Pos2::new(10.0, 10.0),
        Pos2::new(20.0, 20.0),
        2.0,
        Color32::BLACK,
    );
    assert!(surface.take_dirty());

    surface.fill(Color32::RED);
    assert!(surface.take_dirty());
    assert!(!surface.take_dirty());
}

#[test]
fn color_image_matches_the_pixel_buffer() {
    let mut surface = Surface::new();
    surface.fill(Color32::RED);
    let img = surface.to_color_image();
    assert_eq!(img.size, [800, 800]);
    assert_eq!(img.pixels[0], Color32::RED);
    assert_eq!(img.pixels[img.pixels.len() - 1], Color32::RED);
}
