use eframe_sketch::session::{BACKGROUND, DEFAULT_LINE_WIDTH, SWATCHES};
use eframe_sketch::{LineCap, Mode, Session};
use egui::Color32;

#[test]
fn defaults_match_the_initial_controls() {
    let session = Session::new();
    assert_eq!(session.stroke_color(), Color32::BLACK);
    assert_eq!(session.fill_color(), Color32::BLACK);
    assert_eq!(session.line_width(), DEFAULT_LINE_WIDTH);
    assert_eq!(session.line_cap(), LineCap::Round);
    assert_eq!(session.mode(), Mode::Draw);
    assert!(!session.is_painting());
    assert!(session.cursor().is_none());
}

#[test]
fn toggling_mode_twice_round_trips_mode_and_label() {
    let mut session = Session::new();
    let initial_mode = session.mode();
    let initial_label = session.toggle_label();

    session.toggle_mode();
    assert_eq!(session.mode(), Mode::Fill);
    assert_eq!(session.toggle_label(), "Draw");

    session.toggle_mode();
    assert_eq!(session.mode(), initial_mode);
    assert_eq!(session.toggle_label(), initial_label);
}

#[test]
fn toggle_label_names_the_next_mode() {
    let mut session = Session::new();
    assert_eq!(session.mode(), Mode::Draw);
    assert_eq!(session.toggle_label(), "Fill");

    session.set_mode(Mode::Fill);
    assert_eq!(session.toggle_label(), "Draw");
}

#[test]
fn set_color_updates_both_stroke_and_fill() {
    let mut session = Session::new();
    session.set_color(Color32::RED);
    assert_eq!(session.stroke_color(), Color32::RED);
    assert_eq!(session.fill_color(), Color32::RED);
}

#[test]
fn set_stroke_color_leaves_fill_alone() {
    let mut session = Session::new();
    session.set_color(Color32::RED);
    session.set_stroke_color(BACKGROUND);
    assert_eq!(session.stroke_color(), BACKGROUND);
    assert_eq!(session.fill_color(), Color32::RED);
}

#[test]
fn snapshot_restores_exactly() {
    let mut session = Session::new();
    session.set_color(Color32::BLUE);
    session.set_line_width(20.0);

    let snapshot = session.snapshot();
    session.set_line_width(1.0);
    session.set_color(Color32::GREEN);
    session.restore(snapshot);

    assert_eq!(session.stroke_color(), Color32::BLUE);
    assert_eq!(session.fill_color(), Color32::BLUE);
    assert_eq!(session.line_width(), 20.0);
}

#[test]
fn line_width_stays_positive() {
    let mut session = Session::new();
    session.set_line_width(-3.0);
    assert!(session.line_width() > 0.0);
}

#[test]
fn swatches_are_distinct_presets() {
    // A swatch row with duplicates would be a UI bug.
    for (i, a) in SWATCHES.iter().enumerate() {
        for b in SWATCHES.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}
