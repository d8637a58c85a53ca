use egui::{Context, PointerButton, Pos2, Rect};

mod router;
pub use router::route_event;

/// Pointer events on the drawing surface, with positions already translated
/// into surface-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed inside the surface.
    PointerDown { pos: Pos2 },
    /// Primary button released inside the surface.
    PointerUp { pos: Pos2 },
    /// Pointer moved while inside the surface.
    PointerMove { pos: Pos2 },
    /// Pointer left the surface bounds (or the window).
    PointerLeave,
    /// A completed click (press and release without a drag).
    Click { pos: Pos2 },
    /// A completed double-click.
    DoubleClick { pos: Pos2 },
}

/// Converts raw egui pointer state into surface-local [`InputEvent`]s.
///
/// Only events inside the canvas rect are reported; crossing the boundary
/// emits a `PointerLeave`, matching the surface's pointer-leave semantics.
pub struct InputHandler {
    last_pos: Option<Pos2>,
    was_inside: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            last_pos: None,
            was_inside: false,
        }
    }

    /// Process this frame's pointer input against the canvas rect.
    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let hover = input.pointer.hover_pos();
            let inside = hover.is_some_and(|pos| canvas_rect.contains(pos));

            match (hover, inside) {
                (Some(pos), true) => {
                    let local = to_local(pos, canvas_rect);

                    // Movement first, then presses, so a press lands on an
                    // up-to-date stroke start.
                    if Some(pos) != self.last_pos {
                        events.push(InputEvent::PointerMove { pos: local });
                    }
                    if input.pointer.button_pressed(PointerButton::Primary) {
                        events.push(InputEvent::PointerDown { pos: local });
                    }
                    if input.pointer.button_released(PointerButton::Primary) {
                        events.push(InputEvent::PointerUp { pos: local });
                    }
                    if input.pointer.button_clicked(PointerButton::Primary) {
                        events.push(InputEvent::Click { pos: local });
                    }
                    if input.pointer.button_double_clicked(PointerButton::Primary) {
                        events.push(InputEvent::DoubleClick { pos: local });
                    }
                }
                _ => {
                    if self.was_inside {
                        events.push(InputEvent::PointerLeave);
                    }
                }
            }

            self.last_pos = hover;
            self.was_inside = inside;
        });

        events
    }
}

fn to_local(pos: Pos2, canvas_rect: Rect) -> Pos2 {
    Pos2::new(pos.x - canvas_rect.min.x, pos.y - canvas_rect.min.y)
}
