use crate::controller::Controller;

use super::InputEvent;

/// Dispatch one surface event to the controller operation it triggers.
pub fn route_event(event: &InputEvent, controller: &mut Controller) {
    match *event {
        InputEvent::PointerDown { pos } => controller.pointer_pressed(pos),
        InputEvent::PointerMove { pos } => controller.pointer_moved(pos),
        InputEvent::PointerUp { .. } => controller.pointer_released(),
        InputEvent::PointerLeave => controller.pointer_left(),
        InputEvent::Click { pos } => controller.surface_clicked(pos),
        InputEvent::DoubleClick { pos } => controller.stamp_text_at(pos),
    }
}
