use crate::SketchApp;
use crate::input;
use crate::surface::SURFACE_SIZE;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let side = SURFACE_SIZE as f32;
        let (response, painter) =
            ui.allocate_painter(egui::vec2(side, side), egui::Sense::click_and_drag());
        let canvas_rect = response.rect;

        // Upload the pixel buffer only when it changed, then draw it 1:1.
        let texture_id = app.canvas_texture(ui.ctx());
        let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        painter.image(texture_id, canvas_rect, uv, egui::Color32::WHITE);

        for event in app.surface_events(ctx, canvas_rect) {
            input::route_event(&event, app.controller_mut());
        }
    });
}
