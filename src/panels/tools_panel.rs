use crate::SketchApp;
use crate::session::SWATCHES;

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(220.0)
        .show(ctx, |ui| {
            let controller = app.controller_mut();

            ui.heading("Sketch");
            ui.separator();

            ui.horizontal(|ui| {
                // Label names the mode the next click switches to.
                if ui.button(controller.session().toggle_label()).clicked() {
                    controller.toggle_mode();
                }
                if ui.button("Clear").clicked() {
                    controller.clear_surface();
                }
                if ui.button("Eraser").clicked() {
                    controller.use_eraser();
                }
            });

            ui.separator();

            ui.label("Swatches:");
            ui.horizontal_wrapped(|ui| {
                for &swatch in &SWATCHES {
                    let button = egui::Button::new("")
                        .fill(swatch)
                        .min_size(egui::vec2(22.0, 22.0));
                    if ui.add(button).clicked() {
                        controller.select_swatch(swatch);
                    }
                }
            });

            // The picker renders the session's color directly, so a swatch
            // click is reflected here without extra bookkeeping.
            ui.horizontal(|ui| {
                ui.label("Color:");
                let mut color = controller.session().stroke_color();
                let picker = egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut color,
                    egui::color_picker::Alpha::Opaque,
                );
                if picker.changed() {
                    controller.set_color(color);
                }
            });

            ui.horizontal(|ui| {
                ui.label("Width:");
                ui.add(egui::Slider::new(controller.line_width_mut(), 1.0..=50.0));
            });

            ui.separator();

            ui.label("Text (double-click the canvas to stamp):");
            ui.text_edit_singleline(controller.text_mut());

            ui.separator();

            ui.horizontal(|ui| {
                let import = ui.add_enabled(
                    !controller.import_pending(),
                    egui::Button::new("Import image"),
                );
                if import.clicked() {
                    controller.request_import();
                }
                if ui.button("Save").clicked() {
                    controller.export_drawing();
                }
            });
            if controller.import_pending() {
                ui.weak("decoding image...");
            }

            if let Some(status) = controller.status() {
                ui.separator();
                ui.weak(status);
            }
        });
}
