use crate::controller::Controller;
use crate::input::InputHandler;
use crate::panels;
use crate::session::Session;

/// The eframe application: owns the controller, the input translation and the
/// canvas texture. The session's style state is persisted across restarts
/// through eframe storage; everything else starts fresh.
pub struct SketchApp {
    controller: Controller,
    input: InputHandler,
    // Texture holding the surface pixels; created lazily on the first frame.
    canvas_texture: Option<egui::TextureHandle>,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut controller = Controller::new();
        if let Some(storage) = cc.storage {
            if let Some(session) = eframe::get_value::<Session>(storage, eframe::APP_KEY) {
                controller.restore_session(session);
            }
        }
        Self {
            controller,
            input: InputHandler::new(),
            canvas_texture: None,
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut Controller {
        &mut self.controller
    }

    /// Texture id for the surface, re-uploading the pixels when they changed.
    pub fn canvas_texture(&mut self, ctx: &egui::Context) -> egui::TextureId {
        let dirty = self.controller.surface_mut().take_dirty();
        match &mut self.canvas_texture {
            Some(texture) => {
                if dirty {
                    texture.set(
                        self.controller.surface().to_color_image(),
                        egui::TextureOptions::NEAREST,
                    );
                }
                texture.id()
            }
            None => {
                let texture = ctx.load_texture(
                    "surface",
                    self.controller.surface().to_color_image(),
                    egui::TextureOptions::NEAREST,
                );
                let id = texture.id();
                self.canvas_texture = Some(texture);
                id
            }
        }
    }

    /// Translate this frame's pointer input into surface events.
    pub fn surface_events(
        &mut self,
        ctx: &egui::Context,
        canvas_rect: egui::Rect,
    ) -> Vec<crate::input::InputEvent> {
        self.input.process_input(ctx, canvas_rect)
    }
}

impl eframe::App for SketchApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self.controller.session());
    }

    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply a finished image decode before drawing this frame.
        if self.controller.poll_import() {
            ctx.request_repaint();
        }
        if self.controller.import_pending() {
            // Keep polling while the decode thread is running.
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }

        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}
