use egui::{Color32, Pos2};
use image::RgbaImage;

use crate::error::SketchError;
use crate::export;
use crate::import::ImportQueue;
use crate::session::{BACKGROUND, Mode, Session};
use crate::surface::Surface;
use crate::text::{STAMP_LINE_WIDTH, STAMP_TEXT_SIZE, TextStamper};

/// The drawing controller: translates input events into mutations of the
/// surface and the session state. One method per operation; all of them are
/// synchronous and run on the UI thread. Image decode is the single deferred
/// operation, handled through [`ImportQueue`] and applied in [`Self::poll_import`].
pub struct Controller {
    session: Session,
    surface: Surface,
    stamper: TextStamper,
    import: ImportQueue,
    /// Contents of the text field used by double-click stamping.
    text: String,
    /// Last recoverable problem or notable outcome, shown in the tools panel.
    status: Option<String>,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller {
    pub fn new() -> Self {
        Self {
            session: Session::new(),
            surface: Surface::new(),
            stamper: TextStamper::new(),
            import: ImportQueue::new(),
            text: String::new(),
            status: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Replace the session with persisted style state. Transient pointer state
    /// is reset so a restored session never starts mid-stroke.
    pub fn restore_session(&mut self, mut session: Session) {
        session.set_painting(false);
        session.set_cursor(None);
        self.session = session;
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn import_pending(&self) -> bool {
        self.import.is_pending()
    }

    // --- pointer operations ---------------------------------------------

    /// Extend the current stroke while painting; otherwise just reposition the
    /// stroke start. Always records the cursor position.
    pub fn pointer_moved(&mut self, pos: Pos2) {
        if self.session.is_painting() {
            if let Some(prev) = self.session.cursor() {
                self.surface.stroke_segment(
                    prev,
                    pos,
                    self.session.line_width(),
                    self.session.stroke_color(),
                );
            }
        }
        self.session.set_cursor(Some(pos));
    }

    /// Begin painting. Nothing is drawn until the pointer moves.
    pub fn pointer_pressed(&mut self, pos: Pos2) {
        if self.session.mode() == Mode::Draw {
            self.session.set_painting(true);
        }
        self.session.set_cursor(Some(pos));
    }

    /// Stop painting so the next press starts a disjoint stroke.
    pub fn pointer_released(&mut self) {
        self.session.set_painting(false);
    }

    /// The pointer left the surface: stop painting and forget the stroke
    /// start, so re-entry never connects to the old path.
    pub fn pointer_left(&mut self) {
        self.session.set_painting(false);
        self.session.set_cursor(None);
    }

    /// A plain click: floods the surface in Fill mode, does nothing in Draw
    /// mode (drawing is driven by pointer movement, not clicks).
    pub fn surface_clicked(&mut self, _pos: Pos2) {
        if self.session.mode() == Mode::Fill {
            self.surface.fill(self.session.fill_color());
        }
    }

    // --- style operations -----------------------------------------------

    /// Set both stroke and fill color, as the picker and swatches do.
    pub fn set_color(&mut self, color: Color32) {
        self.session.set_color(color);
    }

    /// A preset swatch was clicked. The picker reflects the change because it
    /// renders the session's color directly.
    pub fn select_swatch(&mut self, color: Color32) {
        self.session.set_color(color);
    }

    pub fn line_width_mut(&mut self) -> &mut f32 {
        self.session.line_width_mut()
    }

    /// Flip between Draw and Fill. The toggle button label is derived from the
    /// mode at render time.
    pub fn toggle_mode(&mut self) {
        self.session.toggle_mode();
        log::info!("mode switched to {:?}", self.session.mode());
    }

    /// Reset the surface to the background color, regardless of the current
    /// mode or fill color.
    pub fn clear_surface(&mut self) {
        self.surface.clear();
        log::info!("surface cleared");
    }

    /// Erasing repurposes the stroke path: paint with the background color in
    /// Draw mode. Idempotent; the fill color is left alone.
    pub fn use_eraser(&mut self) {
        self.session.set_stroke_color(BACKGROUND);
        self.session.set_mode(Mode::Draw);
        log::info!("eraser selected");
    }

    // --- text stamping ---------------------------------------------------

    /// Double-click: stamp the text field's contents at the click position in
    /// the fill color. The style state is snapshotted before the stamp and
    /// restored afterwards whether or not rasterization succeeds, so stamping
    /// never leaks the temporary thin line width.
    pub fn stamp_text_at(&mut self, pos: Pos2) {
        if self.text.is_empty() {
            return;
        }

        let snapshot = self.session.snapshot();
        self.session.set_line_width(STAMP_LINE_WIDTH);
        let result = self.stamper.stamp(
            &mut self.surface,
            &self.text,
            pos,
            self.session.fill_color(),
            STAMP_TEXT_SIZE,
        );
        self.session.restore(snapshot);

        if let Err(err) = result {
            self.report(&err);
        }
    }

    // --- import / export -------------------------------------------------

    /// Open the file picker and start decoding the chosen image in the
    /// background. The decoded pixels arrive through [`Self::poll_import`].
    #[cfg(not(target_arch = "wasm32"))]
    pub fn request_import(&mut self) {
        let picked = rfd::FileDialog::new()
            .set_title("Import image")
            .add_filter("Images", crate::import::IMAGE_EXTENSIONS)
            .pick_file();
        let Some(path) = picked else {
            return;
        };
        match crate::import::validate(&path) {
            Ok(()) => {
                self.status = None;
                self.import.request(path);
            }
            Err(err) => self.report(&err),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn request_import(&mut self) {
        self.status = Some("image import is not available in the web build".to_owned());
    }

    /// Apply a finished background decode, if any. Called once per frame.
    /// Returns true when the surface changed.
    pub fn poll_import(&mut self) -> bool {
        match self.import.poll() {
            Some(Ok(img)) => {
                self.apply_imported(&img);
                true
            }
            Some(Err(err)) => {
                self.report(&err);
                false
            }
            None => false,
        }
    }

    /// Stretch a decoded image over the whole surface. The pending-import
    /// state is already cleared by the queue, so the same file can be picked
    /// again immediately.
    pub fn apply_imported(&mut self, img: &RgbaImage) {
        self.surface.blit_stretched(img);
        log::info!("imported image applied ({}x{})", img.width(), img.height());
    }

    /// Encode the surface as JPEG and write `my_drawing.jpg`.
    pub fn export_drawing(&mut self) {
        match export::export(&self.surface) {
            Ok(path) => self.status = Some(format!("saved {}", path.display())),
            Err(err) => self.report(&err),
        }
    }

    fn report(&mut self, err: &SketchError) {
        log::warn!("{err}");
        self.status = Some(err.to_string());
    }
}
