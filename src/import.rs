use std::path::{Path, PathBuf};
use std::sync::mpsc;

use image::RgbaImage;

use crate::error::SketchError;

/// Extensions the import path accepts, mirrored by the file-picker filter.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Reject files that do not carry an image extension. The picker already
/// filters, but a path can still arrive with "all files" selected.
pub fn validate(path: &Path) -> Result<(), SketchError> {
    let ext = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase());
    match ext {
        Some(ext) if IMAGE_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
        _ => Err(SketchError::UnsupportedFile(path.to_path_buf())),
    }
}

struct Decoded {
    generation: u64,
    result: Result<RgbaImage, SketchError>,
}

/// Two-phase image import: decoding runs on a background thread and the
/// decoded pixels are applied to the surface on the UI thread once `poll`
/// picks them up.
///
/// Each request bumps a generation counter carried through the channel, so a
/// newer request supersedes an in-flight one: stale completions are dropped.
pub struct ImportQueue {
    rx: Option<mpsc::Receiver<Decoded>>,
    generation: u64,
}

impl Default for ImportQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportQueue {
    pub fn new() -> Self {
        Self {
            rx: None,
            generation: 0,
        }
    }

    /// True while a decode is in flight.
    pub fn is_pending(&self) -> bool {
        self.rx.is_some()
    }

    /// Start decoding `path` in the background. Any earlier in-flight decode
    /// is superseded.
    pub fn request(&mut self, path: PathBuf) {
        self.generation += 1;
        let generation = self.generation;
        let (tx, rx) = mpsc::channel();
        self.rx = Some(rx);

        log::info!("decoding {} (request #{generation})", path.display());
        std::thread::spawn(move || {
            let result = decode(&path);
            // The receiver may already have been replaced by a newer request.
            let _ = tx.send(Decoded { generation, result });
        });
    }

    /// Collect a finished decode, if any. Completions from superseded requests
    /// are discarded.
    pub fn poll(&mut self) -> Option<Result<RgbaImage, SketchError>> {
        let rx = self.rx.as_ref()?;
        match rx.try_recv() {
            Ok(decoded) => {
                self.rx = None;
                if decoded.generation == self.generation {
                    Some(decoded.result)
                } else {
                    log::debug!("dropping superseded decode #{}", decoded.generation);
                    None
                }
            }
            Err(mpsc::TryRecvError::Empty) => None,
            Err(mpsc::TryRecvError::Disconnected) => {
                self.rx = None;
                None
            }
        }
    }
}

fn decode(path: &Path) -> Result<RgbaImage, SketchError> {
    let bytes = std::fs::read(path).map_err(|source| SketchError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let image = image::load_from_memory(&bytes)?;
    log::debug!(
        "decoded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image.to_rgba8())
}
