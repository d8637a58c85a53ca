use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::error::SketchError;
use crate::surface::Surface;

/// Fixed output filename. The payload is real JPEG, so the extension matches
/// the encoded bytes.
pub const EXPORT_FILE_NAME: &str = "my_drawing.jpg";

/// Encode the surface as JPEG and write it next to the working directory,
/// without a confirmation dialog. Returns the written path.
pub fn export(surface: &Surface) -> Result<PathBuf, SketchError> {
    let path = PathBuf::from(EXPORT_FILE_NAME);
    export_to(surface, &path)?;
    Ok(path)
}

/// Encode the surface as JPEG at an explicit path.
///
/// JPEG carries no alpha channel; the surface is opaque anyway, so flattening
/// RGBA to RGB is lossless here.
pub fn export_to(surface: &Surface, path: &Path) -> Result<(), SketchError> {
    let rgb = DynamicImage::ImageRgba8(surface.image().clone()).to_rgb8();
    rgb.save_with_format(path, image::ImageFormat::Jpeg)
        .map_err(|source| SketchError::Export {
            path: path.to_path_buf(),
            source,
        })?;
    log::info!("exported drawing to {}", path.display());
    Ok(())
}
