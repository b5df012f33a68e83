use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use image::imageops::FilterType;
use image::{ImageReader, RgbaImage};

use crate::catalog::models::GameEntry;

/// Decoded icon, already scaled into the bounding box.
#[derive(Debug)]
pub struct Thumbnail {
    pub source: PathBuf,
    pub pixels: RgbaImage,
}

impl Thumbnail {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

/// Icons decoded so far, keyed by absolute resolved path. Lives as long as the
/// window.
#[derive(Debug)]
pub struct ThumbnailCache {
    images_dir: PathBuf,
    bounds: (u32, u32),
    entries: HashMap<PathBuf, Option<Rc<Thumbnail>>>,
}

impl ThumbnailCache {
    pub fn new(images_dir: impl Into<PathBuf>, bounds: (u32, u32)) -> Self {
        Self {
            images_dir: images_dir.into(),
            bounds,
            entries: HashMap::new(),
        }
    }

    /// `None` means there is no usable icon for this entry.
    pub fn resolve_icon(&mut self, entry: &GameEntry) -> Option<Rc<Thumbnail>> {
        let path = icon_path(&self.images_dir, entry)?;
        if !path.exists() {
            return None;
        }
        let path = std::path::absolute(&path).unwrap_or(path);

        if let Some(cached) = self.entries.get(&path) {
            return cached.clone();
        }

        let decoded = match make_thumbnail(&path, self.bounds) {
            Ok(pixels) => Some(Rc::new(Thumbnail {
                source: path.clone(),
                pixels,
            })),
            Err(error) => {
                log::debug!("no icon for {:?}: {error}", entry.display_name());
                None
            }
        };
        self.entries.insert(path, decoded.clone());
        decoded
    }
}

/// Effective icon path; relative references live under `images_dir`.
pub fn icon_path(images_dir: &Path, entry: &GameEntry) -> Option<PathBuf> {
    let image = entry.image.as_deref().filter(|image| !image.is_empty())?;
    let path = Path::new(image);
    if path.is_absolute() {
        Some(path.to_path_buf())
    } else {
        Some(images_dir.join(path))
    }
}

fn make_thumbnail(path: &Path, bounds: (u32, u32)) -> Result<RgbaImage, String> {
    let image = ImageReader::open(path)
        .map_err(|error| format!("failed to open icon {:?}: {error}", path))?
        .with_guessed_format()
        .map_err(|error| format!("failed to detect icon format {:?}: {error}", path))?
        .decode()
        .map_err(|error| format!("failed to decode icon {:?}: {error}", path))?;

    let (max_width, max_height) = bounds;
    if image.width() <= max_width && image.height() <= max_height {
        return Ok(image.to_rgba8());
    }

    Ok(image
        .resize(max_width, max_height, FilterType::Lanczos3)
        .to_rgba8())
}
