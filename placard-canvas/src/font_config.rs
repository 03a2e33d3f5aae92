use crate::error::{CanvasError, CanvasResult};
use std::path::{Path, PathBuf};

/// Font file used for size labels, relative to the process working directory.
pub const DEFAULT_FONT_PATH: &str = "Roboto-Black.ttf";

/// Backend-agnostic description of the label typeface.
///
/// Converted into a concrete font database once via [`FontConfig::resolve`].
#[derive(Clone, Debug)]
pub struct FontConfig {
    /// Path of the TrueType/OpenType file holding the label face.
    pub font_path: PathBuf,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
        }
    }
}

impl FontConfig {
    /// Read and parse the configured font file.
    ///
    /// This performs the only file I/O of the rendering path. The resulting
    /// [`ResolvedFontConfig`] is read-only and can be shared between any number
    /// of canvases.
    pub fn resolve(&self) -> CanvasResult<ResolvedFontConfig> {
        let data = std::fs::read(&self.font_path).map_err(|err| CanvasError::FontLoad {
            path: self.font_path.clone(),
            reason: err.to_string(),
        })?;
        ResolvedFontConfig::load(data, &self.font_path)
    }
}

/// A [`FontConfig`] that has been resolved into a concrete font database.
///
/// The database holds exactly one face, the label face. Cloning copies the
/// face index only; the font bytes themselves are reference counted by
/// `fontdb`.
#[derive(Clone)]
pub struct ResolvedFontConfig {
    pub(crate) fontdb: fontdb::Database,
    pub(crate) family: Option<String>,
    pub(crate) weight: fontdb::Weight,
}

impl ResolvedFontConfig {
    /// Register in-memory font bytes as the label face.
    pub fn from_font_data(data: Vec<u8>) -> CanvasResult<Self> {
        Self::load(data, Path::new("<memory>"))
    }

    /// A configuration without any face. Every label render against it fails.
    pub fn empty() -> Self {
        Self {
            fontdb: fontdb::Database::new(),
            family: None,
            weight: fontdb::Weight::NORMAL,
        }
    }

    /// Family name of the label face, if one is loaded.
    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }

    /// Number of faces available for rendering.
    pub fn face_count(&self) -> usize {
        self.fontdb.faces().count()
    }

    fn load(data: Vec<u8>, origin: &Path) -> CanvasResult<Self> {
        let mut db = fontdb::Database::new();
        db.load_font_data(data);

        // fontdb silently skips data it cannot parse
        let face = db.faces().next().ok_or_else(|| CanvasError::FontLoad {
            path: origin.to_path_buf(),
            reason: "no parseable font face".to_string(),
        })?;
        let family = face
            .families
            .first()
            .map(|(name, _lang)| name.clone())
            .ok_or_else(|| CanvasError::FontLoad {
                path: origin.to_path_buf(),
                reason: "font face has no family name".to_string(),
            })?;
        let weight = face.weight;

        log::debug!(target: "canvas", "loaded label face \"{}\" weight {}", family, weight.0);

        Ok(Self {
            fontdb: db,
            family: Some(family),
            weight,
        })
    }
}
