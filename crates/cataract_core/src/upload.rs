//! Upload validation and in-memory decoding.

use crate::config::UploadLimits;
use crate::error::UploadError;
use anyhow::Context;
use image::{ImageFormat, RgbaImage};
use std::path::Path;

const FALLBACK_MIME: &str = "application/octet-stream";

/// A file handed over by the picker or a drop, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl UploadedImage {
    /// Builds an upload, falling back to the file extension when the host did
    /// not report a MIME type.
    pub fn new(name: impl Into<String>, mime: Option<&str>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let mime = match mime.map(str::trim) {
            Some(m) if !m.is_empty() => m.to_ascii_lowercase(),
            _ => mime_from_name(&name).to_string(),
        };
        Self { name, mime, bytes }
    }

    /// Reads a file picked from disk.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::new(name, None, bytes))
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Type is checked before size, mirroring the order users see the alerts.
    pub fn validate(&self, limits: UploadLimits) -> Result<(), UploadError> {
        if !self.mime.starts_with("image/") {
            return Err(UploadError::InvalidFileType {
                mime: self.mime.clone(),
            });
        }
        if self.size() > limits.max_bytes {
            return Err(UploadError::FileTooLarge {
                size: self.size(),
                limit: limits.max_bytes,
            });
        }
        Ok(())
    }

    pub fn decode(&self) -> Result<DecodedImage, UploadError> {
        let img = image::load_from_memory(&self.bytes)?;
        Ok(DecodedImage::new(img.to_rgba8()))
    }
}

/// Pixels of an accepted upload at their natural size.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    pixels: RgbaImage,
}

impl DecodedImage {
    pub fn new(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

/// Accepts exactly one file out of a picker selection or drop.
pub fn select_single<T>(files: Vec<T>) -> Result<T, UploadError> {
    let count = files.len();
    let mut files = files.into_iter();
    match (files.next(), count) {
        (None, _) => Err(UploadError::NoFile),
        (Some(file), 1) => Ok(file),
        (Some(_), count) => Err(UploadError::MultipleFiles { count }),
    }
}

fn mime_from_name(name: &str) -> &'static str {
    ImageFormat::from_path(name)
        .map(|f| f.to_mime_type())
        .unwrap_or(FALLBACK_MIME)
}
