//! Inline images carried as `data:` URIs.

use std::fmt;
use std::path::Path;

use base64::Engine;

#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("invalid data URI: {0}")]
    InvalidDataUri(String),
    #[error("unsupported image type: {0}")]
    UnsupportedType(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A single image encoded as `data:<mime>;base64,<payload>`.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageData(String);

impl ImageData {
    /// Accept an existing data URI. It must use the `data:` scheme and
    /// carry a non-empty payload after the first comma.
    pub fn from_data_uri(uri: impl Into<String>) -> Result<Self, ImageError> {
        let uri = uri.into();
        if !uri.starts_with("data:") {
            return Err(ImageError::InvalidDataUri("missing data: scheme".into()));
        }
        match uri.split_once(',') {
            Some((_, payload)) if !payload.is_empty() => Ok(Self(uri)),
            Some(_) => Err(ImageError::InvalidDataUri("empty payload".into())),
            None => Err(ImageError::InvalidDataUri("missing ',' separator".into())),
        }
    }

    /// Base64-encode raw bytes into a data URI.
    pub fn from_bytes(mime: &str, bytes: &[u8]) -> Self {
        let payload = base64::engine::general_purpose::STANDARD.encode(bytes);
        Self(format!("data:{mime};base64,{payload}"))
    }

    /// Read an image file, inferring the mime type from its extension.
    pub fn from_path(path: &Path) -> Result<Self, ImageError> {
        let mime = mime_for_path(path)?;
        let bytes = std::fs::read(path)?;
        Ok(Self::from_bytes(mime, &bytes))
    }

    /// Everything after the first comma.
    pub fn payload(&self) -> &str {
        self.0.split_once(',').map(|(_, p)| p).unwrap_or_default()
    }

    /// Mime type named in the URI header, e.g. `image/png`.
    pub fn declared_mime(&self) -> &str {
        let header = self.0.split_once(',').map(|(h, _)| h).unwrap_or_default();
        let header = header.strip_prefix("data:").unwrap_or(header);
        header.split(';').next().unwrap_or_default()
    }

    pub fn as_uri(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ImageData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageData")
            .field("mime", &self.declared_mime())
            .field("payload_len", &self.payload().len())
            .finish()
    }
}

fn mime_for_path(path: &Path) -> Result<&'static str, ImageError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => Ok("image/png"),
        "jpg" | "jpeg" => Ok("image/jpeg"),
        "webp" => Ok("image/webp"),
        "gif" => Ok("image/gif"),
        "heic" => Ok("image/heic"),
        "heif" => Ok("image/heif"),
        other => Err(ImageError::UnsupportedType(if other.is_empty() {
            path.display().to_string()
        } else {
            other.to_string()
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_data_uri() {
        let img = ImageData::from_data_uri("data:image/png;base64,iVBORw0KGgo=").unwrap();
        assert_eq!(img.declared_mime(), "image/png");
        assert_eq!(img.payload(), "iVBORw0KGgo=");
    }

    #[test]
    fn rejects_non_data_uri() {
        let err = ImageData::from_data_uri("https://example.com/page.jpg").unwrap_err();
        assert!(matches!(err, ImageError::InvalidDataUri(_)));
    }

    #[test]
    fn rejects_missing_separator() {
        assert!(ImageData::from_data_uri("data:image/png;base64").is_err());
    }

    #[test]
    fn rejects_empty_payload() {
        assert!(ImageData::from_data_uri("data:image/png;base64,").is_err());
    }

    #[test]
    fn payload_is_text_after_first_comma() {
        let img = ImageData::from_data_uri("data:text/plain,a,b").unwrap();
        assert_eq!(img.payload(), "a,b");
        assert_eq!(img.declared_mime(), "text/plain");
    }

    #[test]
    fn from_bytes_encodes_standard_base64() {
        let img = ImageData::from_bytes("image/jpeg", b"hello");
        assert_eq!(img.as_uri(), "data:image/jpeg;base64,aGVsbG8=");
        assert_eq!(img.payload(), "aGVsbG8=");
    }

    #[test]
    fn from_path_infers_mime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.PNG");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let img = ImageData::from_path(&path).unwrap();
        assert_eq!(img.declared_mime(), "image/png");
        assert_eq!(img.payload(), "iVBORw==");
    }

    #[test]
    fn from_path_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "not an image").unwrap();

        let err = ImageData::from_path(&path).unwrap_err();
        assert!(matches!(err, ImageError::UnsupportedType(ref ext) if ext == "txt"));
    }

    #[test]
    fn from_path_rejects_missing_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan");
        std::fs::write(&path, [0xff, 0xd8]).unwrap();

        let err = ImageData::from_path(&path).unwrap_err();
        assert!(matches!(err, ImageError::UnsupportedType(_)));
    }

    #[test]
    fn from_path_missing_file_is_io_error() {
        let err = ImageData::from_path(Path::new("/tmp/watcher_missing_page.jpg")).unwrap_err();
        assert!(matches!(err, ImageError::Io(_)));
    }

    #[test]
    fn debug_does_not_dump_payload() {
        let img = ImageData::from_bytes("image/png", &[0u8; 64]);
        let dbg = format!("{img:?}");
        assert!(dbg.contains("image/png"));
        assert!(!dbg.contains("AAAA"));
    }
}
