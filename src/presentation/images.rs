//! Image attachments for new listings.
//!
//! The API stores listing images as `data:` URLs inline in the item record,
//! so attaching a file means checking it and base64-encoding it.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// A checked, encoded image.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAttachment {
    pub name: String,
    pub mime: String,
    pub size: u64,
    pub data_url: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ImageError {
    #[error("{0} is not an image file")]
    NotAnImage(String),

    #[error("{name} is {size} bytes, the limit is {max}")]
    TooLarge { name: String, size: u64, max: u64 },

    #[error("Could not read {name}: {reason}")]
    Unreadable { name: String, reason: String },
}

impl ImageError {
    /// Translation key of the message shown on the post page.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ImageError::NotAnImage(_) | ImageError::Unreadable { .. } => "post.imageInvalid",
            ImageError::TooLarge { .. } => "post.imageTooLarge",
        }
    }
}

/// MIME type for an image file name, by extension.
pub fn mime_for(name: &str) -> Option<&'static str> {
    let ext = Path::new(name).extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "heic" => "image/heic",
        _ => return None,
    };
    Some(mime)
}

pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Check and encode an in-memory file.
///
/// An empty `mime` is derived from the file name; anything outside
/// `image/*` is refused.
pub fn encode(
    name: &str,
    mime: &str,
    bytes: &[u8],
    max_bytes: u64,
) -> Result<ImageAttachment, ImageError> {
    let mime = match mime {
        "" => mime_for(name).unwrap_or_default(),
        given => given,
    };
    if !mime.starts_with("image/") {
        return Err(ImageError::NotAnImage(name.to_string()));
    }

    let size = bytes.len() as u64;
    if size > max_bytes {
        return Err(ImageError::TooLarge {
            name: name.to_string(),
            size,
            max: max_bytes,
        });
    }

    Ok(ImageAttachment {
        name: name.to_string(),
        mime: mime.to_string(),
        size,
        data_url: data_url(mime, bytes),
    })
}

/// Read, check and encode a file from disk.
///
/// The size is checked from metadata before the file is read.
pub fn load(path: &Path, max_bytes: u64) -> Result<ImageAttachment, ImageError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let mime = mime_for(&name).ok_or_else(|| ImageError::NotAnImage(name.clone()))?;

    let unreadable = |e: std::io::Error| ImageError::Unreadable {
        name: name.clone(),
        reason: e.to_string(),
    };

    let size = std::fs::metadata(path).map_err(unreadable)?.len();
    if size > max_bytes {
        return Err(ImageError::TooLarge {
            name: name.clone(),
            size,
            max: max_bytes,
        });
    }

    let bytes = std::fs::read(path).map_err(unreadable)?;
    encode(&name, mime, &bytes, max_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use test_case::test_case;

    #[test_case("photo.PNG", Some("image/png"))]
    #[test_case("lamp.jpeg", Some("image/jpeg"))]
    #[test_case("notes.pdf", None)]
    #[test_case("README", None)]
    fn test_mime_for(name: &str, expected: Option<&str>) {
        assert_eq!(mime_for(name), expected);
    }

    #[test]
    fn test_data_url() {
        assert_eq!(data_url("image/png", b"abc"), "data:image/png;base64,YWJj");
    }

    #[test]
    fn test_encode_rejects_non_image() {
        let err = encode("notes.pdf", "application/pdf", b"%PDF", 1024).unwrap_err();
        assert_eq!(err.i18n_key(), "post.imageInvalid");
    }

    #[test]
    fn test_encode_accepts_image_mime_without_extension() {
        let image = encode("clipboard", "image/jpeg", b"\xff\xd8", 1024).unwrap();
        assert_eq!(image.mime, "image/jpeg");
    }

    #[test]
    fn test_load_checks_size() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(&[0u8; 64]).unwrap();

        let err = load(file.path(), 32).unwrap_err();
        assert!(matches!(err, ImageError::TooLarge { size: 64, max: 32, .. }));

        let image = load(file.path(), 64).unwrap();
        assert!(image.data_url.starts_with("data:image/png;base64,"));
        assert_eq!(image.size, 64);
    }
}
