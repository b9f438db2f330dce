//! Source file preview loading
//!
//! A test case references its source document by URL. The pipeline stores
//! base64 `data:` URLs; local paths and `file://` URLs also occur. Those are
//! decoded into a small RGB pixel grid that the TUI draws with half-block
//! characters. Remote URLs are not fetched.

use std::path::PathBuf;

use base64::{engine::general_purpose, Engine as _};
use evalview_core::prelude::*;
use image::imageops::FilterType;
use url::Url;

/// Tallest preview in terminal rows (two pixels per row)
pub const MAX_PREVIEW_ROWS: u32 = 40;

/// Decoded thumbnail, row-major RGB
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<[u8; 3]>,
}

impl PreviewImage {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }

    /// Terminal rows needed at two pixels per row
    pub fn rows(&self) -> u32 {
        self.height.div_ceil(2)
    }
}

/// What the file preview panel shows for the selected case
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewContent {
    /// No file reference on the case
    Unavailable,
    /// Decoded image with a short caption (media type or file name)
    Image { caption: String, image: PreviewImage },
    /// Remote reference, shown as a link
    Remote { url: String },
    /// Reference could not be decoded
    Failed { error: String },
}

/// Where a file reference points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewSource {
    DataUrl,
    LocalFile(PathBuf),
    Remote,
}

/// Classify a file reference without touching the network
pub fn classify(reference: &str) -> PreviewSource {
    match Url::parse(reference) {
        Ok(url) => match url.scheme() {
            "data" => PreviewSource::DataUrl,
            "http" | "https" | "ftp" => PreviewSource::Remote,
            "file" => url
                .to_file_path()
                .map(PreviewSource::LocalFile)
                .unwrap_or(PreviewSource::Remote),
            // Windows drive letters parse as one-letter schemes
            scheme if scheme.len() == 1 => PreviewSource::LocalFile(PathBuf::from(reference)),
            _ => PreviewSource::Remote,
        },
        Err(_) => PreviewSource::LocalFile(PathBuf::from(reference)),
    }
}

/// Build the preview for a case's file reference
pub async fn load_preview(reference: Option<&str>, width: u16) -> PreviewContent {
    let Some(reference) = reference.filter(|r| !r.is_empty()) else {
        return PreviewContent::Unavailable;
    };

    let loaded = match classify(reference) {
        PreviewSource::Remote => {
            return PreviewContent::Remote {
                url: reference.to_string(),
            }
        }
        PreviewSource::DataUrl => decode_data_url(reference).and_then(|(media_type, bytes)| {
            thumbnail(&bytes, width).map(|image| (media_type, image))
        }),
        PreviewSource::LocalFile(path) => match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let caption = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                thumbnail(&bytes, width).map(|image| (caption, image))
            }
            Err(e) => Err(Error::preview(format!("{}: {}", path.display(), e))),
        },
    };

    match loaded {
        Ok((caption, image)) => PreviewContent::Image { caption, image },
        Err(e) => {
            warn!("File preview failed: {}", e);
            PreviewContent::Failed {
                error: e.to_string(),
            }
        }
    }
}

/// Split a base64 `data:` URL into its media type and decoded bytes
pub fn decode_data_url(reference: &str) -> Result<(String, Vec<u8>)> {
    let body = reference
        .strip_prefix("data:")
        .ok_or_else(|| Error::preview("not a data URL"))?;
    let (header, payload) = body
        .split_once(',')
        .ok_or_else(|| Error::preview("data URL has no payload"))?;
    let media_type = header
        .strip_suffix(";base64")
        .ok_or_else(|| Error::preview("only base64 data URLs can be previewed"))?;

    let bytes = general_purpose::STANDARD
        .decode(payload.trim())
        .map_err(|e| Error::preview(format!("invalid base64 payload: {}", e)))?;

    let media_type = if media_type.is_empty() {
        "data".to_string()
    } else {
        media_type.to_string()
    };
    Ok((media_type, bytes))
}

/// Decode an image and shrink it to fit `width` columns
fn thumbnail(bytes: &[u8], width: u16) -> Result<PreviewImage> {
    let mut img =
        image::load_from_memory(bytes).map_err(|e| Error::preview(format!("{}", e)))?;

    let max_width = u32::from(width.max(1));
    let max_height = MAX_PREVIEW_ROWS * 2;
    if img.width() > max_width || img.height() > max_height {
        img = img.resize(max_width, max_height, FilterType::Triangle);
    }

    let rgb = img.to_rgb8();
    Ok(PreviewImage {
        width: rgb.width(),
        height: rgb.height(),
        pixels: rgb.pixels().map(|p| p.0).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;
    use tokio_test::block_on;

    fn png_bytes(width: u32, height: u32, color: [u8; 3]) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, Rgb(color));
        let mut buf = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }

    fn data_url(bytes: &[u8]) -> String {
        format!(
            "data:image/png;base64,{}",
            general_purpose::STANDARD.encode(bytes)
        )
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("data:image/png;base64,AAAA"), PreviewSource::DataUrl);
        assert_eq!(classify("https://example.com/a.png"), PreviewSource::Remote);
        assert_eq!(
            classify("docs/invoice.png"),
            PreviewSource::LocalFile(PathBuf::from("docs/invoice.png"))
        );
        assert!(matches!(
            classify("file:///tmp/invoice.png"),
            PreviewSource::LocalFile(_)
        ));
    }

    #[test]
    fn test_missing_reference_is_unavailable() {
        assert_eq!(block_on(load_preview(None, 40)), PreviewContent::Unavailable);
        assert_eq!(
            block_on(load_preview(Some(""), 40)),
            PreviewContent::Unavailable
        );
    }

    #[test]
    fn test_remote_reference_is_not_fetched() {
        let preview = block_on(load_preview(Some("https://files.example.com/a.png"), 40));
        assert_eq!(
            preview,
            PreviewContent::Remote {
                url: "https://files.example.com/a.png".to_string()
            }
        );
    }

    #[test]
    fn test_data_url_is_decoded() {
        let url = data_url(&png_bytes(4, 2, [255, 0, 0]));
        let PreviewContent::Image { caption, image } = block_on(load_preview(Some(&url), 40))
        else {
            panic!("expected image preview");
        };
        assert_eq!(caption, "image/png");
        assert_eq!((image.width, image.height), (4, 2));
        assert_eq!(image.rows(), 1);
        assert_eq!(image.pixel(3, 1), Some([255, 0, 0]));
        assert_eq!(image.pixel(4, 0), None);
    }

    #[test]
    fn test_large_image_is_shrunk_to_width() {
        let url = data_url(&png_bytes(200, 100, [0, 0, 255]));
        let PreviewContent::Image { image, .. } = block_on(load_preview(Some(&url), 20)) else {
            panic!("expected image preview");
        };
        assert!(image.width <= 20);
        assert!(image.height <= MAX_PREVIEW_ROWS * 2);
    }

    #[test]
    fn test_local_file_is_decoded() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("scan.png");
        std::fs::write(&path, png_bytes(2, 2, [0, 255, 0])).unwrap();

        let preview = block_on(load_preview(path.to_str(), 40));
        let PreviewContent::Image { caption, .. } = preview else {
            panic!("expected image preview");
        };
        assert_eq!(caption, "scan.png");
    }

    #[test]
    fn test_bad_payloads_fail_softly() {
        let preview = block_on(load_preview(Some("data:image/png;base64,!!!"), 40));
        assert!(matches!(preview, PreviewContent::Failed { .. }));

        let preview = block_on(load_preview(Some("data:text/plain,hello"), 40));
        assert!(matches!(preview, PreviewContent::Failed { .. }));

        let not_an_image = format!(
            "data:image/png;base64,{}",
            general_purpose::STANDARD.encode(b"plain text")
        );
        let preview = block_on(load_preview(Some(&not_an_image), 40));
        assert!(matches!(preview, PreviewContent::Failed { .. }));
    }

    #[test]
    fn test_missing_local_file_fails_softly() {
        let preview = block_on(load_preview(Some("/definitely/not/here.png"), 40));
        assert!(matches!(preview, PreviewContent::Failed { .. }));
    }
}
