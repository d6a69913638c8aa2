use image::ImageFormat;
use std::io::Cursor;
use tracing::{info, warn};

use crate::core::config::RenderConfig;
use crate::core::error::{AppError, AppResult};
use crate::core::render::render_image;
use crate::core::state::QrState;

/// Every export is offered under this name, whatever the input.
pub const DOWNLOAD_FILE_NAME: &str = "qrcode.png";
pub const DOWNLOAD_CONTENT_TYPE: &str = "image/png";

/// A rendered code ready to be saved by the client.
#[derive(Debug, Clone)]
pub struct Download {
    pub file_name: &'static str,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl Download {
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.file_name)
    }
}

/// Rasterize the current code as PNG.
///
/// Fails with [`AppError::MissingInput`] when there is no text; nothing is
/// rendered in that case. The state is only read.
pub fn download(
    state: &QrState,
    settings: &RenderConfig,
    viewport_width: Option<u32>,
) -> AppResult<Download> {
    if !state.has_text() {
        warn!("Download requested without input");
        return Err(AppError::MissingInput);
    }

    let image = render_image(state.text(), settings, viewport_width)?;

    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;

    info!(
        "Exported {}x{} code as {} ({} bytes)",
        image.width(),
        image.height(),
        DOWNLOAD_FILE_NAME,
        bytes.len()
    );

    Ok(Download {
        file_name: DOWNLOAD_FILE_NAME,
        content_type: DOWNLOAD_CONTENT_TYPE,
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_download_without_input_fails() {
        let state = QrState::new();
        let before = state.clone();

        let result = download(&state, &RenderConfig::default(), None);

        assert!(matches!(result, Err(AppError::MissingInput)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_download_produces_png() {
        let mut state = QrState::new();
        state.set_text("https://example.com/doc");

        let file = download(&state, &RenderConfig::default(), None).unwrap();

        assert_eq!(file.file_name, "qrcode.png");
        assert_eq!(file.content_type, "image/png");
        assert!(file.bytes.starts_with(&PNG_SIGNATURE));
        assert_eq!(file.content_disposition(), "attachment; filename=\"qrcode.png\"");
    }

    #[test]
    fn test_file_name_does_not_depend_on_input() {
        let mut state = QrState::new();
        state.set_text("report.pdf");
        let first = download(&state, &RenderConfig::default(), None).unwrap();

        state.set_text("https://onedrive.live.com/?id=42");
        let second = download(&state, &RenderConfig::default(), Some(400)).unwrap();

        assert_eq!(first.file_name, second.file_name);
        assert_ne!(first.bytes, second.bytes);
    }

    #[test]
    fn test_download_decodes_to_rendered_size() {
        let mut state = QrState::new();
        state.set_text("https://example.com/doc");
        let settings = RenderConfig::default();

        let file = download(&state, &settings, Some(300)).unwrap();
        let decoded = image::load_from_memory_with_format(&file.bytes, ImageFormat::Png).unwrap();
        let expected = render_image(state.text(), &settings, Some(300)).unwrap();

        assert_eq!(decoded.width(), expected.width());
        assert_eq!(decoded.height(), expected.height());
    }
}
