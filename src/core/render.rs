use image::{GrayImage, Luma};
use qrcode::render::svg;
use qrcode::{EcLevel, QrCode};

use crate::core::config::RenderConfig;
use crate::core::error::AppResult;
use crate::core::state::QrState;

pub const PLACEHOLDER_TEXT: &str = "QR Code will appear here";

/// What the code region of the page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Placeholder,
    Code { svg: String, size: u32 },
}

impl View {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, View::Placeholder)
    }
}

/// Edge length in pixels the code may occupy.
///
/// Capped at `max_size`, and at the viewport width minus padding when the
/// client reported one. A viewport narrower than the padding gives 0, which
/// the encoder turns into its smallest module scale.
pub fn target_size(settings: &RenderConfig, viewport_width: Option<u32>) -> u32 {
    match viewport_width {
        Some(width) => settings
            .max_size
            .min(width.saturating_sub(settings.viewport_padding)),
        None => settings.max_size,
    }
}

/// Encode text at the highest error-correction level.
pub fn encode(text: &str) -> AppResult<QrCode> {
    Ok(QrCode::with_error_correction_level(text.as_bytes(), EcLevel::H)?)
}

pub fn render_view(
    state: &QrState,
    settings: &RenderConfig,
    viewport_width: Option<u32>,
) -> AppResult<View> {
    if !state.has_text() {
        return Ok(View::Placeholder);
    }

    let size = target_size(settings, viewport_width);
    let code = encode(state.text())?;
    let document = code
        .render::<svg::Color>()
        .quiet_zone(settings.quiet_zone)
        .max_dimensions(size, size)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build();

    // Drop the XML prolog so the markup can sit inline in the page.
    let svg = match document.find("<svg") {
        Some(start) => document[start..].to_string(),
        None => document,
    };

    Ok(View::Code { svg, size })
}

/// Rasterize the code for `text` the way the page displays it.
pub fn render_image(
    text: &str,
    settings: &RenderConfig,
    viewport_width: Option<u32>,
) -> AppResult<GrayImage> {
    let size = target_size(settings, viewport_width);
    let code = encode(text)?;
    let image = code
        .render::<Luma<u8>>()
        .quiet_zone(settings.quiet_zone)
        .max_dimensions(size, size)
        .build();

    Ok(image)
}
