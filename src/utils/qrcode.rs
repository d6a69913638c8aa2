use anyhow::Result;
use qrcode::QrCode;
use qrcode::render::unicode;

/// Terminal QR code pointing at the generator page, for opening it on a phone.
pub fn generate_banner(url: &str) -> Result<String> {
    let code = QrCode::new(url.as_bytes())?;
    let qr = code.render::<unicode::Dense1x2>()
        .dark_color(unicode::Dense1x2::Light)
        .light_color(unicode::Dense1x2::Dark)
        .build();

    let mut output = String::new();
    output.push('\n');
    output.push_str("Scan to open the QR generator on another device:\n");
    output.push_str(&qr);
    output.push('\n');
    output.push_str(&format!("Or browse to: {}\n", url));

    Ok(output)
}
