// ABOUTME: Large ASCII-art section banners via figlet.
// ABOUTME: Rendering failures are reported but callers treat them as cosmetic.

use figlet_rs::FIGfont;

/// Why a banner could not be produced.
#[derive(Debug, thiserror::Error)]
pub enum BannerError {
    #[error("failed to load figlet font: {0}")]
    Font(String),

    #[error("figlet could not render {0:?}")]
    Unrenderable(String),
}

/// Render `label` in the standard figlet font, ending with a newline.
pub fn render(label: &str) -> Result<String, BannerError> {
    let font = FIGfont::standard().map_err(BannerError::Font)?;
    let figure = font
        .convert(label)
        .ok_or_else(|| BannerError::Unrenderable(label.to_string()))?;

    let mut text = figure.to_string();
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}
