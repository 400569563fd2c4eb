//! Color theme for terminal highlighting
//!
//! Dark-mode palette keyed by token kind, loadable from TOML:
//!
//! ```toml
//! [colors]
//! keyword = "#4ea1ff"
//! string = "#69db7c"
//! ```
//! Unspecified entries keep their defaults.

use psc_lexer::TokenKind;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("No se pudo leer el tema: {0}")]
    Io(#[from] std::io::Error),

    #[error("Tema inválido: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub keyword: String,
    pub number: String,
    pub boolean: String,
    pub group: String,
    pub op: String,
    pub string: String,
    pub ident: String,
    pub comment: String,
    pub error_fg: String,
    pub error_bg: String,
    pub background: String,
    pub foreground: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            keyword: "#4ea1ff".to_string(),
            number: "#ffa94e".to_string(),
            boolean: "#ffa94e".to_string(),
            group: "#f8f9fa".to_string(),
            op: "#ffd43b".to_string(),
            string: "#69db7c".to_string(),
            ident: "#f783ac".to_string(),
            comment: "#868e96".to_string(),
            error_fg: "#ffffff".to_string(),
            error_bg: "#c92a2a".to_string(),
            background: "#1e1e1e".to_string(),
            foreground: "#e9ecef".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
struct ThemeFile {
    #[serde(default)]
    colors: Theme,
}

impl Theme {
    pub fn from_toml_str(text: &str) -> Result<Self, ThemeError> {
        let file: ThemeFile = toml::from_str(text)?;
        Ok(file.colors)
    }

    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Foreground hex color for a token kind. Markers fall back to the
    /// default foreground.
    pub fn color_for(&self, kind: TokenKind) -> &str {
        match kind {
            TokenKind::Keyword => &self.keyword,
            TokenKind::Number => &self.number,
            TokenKind::Boolean => &self.boolean,
            TokenKind::Group => &self.group,
            TokenKind::Op => &self.op,
            TokenKind::String => &self.string,
            TokenKind::Ident => &self.ident,
            TokenKind::Comment => &self.comment,
            TokenKind::Error => &self.error_fg,
            TokenKind::Newline | TokenKind::Eof => &self.foreground,
        }
    }
}

/// Parse `#rrggbb` into RGB components. Invalid input maps to white.
pub fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return (255, 255, 255);
    }
    let parse = |s: &str| u8::from_str_radix(s, 16).unwrap_or(255);
    (parse(&hex[0..2]), parse(&hex[2..4]), parse(&hex[4..6]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let theme = Theme::default();
        assert_eq!(theme.color_for(TokenKind::Keyword), "#4ea1ff");
        assert_eq!(theme.color_for(TokenKind::String), "#69db7c");
        assert_eq!(theme.color_for(TokenKind::Comment), "#868e96");
    }

    #[test]
    fn test_partial_theme_overrides() {
        let theme = Theme::from_toml_str(
            r##"
            [colors]
            keyword = "#ff0000"
        "##,
        )
        .unwrap();
        assert_eq!(theme.keyword, "#ff0000");
        // unspecified entries keep the defaults
        assert_eq!(theme.string, "#69db7c");
    }

    #[test]
    fn test_hex_parsing() {
        assert_eq!(hex_to_rgb("#4ea1ff"), (0x4e, 0xa1, 0xff));
        assert_eq!(hex_to_rgb("no-color"), (255, 255, 255));
    }

    #[test]
    fn test_non_ascii_hex_falls_back_to_white() {
        // six bytes but two characters
        assert_eq!(hex_to_rgb("€€"), (255, 255, 255));
        assert_eq!(hex_to_rgb("#ñañañ"), (255, 255, 255));
    }
}
