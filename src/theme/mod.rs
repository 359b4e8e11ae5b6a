pub mod apathy;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const FONT_STYLE_KEYWORDS: [&str; 3] = ["italic", "bold", "underline"];

pub type ThemeResult<T> = std::result::Result<T, ThemeError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    Dark,
    Light,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
    #[error("invalid hex color for {key}: {value:?}")]
    InvalidColor { key: String, value: String },
    #[error("invalid font style in tokenColors[{index}]: {value:?}")]
    InvalidFontStyle { index: usize, value: String },
    #[error("tokenColors[{index}] has no scope")]
    EmptyScope { index: usize },
}

/// Display settings applied to every scope of a [`TokenColorRule`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    #[serde(
        default,
        rename = "fontStyle",
        skip_serializing_if = "Option::is_none"
    )]
    pub font_style: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenColorRule {
    pub scope: Vec<String>,
    pub settings: TokenSettings,
}

/// An editor color theme: UI colors keyed by surface id plus ordered token rules.
///
/// Field order matches the emitted JSON. `colors` keeps insertion order and
/// `token_colors` is never reordered, since later rules win in a highlighter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeDocument {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ThemeKind,
    pub colors: IndexMap<String, String>,
    #[serde(rename = "tokenColors")]
    pub token_colors: Vec<TokenColorRule>,
}

impl ThemeDocument {
    pub fn validate(&self) -> ThemeResult<()> {
        for (key, value) in &self.colors {
            if !is_hex_color(value) {
                return Err(ThemeError::InvalidColor {
                    key: key.clone(),
                    value: value.clone(),
                });
            }
        }

        for (index, rule) in self.token_colors.iter().enumerate() {
            if rule.scope.iter().all(|scope| scope.trim().is_empty()) {
                return Err(ThemeError::EmptyScope { index });
            }
            if let Some(ref foreground) = rule.settings.foreground {
                if !is_hex_color(foreground) {
                    return Err(ThemeError::InvalidColor {
                        key: format!("tokenColors[{index}].settings.foreground"),
                        value: foreground.clone(),
                    });
                }
            }
            if let Some(ref font_style) = rule.settings.font_style {
                if !is_font_style(font_style) {
                    return Err(ThemeError::InvalidFontStyle {
                        index,
                        value: font_style.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Every color value in the document, UI colors first, then rule foregrounds.
    pub fn color_values(&self) -> impl Iterator<Item = &str> {
        self.colors.values().map(String::as_str).chain(
            self.token_colors
                .iter()
                .filter_map(|rule| rule.settings.foreground.as_deref()),
        )
    }
}

/// `#RRGGBB` or `#RRGGBBAA`, either case.
pub fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 6 | 8) && digits.bytes().all(|byte| byte.is_ascii_hexdigit())
}

fn is_font_style(value: &str) -> bool {
    value
        .split(' ')
        .all(|word| FONT_STYLE_KEYWORDS.contains(&word))
}
