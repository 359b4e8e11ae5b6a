use indexmap::IndexMap;

use super::{ThemeDocument, ThemeKind, TokenColorRule, TokenSettings};

pub const THEME_NAME: &str = "Apathy (Experimental)";

const COLORS: [(&str, &str); 9] = [
    ("editor.background", "#0A0A0A"),
    ("editor.foreground", "#E0E0E0"),
    ("editorLineNumber.foreground", "#5A5A5A"),
    ("editorLineNumber.activeForeground", "#FFFFFF"),
    ("editorCursor.foreground", "#FFFFFF"),
    ("editor.selectionBackground", "#333333"),
    ("editor.selectionHighlightBackground", "#222222"),
    ("editor.wordHighlightBackground", "#222222"),
    ("editor.wordHighlightStrongBackground", "#222222"),
];

const COMMENT_SCOPES: [&str; 3] = ["comment", "punctuation.definition.comment", "string.comment"];
const COMMENT_FOREGROUND: &str = "#5A5A5A";

/// The dark "Apathy" theme, rebuilt from constants on every call.
pub fn document() -> ThemeDocument {
    let colors: IndexMap<String, String> = COLORS
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();

    ThemeDocument {
        name: THEME_NAME.to_string(),
        kind: ThemeKind::Dark,
        colors,
        token_colors: vec![TokenColorRule {
            scope: COMMENT_SCOPES.iter().map(|s| s.to_string()).collect(),
            settings: TokenSettings {
                foreground: Some(COMMENT_FOREGROUND.to_string()),
                font_style: Some("italic".to_string()),
            },
        }],
    }
}
