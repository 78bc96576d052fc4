use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Inline style flags carried by text and link nodes.
///
/// Any combination may be set. Renderers never iterate the struct fields
/// directly; they go through [`StyleFlags::marks`], which fixes the nesting
/// order independently of how the flags were authored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleFlags {
    pub is_bold: bool,
    pub is_italic: bool,
    pub is_underlined: bool,
    pub is_strikethrough: bool,
    pub is_superscript: bool,
    pub is_subscript: bool,
}

impl StyleFlags {
    /// No styles.
    pub const NONE: StyleFlags = StyleFlags {
        is_bold: false,
        is_italic: false,
        is_underlined: false,
        is_strikethrough: false,
        is_superscript: false,
        is_subscript: false,
    };

    /// Bold only.
    pub fn bold() -> Self {
        Self {
            is_bold: true,
            ..Self::NONE
        }
    }

    /// Italic only.
    pub fn italic() -> Self {
        Self {
            is_italic: true,
            ..Self::NONE
        }
    }

    /// Every flag set.
    pub fn all() -> Self {
        Self {
            is_bold: true,
            is_italic: true,
            is_underlined: true,
            is_strikethrough: true,
            is_superscript: true,
            is_subscript: true,
        }
    }

    /// Returns a copy with `mark` enabled.
    pub fn with(self, mark: StyleMark) -> Self {
        let mut flags = self;
        match mark {
            StyleMark::Bold => flags.is_bold = true,
            StyleMark::Italic => flags.is_italic = true,
            StyleMark::Underline => flags.is_underlined = true,
            StyleMark::Strikethrough => flags.is_strikethrough = true,
            StyleMark::Superscript => flags.is_superscript = true,
            StyleMark::Subscript => flags.is_subscript = true,
        }
        flags
    }

    /// Whether `mark` is enabled.
    pub fn has(&self, mark: StyleMark) -> bool {
        match mark {
            StyleMark::Bold => self.is_bold,
            StyleMark::Italic => self.is_italic,
            StyleMark::Underline => self.is_underlined,
            StyleMark::Strikethrough => self.is_strikethrough,
            StyleMark::Superscript => self.is_superscript,
            StyleMark::Subscript => self.is_subscript,
        }
    }

    /// True when no flag is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }

    /// Active marks in nesting order, innermost first.
    pub fn marks(&self) -> impl Iterator<Item = StyleMark> + '_ {
        StyleMark::ORDER.into_iter().filter(|mark| self.has(*mark))
    }
}

/// A single inline style applied by the rich renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleMark {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Superscript,
    Subscript,
}

impl StyleMark {
    /// Fixed wrapping order, innermost to outermost.
    pub const ORDER: [StyleMark; 6] = [
        StyleMark::Bold,
        StyleMark::Italic,
        StyleMark::Underline,
        StyleMark::Strikethrough,
        StyleMark::Superscript,
        StyleMark::Subscript,
    ];

    /// Short tag name, as an HTML-like host would spell it.
    pub fn tag(&self) -> &'static str {
        match self {
            StyleMark::Bold => "b",
            StyleMark::Italic => "i",
            StyleMark::Underline => "u",
            StyleMark::Strikethrough => "s",
            StyleMark::Superscript => "sup",
            StyleMark::Subscript => "sub",
        }
    }
}

impl Display for StyleMark {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.tag())
    }
}
