//! Data model for a parsed command document.

/// Help text extracted from one markdown file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Document {
    /// Identifier prefix for the generated variables, e.g. `MyCmd`.
    pub name: String,
    /// First non-blank line after the `## ` heading.
    pub short: String,
    pub long: String,
    pub examples: String,
}

/// How the body of a document is split into fields.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// `### Synopsis` feeds `long`, `### Examples` feeds `examples`.
    #[default]
    Split,
    /// Everything after the short description feeds `long`.
    Full,
}

impl ParseMode {
    pub fn from_full_flag(full: bool) -> Self {
        if full {
            ParseMode::Full
        } else {
            ParseMode::Split
        }
    }
}
