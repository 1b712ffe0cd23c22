//! Markdown command doc parser: line-by-line state machine.
//!
//! A document looks like:
//!
//! ```text
//! ## cmd
//!
//! One line summary.            -> short
//!
//! ### Synopsis
//!
//! Longer description.          -> long
//!
//! ### Examples
//!
//! cmd --flag                   -> examples
//! ```
//!
//! In [`ParseMode::Full`] the `###` headings are not interpreted and every
//! line after the summary lands in `long`.

use crate::loader::DOC_EXTENSION;
use crate::model::{Document, ParseMode};

const SHORT_HEADING: &str = "## ";
const SUBSECTION: &str = "### ";
const SYNOPSIS: &str = "### Synopsis";
const EXAMPLES: &str = "### Examples";
const FENCE: &str = "```";

// -- Scan state ---------------------------------------------------------------

/// Which field body lines are currently routed to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Before any recognized subsection, or under an unrecognized one.
    #[default]
    Idle,
    CollectingLong,
    CollectingExamples,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum ShortState {
    #[default]
    Pending,
    /// Saw the `## ` heading, skipping blank lines.
    Awaiting,
    Captured,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Long,
    Examples,
}

/// Outcome of feeding one line to [`ScanState::transition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Line is consumed without producing text.
    Drop,
    /// Line is the short description.
    Short,
    /// Line is appended to `target`, tab-indented when inside a code fence.
    Append { target: Target, indent: bool },
}

/// Per-document scan state: `{Idle, CollectingLong, CollectingExamples} × in_code_block`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanState {
    pub section: Section,
    pub in_code_block: bool,
    short: ShortState,
}

impl ScanState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the state machine by one line and report what to do with it.
    pub fn transition(&mut self, line: &str, mode: ParseMode) -> Step {
        match self.short {
            ShortState::Pending if line.starts_with(SHORT_HEADING) => {
                self.short = ShortState::Awaiting;
                return Step::Drop;
            }
            ShortState::Awaiting => {
                if line.trim().is_empty() {
                    return Step::Drop;
                }
                self.short = ShortState::Captured;
                return Step::Short;
            }
            _ => {}
        }

        if mode == ParseMode::Split && line.starts_with(SUBSECTION) {
            self.section = if line.starts_with(SYNOPSIS) {
                Section::CollectingLong
            } else if line.starts_with(EXAMPLES) {
                Section::CollectingExamples
            } else {
                Section::Idle
            };
            return Step::Drop;
        }

        if line.starts_with(FENCE) {
            self.in_code_block = !self.in_code_block;
            return Step::Drop;
        }

        let target = match (mode, self.section) {
            (ParseMode::Full, _) | (ParseMode::Split, Section::CollectingLong) => Target::Long,
            (ParseMode::Split, Section::CollectingExamples) => Target::Examples,
            (ParseMode::Split, Section::Idle) => return Step::Drop,
        };
        Step::Append {
            target,
            indent: self.in_code_block,
        }
    }
}

// -- Public API ---------------------------------------------------------------

/// Parse one markdown file into a [`Document`].
pub fn parse(file_name: &str, content: &str, mode: ParseMode) -> Document {
    let mut state = ScanState::new();
    let mut short = String::new();
    let mut long: Vec<Collected> = Vec::new();
    let mut examples: Vec<Collected> = Vec::new();

    for line in content.lines() {
        match state.transition(line, mode) {
            Step::Drop => {}
            Step::Short => short = line.to_string(),
            Step::Append { target, indent } => {
                let text = if indent {
                    Collected {
                        text: format!("\t{}", line),
                        trimmable: false,
                    }
                } else {
                    Collected {
                        text: line.to_string(),
                        trimmable: line.trim().is_empty(),
                    }
                };
                match target {
                    Target::Long => long.push(text),
                    Target::Examples => examples.push(text),
                }
            }
        }
    }

    if state.in_code_block {
        log::debug!("{}: unterminated code fence", file_name);
    }

    Document {
        name: derive_name(file_name),
        short,
        long: join_lines(&long),
        examples: join_lines(&examples),
    }
}

/// A body line routed to `long` or `examples`.
struct Collected {
    text: String,
    /// Blank and outside a code fence; fenced lines are always kept.
    trimmable: bool,
}

/// Join collected lines with `\n`, dropping unfenced blank lines at either end.
fn join_lines(lines: &[Collected]) -> String {
    let start = lines.iter().take_while(|l| l.trimmable).count();
    let end = lines.len() - lines[start..].iter().rev().take_while(|l| l.trimmable).count();
    lines[start..end]
        .iter()
        .map(|l| l.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Derive the variable prefix from a file name.
/// "my-cmd-name.md" → "MyCmdName"
///
/// Every ".md" is removed, not only the trailing one, so "a.md.md" → "A".
pub fn derive_name(file_name: &str) -> String {
    let stem = file_name.replace(&format!(".{}", DOC_EXTENSION), "");
    title_case(&stem).replace('-', "")
}

/// Uppercase the first letter of every word. Any character other than a
/// letter, digit or `_` starts a new word.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !(c.is_alphanumeric() || c == '_');
    }
    out
}
