//! Loaded program text.
//!
//! A program is the list of source lines, one instruction word per line. Lines
//! are kept verbatim apart from surrounding whitespace so that malformed lines
//! can still be displayed and reported by position.

use crate::common::error::DecodeError;
use crate::isa::decode::decode_line;
use crate::isa::disasm::render;

/// An ordered list of textual instruction words.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    lines: Vec<String>,
}

impl Program {
    /// Builds a program from source text, one instruction word per line.
    ///
    /// Each line is trimmed of surrounding whitespace (including `\r`). Blank
    /// lines are kept; they decode as malformed words.
    pub fn from_source(source: &str) -> Self {
        Self {
            lines: source.lines().map(|line| line.trim().to_owned()).collect(),
        }
    }

    /// Builds a program from raw words, rendering each as 32 binary digits.
    pub fn from_words(words: &[u32]) -> Self {
        Self {
            lines: words.iter().map(|word| format!("{word:032b}")).collect(),
        }
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the program has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Source text of line `idx` (zero-based).
    pub fn line(&self, idx: usize) -> Option<&str> {
        self.lines.get(idx).map(String::as_str)
    }

    /// All source lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Renders every line without executing anything.
    pub fn disassemble(&self) -> Vec<Listing> {
        self.lines
            .iter()
            .enumerate()
            .map(|(line, source)| Listing {
                line,
                source: source.clone(),
                text: decode_line(source).map(|inst| render(&inst)),
            })
            .collect()
    }
}

/// One line of a batch disassembly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Listing {
    /// Zero-based line number.
    pub line: usize,
    /// Source text of the line.
    pub source: String,
    /// Rendered assembler text, or why the line is not an instruction word.
    pub text: Result<String, DecodeError>,
}
