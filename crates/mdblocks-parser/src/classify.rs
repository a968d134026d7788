//! Line classification.
//!
//! [`classify`] looks at one line in isolation and reports what kind of line
//! it is, together with the raw fields it captured. The priority order is
//! fixed: fence, ATX header, setext underline, ordered item, unordered item,
//! image, table row, paragraph, blank. Merging lines into blocks is the
//! cursor's job, not the classifier's.

use mdblocks_core::ParseOptions;
use regex::Regex;
use std::sync::LazyLock;

// =============================================================================
// Regex patterns
// =============================================================================

/// Line separators: \r\n, \n or \r, mixed freely
static LINE_BREAK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n|\n|\r").unwrap());

/// Regex for ATX headings
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.*)$").unwrap());

/// Regex for setext underlines (only `=` or only `-`)
static SETEXT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(=+|-+)$").unwrap());

/// Regex for ordered list items: 1. text
static ORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s+(\S.*)$").unwrap());

/// Regex for unordered list items: -, * or + followed by text
static UNORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*+]\s+(\S.*)$").unwrap());

/// Regex for a whole-line image: ![alt](url "title")
static IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^!\[([^\]]*)\]\(([^\s()"]*)(?:\s+"([^"]*)")?\)$"#).unwrap()
});

/// Regex for table separator interiors (only |, -, :, spaces, with a dash)
static TABLE_SEP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\s|:-]*-[\s|:-]*$").unwrap());

const FENCE: &str = "```";

// =============================================================================
// Types
// =============================================================================

/// What a single line is, with its raw captured fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// A ``` fence; `info` is the text after the backticks, kept only when
    /// the `code_language` option is on
    Fence { info: Option<String> },
    /// A verbatim line inside an open code block
    CodeLine(String),
    /// `#` to `######` followed by whitespace
    Heading { level: u8, text: String },
    /// A line of only `=` (level 1) or only `-` (level 2)
    SetextUnderline { level: u8 },
    /// `1. item`
    OrderedItem(String),
    /// `- item`, `* item` or `+ item`
    UnorderedItem(String),
    /// `![alt](url "title")`
    Image {
        alt: String,
        url: String,
        title: Option<String>,
    },
    /// `| a | b |`; `delimiter` is set for `|---|---|` style rows
    TableRow { cells: Vec<String>, delimiter: bool },
    /// Any other non-blank line, trimmed
    Paragraph(String),
    /// Empty or whitespace-only line
    Blank,
}

impl LineKind {
    /// Short name used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            LineKind::Fence { .. } => "fence",
            LineKind::CodeLine(_) => "code-line",
            LineKind::Heading { .. } => "heading",
            LineKind::SetextUnderline { .. } => "setext-underline",
            LineKind::OrderedItem(_) => "ordered-item",
            LineKind::UnorderedItem(_) => "unordered-item",
            LineKind::Image { .. } => "image",
            LineKind::TableRow { .. } => "table-row",
            LineKind::Paragraph(_) => "paragraph",
            LineKind::Blank => "blank",
        }
    }
}

// =============================================================================
// Classification
// =============================================================================

/// Split a document into lines on any mix of `\r\n`, `\n` and `\r`.
pub fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    LINE_BREAK_RE.split(content)
}

/// Classify one line.
///
/// `in_code` is true while a fence is open; then only a closing fence is
/// recognized and everything else is a [`LineKind::CodeLine`].
pub fn classify(line: &str, in_code: bool, options: &ParseOptions) -> LineKind {
    let trimmed = line.trim();

    if let Some(rest) = trimmed.strip_prefix(FENCE) {
        let info = rest.trim_start_matches('`').trim();
        let info = (options.code_language && !info.is_empty()).then(|| info.to_string());
        return LineKind::Fence { info };
    }
    if in_code {
        return LineKind::CodeLine(line.to_string());
    }

    if let Some(caps) = HEADING_RE.captures(line) {
        let level = caps.get(1).map(|m| m.as_str().len()).unwrap_or(1) as u8;
        let text = caps.get(2).map(|m| m.as_str().trim_end()).unwrap_or("");
        return LineKind::Heading {
            level,
            text: text.to_string(),
        };
    }

    if let Some(caps) = SETEXT_RE.captures(line) {
        let level = match caps.get(1).map(|m| m.as_str()) {
            Some(marks) if marks.starts_with('-') => 2,
            _ => 1,
        };
        return LineKind::SetextUnderline { level };
    }

    if let Some(caps) = ORDERED_ITEM_RE.captures(line) {
        let item = caps.get(1).map(|m| m.as_str().trim_end()).unwrap_or("");
        return LineKind::OrderedItem(item.to_string());
    }

    if let Some(caps) = UNORDERED_ITEM_RE.captures(line) {
        let item = caps.get(1).map(|m| m.as_str().trim_end()).unwrap_or("");
        return LineKind::UnorderedItem(item.to_string());
    }

    if options.images {
        if let Some(caps) = IMAGE_RE.captures(trimmed) {
            return LineKind::Image {
                alt: caps.get(1).map(|m| m.as_str()).unwrap_or("").to_string(),
                url: caps.get(2).map(|m| m.as_str()).unwrap_or("").to_string(),
                title: caps
                    .get(3)
                    .map(|m| m.as_str().to_string())
                    .filter(|t| !t.is_empty()),
            };
        }
    }

    if options.tables {
        if let Some(interior) = table_interior(trimmed) {
            return LineKind::TableRow {
                delimiter: TABLE_SEP_RE.is_match(interior),
                cells: split_cells(interior),
            };
        }
    }

    if trimmed.is_empty() {
        LineKind::Blank
    } else {
        LineKind::Paragraph(trimmed.to_string())
    }
}

/// The text between the outer pipes of a `|...|` row.
///
/// The closing pipe must not be escaped.
fn table_interior(trimmed: &str) -> Option<&str> {
    let interior = trimmed.strip_prefix('|')?.strip_suffix('|')?;
    let backslashes = interior.bytes().rev().take_while(|&b| b == b'\\').count();
    (backslashes % 2 == 0).then_some(interior)
}

/// Split a row interior on unescaped pipes, trimming each cell.
///
/// Escaped pipes keep their backslash; the inline styler removes it.
pub fn split_cells(interior: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut backslashes = 0usize;

    for c in interior.chars() {
        if c == '|' && backslashes % 2 == 0 {
            cells.push(cell.trim().to_string());
            cell.clear();
        } else {
            cell.push(c);
        }
        backslashes = if c == '\\' { backslashes + 1 } else { 0 };
    }
    cells.push(cell.trim().to_string());
    cells
}
