//! Two-slot parser cursor.
//!
//! The cursor holds the block being built from the line just read
//! (`current`) and, during a step, the block left over from the prior line
//! (`previous`). Each [`Cursor::step`] either folds the new line into
//! `previous` (list, code and table merging, setext conversion) or hands
//! `previous` back to the caller as finished.

use crate::classify::LineKind;
use crate::inline::{escape_text, InlineStyler};
use mdblocks_core::{BlockData, ListStyle, MdBlocksError, Result};

/// A block still under construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pending {
    Header { text: String, level: u8 },
    Paragraph { text: String },
    List { style: ListStyle, items: Vec<String> },
    Image { url: String, caption: String },
    Code { code: String, language: Option<String> },
    Table { with_headings: bool, content: Vec<Vec<String>> },
}

impl Pending {
    pub fn name(&self) -> &'static str {
        match self {
            Pending::Header { .. } => "header",
            Pending::Paragraph { .. } => "paragraph",
            Pending::List {
                style: ListStyle::Ordered,
                ..
            } => "ordered-list",
            Pending::List {
                style: ListStyle::Unordered,
                ..
            } => "unordered-list",
            Pending::Image { .. } => "image",
            Pending::Code { .. } => "code",
            Pending::Table { .. } => "table",
        }
    }

    /// Convert into block data, checking the invariants the cursor relies on.
    pub fn into_data(self) -> Result<BlockData> {
        let data = match self {
            Pending::Header { text, level } => {
                if !(1..=6).contains(&level) {
                    return Err(MdBlocksError::InternalConsistency(format!(
                        "header level {level} out of range"
                    )));
                }
                BlockData::Header { text, level }
            }
            Pending::Paragraph { text } => BlockData::Paragraph { text },
            Pending::List { style, items } => {
                if items.is_empty() {
                    return Err(MdBlocksError::InternalConsistency(format!(
                        "{style} list flushed without items"
                    )));
                }
                BlockData::List { style, items }
            }
            Pending::Image { url, caption } => BlockData::image(url, caption),
            Pending::Code { code, language } => BlockData::Code { code, language },
            Pending::Table {
                with_headings,
                content,
            } => BlockData::Table {
                with_headings,
                content,
            },
        };
        Ok(data)
    }
}

/// Parser cursor state.
#[derive(Debug, Clone, Default)]
pub struct Cursor {
    current: Option<Pending>,
    in_code: bool,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a code fence is open.
    pub fn in_code(&self) -> bool {
        self.in_code
    }

    /// The block built from the most recent line, if any.
    pub fn current(&self) -> Option<&Pending> {
        self.current.as_ref()
    }

    /// Advance by one classified line.
    ///
    /// Returns the block that became complete, if any. `line` is the 1-based
    /// line number, used in error reports.
    pub fn step(
        &mut self,
        kind: LineKind,
        line: usize,
        styler: &InlineStyler,
    ) -> Result<Option<Pending>> {
        let previous = self.current.take();

        match kind {
            LineKind::Fence { .. } if self.in_code => {
                self.in_code = false;
                match previous {
                    Some(code @ Pending::Code { .. }) => Ok(Some(code)),
                    other => Err(mismatch("closing fence", other.as_ref())),
                }
            }
            LineKind::Fence { info } => {
                self.in_code = true;
                self.current = Some(Pending::Code {
                    code: String::new(),
                    language: info,
                });
                Ok(previous)
            }
            LineKind::CodeLine(text) => match previous {
                Some(Pending::Code { mut code, language }) => {
                    code.push_str(&text);
                    code.push('\n');
                    self.current = Some(Pending::Code { code, language });
                    Ok(None)
                }
                other => Err(mismatch("code line", other.as_ref())),
            },
            LineKind::Heading { level, text } => {
                self.current = Some(Pending::Header {
                    text: styler.escape_and_style(&text),
                    level,
                });
                Ok(previous)
            }
            LineKind::SetextUnderline { level } => match previous {
                Some(Pending::Paragraph { text }) => {
                    self.current = Some(Pending::Header { text, level });
                    Ok(None)
                }
                _ => Err(MdBlocksError::HeaderSyntax { line }),
            },
            LineKind::OrderedItem(item) => {
                Ok(self.push_item(previous, ListStyle::Ordered, styler.escape_and_style(&item)))
            }
            LineKind::UnorderedItem(item) => Ok(self.push_item(
                previous,
                ListStyle::Unordered,
                styler.escape_and_style(&item),
            )),
            LineKind::Image { alt, url, title } => {
                let caption = escape_text(title.as_deref().unwrap_or(&alt));
                self.current = Some(Pending::Image { url, caption });
                Ok(previous)
            }
            LineKind::TableRow { cells, delimiter } => {
                let row: Vec<String> = cells.iter().map(|c| styler.escape_and_style(c)).collect();
                match previous {
                    Some(Pending::Table {
                        with_headings,
                        mut content,
                    }) => {
                        if !delimiter {
                            content.push(row);
                        }
                        self.current = Some(Pending::Table {
                            with_headings: with_headings || delimiter,
                            content,
                        });
                        Ok(None)
                    }
                    other => {
                        self.current = Some(Pending::Table {
                            with_headings: false,
                            content: vec![row],
                        });
                        Ok(other)
                    }
                }
            }
            LineKind::Paragraph(text) => {
                self.current = Some(Pending::Paragraph {
                    text: styler.escape_and_style(&text),
                });
                Ok(previous)
            }
            LineKind::Blank => Ok(previous),
        }
    }

    fn push_item(
        &mut self,
        previous: Option<Pending>,
        style: ListStyle,
        item: String,
    ) -> Option<Pending> {
        match previous {
            Some(Pending::List {
                style: prev_style,
                mut items,
            }) if prev_style == style => {
                items.push(item);
                self.current = Some(Pending::List { style, items });
                None
            }
            other => {
                self.current = Some(Pending::List {
                    style,
                    items: vec![item],
                });
                other
            }
        }
    }
}

fn mismatch(what: &str, previous: Option<&Pending>) -> MdBlocksError {
    MdBlocksError::InternalConsistency(format!(
        "{what} while pending block is {}",
        previous.map(Pending::name).unwrap_or("none")
    ))
}
