//! mdblocks Parser
//!
//! A line-oriented markdown parser that turns a document into Editor.js
//! blocks: headers, paragraphs, lists, images, code and tables.
//!
//! # Overview
//!
//! Each line is classified on its own ([`classify`]), then folded into the
//! two-slot [`Cursor`], which decides whether the line extends the block in
//! progress or finishes it. Finished blocks receive an identifier and are
//! appended to the output in document order.
//!
//! # Example
//!
//! ```
//! use mdblocks_parser::Parser;
//!
//! let mut parser = Parser::new();
//! parser.process("# Hello World").unwrap();
//! parser.process("1. first").unwrap();
//! parser.process("2. second").unwrap();
//! parser.finish().unwrap();
//!
//! let kinds: Vec<&str> = parser.blocks().iter().map(|b| b.kind()).collect();
//! assert_eq!(kinds, ["header", "list"]);
//! ```

pub mod classify;
pub mod cursor;
pub mod inline;

pub use classify::{classify, split_lines, split_cells, LineKind};
pub use cursor::{Cursor, Pending};
pub use inline::{escape_text, style_text, InlineStyler};

use log::{debug, trace, warn};
use mdblocks_core::{Block, IdGenerator, ParseOptions, RandomIds, Result};

// =============================================================================
// Parser
// =============================================================================

/// Markdown to block parser.
///
/// Blocks emitted before a fatal error remain available through
/// [`Parser::blocks`] for diagnostics; they are not a valid conversion.
#[derive(Debug)]
pub struct Parser<G = RandomIds> {
    cursor: Cursor,
    styler: InlineStyler,
    options: ParseOptions,
    ids: G,
    blocks: Vec<Block>,
    /// Lines consumed so far, for error reports
    line_no: usize,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Create a parser with default options and random identifiers.
    pub fn new() -> Self {
        Self::with_options(ParseOptions::default())
    }

    /// Create a parser with custom options and random identifiers.
    pub fn with_options(options: ParseOptions) -> Self {
        Parser::with_ids(options, RandomIds::default())
    }
}

impl<G: IdGenerator> Parser<G> {
    /// Create a parser with a specific identifier source.
    pub fn with_ids(options: ParseOptions, ids: G) -> Self {
        Self {
            cursor: Cursor::new(),
            styler: InlineStyler::with_links(options.links),
            options,
            ids,
            blocks: Vec::new(),
            line_no: 0,
        }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Blocks emitted so far.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    /// Consume one line, flushing the previous block if it is complete.
    pub fn process(&mut self, line: &str) -> Result<()> {
        self.line_no += 1;
        let kind = classify(line, self.cursor.in_code(), &self.options);
        trace!("line {}: {}", self.line_no, kind.name());
        self.advance(kind)
    }

    /// Flush whatever is still pending after the last line.
    ///
    /// An unterminated fence is closed with the content collected so far.
    /// Calling this twice emits nothing the second time.
    pub fn finish(&mut self) -> Result<()> {
        if self.cursor.in_code() {
            warn!("unterminated code fence at end of input");
            self.advance(LineKind::Fence { info: None })?;
        }
        self.advance(LineKind::Blank)
    }

    /// Parse a complete document and return its blocks.
    pub fn parse_document(mut self, content: &str) -> Result<Vec<Block>> {
        for line in split_lines(content) {
            self.process(line)?;
        }
        self.finish()?;
        Ok(self.blocks)
    }

    fn advance(&mut self, kind: LineKind) -> Result<()> {
        if let Some(pending) = self.cursor.step(kind, self.line_no, &self.styler)? {
            self.flush(pending)?;
        }
        Ok(())
    }

    fn flush(&mut self, pending: Pending) -> Result<()> {
        let block = Block::new(self.ids.next_id(), pending.into_data()?);
        debug!("block {} ({}) complete", block.id, block.kind());
        self.blocks.push(block);
        Ok(())
    }
}

/// Convert a markdown document to blocks with default options.
pub fn convert(markdown: &str) -> Result<Vec<Block>> {
    Parser::new().parse_document(markdown)
}

// =============================================================================
// Tests
// =============================================================================
