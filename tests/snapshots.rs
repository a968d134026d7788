//! Snapshot tests for mdblocks output.
//!
//! Identifiers are random, so snapshots cover block types and data only.
//! Run with `cargo insta review` to update snapshots.

use mdblocks_core::BlockData;
use mdblocks_parser::convert;

/// Helper to convert markdown to pretty JSON of the block data.
fn render(input: &str) -> String {
    let data: Vec<BlockData> = convert(input)
        .unwrap()
        .into_iter()
        .map(|b| b.data)
        .collect();
    serde_json::to_string_pretty(&data).unwrap()
}

// =============================================================================
// Heading Snapshots
// =============================================================================

#[test]
fn test_snapshot_heading_with_emphasis() {
    insta::assert_snapshot!(render("# Hello *World*"), @r#"
    [
      {
        "type": "header",
        "data": {
          "text": "Hello <i>World</i>",
          "level": 1
        }
      }
    ]
    "#);
}

#[test]
fn test_snapshot_setext_heading() {
    insta::assert_snapshot!(render("Section\n-------"), @r#"
    [
      {
        "type": "header",
        "data": {
          "text": "Section",
          "level": 2
        }
      }
    ]
    "#);
}

// =============================================================================
// Inline Snapshots
// =============================================================================

#[test]
fn test_snapshot_paragraph_with_code_and_link() {
    insta::assert_snapshot!(render(r#"Run `cargo` and see [docs](https://x.io "Docs")"#), @r#"
    [
      {
        "type": "paragraph",
        "data": {
          "text": "Run <code class=\"inline-code\">cargo</code> and see <a href=\"https://x.io\" title=\"Docs\">docs</a>"
        }
      }
    ]
    "#);
}

// =============================================================================
// Multi-line Block Snapshots
// =============================================================================

#[test]
fn test_snapshot_unordered_list() {
    insta::assert_snapshot!(render("- first\n* __second__\n+ third"), @r#"
    [
      {
        "type": "list",
        "data": {
          "style": "unordered",
          "items": [
            "first",
            "<b>second</b>",
            "third"
          ]
        }
      }
    ]
    "#);
}

#[test]
fn test_snapshot_code_block() {
    insta::assert_snapshot!(render("```rust\nfn main() {}\n```"), @r#"
    [
      {
        "type": "code",
        "data": {
          "code": "fn main() {}\n"
        }
      }
    ]
    "#);
}

#[test]
fn test_snapshot_table() {
    insta::assert_snapshot!(render("| a | b |\n|---|---|\n| 1 | 2 |"), @r#"
    [
      {
        "type": "table",
        "data": {
          "withHeadings": true,
          "content": [
            [
              "a",
              "b"
            ],
            [
              "1",
              "2"
            ]
          ]
        }
      }
    ]
    "#);
}

#[test]
fn test_snapshot_image() {
    insta::assert_snapshot!(render(r#"![alt text](http://x/y.png "My Title")"#), @r#"
    [
      {
        "type": "image",
        "data": {
          "file": {
            "url": "http://x/y.png"
          },
          "caption": "My Title",
          "withBorder": false,
          "withBackground": false,
          "stretched": false
        }
      }
    ]
    "#);
}
