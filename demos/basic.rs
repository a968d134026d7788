//! Basic example of converting markdown to Editor.js blocks.
//!
//! Run with: cargo run --example basic

use mdblocks_core::{Document, ParseOptions, SeededIds};
use mdblocks_parser::Parser;

fn main() -> mdblocks_core::Result<()> {
    let markdown = r#"# Welcome to mdblocks

This is a **bold** statement with *italic* text and `inline code`.

Shopping
--------

1. First item
2. Second item with a [link](https://example.com "Example")

```rust
fn main() {
    println!("Hello, world!");
}
```

| Feature | Status |
|---------|--------|
| Tables  | Done   |
| Images  | Done   |

![A picture](https://example.com/pic.png "Caption")
"#;

    // A fixed seed keeps block identifiers stable between runs
    let parser = Parser::with_ids(ParseOptions::default(), SeededIds::new(2022));
    let blocks = parser.parse_document(markdown)?;

    for block in &blocks {
        println!("{} {}", block.id, block.kind());
    }
    println!();
    println!("{}", Document::new(blocks).to_json(true)?);

    Ok(())
}
