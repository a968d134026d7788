//! The Editor.js block model.
//!
//! A [`Block`] serializes as `{"id": .., "type": .., "data": {..}}`, which is
//! the shape Editor.js expects in its `blocks` array.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Block schema version written into the [`Document`] envelope.
pub const EDITOR_JS_VERSION: &str = "2.22.2";

/// Style of a list block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    /// Numbered items (1., 2., etc.)
    Ordered,
    /// Bulleted items (-, *, +)
    Unordered,
}

impl std::fmt::Display for ListStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListStyle::Ordered => write!(f, "ordered"),
            ListStyle::Unordered => write!(f, "unordered"),
        }
    }
}

/// Image source, nested under `data.file`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageFile {
    pub url: String,
}

/// Type-specific payload of a block.
///
/// The variant name becomes the block `type`; the fields become `data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum BlockData {
    /// Heading with styled text and a level from 1 to 6
    Header { text: String, level: u8 },
    /// A single line of styled text
    Paragraph { text: String },
    /// Ordered or unordered list of styled items
    List { style: ListStyle, items: Vec<String> },
    /// Whole-line image
    #[serde(rename_all = "camelCase")]
    Image {
        file: ImageFile,
        caption: String,
        with_border: bool,
        with_background: bool,
        stretched: bool,
    },
    /// Fenced code, raw and unstyled, one `\n` per line
    Code {
        code: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
    },
    /// Pipe table; rows of styled cells
    #[serde(rename_all = "camelCase")]
    Table {
        with_headings: bool,
        content: Vec<Vec<String>>,
    },
}

impl BlockData {
    /// The Editor.js block type name.
    pub fn kind(&self) -> &'static str {
        match self {
            BlockData::Header { .. } => "header",
            BlockData::Paragraph { .. } => "paragraph",
            BlockData::List { .. } => "list",
            BlockData::Image { .. } => "image",
            BlockData::Code { .. } => "code",
            BlockData::Table { .. } => "table",
        }
    }

    /// Build image data with the display flags Editor.js expects, all off.
    pub fn image(url: impl Into<String>, caption: impl Into<String>) -> Self {
        BlockData::Image {
            file: ImageFile { url: url.into() },
            caption: caption.into(),
            with_border: false,
            with_background: false,
            stretched: false,
        }
    }
}

/// One structured unit of the output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Short identifier, unique within one conversion run
    pub id: String,
    #[serde(flatten)]
    pub data: BlockData,
}

impl Block {
    pub fn new(id: impl Into<String>, data: BlockData) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }

    pub fn kind(&self) -> &'static str {
        self.data.kind()
    }
}

/// The Editor.js save format: a timestamp, the blocks, and the schema version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Milliseconds since the Unix epoch
    pub time: u64,
    pub blocks: Vec<Block>,
    pub version: String,
}

impl Document {
    /// Wrap blocks in an envelope stamped with the current time.
    pub fn new(blocks: Vec<Block>) -> Self {
        let time = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();
        Self {
            time,
            blocks,
            version: EDITOR_JS_VERSION.to_string(),
        }
    }

    /// Override the schema version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Serialize the envelope to JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        to_json(self, pretty)
    }
}

/// Serialize any value to pretty or compact JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_header_serializes_with_type_and_data() {
        let block = Block::new(
            "abc",
            BlockData::Header {
                text: "Title".into(),
                level: 2,
            },
        );
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(
            value,
            json!({"id": "abc", "type": "header", "data": {"text": "Title", "level": 2}})
        );
    }

    #[test]
    fn test_image_uses_camel_case_flags() {
        let block = Block::new("img", BlockData::image("http://x/y.png", "cap"));
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(value["type"], "image");
        assert_eq!(value["data"]["file"]["url"], "http://x/y.png");
        assert_eq!(value["data"]["caption"], "cap");
        assert_eq!(value["data"]["withBorder"], false);
        assert_eq!(value["data"]["withBackground"], false);
        assert_eq!(value["data"]["stretched"], false);
    }

    #[test]
    fn test_table_and_list_fields() {
        let table = BlockData::Table {
            with_headings: true,
            content: vec![vec!["a".into()]],
        };
        let value = serde_json::to_value(&table).unwrap();
        assert_eq!(value["data"]["withHeadings"], true);

        let list = BlockData::List {
            style: ListStyle::Ordered,
            items: vec!["one".into()],
        };
        let value = serde_json::to_value(&list).unwrap();
        assert_eq!(value["data"]["style"], "ordered");
    }

    #[test]
    fn test_code_language_omitted_when_absent() {
        let code = BlockData::Code {
            code: "x\n".into(),
            language: None,
        };
        let value = serde_json::to_value(&code).unwrap();
        assert_eq!(value, json!({"type": "code", "data": {"code": "x\n"}}));
    }

    #[test]
    fn test_block_deserializes() {
        let block: Block = serde_json::from_str(
            r#"{"id":"q1","type":"paragraph","data":{"text":"hi"}}"#,
        )
        .unwrap();
        assert_eq!(block.kind(), "paragraph");
        assert_eq!(block.data, BlockData::Paragraph { text: "hi".into() });
    }

    #[test]
    fn test_document_envelope() {
        let doc = Document::new(vec![]).with_version("9.9.9");
        let value: serde_json::Value = serde_json::from_str(&doc.to_json(false).unwrap()).unwrap();
        assert_eq!(value["version"], "9.9.9");
        assert!(value["time"].as_u64().unwrap() > 0);
        assert_eq!(value["blocks"], json!([]));
    }

    #[test]
    fn test_to_json_pretty_and_compact() {
        let blocks = vec![Block::new("a", BlockData::Paragraph { text: "x".into() })];
        let compact = to_json(&blocks, false).unwrap();
        assert_eq!(
            compact,
            r#"[{"id":"a","type":"paragraph","data":{"text":"x"}}]"#
        );
        let pretty = to_json(&blocks, true).unwrap();
        assert!(pretty.contains('\n'));
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&pretty).unwrap(),
            serde_json::from_str::<serde_json::Value>(&compact).unwrap()
        );
    }
}
