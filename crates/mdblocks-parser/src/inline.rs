//! Inline style transformer.
//!
//! Rewrites markdown emphasis, inline code and links into the inline markup
//! Editor.js understands (`<b>`, `<i>`, `<code class="inline-code">`, `<a>`).
//! Input must already be HTML-escaped; the tags inserted here stay live.
//!
//! Emphasis uses an explicit scanner because the delimiter rules need
//! look-behind and look-ahead:
//!
//! - a marker preceded by an odd number of backslashes is escaped;
//! - an opener is not preceded by an alphanumeric character, and is followed
//!   by a character that is neither whitespace nor the marker character;
//! - a closer is preceded by a character that is neither whitespace nor the
//!   marker character, and is not followed by an alphanumeric character;
//! - the first valid closer after an opener wins.

use regex::{Captures, Regex};
use std::sync::LazyLock;

// =============================================================================
// Regex patterns
// =============================================================================

/// Inline code span
static CODE_SPAN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

/// Link with optional quoted title: [label](url "title")
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\[([^\[\]]*)\]\(([^\s()"]*)(?:\s+"([^"]*)")?\)"#).unwrap()
});

/// Autolink, already escaped: &lt;scheme://rest&gt;. The rest may not hold
/// whitespace or quotes, since it lands inside an `href` attribute.
static AUTOLINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"&lt;([A-Za-z][A-Za-z0-9+.-]*)://([^\s"]*?)&gt;"#).unwrap()
});

/// Characters a backslash may escape.
const ESCAPABLE: &[char] = &['\\', '*', '_', '`', '[', ']', '(', ')', '|', '!', '#'];

/// Emphasis passes in the order they run: triple, bold, italic.
const EMPHASIS: &[(&str, &str, &str)] = &[
    ("***", "<b><i>", "</i></b>"),
    ("___", "<b><i>", "</i></b>"),
    ("**", "<b>", "</b>"),
    ("__", "<b>", "</b>"),
    ("*", "<i>", "</i>"),
    ("_", "<i>", "</i>"),
];

// =============================================================================
// Styler
// =============================================================================

/// Inline style transformer.
#[derive(Debug, Clone, Copy)]
pub struct InlineStyler {
    /// Whether to rewrite links and autolinks
    pub process_links: bool,
}

impl Default for InlineStyler {
    fn default() -> Self {
        Self::new()
    }
}

impl InlineStyler {
    pub fn new() -> Self {
        Self {
            process_links: true,
        }
    }

    pub fn with_links(process_links: bool) -> Self {
        Self { process_links }
    }

    /// Apply all passes to already-escaped text.
    pub fn style(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (marker, open, close) in EMPHASIS {
            out = wrap_emphasis(&out, marker, open, close);
        }
        out = replace_unescaped(&CODE_SPAN_RE, &out, |caps| {
            format!(r#"<code class="inline-code">{}</code>"#, &caps[1])
        });
        if self.process_links {
            out = replace_unescaped(&LINK_RE, &out, |caps| {
                let title = caps
                    .get(3)
                    .map(|t| format!(r#" title="{}""#, t.as_str()))
                    .unwrap_or_default();
                format!(r#"<a href="{}"{}>{}</a>"#, &caps[2], title, &caps[1])
            });
            out = AUTOLINK_RE
                .replace_all(&out, r#"<a href="$1://$2">$1://$2</a>"#)
                .into_owned();
        }
        unescape(&out)
    }

    /// Escape raw text, then style it.
    pub fn escape_and_style(&self, raw: &str) -> String {
        self.style(&escape_text(raw))
    }
}

/// Style already-escaped text with every pass enabled.
pub fn style_text(text: &str) -> String {
    InlineStyler::new().style(text)
}

/// Escape `&`, `<` and `>` so document text never becomes live markup.
pub fn escape_text(raw: &str) -> String {
    html_escape::encode_text(raw).into_owned()
}

// =============================================================================
// Scanning helpers
// =============================================================================

/// True if the byte at `at` is preceded by an odd run of backslashes.
fn is_escaped(text: &str, at: usize) -> bool {
    text[..at].bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 1
}

fn char_before(text: &str, at: usize) -> Option<char> {
    text[..at].chars().next_back()
}

fn char_after(text: &str, at: usize) -> Option<char> {
    text[at..].chars().next()
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric()
}

fn is_opener(text: &str, at: usize, marker: &str, mark: char) -> bool {
    if is_escaped(text, at) {
        return false;
    }
    if char_before(text, at).is_some_and(is_word) {
        return false;
    }
    matches!(char_after(text, at + marker.len()), Some(c) if !c.is_whitespace() && c != mark)
}

fn is_closer(text: &str, at: usize, marker: &str, mark: char) -> bool {
    if is_escaped(text, at) {
        return false;
    }
    if !matches!(char_before(text, at), Some(c) if !c.is_whitespace() && c != mark) {
        return false;
    }
    !char_after(text, at + marker.len()).is_some_and(is_word)
}

/// Byte offsets at or after `from` where `marker` starts.
fn marker_positions<'a>(
    text: &'a str,
    marker: &'a str,
    from: usize,
) -> impl Iterator<Item = usize> + 'a {
    text[from..]
        .char_indices()
        .map(move |(i, _)| from + i)
        .filter(move |&at| text[at..].starts_with(marker))
}

/// Wrap every delimited span of `marker` with `open`/`close`.
fn wrap_emphasis(text: &str, marker: &str, open: &str, close: &str) -> String {
    let Some(mark) = marker.chars().next() else {
        return text.to_string();
    };
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut search = 0;

    while let Some(start) =
        marker_positions(text, marker, search).find(|&at| is_opener(text, at, marker, mark))
    {
        let content = start + marker.len();
        match marker_positions(text, marker, content).find(|&at| is_closer(text, at, marker, mark)) {
            Some(end) => {
                out.push_str(&text[copied..start]);
                out.push_str(open);
                out.push_str(&text[content..end]);
                out.push_str(close);
                copied = end + marker.len();
                search = copied;
            }
            // closers do not depend on the opener, so later openers fail too
            None => break,
        }
    }

    out.push_str(&text[copied..]);
    out
}

/// Like `Regex::replace_all`, but leaves matches that start with an escaped
/// character untouched.
fn replace_unescaped<F>(re: &Regex, text: &str, mut rewrite: F) -> String
where
    F: FnMut(&Captures) -> String,
{
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    for caps in re.captures_iter(text) {
        let Some(m) = caps.get(0) else { continue };
        if is_escaped(text, m.start()) {
            continue;
        }
        out.push_str(&text[copied..m.start()]);
        out.push_str(&rewrite(&caps));
        copied = m.end();
    }
    out.push_str(&text[copied..]);
    out
}

/// Drop the backslash in front of escaped delimiters.
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if ESCAPABLE.contains(&next) {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}
