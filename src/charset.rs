// SPDX-License-Identifier: PMPL-1.0-or-later
//! Decoding raw page bytes into text.
//!
//! Encoding is chosen in this order: byte order mark, the charset declared by
//! the transport (HTTP `Content-Type`), a `<meta charset>` in the first
//! kilobyte, then UTF-8. Undecodable sequences become U+FFFD.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// How far into the document a `<meta charset>` is looked for
const META_SCAN_BYTES: usize = 1024;

static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]*?charset\s*=\s*["']?\s*([a-z0-9_:.\-]+)"#).expect("valid regex")
});

/// The `charset` parameter of a `Content-Type` header value
pub fn charset_from_content_type(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if !name.trim().eq_ignore_ascii_case("charset") {
            return None;
        }
        let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
        (!value.is_empty()).then_some(value)
    })
}

/// Encoding label declared by a `<meta>` tag near the start of the page
pub fn sniff_meta_charset(bytes: &[u8]) -> Option<String> {
    let head = &bytes[..bytes.len().min(META_SCAN_BYTES)];
    let head = String::from_utf8_lossy(head);
    META_CHARSET
        .captures(&head)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Pick the encoding for a page body
pub fn detect_encoding(bytes: &[u8], declared: Option<&str>) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return encoding;
    }

    let from_label = |label: &str| {
        let encoding = Encoding::for_label(label.as_bytes());
        if encoding.is_none() {
            warn!(label, "unknown charset label ignored");
        }
        encoding
    };

    declared
        .and_then(from_label)
        .or_else(|| sniff_meta_charset(bytes).as_deref().and_then(from_label))
        .unwrap_or(UTF_8)
}

/// Decode a page body, never failing
pub fn decode_html(bytes: &[u8], declared: Option<&str>) -> String {
    let encoding = detect_encoding(bytes, declared);
    let (text, used, had_errors) = encoding.decode(bytes);

    if had_errors {
        warn!(encoding = used.name(), "page contained undecodable bytes");
    }
    debug!(encoding = used.name(), bytes = bytes.len(), "page decoded");

    text.into_owned()
}
