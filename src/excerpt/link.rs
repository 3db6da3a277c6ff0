//! Deep links with scroll-to-text fragments.

use std::fmt::Write;

use crate::constants::TEXT_FRAGMENT_PREFIX;

/// Builds `<host><document_path>#:~:text=<encoded answer>`.
pub fn deep_link(host: &str, document_path: &str, answer_text: &str) -> String {
    let encoded = encode_text_directive(answer_text);
    let mut link = String::with_capacity(
        host.len() + document_path.len() + TEXT_FRAGMENT_PREFIX.len() + encoded.len(),
    );
    link.push_str(host);
    link.push_str(document_path);
    link.push_str(TEXT_FRAGMENT_PREFIX);
    link.push_str(&encoded);
    link
}

/// Percent-encodes `text` for use as a `text=` directive value.
///
/// Only RFC 3986 unreserved bytes pass through, minus `-`, which is directive syntax
/// alongside `,` and `&`.
pub fn encode_text_directive(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'.' | b'_' | b'~' => out.push(byte as char),
            _ => {
                // Writing to a String cannot fail.
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}
