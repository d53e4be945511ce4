//! Escaping for embedding text into combined XML documents
//!
//! Two contexts exist: attribute values (paths, notes) and file bodies,
//! which are carried as CDATA sections.

/// Opening marker of a CDATA section
pub const CDATA_OPEN: &str = "<![CDATA[";
/// Closing marker of a CDATA section
pub const CDATA_CLOSE: &str = "]]>";
/// Replacement for a literal `]]>` inside content: closes the current
/// section after `]]` and reopens a new one starting with `>`.
const CDATA_SPLIT: &str = "]]]]><![CDATA[>";

/// Escape a string for a double-quoted XML attribute value
///
/// Escapes: ampersand, angle brackets, double quotes
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}

/// Wrap `content` in CDATA, splitting every literal `]]>`
pub fn wrap_cdata(content: &str) -> String {
    format!(
        "{}{}{}",
        CDATA_OPEN,
        content.replace(CDATA_CLOSE, CDATA_SPLIT),
        CDATA_CLOSE
    )
}

/// Recover the text carried by one or more adjacent CDATA sections.
///
/// Returns `None` if `s` is not a sequence of complete sections.
pub fn unwrap_cdata(s: &str) -> Option<String> {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    if rest.is_empty() {
        return None;
    }

    while !rest.is_empty() {
        let body = rest.strip_prefix(CDATA_OPEN)?;
        let end = body.find(CDATA_CLOSE)?;
        out.push_str(&body[..end]);
        rest = &body[end + CDATA_CLOSE.len()..];
    }

    Some(out)
}
