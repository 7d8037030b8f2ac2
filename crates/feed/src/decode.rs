//! HTML entity decoding for feed text.
//!
//! Feed titles and descriptions arrive with HTML entities baked in
//! (`&amp;`, `&#8217;`, `&ldquo;` …). Articles carry decoded text, so the
//! pipeline runs every title/summary through here before trimming.

use regex::Regex;

/// Named entities seen in real-world news feeds. `&amp;` must stay last:
/// decoding it earlier would turn `&amp;lt;` into `<` in a single pass.
const NAMED_ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&quot;", "\""),
    ("&apos;", "'"),
    ("&lsquo;", "\u{2018}"),
    ("&rsquo;", "\u{2019}"),
    ("&ldquo;", "\u{201C}"),
    ("&rdquo;", "\u{201D}"),
    ("&ndash;", "\u{2013}"),
    ("&mdash;", "\u{2014}"),
    ("&hellip;", "\u{2026}"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&amp;", "&"),
];

/// Decode HTML entities in `text`.
///
/// Handles numeric references (`&#39;`, `&#x2019;`) and the named set
/// above. Unknown references are left untouched rather than mangled.
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let numeric = Regex::new(r"&#([xX][0-9a-fA-F]+|[0-9]+);").expect("invalid entity regex");
    let text = numeric.replace_all(text, |caps: &regex::Captures| {
        let body = &caps[1];
        let code = if let Some(hex) = body.strip_prefix(['x', 'X']) {
            u32::from_str_radix(hex, 16).ok()
        } else {
            body.parse::<u32>().ok()
        };
        match code.and_then(char::from_u32) {
            Some(c) => c.to_string(),
            None => caps[0].to_string(),
        }
    });

    NAMED_ENTITIES
        .iter()
        .fold(text.into_owned(), |acc, (entity, plain)| {
            acc.replace(entity, plain)
        })
}
