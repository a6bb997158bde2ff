use std::borrow::Cow;
use std::sync::LazyLock;

use quick_xml::escape::resolve_html5_entity;
use regex::{Captures, Regex};

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:#([0-9]+);?|#[xX]([0-9a-fA-F]+);?|([A-Za-z][A-Za-z0-9]{0,31})(;?))").unwrap()
});

// HTML5 names that also resolve without a trailing `;`. Sorted for binary search.
#[rustfmt::skip]
const LEGACY_ENTITIES: &[&str] = &[
    "AElig", "AMP", "Aacute", "Acirc", "Agrave", "Aring", "Atilde", "Auml",
    "COPY", "Ccedil", "ETH", "Eacute", "Ecirc", "Egrave", "Euml", "GT",
    "Iacute", "Icirc", "Igrave", "Iuml", "LT", "Ntilde", "Oacute", "Ocirc",
    "Ograve", "Oslash", "Otilde", "Ouml", "QUOT", "REG", "THORN", "Uacute",
    "Ucirc", "Ugrave", "Uuml", "Yacute", "aacute", "acirc", "acute", "aelig",
    "agrave", "amp", "aring", "atilde", "auml", "brvbar", "ccedil", "cedil",
    "cent", "copy", "curren", "deg", "divide", "eacute", "ecirc", "egrave",
    "eth", "euml", "frac12", "frac14", "frac34", "gt", "iacute", "icirc",
    "iexcl", "igrave", "iquest", "iuml", "laquo", "lt", "macr", "micro",
    "middot", "nbsp", "not", "ntilde", "oacute", "ocirc", "ograve", "ordf",
    "ordm", "oslash", "otilde", "ouml", "para", "plusmn", "pound", "quot",
    "raquo", "reg", "sect", "shy", "sup1", "sup2", "sup3", "szlig",
    "thorn", "times", "uacute", "ucirc", "ugrave", "uml", "uuml", "yacute",
    "yen", "yuml",
];

// Windows-1252 code points for numeric references 0x80..=0x9F.
#[rustfmt::skip]
const CP1252_HIGH: [u32; 32] = [
    0x20AC, 0x81, 0x201A, 0x0192, 0x201E, 0x2026, 0x2020, 0x2021,
    0x02C6, 0x2030, 0x0160, 0x2039, 0x0152, 0x8D, 0x017D, 0x8F,
    0x90, 0x2018, 0x2019, 0x201C, 0x201D, 0x2022, 0x2013, 0x2014,
    0x02DC, 0x2122, 0x0161, 0x203A, 0x0153, 0x9D, 0x017E, 0x0178,
];

/// Remove every `<...>` tag. `<br>` is dropped, not turned into whitespace.
pub fn strip_tags(markup: &str) -> String {
    TAG_RE.replace_all(markup, "").into_owned()
}

/// Decode entities, collapse whitespace runs to one space, trim.
pub fn clean_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let decoded = decode_entities(text);
    WS_RE.replace_all(&decoded, " ").trim().to_string()
}

/// Single left-to-right pass: `&amp;nbsp;` decodes to `&nbsp;`, not a space.
///
/// Legacy names decode without `;` too, taking the longest legacy prefix of
/// the name (`&copy 2024`, `&notit;` -> `¬it;`). Unknown names are kept verbatim.
pub fn decode_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }
    ENTITY_RE.replace_all(text, |caps: &Captures| {
        if let Some(dec) = caps.get(1) {
            numeric_ref(dec.as_str().parse().unwrap_or(u64::MAX))
        } else if let Some(hex) = caps.get(2) {
            numeric_ref(u64::from_str_radix(hex.as_str(), 16).unwrap_or(u64::MAX))
        } else {
            named_ref(&caps[3], &caps[4]).unwrap_or_else(|| caps[0].to_string())
        }
    })
}

fn named_ref(name: &str, semi: &str) -> Option<String> {
    if !semi.is_empty() {
        if let Some(resolved) = resolve_html5_entity(name) {
            return Some(resolved.to_string());
        }
    }
    // names are ASCII, so every byte index is a char boundary
    (2..=name.len()).rev().find_map(|len| {
        let prefix = &name[..len];
        LEGACY_ENTITIES.binary_search(&prefix).ok()?;
        let resolved = resolve_html5_entity(prefix)?;
        Some(format!("{}{}{}", resolved, &name[len..], semi))
    })
}

fn numeric_ref(n: u64) -> String {
    let cp = match n {
        0 => 0xFFFD,
        0x80..=0x9F => CP1252_HIGH[(n - 0x80) as usize],
        0xD800..=0xDFFF => 0xFFFD,
        n if n > 0x10FFFF => 0xFFFD,
        0x01..=0x08 | 0x0B | 0x0E..=0x1F | 0x7F | 0xFDD0..=0xFDEF => return String::new(),
        // U+FFFE, U+FFFF and their counterparts in every plane
        n if n & 0xFFFE == 0xFFFE => return String::new(),
        n => n as u32,
    };
    char::from_u32(cp).map(String::from).unwrap_or_else(|| "\u{FFFD}".into())
}
