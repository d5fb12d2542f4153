//! HTML text helpers shared by the provider adapters.
//!
//! Providers differ wildly in how they encode description HTML: Greenhouse
//! and Workday entity-encode once, CareerPuck often double- or even
//! triple-encodes. Stored descriptions are rendered as raw HTML downstream,
//! so decoding has to be complete, not best-effort.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// Named entities observed in provider feeds. CareerPuck in particular uses
/// the full punctuation set (`&sol;`, `&lpar;`, ...) rather than just the
/// XML five.
const NAMED_ENTITIES: &[(&str, &str)] = &[
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&amp;", "&"),
    ("&quot;", "\""),
    ("&apos;", "'"),
    ("&sol;", "/"),
    ("&period;", "."),
    ("&comma;", ","),
    ("&colon;", ":"),
    ("&semi;", ";"),
    ("&equals;", "="),
    ("&plus;", "+"),
    ("&minus;", "-"),
    ("&ast;", "*"),
    ("&percnt;", "%"),
    ("&num;", "#"),
    ("&dollar;", "$"),
    ("&excl;", "!"),
    ("&quest;", "?"),
    ("&lpar;", "("),
    ("&rpar;", ")"),
    ("&lsqb;", "["),
    ("&rsqb;", "]"),
    ("&lcub;", "{"),
    ("&rcub;", "}"),
    ("&lowbar;", "_"),
    ("&hyphen;", "-"),
    ("&ndash;", "\u{2013}"),
    ("&mdash;", "\u{2014}"),
    ("&nbsp;", " "),
    ("&NewLine;", "\n"),
    ("&Tab;", "\t"),
    ("&lsquo;", "\u{2018}"),
    ("&rsquo;", "\u{2019}"),
    ("&ldquo;", "\u{201C}"),
    ("&rdquo;", "\u{201D}"),
    ("&CloseCurlyQuote;", "\u{2019}"),
    ("&OpenCurlyQuote;", "\u{2018}"),
    ("&CloseCurlyDoubleQuote;", "\u{201D}"),
    ("&OpenCurlyDoubleQuote;", "\u{201C}"),
    ("&copy;", "\u{00A9}"),
    ("&reg;", "\u{00AE}"),
    ("&trade;", "\u{2122}"),
    ("&hellip;", "\u{2026}"),
    ("&bull;", "\u{2022}"),
    ("&middot;", "\u{00B7}"),
    ("&uuml;", "\u{00FC}"),
    ("&ouml;", "\u{00F6}"),
    ("&auml;", "\u{00E4}"),
    ("&Uuml;", "\u{00DC}"),
    ("&Ouml;", "\u{00D6}"),
    ("&Auml;", "\u{00C4}"),
    ("&ntilde;", "\u{00F1}"),
    ("&Ntilde;", "\u{00D1}"),
    ("&eacute;", "\u{00E9}"),
    ("&Eacute;", "\u{00C9}"),
];

lazy_static! {
    static ref DECIMAL_ENTITY: Regex = Regex::new(r"&#(\d+);").unwrap();
    static ref HEX_ENTITY: Regex = Regex::new(r"&#x([0-9a-fA-F]+);").unwrap();
    static ref TAG: Regex = Regex::new(r"<[^>]*>").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

fn decode_pass(input: &str) -> String {
    let mut decoded = input.to_string();
    for (entity, replacement) in NAMED_ENTITIES {
        if decoded.contains(entity) {
            decoded = decoded.replace(entity, replacement);
        }
    }
    let decoded = DECIMAL_ENTITY.replace_all(&decoded, |caps: &Captures| {
        caps[1]
            .parse::<u32>()
            .ok()
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_else(|| caps[0].to_string())
    });
    HEX_ENTITY
        .replace_all(&decoded, |caps: &Captures| {
            u32::from_str_radix(&caps[1], 16)
                .ok()
                .and_then(char::from_u32)
                .map(String::from)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Decode named and numeric HTML entities until the text stops changing, so
/// double- and triple-encoded sequences unwrap completely. Every
/// substitution shortens the text, which bounds the loop.
pub fn decode_entities(input: &str) -> String {
    let mut current = input.to_string();
    loop {
        let next = decode_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Replace markup with spaces so adjacent block elements do not run together.
pub fn strip_tags(input: &str) -> String {
    TAG.replace_all(input, " ").into_owned()
}

/// Collapse runs of whitespace to single spaces and trim the ends.
pub fn collapse_whitespace(input: &str) -> String {
    WHITESPACE.replace_all(input, " ").trim().to_string()
}

/// Cap a company blurb at 500 characters, marking the cut with an ellipsis.
pub fn truncate_blurb(text: &str) -> String {
    if text.chars().count() > 500 {
        let mut truncated: String = text.chars().take(497).collect();
        truncated.push_str("...");
        truncated
    } else {
        text.to_string()
    }
}

/// Reduce description HTML to a plain-text company blurb: strip markup,
/// decode entities, collapse whitespace, truncate.
pub fn plain_text_blurb(html: &str) -> String {
    truncate_blurb(&collapse_whitespace(&decode_entities(&strip_tags(html))))
}
