//! Docblock parser — raw comment text to [`DocBlock`].
//!
//! Two passes: normalization strips the `/** ... */` delimiters and the
//! per-line `*` decoration, then segmentation splits the undecorated lines
//! into the description block and the tag lines with their continuations.

pub mod tags;

use crate::model::DocBlock;
use crate::tag;
use regex::Regex;
use std::sync::LazyLock;

// Tag start: `@` then a run of non-whitespace, then the raw content
static RE_TAG_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@(\S+)(.*)$").unwrap());

/// Parse a verbatim comment block, delimiters and decoration included.
///
/// Empty or delimiter-only input gives an empty model.
pub fn parse(raw: &str) -> DocBlock {
    let lines = normalize(raw);
    parse_lines(lines.iter().map(String::as_str))
}

/// Parse lines that have already been stripped of comment decoration.
pub fn parse_lines<'a, I>(lines: I) -> DocBlock
where
    I: IntoIterator<Item = &'a str>,
{
    let mut description: Vec<&str> = Vec::new();
    // (name, accumulated content) in encounter order
    let mut pending: Vec<(String, String)> = Vec::new();

    for line in lines {
        let line = line.trim_end();
        if let Some(caps) = RE_TAG_START.captures(line.trim_start()) {
            pending.push((caps[1].to_string(), collapse(&caps[2])));
        } else if let Some((_, content)) = pending.last_mut() {
            append_continuation(content, line);
        } else {
            description.push(line);
        }
    }

    let (short, long) = split_description(&description, !pending.is_empty());
    let tags: Vec<_> = pending
        .into_iter()
        .map(|(name, content)| tag::create(&name, &content))
        .collect();

    tracing::trace!(
        short_len = short.len(),
        long_len = long.len(),
        tags = tags.len(),
        "parsed docblock"
    );
    DocBlock::with(short, long, tags)
}

// -- Normalization ------------------------------------------------------------

/// Strip delimiters and per-line decoration.
fn normalize(raw: &str) -> Vec<String> {
    let raw = raw.trim();
    let body = raw.strip_suffix("*/").unwrap_or(raw);
    let body = body
        .strip_prefix("/**")
        .or_else(|| body.strip_prefix("/*"))
        .unwrap_or(body);
    body.lines().map(strip_decoration).collect()
}

/// Drop indentation, one leading `*`, and at most one blank after it.
fn strip_decoration(line: &str) -> String {
    let line = line.trim_start();
    let line = match line.strip_prefix('*') {
        Some(rest) => rest
            .strip_prefix(' ')
            .or_else(|| rest.strip_prefix('\t'))
            .unwrap_or(rest),
        None => line,
    };
    line.trim_end().to_string()
}

// -- Segmentation -------------------------------------------------------------

/// Collapse every whitespace run to a single space and trim.
fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extend a tag's content with a continuation line.
fn append_continuation(content: &mut String, line: &str) {
    let text = collapse(line);
    if text.is_empty() {
        return;
    }
    if !content.is_empty() {
        content.push(' ');
    }
    content.push_str(&text);
}

/// Split the description block into short and long descriptions.
///
/// The short description runs up to the first blank line, joined by spaces.
/// A blank separating the description block from the first tag counts; one
/// left over from the closing delimiter does not. Without any blank line it
/// is the first line alone. The long description keeps its line structure.
fn split_description(lines: &[&str], tags_follow: bool) -> (String, String) {
    let body = if tags_follow {
        match lines.iter().position(|l| !l.trim().is_empty()) {
            Some(start) => &lines[start..],
            None => &lines[..0],
        }
    } else {
        trim_blank_lines(lines)
    };
    if body.is_empty() {
        return (String::new(), String::new());
    }

    let (short, rest) = match body.iter().position(|l| l.trim().is_empty()) {
        Some(blank) => (
            body[..blank]
                .iter()
                .map(|l| l.trim())
                .collect::<Vec<_>>()
                .join(" "),
            &body[blank..],
        ),
        None => (body[0].trim().to_string(), &body[1..]),
    };
    let long = trim_blank_lines(rest).join("\n");
    (short, long)
}

fn trim_blank_lines<'a, 'b>(lines: &'b [&'a str]) -> &'b [&'a str] {
    let Some(start) = lines.iter().position(|l| !l.trim().is_empty()) else {
        return &[];
    };
    let end = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .unwrap_or(start)
        + 1;
    &lines[start..end]
}
