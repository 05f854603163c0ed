//! Content grammars for the registered tag kinds.
//!
//! Each function receives the text after `@name` and returns the filled
//! variant. Leading tokens are split on any whitespace run; the trailing
//! description is trimmed but keeps its interior spacing. Content that does
//! not match a grammar fills what it can and logs at debug level.

use crate::tag::{
    AuthorTag, LicenseTag, MethodTag, ParamTag, PropertyTag, ReturnTag, ThrowsTag, VarTag,
};
use regex::Regex;
use std::sync::LazyLock;

// `Name <email>` with the bracketed token anchored at the end
static RE_AUTHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?s)(.*?)\s*<([^<>]*)>$").unwrap());

/// Split off the first whitespace-delimited token.
///
/// Returns `(token, rest)` where `rest` has its leading whitespace removed.
/// Type tokens such as `Foo\Bar\Baz` or `int|string[]` stay whole.
fn next_token(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(end) => (&s[..end], s[end..].trim_start()),
        None => (s, ""),
    }
}

/// `[<type>] [<$var>] <description...>`, shared by param, var and property.
fn typed_variable(raw: &str) -> (String, String, String) {
    let (first, rest) = next_token(raw);
    if first.starts_with('$') {
        return (String::new(), first.to_string(), rest.trim_end().to_string());
    }
    let (second, after) = next_token(rest);
    if second.starts_with('$') {
        (first.to_string(), second.to_string(), after.trim_end().to_string())
    } else {
        (first.to_string(), String::new(), rest.trim_end().to_string())
    }
}

/// `<type> <description...>`, shared by return and throws.
fn typed_description(raw: &str) -> (String, String) {
    let (first, rest) = next_token(raw);
    (first.to_string(), rest.trim_end().to_string())
}

pub(crate) fn param(raw: &str) -> ParamTag {
    let (type_name, variable_name, description) = typed_variable(raw);
    if variable_name.is_empty() && !description.is_empty() {
        tracing::debug!(tag = "param", content = raw, "no $variable token, kept as description");
    }
    ParamTag {
        type_name,
        variable_name,
        description,
    }
}

pub(crate) fn var(raw: &str) -> VarTag {
    let (type_name, variable_name, description) = typed_variable(raw);
    VarTag {
        type_name,
        variable_name,
        description,
    }
}

pub(crate) fn property(raw: &str) -> PropertyTag {
    let (type_name, property_name, description) = typed_variable(raw);
    if property_name.is_empty() && !type_name.is_empty() {
        tracing::debug!(tag = "property", content = raw, "no $name token");
    }
    PropertyTag {
        type_name,
        property_name,
        description,
    }
}

pub(crate) fn return_(raw: &str) -> ReturnTag {
    let (type_name, description) = typed_description(raw);
    ReturnTag {
        type_name,
        description,
    }
}

pub(crate) fn throws(raw: &str) -> ThrowsTag {
    let (type_name, description) = typed_description(raw);
    ThrowsTag {
        type_name,
        description,
    }
}

pub(crate) fn author(raw: &str) -> AuthorTag {
    let raw = raw.trim();
    match RE_AUTHOR.captures(raw) {
        Some(caps) => AuthorTag {
            name: caps[1].to_string(),
            email: caps[2].trim().to_string(),
        },
        None => {
            if raw.contains('<') {
                tracing::debug!(
                    tag = "author",
                    content = raw,
                    "unterminated <email>, kept in name"
                );
            }
            AuthorTag {
                name: raw.to_string(),
                email: String::new(),
            }
        }
    }
}

pub(crate) fn license(raw: &str) -> LicenseTag {
    let (url, name) = next_token(raw);
    LicenseTag {
        url: url.to_string(),
        name: name.trim_end().to_string(),
    }
}

/// Byte offset of the `)` closing the `(` that starts `s`.
fn matching_paren(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// `[static] [<returnType>] <name>(<args>) <description...>`
///
/// The argument list is dropped. Without parentheses the leading tokens are
/// read as `[<returnType>] <name>`.
pub(crate) fn method(raw: &str) -> MethodTag {
    let (first, after_static) = next_token(raw);
    let (is_static, rest) = if first == "static" {
        (true, after_static)
    } else {
        (false, raw.trim_start())
    };

    let Some(open) = rest.find('(') else {
        tracing::debug!(tag = "method", content = raw, "no (argument list)");
        let (a, tail) = next_token(rest);
        let (b, description) = next_token(tail);
        let (return_type, method_name, description) = if b.is_empty() {
            ("", a, description)
        } else {
            (a, b, description)
        };
        return MethodTag {
            is_static,
            return_type: return_type.to_string(),
            method_name: method_name.to_string(),
            description: description.trim_end().to_string(),
        };
    };

    let head: Vec<&str> = rest[..open].split_whitespace().collect();
    let (return_type, method_name) = match head.as_slice() {
        [] => ("", ""),
        [name] => ("", *name),
        [ret, .., name] => (*ret, *name),
    };
    let description = match matching_paren(&rest[open..]) {
        Some(close) => rest[open + close + 1..].trim(),
        None => {
            tracing::debug!(tag = "method", content = raw, "unbalanced (argument list)");
            ""
        }
    };
    MethodTag {
        is_static,
        return_type: return_type.to_string(),
        method_name: method_name.to_string(),
        description: description.to_string(),
    }
}
