//! Tag model and the name-to-variant registry.
//!
//! Every recognized tag kind is a variant of the closed [`Tag`] enum. Names
//! without a registry entry fall through to [`GenericTag`], which keeps the
//! raw content as its description. Adding a kind means adding a variant, a
//! [`TagKind`] and a row in [`REGISTRY`].

use crate::parser::tags as grammar;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Registered tag kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    Generic,
    Param,
    Return,
    Author,
    License,
    Throws,
    Var,
    Property,
    Method,
}

/// Tag names with a dedicated grammar. Lookup is exact and case-sensitive.
const REGISTRY: &[(&str, TagKind)] = &[
    ("param", TagKind::Param),
    ("return", TagKind::Return),
    ("author", TagKind::Author),
    ("license", TagKind::License),
    ("throws", TagKind::Throws),
    ("var", TagKind::Var),
    ("property", TagKind::Property),
    ("method", TagKind::Method),
];

impl TagKind {
    /// Resolve a tag name, falling back to [`TagKind::Generic`].
    pub fn for_name(name: &str) -> Self {
        REGISTRY
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, kind)| *kind)
            .unwrap_or(TagKind::Generic)
    }

    /// Canonical tag name, `None` for the generic kind.
    pub fn tag_name(self) -> Option<&'static str> {
        REGISTRY
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(n, _)| *n)
    }
}

// -- Variants -----------------------------------------------------------------

/// Fallback for any tag name without a registry entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenericTag {
    pub name: String,
    pub description: String,
}

/// `@param <type> <$var> <description>`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamTag {
    pub type_name: String,
    pub variable_name: String,
    pub description: String,
}

/// `@return <type> <description>`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReturnTag {
    pub type_name: String,
    pub description: String,
}

/// `@author <name> <<email>>`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorTag {
    pub name: String,
    pub email: String,
}

/// `@license <url> <name>`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LicenseTag {
    pub url: String,
    pub name: String,
}

/// `@throws <type> <description>`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThrowsTag {
    pub type_name: String,
    pub description: String,
}

/// `@var <type> <$var> <description>`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VarTag {
    pub type_name: String,
    pub variable_name: String,
    pub description: String,
}

/// `@property <type> <$name> <description>`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyTag {
    pub type_name: String,
    pub property_name: String,
    pub description: String,
}

/// `@method [static] <returnType> <name>() <description>`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodTag {
    pub is_static: bool,
    pub return_type: String,
    pub method_name: String,
    pub description: String,
}

impl ParamTag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = type_name.into();
        self
    }

    /// Sets the variable, adding the `$` sigil when missing.
    pub fn with_variable_name(mut self, name: impl AsRef<str>) -> Self {
        self.variable_name = with_sigil(name.as_ref());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl ReturnTag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = type_name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl AuthorTag {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl LicenseTag {
    pub fn new(url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
        }
    }
}

// -- Tag ----------------------------------------------------------------------

/// A single `@name ...` annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    Generic(GenericTag),
    Param(ParamTag),
    Return(ReturnTag),
    Author(AuthorTag),
    License(LicenseTag),
    Throws(ThrowsTag),
    Var(VarTag),
    Property(PropertyTag),
    Method(MethodTag),
}

impl Tag {
    /// Bare tag with only a name, e.g. `@deprecated`.
    ///
    /// A registered name gives its own kind with empty fields, so the tag
    /// reads back as the same variant after rendering.
    pub fn named(name: impl Into<String>) -> Self {
        create(&name.into(), "")
    }

    pub fn kind(&self) -> TagKind {
        match self {
            Tag::Generic(_) => TagKind::Generic,
            Tag::Param(_) => TagKind::Param,
            Tag::Return(_) => TagKind::Return,
            Tag::Author(_) => TagKind::Author,
            Tag::License(_) => TagKind::License,
            Tag::Throws(_) => TagKind::Throws,
            Tag::Var(_) => TagKind::Var,
            Tag::Property(_) => TagKind::Property,
            Tag::Method(_) => TagKind::Method,
        }
    }

    /// The name written after `@`.
    pub fn name(&self) -> &str {
        match self {
            Tag::Generic(t) => t.name.as_str(),
            other => other.kind().tag_name().unwrap_or_default(),
        }
    }

    /// Everything rendered after `@name`, empty for a bare tag.
    pub fn content(&self) -> String {
        match self {
            Tag::Generic(t) => t.description.clone(),
            Tag::Param(t) => join_parts(&[
                t.type_name.as_str(),
                t.variable_name.as_str(),
                t.description.as_str(),
            ]),
            Tag::Return(t) => join_parts(&[t.type_name.as_str(), t.description.as_str()]),
            Tag::Author(t) => {
                let email = if t.email.is_empty() {
                    String::new()
                } else {
                    format!("<{}>", t.email)
                };
                join_parts(&[t.name.as_str(), email.as_str()])
            }
            Tag::License(t) => join_parts(&[t.url.as_str(), t.name.as_str()]),
            Tag::Throws(t) => join_parts(&[t.type_name.as_str(), t.description.as_str()]),
            Tag::Var(t) => join_parts(&[
                t.type_name.as_str(),
                t.variable_name.as_str(),
                t.description.as_str(),
            ]),
            Tag::Property(t) => join_parts(&[
                t.type_name.as_str(),
                t.property_name.as_str(),
                t.description.as_str(),
            ]),
            Tag::Method(t) => {
                let modifier = if t.is_static { "static" } else { "" };
                let signature = if t.method_name.is_empty() {
                    String::new()
                } else {
                    format!("{}()", t.method_name)
                };
                join_parts(&[
                    modifier,
                    t.return_type.as_str(),
                    signature.as_str(),
                    t.description.as_str(),
                ])
            }
        }
    }

    /// Canonical single logical line: `@name content`.
    pub fn render(&self) -> String {
        let content = self.content();
        if content.is_empty() {
            format!("@{}", self.name())
        } else {
            format!("@{} {}", self.name(), content)
        }
    }

    /// Debug form naming the tag inside its comment decoration,
    /// e.g. `DocBlock Tag [ * @deprecated ]`.
    pub fn describe(&self) -> String {
        format!("DocBlock Tag [ * {} ]", self.render())
    }

    /// Flatten back into a field-set record.
    pub fn to_fields(&self) -> TagFields {
        let mut fields = TagFields {
            name: self.name().to_string(),
            ..Default::default()
        };
        match self {
            Tag::Generic(t) => fields.description = non_empty(&t.description),
            Tag::Param(t) => {
                fields.type_name = non_empty(&t.type_name);
                fields.variable_name = non_empty(&t.variable_name);
                fields.description = non_empty(&t.description);
            }
            Tag::Return(t) => {
                fields.type_name = non_empty(&t.type_name);
                fields.description = non_empty(&t.description);
            }
            Tag::Author(t) => {
                fields.author_name = non_empty(&t.name);
                fields.email = non_empty(&t.email);
            }
            Tag::License(t) => {
                fields.url = non_empty(&t.url);
                fields.license_name = non_empty(&t.name);
            }
            Tag::Throws(t) => {
                fields.type_name = non_empty(&t.type_name);
                fields.description = non_empty(&t.description);
            }
            Tag::Var(t) => {
                fields.type_name = non_empty(&t.type_name);
                fields.variable_name = non_empty(&t.variable_name);
                fields.description = non_empty(&t.description);
            }
            Tag::Property(t) => {
                fields.type_name = non_empty(&t.type_name);
                fields.variable_name = non_empty(&t.property_name);
                fields.description = non_empty(&t.description);
            }
            Tag::Method(t) => {
                fields.is_static = t.is_static.then_some(true);
                fields.type_name = non_empty(&t.return_type);
                fields.method_name = non_empty(&t.method_name);
                fields.description = non_empty(&t.description);
            }
        }
        fields
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<GenericTag> for Tag {
    fn from(t: GenericTag) -> Self {
        Tag::Generic(t)
    }
}

impl From<ParamTag> for Tag {
    fn from(t: ParamTag) -> Self {
        Tag::Param(t)
    }
}

impl From<ReturnTag> for Tag {
    fn from(t: ReturnTag) -> Self {
        Tag::Return(t)
    }
}

impl From<AuthorTag> for Tag {
    fn from(t: AuthorTag) -> Self {
        Tag::Author(t)
    }
}

impl From<LicenseTag> for Tag {
    fn from(t: LicenseTag) -> Self {
        Tag::License(t)
    }
}

impl From<ThrowsTag> for Tag {
    fn from(t: ThrowsTag) -> Self {
        Tag::Throws(t)
    }
}

impl From<VarTag> for Tag {
    fn from(t: VarTag) -> Self {
        Tag::Var(t)
    }
}

impl From<PropertyTag> for Tag {
    fn from(t: PropertyTag) -> Self {
        Tag::Property(t)
    }
}

impl From<MethodTag> for Tag {
    fn from(t: MethodTag) -> Self {
        Tag::Method(t)
    }
}

impl From<TagFields> for Tag {
    fn from(fields: TagFields) -> Self {
        from_fields(fields)
    }
}

// -- Field sets ---------------------------------------------------------------

/// Flat record for building a tag without going through text parsing.
///
/// Only `name` is required; which other fields are read depends on the kind
/// the name resolves to. Property names travel in `variable_name` and method
/// return types in `type`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagFields {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        rename = "type",
        alias = "types",
        alias = "datatype",
        skip_serializing_if = "Option::is_none"
    )]
    pub type_name: Option<String>,
    #[serde(alias = "variablename", skip_serializing_if = "Option::is_none")]
    pub variable_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_static: Option<bool>,
}

impl TagFields {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

// -- Factory ------------------------------------------------------------------

/// Parse `raw` (the text after `@name`) with the grammar registered for `name`.
///
/// Unknown names produce a [`GenericTag`] holding the trimmed raw content.
/// Never fails: content that does not fit a grammar fills what it can.
pub fn create(name: &str, raw: &str) -> Tag {
    match TagKind::for_name(name) {
        TagKind::Generic => Tag::Generic(GenericTag {
            name: name.to_string(),
            description: raw.trim().to_string(),
        }),
        TagKind::Param => Tag::Param(grammar::param(raw)),
        TagKind::Return => Tag::Return(grammar::return_(raw)),
        TagKind::Author => Tag::Author(grammar::author(raw)),
        TagKind::License => Tag::License(grammar::license(raw)),
        TagKind::Throws => Tag::Throws(grammar::throws(raw)),
        TagKind::Var => Tag::Var(grammar::var(raw)),
        TagKind::Property => Tag::Property(grammar::property(raw)),
        TagKind::Method => Tag::Method(grammar::method(raw)),
    }
}

/// Build a tag from a field-set record, bypassing text parsing.
pub fn from_fields(fields: TagFields) -> Tag {
    let TagFields {
        name,
        description,
        type_name,
        variable_name,
        author_name,
        email,
        url,
        license_name,
        method_name,
        is_static,
    } = fields;
    let description = description.unwrap_or_default();
    let type_name = type_name.unwrap_or_default();
    let variable_name = variable_name.as_deref().map(with_sigil).unwrap_or_default();

    match TagKind::for_name(&name) {
        TagKind::Generic => Tag::Generic(GenericTag { name, description }),
        TagKind::Param => Tag::Param(ParamTag {
            type_name,
            variable_name,
            description,
        }),
        TagKind::Return => Tag::Return(ReturnTag {
            type_name,
            description,
        }),
        TagKind::Author => Tag::Author(AuthorTag {
            name: author_name.unwrap_or_default(),
            email: email.unwrap_or_default(),
        }),
        TagKind::License => Tag::License(LicenseTag {
            url: url.unwrap_or_default(),
            name: license_name.unwrap_or_default(),
        }),
        TagKind::Throws => Tag::Throws(ThrowsTag {
            type_name,
            description,
        }),
        TagKind::Var => Tag::Var(VarTag {
            type_name,
            variable_name,
            description,
        }),
        TagKind::Property => Tag::Property(PropertyTag {
            type_name,
            property_name: variable_name,
            description,
        }),
        TagKind::Method => Tag::Method(MethodTag {
            is_static: is_static.unwrap_or(false),
            return_type: type_name,
            method_name: method_name.unwrap_or_default(),
            description,
        }),
    }
}

fn with_sigil(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() || name.starts_with('$') {
        name.to_string()
    } else {
        format!("${}", name)
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Join non-empty parts with single spaces.
fn join_parts(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_name_is_generic() {
        let tag = create("emptyTag", "");
        assert_eq!(tag.kind(), TagKind::Generic);
        assert_eq!(tag.name(), "emptyTag");
        assert_eq!(tag.render(), "@emptyTag");
    }

    #[test]
    fn registry_is_case_sensitive() {
        assert_eq!(TagKind::for_name("param"), TagKind::Param);
        assert_eq!(TagKind::for_name("Param"), TagKind::Generic);
    }

    #[test]
    fn known_names_dispatch_to_variants() {
        assert!(matches!(create("param", "int $a"), Tag::Param(_)));
        assert!(matches!(create("return", "int"), Tag::Return(_)));
        assert!(matches!(create("author", "A <a@b.c>"), Tag::Author(_)));
        assert!(matches!(create("license", "http://x X"), Tag::License(_)));
        assert!(matches!(create("throws", "E"), Tag::Throws(_)));
        assert!(matches!(create("var", "int"), Tag::Var(_)));
        assert!(matches!(create("property", "int $p"), Tag::Property(_)));
        assert!(matches!(create("method", "int f()"), Tag::Method(_)));
    }

    #[test]
    fn fields_with_only_name_yield_bare_generic() {
        let tag = from_fields(TagFields::named("foo"));
        assert_eq!(
            tag,
            Tag::Generic(GenericTag {
                name: "foo".into(),
                description: String::new()
            })
        );
        assert_eq!(tag.render(), "@foo");
    }

    #[test]
    fn fields_dispatch_on_name() {
        let tag = from_fields(TagFields {
            name: "param".into(),
            type_name: Some("string".into()),
            variable_name: Some("foo".into()),
            ..Default::default()
        });
        assert_eq!(tag.render(), "@param string $foo");
    }

    #[test]
    fn bare_variants_render_just_the_name() {
        assert_eq!(Tag::from(ParamTag::new()).render(), "@param");
        assert_eq!(Tag::from(ReturnTag::new()).render(), "@return");
        assert_eq!(Tag::from(AuthorTag::default()).render(), "@author");
        assert_eq!(Tag::from(LicenseTag::default()).render(), "@license");
        assert_eq!(Tag::from(MethodTag::default()).render(), "@method");
    }

    #[test]
    fn author_render_shapes() {
        assert_eq!(
            Tag::from(AuthorTag::new("Jane", "jane@example.com")).render(),
            "@author Jane <jane@example.com>"
        );
        assert_eq!(Tag::from(AuthorTag::new("Jane", "")).render(), "@author Jane");
    }

    #[test]
    fn named_uses_registered_kind() {
        let tag = Tag::named("return");
        assert_eq!(tag.kind(), TagKind::Return);
        assert_eq!(tag.render(), "@return");
        assert_eq!(create("return", ""), tag);

        let tag = Tag::named("deprecated");
        assert_eq!(tag.kind(), TagKind::Generic);
        assert_eq!(tag.name(), "deprecated");
    }

    #[test]
    fn describe_wraps_rendered_line() {
        assert_eq!(
            create("descriptionTag", "A tag with just a description").describe(),
            "DocBlock Tag [ * @descriptionTag A tag with just a description ]"
        );
        assert_eq!(Tag::named("deprecated").describe(), "DocBlock Tag [ * @deprecated ]");
    }

    #[test]
    fn method_render_shape() {
        let tag = Tag::from(MethodTag {
            is_static: true,
            return_type: "int".into(),
            method_name: "count".into(),
            description: "Number of items".into(),
        });
        assert_eq!(tag.render(), "@method static int count() Number of items");
    }

    #[test]
    fn to_fields_round_trips_through_from_fields() {
        let tags = [
            Tag::from(
                ParamTag::new()
                    .with_type("int")
                    .with_variable_name("$a")
                    .with_description("x"),
            ),
            Tag::from(AuthorTag::new("Jane", "jane@example.com")),
            Tag::from(LicenseTag::new("http://license", "The License")),
            create("method", "static int count() n"),
            create("custom", "free text"),
        ];
        for tag in tags {
            assert_eq!(from_fields(tag.to_fields()), tag);
        }
    }

    #[test]
    fn param_builder_adds_sigil() {
        let tag = ParamTag::new().with_variable_name("foo");
        assert_eq!(tag.variable_name, "$foo");
    }
}
