//! Docblock model: descriptions plus an ordered tag list.

use crate::error::Result;
use crate::parser;
use crate::render::{CommentRenderer, RenderOptions, Renderer};
use crate::tag::{self, Tag, TagFields};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A structured documentation comment.
///
/// Tag order is render order; duplicate names are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocBlock {
    short_description: String,
    long_description: String,
    tags: Vec<Tag>,
}

impl DocBlock {
    /// Empty block for programmatic building.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(
        short_description: impl Into<String>,
        long_description: impl Into<String>,
        tags: Vec<Tag>,
    ) -> Self {
        Self {
            short_description: short_description.into(),
            long_description: long_description.into(),
            tags,
        }
    }

    /// Recover a block from verbatim comment text.
    pub fn parse(raw: &str) -> Self {
        parser::parse(raw)
    }

    /// Build a block from a field-set record.
    pub fn from_fields(fields: DocBlockFields) -> Self {
        Self {
            short_description: fields.short_description,
            long_description: fields.long_description,
            tags: fields.tags.into_iter().map(tag::from_fields).collect(),
        }
    }

    /// Parse the comment attached to a declaration, if it has one.
    pub fn from_source<S: DocCommentSource + ?Sized>(source: &S) -> Option<Self> {
        let location = source.location();
        match source.doc_comment() {
            Some(raw) => {
                let block = parser::parse(raw);
                tracing::debug!(
                    file = %location.file,
                    line = location.line,
                    tags = block.tags.len(),
                    "docblock from source"
                );
                Some(block)
            }
            None => {
                tracing::debug!(file = %location.file, line = location.line, "no doc comment");
                None
            }
        }
    }

    /// Flatten into a field-set record, the inverse of [`DocBlock::from_fields`].
    pub fn to_fields(&self) -> DocBlockFields {
        DocBlockFields {
            short_description: self.short_description.clone(),
            long_description: self.long_description.clone(),
            tags: self.tags.iter().map(Tag::to_fields).collect(),
        }
    }

    pub fn short_description(&self) -> &str {
        &self.short_description
    }

    pub fn set_short_description(&mut self, text: impl Into<String>) -> &mut Self {
        self.short_description = text.into();
        self
    }

    pub fn long_description(&self) -> &str {
        &self.long_description
    }

    pub fn set_long_description(&mut self, text: impl Into<String>) -> &mut Self {
        self.long_description = text.into();
        self
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Append a tag after all existing ones.
    pub fn add_tag(&mut self, tag: impl Into<Tag>) -> &mut Self {
        self.tags.push(tag.into());
        self
    }

    pub fn add_tags<I, T>(&mut self, tags: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Tag>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Replace the first tag with the same name in place, or append.
    pub fn replace_tag(&mut self, tag: impl Into<Tag>) -> &mut Self {
        let tag = tag.into();
        match self.tags.iter_mut().find(|t| t.name() == tag.name()) {
            Some(slot) => *slot = tag,
            None => self.tags.push(tag),
        }
        self
    }

    /// First tag with the given name.
    pub fn tag(&self, name: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.name() == name)
    }

    pub fn tags_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Tag> + 'a {
        self.tags.iter().filter(move |t| t.name() == name)
    }

    pub fn has_tag(&self, name: &str) -> bool {
        self.tag(name).is_some()
    }

    /// Remove every tag with the given name, returning how many went.
    pub fn remove_tags(&mut self, name: &str) -> usize {
        let before = self.tags.len();
        self.tags.retain(|t| t.name() != name);
        before - self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.short_description.trim().is_empty()
            && self.long_description.trim().is_empty()
            && self.tags.is_empty()
    }

    /// Canonical comment text for these options.
    pub fn render(&self, options: &RenderOptions) -> Result<String> {
        CommentRenderer::new(options.clone()).render(self)
    }
}

impl FromStr for DocBlock {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(parser::parse(s))
    }
}

impl fmt::Display for DocBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .render(&RenderOptions::default())
            .map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

// -- Field sets ---------------------------------------------------------------

/// Flat record form of a [`DocBlock`], loadable from JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocBlockFields {
    #[serde(alias = "shortdescription")]
    pub short_description: String,
    #[serde(alias = "longdescription")]
    pub long_description: String,
    pub tags: Vec<TagFields>,
}

// -- Source boundary ----------------------------------------------------------

/// Where a declaration lives. Only used for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: String,
    pub line: usize,
}

/// Anything that can hand over the raw comment attached to a declaration.
pub trait DocCommentSource {
    /// Verbatim comment text, `None` when the declaration has none.
    fn doc_comment(&self) -> Option<&str>;

    fn location(&self) -> SourceLocation;
}

/// A comment already extracted by the caller.
#[derive(Debug, Clone, Default)]
pub struct SourceComment {
    pub text: Option<String>,
    pub location: SourceLocation,
}

impl SourceComment {
    pub fn new(text: impl Into<String>, file: impl Into<String>, line: usize) -> Self {
        Self {
            text: Some(text.into()),
            location: SourceLocation {
                file: file.into(),
                line,
            },
        }
    }
}

impl DocCommentSource for SourceComment {
    fn doc_comment(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.trim().is_empty())
    }

    fn location(&self) -> SourceLocation {
        self.location.clone()
    }
}
