//! Renderer module — trait-based format dispatch and render options.

pub mod comment;
pub mod json;

pub use comment::CommentRenderer;
pub use json::JsonRenderer;

use crate::error::{DocBlockError, Result};
use crate::model::DocBlock;

/// Trait for rendering a [`DocBlock`] into a specific output format.
pub trait Renderer {
    fn render(&self, block: &DocBlock) -> Result<String>;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str, options: RenderOptions) -> Result<Box<dyn Renderer>> {
    match format {
        "comment" | "docblock" => Ok(Box::new(CommentRenderer::new(options))),
        "json" => Ok(Box::new(JsonRenderer)),
        _ => Err(DocBlockError::UnknownFormat(format.to_string())),
    }
}

/// Options for the canonical comment renderer.
///
/// Passed into every render call; nothing is read from process state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// One of `\n`, `\r\n` or `\r`
    pub line_feed: String,
    /// Prefix for every emitted line; blanks and tabs only
    pub indentation: String,
    pub word_wrap: bool,
    /// Content columns per line, not counting the ` * ` decoration
    pub wrap_width: i64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            line_feed: "\n".to_string(),
            indentation: String::new(),
            word_wrap: true,
            wrap_width: 80,
        }
    }
}

impl RenderOptions {
    pub fn with_line_feed(mut self, line_feed: impl Into<String>) -> Self {
        self.line_feed = line_feed.into();
        self
    }

    pub fn with_indentation(mut self, indentation: impl Into<String>) -> Self {
        self.indentation = indentation.into();
        self
    }

    pub fn with_word_wrap(mut self, word_wrap: bool) -> Self {
        self.word_wrap = word_wrap;
        self
    }

    pub fn with_wrap_width(mut self, wrap_width: i64) -> Self {
        self.wrap_width = wrap_width;
        self
    }

    /// Reject values outside each option's domain.
    pub fn validate(&self) -> Result<()> {
        if !matches!(self.line_feed.as_str(), "\n" | "\r\n" | "\r") {
            return Err(DocBlockError::invalid_configuration(
                "line_feed",
                format!("{:?} is not a line break", self.line_feed),
            ));
        }
        if !self.indentation.chars().all(|c| c == ' ' || c == '\t') {
            return Err(DocBlockError::invalid_configuration(
                "indentation",
                format!("{:?} may only contain blanks and tabs", self.indentation),
            ));
        }
        if self.wrap_width < 0 {
            return Err(DocBlockError::invalid_configuration(
                "wrap_width",
                format!("{} is negative", self.wrap_width),
            ));
        }
        if self.word_wrap && self.wrap_width == 0 {
            return Err(DocBlockError::invalid_configuration(
                "wrap_width",
                "must be at least 1 when word wrap is enabled",
            ));
        }
        Ok(())
    }

    /// Width handed to the wrapper, 0 meaning no wrapping.
    pub(crate) fn effective_width(&self) -> usize {
        if self.word_wrap {
            usize::try_from(self.wrap_width).unwrap_or(0)
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let options = RenderOptions::default();
        assert!(options.validate().is_ok());
        assert_eq!(options.effective_width(), 80);
    }

    #[test]
    fn negative_width_rejected() {
        let err = RenderOptions::default()
            .with_wrap_width(-1)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            DocBlockError::InvalidConfiguration { option: "wrap_width", .. }
        ));
    }

    #[test]
    fn negative_width_rejected_even_without_wrap() {
        let options = RenderOptions::default()
            .with_word_wrap(false)
            .with_wrap_width(-5);
        assert!(options.validate().is_err());
    }

    #[test]
    fn zero_width_only_valid_without_wrap() {
        assert!(RenderOptions::default().with_wrap_width(0).validate().is_err());
        let options = RenderOptions::default()
            .with_word_wrap(false)
            .with_wrap_width(0);
        assert!(options.validate().is_ok());
        assert_eq!(options.effective_width(), 0);
    }

    #[test]
    fn bad_line_feed_and_indent_rejected() {
        assert!(RenderOptions::default().with_line_feed("").validate().is_err());
        assert!(RenderOptions::default().with_line_feed("x").validate().is_err());
        assert!(RenderOptions::default().with_indentation("  //").validate().is_err());
        assert!(RenderOptions::default().with_indentation("\t  ").validate().is_ok());
    }

    #[test]
    fn unknown_format() {
        let err = create_renderer("xml", RenderOptions::default()).err().unwrap();
        assert!(err.to_string().contains("unknown format"));
    }
}
