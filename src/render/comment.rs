//! Canonical comment renderer.
//!
//! Output shape:
//!
//! ```text
//! /**
//!  * short description, wrapped
//!  *
//!  * long description, wrapped
//!  *
//!  * @tag ...
//!  */
//! ```
//!
//! Sections are separated by a bare ` *` line. Tags are never wrapped.

use crate::error::Result;
use crate::model::DocBlock;
use crate::render::{RenderOptions, Renderer};
use crate::wrap::wrap;

pub struct CommentRenderer {
    options: RenderOptions,
}

impl CommentRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }
}

impl Default for CommentRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl Renderer for CommentRenderer {
    fn render(&self, block: &DocBlock) -> Result<String> {
        self.options.validate()?;
        let width = self.options.effective_width();

        let mut sections: Vec<Vec<String>> = Vec::new();
        if !block.short_description().trim().is_empty() {
            sections.push(wrap(block.short_description().trim(), width));
        }
        if !block.long_description().trim().is_empty() {
            sections.push(wrap(block.long_description().trim_end(), width));
        }
        if !block.tags().is_empty() {
            sections.push(
                block
                    .tags()
                    .iter()
                    .flat_map(|tag| {
                        tag.render()
                            .lines()
                            .map(str::to_string)
                            .collect::<Vec<_>>()
                    })
                    .collect(),
            );
        }

        let lf = self.options.line_feed.as_str();
        let indent = self.options.indentation.as_str();

        let mut out = String::new();
        out.push_str(indent);
        out.push_str("/**");
        out.push_str(lf);
        for (i, section) in sections.iter().enumerate() {
            if i > 0 {
                push_line(&mut out, indent, "", lf);
            }
            for line in section {
                push_line(&mut out, indent, line, lf);
            }
        }
        out.push_str(indent);
        out.push_str(" */");
        out.push_str(lf);

        tracing::trace!(sections = sections.len(), bytes = out.len(), "rendered docblock");
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "txt"
    }
}

/// Push one decorated line; empty text gives a bare ` *`.
fn push_line(out: &mut String, indent: &str, text: &str, lf: &str) {
    out.push_str(indent);
    if text.is_empty() {
        out.push_str(" *");
    } else {
        out.push_str(" * ");
        out.push_str(text);
    }
    out.push_str(lf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocBlockError;
    use crate::tag::{self, AuthorTag, LicenseTag, ParamTag, ReturnTag, Tag, TagFields};

    fn render(block: &DocBlock) -> String {
        CommentRenderer::default().render(block).unwrap()
    }

    #[test]
    fn empty_block_is_two_delimiters() {
        assert_eq!(render(&DocBlock::new()), "/**\n */\n");
    }

    #[test]
    fn tags_only() {
        let mut block = DocBlock::new();
        block
            .add_tag(tag::from_fields(TagFields::named("blah")))
            .add_tag(ParamTag::new().with_type("string"))
            .add_tag(ReturnTag::new().with_type("int"));
        assert_eq!(block.tags().len(), 3);
        assert_eq!(
            render(&block),
            "/**\n * @blah\n * @param string\n * @return int\n */\n"
        );
    }

    #[test]
    fn short_description_only() {
        let mut block = DocBlock::new();
        block.set_short_description("@var Foo this is foo bar");
        assert_eq!(render(&block), "/**\n * @var Foo this is foo bar\n */\n");
    }

    #[test]
    fn word_wrap_enabled_by_default() {
        let mut block = DocBlock::new();
        block.set_long_description(
            "@var This is a very large string that will be wrapped if it contains more than 80 characters",
        );
        assert_eq!(
            render(&block),
            "/**\n * @var This is a very large string that will be wrapped if it contains more than\n * 80 characters\n */\n"
        );
    }

    #[test]
    fn word_wrap_disabled() {
        let mut block = DocBlock::new();
        block.set_long_description(
            "@var This is a very large string that will not be wrapped if it contains more than 80 characters",
        );
        let out = block
            .render(&RenderOptions::default().with_word_wrap(false))
            .unwrap();
        assert_eq!(
            out,
            "/**\n * @var This is a very large string that will not be wrapped if it contains more than 80 characters\n */\n"
        );
    }

    #[test]
    fn all_sections_separated() {
        let mut block = DocBlock::new();
        block
            .set_short_description("Short")
            .set_long_description("Long\n\nMore")
            .add_tag(AuthorTag::new("Jane", "jane@example.com"))
            .add_tag(LicenseTag::new("http://license", "The License"));
        assert_eq!(
            render(&block),
            "/**\n * Short\n *\n * Long\n *\n * More\n *\n * @author Jane <jane@example.com>\n * @license http://license The License\n */\n"
        );
    }

    #[test]
    fn long_tags_are_not_wrapped() {
        let description = "word ".repeat(30);
        let mut block = DocBlock::new();
        block.add_tag(
            ParamTag::new()
                .with_type("int")
                .with_variable_name("a")
                .with_description(description.trim()),
        );
        let out = render(&block);
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn indentation_and_crlf() {
        let mut block = DocBlock::new();
        block.set_short_description("Hi").add_tag(Tag::named("internal"));
        let options = RenderOptions::default()
            .with_indentation("    ")
            .with_line_feed("\r\n");
        assert_eq!(
            block.render(&options).unwrap(),
            "    /**\r\n     * Hi\r\n     *\r\n     * @internal\r\n     */\r\n"
        );
    }

    #[test]
    fn invalid_options_fail_the_call() {
        let block = DocBlock::new();
        let err = block
            .render(&RenderOptions::default().with_wrap_width(-3))
            .unwrap_err();
        assert!(matches!(err, DocBlockError::InvalidConfiguration { .. }));
    }

    #[test]
    fn render_does_not_touch_model() {
        let block = DocBlock::parse("/**\n * A\n *\n * B\n * @return int\n */");
        let copy = block.clone();
        let _ = render(&block);
        assert_eq!(block, copy);
    }
}
