//! docblock — parse, build and render structured documentation comments.
//!
//! A docblock is a `/** ... */` comment holding a short description, an
//! optional long description and an ordered list of `@tag` annotations.
//!
//! ```
//! use docblock::{DocBlock, ParamTag, RenderOptions};
//!
//! let mut block = DocBlock::new();
//! block
//!     .set_short_description("Add two numbers.")
//!     .add_tag(ParamTag::new().with_type("int").with_variable_name("a"));
//!
//! let text = block.render(&RenderOptions::default()).unwrap();
//! assert_eq!(text, "/**\n * Add two numbers.\n *\n * @param int $a\n */\n");
//! assert_eq!(DocBlock::parse(&text), block);
//! ```

pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod tag;
pub mod wrap;

pub use error::{DocBlockError, Result};
pub use model::{DocBlock, DocBlockFields, DocCommentSource, SourceComment, SourceLocation};
pub use render::{create_renderer, CommentRenderer, JsonRenderer, RenderOptions, Renderer};
pub use tag::{
    AuthorTag, GenericTag, LicenseTag, MethodTag, ParamTag, PropertyTag, ReturnTag, Tag,
    TagFields, TagKind, ThrowsTag, VarTag,
};
