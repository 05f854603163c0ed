//! JSON renderer — structured output for tooling integration.
//!
//! Emits the field-set form of the block, so the output can be fed back in
//! through [`DocBlock::from_fields`].

use crate::error::Result;
use crate::model::DocBlock;
use crate::render::Renderer;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, block: &DocBlock) -> Result<String> {
        let mut out = serde_json::to_string_pretty(&block.to_fields())?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DocBlockFields;

    #[test]
    fn json_output_loads_back() {
        let block = DocBlock::parse(
            "/**\n * Short\n *\n * @param Foo\\Bar $x the x\n * @author A <a@b.c>\n * @custom\n */",
        );
        let json = JsonRenderer.render(&block).unwrap();
        assert!(json.contains("\"short_description\": \"Short\""));
        assert!(json.contains("\"type\": \"Foo\\\\Bar\""));
        assert!(json.contains("\"author_name\": \"A\""));

        let fields: DocBlockFields = serde_json::from_str(&json).unwrap();
        assert_eq!(DocBlock::from_fields(fields), block);
    }
}
