use crate::parser::*;
use crate::renderer::renderer::*;
use crate::renderer::traits::*;

impl Render for Paragraph {
    // Renders this subtree with no leader on its own line, since a detached
    // paragraph has no sibling position to number.
    fn render(&self, context: &RenderContext) -> String {
        let lines: Vec<String> = RenderLines::new(self, context, "").collect();
        lines.join(PARAGRAPH_SEPARATOR)
    }
}

impl Render for Document {
    fn render(&self, context: &RenderContext) -> String {
        render_document(self, context)
    }
}
