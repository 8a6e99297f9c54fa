use tracing::debug;

use crate::parser::*;
use crate::renderer::components::*;
use crate::renderer::traits::*;

/// Separator placed between rendered paragraphs
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Renders `paragraph` and its descendants as a lazy sequence of lines.
///
/// Lines come out in pre-order: a paragraph's own line first, then each child
/// subtree in source order. Every call returns an independent iterator over the
/// same borrowed tree.
pub fn render_paragraph<'a>(
    paragraph: &'a Paragraph,
    level: usize,
    leader: impl Into<String>,
    emphasize_header: bool,
    uppercase_header: bool,
) -> RenderLines<'a> {
    let context = RenderContext::new()
        .with_level(level)
        .uppercase_headers(uppercase_header)
        .emphasize_headers(emphasize_header);
    RenderLines::new(paragraph, &context, leader)
}

#[derive(Clone)]
struct PendingParagraph<'a> {
    paragraph: &'a Paragraph,
    level: usize,
    leader: String,
}

/// Pull-based pre-order walk over a paragraph tree
#[derive(Clone)]
pub struct RenderLines<'a> {
    pending: Vec<PendingParagraph<'a>>,
    uppercase_headers: bool,
    emphasize_headers: bool,
}

impl<'a> RenderLines<'a> {
    pub fn new(paragraph: &'a Paragraph, context: &RenderContext, leader: impl Into<String>) -> Self {
        Self {
            pending: vec![PendingParagraph {
                paragraph,
                level: context.level,
                leader: leader.into(),
            }],
            uppercase_headers: context.uppercase_headers,
            emphasize_headers: context.emphasize_headers,
        }
    }

    fn render_line(&self, item: &PendingParagraph<'_>) -> String {
        let mut text = IndentationHelper::padding_for_level(item.level);
        text.push_str(&item.leader);

        if let Some(header) = &item.paragraph.header {
            text.push_str(&HeaderRenderer.render_header(
                header,
                self.uppercase_headers,
                self.emphasize_headers,
            ));
        }

        text.push_str(&item.paragraph.body);
        text
    }
}

impl<'a> Iterator for RenderLines<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let item = self.pending.pop()?;
        let line = self.render_line(&item);

        // Pushed in reverse so the first child is rendered next
        let child_level = item.level + 1;
        let leaders = LeaderRenderer;
        for (index, child) in item.paragraph.children.iter().enumerate().rev() {
            self.pending.push(PendingParagraph {
                paragraph: child,
                level: child_level,
                leader: leaders.render_leader(index, child_level),
            });
        }

        Some(line)
    }
}

pub struct OutlineRenderer {
    context: RenderContext,
}

impl OutlineRenderer {
    pub fn new(context: RenderContext) -> Self {
        Self { context }
    }

    /// All lines of the document, top-level paragraphs first at level 0 with no leader.
    pub fn lines<'a>(&self, document: &'a Document) -> impl Iterator<Item = String> + 'a {
        let context = self.context.with_level(0);
        document
            .paragraphs
            .iter()
            .flat_map(move |paragraph| RenderLines::new(paragraph, &context, ""))
    }

    pub fn render(&self, document: &Document) -> String {
        let lines: Vec<String> = self.lines(document).collect();
        debug!(lines = lines.len(), "rendered outline");
        lines.join(PARAGRAPH_SEPARATOR)
    }
}

impl Default for OutlineRenderer {
    fn default() -> Self {
        Self::new(RenderContext::default())
    }
}

/// Renders a whole document with blank lines between paragraphs.
pub fn render_document(document: &Document, context: &RenderContext) -> String {
    OutlineRenderer::new(*context).render(document)
}
