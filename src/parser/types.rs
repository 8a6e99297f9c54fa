use serde::Serialize;
use thiserror::Error;

/// A node in the outline tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    /// Label preceding the first colon on the source line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    /// Trimmed text following the header, or the whole line when there is no header
    pub body: String,
    pub children: Vec<Paragraph>,
}

impl Paragraph {
    pub fn new(header: Option<String>, body: impl Into<String>) -> Self {
        Self {
            header,
            body: body.into(),
            children: Vec::new(),
        }
    }

    /// Builds a paragraph from one source line, splitting the header on the first colon.
    pub fn from_line(line: &str) -> Self {
        match line.split_once(':') {
            Some((header, body)) => Self::new(Some(header.trim().to_string()), body.trim()),
            None => Self::new(None, line.trim()),
        }
    }

    pub fn with_children(mut self, children: Vec<Paragraph>) -> Self {
        self.children = children;
        self
    }

    /// Number of paragraphs in this subtree, this one included
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Paragraph::count).sum::<usize>()
    }
}

/// The result of parsing an outline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub paragraphs: Vec<Paragraph>,
    /// Spaces per nesting level, `None` when no line was indented
    pub indent_unit: Option<usize>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.iter().map(Paragraph::count).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    #[error("irregular indent on line {line_number}: {line:?}, expected {expected} but got {found}")]
    IrregularIndent {
        line_number: usize,
        line: String,
        expected: usize,
        found: usize,
    },

    #[error("unexpected indent on line {line_number}: {line:?}")]
    UnexpectedIndent { line_number: usize, line: String },
}

impl StructureError {
    pub fn line_number(&self) -> usize {
        match self {
            StructureError::IrregularIndent { line_number, .. }
            | StructureError::UnexpectedIndent { line_number, .. } => *line_number,
        }
    }
}
