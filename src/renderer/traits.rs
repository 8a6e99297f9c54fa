/// Configuration context for rendering operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    /// Nesting level of the paragraph being rendered; top-level paragraphs are level 0
    pub level: usize,
    pub uppercase_headers: bool,
    pub emphasize_headers: bool,
}

impl RenderContext {
    pub fn new() -> Self {
        Self {
            level: 0,
            uppercase_headers: false,
            emphasize_headers: false,
        }
    }

    pub fn with_level(&self, level: usize) -> Self {
        Self { level, ..*self }
    }

    pub fn uppercase_headers(self, enabled: bool) -> Self {
        Self {
            uppercase_headers: enabled,
            ..self
        }
    }

    pub fn emphasize_headers(self, enabled: bool) -> Self {
        Self {
            emphasize_headers: enabled,
            ..self
        }
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Core rendering trait for parsed outline items
pub trait Render {
    fn render(&self, context: &RenderContext) -> String;
}
