//! # Outliner
//!
//! Turns an indentation-structured plain-text outline into a numbered outline
//! document with legal-style leaders (`1.`, `a.`, `(1)`, `(a)`).
//!
//! ```
//! use outliner::{parse_str, render_document, RenderContext};
//!
//! let document = parse_str("Intro: This is the start\n  First: sub point one\n").unwrap();
//! let text = render_document(&document, &RenderContext::new().uppercase_headers(true));
//!
//! assert_eq!(text, "INTRO. This is the start\n\n1.    FIRST. sub point one");
//! ```

pub mod parser;
pub mod renderer;

#[cfg(test)]
mod tests;

pub use parser::{parse, parse_str, Document, OutlineParser, Paragraph, StructureError};
pub use renderer::{
    render_document, render_paragraph, OutlineRenderer, Render, RenderContext, RenderLines,
};
