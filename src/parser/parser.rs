use std::iter::{Enumerate, Peekable};

use tracing::debug;

use crate::parser::types::*;

/// Parses an outline from any sequence of lines.
pub fn parse<I>(lines: I) -> Result<Document, StructureError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    OutlineParser::new(lines.into_iter()).parse()
}

/// Parses an outline held in a single string, splitting on `\n` or `\r\n`.
pub fn parse_str(text: &str) -> Result<Document, StructureError> {
    parse(text.lines())
}

// Recursive-descent parser driven purely by leading whitespace
pub struct OutlineParser<I>
where
    I: Iterator,
{
    lines: Peekable<Enumerate<I>>,
    indent_unit: Option<usize>,
}

impl<I> OutlineParser<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    pub fn new(lines: I) -> Self {
        Self {
            lines: lines.enumerate().peekable(),
            indent_unit: None,
        }
    }

    pub fn parse(mut self) -> Result<Document, StructureError> {
        let paragraphs = self.parse_level(0)?;
        let document = Document {
            paragraphs,
            indent_unit: self.indent_unit,
        };

        debug!(
            paragraphs = document.paragraph_count(),
            indent_unit = ?document.indent_unit,
            "parsed outline"
        );
        Ok(document)
    }

    // Consumes sibling lines at `level` together with their subtrees. Stops without
    // consuming at the first line that belongs to a shallower level.
    fn parse_level(&mut self, level: usize) -> Result<Vec<Paragraph>, StructureError> {
        let mut paragraphs = Vec::new();

        while let Some((index, line)) = self.lines.peek() {
            let line: &str = line.as_ref();
            if line.trim().is_empty() {
                self.lines.next();
                continue;
            }

            let line_number = index + 1;
            let indent_level = measure_indent(&mut self.indent_unit, line, line_number, level)?;

            if indent_level < level {
                break;
            }

            if indent_level > level {
                // One level deeper, but there is no open paragraph at this level to own it
                return Err(StructureError::UnexpectedIndent {
                    line_number,
                    line: line.to_string(),
                });
            }

            let paragraph = Paragraph::from_line(line);
            self.lines.next();

            let children = self.parse_level(level + 1)?;
            paragraphs.push(paragraph.with_children(children));
        }

        Ok(paragraphs)
    }
}

/// Resolves the nesting level of a non-blank line, inferring the indentation unit
/// from the first indented line seen.
fn measure_indent(
    indent_unit: &mut Option<usize>,
    line: &str,
    line_number: usize,
    expected_level: usize,
) -> Result<usize, StructureError> {
    let found = leading_whitespace(line);

    if indent_unit.is_none() && found > 0 {
        debug!(line_number, unit = found, "inferred indentation unit");
        *indent_unit = Some(found);
    }

    let indent_level = match *indent_unit {
        Some(unit) => {
            if found % unit != 0 {
                return Err(StructureError::IrregularIndent {
                    line_number,
                    line: line.to_string(),
                    expected: unit * expected_level,
                    found,
                });
            }
            found / unit
        }
        None => 0,
    };

    if indent_level > expected_level + 1 {
        return Err(StructureError::UnexpectedIndent {
            line_number,
            line: line.to_string(),
        });
    }

    Ok(indent_level)
}

fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}
