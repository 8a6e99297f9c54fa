use tracing::warn;

/// Width of the field every leader is padded to
pub const LEADER_WIDTH: usize = 6;

/// Lettering used by the second and fourth nesting levels, in lookup order.
///
/// Not a plain a-z run. Keep the sequence exactly as written.
pub const LEADER_LETTERS: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'k', 't', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'z', 'y', 'z',
];

/// Helper for numbering leaders
pub struct LeaderRenderer;

impl LeaderRenderer {
    /// Leader for the child at zero-based `index` among its siblings at `level`,
    /// padded to [`LEADER_WIDTH`].
    pub fn render_leader(&self, index: usize, level: usize) -> String {
        let leader = match level {
            1 => format!("{}. ", index + 1),
            2 => match self.letter(index) {
                Some(letter) => format!("{}. ", letter),
                None => String::new(),
            },
            3 => format!("({})", index + 1),
            4 => match self.letter(index) {
                Some(letter) => format!("({})", letter),
                None => String::new(),
            },
            _ => String::new(),
        };

        format!("{:<width$}", leader, width = LEADER_WIDTH)
    }

    fn letter(&self, index: usize) -> Option<char> {
        let letter = LEADER_LETTERS.get(index).copied();
        if letter.is_none() {
            warn!(index, "sibling index past the end of the leader letters, leaving it unnumbered");
        }
        letter
    }
}

/// Helper for rendering paragraph headers
pub struct HeaderRenderer;

impl HeaderRenderer {
    const UNDERLINE: &'static str = "\x1b[4m";
    const RESET: &'static str = "\x1b[0m";

    pub fn render_header(&self, header: &str, uppercase: bool, emphasize: bool) -> String {
        let header = if uppercase {
            header.to_uppercase()
        } else {
            header.to_string()
        };

        if emphasize {
            format!("{}{}{}. ", Self::UNDERLINE, header, Self::RESET)
        } else {
            format!("{}. ", header)
        }
    }
}

/// Helper for consistent indentation
pub struct IndentationHelper;

impl IndentationHelper {
    /// Levels 0 and 1 sit flush; each deeper level adds one leader field.
    pub fn padding_for_level(level: usize) -> String {
        " ".repeat(LEADER_WIDTH * level.saturating_sub(1))
    }
}
