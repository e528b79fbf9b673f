//! Element classification for side-chain terminal atoms.

use serde::{Deserialize, Serialize};

/// Chemical element assigned to a generated side-chain atom.
///
/// Only the elements that a one-letter code can name directly are
/// represented; everything else is carbon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    C,
    N,
    O,
    S,
    P,
}

impl Element {
    /// Infer the element from a one-letter residue code (case-insensitive).
    ///
    /// `C`, `N`, `O`, `S` and `P` map to themselves; any other character,
    /// including gaps and digits, falls back to carbon.
    pub fn from_residue_code(code: char) -> Self {
        match code.to_ascii_uppercase() {
            'N' => Element::N,
            'O' => Element::O,
            'S' => Element::S,
            'P' => Element::P,
            _ => Element::C,
        }
    }

    /// Standard CPK coloring (Corey-Pauling-Koltun).
    pub fn cpk_color(&self) -> [f32; 3] {
        match self {
            Element::C => [0.4, 0.4, 0.4],  // Dark gray
            Element::N => [0.2, 0.2, 1.0],  // Blue
            Element::O => [1.0, 0.2, 0.2],  // Red
            Element::S => [1.0, 0.85, 0.2], // Yellow
            Element::P => [1.0, 0.5, 0.0],  // Orange
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Element::C => "C",
            Element::N => "N",
            Element::O => "O",
            Element::S => "S",
            Element::P => "P",
        }
    }
}
