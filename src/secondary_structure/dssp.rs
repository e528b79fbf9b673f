//! DSSP-style secondary structure annotation strings.

use super::SSType;

/// Parse a DSSP-style secondary structure annotation string.
///
/// Character mapping:
/// - `H`, `G`, `I` → Helix (α-helix, 3₁₀-helix, π-helix)
/// - `E`, `B` → Sheet (strand, isolated bridge)
/// - Everything else → Loop
///
/// Lowercase is accepted.
pub fn from_string(ss: &str) -> Vec<SSType> {
    ss.chars()
        .map(|c| match c.to_ascii_uppercase() {
            'H' | 'G' | 'I' => SSType::Helix,
            'E' | 'B' => SSType::Sheet,
            _ => SSType::Loop,
        })
        .collect()
}
