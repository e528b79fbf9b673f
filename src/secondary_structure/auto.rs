//! CA-distance heuristic for secondary structure detection.
//!
//! Detects alpha helices and beta sheets based on Cα-Cα distances
//! and assigns per-residue Q3 classifications. Runs shorter than the
//! minimum helix/strand length are demoted to Loop.

use super::SSType;
use glam::Vec3;

/// Shortest run kept as helix.
const MIN_HELIX_RUN: usize = 4;
/// Shortest run kept as sheet.
const MIN_SHEET_RUN: usize = 3;

/// Detect secondary structure from Cα positions.
///
/// Uses distance-based heuristics:
/// - Helix: Cα(i)-Cα(i+3) ≈ 5.0-5.5Å, Cα(i)-Cα(i+4) ≈ 5.5-6.5Å
/// - Sheet: Extended conformation with Cα(i)-Cα(i+2) ≈ 6.0-7.5Å
///
/// Returns a Vec of SSType, one per residue (same length as `ca_positions`).
pub fn detect(ca_positions: &[Vec3]) -> Vec<SSType> {
    let n = ca_positions.len();
    let mut ss: Vec<SSType> = vec![SSType::Loop; n];

    for i in 0..n {
        if i + 4 < n {
            let d_i3 = ca_positions[i].distance(ca_positions[i + 3]);
            let d_i4 = ca_positions[i].distance(ca_positions[i + 4]);
            if (4.5..=6.0).contains(&d_i3) && (5.0..=7.0).contains(&d_i4) {
                // the i..i+3 turn belongs to the helix
                for s in &mut ss[i..i + 4] {
                    *s = SSType::Helix;
                }
                continue;
            }
        }

        if i + 2 < n && ss[i] != SSType::Helix {
            let d_i1 = ca_positions[i].distance(ca_positions[i + 1]);
            let d_i2 = ca_positions[i].distance(ca_positions[i + 2]);
            if (3.5..=4.1).contains(&d_i1) && (6.0..=8.0).contains(&d_i2) {
                ss[i] = SSType::Sheet;
            }
        }
    }

    drop_short_runs(&mut ss);
    ss
}

fn drop_short_runs(ss: &mut [SSType]) {
    let mut start = 0;
    while start < ss.len() {
        let class = ss[start];
        let mut end = start;
        while end < ss.len() && ss[end] == class {
            end += 1;
        }
        let min = match class {
            SSType::Helix => MIN_HELIX_RUN,
            SSType::Sheet => MIN_SHEET_RUN,
            SSType::Loop => 0,
        };
        if end - start < min {
            for s in &mut ss[start..end] {
                *s = SSType::Loop;
            }
        }
        start = end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Ideal α-helix: 1.5Å rise and 100° per residue on a 2.3Å radius.
    fn ideal_helix(n: usize) -> Vec<Vec3> {
        (0..n)
            .map(|i| {
                let t = (i as f32 * 100.0).to_radians();
                Vec3::new(2.3 * t.cos(), 2.3 * t.sin(), 1.5 * i as f32)
            })
            .collect()
    }

    #[test]
    fn test_empty_chain() {
        assert!(detect(&[]).is_empty());
    }

    #[test]
    fn test_short_chain() {
        let positions = vec![Vec3::ZERO, Vec3::X, Vec3::new(2.0, 0.0, 0.0)];
        let result = detect(&positions);
        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|&s| s == SSType::Loop));
    }

    #[test]
    fn test_extended_sheet() {
        let positions: Vec<Vec3> = (0..8)
            .map(|i| Vec3::new(i as f32 * 3.8, 0.0, 0.0))
            .collect();
        let result = detect(&positions);
        assert_eq!(result.len(), 8);
        assert!(result.iter().any(|&s| s == SSType::Sheet));
        assert!(result.iter().all(|&s| s != SSType::Helix));
    }

    #[test]
    fn test_ideal_helix() {
        let result = detect(&ideal_helix(12));
        assert_eq!(result.len(), 12);
        assert!(result[..8].iter().all(|&s| s == SSType::Helix), "{result:?}");
    }

    #[test]
    fn test_short_runs_dropped() {
        use SSType::*;
        let mut ss = vec![Helix, Helix, Loop, Sheet, Sheet, Sheet, Loop, Sheet, Sheet];
        drop_short_runs(&mut ss);
        assert_eq!(ss, vec![Loop, Loop, Loop, Sheet, Sheet, Sheet, Loop, Loop, Loop]);
    }
}
