//! Position-dependent coloring for backbone curves.

/// Rainbow control points: (value, RGB), sorted by value.
const RAINBOW: [(f32, [f32; 3]); 5] = [
    (0.0, [0.0, 0.0, 1.0]),  // Blue
    (0.25, [0.0, 1.0, 1.0]), // Cyan
    (0.5, [0.0, 1.0, 0.0]),  // Green
    (0.75, [1.0, 1.0, 0.0]), // Yellow
    (1.0, [1.0, 0.0, 0.0]),  // Red
];

/// Map a fraction along the chain to a rainbow color (blue at the N-terminus,
/// red at the C-terminus). Values outside `[0, 1]` are clamped.
pub fn rainbow(value: f32) -> [f32; 3] {
    let v = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };

    for pair in RAINBOW.windows(2) {
        let (v0, c0) = pair[0];
        let (v1, c1) = pair[1];
        if v <= v1 {
            let t = (v - v0) / (v1 - v0);
            return lerp(c0, c1, t);
        }
    }
    RAINBOW[RAINBOW.len() - 1].1
}

/// Rainbow color for residue `i` of `n`. The last residue is fully red.
pub fn rainbow_index(i: usize, n: usize) -> [f32; 3] {
    if n <= 1 {
        return rainbow(0.0);
    }
    rainbow(i as f32 / (n - 1) as f32)
}

fn lerp(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(rainbow(0.0), [0.0, 0.0, 1.0]);
        assert_eq!(rainbow(1.0), [1.0, 0.0, 0.0]);
        assert_eq!(rainbow(0.5), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_clamped() {
        assert_eq!(rainbow(-3.0), rainbow(0.0));
        assert_eq!(rainbow(7.0), rainbow(1.0));
        assert_eq!(rainbow(f32::NAN), rainbow(0.0));
    }

    #[test]
    fn test_interpolates() {
        let c = rainbow(0.125);
        assert!((c[1] - 0.5).abs() < 1e-6);
        assert!((c[2] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_index_gradient() {
        assert_eq!(rainbow_index(0, 10), [0.0, 0.0, 1.0]);
        assert_eq!(rainbow_index(9, 10), [1.0, 0.0, 0.0]);
        assert_eq!(rainbow_index(0, 1), [0.0, 0.0, 1.0]);
    }
}
