//! Parametric double helix.
//!
//! Two strands wind around the Y axis exactly half a turn apart. Every even
//! step emits a base-pair point at the strand midpoint and a cross-link
//! joining the two strands at that step.

use std::f32::consts::{PI, TAU};

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::types::{BackbonePoint, Geometry, PointKind, SegmentKind};

const STRAND1_COLOR: [f32; 3] = [0.25, 0.55, 0.95];
const STRAND2_COLOR: [f32; 3] = [0.95, 0.45, 0.25];
const BASE_PAIR_COLOR: [f32; 3] = [0.85, 0.85, 0.85];

/// Shape of a generated double helix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoubleHelixParams {
    /// Structure identifier carried through for display; does not affect geometry.
    pub label: String,
    pub turns: u32,
    pub points_per_turn: u32,
    pub radius: f32,
    /// Total height; the helix is centred on y = 0.
    pub height: f32,
}

impl Default for DoubleHelixParams {
    fn default() -> Self {
        Self {
            label: String::new(),
            turns: 2,
            points_per_turn: 20,
            radius: 1.5,
            height: 8.0,
        }
    }
}

impl DoubleHelixParams {
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Points per strand.
    pub fn total_points(&self) -> usize {
        self.turns as usize * self.points_per_turn as usize
    }
}

/// Generate a double helix.
///
/// Point layout per step `i`: strand 1, strand 2, then (even `i` only) the
/// base pair. Output is a pure function of `params`.
pub fn generate_double_helix(params: &DoubleHelixParams) -> Geometry {
    let total = params.total_points();
    let mut geom = Geometry::default();
    if total == 0 {
        log::debug!("double helix '{}' has no points", params.label);
        return geom;
    }

    let h = params.height;
    let r = params.radius;
    let turns = params.turns as f32;

    let mut strand1 = Vec::with_capacity(total);
    let mut strand2 = Vec::with_capacity(total);

    for i in 0..total {
        let frac = i as f32 / total as f32;
        let y = frac * h - h / 2.0;
        let theta1 = frac * turns * TAU;
        let theta2 = theta1 + PI;

        let p1 = Vec3::new(r * theta1.cos(), y, r * theta1.sin());
        let p2 = Vec3::new(r * theta2.cos(), y, r * theta2.sin());

        strand1.push(geom.push_point(strand_point(p1, PointKind::Strand1, i, STRAND1_COLOR)));
        strand2.push(geom.push_point(strand_point(p2, PointKind::Strand2, i, STRAND2_COLOR)));

        if i % 2 == 0 {
            geom.push_point(strand_point(
                (p1 + p2) * 0.5,
                PointKind::BasePair,
                i / 2,
                BASE_PAIR_COLOR,
            ));
        }
    }

    for strand in [&strand1, &strand2] {
        for pair in strand.windows(2) {
            geom.push_segment(pair[0], pair[1], SegmentKind::Backbone);
        }
    }

    for i in (0..total).step_by(2) {
        geom.push_segment(strand1[i], strand2[i], SegmentKind::CrossLink);
    }

    geom
}

fn strand_point(position: Vec3, kind: PointKind, index: usize, color: [f32; 3]) -> BackbonePoint {
    BackbonePoint {
        position,
        kind,
        index: index as u32,
        residue: None,
        element: None,
        color,
    }
}
