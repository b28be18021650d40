//! Screen-space ribbons ("mesh lines").
//!
//! Every polyline sample becomes a left and a right vertex; the vertex shader
//! pushes each pair apart along the screen-space normal computed from
//! `previous`/`next`, so the strip keeps a constant pixel width at any zoom.

use foundation::math::Vec3;

use crate::components::Color;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshLine {
    pub positions: Vec<[f32; 3]>,
    pub previous: Vec<[f32; 3]>,
    pub next: Vec<[f32; 3]>,
    /// +1 for the left vertex of a pair, -1 for the right one.
    pub side: Vec<f32>,
    /// Per-vertex width multiplier applied on top of the material width.
    pub width: Vec<f32>,
    /// Normalized distance along the line, in sample order.
    pub counters: Vec<f32>,
    pub uvs: Vec<[f32; 2]>,
    /// Two triangles per segment.
    pub indices: Vec<u32>,
}

impl MeshLine {
    /// Expands `points` into a strip. `width_at` receives the normalized
    /// position of each sample and returns its width multiplier.
    pub fn from_points<F>(points: &[Vec3], mut width_at: F) -> Self
    where
        F: FnMut(f32) -> f32,
    {
        let n = points.len();
        let mut line = Self {
            positions: Vec::with_capacity(n * 2),
            previous: Vec::with_capacity(n * 2),
            next: Vec::with_capacity(n * 2),
            side: Vec::with_capacity(n * 2),
            width: Vec::with_capacity(n * 2),
            counters: Vec::with_capacity(n * 2),
            uvs: Vec::with_capacity(n * 2),
            indices: Vec::with_capacity(n.saturating_sub(1) * 6),
        };
        if n == 0 {
            return line;
        }

        let last = n - 1;
        for (i, p) in points.iter().enumerate() {
            let counter = if last == 0 { 0.0 } else { i as f32 / last as f32 };
            let prev = points[i.saturating_sub(1)].to_f32();
            let next = points[(i + 1).min(last)].to_f32();
            let w = width_at(counter);

            for side in [1.0, -1.0] {
                line.positions.push(p.to_f32());
                line.previous.push(prev);
                line.next.push(next);
                line.side.push(side);
                line.width.push(w);
                line.counters.push(counter);
            }
            line.uvs.push([counter, 0.0]);
            line.uvs.push([counter, 1.0]);
        }

        for j in 0..last as u32 {
            let k = j * 2;
            line.indices.extend_from_slice(&[k, k + 1, k + 2, k + 2, k + 1, k + 3]);
        }

        line
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MeshLineMaterial {
    pub color: Color,
    pub line_width: f32,
    /// `false` keeps the width constant in screen space.
    pub size_attenuation: bool,
    pub transparent: bool,
    pub opacity: f32,
}

impl MeshLineMaterial {
    pub fn screen_space(color: Color, line_width: f32) -> Self {
        Self {
            color,
            line_width,
            size_attenuation: false,
            transparent: true,
            opacity: 1.0,
        }
    }
}
