use super::Vec3;

/// Quadratic Bezier curve through `start`, `control`, `end`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct QuadraticBezier {
    pub start: Vec3,
    pub control: Vec3,
    pub end: Vec3,
}

impl QuadraticBezier {
    pub fn new(start: Vec3, control: Vec3, end: Vec3) -> Self {
        Self {
            start,
            control,
            end,
        }
    }

    pub fn point_at(&self, t: f64) -> Vec3 {
        let u = 1.0 - t;
        self.start.scale(u * u) + self.control.scale(2.0 * u * t) + self.end.scale(t * t)
    }

    /// Samples `divisions + 1` evenly spaced points.
    ///
    /// The first and last samples are exactly `start` and `end`.
    pub fn sample(&self, divisions: usize) -> Vec<Vec3> {
        let divisions = divisions.max(1);
        let mut out = Vec::with_capacity(divisions + 1);
        out.push(self.start);
        for i in 1..divisions {
            out.push(self.point_at(i as f64 / divisions as f64));
        }
        out.push(self.end);
        out
    }
}
