//! Bowed arcs between two points on the globe.
//!
//! A straight chord between two surface points would cut through the sphere.
//! The arc instead goes through a quadratic Bezier whose control point is the
//! chord midpoint pushed radially out to `base_radius + height_factor * chord`,
//! so short hops bow slightly and long hops bow a lot.

use foundation::math::{QuadraticBezier, Vec3};

/// Radius markers and arc endpoints sit on.
pub const DEFAULT_ARC_BASE_RADIUS: f64 = 1.01;
pub const DEFAULT_ARC_HEIGHT_FACTOR: f64 = 0.45;
/// 50 divisions, 51 samples.
pub const DEFAULT_ARC_DIVISIONS: usize = 50;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ArcBuilder {
    pub base_radius: f64,
    pub height_factor: f64,
    pub divisions: usize,
}

impl Default for ArcBuilder {
    fn default() -> Self {
        Self {
            base_radius: DEFAULT_ARC_BASE_RADIUS,
            height_factor: DEFAULT_ARC_HEIGHT_FACTOR,
            divisions: DEFAULT_ARC_DIVISIONS,
        }
    }
}

/// Sampled arc polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcCurve {
    pub points: Vec<Vec3>,
    pub control: Vec3,
    /// Straight-line distance between the endpoints.
    pub chord: f64,
}

impl ArcCurve {
    pub fn is_degenerate(&self) -> bool {
        self.chord == 0.0
    }

    /// Length of the sampled polyline.
    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| w[0].distance(w[1])).sum()
    }
}

impl ArcBuilder {
    pub fn new(base_radius: f64, height_factor: f64) -> Self {
        Self {
            base_radius,
            height_factor,
            ..Self::default()
        }
    }

    pub fn with_divisions(mut self, divisions: usize) -> Self {
        self.divisions = divisions;
        self
    }

    pub fn build(&self, origin: Vec3, dest: Vec3) -> ArcCurve {
        let mid = origin.midpoint(dest);
        let chord = origin.distance(dest);
        if chord == 0.0 {
            return ArcCurve {
                points: vec![origin; self.divisions.max(1) + 1],
                control: origin,
                chord,
            };
        }

        // The midpoint vanishes for antipodal endpoints; fall back to any
        // direction normal to the chord.
        let control = match mid
            .try_normalize()
            .or_else(|| perpendicular(dest - origin))
        {
            Some(dir) => dir.scale(self.base_radius + self.height_factor * chord),
            None => mid,
        };

        let points = QuadraticBezier::new(origin, control, dest).sample(self.divisions);
        ArcCurve {
            points,
            control,
            chord,
        }
    }
}

/// Builds an arc with the default sample count.
pub fn build_arc(origin: Vec3, dest: Vec3, base_radius: f64, height_factor: f64) -> ArcCurve {
    ArcBuilder::new(base_radius, height_factor).build(origin, dest)
}

fn perpendicular(v: Vec3) -> Option<Vec3> {
    let v = v.try_normalize()?;
    let axis = if v.y.abs() < 0.9 {
        Vec3::new(0.0, 1.0, 0.0)
    } else {
        Vec3::new(1.0, 0.0, 0.0)
    };
    v.cross(axis).try_normalize()
}

#[cfg(test)]
mod tests {
    use super::{ArcBuilder, DEFAULT_ARC_DIVISIONS, build_arc};
    use foundation::math::{Vec3, project};

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn endpoints_are_exact() {
        let o = project(37.62, -122.38, 1.01);
        let d = project(40.64, -73.78, 1.01);
        let arc = build_arc(o, d, 1.01, 0.45);
        assert_eq!(arc.points.len(), DEFAULT_ARC_DIVISIONS + 1);
        assert_eq!(arc.points[0], o);
        assert_eq!(*arc.points.last().expect("last"), d);
    }

    #[test]
    fn control_point_height_grows_with_chord() {
        let o = project(0.0, 0.0, 1.01);
        let near = build_arc(o, project(0.0, 10.0, 1.01), 1.01, 0.45);
        let far = build_arc(o, project(0.0, 120.0, 1.01), 1.01, 0.45);

        assert_close(near.control.length(), 1.01 + 0.45 * near.chord, 1e-12);
        assert_close(far.control.length(), 1.01 + 0.45 * far.chord, 1e-12);
        assert!(far.control.length() > near.control.length());
    }

    #[test]
    fn continental_hop_bows_above_endpoints() {
        let o = project(37.62, -122.38, 1.01);
        let d = project(40.64, -73.78, 1.01);
        let arc = build_arc(o, d, 1.01, 0.45);
        for p in &arc.points {
            assert!(p.length() >= 1.01 - 1e-9, "sample dips below the markers: {p:?}");
        }
        assert!(arc.points[DEFAULT_ARC_DIVISIONS / 2].length() > 1.1);
    }

    #[test]
    fn identical_points_give_zero_length_arc() {
        let p = project(37.62, -122.38, 1.01);
        let arc = build_arc(p, p, 1.01, 0.45);
        assert!(arc.is_degenerate());
        assert_close(arc.length(), 0.0, 1e-12);
        assert_eq!(arc.points.len(), DEFAULT_ARC_DIVISIONS + 1);
        assert!(arc.points.iter().all(|q| q.x.is_finite() && q.y.is_finite() && q.z.is_finite()));
    }

    #[test]
    fn identical_points_stay_put_off_the_base_sphere() {
        let p = project(37.62, -122.38, 1.0);
        let arc = build_arc(p, p, 1.5, 0.45);
        assert!(arc.is_degenerate());
        assert_eq!(arc.control, p);
        assert_close(arc.length(), 0.0, 1e-12);
        assert!(arc.points.iter().all(|q| *q == p));
    }

    #[test]
    fn zero_vector_endpoints_do_not_divide_by_zero() {
        let arc = build_arc(Vec3::ZERO, Vec3::ZERO, 1.01, 0.45);
        assert_eq!(arc.control, Vec3::ZERO);
        assert!(arc.points.iter().all(|q| *q == Vec3::ZERO));
    }

    #[test]
    fn antipodal_endpoints_still_bow_outward() {
        let o = Vec3::new(1.01, 0.0, 0.0);
        let d = Vec3::new(-1.01, 0.0, 0.0);
        let arc = build_arc(o, d, 1.01, 0.45);
        assert_close(arc.control.length(), 1.01 + 0.45 * 2.02, 1e-12);
        assert!(arc.points.iter().all(|q| q.x.is_finite()));
    }

    #[test]
    fn custom_divisions() {
        let arc = ArcBuilder::default()
            .with_divisions(4)
            .build(project(0.0, 0.0, 1.0), project(0.0, 30.0, 1.0));
        assert_eq!(arc.points.len(), 5);
    }
}
