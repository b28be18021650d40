use flights::AirportId;
use foundation::math::Vec3;

use crate::components::AirportMarker;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self { origin, dir }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PickHit {
    /// Index into the marker slice.
    pub index: usize,
    pub airport: AirportId,
    pub distance: f64,
    pub point: Vec3,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PickOptions {
    pub max_distance: f64,
    /// Extra radius added to every marker so tiny markers stay clickable.
    pub slop: f64,
}

impl Default for PickOptions {
    fn default() -> Self {
        Self {
            max_distance: 1.0e30,
            slop: 0.0,
        }
    }
}

/// Deterministic ray picking against airport markers.
///
/// Ordering contract:
/// - The closest hit along the (normalized) ray wins.
/// - If multiple markers are hit at the same distance, the lower index wins.
pub fn pick_marker(markers: &[AirportMarker], ray: Ray, opts: PickOptions) -> Option<PickHit> {
    let dir = ray.dir.try_normalize()?;

    let mut best: Option<(f64, usize)> = None;
    for (idx, marker) in markers.iter().enumerate() {
        let Some(t) = ray_sphere_hit_t(ray.origin, dir, marker.position, marker.radius + opts.slop)
        else {
            continue;
        };
        if t > opts.max_distance {
            continue;
        }
        best = match best {
            Some((bt, bi)) if bt.total_cmp(&t).then(bi.cmp(&idx)).is_le() => Some((bt, bi)),
            _ => Some((t, idx)),
        };
    }

    let (t, index) = best?;
    Some(PickHit {
        index,
        airport: markers[index].airport.clone(),
        distance: t,
        point: ray.origin + dir.scale(t),
    })
}

/// Entry distance of a normalized ray into a sphere, clamped to 0 when the
/// origin is inside it.
fn ray_sphere_hit_t(origin: Vec3, dir: Vec3, center: Vec3, radius: f64) -> Option<f64> {
    let oc = origin - center;
    let b = oc.dot(dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let t_far = -b + sq;
    if t_far < 0.0 {
        return None;
    }
    Some((-b - sq).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::{PickOptions, Ray, pick_marker};
    use crate::components::{AirportMarker, Color};
    use flights::AirportId;
    use foundation::math::Vec3;

    fn marker(code: &str, x: f64) -> AirportMarker {
        AirportMarker {
            airport: AirportId::new(code),
            position: Vec3::new(x, 0.0, 0.0),
            radius: 0.5,
            color: Color::ORANGE,
        }
    }

    #[test]
    fn ray_picks_nearest_hit() {
        let markers = vec![marker("FAR", 10.0), marker("NEAR", 5.0)];
        let ray = Ray::new(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0));
        let hit = pick_marker(&markers, ray, PickOptions::default()).expect("hit");
        assert_eq!(hit.airport, AirportId::new("NEAR"));
        assert_eq!(hit.index, 1);
        assert!((hit.distance - 4.5).abs() < 1e-12);
        assert!((hit.point.x - 4.5).abs() < 1e-12);
    }

    #[test]
    fn tie_breaks_by_index() {
        let markers = vec![marker("AAA", 5.0), marker("BBB", 5.0)];
        let ray = Ray::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));
        let hit = pick_marker(&markers, ray, PickOptions::default()).expect("hit");
        assert_eq!(hit.index, 0);
    }

    #[test]
    fn misses_and_behind_are_ignored() {
        let markers = vec![marker("BEHIND", -5.0)];
        let ray = Ray::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));
        assert!(pick_marker(&markers, ray, PickOptions::default()).is_none());

        let sideways = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(pick_marker(&markers, sideways, PickOptions::default()).is_none());

        let zero_dir = Ray::new(Vec3::ZERO, Vec3::ZERO);
        assert!(pick_marker(&markers, zero_dir, PickOptions::default()).is_none());
    }

    #[test]
    fn slop_widens_targets() {
        let markers = vec![marker("SFO", 5.0)];
        let ray = Ray::new(Vec3::new(0.0, 0.8, 0.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(pick_marker(&markers, ray, PickOptions::default()).is_none());
        let opts = PickOptions {
            slop: 0.5,
            ..PickOptions::default()
        };
        assert!(pick_marker(&markers, ray, opts).is_some());
    }
}
