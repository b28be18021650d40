//! Geographic to render-space projection.
//!
//! Every consumer that places something on the globe (markers, arc endpoints,
//! the texture-mapped sphere) must go through [`project`] so they agree on the
//! orientation: +Y is the north pole and the prime meridian crosses the equator on +X.

use super::Vec3;

/// Maps `(lat_deg, lon_deg)` onto a sphere of `radius` centred at the origin.
///
/// No range normalization is performed; out-of-range inputs are the caller's
/// responsibility.
pub fn project(lat_deg: f64, lon_deg: f64, radius: f64) -> Vec3 {
    let phi = (90.0 - lat_deg).to_radians();
    let theta = (lon_deg + 180.0).to_radians();

    let x = -radius * phi.sin() * theta.cos();
    let y = radius * phi.cos();
    let z = radius * phi.sin() * theta.sin();

    Vec3::new(x, y, z)
}
