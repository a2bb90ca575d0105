/// Geometry classification and chart maps into renderable 3-space
///
/// Group elements act on homogeneous 4-vectors in the w-first convention:
/// component 0 is the homogeneous/timelike coordinate, components 1..3 are
/// spatial. A chart map takes a transformed 4-vector to a Euclidean point
/// a renderer can draw.
use nalgebra::{Vector3, Vector4};

/// Which space a group's matrices act on isometrically.
///
/// Informational for the closure computation; consumers use it to pick the
/// chart map and camera model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    Euclidean,
    Spherical,
    Hyperbolic,
}

impl Geometry {
    /// Map a group-space 4-vector to a point in renderable 3-space using
    /// this geometry's default chart.
    ///
    /// Returns `None` when the point has no image in the chart (the
    /// stereographic pole, ideal points of the Klein ball).
    pub fn chart(self, v: &Vector4<f32>) -> Option<Vector3<f32>> {
        match self {
            Geometry::Euclidean => Some(euclidean_chart(v)),
            Geometry::Spherical => stereographic(v),
            Geometry::Hyperbolic => klein(v),
        }
    }
}

impl std::fmt::Display for Geometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Geometry::Euclidean => write!(f, "euclidean"),
            Geometry::Spherical => write!(f, "spherical"),
            Geometry::Hyperbolic => write!(f, "hyperbolic"),
        }
    }
}

/// Drop the homogeneous coordinate.
pub fn euclidean_chart(v: &Vector4<f32>) -> Vector3<f32> {
    Vector3::new(v[1], v[2], v[3])
}

/// Stereographic projection of S3 from the pole w = 1.
///
/// Returns `None` at the pole itself.
pub fn stereographic(v: &Vector4<f32>) -> Option<Vector3<f32>> {
    let denom = 1.0 - v[0];
    if denom.abs() < 1e-6 {
        return None;
    }
    Some(Vector3::new(v[1] / denom, v[2] / denom, v[3] / denom))
}

/// Central projection of the hyperboloid model onto the Klein ball.
///
/// Returns `None` for ideal points (w near zero).
pub fn klein(v: &Vector4<f32>) -> Option<Vector3<f32>> {
    if v[0].abs() < 1e-6 {
        return None;
    }
    Some(Vector3::new(v[1] / v[0], v[2] / v[0], v[3] / v[0]))
}

/// Map a Klein/ball point to the upper half-space model.
///
/// Returns `None` for points on the sphere tangent to the boundary plane
/// (the map's pole).
pub fn upper_half_space(p: &Vector3<f32>) -> Option<Vector3<f32>> {
    let denom = 1.0 - 2.0 * p[2] + p[0] * p[0] + p[1] * p[1] + p[2] * p[2];
    if denom.abs() < 1e-6 {
        return None;
    }
    let a = 2.0 / denom;
    Some(Vector3::new(a * p[0], a * p[1], a * (1.0 - p[2]) - 1.0))
}
