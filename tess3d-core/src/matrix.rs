/// Tolerance-based matrix comparison
use nalgebra::Matrix4;

/// Epsilon used when merging near-duplicate elements during closure
/// generation. Iterated composition accumulates rounding error, so this
/// band is much wider than [`CMP_EPSILON`].
pub const MERGE_EPSILON: f32 = 1e-4;

/// Epsilon for general-purpose matrix equality checks.
pub const CMP_EPSILON: f32 = 1e-7;

/// Compare two matrices component-wise; equal when every absolute
/// difference is at most `eps`.
pub fn approx_eq(a: &Matrix4<f32>, b: &Matrix4<f32>, eps: f32) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= eps)
}
