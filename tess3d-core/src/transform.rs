/// Isometry constructors for the three supported geometries
///
/// All matrices use the w-first homogeneous convention: they act on
/// column vectors `(w, x, y, z)` with the scalar/timelike coordinate in
/// component 0. Euclidean isometries preserve `w = 1`, spherical ones are
/// orthogonal, hyperbolic ones preserve the Minkowski form
/// `w^2 - x^2 - y^2 - z^2`.
use nalgebra::Matrix4;

/// Builder for isometry matrices
pub struct Isometry;

impl Isometry {
    /// Euclidean translation by `(x, y, z)`.
    pub fn translation(x: f32, y: f32, z: f32) -> Matrix4<f32> {
        Matrix4::new(
            1.0, 0.0, 0.0, 0.0, //
            x, 1.0, 0.0, 0.0, //
            y, 0.0, 1.0, 0.0, //
            z, 0.0, 0.0, 1.0,
        )
    }

    /// Euclidean rotation about the x axis.
    pub fn rotation_x(angle: f32) -> Matrix4<f32> {
        let (s, c) = angle.sin_cos();
        Matrix4::new(
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, c, -s, //
            0.0, 0.0, s, c,
        )
    }

    /// Euclidean rotation about the y axis.
    pub fn rotation_y(angle: f32) -> Matrix4<f32> {
        let (s, c) = angle.sin_cos();
        Matrix4::new(
            1.0, 0.0, 0.0, 0.0, //
            0.0, c, 0.0, s, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, -s, 0.0, c,
        )
    }

    /// Euclidean rotation about the z axis.
    pub fn rotation_z(angle: f32) -> Matrix4<f32> {
        let (s, c) = angle.sin_cos();
        Matrix4::new(
            1.0, 0.0, 0.0, 0.0, //
            0.0, c, -s, 0.0, //
            0.0, s, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Double rotation of S3: by `theta` in the (w, z) plane and by `phi`
    /// in the (x, y) plane.
    pub fn double_rotation(theta: f32, phi: f32) -> Matrix4<f32> {
        let (st, ct) = theta.sin_cos();
        let (sp, cp) = phi.sin_cos();
        Matrix4::new(
            ct, 0.0, 0.0, -st, //
            0.0, cp, -sp, 0.0, //
            0.0, sp, cp, 0.0, //
            st, 0.0, 0.0, ct,
        )
    }

    /// Hyperbolic translation along the x axis (boost in the (w, x) plane).
    pub fn boost_x(angle: f32) -> Matrix4<f32> {
        let (s, c) = (angle.sinh(), angle.cosh());
        Matrix4::new(
            c, s, 0.0, 0.0, //
            s, c, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Hyperbolic translation along the y axis.
    pub fn boost_y(angle: f32) -> Matrix4<f32> {
        let (s, c) = (angle.sinh(), angle.cosh());
        Matrix4::new(
            c, 0.0, s, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            s, 0.0, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Hyperbolic translation along the z axis.
    pub fn boost_z(angle: f32) -> Matrix4<f32> {
        let (s, c) = (angle.sinh(), angle.cosh());
        Matrix4::new(
            c, 0.0, 0.0, s, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            s, 0.0, 0.0, c,
        )
    }

    /// Parabolic isometry of H3 fixing one ideal point, parameterized by
    /// the horospherical offsets `p` and `q`.
    pub fn parabolic(p: f32, q: f32) -> Matrix4<f32> {
        let r = p * p + q * q;
        Matrix4::new(
            0.5 * (2.0 + r), p, -q, -0.5 * r, //
            p, 1.0, 0.0, -p, //
            -q, 0.0, 1.0, q, //
            0.5 * r, p, -q, 0.5 * (2.0 - r),
        )
    }

    /// Loxodromic isometry: a screw motion with rotation `s` and boost
    /// `t`, conjugated by an axis-placing matrix parameterized by `x`.
    ///
    /// Returns `None` when the conjugating matrix is not invertible
    /// (`x` near zero).
    pub fn loxodromic(s: f32, t: f32, x: f32) -> Option<Matrix4<f32>> {
        if x.abs() < 1e-6 {
            return None;
        }
        let (sh, ch) = ((2.0 * t).sinh(), (2.0 * t).cosh());
        let (sn, cs) = (2.0 * s).sin_cos();
        let screw = Matrix4::new(
            ch, 0.0, 0.0, sh, //
            0.0, cs, sn, 0.0, //
            0.0, -sn, cs, 0.0, //
            sh, 0.0, 0.0, ch,
        );

        let x2 = x * x;
        let x4 = x2 * x2;
        let axis = Matrix4::new(
            (1.0 + x2 + x4) / (2.0 * x2),
            1.0 / x,
            0.0,
            (-1.0 + x2 + x4) / (2.0 * x2),
            x,
            1.0,
            0.0,
            x,
            0.0,
            0.0,
            1.0,
            0.0,
            -(1.0 + x2 - x4) / (2.0 * x2),
            -1.0 / x,
            0.0,
            (1.0 - x2 + x4) / (2.0 * x2),
        );
        let axis_inv = axis.try_inverse()?;

        Some(axis * screw * axis_inv)
    }
}
