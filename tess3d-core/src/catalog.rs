/// Built-in catalog of discrete isometry groups
///
/// One entry per supported tessellation: Euclidean space groups built from
/// shears and glides, the spherical binary polyhedral groups, and two
/// hyperbolic groups. Every closure is computed eagerly at construction
/// and kept memory-resident; the catalog never changes afterwards.
use nalgebra::Matrix4;

use crate::geometry::Geometry;
use crate::group::{GroupDef, GroupError, TransformGroup};
use crate::transform::Isometry;

/// Catalog construction failed while generating one named group.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("group '{name}': {source}")]
pub struct CatalogError {
    pub name: String,
    #[source]
    pub source: GroupError,
}

/// An owned, immutable collection of generated groups.
///
/// Which entry is "active" is the consumer's state, not the catalog's; the
/// catalog only provides indexed read access and the count needed for
/// cyclic selection.
#[derive(Debug, Clone)]
pub struct GroupCatalog {
    groups: Vec<TransformGroup>,
}

impl GroupCatalog {
    /// Generate the built-in catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_defs(&builtin_defs())
    }

    /// Generate a catalog from arbitrary definitions, in order.
    ///
    /// Aborts on the first failing definition, naming it in the error.
    pub fn from_defs(defs: &[GroupDef]) -> Result<Self, CatalogError> {
        let mut groups = Vec::with_capacity(defs.len());
        for def in defs {
            let group = TransformGroup::generate(def).map_err(|source| CatalogError {
                name: def.name.clone(),
                source,
            })?;
            groups.push(group);
        }
        tracing::info!(groups = groups.len(), "group catalog ready");
        Ok(Self { groups })
    }

    pub fn count(&self) -> usize {
        self.groups.len()
    }

    pub fn get(&self, index: usize) -> Option<&TransformGroup> {
        self.groups.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TransformGroup> {
        self.groups.iter()
    }
}

/// Definitions of the twelve reference groups.
///
/// Matrix constants are row-major in the w-first convention. The Euclidean
/// entries combine unit translations with glides and quarter-twists; the
/// spherical entries are unit-quaternion multiplications; the
/// hyperbolic entries generate an Apollonian-gasket packing group and the
/// figure-eight knot complement's fundamental group.
pub fn builtin_defs() -> Vec<GroupDef> {
    let translate_x = Isometry::translation(1.0, 0.0, 0.0);
    let translate_y = Isometry::translation(0.0, 1.0, 0.0);
    let translate_z = Isometry::translation(0.0, 0.0, 1.0);

    // Reflect x, translate along z
    let glide_x = Matrix4::new(
        1.0, 0.0, 0.0, 0.0, //
        1.0, -1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        1.0, 0.0, 0.0, 1.0,
    );
    // Translate along y, reflect z
    let glide_y = Matrix4::new(
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        1.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, -1.0,
    );
    // Translate along y with a quarter turn in the (x, z) plane
    let twist_y = Matrix4::new(
        1.0, 0.0, 0.0, 0.0, //
        0.0, 0.0, 0.0, -1.0, //
        1.0, 0.0, 1.0, 0.0, //
        0.0, 1.0, 0.0, 0.0,
    );

    // Right multiplication by the unit quaternion (1 - i + j - k) / 2
    let tetra_a = 0.5_f32
        * Matrix4::new(
            1.0, 1.0, -1.0, 1.0, //
            -1.0, 1.0, -1.0, -1.0, //
            1.0, 1.0, 1.0, -1.0, //
            -1.0, 1.0, 1.0, 1.0,
        );
    // Right multiplication by the unit quaternion (1 + i + j - k) / 2
    let tetra_b = 0.5_f32
        * Matrix4::new(
            1.0, -1.0, -1.0, 1.0, //
            1.0, 1.0, -1.0, -1.0, //
            1.0, 1.0, 1.0, 1.0, //
            -1.0, 1.0, -1.0, 1.0,
        );
    let octa_b = std::f32::consts::FRAC_1_SQRT_2
        * Matrix4::new(
            1.0, 0.0, 0.0, 1.0, //
            0.0, 1.0, -1.0, 0.0, //
            0.0, 1.0, 1.0, 0.0, //
            -1.0, 0.0, 0.0, 1.0,
        );
    let gold = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let gold_inv = 1.0 / gold;
    let icosa_b = 0.5
        * Matrix4::new(
            gold, 0.0, -1.0, gold_inv, //
            0.0, gold, -gold_inv, -1.0, //
            1.0, gold_inv, gold, 0.0, //
            -gold_inv, 1.0, 0.0, gold,
        );

    let apollonian_a = Matrix4::new(
        3.0, 0.0, -2.0, 2.0, //
        0.0, 1.0, 0.0, 0.0, //
        -2.0, 0.0, 1.0, -2.0, //
        -2.0, 0.0, 2.0, -1.0,
    );
    let apollonian_b = Matrix4::new(
        3.0, 2.0, -2.0, 0.0, //
        2.0, 1.0, -2.0, 0.0, //
        2.0, 2.0, -1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    );

    let half_sqrt3 = 3.0_f32.sqrt() / 2.0;
    let figure_eight_a = Matrix4::new(
        1.5, 1.0, 0.0, -0.5, //
        1.0, 1.0, 0.0, -1.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.5, 1.0, 0.0, 0.5,
    );
    let figure_eight_b = Matrix4::new(
        1.5, 0.5, -half_sqrt3, 0.5, //
        0.5, 1.0, 0.0, 0.5, //
        -half_sqrt3, 0.0, 1.0, -half_sqrt3, //
        -0.5, -0.5, half_sqrt3, 0.5,
    );

    vec![
        GroupDef::new("s1-r2", Geometry::Euclidean, 6, vec![translate_x]),
        GroupDef::new(
            "t2-r",
            Geometry::Euclidean,
            6,
            vec![translate_x, translate_y],
        ),
        GroupDef::new(
            "3-torus",
            Geometry::Euclidean,
            6,
            vec![translate_x, translate_y, translate_z],
        ),
        GroupDef::new("k2-r", Geometry::Euclidean, 6, vec![glide_x, translate_x]),
        GroupDef::new(
            "k2-s1",
            Geometry::Euclidean,
            6,
            vec![glide_y, translate_x, translate_z],
        ),
        GroupDef::new(
            "half-twist-cube",
            Geometry::Euclidean,
            6,
            vec![twist_y, translate_x, translate_z],
        ),
        GroupDef::new(
            "half-twist-chimney",
            Geometry::Euclidean,
            6,
            vec![twist_y, translate_x],
        ),
        GroupDef::new(
            "binary-tetrahedral",
            Geometry::Spherical,
            6,
            vec![tetra_a, tetra_b],
        ),
        GroupDef::new(
            "binary-octahedral",
            Geometry::Spherical,
            6,
            vec![tetra_a, octa_b],
        ),
        GroupDef::new(
            "binary-icosahedral",
            Geometry::Spherical,
            6,
            vec![tetra_a, icosa_b],
        ),
        GroupDef::new(
            "apollonian-gasket",
            Geometry::Hyperbolic,
            8,
            vec![apollonian_a, apollonian_b],
        ),
        GroupDef::new(
            "figure-eight-knot",
            Geometry::Hyperbolic,
            8,
            vec![figure_eight_a, figure_eight_b],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::MAX_PRIMARIES;

    #[test]
    fn test_builtin_defs_shape() {
        let defs = builtin_defs();
        assert_eq!(defs.len(), 12);
        for def in &defs {
            assert!(!def.primaries.is_empty());
            assert!(def.primaries.len() <= MAX_PRIMARIES);
            assert!(def.max_depth >= 6);
        }
    }

    #[test]
    fn test_builtin_names_are_unique() {
        let defs = builtin_defs();
        for (i, a) in defs.iter().enumerate() {
            for b in defs.iter().skip(i + 1) {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_failed_group_is_named_in_error() {
        let defs = vec![GroupDef::new(
            "degenerate",
            Geometry::Euclidean,
            4,
            vec![Matrix4::zeros()],
        )];
        let err = GroupCatalog::from_defs(&defs).unwrap_err();
        assert_eq!(err.name, "degenerate");
        assert_eq!(err.source, GroupError::SingularGenerator { index: 0 });
        assert!(err.to_string().contains("degenerate"));
    }

    #[test]
    fn test_get_out_of_bounds_is_none() {
        let catalog = GroupCatalog::from_defs(&[]).unwrap();
        assert_eq!(catalog.count(), 0);
        assert!(catalog.get(0).is_none());
    }
}
