//! Integration tests for the built-in catalog and closure properties.

use nalgebra::Matrix4;
use tess3d_core::matrix::{approx_eq, MERGE_EPSILON};
use tess3d_core::{builtin_defs, Geometry, GroupCatalog, GroupDef, TransformGroup};

fn builtin_def(name: &str) -> GroupDef {
    builtin_defs()
        .into_iter()
        .find(|def| def.name == name)
        .unwrap_or_else(|| panic!("no builtin group named '{}'", name))
}

/// Sanov's free generators: shears by 2, exact in integer arithmetic.
fn free_group_def(max_depth: u32) -> GroupDef {
    let a = Matrix4::new(
        1.0, 2.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    );
    let b = Matrix4::new(
        1.0, 0.0, 0.0, 0.0, //
        2.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    );
    GroupDef::new("free-rank-two", Geometry::Hyperbolic, max_depth, vec![a, b])
}

#[test]
fn test_builtin_catalog_builds_all_twelve_groups() {
    let catalog = GroupCatalog::builtin().unwrap();
    assert_eq!(catalog.count(), 12);

    let euclidean = catalog
        .iter()
        .filter(|g| g.geometry() == Geometry::Euclidean)
        .count();
    let spherical = catalog
        .iter()
        .filter(|g| g.geometry() == Geometry::Spherical)
        .count();
    let hyperbolic = catalog
        .iter()
        .filter(|g| g.geometry() == Geometry::Hyperbolic)
        .count();
    assert_eq!((euclidean, spherical, hyperbolic), (7, 3, 2));

    for group in catalog.iter() {
        assert!(
            approx_eq(group.get(0).unwrap(), &Matrix4::identity(), MERGE_EPSILON),
            "group '{}' does not start with the identity",
            group.name()
        );
        assert!(group.size() > 1, "group '{}' never grew", group.name());
        assert!(
            !group.depth_marks().is_empty(),
            "group '{}' has no depth marks",
            group.name()
        );
    }
}

#[test]
fn test_slab_group_is_a_line_of_translations() {
    let group = TransformGroup::generate(&builtin_def("s1-r2")).unwrap();
    // id plus t^k for 0 < |k| <= 6
    assert_eq!(group.size(), 13);
}

#[test]
fn test_plane_lattice_counts_match_taxicab_ball() {
    let group = TransformGroup::generate(&builtin_def("t2-r")).unwrap();
    // Lattice points of Z^2 with |x| + |y| <= 6
    assert_eq!(group.size(), 85);
}

#[test]
fn test_three_torus_counts_match_taxicab_ball() {
    let group = TransformGroup::generate(&builtin_def("3-torus")).unwrap();
    // Lattice points of Z^3 with |x| + |y| + |z| <= 6
    assert_eq!(group.size(), 377);
}

#[test]
fn test_binary_tetrahedral_saturates_at_order_24() {
    let group = TransformGroup::generate(&builtin_def("binary-tetrahedral")).unwrap();
    assert_eq!(group.size(), 24);
    // Saturation: fewer mark entries than the depth bound
    assert!(group.depth_marks().len() < group.max_depth() as usize);
}

#[test]
fn test_binary_polyhedral_groups_stay_within_group_order() {
    let octahedral = TransformGroup::generate(&builtin_def("binary-octahedral")).unwrap();
    assert!(octahedral.size() > 24 && octahedral.size() <= 48);

    let icosahedral = TransformGroup::generate(&builtin_def("binary-icosahedral")).unwrap();
    assert!(icosahedral.size() > 24 && icosahedral.size() <= 120);
}

#[test]
fn test_binary_tetrahedral_elements_are_pairwise_distinct() {
    let group = TransformGroup::generate(&builtin_def("binary-tetrahedral")).unwrap();
    let transforms = group.transforms();
    for (i, a) in transforms.iter().enumerate() {
        for b in transforms.iter().skip(i + 1) {
            assert!(!approx_eq(a, b, MERGE_EPSILON));
        }
    }
}

#[test]
fn test_saturated_group_is_closed_under_generators() {
    let def = builtin_def("binary-tetrahedral");
    let group = TransformGroup::generate(&def).unwrap();

    let mut generators = def.primaries.clone();
    for primary in &def.primaries {
        generators.push(primary.try_inverse().unwrap());
    }
    for element in group.transforms() {
        for generator in &generators {
            let image = generator * element;
            assert!(
                group
                    .transforms()
                    .iter()
                    .any(|t| approx_eq(t, &image, MERGE_EPSILON)),
                "generator image escapes the saturated closure"
            );
        }
    }
}

#[test]
fn test_free_group_word_counts() {
    let group = TransformGroup::generate(&free_group_def(3)).unwrap();
    // Reduced words over two generators: 1 + 4 + 12 + 36
    assert_eq!(group.size(), 53);
    assert_eq!(group.depth_marks(), &[5, 17, 53]);

    let mut per_depth = [0usize; 4];
    for n in 0..group.size() {
        per_depth[group.depth_of(n).unwrap() as usize] += 1;
    }
    assert_eq!(per_depth, [1, 4, 12, 36]);
}

#[test]
fn test_deeper_closure_extends_the_shallower_one() {
    let shallow = TransformGroup::generate(&free_group_def(2)).unwrap();
    let deep = TransformGroup::generate(&free_group_def(3)).unwrap();
    assert_eq!(shallow.size(), 17);
    assert_eq!(&deep.transforms()[..shallow.size()], shallow.transforms());
}

#[test]
fn test_groupfile_catalog_end_to_end() {
    let src = "\
# user-supplied lattices
group slab euclidean 6
  matrix 1 0 0 0  1 1 0 0  0 0 1 0  0 0 0 1
endgroup
group plane euclidean 4
  matrix 1 0 0 0  1 1 0 0  0 0 1 0  0 0 0 1
  matrix 1 0 0 0  0 1 0 0  1 0 1 0  0 0 0 1
endgroup
";
    let defs = tess3d_core::parse_groupfile(src).unwrap();
    let catalog = GroupCatalog::from_defs(&defs).unwrap();
    assert_eq!(catalog.count(), 2);
    assert_eq!(catalog.get(0).unwrap().size(), 13);
    assert_eq!(catalog.get(1).unwrap().size(), 41);
    assert!(catalog.get(2).is_none());
}
