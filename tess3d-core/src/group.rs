/// Breadth-first closure of a finitely generated matrix group
use nalgebra::Matrix4;

use crate::geometry::Geometry;
use crate::matrix::{approx_eq, MERGE_EPSILON};

/// Upper bound on primary generators per group.
pub const MAX_PRIMARIES: usize = 3;

/// Fatal configuration errors raised while assembling a generator set.
///
/// Generator sets are startup constants, so none of these are recoverable
/// at runtime; catalog construction aborts on the first one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GroupError {
    #[error("generator set is empty")]
    EmptyGeneratorSet,

    #[error("generator set has {count} primaries, at most {MAX_PRIMARIES} are supported")]
    TooManyGenerators { count: usize },

    #[error("primary generator {index} is not invertible")]
    SingularGenerator { index: usize },
}

/// Definition of a group to generate: named primaries plus closure bounds.
///
/// Inverses are derived uniformly at generation time, whatever the
/// primary count.
#[derive(Debug, Clone)]
pub struct GroupDef {
    pub name: String,
    pub geometry: Geometry,
    pub max_depth: u32,
    pub primaries: Vec<Matrix4<f32>>,
}

impl GroupDef {
    pub fn new(
        name: impl Into<String>,
        geometry: Geometry,
        max_depth: u32,
        primaries: Vec<Matrix4<f32>>,
    ) -> Self {
        Self {
            name: name.into(),
            geometry,
            max_depth,
            primaries,
        }
    }
}

/// The closure of a generator set up to its word-length bound.
///
/// Elements are stored in discovery order with the identity first, are
/// pairwise distinct under [`MERGE_EPSILON`], and never change after
/// construction.
#[derive(Debug, Clone)]
pub struct TransformGroup {
    name: String,
    geometry: Geometry,
    max_depth: u32,
    transforms: Vec<Matrix4<f32>>,
    depth_marks: Vec<usize>,
    element_depths: Vec<u32>,
}

impl TransformGroup {
    /// Compute the closure of `def`'s generator set.
    ///
    /// The generator list is the primaries followed by their inverses, in
    /// primary order. Each depth level multiplies every generator against
    /// the elements discovered at the previous level only, which bounds
    /// every element's first-discovery depth by its word length. A
    /// candidate is kept iff no accumulated element matches it within
    /// [`MERGE_EPSILON`].
    ///
    /// # Errors
    ///
    /// [`GroupError::EmptyGeneratorSet`], [`GroupError::TooManyGenerators`]
    /// for bad arity; [`GroupError::SingularGenerator`] when a primary
    /// cannot be inverted.
    pub fn generate(def: &GroupDef) -> Result<Self, GroupError> {
        if def.primaries.is_empty() {
            return Err(GroupError::EmptyGeneratorSet);
        }
        if def.primaries.len() > MAX_PRIMARIES {
            return Err(GroupError::TooManyGenerators {
                count: def.primaries.len(),
            });
        }

        let mut generators: Vec<Matrix4<f32>> = Vec::with_capacity(def.primaries.len() * 2);
        generators.extend(def.primaries.iter().copied());
        for (index, primary) in def.primaries.iter().enumerate() {
            let inverse = primary
                .try_inverse()
                .ok_or(GroupError::SingularGenerator { index })?;
            generators.push(inverse);
        }

        let mut transforms = vec![Matrix4::identity()];
        let mut element_depths = vec![0u32];
        let mut depth_marks = Vec::new();

        let mut frontier_start = 0;
        for level in 0..def.max_depth {
            let frontier_end = transforms.len();
            let mut grew = false;

            for i in frontier_start..frontier_end {
                for generator in &generators {
                    let candidate = generator * transforms[i];
                    let known = transforms
                        .iter()
                        .any(|existing| approx_eq(existing, &candidate, MERGE_EPSILON));
                    if !known {
                        transforms.push(candidate);
                        element_depths.push(level + 1);
                        grew = true;
                    }
                }
            }

            if !grew {
                // The next frontier would be empty; later levels cannot
                // produce anything either.
                break;
            }
            depth_marks.push(transforms.len());
            frontier_start = frontier_end;
        }

        tracing::debug!(
            name = %def.name,
            elements = transforms.len(),
            levels = depth_marks.len(),
            "group closure generated"
        );

        Ok(Self {
            name: def.name.clone(),
            geometry: def.geometry,
            max_depth: def.max_depth,
            transforms,
            depth_marks,
            element_depths,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Number of distinct elements in the closure.
    pub fn size(&self) -> usize {
        self.transforms.len()
    }

    pub fn get(&self, n: usize) -> Option<&Matrix4<f32>> {
        self.transforms.get(n)
    }

    /// All elements in discovery order; the first is always the identity.
    pub fn transforms(&self) -> &[Matrix4<f32>] {
        &self.transforms
    }

    /// Cumulative element count after each depth level that accepted at
    /// least one new element. Empty when `max_depth` is zero.
    pub fn depth_marks(&self) -> &[usize] {
        &self.depth_marks
    }

    /// Word-length depth at which element `n` was first discovered
    /// (identity is depth 0).
    pub fn depth_of(&self, n: usize) -> Option<u32> {
        self.element_depths.get(n).copied()
    }
}
