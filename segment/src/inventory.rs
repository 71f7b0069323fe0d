//! Flattened view of a scene: world-space mesh leaves and named groups.

use batsmith_core::math::{self, Vec3};
use batsmith_core::mesh::{BoundingBox, Geometry};
use batsmith_core::scene::{Node, NodePath, Scene};

/// A mesh leaf with its geometry baked into world space.
#[derive(Debug, Clone)]
pub struct MeshLeaf {
    /// Where the leaf sits in the scene.
    pub path: NodePath,
    /// Node name, if any.
    pub name: Option<String>,
    /// Geometry with all transforms from the root applied.
    pub geometry: Geometry,
}

/// A group node.
#[derive(Debug, Clone)]
pub struct GroupEntry {
    /// Where the group sits in the scene.
    pub path: NodePath,
    /// Node name, if any.
    pub name: Option<String>,
}

/// Every mesh leaf and group of a scene, in pre-order.
#[derive(Debug, Clone, Default)]
pub struct SceneInventory {
    /// Mesh leaves in pre-order.
    pub leaves: Vec<MeshLeaf>,
    /// Groups in pre-order.
    pub groups: Vec<GroupEntry>,
    /// World bounds of all leaves (after recentering), `None` without vertices.
    pub bounds: Option<BoundingBox>,
    /// Translation applied by recentering (zero when disabled).
    pub offset: [f32; 3],
}

impl SceneInventory {
    /// Walk `scene` and bake every leaf into world space.
    ///
    /// With `recenter`, all leaves are shifted so the combined bounding box
    /// is centered on the origin.
    pub fn collect(scene: &Scene, recenter: bool) -> Self {
        let mut inventory = Self::default();
        for visit in scene.walk() {
            let name = visit.node.name().map(str::to_owned);
            match visit.node {
                Node::Group(_) => inventory.groups.push(GroupEntry {
                    path: visit.path,
                    name,
                }),
                Node::Mesh(mesh) => {
                    let geometry = if visit.world == math::Mat4::identity() {
                        mesh.geometry.clone()
                    } else {
                        mesh.geometry.transformed(&visit.world)
                    };
                    inventory.leaves.push(MeshLeaf {
                        path: visit.path,
                        name,
                        geometry,
                    });
                }
            }
        }

        inventory.bounds = combined_bounds(inventory.leaves.iter().map(|leaf| &leaf.geometry));
        if recenter {
            inventory.recenter();
        }
        inventory
    }

    fn recenter(&mut self) {
        let Some(bounds) = self.bounds else {
            return;
        };
        let [cx, cy, cz] = bounds.center();
        if cx == 0.0 && cy == 0.0 && cz == 0.0 {
            return;
        }
        let shift = math::mat4_from_translation(Vec3::new(-cx, -cy, -cz));
        for leaf in &mut self.leaves {
            leaf.geometry = leaf.geometry.transformed(&shift);
        }
        self.offset = [-cx, -cy, -cz];
        self.bounds = combined_bounds(self.leaves.iter().map(|leaf| &leaf.geometry));
        log::debug!("Recentered object by {:?}", self.offset);
    }

    /// Total triangle count over all leaves.
    pub fn triangle_count(&self) -> usize {
        self.leaves
            .iter()
            .map(|leaf| leaf.geometry.triangle_count())
            .sum()
    }

    /// Leaves lying under the group at `path`, in pre-order.
    pub fn leaves_under<'a>(&'a self, path: &'a NodePath) -> impl Iterator<Item = &'a MeshLeaf> {
        self.leaves
            .iter()
            .filter(move |leaf| leaf.path.starts_with(path))
    }
}

/// Union of the bounding boxes of `geometries`.
pub(crate) fn combined_bounds<'a>(
    geometries: impl IntoIterator<Item = &'a Geometry>,
) -> Option<BoundingBox> {
    geometries
        .into_iter()
        .filter_map(Geometry::bounding_box)
        .reduce(|a, b| a.union(&b))
}
