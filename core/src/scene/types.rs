//! Scene tree data types.
//!
//! Transforms use plain arrays (`[f32; 3]`, `[f32; 4]`); convert with
//! [`NodeTransform::to_matrix`] when a matrix is needed.

use crate::math::{self, Mat4, Vec3};
use crate::mesh::Geometry;

use super::walk::{NodePath, Walk};

/// Node transform decomposed into translation, rotation, and scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeTransform {
    /// Translation [x, y, z].
    pub translation: [f32; 3],
    /// Rotation quaternion [x, y, z, w].
    pub rotation: [f32; 4],
    /// Scale [x, y, z].
    pub scale: [f32; 3],
}

impl NodeTransform {
    /// Identity transform: no translation, identity rotation, unit scale.
    pub const IDENTITY: Self = Self {
        translation: [0.0, 0.0, 0.0],
        rotation: [0.0, 0.0, 0.0, 1.0],
        scale: [1.0, 1.0, 1.0],
    };

    /// Returns this transform with a different translation.
    #[must_use]
    pub const fn with_translation(mut self, translation: [f32; 3]) -> Self {
        self.translation = translation;
        self
    }

    /// Returns this transform with a different rotation.
    #[must_use]
    pub const fn with_rotation(mut self, rotation: [f32; 4]) -> Self {
        self.rotation = rotation;
        self
    }

    /// Returns this transform with a different scale.
    #[must_use]
    pub const fn with_scale(mut self, scale: [f32; 3]) -> Self {
        self.scale = scale;
        self
    }

    /// Local matrix (`T * R * S`).
    pub fn to_matrix(&self) -> Mat4 {
        math::mat4_from_scale_rotation_translation(
            Vec3::from(self.scale),
            math::quat_from_array(self.rotation),
            Vec3::from(self.translation),
        )
    }

    /// Check whether this is exactly the identity transform.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for NodeTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A node of the scene tree: either a group or a mesh leaf.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Named container of child nodes.
    Group(GroupNode),
    /// Leaf carrying triangulated geometry.
    Mesh(MeshNode),
}

impl Node {
    /// Node name, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Group(group) => group.name.as_deref(),
            Self::Mesh(mesh) => mesh.name.as_deref(),
        }
    }

    /// Local transform relative to the parent.
    pub fn transform(&self) -> &NodeTransform {
        match self {
            Self::Group(group) => &group.transform,
            Self::Mesh(mesh) => &mesh.transform,
        }
    }

    /// Child nodes. Mesh leaves have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Group(group) => &group.children,
            Self::Mesh(_) => &[],
        }
    }

    /// Geometry of a mesh leaf.
    pub fn geometry(&self) -> Option<&Geometry> {
        match self {
            Self::Group(_) => None,
            Self::Mesh(mesh) => Some(&mesh.geometry),
        }
    }

    fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Self::Group(group) => Some(&mut group.children),
            Self::Mesh(_) => None,
        }
    }
}

impl From<GroupNode> for Node {
    fn from(group: GroupNode) -> Self {
        Self::Group(group)
    }
}

impl From<MeshNode> for Node {
    fn from(mesh: MeshNode) -> Self {
        Self::Mesh(mesh)
    }
}

/// A group node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupNode {
    /// Node name, if any.
    pub name: Option<String>,
    /// Local transform relative to parent.
    pub transform: NodeTransform,
    /// Child nodes forming the sub-tree.
    pub children: Vec<Node>,
}

impl GroupNode {
    /// Creates an unnamed, empty group with identity transform.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the node name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the local transform.
    #[must_use]
    pub fn with_transform(mut self, transform: NodeTransform) -> Self {
        self.transform = transform;
        self
    }

    /// Set the child nodes.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }
}

/// A mesh leaf node.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshNode {
    /// Node name, if any.
    pub name: Option<String>,
    /// Local transform relative to parent.
    pub transform: NodeTransform,
    /// Geometry in the node's local space.
    pub geometry: Geometry,
}

impl MeshNode {
    /// Creates an unnamed leaf with identity transform.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            name: None,
            transform: NodeTransform::IDENTITY,
            geometry,
        }
    }

    /// Set the node name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the local transform.
    #[must_use]
    pub fn with_transform(mut self, transform: NodeTransform) -> Self {
        self.transform = transform;
        self
    }
}

/// A loaded scene: a forest of nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    /// Scene name, if any.
    pub name: Option<String>,
    /// Root nodes of the scene.
    pub nodes: Vec<Node>,
}

impl Scene {
    /// Creates a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scene name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the root nodes.
    #[must_use]
    pub fn with_nodes(mut self, nodes: Vec<Node>) -> Self {
        self.nodes = nodes;
        self
    }

    /// Pre-order traversal of every node with its path and world matrix.
    pub fn walk(&self) -> Walk<'_> {
        Walk::new(&self.nodes)
    }

    /// Number of mesh leaves in the tree.
    pub fn mesh_count(&self) -> usize {
        self.walk()
            .filter(|visit| matches!(visit.node, Node::Mesh(_)))
            .count()
    }

    /// Look up a node by path.
    pub fn get(&self, path: &NodePath) -> Option<&Node> {
        let (first, rest) = path.indices().split_first()?;
        let mut node = self.nodes.get(*first)?;
        for &index in rest {
            node = node.children().get(index)?;
        }
        Some(node)
    }

    /// Remove the nodes at `paths` from the tree and return them.
    ///
    /// Paths are resolved against the tree as it was before the call.
    /// Duplicates and paths nested under another detached path are skipped,
    /// since detaching the ancestor already removes them. Paths that do not
    /// resolve are ignored.
    pub fn detach(&mut self, paths: &[NodePath]) -> Vec<Node> {
        let mut sorted: Vec<&NodePath> = paths.iter().collect();
        sorted.sort();
        sorted.dedup();
        let roots: Vec<&NodePath> = sorted
            .iter()
            .copied()
            .filter(|path| {
                !sorted
                    .iter()
                    .any(|other| other.len() < path.len() && path.starts_with(other))
            })
            .collect();

        // Descending order keeps the remaining paths valid while removing.
        let mut detached = Vec::with_capacity(roots.len());
        for path in roots.into_iter().rev() {
            if let Some(node) = self.remove(path) {
                detached.push(node);
            }
        }
        detached.reverse();
        detached
    }

    fn remove(&mut self, path: &NodePath) -> Option<Node> {
        let (&last, parents) = path.indices().split_last()?;
        let siblings = match parents.split_first() {
            None => &mut self.nodes,
            Some((&first, rest)) => {
                let mut node = self.nodes.get_mut(first)?;
                for &index in rest {
                    node = node.children_mut()?.get_mut(index)?;
                }
                node.children_mut()?
            }
        };
        (last < siblings.len()).then(|| siblings.remove(last))
    }
}
