//! Pre-order scene traversal with accumulated world transforms.

use std::fmt;

use crate::math::Mat4;

use super::types::Node;

/// Position of a node in the tree: child indices from the root list down.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    /// Create a path from child indices.
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    /// Child indices from the root list down.
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Number of levels (1 for a root node).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the path is empty (refers to no node).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if `self` equals `ancestor` or lies beneath it.
    pub fn starts_with(&self, ancestor: &NodePath) -> bool {
        self.0.starts_with(&ancestor.0)
    }

    fn child(&self, index: usize) -> Self {
        let mut indices = Vec::with_capacity(self.0.len() + 1);
        indices.extend_from_slice(&self.0);
        indices.push(index);
        Self(indices)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{index}")?;
        }
        Ok(())
    }
}

/// One visited node.
#[derive(Debug, Clone)]
pub struct NodeVisit<'a> {
    /// Where the node sits in the tree.
    pub path: NodePath,
    /// The node itself.
    pub node: &'a Node,
    /// Product of all transforms from the root down to and including this node.
    pub world: Mat4,
}

/// Pre-order iterator returned by [`Scene::walk`](super::Scene::walk).
#[derive(Debug)]
pub struct Walk<'a> {
    stack: Vec<(NodePath, &'a Node, Mat4)>,
}

impl<'a> Walk<'a> {
    pub(super) fn new(roots: &'a [Node]) -> Self {
        let stack = roots
            .iter()
            .enumerate()
            .rev()
            .map(|(i, node)| (NodePath::new(vec![i]), node, Mat4::identity()))
            .collect();
        Self { stack }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = NodeVisit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (path, node, parent) = self.stack.pop()?;
        let world = parent * node.transform().to_matrix();
        for (i, child) in node.children().iter().enumerate().rev() {
            self.stack.push((path.child(i), child, world));
        }
        Some(NodeVisit { path, node, world })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::transform_point;
    use crate::mesh::Geometry;
    use crate::scene::{GroupNode, MeshNode, NodeTransform, Scene};

    fn leaf(name: &str) -> Node {
        MeshNode::new(Geometry::new(vec![[0.0; 3]; 3]))
            .with_name(name)
            .into()
    }

    #[test]
    fn test_walk_is_pre_order() {
        let scene = Scene::new().with_nodes(vec![
            GroupNode::new()
                .with_name("g")
                .with_children(vec![
                    leaf("a"),
                    GroupNode::new()
                        .with_name("h")
                        .with_children(vec![leaf("b")])
                        .into(),
                ])
                .into(),
            leaf("c"),
        ]);

        let visited: Vec<(String, Option<&str>)> = scene
            .walk()
            .map(|visit| (visit.path.to_string(), visit.node.name()))
            .collect();
        assert_eq!(
            visited,
            vec![
                ("0".to_owned(), Some("g")),
                ("0/0".to_owned(), Some("a")),
                ("0/1".to_owned(), Some("h")),
                ("0/1/0".to_owned(), Some("b")),
                ("1".to_owned(), Some("c")),
            ]
        );
    }

    #[test]
    fn test_world_matrix_accumulates() {
        let scene = Scene::new().with_nodes(vec![
            GroupNode::new()
                .with_transform(NodeTransform::IDENTITY.with_translation([1.0, 0.0, 0.0]))
                .with_children(vec![
                    MeshNode::new(Geometry::new(vec![[0.0; 3]; 3]))
                        .with_transform(
                            NodeTransform::IDENTITY
                                .with_translation([0.0, 2.0, 0.0])
                                .with_scale([2.0, 2.0, 2.0]),
                        )
                        .into(),
                ])
                .into(),
        ]);

        let visit = scene.walk().last().unwrap();
        assert_eq!(visit.path, NodePath::new(vec![0, 0]));
        assert_eq!(transform_point(&visit.world, [1.0, 1.0, 1.0]), [3.0, 4.0, 2.0]);
    }

    #[test]
    fn test_path_prefix() {
        let parent = NodePath::new(vec![0, 2]);
        assert!(NodePath::new(vec![0, 2, 1]).starts_with(&parent));
        assert!(parent.starts_with(&parent));
        assert!(!NodePath::new(vec![0, 1]).starts_with(&parent));
    }
}
