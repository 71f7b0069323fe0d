//! Handle/barrel lookup by node name.

use batsmith_core::mesh::{Geometry, merge_geometries};
use batsmith_core::scene::NodePath;

use crate::config::SegmentationConfig;
use crate::error::SegmentError;
use crate::inventory::{GroupEntry, MeshLeaf, SceneInventory};

/// How a role was matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSource {
    /// A group whose name contains the keyword; its leaves were merged.
    Group,
    /// A mesh leaf whose name contains the keyword.
    Leaf,
    /// Positional fallback for unnamed two-mesh scenes.
    Positional,
}

/// Geometry resolved for one role.
#[derive(Debug, Clone)]
pub struct NamedMatch {
    /// World-space geometry of the matched node(s).
    pub geometry: Geometry,
    /// Scene nodes consumed by the match: the winning node plus a matching
    /// leaf that lost to a group.
    pub consumed: Vec<NodePath>,
    /// How the match was made.
    pub source: MatchSource,
}

/// Result of the name scan. Either role may be unresolved.
#[derive(Debug, Clone, Default)]
pub struct NamedResolution {
    /// The handle match.
    pub handle: Option<NamedMatch>,
    /// The barrel match.
    pub barrel: Option<NamedMatch>,
}

impl NamedResolution {
    /// Both roles resolved.
    pub fn is_complete(&self) -> bool {
        self.handle.is_some() && self.barrel.is_some()
    }
}

fn name_matches(name: Option<&str>, keyword: &str) -> bool {
    name.is_some_and(|name| name.to_lowercase().contains(keyword))
}

fn leaf_name(leaf: &MeshLeaf) -> Option<&str> {
    leaf.name.as_deref()
}

fn group_name(group: &GroupEntry) -> Option<&str> {
    group.name.as_deref()
}

/// Last item in `items` whose name contains `keyword` (already lowercase).
fn last_match<'a, T>(
    items: &'a [T],
    name: fn(&T) -> Option<&str>,
    keyword: &str,
) -> Option<&'a T> {
    items.iter().rev().find(|item| name_matches(name(item), keyword))
}

/// Resolve handle and barrel geometry from node names.
///
/// Names are matched case-insensitively against the configured keywords.
/// When several nodes match a role the last one in pre-order wins, and a
/// matching group beats a matching leaf. If no leaf matched either keyword
/// and the scene holds exactly two leaves, the first is taken as the handle
/// and the second as the barrel.
pub fn resolve_by_name(
    inventory: &SceneInventory,
    config: &SegmentationConfig,
) -> Result<NamedResolution, SegmentError> {
    let handle_key = config.handle_keyword.to_lowercase();
    let barrel_key = config.barrel_keyword.to_lowercase();

    let mut handle_leaf = last_match(&inventory.leaves, leaf_name, &handle_key);
    let mut barrel_leaf = last_match(&inventory.leaves, leaf_name, &barrel_key);
    let mut leaf_source = MatchSource::Leaf;
    if handle_leaf.is_none() && barrel_leaf.is_none() && inventory.leaves.len() == 2 {
        log::debug!("No named meshes, using positional handle/barrel fallback");
        handle_leaf = inventory.leaves.first();
        barrel_leaf = inventory.leaves.get(1);
        leaf_source = MatchSource::Positional;
    }
    let handle_group = last_match(&inventory.groups, group_name, &handle_key);
    let barrel_group = last_match(&inventory.groups, group_name, &barrel_key);

    Ok(NamedResolution {
        handle: resolve_role(inventory, handle_group, handle_leaf, leaf_source)?,
        barrel: resolve_role(inventory, barrel_group, barrel_leaf, leaf_source)?,
    })
}

fn resolve_role(
    inventory: &SceneInventory,
    group: Option<&GroupEntry>,
    leaf: Option<&MeshLeaf>,
    leaf_source: MatchSource,
) -> Result<Option<NamedMatch>, SegmentError> {
    if let Some(group) = group {
        let parts: Vec<Geometry> = inventory
            .leaves_under(&group.path)
            .map(|leaf| leaf.geometry.clone())
            .collect();
        if !parts.is_empty() {
            let mut consumed = vec![group.path.clone()];
            consumed.extend(leaf.map(|leaf| leaf.path.clone()));
            return Ok(Some(NamedMatch {
                geometry: merge_geometries(&parts)?,
                consumed,
                source: MatchSource::Group,
            }));
        }
        log::warn!(
            "Group {:?} matched but holds no meshes",
            group.name.as_deref().unwrap_or_default()
        );
    }

    Ok(leaf.map(|leaf| NamedMatch {
        geometry: leaf.geometry.clone(),
        consumed: vec![leaf.path.clone()],
        source: leaf_source,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use batsmith_core::mesh::generators::generate_cylinder;
    use batsmith_core::scene::{GroupNode, MeshNode, Node, Scene};

    fn leaf(name: Option<&str>, length: f32) -> Node {
        let node = MeshNode::new(generate_cylinder(0.5, length, 8, 2));
        match name {
            Some(name) => node.with_name(name).into(),
            None => node.into(),
        }
    }

    fn resolve(scene: &Scene) -> NamedResolution {
        let inventory = SceneInventory::collect(scene, false);
        resolve_by_name(&inventory, &SegmentationConfig::default()).unwrap()
    }

    #[test]
    fn test_case_insensitive_leaf_names() {
        let scene = Scene::new().with_nodes(vec![
            leaf(Some("Handle_01"), 1.0),
            leaf(Some("Barrel_Main"), 2.0),
            leaf(Some("Logo"), 3.0),
        ]);
        let resolution = resolve(&scene);
        assert!(resolution.is_complete());

        let handle = resolution.handle.unwrap();
        assert_eq!(handle.source, MatchSource::Leaf);
        assert_eq!(handle.consumed, vec![NodePath::new(vec![0])]);
        let barrel = resolution.barrel.unwrap();
        assert_eq!(barrel.consumed, vec![NodePath::new(vec![1])]);
        assert_eq!(barrel.geometry.bounding_box().unwrap().max[0], 2.0);
    }

    #[test]
    fn test_last_match_wins() {
        let scene = Scene::new().with_nodes(vec![
            leaf(Some("handle_a"), 1.0),
            leaf(Some("handle_b"), 2.0),
            leaf(Some("barrel"), 3.0),
        ]);
        let handle = resolve(&scene).handle.unwrap();
        assert_eq!(handle.consumed, vec![NodePath::new(vec![1])]);
    }

    #[test]
    fn test_group_beats_leaf_and_merges_children() {
        let scene = Scene::new().with_nodes(vec![
            GroupNode::new()
                .with_name("HandleGroup")
                .with_children(vec![leaf(None, 1.0), leaf(None, 2.0)])
                .into(),
            leaf(Some("handle_stray"), 5.0),
            leaf(Some("barrel"), 3.0),
        ]);
        let handle = resolve(&scene).handle.unwrap();
        assert_eq!(handle.source, MatchSource::Group);
        // The losing leaf match is consumed alongside the group.
        assert_eq!(
            handle.consumed,
            vec![NodePath::new(vec![0]), NodePath::new(vec![1])]
        );
        let single = generate_cylinder(0.5, 1.0, 8, 2);
        assert_eq!(handle.geometry.vertex_count(), 2 * single.vertex_count());
    }

    #[test]
    fn test_two_unnamed_meshes_fall_back_positionally() {
        let scene = Scene::new().with_nodes(vec![leaf(None, 1.0), leaf(Some("Cube"), 2.0)]);
        let resolution = resolve(&scene);
        assert!(resolution.is_complete());
        assert_eq!(resolution.handle.unwrap().source, MatchSource::Positional);
        assert_eq!(
            resolution.barrel.unwrap().consumed,
            vec![NodePath::new(vec![1])]
        );
    }

    #[test]
    fn test_no_fallback_when_a_leaf_matched() {
        let scene = Scene::new().with_nodes(vec![leaf(Some("handle"), 1.0), leaf(None, 2.0)]);
        let resolution = resolve(&scene);
        assert!(resolution.handle.is_some());
        assert!(resolution.barrel.is_none());
    }

    #[test]
    fn test_single_unnamed_mesh_is_unresolved() {
        let scene = Scene::new().with_nodes(vec![leaf(None, 1.0)]);
        let resolution = resolve(&scene);
        assert!(resolution.handle.is_none());
        assert!(resolution.barrel.is_none());
    }

    #[test]
    fn test_custom_keywords() {
        let scene = Scene::new().with_nodes(vec![leaf(Some("GRIP"), 1.0), leaf(Some("Body"), 2.0)]);
        let inventory = SceneInventory::collect(&scene, false);
        let config = SegmentationConfig {
            handle_keyword: "Grip".into(),
            barrel_keyword: "body".into(),
            ..SegmentationConfig::default()
        };
        let resolution = resolve_by_name(&inventory, &config).unwrap();
        assert_eq!(resolution.handle.unwrap().source, MatchSource::Leaf);
        assert_eq!(resolution.barrel.unwrap().source, MatchSource::Leaf);
    }
}
