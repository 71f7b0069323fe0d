#![cfg(feature = "gltf")]

use batsmith_core::gltf::{GltfError, load_gltf};
use batsmith_core::math::transform_point;
use batsmith_core::scene::Node;

/// One triangle `(0,0,0) (1,0,0) (0,1,0)` with `u16` indices, shared by two
/// named nodes under a group.
const TWO_NODE_GLTF: &str = r#"{
  "asset": { "version": "2.0" },
  "scene": 0,
  "scenes": [ { "name": "bat", "nodes": [0] } ],
  "nodes": [
    { "name": "Root", "children": [1, 2] },
    { "name": "Handle_01", "mesh": 0 },
    { "name": "Barrel_Main", "mesh": 0, "translation": [5.0, 0.0, 0.0] }
  ],
  "meshes": [
    { "name": "tri", "primitives": [ { "attributes": { "POSITION": 0 }, "indices": 1 } ] }
  ],
  "buffers": [
    { "byteLength": 44, "uri": "data:application/octet-stream;base64,AAAAAAAAAAAAAAAAAACAPwAAAAAAAAAAAAAAAAAAgD8AAAAAAAABAAIAAAA=" }
  ],
  "bufferViews": [
    { "buffer": 0, "byteOffset": 0, "byteLength": 36 },
    { "buffer": 0, "byteOffset": 36, "byteLength": 6 }
  ],
  "accessors": [
    { "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3",
      "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 0.0] },
    { "bufferView": 1, "componentType": 5123, "count": 3, "type": "SCALAR" }
  ]
}"#;

#[test]
fn loads_named_nodes_under_group() {
    let scene = load_gltf(TWO_NODE_GLTF.as_bytes()).unwrap();
    assert_eq!(scene.name.as_deref(), Some("bat"));
    assert_eq!(scene.nodes.len(), 1);

    let root = &scene.nodes[0];
    assert!(matches!(root, Node::Group(_)));
    assert_eq!(root.name(), Some("Root"));

    let names: Vec<_> = root.children().iter().map(Node::name).collect();
    assert_eq!(names, vec![Some("Handle_01"), Some("Barrel_Main")]);
    assert_eq!(scene.mesh_count(), 2);
}

#[test]
fn reads_indexed_triangle_with_normals() {
    let scene = load_gltf(TWO_NODE_GLTF.as_bytes()).unwrap();
    let geometry = scene.nodes[0].children()[0].geometry().unwrap();

    assert_eq!(geometry.vertex_count(), 3);
    assert_eq!(geometry.indices().unwrap(), &[0, 1, 2]);
    assert_eq!(geometry.positions()[1], [1.0, 0.0, 0.0]);
    // No NORMAL attribute in the file, so normals come from the winding.
    assert!(geometry.has_normals());
    assert!(!geometry.has_uvs());
}

#[test]
fn node_translation_reaches_world_matrix() {
    let scene = load_gltf(TWO_NODE_GLTF.as_bytes()).unwrap();
    let barrel = scene
        .walk()
        .find(|visit| visit.node.name() == Some("Barrel_Main"))
        .unwrap();
    assert_eq!(transform_point(&barrel.world, [1.0, 0.0, 0.0]), [6.0, 0.0, 0.0]);
}

#[test]
fn rejects_garbage() {
    let err = load_gltf(b"not a gltf file").unwrap_err();
    assert!(matches!(err, GltfError::Parse(_)));
}

#[test]
fn node_rotation_is_kept() {
    let rotated = TWO_NODE_GLTF.replace(
        r#"{ "name": "Handle_01", "mesh": 0 }"#,
        r#"{ "name": "Handle_01", "mesh": 0, "rotation": [0.0, 0.0, 0.70710677, 0.70710677] }"#,
    );
    let scene = load_gltf(rotated.as_bytes()).unwrap();
    let handle = &scene.nodes[0].children()[0];
    let rotation = handle.transform().rotation;
    assert!((rotation[2] - 0.70710677).abs() < 1e-6);
    assert!((rotation[3] - 0.70710677).abs() < 1e-6);
    assert_eq!(handle.transform().scale, [1.0, 1.0, 1.0]);
}
