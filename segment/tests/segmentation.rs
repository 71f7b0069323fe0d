use batsmith_core::mesh::Geometry;
use batsmith_core::mesh::generators::generate_cylinder;
use batsmith_core::scene::{GroupNode, MeshNode, NodeTransform, Scene};
use batsmith_segment::{
    Region, SegmentError, Segmentation, SegmentationConfig, SegmentationPath, SegmentationState,
    Segmenter,
};
use rstest::rstest;

/// One unnamed cylinder along X: 336 triangles split 56 / 80 / 200.
fn unnamed_bat() -> Scene {
    Scene::new().with_nodes(vec![MeshNode::new(generate_cylinder(1.0, 10.0, 8, 20)).into()])
}

/// A named handle (144 triangles) and barrel (112 triangles) under a group.
fn named_bat() -> Scene {
    Scene::new().with_nodes(vec![
        GroupNode::new()
            .with_name("Bat")
            .with_children(vec![
                MeshNode::new(generate_cylinder(0.5, 4.0, 8, 8))
                    .with_name("Handle_01")
                    .into(),
                MeshNode::new(generate_cylinder(1.0, 6.0, 8, 6))
                    .with_name("Barrel_Main")
                    .with_transform(NodeTransform::IDENTITY.with_translation([4.0, 0.0, 0.0]))
                    .into(),
            ])
            .into(),
    ])
}

fn segment(scene: &mut Scene) -> Segmentation {
    Segmenter::default().segment(scene).unwrap()
}

fn region_triangles(result: &Segmentation, region: Region) -> usize {
    result
        .region(region)
        .map_or(0, Geometry::triangle_count)
}

fn total_triangles(result: &Segmentation) -> usize {
    result
        .regions()
        .iter()
        .map(|(_, geometry)| geometry.triangle_count())
        .sum()
}

#[test]
fn unnamed_mesh_takes_spatial_path() {
    let mut scene = unnamed_bat();
    let result = segment(&mut scene);

    assert_eq!(result.path(), SegmentationPath::Spatial);
    assert_eq!(
        result.trace(),
        &[
            SegmentationState::Unsegmented,
            SegmentationState::SpatiallyPartitioned,
            SegmentationState::KnobSplit,
            SegmentationState::Complete,
        ]
    );
    assert_eq!(region_triangles(&result, Region::Handle), 80);
    assert_eq!(region_triangles(&result, Region::Barrel), 200);
    assert_eq!(
        region_triangles(&result, Region::Knob) + region_triangles(&result, Region::KnobFace),
        56
    );
    assert_eq!(result.reference().triangle_count(), 336);
}

#[test]
fn named_meshes_bypass_spatial_partition() {
    let mut scene = named_bat();
    let result = segment(&mut scene);

    assert_eq!(result.path(), SegmentationPath::Named);
    assert!(
        !result
            .trace()
            .contains(&SegmentationState::SpatiallyPartitioned)
    );
    assert_eq!(result.trace()[1], SegmentationState::NamedGroupsResolved);

    assert_eq!(region_triangles(&result, Region::Barrel), 112);
    // Handle tip cut at 15% of its length: one stack plus the end cap.
    assert_eq!(region_triangles(&result, Region::Handle), 120);
    assert_eq!(
        region_triangles(&result, Region::Knob) + region_triangles(&result, Region::KnobFace),
        24
    );
    assert_eq!(result.reference().triangle_count(), 256);

    let barrel = result.region(Region::Barrel).unwrap().bounding_box().unwrap();
    assert_eq!(barrel.min[0], 4.0);
    assert_eq!(barrel.max[0], 10.0);
}

#[test]
fn consumed_meshes_are_detached() {
    let mut scene = named_bat();
    segment(&mut scene);
    assert_eq!(scene.mesh_count(), 0);
    // The parent group itself was not consumed.
    assert_eq!(scene.nodes.len(), 1);

    let mut scene = unnamed_bat();
    segment(&mut scene);
    assert!(scene.nodes.is_empty());
}

#[test]
fn group_match_also_detaches_matching_leaf() {
    let mut scene = Scene::new().with_nodes(vec![
        GroupNode::new()
            .with_name("HandleGroup")
            .with_children(vec![
                MeshNode::new(generate_cylinder(0.5, 2.0, 8, 4)).into(),
                MeshNode::new(generate_cylinder(0.5, 2.0, 8, 4))
                    .with_transform(NodeTransform::IDENTITY.with_translation([2.0, 0.0, 0.0]))
                    .into(),
            ])
            .into(),
        MeshNode::new(generate_cylinder(0.5, 1.0, 8, 2))
            .with_name("handle_stray")
            .into(),
        MeshNode::new(generate_cylinder(1.0, 6.0, 8, 6))
            .with_name("barrel")
            .with_transform(NodeTransform::IDENTITY.with_translation([4.0, 0.0, 0.0]))
            .into(),
    ]);
    let result = segment(&mut scene);

    assert_eq!(result.path(), SegmentationPath::Named);
    assert_eq!(scene.mesh_count(), 0);
    assert!(scene.nodes.is_empty());
}

#[rstest]
#[case::spatial(unnamed_bat(), 336)]
#[case::named(named_bat(), 256)]
fn regions_cover_every_triangle_once(#[case] mut scene: Scene, #[case] expected: usize) {
    let result = segment(&mut scene);
    assert_eq!(total_triangles(&result), expected);
}

#[rstest]
#[case::spatial(unnamed_bat())]
#[case::named(named_bat())]
fn region_buffers_are_well_formed(#[case] mut scene: Scene) {
    let result = segment(&mut scene);
    for (region, geometry) in result.regions().iter() {
        let vertex_count = geometry.vertex_count();
        let indices = geometry.indices().expect("regions are indexed");
        assert_eq!(indices.len() % 3, 0, "{region}");
        assert!(
            indices.iter().all(|&i| (i as usize) < vertex_count),
            "{region} has out-of-range indices"
        );
        // Source has UVs, so every region keeps them.
        assert_eq!(geometry.uvs().map(<[_]>::len), Some(vertex_count), "{region}");
        assert_eq!(geometry.normals().map(<[_]>::len), Some(vertex_count), "{region}");
    }
}

#[test]
fn segmentation_is_deterministic() {
    let first = segment(&mut named_bat());
    let second = segment(&mut named_bat());
    assert_eq!(first.regions(), second.regions());
    assert_eq!(first.warnings(), second.warnings());

    let first = segment(&mut unnamed_bat());
    let second = segment(&mut unnamed_bat());
    assert_eq!(first.regions(), second.regions());
}

#[test]
fn object_bounds_cover_all_meshes() {
    let result = segment(&mut named_bat());
    let bounds = result.bounds();
    assert_eq!(bounds.min[0], 0.0);
    assert_eq!(bounds.max[0], 10.0);
    assert_eq!(bounds.center[0], 5.0);
    assert_eq!(bounds.size[0], 10.0);
}

#[test]
fn recenter_moves_object_to_origin() {
    let mut scene = Scene::new().with_nodes(vec![
        MeshNode::new(generate_cylinder(1.0, 10.0, 8, 20))
            .with_transform(NodeTransform::IDENTITY.with_translation([100.0, 50.0, 0.0]))
            .into(),
    ]);
    let segmenter = Segmenter::new(SegmentationConfig::default().with_recenter(true));
    let result = segmenter.segment(&mut scene).unwrap();

    for c in result.bounds().center {
        assert!(c.abs() < 1e-4, "center {:?}", result.bounds().center);
    }
    let knob = result.reference().bounding_box().unwrap();
    assert!((knob.min[0] + 5.0).abs() < 1e-4);
    assert_eq!(region_triangles(&result, Region::Barrel), 200);
}

#[test]
fn config_fractions_move_the_cuts() {
    let config = SegmentationConfig::from_toml_str("tip_fraction = 0.05\nmid_fraction = 0.5").unwrap();
    let result = Segmenter::new(config).segment(&mut unnamed_bat()).unwrap();

    // Stack 0 plus the min cap, stacks 1..=9, stacks 10..=19 plus the max cap.
    assert_eq!(
        region_triangles(&result, Region::Knob) + region_triangles(&result, Region::KnobFace),
        24
    );
    assert_eq!(region_triangles(&result, Region::Handle), 144);
    assert_eq!(region_triangles(&result, Region::Barrel), 168);
}

#[test]
fn empty_scene_is_rejected() {
    let err = Segmenter::default().segment(&mut Scene::new()).unwrap_err();
    assert_eq!(err, SegmentError::NoTriangles);
}

#[test]
fn triangle_free_scene_is_rejected_and_left_intact() {
    let points = Geometry::new(vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]]);
    let mut scene = Scene::new().with_nodes(vec![MeshNode::new(points).with_name("handle").into()]);

    let err = Segmenter::default().segment(&mut scene).unwrap_err();
    assert_eq!(err, SegmentError::NoTriangles);
    assert_eq!(scene.mesh_count(), 1);
}

#[test]
fn styles_tag_present_regions() {
    let mut result = segment(&mut named_bat());
    assert!(result.set_cup_style("cupped"));
    assert!(result.set_torpedo(true));
    assert!(result.set_knob_style("flared"));

    let styles = result.styles();
    assert_eq!(styles.cup_style.as_deref(), Some("cupped"));
    assert_eq!(styles.torpedo_scale, Some(batsmith_segment::TORPEDO_SCALE));
    assert_eq!(styles.knob_style.as_deref(), Some("flared"));
}

#[test]
fn single_handle_name_falls_back_to_spatial() {
    let mut scene = Scene::new().with_nodes(vec![
        MeshNode::new(generate_cylinder(1.0, 10.0, 8, 20))
            .with_name("handle")
            .into(),
    ]);
    let result = segment(&mut scene);
    assert_eq!(result.path(), SegmentationPath::Spatial);
    assert_eq!(region_triangles(&result, Region::Barrel), 200);
}
