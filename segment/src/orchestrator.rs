//! The segmentation pipeline.
//!
//! [`Segmenter::segment`] runs one pass over a loaded scene:
//!
//! 1. Flatten the scene into world-space leaves ([`SceneInventory`]).
//! 2. Try the named path: handle and barrel found by node name, knob cut
//!    from the handle's tip.
//! 3. Otherwise partition the (merged) unnamed geometry into knob, handle
//!    and barrel along the dominant axis.
//! 4. Split the knob into face and body when a knob exists.
//! 5. Detach the consumed source nodes from the scene.
//!
//! ```text
//! Unsegmented -> NamedGroupsResolved  --+--> KnobSplit --> Complete
//!             \-> SpatiallyPartitioned -/ \-------------/
//! ```

use std::fmt;

use batsmith_core::mesh::{Axis, Geometry, extract_region, merge_geometries};
use batsmith_core::scene::{NodePath, Scene};

use crate::axis::select_axis;
use crate::config::SegmentationConfig;
use crate::error::SegmentError;
use crate::face::{FaceSplit, split_face_body};
use crate::inventory::SceneInventory;
use crate::named::{NamedMatch, resolve_by_name};
use crate::partition::{TriangleBuckets, partition, split_at};
use crate::region::{
    ObjectBounds, Region, RegionMap, RegionStyles, STANDARD_SCALE, TORPEDO_SCALE,
};

/// Pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentationState {
    /// Nothing has run yet.
    Unsegmented,
    /// Handle and barrel came from node names.
    NamedGroupsResolved,
    /// Regions came from the dominant-axis partition.
    SpatiallyPartitioned,
    /// The knob was examined for a face split.
    KnobSplit,
    /// Source nodes were detached and regions are final.
    Complete,
}

/// Which path produced the base regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentationPath {
    /// Handle and barrel resolved by node name.
    Named,
    /// Dominant-axis partition of unnamed geometry.
    Spatial,
}

impl fmt::Display for SegmentationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named => f.write_str("named"),
            Self::Spatial => f.write_str("spatial"),
        }
    }
}

/// Advisory conditions met during a run. They never change control flow.
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentWarning {
    /// The geometry has no extent along its dominant axis.
    DegenerateAxis {
        /// The selected axis.
        axis: Axis,
    },
    /// A spatial zone received no triangles.
    EmptyRegion(Region),
    /// Every spatial zone was empty; the whole source became the barrel.
    AllRegionsEmpty,
    /// The handle's tip zone was empty, so no knob was cut from it.
    NoKnobInHandle,
    /// Every handle triangle fell in the tip zone; the handle became the knob.
    HandleConsumedByKnob,
    /// The knob has no index buffer and was not split.
    KnobNotIndexed,
    /// Every knob triangle was face; the knob keeps its full geometry.
    KnobBodyEmpty,
}

impl fmt::Display for SegmentWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateAxis { axis } => {
                write!(f, "geometry has zero extent along dominant axis {axis}")
            }
            Self::EmptyRegion(region) => write!(f, "no triangles fell into the {region} zone"),
            Self::AllRegionsEmpty => f.write_str("all zones empty, using whole source as barrel"),
            Self::NoKnobInHandle => f.write_str("handle tip zone is empty, no knob extracted"),
            Self::HandleConsumedByKnob => f.write_str("whole handle fell into the knob zone"),
            Self::KnobNotIndexed => f.write_str("knob geometry has no index, cannot split face"),
            Self::KnobBodyEmpty => f.write_str("knob is all face, keeping knob geometry"),
        }
    }
}

/// Result of one segmentation run.
#[derive(Debug, Clone)]
pub struct Segmentation {
    regions: RegionMap,
    bounds: ObjectBounds,
    reference: Geometry,
    path: SegmentationPath,
    trace: Vec<SegmentationState>,
    warnings: Vec<SegmentWarning>,
    styles: RegionStyles,
}

impl Segmentation {
    /// Region geometries.
    pub fn regions(&self) -> &RegionMap {
        &self.regions
    }

    /// Geometry of one region, if present.
    pub fn region(&self, region: Region) -> Option<&Geometry> {
        self.regions.get(region)
    }

    /// Consume the result, keeping only the region map.
    pub fn into_regions(self) -> RegionMap {
        self.regions
    }

    /// Bounds of the whole object.
    pub fn bounds(&self) -> &ObjectBounds {
        &self.bounds
    }

    /// Whole-object reference geometry.
    pub fn reference(&self) -> &Geometry {
        &self.reference
    }

    /// Path that produced the base regions.
    pub fn path(&self) -> SegmentationPath {
        self.path
    }

    /// States visited, from [`SegmentationState::Unsegmented`] to
    /// [`SegmentationState::Complete`].
    pub fn trace(&self) -> &[SegmentationState] {
        &self.trace
    }

    /// Advisory warnings collected during the run.
    pub fn warnings(&self) -> &[SegmentWarning] {
        &self.warnings
    }

    /// Presentation metadata.
    pub fn styles(&self) -> &RegionStyles {
        &self.styles
    }

    /// Tag the barrel with a cup style. Returns `false` without a barrel.
    pub fn set_cup_style(&mut self, style: impl Into<String>) -> bool {
        if !self.style_target(Region::Barrel) {
            return false;
        }
        self.styles.cup_style = Some(style.into());
        true
    }

    /// Tag the barrel profile. Returns `false` without a barrel.
    pub fn set_torpedo(&mut self, enabled: bool) -> bool {
        if !self.style_target(Region::Barrel) {
            return false;
        }
        self.styles.torpedo_scale = Some(if enabled {
            TORPEDO_SCALE
        } else {
            STANDARD_SCALE
        });
        true
    }

    /// Tag the knob with a style. Returns `false` without a knob.
    pub fn set_knob_style(&mut self, style: impl Into<String>) -> bool {
        if !self.style_target(Region::Knob) {
            return false;
        }
        self.styles.knob_style = Some(style.into());
        true
    }

    fn style_target(&self, region: Region) -> bool {
        let present = self.regions.contains(region);
        if !present {
            log::warn!("No geometry found for region: {region}");
        }
        present
    }
}

/// Runs the segmentation pipeline with a fixed configuration.
///
/// Holds no state between runs, so one instance can be shared across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    config: SegmentationConfig,
}

impl Segmenter {
    /// Create a segmenter. The config is expected to be validated.
    pub fn new(config: SegmentationConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SegmentationConfig {
        &self.config
    }

    /// Segment `scene` into regions and detach the consumed source nodes.
    ///
    /// Fails only when the scene holds no triangles. On failure the scene is
    /// left untouched.
    pub fn segment(&self, scene: &mut Scene) -> Result<Segmentation, SegmentError> {
        let mut run = Run::new();
        let inventory = SceneInventory::collect(scene, self.config.recenter);
        log::info!(
            "Segmenting {} meshes ({} groups), {} triangles",
            inventory.leaves.len(),
            inventory.groups.len(),
            inventory.triangle_count()
        );
        if inventory.triangle_count() == 0 {
            return Err(SegmentError::NoTriangles);
        }
        let bounds = inventory.bounds.ok_or(SegmentError::NoTriangles)?;

        let named = resolve_by_name(&inventory, &self.config)?;
        let (mut regions, reference, consumed, path) =
            if let (Some(handle), Some(barrel)) = (named.handle, named.barrel) {
                run.advance(SegmentationState::NamedGroupsResolved);
                let (regions, reference, consumed) = self.named_regions(handle, barrel, &mut run)?;
                (regions, reference, consumed, SegmentationPath::Named)
            } else {
                run.advance(SegmentationState::SpatiallyPartitioned);
                let source = merge_geometries(
                    &inventory
                        .leaves
                        .iter()
                        .map(|leaf| leaf.geometry.clone())
                        .collect::<Vec<_>>(),
                )?;
                if inventory.leaves.len() > 1 {
                    log::info!("Merged {} unnamed meshes into one source", inventory.leaves.len());
                }
                let regions = self.spatial_regions(&source, &mut run);
                let consumed: Vec<NodePath> =
                    inventory.leaves.iter().map(|leaf| leaf.path.clone()).collect();
                (regions, source, consumed, SegmentationPath::Spatial)
            };

        if regions.contains(Region::Knob) {
            run.advance(SegmentationState::KnobSplit);
            self.split_knob(&mut regions, &mut run);
        }

        let detached = scene.detach(&consumed);
        run.advance(SegmentationState::Complete);
        log::info!("Segmentation complete via {path} path, detached {} nodes", detached.len());
        for (region, geometry) in regions.iter() {
            log::info!(
                "  {region}: {} vertices, {} triangles",
                geometry.vertex_count(),
                geometry.triangle_count()
            );
        }

        Ok(Segmentation {
            regions,
            bounds: ObjectBounds::from(bounds),
            reference,
            path,
            trace: run.trace,
            warnings: run.warnings,
            styles: RegionStyles::default(),
        })
    }

    fn named_regions(
        &self,
        handle: NamedMatch,
        barrel: NamedMatch,
        run: &mut Run,
    ) -> Result<(RegionMap, Geometry, Vec<NodePath>), SegmentError> {
        log::info!(
            "Found handle ({} vertices) and barrel ({} vertices) by name",
            handle.geometry.vertex_count(),
            barrel.geometry.vertex_count()
        );
        let reference = merge_geometries(&[handle.geometry.clone(), barrel.geometry.clone()])?;
        let consumed = [handle.consumed, barrel.consumed].concat();

        let mut regions = RegionMap::default();
        regions.set(Region::Barrel, Some(barrel.geometry));
        let (handle, knob) = self.knob_from_handle(handle.geometry, run);
        regions.set(Region::Handle, handle);
        regions.set(Region::Knob, knob);
        Ok((regions, reference, consumed))
    }

    /// Cut the knob off the handle's minimum end. Returns `(handle, knob)`.
    fn knob_from_handle(
        &self,
        handle: Geometry,
        run: &mut Run,
    ) -> (Option<Geometry>, Option<Geometry>) {
        let Some(bounds) = handle.bounding_box() else {
            return (Some(handle), None);
        };
        let selection = select_axis(&bounds);
        let cut = selection.min + selection.range * self.config.tip_fraction;
        let (tip, rest) = split_at(&handle, selection.axis, cut);
        log::debug!(
            "Handle tip cut at {cut} along {}: {} knob / {} handle triangles",
            selection.axis,
            tip.len() / 3,
            rest.len() / 3
        );

        let Some(knob) = extract_region(&handle, &tip) else {
            run.warn(SegmentWarning::NoKnobInHandle);
            return (Some(handle), None);
        };
        let remainder = extract_region(&handle, &rest);
        if remainder.is_none() {
            run.warn(SegmentWarning::HandleConsumedByKnob);
        }
        (remainder, Some(knob))
    }

    fn spatial_regions(&self, source: &Geometry, run: &mut Run) -> RegionMap {
        let mut regions = RegionMap::default();
        let Some(bounds) = source.bounding_box() else {
            return regions;
        };
        let selection = select_axis(&bounds);
        if selection.range <= 0.0 {
            run.warn(SegmentWarning::DegenerateAxis {
                axis: selection.axis,
            });
        }
        let thresholds = selection.thresholds(self.config.tip_fraction, self.config.mid_fraction);
        log::info!(
            "Splitting along {} (range {}): tip <= {}, mid <= {}",
            selection.axis,
            selection.range,
            thresholds.tip_end,
            thresholds.mid_end
        );

        let buckets = partition(source, selection.axis, thresholds);
        let (tip, mid, base) = buckets.triangle_counts();
        log::debug!("Bucket sizes: knob {tip}, handle {mid}, barrel {base}");
        assign_spatial_regions(source, &buckets, &mut regions, run);
        regions
    }

    fn split_knob(&self, regions: &mut RegionMap, run: &mut Run) {
        let Some(knob) = regions.get(Region::Knob) else {
            return;
        };
        match split_face_body(knob, self.config.face_fraction, self.config.face_normal_cutoff) {
            FaceSplit::NotIndexed => run.warn(SegmentWarning::KnobNotIndexed),
            FaceSplit::NoFace => log::debug!("Knob has no face triangles, left whole"),
            FaceSplit::Split { face, body } => {
                log::debug!("Knob face: {} triangles", face.triangle_count());
                regions.set(Region::KnobFace, Some(face));
                match body {
                    Some(body) => regions.set(Region::Knob, Some(body)),
                    None => run.warn(SegmentWarning::KnobBodyEmpty),
                }
            }
        }
    }
}

/// Extract each bucket into its region, falling back to the whole source as
/// barrel when every bucket is empty.
fn assign_spatial_regions(
    source: &Geometry,
    buckets: &TriangleBuckets,
    regions: &mut RegionMap,
    run: &mut Run,
) {
    for (region, bucket) in [
        (Region::Knob, &buckets.tip),
        (Region::Handle, &buckets.mid),
        (Region::Barrel, &buckets.base),
    ] {
        let geometry = extract_region(source, bucket);
        if geometry.is_none() {
            run.warn(SegmentWarning::EmptyRegion(region));
        }
        regions.set(region, geometry);
    }

    if regions.is_empty() {
        run.warn(SegmentWarning::AllRegionsEmpty);
        regions.set(Region::Barrel, Some(source.clone()));
    }
}

/// Per-run bookkeeping: visited states and collected warnings.
struct Run {
    trace: Vec<SegmentationState>,
    warnings: Vec<SegmentWarning>,
}

impl Run {
    fn new() -> Self {
        Self {
            trace: vec![SegmentationState::Unsegmented],
            warnings: Vec::new(),
        }
    }

    fn advance(&mut self, next: SegmentationState) {
        log::debug!("Segmentation state -> {next:?}");
        self.trace.push(next);
    }

    fn warn(&mut self, warning: SegmentWarning) {
        log::warn!("{warning}");
        self.warnings.push(warning);
    }
}
