//! Region labels, the region map and per-object metadata.

use std::fmt;
use std::str::FromStr;

use batsmith_core::mesh::{BoundingBox, Geometry};

/// An independently colorable part of the object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    /// The hitting end, the bulk of the object.
    Barrel,
    /// The grip between knob and barrel.
    Handle,
    /// Lateral surface of the end knob.
    Knob,
    /// End cap of the knob.
    KnobFace,
}

impl Region {
    /// All regions in report order.
    pub const ALL: [Region; 4] = [Region::Barrel, Region::Handle, Region::Knob, Region::KnobFace];

    /// Stable lower-camel-case name (`"knobFace"` for [`Region::KnobFace`]).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Barrel => "barrel",
            Self::Handle => "handle",
            Self::Knob => "knob",
            Self::KnobFace => "knobFace",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Error returned when parsing an unknown region name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown region `{0}`")]
pub struct UnknownRegion(pub String);

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|region| region.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownRegion(s.to_owned()))
    }
}

/// Region geometries. A missing region is `None`, not an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionMap {
    barrel: Option<Geometry>,
    handle: Option<Geometry>,
    knob: Option<Geometry>,
    knob_face: Option<Geometry>,
}

impl RegionMap {
    /// Geometry of `region`, if present.
    pub fn get(&self, region: Region) -> Option<&Geometry> {
        self.slot(region).as_ref()
    }

    /// Check if `region` is present.
    pub fn contains(&self, region: Region) -> bool {
        self.get(region).is_some()
    }

    /// Present regions in [`Region::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Region, &Geometry)> {
        Region::ALL
            .into_iter()
            .filter_map(|region| self.get(region).map(|geometry| (region, geometry)))
    }

    /// Number of present regions.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Check if no region is present.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn set(&mut self, region: Region, geometry: Option<Geometry>) {
        *self.slot_mut(region) = geometry;
    }

    fn slot(&self, region: Region) -> &Option<Geometry> {
        match region {
            Region::Barrel => &self.barrel,
            Region::Handle => &self.handle,
            Region::Knob => &self.knob,
            Region::KnobFace => &self.knob_face,
        }
    }

    fn slot_mut(&mut self, region: Region) -> &mut Option<Geometry> {
        match region {
            Region::Barrel => &mut self.barrel,
            Region::Handle => &mut self.handle,
            Region::Knob => &mut self.knob,
            Region::KnobFace => &mut self.knob_face,
        }
    }
}

/// Aggregate bounds of the segmented object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectBounds {
    /// Minimum corner.
    pub min: [f32; 3],
    /// Maximum corner.
    pub max: [f32; 3],
    /// Box center.
    pub center: [f32; 3],
    /// Box extent along every axis.
    pub size: [f32; 3],
}

impl From<BoundingBox> for ObjectBounds {
    fn from(bounds: BoundingBox) -> Self {
        Self {
            min: bounds.min,
            max: bounds.max,
            center: bounds.center(),
            size: bounds.size(),
        }
    }
}

/// Scale tag for a barrel with the torpedo profile.
pub const TORPEDO_SCALE: f32 = 1.05;

/// Scale tag for a barrel with the standard profile.
pub const STANDARD_SCALE: f32 = 1.0;

/// Presentation metadata. Never affects geometry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionStyles {
    /// Barrel end cup style.
    pub cup_style: Option<String>,
    /// Barrel profile scale tag ([`TORPEDO_SCALE`] or [`STANDARD_SCALE`]).
    pub torpedo_scale: Option<f32>,
    /// Knob style.
    pub knob_style: Option<String>,
}
