//! Load, segment, style: one CLI run.

use std::path::Path;

use batsmith_core::scene::Scene;
use batsmith_segment::{Segmentation, SegmentationConfig, Segmenter};

use crate::args::CliArgs;
use crate::error::AppError;

/// Supported model file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    /// Wavefront OBJ text.
    Obj,
    /// glTF 2.0, JSON or binary.
    Gltf,
}

impl ModelFormat {
    /// Guess the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "obj" => Some(Self::Obj),
            "gltf" | "glb" => Some(Self::Gltf),
            _ => None,
        }
    }
}

/// Parse model bytes in the given format.
pub fn parse_model(format: ModelFormat, data: &[u8]) -> Result<Scene, AppError> {
    let scene = match format {
        ModelFormat::Obj => batsmith_core::obj::load_obj(data)?,
        ModelFormat::Gltf => batsmith_core::gltf::load_gltf(data)?,
    };
    Ok(scene)
}

/// Read and parse the model at `path`.
pub fn load_model(path: &Path) -> Result<Scene, AppError> {
    let format =
        ModelFormat::from_path(path).ok_or_else(|| AppError::UnsupportedFormat(path.into()))?;
    let data = std::fs::read(path).map_err(|source| AppError::Read {
        path: path.into(),
        source,
    })?;
    log::info!("Loading {} ({} bytes) as {format:?}", path.display(), data.len());
    parse_model(format, &data)
}

/// Resolve the segmentation config from the CLI flags.
pub fn load_config(args: &CliArgs) -> Result<SegmentationConfig, AppError> {
    let config = match &args.config {
        Some(path) => SegmentationConfig::load(path)?,
        None => SegmentationConfig::default(),
    };
    Ok(if args.recenter {
        config.with_recenter(true)
    } else {
        config
    })
}

/// Segment `scene` and apply the style flags.
pub fn segment_scene(
    args: &CliArgs,
    config: SegmentationConfig,
    scene: &mut Scene,
) -> Result<Segmentation, AppError> {
    let mut result = Segmenter::new(config).segment(scene)?;
    if args.torpedo {
        result.set_torpedo(true);
    }
    if let Some(style) = &args.cup_style {
        result.set_cup_style(style.clone());
    }
    if let Some(style) = &args.knob_style {
        result.set_knob_style(style.clone());
    }
    Ok(result)
}

/// Full CLI run: config, model, segmentation.
pub fn run(args: &CliArgs) -> Result<Segmentation, AppError> {
    let config = load_config(args)?;
    let mut scene = load_model(&args.model)?;
    segment_scene(args, config, &mut scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use batsmith_segment::Region;
    use clap::Parser;
    use rstest::rstest;

    #[rstest]
    #[case("bat.obj", Some(ModelFormat::Obj))]
    #[case("BAT.OBJ", Some(ModelFormat::Obj))]
    #[case("models/bat.gltf", Some(ModelFormat::Gltf))]
    #[case("bat.glb", Some(ModelFormat::Gltf))]
    #[case("bat.fbx", None)]
    #[case("bat", None)]
    fn test_format_from_extension(#[case] path: &str, #[case] expected: Option<ModelFormat>) {
        assert_eq!(ModelFormat::from_path(Path::new(path)), expected);
    }

    #[test]
    fn test_unsupported_format_is_reported_before_reading() {
        let err = load_model(Path::new("does/not/exist.fbx")).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = load_model(Path::new("does/not/exist.obj")).unwrap_err();
        assert!(matches!(err, AppError::Read { .. }));
    }

    #[test]
    fn test_segment_obj_with_styles() {
        let obj = "\
o handle
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
f 1 2 3
f 1 3 4
o barrel
v 1 0 0
v 4 0 0
v 4 1 0
v 1 1 0
f 5 6 7
f 5 7 8
";
        let args =
            CliArgs::try_parse_from(["batsmith", "bat.obj", "--torpedo", "--knob-style", "x"])
                .unwrap();
        let mut scene = parse_model(ModelFormat::Obj, obj.as_bytes()).unwrap();
        let result = segment_scene(&args, load_config(&args).unwrap(), &mut scene).unwrap();

        assert!(result.region(Region::Barrel).is_some());
        assert_eq!(result.styles().torpedo_scale, Some(batsmith_segment::TORPEDO_SCALE));
        assert!(result.styles().cup_style.is_none());
    }
}
