//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Split a bat model into barrel, handle, knob and knob face regions.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "batsmith",
    about = "Segment a bat model into colorable regions",
    long_about = "Loads an OBJ or glTF model, splits it into barrel, handle, knob and \
        knob face regions and prints a per-region report.\n\n\
        Nodes whose names contain \"handle\" and \"barrel\" are used directly. \
        Otherwise the model is cut along its longest axis.\n\n\
        EXAMPLES:\n  \
          batsmith bat.glb\n  \
          batsmith bat.obj --config tuning.toml --recenter\n  \
          batsmith bat.gltf --torpedo --cup-style cupped",
    version
)]
pub struct CliArgs {
    /// Model file (.obj, .gltf or .glb).
    #[arg(value_name = "MODEL")]
    pub model: PathBuf,

    /// TOML file with segmentation tuning.
    #[arg(long, value_name = "TOML")]
    pub config: Option<PathBuf>,

    /// Center the object's bounding box on the origin before segmenting.
    #[arg(long)]
    pub recenter: bool,

    /// Tag the barrel with the torpedo profile.
    #[arg(long)]
    pub torpedo: bool,

    /// Cup style tag for the barrel end.
    #[arg(long, value_name = "STYLE")]
    pub cup_style: Option<String>,

    /// Style tag for the knob.
    #[arg(long, value_name = "STYLE")]
    pub knob_style: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let args = CliArgs::try_parse_from(["batsmith", "bat.obj"]).unwrap();
        assert_eq!(args.model, PathBuf::from("bat.obj"));
        assert!(args.config.is_none());
        assert!(!args.recenter);
        assert!(!args.torpedo);
    }

    #[test]
    fn test_parse_all_options() {
        let args = CliArgs::try_parse_from([
            "batsmith",
            "bat.glb",
            "--config",
            "tuning.toml",
            "--recenter",
            "--torpedo",
            "--cup-style",
            "cupped",
            "--knob-style",
            "flared",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("tuning.toml")));
        assert!(args.recenter);
        assert!(args.torpedo);
        assert_eq!(args.cup_style.as_deref(), Some("cupped"));
        assert_eq!(args.knob_style.as_deref(), Some("flared"));
    }

    #[test]
    fn test_model_is_required() {
        assert!(CliArgs::try_parse_from(["batsmith"]).is_err());
    }
}
