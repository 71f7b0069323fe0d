//! Human-readable segmentation report.

use std::fmt;

use batsmith_segment::{Region, Segmentation};

/// Display adapter printing one line per region plus a summary.
pub struct Report<'a>(pub &'a Segmentation);

fn fmt_vec3(v: [f32; 3]) -> String {
    format!("({:.3}, {:.3}, {:.3})", v[0], v[1], v[2])
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        writeln!(f, "path: {}", result.path())?;

        let bounds = result.bounds();
        writeln!(
            f,
            "object: min {} max {} size {}",
            fmt_vec3(bounds.min),
            fmt_vec3(bounds.max),
            fmt_vec3(bounds.size)
        )?;

        for region in Region::ALL {
            match result.region(region) {
                Some(geometry) => {
                    let (min, max) = geometry
                        .bounding_box()
                        .map_or(([0.0; 3], [0.0; 3]), |b| (b.min, b.max));
                    writeln!(
                        f,
                        "{region:>9}: {:>7} vertices {:>7} triangles  {} .. {}",
                        geometry.vertex_count(),
                        geometry.triangle_count(),
                        fmt_vec3(min),
                        fmt_vec3(max)
                    )?;
                }
                None => writeln!(f, "{region:>9}: absent")?,
            }
        }

        let styles = result.styles();
        if let Some(style) = &styles.cup_style {
            writeln!(f, "cup style: {style}")?;
        }
        if let Some(scale) = styles.torpedo_scale {
            writeln!(f, "torpedo scale: {scale}")?;
        }
        if let Some(style) = &styles.knob_style {
            writeln!(f, "knob style: {style}")?;
        }

        for warning in result.warnings() {
            writeln!(f, "warning: {warning}")?;
        }
        Ok(())
    }
}
