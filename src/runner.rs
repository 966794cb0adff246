use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use glam::DVec3;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::{Operation, OutputFormat, RunConfig};
use crate::error::{GeoFrameError, Result};
use crate::math::Matrix4;
use crate::transform::{
    self, build_ecef_to_enu, build_enu_to_ecef, ecef_to_geodetic, geodetic_to_ecef,
};
use crate::types::{Ecef, GeoCoordinate};

/// What a completed operation produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CommandOutput {
    Ecef(Ecef),
    Geodetic(GeoCoordinate),
    Matrix(Matrix4),
    Local(DVec3),
    Batch(BatchOutput),
}

/// Result of a batch conversion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchOutput {
    pub count: usize,
    /// Set when results went to a file instead of stdout.
    pub written_to: Option<PathBuf>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub coordinates: Vec<GeoCoordinate>,
}

/// Summary of a completed run.
#[derive(Debug)]
pub struct RunResult {
    pub output: CommandOutput,
    pub duration: Duration,
}

/// Runner -- resolves one [`Operation`] against the transform core.
pub struct Runner;

impl Runner {
    pub fn run(config: &RunConfig) -> Result<RunResult> {
        let start = Instant::now();
        let operation = &config.operation;

        info!(operation = operation.name(), "Starting conversion");

        if config.strict {
            for coord in operation.coordinates() {
                coord.validate()?;
            }
            debug!("Strict validation passed");
        }

        let output = match operation {
            Operation::ToEcef(coord) => CommandOutput::Ecef(geodetic_to_ecef(coord)),
            Operation::ToGeodetic(ecef) => CommandOutput::Geodetic(ecef_to_geodetic(ecef)),
            Operation::Enu { origin, inverse } => {
                let m = if *inverse {
                    build_enu_to_ecef(origin)
                } else {
                    build_ecef_to_enu(origin)
                };
                CommandOutput::Matrix(m)
            }
            Operation::ToLocal { coord, origin } => {
                CommandOutput::Local(transform::geodetic_to_local_point(coord, origin))
            }
            Operation::FromLocal { local, origin } => {
                CommandOutput::Geodetic(transform::local_point_to_geodetic(*local, origin))
            }
            Operation::Batch {
                input,
                output,
                origin,
            } => CommandOutput::Batch(Self::batch(input, output.as_deref(), origin)?),
        };

        let duration = start.elapsed();
        info!(operation = operation.name(), elapsed = ?duration, "Conversion complete");

        Ok(RunResult { output, duration })
    }

    fn batch(input: &Path, output: Option<&Path>, origin: &GeoCoordinate) -> Result<BatchOutput> {
        let points = read_points(input)?;
        info!(points = points.len(), origin = %origin, "Converting batch");

        let coordinates = transform::local_points_to_geodetic(&points, origin);
        let count = coordinates.len();

        match output {
            Some(path) => {
                let json = serde_json::to_string_pretty(&coordinates)?;
                fs::write(path, json).map_err(|e| {
                    GeoFrameError::Output(format!("Failed to write {}: {e}", path.display()))
                })?;
                info!(path = %path.display(), count, "Wrote batch output");
                Ok(BatchOutput {
                    count,
                    written_to: Some(path.to_path_buf()),
                    coordinates: Vec::new(),
                })
            }
            None => Ok(BatchOutput {
                count,
                written_to: None,
                coordinates,
            }),
        }
    }
}

/// Read a JSON array of `[x, y, z]` engine-space points.
pub fn read_points(path: &Path) -> Result<Vec<DVec3>> {
    let content = fs::read_to_string(path).map_err(|e| {
        GeoFrameError::Input(format!("Failed to read {}: {e}", path.display()))
    })?;
    let points: Vec<DVec3> = serde_json::from_str(&content).map_err(|e| {
        GeoFrameError::Input(format!("Failed to parse {}: {e}", path.display()))
    })?;
    debug!(path = %path.display(), count = points.len(), "Read points");
    Ok(points)
}

/// Render an output for stdout.
pub fn render(output: &CommandOutput, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(output)?),
        OutputFormat::Text => Ok(render_text(output)),
    }
}

fn render_text(output: &CommandOutput) -> String {
    match output {
        CommandOutput::Ecef(e) => format!("ECEF: {e}"),
        CommandOutput::Geodetic(c) => format!("Geodetic: {c}"),
        CommandOutput::Matrix(m) => m.to_string(),
        CommandOutput::Local(p) => format!("Local (E, U, N): ({:.4}, {:.4}, {:.4})", p.x, p.y, p.z),
        CommandOutput::Batch(batch) => match &batch.written_to {
            Some(path) => format!("Converted {} points -> {}", batch.count, path.display()),
            None => std::iter::once(format!("Converted {} points", batch.count))
                .chain(batch.coordinates.iter().map(|c| format!("  {c}")))
                .collect::<Vec<_>>()
                .join("\n"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::ecef::WGS84_A;

    #[test]
    fn run_to_ecef() {
        let config = RunConfig::new(Operation::ToEcef(GeoCoordinate::new(0.0, 0.0, 0.0)));
        let result = Runner::run(&config).unwrap();
        assert_eq!(result.output, CommandOutput::Ecef(Ecef::new(WGS84_A, 0.0, 0.0)));
    }

    #[test]
    fn run_enu_inverse_is_inverse() {
        let origin = GeoCoordinate::new(12.0, 34.0, 56.0);
        let fwd = Runner::run(&RunConfig::new(Operation::Enu {
            origin,
            inverse: false,
        }))
        .unwrap();
        let inv = Runner::run(&RunConfig::new(Operation::Enu {
            origin,
            inverse: true,
        }))
        .unwrap();
        match (fwd.output, inv.output) {
            (CommandOutput::Matrix(a), CommandOutput::Matrix(b)) => {
                assert!((a * b).abs_diff_eq(&Matrix4::IDENTITY, 1e-6));
            }
            other => panic!("unexpected outputs {other:?}"),
        }
    }

    #[test]
    fn strict_rejects_bad_origin() {
        let mut config = RunConfig::new(Operation::FromLocal {
            local: DVec3::ZERO,
            origin: GeoCoordinate::new(95.0, 0.0, 0.0),
        });
        assert!(Runner::run(&config).is_ok());

        config.strict = true;
        let err = Runner::run(&config).unwrap_err();
        assert!(matches!(err, GeoFrameError::InvalidCoordinate(_)));
    }

    #[test]
    fn render_text_outputs() {
        let s = render(&CommandOutput::Ecef(Ecef::new(1.0, 2.0, 3.0)), OutputFormat::Text).unwrap();
        assert_eq!(s, "ECEF: (1.0000, 2.0000, 3.0000)");

        let s = render(&CommandOutput::Local(DVec3::new(1.0, -2.0, 3.5)), OutputFormat::Text)
            .unwrap();
        assert_eq!(s, "Local (E, U, N): (1.0000, -2.0000, 3.5000)");

        let s = render(&CommandOutput::Matrix(Matrix4::IDENTITY), OutputFormat::Text).unwrap();
        assert_eq!(s.lines().count(), 4);
    }

    #[test]
    fn render_json_outputs() {
        let s = render(
            &CommandOutput::Geodetic(GeoCoordinate::new(1.0, 2.0, 3.0)),
            OutputFormat::Json,
        )
        .unwrap();
        let v: serde_json::Value = serde_json::from_str(&s).unwrap();
        assert_eq!(v["latitude"], 1.0);

        let s = render(&CommandOutput::Local(DVec3::new(1.0, 2.0, 3.0)), OutputFormat::Json)
            .unwrap();
        let v: serde_json::Value = serde_json::from_str(&s).unwrap();
        assert_eq!(v, serde_json::json!([1.0, 2.0, 3.0]));
    }

    #[test]
    fn render_batch_written_to_file() {
        let output = CommandOutput::Batch(BatchOutput {
            count: 4,
            written_to: Some(PathBuf::from("out.json")),
            coordinates: Vec::new(),
        });
        let s = render(&output, OutputFormat::Text).unwrap();
        assert_eq!(s, "Converted 4 points -> out.json");
    }

    #[test]
    fn read_points_reports_parse_failure_with_path() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("points.json");
        fs::write(&path, r#"{"x": 1}"#).unwrap();
        let err = read_points(&path).unwrap_err();
        assert!(matches!(err, GeoFrameError::Input(_)));
        assert!(err.to_string().contains("points.json"));
    }

    #[test]
    fn render_batch_text() {
        let output = CommandOutput::Batch(BatchOutput {
            count: 2,
            written_to: None,
            coordinates: vec![GeoCoordinate::default(), GeoCoordinate::new(1.0, 1.0, 1.0)],
        });
        let s = render(&output, OutputFormat::Text).unwrap();
        assert!(s.starts_with("Converted 2 points"));
        assert_eq!(s.lines().count(), 3);
    }
}
