use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use glam::DVec3;

use crate::types::{Ecef, GeoCoordinate};

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// A single resolved conversion request.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    ToEcef(GeoCoordinate),
    ToGeodetic(Ecef),
    Enu {
        origin: GeoCoordinate,
        inverse: bool,
    },
    ToLocal {
        coord: GeoCoordinate,
        origin: GeoCoordinate,
    },
    FromLocal {
        local: DVec3,
        origin: GeoCoordinate,
    },
    Batch {
        input: PathBuf,
        output: Option<PathBuf>,
        origin: GeoCoordinate,
    },
}

impl Operation {
    /// Every geodetic coordinate supplied by the caller.
    pub fn coordinates(&self) -> Vec<GeoCoordinate> {
        match self {
            Operation::ToEcef(c) => vec![*c],
            Operation::ToGeodetic(_) => vec![],
            Operation::Enu { origin, .. }
            | Operation::FromLocal { origin, .. }
            | Operation::Batch { origin, .. } => vec![*origin],
            Operation::ToLocal { coord, origin } => vec![*coord, *origin],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::ToEcef(_) => "to-ecef",
            Operation::ToGeodetic(_) => "to-geodetic",
            Operation::Enu { .. } => "enu",
            Operation::ToLocal { .. } => "to-local",
            Operation::FromLocal { .. } => "from-local",
            Operation::Batch { .. } => "batch",
        }
    }
}

/// Fully resolved run configuration (constructed from CLI args).
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub operation: Operation,
    pub format: OutputFormat,
    pub strict: bool,
    pub verbose: bool,
    pub threads: Option<usize>,
}

impl RunConfig {
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            format: OutputFormat::default(),
            strict: false,
            verbose: false,
            threads: None,
        }
    }
}

/// Geodetic position arguments.
#[derive(Args, Debug, Clone)]
pub struct CoordArgs {
    /// Latitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,

    /// Altitude above the WGS84 ellipsoid in metres
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub alt: f64,
}

impl From<CoordArgs> for GeoCoordinate {
    fn from(args: CoordArgs) -> Self {
        GeoCoordinate::new(args.lat, args.lon, args.alt)
    }
}

/// Origin of the local frame.
#[derive(Args, Debug, Clone)]
pub struct OriginArgs {
    /// Origin latitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub origin_lat: f64,

    /// Origin longitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub origin_lon: f64,

    /// Origin altitude in metres
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub origin_alt: f64,
}

impl From<OriginArgs> for GeoCoordinate {
    fn from(args: OriginArgs) -> Self {
        GeoCoordinate::new(args.origin_lat, args.origin_lon, args.origin_alt)
    }
}

/// Cartesian triple arguments.
#[derive(Args, Debug, Clone)]
pub struct XyzArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub x: f64,

    #[arg(long, allow_negative_numbers = true)]
    pub y: f64,

    #[arg(long, allow_negative_numbers = true)]
    pub z: f64,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Geodetic to ECEF
    ToEcef(CoordArgs),

    /// ECEF (metres) to geodetic
    ToGeodetic(XyzArgs),

    /// Print the ECEF→ENU transform for an origin
    Enu {
        #[command(flatten)]
        coord: CoordArgs,

        /// Print the ENU→ECEF transform instead
        #[arg(long)]
        inverse: bool,
    },

    /// Geodetic to engine space (East-Up-North) relative to an origin
    ToLocal {
        #[command(flatten)]
        coord: CoordArgs,

        #[command(flatten)]
        origin: OriginArgs,
    },

    /// Engine space (East-Up-North) relative to an origin to geodetic
    FromLocal {
        #[command(flatten)]
        local: XyzArgs,

        #[command(flatten)]
        origin: OriginArgs,
    },

    /// Convert a JSON array of `[x, y, z]` engine points to geodetic
    Batch {
        /// Input JSON file
        #[arg(short = 'i', long)]
        input: PathBuf,

        /// Output JSON file (default: stdout)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        origin: OriginArgs,
    },
}

/// CLI argument definition (clap derive).
#[derive(Parser, Debug)]
#[command(
    name = "geoframe",
    about = "WGS84 geodetic, ECEF and local East-North-Up conversions",
    version
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Output format: text or json
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Reject out-of-range or non-finite coordinates before converting
    #[arg(long, global = true)]
    pub strict: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Worker thread count for batch conversion (default: all cores)
    #[arg(short = 'j', long, global = true)]
    pub threads: Option<usize>,
}

impl From<Command> for Operation {
    fn from(command: Command) -> Self {
        match command {
            Command::ToEcef(coord) => Operation::ToEcef(coord.into()),
            Command::ToGeodetic(xyz) => Operation::ToGeodetic(Ecef::new(xyz.x, xyz.y, xyz.z)),
            Command::Enu { coord, inverse } => Operation::Enu {
                origin: coord.into(),
                inverse,
            },
            Command::ToLocal { coord, origin } => Operation::ToLocal {
                coord: coord.into(),
                origin: origin.into(),
            },
            Command::FromLocal { local, origin } => Operation::FromLocal {
                local: DVec3::new(local.x, local.y, local.z),
                origin: origin.into(),
            },
            Command::Batch {
                input,
                output,
                origin,
            } => Operation::Batch {
                input,
                output,
                origin: origin.into(),
            },
        }
    }
}

impl From<CliArgs> for RunConfig {
    fn from(args: CliArgs) -> Self {
        RunConfig {
            operation: args.command.into(),
            format: args.format,
            strict: args.strict,
            verbose: args.verbose,
            threads: args.threads,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_display() {
        assert_eq!(OutputFormat::Text.to_string(), "text");
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn cli_to_ecef_with_negative_longitude() {
        let args = CliArgs::parse_from([
            "geoframe", "to-ecef", "--lat", "37.422", "--lon", "-122.084", "--alt", "-12.5",
        ]);
        let config: RunConfig = args.into();
        assert_eq!(
            config.operation,
            Operation::ToEcef(GeoCoordinate::new(37.422, -122.084, -12.5))
        );
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.strict);
        assert!(!config.verbose);
        assert_eq!(config.threads, None);
    }

    #[test]
    fn cli_global_flags_after_subcommand() {
        let args = CliArgs::parse_from([
            "geoframe",
            "to-geodetic",
            "--x",
            "6378137",
            "--y",
            "0",
            "--z",
            "-1",
            "--format",
            "json",
            "--strict",
            "-v",
            "-j",
            "4",
        ]);
        let config: RunConfig = args.into();
        assert_eq!(
            config.operation,
            Operation::ToGeodetic(Ecef::new(6_378_137.0, 0.0, -1.0))
        );
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.strict);
        assert!(config.verbose);
        assert_eq!(config.threads, Some(4));
    }

    #[test]
    fn cli_enu_inverse_defaults_altitude() {
        let args = CliArgs::parse_from(["geoframe", "enu", "--lat", "10", "--lon", "20", "--inverse"]);
        let config: RunConfig = args.into();
        assert_eq!(
            config.operation,
            Operation::Enu {
                origin: GeoCoordinate::new(10.0, 20.0, 0.0),
                inverse: true,
            }
        );
    }

    #[test]
    fn cli_to_local_and_from_local() {
        let args = CliArgs::parse_from([
            "geoframe",
            "to-local",
            "--lat",
            "1",
            "--lon",
            "2",
            "--origin-lat",
            "-1",
            "--origin-lon",
            "-2",
            "--origin-alt",
            "30",
        ]);
        let config: RunConfig = args.into();
        assert_eq!(config.operation.coordinates().len(), 2);
        assert_eq!(config.operation.name(), "to-local");

        let args = CliArgs::parse_from([
            "geoframe",
            "from-local",
            "--x",
            "-5",
            "--y",
            "1.5",
            "--z",
            "100",
            "--origin-lat",
            "45",
            "--origin-lon",
            "7",
        ]);
        let config: RunConfig = args.into();
        assert_eq!(
            config.operation,
            Operation::FromLocal {
                local: DVec3::new(-5.0, 1.5, 100.0),
                origin: GeoCoordinate::new(45.0, 7.0, 0.0),
            }
        );
    }

    #[test]
    fn cli_batch() {
        let args = CliArgs::parse_from([
            "geoframe",
            "batch",
            "-i",
            "points.json",
            "--origin-lat",
            "0",
            "--origin-lon",
            "0",
        ]);
        let config: RunConfig = args.into();
        match config.operation {
            Operation::Batch { input, output, .. } => {
                assert_eq!(input, PathBuf::from("points.json"));
                assert!(output.is_none());
            }
            other => panic!("unexpected operation {other:?}"),
        }
    }

    #[test]
    fn to_geodetic_has_no_coordinates_to_validate() {
        let op = Operation::ToGeodetic(Ecef::default());
        assert!(op.coordinates().is_empty());
    }

    #[test]
    fn run_config_defaults() {
        let config = RunConfig::new(Operation::ToEcef(GeoCoordinate::default()));
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.strict);
        assert_eq!(config.threads, None);
    }
}
