use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{FormatArgs, StoreArgs, SurfaceArgs, TuningArgs};

#[derive(Parser)]
#[command(
    name = "spinning-wheel",
    about = "🎡 Spin a wheel of options and let chance decide",
    long_about = "spinning-wheel keeps a list of options, draws them as the slices of a wheel \
                  and spins it to pick one at random. The list is stored between runs and can \
                  be edited, imported and exported as JSON.",
    subcommand_required = true,
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Spin the wheel and reveal where it lands
    ///
    /// Animates a spin in the terminal, showing the option passing under the
    /// marker, then presents the winning option.
    #[command(
        long_about = "Spin the wheel. The target slice is picked uniformly at random; the wheel \
                      makes at least --speed full turns (plus up to --extra-turns more) and \
                      decelerates over roughly 2.5 to 3.4 seconds before landing on it. Use \
                      --seed for a reproducible spin and --svg to keep a picture of the final \
                      frame."
    )]
    Spin {
        #[command(flatten)]
        store: StoreArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        surface: SurfaceArgs,

        #[command(flatten)]
        tuning: TuningArgs,

        /// Seed for a reproducible spin
        #[arg(long, env = "SPINNING_WHEEL_SEED")]
        seed: Option<u64>,

        /// Write the final frame to this SVG file
        #[arg(long, value_name = "PATH", env = "SPINNING_WHEEL_SVG")]
        svg: Option<PathBuf>,
    },

    /// Replace the options with edited text, one option per line
    ///
    /// Blank lines and surrounding whitespace are dropped. Applying text
    /// without any option empties the wheel.
    Apply {
        #[command(flatten)]
        store: StoreArgs,

        /// File holding the edited text (stdin if not specified)
        #[arg(short, long, value_name = "PATH")]
        file: Option<PathBuf>,
    },

    /// Show the options on the wheel
    List {
        #[command(flatten)]
        store: StoreArgs,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Export the options as a JSON array
    Export {
        #[command(flatten)]
        store: StoreArgs,

        /// Output file, `-` for stdout
        #[arg(
            short,
            long,
            value_name = "PATH",
            default_value = crate::constants::wheel::EXPORT_FILE_NAME,
            env = "SPINNING_WHEEL_EXPORT"
        )]
        output: PathBuf,
    },

    /// Import options from a JSON array
    ///
    /// The file must hold a non-empty JSON array; every element becomes an
    /// option. A rejected file leaves the current options untouched.
    Import {
        /// JSON file to import
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        store: StoreArgs,
    },

    /// Draw the wheel to an SVG file
    Render {
        #[command(flatten)]
        store: StoreArgs,

        #[command(flatten)]
        surface: SurfaceArgs,

        /// Wheel rotation in radians
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        rotation: f64,

        /// Output file, `-` for stdout
        #[arg(short, long, value_name = "PATH", default_value = "-")]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}
