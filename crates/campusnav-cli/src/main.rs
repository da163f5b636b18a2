use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use campusnav_cli::commands::export::{handle_export_command, ExportCommandArgs};
use campusnav_cli::commands::listing::{handle_locations, handle_paths};
use campusnav_cli::commands::route::{handle_route_command, RouteCommandArgs};
use campusnav_cli::output::OutputFormat;
use campusnav_cli::terminal::ColorPalette;

#[derive(Parser, Debug)]
#[command(author, version, about = "Campus map and shortest-route utilities")]
struct Cli {
    /// Campus dataset file (JSON) or a directory containing campus.json.
    /// Defaults to $CAMPUSNAV_DATASET, then the user config directory, then
    /// the built-in campus.
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain, global = true)]
    format: OutputFormat,

    /// Disable ANSI colors.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all campus locations.
    Locations,
    /// List all walkable paths and their distances.
    Paths,
    /// Compute the shortest route between two locations.
    Route {
        /// Starting location name.
        #[arg(long = "from")]
        from: String,
        /// Destination location name.
        #[arg(long = "to")]
        to: String,
    },
    /// Write the campus map (or a route map) as GeoJSON.
    Export {
        /// Destination file.
        #[arg(long, short)]
        output: PathBuf,
        /// Highlight a route starting here; requires --to.
        #[arg(long = "from", requires = "to")]
        from: Option<String>,
        /// Highlight a route ending here; requires --from.
        #[arg(long = "to", requires = "from")]
        to: Option<String>,
    },
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let palette = if cli.no_color || cli.format == OutputFormat::Json {
        ColorPalette::plain()
    } else {
        ColorPalette::detect()
    };
    let dataset = cli.dataset.as_deref();

    match cli.command {
        Command::Locations => handle_locations(dataset, cli.format, &palette)?,
        Command::Paths => handle_paths(dataset, cli.format, &palette)?,
        Command::Route { from, to } => {
            let args = RouteCommandArgs { from, to };
            return handle_route_command(dataset, cli.format, &palette, &args);
        }
        Command::Export { output, from, to } => {
            let args = ExportCommandArgs {
                output,
                route: from.zip(to),
            };
            handle_export_command(dataset, cli.format, &args)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
