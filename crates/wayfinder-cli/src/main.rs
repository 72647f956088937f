use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use wayfinder_cli::commands::menu::run_menu;
use wayfinder_cli::commands::places::handle_places_command;
use wayfinder_cli::commands::resolve::handle_resolve_command;
use wayfinder_cli::commands::route::{handle_route_command, RouteCommandArgs};
use wayfinder_cli::output::{print_footer, print_logo, OutputFormat};
use wayfinder_cli::terminal::ColorPalette;
use wayfinder_lib::load_facility;

#[derive(Parser, Debug)]
#[command(author, version, about = "Indoor wayfinding over a facility's place graph")]
struct Cli {
    /// Facility configuration file (JSON). Falls back to WAYFINDER_FACILITY,
    /// then the user config directory, then the built-in sample campus.
    #[arg(long, global = true)]
    facility: Option<PathBuf>,

    /// Output format for listings and routes.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Suppress the banner.
    #[arg(long, global = true)]
    no_logo: bool,

    /// Suppress the elapsed-time footer.
    #[arg(long, global = true)]
    no_footer: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all known places with their floor labels.
    Places,
    /// Show which place a free-text query resolves to.
    Resolve {
        /// Case-insensitive fragment of a place name.
        query: String,
    },
    /// Compute walking directions between two places.
    Route {
        /// Starting place (free text).
        #[arg(long = "from")]
        from: String,
        /// Destination place (free text).
        #[arg(long = "to")]
        to: String,
    },
    /// Interactive menu (the default when no subcommand is given).
    Menu,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let started = Instant::now();

    let facility =
        load_facility(cli.facility.as_deref()).context("failed to load facility configuration")?;
    let palette = ColorPalette::detect();
    let command = cli.command.unwrap_or(Command::Menu);
    let machine_output = cli.format == OutputFormat::Json;

    if !cli.no_logo && !machine_output {
        print_logo(facility.name(), &palette);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match command {
        Command::Menu => {
            let stdin = io::stdin();
            return run_menu(&facility, stdin.lock(), out, cli.format, palette);
        }
        Command::Places => handle_places_command(&mut out, &facility, cli.format, &palette)?,
        Command::Resolve { query } => {
            handle_resolve_command(&mut out, &facility, &query, cli.format)?
        }
        Command::Route { from, to } => handle_route_command(
            &mut out,
            &facility,
            &RouteCommandArgs { from, to },
            cli.format,
            &palette,
        )?,
    }
    out.flush()?;
    drop(out);

    if !cli.no_footer && !machine_output {
        print_footer(started.elapsed(), &palette);
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
