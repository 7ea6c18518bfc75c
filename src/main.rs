use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use indicatif::{ProgressBar, ProgressStyle};
use skip_select::{
    CatalogSource, HttpCatalogSource, Location, PricedSkip, SelectionOutcome, SkipOption,
    SkipSelection,
    catalog::{DEFAULT_AREA, DEFAULT_BASE_URL, DEFAULT_POSTCODE},
    logging::{self, LogTarget},
    output::{format_selection, format_skip},
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "skip-select",
    version,
    about = "Choose a skip size for your location",
    long_about = None
)]
struct Cli {
    /// Base URL of the skip pricing service
    #[arg(long, env = "SKIP_SELECT_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Postcode the catalog is priced for
    #[arg(long, env = "SKIP_SELECT_POSTCODE", default_value = DEFAULT_POSTCODE)]
    postcode: String,

    /// Area name sent with the postcode
    #[arg(long, env = "SKIP_SELECT_AREA", default_value = DEFAULT_AREA)]
    area: String,

    /// Request timeout in seconds
    #[arg(long, env = "SKIP_SELECT_TIMEOUT", default_value_t = 30)]
    timeout_secs: u64,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the skip catalog and print it without the interactive screen
    List,
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut command = Cli::command();
        clap_complete::generate(*shell, &mut command, "skip-select", &mut io::stdout());
        return Ok(());
    }

    let interactive = cli.command.is_none();
    let log_target = match (&cli.log_file, interactive) {
        (Some(path), _) => LogTarget::File(path.clone()),
        (None, true) => LogTarget::Discard,
        (None, false) => LogTarget::Stderr,
    };
    logging::init_tracing(log_target, cli.verbose)?;

    if cli.no_color {
        colored::control::set_override(false);
    }

    let location = Location::new(cli.postcode.clone(), cli.area.clone());
    let source = HttpCatalogSource::new(cli.base_url.clone(), Duration::from_secs(cli.timeout_secs))
        .context("Failed to create HTTP client")?;

    match cli.command {
        Some(Commands::List) => run_list(&source, &location, cli.format, !cli.no_color),
        Some(Commands::Completions { .. }) => Ok(()),
        None => run_interactive(Arc::new(source), location, cli.format, !cli.no_color),
    }
}

fn run_list(
    source: &dyn CatalogSource,
    location: &Location,
    format: OutputFormat,
    use_color: bool,
) -> Result<()> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .context("Invalid spinner template")?,
    );
    spinner.set_message(format!("Loading skip options for {location}..."));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = source.fetch(location);
    spinner.finish_and_clear();
    let skips = result.context("Unable to load skip data")?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Text => {
            if skips.is_empty() {
                writeln!(handle, "No skips available for {location}.")?;
            } else {
                writeln!(handle, "{} skips available for {location}:\n", skips.len())?;
                for skip in &skips {
                    writeln!(handle, "{}\n", format_skip(skip, use_color))?;
                }
            }
        }
        OutputFormat::Json => {
            let priced: Vec<PricedSkip> = skips.iter().map(PricedSkip::from).collect();
            serde_json::to_writer_pretty(&mut handle, &priced)?;
            writeln!(handle)?;
        }
    }

    Ok(())
}

fn run_interactive(
    source: Arc<dyn CatalogSource>,
    location: Location,
    format: OutputFormat,
    use_color: bool,
) -> Result<()> {
    let mut selection = SkipSelection::new(source, location);
    let outcome = selection.run()?;

    match outcome {
        SelectionOutcome::Continue(skip) => print_selection(&skip, format, use_color)?,
        SelectionOutcome::Back => println!("Back to waste type"),
        SelectionOutcome::Quit => {}
    }

    Ok(())
}

fn print_selection(skip: &SkipOption, format: OutputFormat, use_color: bool) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", format_selection(skip, use_color)),
        OutputFormat::Json => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            serde_json::to_writer_pretty(&mut handle, &PricedSkip::from(skip))?;
            writeln!(handle)?;
        }
    }
    Ok(())
}
