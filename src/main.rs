use std::path::PathBuf;

use anyhow::Result;
use clap::builder::RangedU64ValueParser;
use clap::Parser;

use tour_table::config::paths::TourPaths;
use tour_table::config::settings::{Settings, MAX_MARGIN, MAX_TITLE_WIDTH};
use tour_table::display::TableRenderer;
use tour_table::logging::init_cli_logger;
use tour_table::models::{sample_tours, Locale};

#[derive(Parser)]
#[command(
    name = "tours",
    version,
    about = "Print tour ticket prices as an ASCII table",
    long_about = "Prints the built-in listing of tour destinations, grouped by \
                  country, with each city's population and ticket price."
)]
struct Cli {
    /// Settings file (JSON); defaults to config.json in the config directory
    #[arg(short, long, env = "TOURS_CONFIG")]
    config: Option<PathBuf>,

    /// Number format for prices (posix, en-us, id-id, de-de, fr-fr)
    #[arg(short, long)]
    locale: Option<Locale>,

    /// Currency symbol printed before each price
    #[arg(short, long)]
    symbol: Option<String>,

    /// Spaces added on each side of every column
    #[arg(
        short,
        long,
        value_parser = RangedU64ValueParser::<usize>::new().range(0..=MAX_MARGIN as u64)
    )]
    margin: Option<usize>,

    /// Width the title is centered over
    #[arg(
        long,
        value_parser = RangedU64ValueParser::<usize>::new().range(0..=MAX_TITLE_WIDTH as u64)
    )]
    title_width: Option<usize>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Apply command-line overrides on top of loaded settings
    fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(locale) = self.locale {
            settings.locale = locale;
        }
        if let Some(symbol) = &self.symbol {
            settings.currency_symbol = symbol.clone();
        }
        if let Some(margin) = self.margin {
            settings.margin = margin;
        }
        if let Some(title_width) = self.title_width {
            settings.title_width = title_width;
        }
        settings
    }
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load_or_default(&TourPaths::new()?)?,
    };
    Ok(cli.apply(settings))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    let settings = load_settings(&cli)?;
    tracing::debug!(?settings, "effective settings");

    let tours = sample_tours()?;
    let table = TableRenderer::from_settings(&settings)?.render(&tours)?;
    print!("{}", table);

    Ok(())
}
