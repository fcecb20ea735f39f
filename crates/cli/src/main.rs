use anyhow::{Context, Result};
use catalog::{loader, ProductRef, ProductSequence};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use pipeline::filters::ExclusionRule;
use pipeline::pipelet::{DN_FILTERED_PRODUCTS, DN_PRODUCTS};
use pipeline::{FilterProductsPipelet, PipeletConfig, Pipeline, PipelineDictionary, ProductTypeExclusions};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Product type filter - run the catalog filter pipelet on a product file
#[derive(Parser)]
#[command(name = "product-filter")]
#[command(about = "Filter catalog products by bundle, master, retail set and service type", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter a product file and print the survivors as JSON
    Run {
        /// JSON file containing an array of products
        #[arg(short, long)]
        products: PathBuf,

        #[command(flatten)]
        config: ConfigArgs,

        /// Hand the products over as a paged sequence with this page size
        #[arg(long)]
        page_size: Option<usize>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show which exclusion rules a configuration enables
    Rules {
        #[command(flatten)]
        config: ConfigArgs,
    },
}

#[derive(Args)]
struct ConfigArgs {
    /// Properties file with Key=Value pipelet configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override a configuration value, e.g. --set ExcludeRetailSets=true
    #[arg(long = "set", value_parser = parse_key_value)]
    overrides: Vec<(String, String)>,
}

impl ConfigArgs {
    fn load(&self) -> Result<PipeletConfig> {
        let mut config = match &self.config {
            Some(path) => PipeletConfig::load_properties(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => PipeletConfig::new(),
        };
        config.merge(PipeletConfig::from_pairs(self.overrides.iter().cloned()));

        for (key, _) in &self.overrides {
            if !ExclusionRule::ALL.iter().any(|rule| rule.config_key() == key) {
                tracing::warn!("Override '{}' is not a known exclusion rule", key);
            }
        }
        Ok(config)
    }
}

fn parse_key_value(s: &str) -> std::result::Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected Key=Value, found '{s}'"))?;
    Ok((key.trim().to_string(), value.trim().to_string()))
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            products,
            config,
            page_size,
            pretty,
        } => handle_run(products, config.load()?, page_size, pretty)?,
        Commands::Rules { config } => handle_rules(config.load()?),
    }

    Ok(())
}

/// Handle the 'run' command
fn handle_run(
    products_path: PathBuf,
    config: PipeletConfig,
    page_size: Option<usize>,
    pretty: bool,
) -> Result<()> {
    let products: Vec<ProductRef> = loader::load_products(&products_path)
        .with_context(|| format!("Failed to load products from {}", products_path.display()))?
        .into_iter()
        .map(Arc::new)
        .collect();
    let input_count = products.len();

    let sequence = match page_size {
        Some(size) => ProductSequence::paged(products, size),
        None => ProductSequence::new(products),
    };

    let pipeline = Pipeline::new().add_pipelet(FilterProductsPipelet::init(&config));
    let mut dict = PipelineDictionary::new();
    dict.put(DN_PRODUCTS, sequence);

    let start = Instant::now();
    pipeline.run(&mut dict).context("Product filter pipeline failed")?;
    let elapsed = start.elapsed();

    let filtered = dict.get_required::<ProductSequence>(DN_FILTERED_PRODUCTS)?;
    let output: Vec<&catalog::Product> = filtered.iter().map(|p| p.as_ref()).collect();
    let json = if pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{json}");

    tracing::info!("Filtered {} products in {:?}", input_count, elapsed);
    eprintln!(
        "{} Kept {} of {} products",
        "✓".green(),
        filtered.len().to_string().bold(),
        input_count
    );
    Ok(())
}

/// Handle the 'rules' command
fn handle_rules(config: PipeletConfig) {
    let exclusions = ProductTypeExclusions::from_config(&config);
    println!("{}", "Exclusion rules (evaluation order):".bold().blue());
    for rule in ExclusionRule::ALL {
        let state = if exclusions.is_enabled(rule) {
            "excluded".red()
        } else {
            "allowed".green()
        };
        println!("  {} {:<26} {}", "•".cyan(), rule.config_key(), state);
    }
    println!("{}", "Survivors must be product items or offers.".dimmed());
}
