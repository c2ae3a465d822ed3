use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use reality_check::compare::MAX_BRANDS;
use reality_check::dashboard::{self, Scenario, MODULES};
use reality_check::forecast::FinancialParameters;
use reality_check::output::{self, OutputFormat};
use reality_check::scoring::{
    BrandParameters, BrandStrength, BurnInputs, SalesChannel, MARGIN_RANGE, SKU_RANGE,
};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_OUTPUT: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Survival score and outcome for one brand
    Score {
        /// Gross margin at launch, in percent (10-90)
        #[arg(long, default_value_t = 45.0, value_parser = parse_margin)]
        margin: f64,

        /// Primary sales channel
        #[arg(long, value_enum, default_value_t = SalesChannel::Dtc)]
        channel: SalesChannel,

        /// Brand strength at launch
        #[arg(long, value_enum, default_value_t = BrandStrength::Weak)]
        strength: BrandStrength,

        /// Number of SKUs (1-50)
        #[arg(long, default_value_t = 10, value_parser = parse_sku_count)]
        skus: u32,

        /// Simulate an operational failure
        #[arg(long)]
        fail: bool,

        /// Monthly cash burn in thousands
        #[arg(long, requires = "runway_months", value_parser = parse_amount)]
        cash_burn_k: Option<f64>,

        /// Months of runway left
        #[arg(long, requires = "cash_burn_k", value_parser = parse_amount)]
        runway_months: Option<f64>,
    },
    /// Customer, revenue and breakeven forecast
    Forecast {
        /// Total addressable market, in millions
        #[arg(long, default_value_t = 100.0, value_parser = parse_amount)]
        tam_m: f64,

        /// Customer acquisition cost
        #[arg(long, default_value_t = 50.0, value_parser = parse_amount)]
        cac: f64,

        /// Conversion rate, in percent
        #[arg(long, default_value_t = 2.0, value_parser = parse_percent)]
        conversion_pct: f64,

        /// Monthly churn rate, in percent
        #[arg(long, default_value_t = 5.0, value_parser = parse_percent)]
        churn_pct: f64,

        /// Inflate forecasted customers by 20%
        #[arg(long)]
        optimism_bias: bool,

        /// Fixed monthly burn
        #[arg(long, default_value_t = 50_000.0, value_parser = parse_amount)]
        fixed_burn: f64,

        /// Variable burn per customer
        #[arg(long, default_value_t = 5.0, value_parser = parse_amount)]
        variable_burn: f64,

        /// Number of retail distribution points
        #[arg(long, default_value_t = 100)]
        distribution_points: u32,

        /// Average selling price
        #[arg(long, default_value_t = 30.0, value_parser = parse_amount)]
        avg_price: f64,

        /// Retail slotting fee (reported only)
        #[arg(long, default_value_t = 0.0, value_parser = parse_amount)]
        slotting_fee: f64,
    },
    /// Compare the brands listed in a scenario file
    Compare {
        /// Scenario YAML file with a `brands` list
        scenario: PathBuf,
    },
    /// Run a scenario file through the module it names
    Run {
        /// Scenario YAML file
        scenario: PathBuf,

        /// Module key or title (overrides the scenario's `module` field)
        #[arg(short, long)]
        module: Option<String>,
    },
    /// List available dashboard modules
    Modules,
    /// Write the default config file
    Init {
        /// Overwrite an existing config without asking
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "reality-check")]
#[command(about = "Score brand survival, forecast unit economics, and compare brands", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging and score breakdowns
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/reality-check/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

fn parse_margin(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if MARGIN_RANGE.contains(&value) {
        Ok(value)
    } else {
        Err(format!(
            "margin must be between {} and {}",
            MARGIN_RANGE.start(),
            MARGIN_RANGE.end()
        ))
    }
}

fn parse_sku_count(s: &str) -> Result<u32, String> {
    let value: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a whole number", s))?;
    if SKU_RANGE.contains(&value) {
        Ok(value)
    } else {
        Err(format!(
            "SKU count must be between {} and {}",
            SKU_RANGE.start(),
            SKU_RANGE.end()
        ))
    }
}

fn parse_percent(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err("percentage must be between 0 and 100".to_string())
    }
}

fn parse_amount(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err("value must be a non-negative number".to_string())
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_scenario_or_exit(path: &Path) -> Scenario {
    match dashboard::load_scenario(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Scenario error: {:#}", e);
            std::process::exit(EXIT_INPUT);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = cli.config.map(PathBuf::from);

    // Build the scenario and pick the module to run
    let (scenario, module_name) = match cli.command {
        Commands::Modules => {
            for module in MODULES.iter() {
                println!("{:<10} {:<26} {}", module.key, module.title, module.summary);
            }
            std::process::exit(EXIT_SUCCESS);
        }
        Commands::Init { force } => {
            match reality_check::config::run_init(config_path, force) {
                Ok(Some(path)) => println!("Config written to {}", path.display()),
                Ok(None) => println!("Aborted."),
                Err(e) => {
                    eprintln!("Config error: {:#}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            }
            std::process::exit(EXIT_SUCCESS);
        }
        Commands::Score {
            margin,
            channel,
            strength,
            skus,
            fail,
            cash_burn_k,
            runway_months,
        } => {
            let burn = match (cash_burn_k, runway_months) {
                (Some(cash_burn_k), Some(runway_months)) => Some(BurnInputs {
                    cash_burn_k,
                    runway_months,
                }),
                _ => None,
            };
            let scenario = Scenario {
                brand: Some(BrandParameters {
                    gross_margin_pct: margin,
                    sales_channel: channel,
                    brand_strength: strength,
                    sku_count: skus,
                    simulate_operational_failure: fail,
                }),
                burn,
                ..Scenario::default()
            };
            (scenario, Some("survival".to_string()))
        }
        Commands::Forecast {
            tam_m,
            cac,
            conversion_pct,
            churn_pct,
            optimism_bias,
            fixed_burn,
            variable_burn,
            distribution_points,
            avg_price,
            slotting_fee,
        } => {
            let scenario = Scenario {
                financials: Some(FinancialParameters {
                    total_addressable_market_m: tam_m,
                    customer_acquisition_cost: cac,
                    conversion_rate_pct: conversion_pct,
                    monthly_churn_rate_pct: churn_pct,
                    include_optimism_bias: optimism_bias,
                    fixed_monthly_burn: fixed_burn,
                    variable_burn_per_customer: variable_burn,
                    distribution_points,
                    avg_price,
                    slotting_fee,
                }),
                ..Scenario::default()
            };
            (scenario, Some("forecast".to_string()))
        }
        Commands::Compare { scenario } => {
            let scenario = load_scenario_or_exit(&scenario);
            if scenario.brands.is_none() {
                eprintln!("Scenario has no `brands` list.");
                eprintln!("Add up to {} brands:", MAX_BRANDS);
                eprintln!("  brands:");
                eprintln!("    - {{ label: Acme, gross_margin_pct: 60, sku_count: 4 }}");
                std::process::exit(EXIT_INPUT);
            }
            (scenario, Some("compare".to_string()))
        }
        Commands::Run { scenario, module } => (load_scenario_or_exit(&scenario), module),
    };

    // Load config
    let config = match reality_check::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate scoring config at startup
    let effective_scoring = config.effective_scoring();
    if let Err(errors) = reality_check::scoring::validate_scoring(&effective_scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    if let Err(errors) = dashboard::validate_scenario(&scenario) {
        eprintln!("Scenario errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_INPUT);
    }

    let module = match dashboard::resolve_module(module_name.as_deref(), &scenario) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(EXIT_INPUT);
        }
    };
    let report = match dashboard::dispatch(module, &scenario, &effective_scoring) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(EXIT_INPUT);
        }
    };

    let use_colors = cli.format == OutputFormat::Table && output::should_use_colors();
    match output::render_report(&report, cli.format, use_colors, cli.verbose) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => {
            eprintln!("Output error: {:#}", e);
            std::process::exit(EXIT_OUTPUT);
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
