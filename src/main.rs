use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

use policy_distance::config::{ComparisonConfig, Config};
use policy_distance::output::{self, ScoredComparison};
use policy_distance::scoring::{self, Strategy};

const EXIT_SUCCESS: i32 = 0;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score every comparison with its strategy (default if no subcommand)
    Score,
    /// Score every comparison under all strategies side by side
    Compare,
    /// List available scoring strategies
    Strategies,
}

#[derive(Parser, Debug)]
#[command(name = "policy-distance")]
#[command(about = "Score how closely voting records match a policy", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to comparison file (defaults to ~/.config/policy-distance/comparisons.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Strategy to use for every comparison, overriding the file
    #[arg(short, long, global = true, value_enum)]
    strategy: Option<Strategy>,

    /// Print scores as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Score);
    let start_time = Instant::now();
    let use_colors = output::should_use_colors();

    if let Commands::Strategies = command {
        println!("{}", output::format_strategy_list(use_colors));
        std::process::exit(EXIT_SUCCESS);
    }

    let config_path = cli.config.map(PathBuf::from);
    let config = match policy_distance::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if cli.verbose {
        eprintln!("Loaded {} comparisons", config.comparisons.len());
        if let Some(strategy) = config.strategy {
            eprintln!("  Default strategy: {}", strategy);
        }
        if let Some(strategy) = cli.strategy {
            eprintln!("  Strategy override: {}", strategy);
        }
    }

    if let Err(errors) = policy_distance::config::validate_config(&config) {
        eprintln!("Comparison errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    match command {
        Commands::Score => run_score(&config, cli.strategy, cli.json, cli.verbose, use_colors),
        Commands::Compare => run_compare(&config, cli.json, cli.verbose, use_colors),
        Commands::Strategies => unreachable!("handled before loading config"),
    }

    if cli.verbose {
        eprintln!();
        eprintln!(
            "Total: {} comparisons in {:?}",
            config.comparisons.len(),
            start_time.elapsed()
        );
    }

    std::process::exit(EXIT_SUCCESS);
}

fn score_comparison(
    index: usize,
    comparison: &ComparisonConfig,
    strategy: Strategy,
    verbose: bool,
) -> ScoredComparison {
    let name = comparison.label(index);
    let breakdown = scoring::explain(strategy, &comparison.input());
    if verbose {
        eprintln!("{}", name);
        eprintln!("{}", output::format_breakdown(&breakdown));
    }
    ScoredComparison::new(name, strategy, breakdown.score)
}

fn run_score(
    config: &Config,
    override_strategy: Option<Strategy>,
    json: bool,
    verbose: bool,
    use_colors: bool,
) {
    let rows: Vec<ScoredComparison> = config
        .comparisons
        .iter()
        .enumerate()
        .map(|(i, comparison)| {
            let strategy = comparison.resolve_strategy(config, override_strategy);
            score_comparison(i, comparison, strategy, verbose)
        })
        .collect();

    print_rows(&rows, json, |rows| output::format_scored_table(rows, use_colors));
}

fn run_compare(config: &Config, json: bool, verbose: bool, use_colors: bool) {
    let rows: Vec<ScoredComparison> = config
        .comparisons
        .iter()
        .enumerate()
        .flat_map(|(i, comparison)| {
            Strategy::ALL
                .into_iter()
                .map(move |strategy| score_comparison(i, comparison, strategy, verbose))
        })
        .collect();

    print_rows(&rows, json, |rows| {
        let table: Vec<(String, [f64; 3])> = rows
            .chunks(Strategy::ALL.len())
            .map(|chunk| {
                let scores = [chunk[0].score, chunk[1].score, chunk[2].score];
                (chunk[0].name.clone(), scores)
            })
            .collect();
        output::format_comparison_table(&table, use_colors)
    });
}

fn print_rows<F>(rows: &[ScoredComparison], json: bool, table: F)
where
    F: Fn(&[ScoredComparison]) -> String,
{
    if json {
        match output::format_json(rows) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Output error: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
    } else {
        println!("{}", table(rows));
    }
}
