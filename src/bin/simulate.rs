//! Battle balance simulator CLI.
//!
//! Run seeded batches of battles against the bundled starter content.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                         # 1000 runs of terra_1
//!   cargo run --bin simulate -- -n 100 -r pyro_2 -l 8
//!   cargo run --bin simulate -- --raid raid_aqua -l 30 --seed 42
//!   RUST_LOG=spirit_bond=debug cargo run --bin simulate -- -n 1

use spirit_bond::content::ContentTables;
use spirit_bond::simulator::{run_simulation, SimConfig, SimTarget};
use std::env;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let (config, json) = parse_args(&args);

    if !json {
        println!("╔═══════════════════════════════════════════════════════════════╗");
        println!("║              SPIRIT BOND BATTLE SIMULATOR                     ║");
        println!("╚═══════════════════════════════════════════════════════════════╝");
        println!();
        println!("Configuration:");
        println!("  Runs:           {}", config.num_runs);
        println!("  Target:         {:?}", config.target);
        println!("  Species:        {}", config.species_id);
        println!("  Start Level:    {}", config.starting_level);
        println!("  Battles/Run:    {}", config.battles_per_run);
        if let Some(seed) = config.seed {
            println!("  Seed:           {}", seed);
        }
        println!();
        println!("Running simulation...");
        println!();
    }

    let content = ContentTables::starter();
    let report = match run_simulation(&content, &config) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("simulation failed: {}", err);
            return ExitCode::FAILURE;
        }
    };

    if json {
        println!("{}", report.to_json());
    } else {
        println!("{}", report.to_text());
    }
    ExitCode::SUCCESS
}

fn parse_args(args: &[String]) -> (SimConfig, bool) {
    let mut config = SimConfig::default();
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-r" | "--route" => {
                if i + 1 < args.len() {
                    config.target = SimTarget::Route(args[i + 1].clone());
                    i += 1;
                }
            }
            "--raid" => {
                if i + 1 < args.len() {
                    config.target = SimTarget::Raid(args[i + 1].clone());
                    config.battles_per_run = 1;
                    i += 1;
                }
            }
            "--arena" => {
                config.target = SimTarget::Arena;
            }
            "--species" => {
                if i + 1 < args.len() {
                    config.species_id = args[i + 1].clone();
                    i += 1;
                }
            }
            "-l" | "--level" => {
                if i + 1 < args.len() {
                    config.starting_level = args[i + 1].parse().unwrap_or(1);
                    i += 1;
                }
            }
            "-b" | "--battles" => {
                if i + 1 < args.len() {
                    config.battles_per_run = args[i + 1].parse().unwrap_or(20);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-t" | "--ticks" => {
                if i + 1 < args.len() {
                    config.max_ticks_per_battle = args[i + 1].parse().unwrap_or(100_000);
                    i += 1;
                }
            }
            "--no-rest" => {
                config.rest_between_battles = false;
            }
            "--json" => {
                json = true;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    if json {
        config.verbosity = 0;
    }
    (config, json)
}

fn print_help() {
    println!("Spirit Bond Battle Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>        Number of simulation runs (default: 1000)");
    println!("    -r, --route <ID>      Explore a route (default: terra_1)");
    println!("        --raid <ID>       Fight a raid titan once per run");
    println!("        --arena           Fight arena opponents");
    println!("        --species <ID>    Starter species (default: starter_pupper)");
    println!("    -l, --level <L>       Starting level (default: 1)");
    println!("    -b, --battles <B>     Battles per run (default: 20)");
    println!("    -s, --seed <S>        Random seed for reproducibility");
    println!("    -t, --ticks <T>       Tick limit per battle (default: 100000)");
    println!("        --no-rest         Do not heal between battles");
    println!("        --json            Print the report as JSON");
    println!("    -v, --verbose         Print every run");
    println!("    -h, --help            Show this help");
    println!();
    println!("Set RUST_LOG (e.g. spirit_bond=debug) for engine diagnostics.");
}
