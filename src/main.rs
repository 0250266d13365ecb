use clap::{Parser, Subcommand};
use frenzy_sim::card::CardCatalog;
use frenzy_sim::rng::SimRng;
use frenzy_sim::simulation::deck::build_library;
use frenzy_sim::simulation::engine::{run_trial, TrialConfig, TrialResult};
use frenzy_sim::simulation::stats::{LandConfigResults, SweepResults};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

#[derive(Parser)]
#[command(name = "frenzy-sim")]
#[command(about = "Mono-red spectacle deck damage simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for random number generation (for reproducibility)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Card catalog JSON file (the built-in list when omitted)
    #[arg(short, long)]
    catalog: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sweep starting land counts over many trials (default)
    Run {
        /// Trials per land configuration
        #[arg(short = 'n', long, default_value = "10000")]
        trials: usize,

        /// Turn boundaries per trial (each trial yields turns + 1 samples)
        #[arg(short, long, default_value = "5")]
        turns: u32,

        /// Lowest starting land count
        #[arg(long, default_value = "4")]
        min_lands: u32,

        /// Highest starting land count
        #[arg(long, default_value = "7")]
        max_lands: u32,

        /// Start with the first turn's land drop already used
        #[arg(long)]
        land_for_turn: bool,

        /// Seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,

        /// Results JSON path (timestamped filename when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Run one trial with full narration
    Single {
        /// Turn boundaries for the trial
        #[arg(short, long, default_value = "5")]
        turns: u32,

        /// Starting land count
        #[arg(short, long, default_value = "4")]
        lands: u32,

        /// Start with the first turn's land drop already used
        #[arg(long)]
        land_for_turn: bool,

        /// Seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => match CardCatalog::from_file(path) {
            Ok(catalog) => {
                eprintln!("✓ Loaded {} cards from {}", catalog.card_count(), path);
                catalog
            }
            Err(e) => {
                eprintln!("✗ Failed to load catalog '{}': {}", path, e);
                std::process::exit(1);
            }
        },
        None => CardCatalog::stock(),
    };

    match cli.command {
        Some(Commands::Run {
            trials,
            turns,
            min_lands,
            max_lands,
            land_for_turn,
            seed,
            output,
        }) => {
            run_sweep(
                &catalog,
                trials,
                turns,
                min_lands,
                max_lands,
                land_for_turn,
                seed.or(cli.seed),
                output,
            );
        }
        Some(Commands::Single {
            turns,
            lands,
            land_for_turn,
            seed,
        }) => {
            run_single(&catalog, turns, lands, land_for_turn, seed.or(cli.seed));
        }
        None => {
            run_sweep(&catalog, 10000, 5, 4, 7, false, cli.seed, None);
        }
    }
}

fn base_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos() as u64
    })
}

#[allow(clippy::too_many_arguments)]
fn run_sweep(
    catalog: &CardCatalog,
    trials: usize,
    turns: u32,
    min_lands: u32,
    max_lands: u32,
    land_for_turn: bool,
    seed: Option<u64>,
    output: Option<String>,
) {
    if min_lands > max_lands {
        eprintln!("✗ min-lands {} exceeds max-lands {}", min_lands, max_lands);
        std::process::exit(1);
    }

    let seed = base_seed(seed);
    let land_counts: Vec<u32> = (min_lands..=max_lands).collect();

    println!("\n=== Spectacle Deck Damage Sweep ===\n");
    println!("Deck: {} cards", catalog.deck_size());
    println!("Trials per land count: {}", trials);
    println!("Turns: {} ({} samples per trial)", turns, turns + 1);
    println!("Starting lands: {}..={}", min_lands, max_lands);
    println!("Seed: {}", seed);
    println!();

    let bar = ProgressBar::new((land_counts.len() * trials) as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} trials ({eta})")
            .expect("static template"),
    );

    let start = std::time::Instant::now();
    let mut configs = Vec::with_capacity(land_counts.len());

    for (land_index, &lands) in land_counts.iter().enumerate() {
        let config = TrialConfig {
            turns,
            lands,
            land_for_turn,
            verbose: false,
        };

        let outcomes: Vec<Result<TrialResult, _>> = (0..trials)
            .into_par_iter()
            .map(|trial| {
                let mut rng = SimRng::for_trial(seed, land_index as u64, trial as u64);
                let (arena, library) = build_library(catalog, &mut rng);
                let result = run_trial(arena, library, &config);
                bar.inc(1);
                result
            })
            .collect();

        let mut damage = Vec::with_capacity(trials);
        let mut failed_trials = 0;
        let mut cap_exhaustions = 0;
        for outcome in outcomes {
            match outcome {
                Ok(result) => {
                    cap_exhaustions += result.cap_exhaustions;
                    damage.push(result.damage_by_turn);
                }
                Err(e) => {
                    failed_trials += 1;
                    eprintln!("✗ Trial aborted ({} lands): {}", lands, e);
                }
            }
        }

        configs.push(LandConfigResults {
            lands,
            damage,
            failed_trials,
            cap_exhaustions,
        });
    }

    bar.finish_and_clear();
    let elapsed = start.elapsed();

    println!("=== Results ===\n");
    print!("{:>5}", "Lands");
    for turn in 0..=turns {
        print!("  {:>7}", format!("Turn {}", turn + 1));
    }
    println!();
    for config in &configs {
        print!("{:>5}", config.lands);
        for mean in config.mean_by_turn() {
            print!("  {:>7.2}", mean);
        }
        println!();
    }

    println!("\nMedian damage, final turn:");
    for config in &configs {
        let medians = config.median_by_turn();
        let median = medians.last().copied().unwrap_or(0.0);
        println!("  {} lands: {:.1}", config.lands, median);
    }

    println!("\nDamage distribution, final turn:");
    for config in &configs {
        println!("  {} lands:", config.lands);
        let histogram = config.histogram(turns as usize, 49);
        let total: usize = histogram.iter().sum();
        for (damage, &count) in histogram.iter().enumerate() {
            if count == 0 {
                continue;
            }
            let pct = count as f64 / total.max(1) as f64 * 100.0;
            if pct < 0.5 {
                continue;
            }
            let bar = "█".repeat((pct / 2.0).ceil() as usize);
            println!("    {:3} dmg: {:5.1}% {}", damage, pct, bar);
        }
    }

    let total_failed: usize = configs.iter().map(|c| c.failed_trials).sum();
    let total_caps: u32 = configs.iter().map(|c| c.cap_exhaustions).sum();
    if total_failed > 0 {
        eprintln!("\n✗ {} trial(s) aborted on engine faults", total_failed);
    }
    if total_caps > 0 {
        eprintln!("⚠ action cap tripped {} time(s) across all trials", total_caps);
    }

    let results = SweepResults {
        turns,
        trials,
        land_for_turn,
        seed,
        configs,
    };
    let path = output.unwrap_or_else(|| {
        format!(
            "frenzy-results-{}.json",
            chrono::Local::now().format("%Y%m%d-%H%M%S")
        )
    });
    match serde_json::to_string_pretty(&results) {
        Ok(json) => match std::fs::write(&path, json) {
            Ok(()) => println!("\nResults saved to: {}", path),
            Err(e) => eprintln!("\n✗ Failed to write {}: {}", path, e),
        },
        Err(e) => eprintln!("\n✗ Failed to serialize results: {}", e),
    }

    println!(
        "\nSweep completed in {:.2?} ({:.0} trials/sec)",
        elapsed,
        (land_counts.len() * trials) as f64 / elapsed.as_secs_f64()
    );
}

fn run_single(catalog: &CardCatalog, turns: u32, lands: u32, land_for_turn: bool, seed: Option<u64>) {
    let seed = base_seed(seed);
    println!("\n=== Single Trial ===");
    println!("Seed: {}", seed);
    println!("Starting lands: {}", lands);

    let mut rng = SimRng::new(Some(seed));
    let (arena, library) = build_library(catalog, &mut rng);
    let config = TrialConfig {
        turns,
        lands,
        land_for_turn,
        verbose: true,
    };

    match run_trial(arena, library, &config) {
        Ok(result) => {
            println!("\nDamage by turn: {:?}", result.damage_by_turn);
            println!(
                "Total damage: {}",
                result.damage_by_turn.iter().sum::<u32>()
            );
            if result.cap_exhaustions > 0 {
                eprintln!("⚠ action cap tripped {} time(s)", result.cap_exhaustions);
            }
        }
        Err(e) => {
            eprintln!("✗ Trial aborted: {}", e);
            std::process::exit(1);
        }
    }
}
