//! Postflop Leaderboard Binary
//!
//! Ranks every starting hand on a board given as arguments, or prompts
//! for the board and mode when none is given.

use clap::Parser;
use colored::Colorize;
use dialoguer::Input;
use dialoguer::Select;
use postflop::analysis::Board;
use postflop::analysis::Config;
use postflop::analysis::Leaderboard;
use postflop::analysis::Mode;
use postflop::report::Report;
use std::sync::atomic::AtomicBool;

#[derive(Parser)]
#[command(author, version, about = "Rank every starting hand on a board", long_about = None)]
struct Args {
    /// board ranks, e.g. Q T 9 2 A
    board: Vec<String>,
    #[arg(short, long, value_enum, default_value_t = Mode::Strength)]
    mode: Mode,
    /// Monte Carlo iterations per hand
    #[arg(short, long, default_value_t = postflop::ITERATIONS)]
    iterations: usize,
    /// fixed seed for reproducible equity
    #[arg(short, long)]
    seed: Option<u64>,
    /// worker threads, defaults to one per core
    #[arg(short, long)]
    threads: Option<usize>,
    /// hands to show
    #[arg(short = 'n', long, default_value_t = postflop::LEADERBOARD_SIZE)]
    top: usize,
    /// bucket strength rankings by category
    #[arg(short, long)]
    grouped: bool,
    /// print the full standings as JSON
    #[arg(long)]
    json: bool,
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
    fn config(&self) -> Config {
        let config = Config::default().with_iterations(self.iterations);
        let config = match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        };
        match self.threads {
            Some(threads) => config.with_threads(threads),
            None => config,
        }
    }
}

fn main() {
    let args = Args::parse();
    if let Err(e) = postflop::log(args.level()) {
        eprintln!("logger unavailable: {}", e);
    }
    if let Err(e) = run(args) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let (text, mode) = match args.board.is_empty() {
        true => prompt()?,
        false => (args.board.join(" "), args.mode),
    };
    let board = Board::try_from(text.as_str())?;
    let ref cancel = AtomicBool::new(false);
    let standings = Leaderboard::rank(&board, mode, &args.config(), cancel)?;
    let report = Report::new(board, standings);
    match (args.json, args.grouped) {
        (true, _) => println!("{}", serde_json::to_string_pretty(&report)?),
        (false, true) => grouped(&report, args.top),
        (false, false) => listed(&report, args.top),
    }
    Ok(())
}

/// board text and mode, asked for interactively
fn prompt() -> anyhow::Result<(String, Mode)> {
    let text = Input::<String>::new()
        .with_prompt("Board (flop, turn, river)")
        .default("Q T 9".to_string())
        .interact_text()?;
    let choices = ["Hand strength", "Equity against a random hand"];
    let selection = Select::new()
        .with_prompt("Rank hands by")
        .items(&choices)
        .default(0)
        .interact()?;
    let mode = match selection {
        0 => Mode::Strength,
        _ => Mode::Equity,
    };
    Ok((text, mode))
}

fn header(report: &Report) {
    println!(
        "{} {}",
        report.board().to_string().bold(),
        format!("({}, {} hands)", report.standings().mode(), report.standings().len()).dimmed()
    );
}

fn listed(report: &Report, n: usize) {
    header(report);
    for line in report.top(n) {
        println!(
            "{:>2}. {}  {}",
            line.position().to_string().dimmed(),
            line.pocket().to_string().green().bold(),
            line.label()
        );
    }
}

fn grouped(report: &Report, n: usize) {
    match report.grouped() {
        None => {
            log::warn!("equity rankings have no categories, listing instead");
            listed(report, n)
        }
        Some(groups) => {
            header(report);
            for group in groups {
                let pockets = group
                    .pockets()
                    .iter()
                    .take(n)
                    .map(|p| p.to_string())
                    .collect::<Vec<String>>();
                println!(
                    "{:<10} {}",
                    group.category().to_string().yellow(),
                    pockets.join(" ")
                );
            }
        }
    }
}
