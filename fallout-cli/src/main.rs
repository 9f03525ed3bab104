//! fallout-cli — Interactive radioactive decay calculator.
//!
//! Presents the substance menu and prompt loop, plus one-shot `list` and
//! `calc` subcommands over the same table.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use fallout::{FalloutDb, RiskLevel};
use fallout_data::SubstanceDatabase;
use tracing::debug;

/// Fallout decay and dose calculator.
#[derive(Parser)]
#[command(name = "fallout-cli")]
#[command(version, about = "Radioactive decay, dose, and risk calculator")]
struct Cli {
    /// Load a replacement substance table from a JSON file
    #[arg(long, global = true)]
    substances: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// With no subcommand, an interactive prompt loop is started.
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the substance table and exit.
    List,
    /// One-shot calculation without the interactive prompt.
    Calc(CalcArgs),
}

#[derive(Args)]
struct CalcArgs {
    /// Substance name, as shown by `list`
    #[arg(long)]
    substance: String,

    /// Initial mass in grams
    #[arg(long)]
    grams: f64,

    /// Number of elapsed half-lives
    #[arg(long, default_value_t = 0)]
    half_lives: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let db = match &cli.substances {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read substance table {}", path.display()))?;
            let table: SubstanceDatabase = serde_json::from_str(&text)
                .with_context(|| format!("failed to parse substance table {}", path.display()))?;
            debug!(
                "loaded {} substances from {}",
                table.substances.len(),
                path.display()
            );
            FalloutDb::with_substances(table.substances)?
        }
        None => {
            debug!("using built-in substance table");
            FalloutDb::new()
        }
    };

    match cli.command {
        Some(Commands::List) => list_substances(&db),
        Some(Commands::Calc(args)) => calc(&db, &args),
        None => interactive(&db),
    }
}

fn init_logging(level_str: &str) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_str));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_level(true))
        .init();
}

fn list_substances(db: &FalloutDb) -> Result<()> {
    println!(
        "{:<20} {:<24} {:>14} {:>16}",
        "Name", "Category", "Sv per gram", "Half-life (y)"
    );
    for record in db.substances() {
        println!(
            "{:<20} {:<24} {:>14} {:>16}",
            record.name, record.category, record.sieverts_per_gram, record.half_life_years
        );
    }
    Ok(())
}

fn calc(db: &FalloutDb, args: &CalcArgs) -> Result<()> {
    if args.grams <= 0.0 {
        bail!("amount must be a positive number of grams");
    }
    let remaining = db.remaining_grams(args.grams, args.half_lives);
    // Risk is classified on what is left after decay, not the initial mass.
    let (risk, dose) = db.classify_risk(&args.substance, remaining)?;
    let decay_time = db.decay_time_years(&args.substance, args.half_lives)?;
    print_results(&args.substance, remaining, risk, dose, decay_time);
    Ok(())
}

fn print_results(substance: &str, remaining: f64, risk: RiskLevel, dose: f64, decay_time: f64) {
    println!("\n{}", "-".repeat(50));
    println!("Results for {substance}:");
    println!("  Remaining mass after decay: {remaining:.2} grams");
    println!("  Risk level: {risk}");
    println!("  Radiation exposure (sieverts): {dose}");
    println!("  Estimated decay time: {decay_time}");
    println!("{}\n", "-".repeat(50));
}

/// Print `msg`, then read one trimmed line. `None` means stdin was closed.
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    msg: &str,
) -> Result<Option<String>> {
    print!("{msg}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

fn interactive(db: &FalloutDb) -> Result<()> {
    let names = db.names();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("{}", "=".repeat(50));
    println!("{:^50}", "Welcome to the Fallout Simulator");
    println!("{}", "=".repeat(50));

    loop {
        println!("\nAvailable Radioactive Substances:");
        for (idx, name) in names.iter().enumerate() {
            println!("  {}. {}", idx + 1, name);
        }
        println!("  q. Quit");

        let Some(choice) = prompt(
            &mut lines,
            "\nEnter the number of the radioactive substance (or 'q' to quit): ",
        )?
        else {
            break;
        };
        if choice.eq_ignore_ascii_case("q") {
            println!("Exiting the Fallout Simulator. Goodbye!");
            break;
        }
        let substance = match choice.parse::<usize>() {
            Ok(i) if (1..=names.len()).contains(&i) => names[i - 1],
            Ok(_) => {
                println!("Invalid selection. Please choose a valid number from the list.");
                continue;
            }
            Err(_) => {
                println!("Invalid input. Please enter a number corresponding to a substance.");
                continue;
            }
        };

        let grams = loop {
            let Some(input) = prompt(
                &mut lines,
                &format!("Enter the amount in grams for {substance}: "),
            )?
            else {
                return Ok(());
            };
            match input.parse::<f64>() {
                Ok(g) if g > 0.0 => break g,
                Ok(_) => println!("Amount must be a positive number."),
                Err(_) => println!("Invalid input. Please enter a numeric value for grams."),
            }
        };

        let half_lives = loop {
            let Some(input) = prompt(&mut lines, "Enter the number of half-lives: ")? else {
                return Ok(());
            };
            match input.parse::<i64>() {
                Ok(n) if n < 0 => println!("Number of half-lives cannot be negative."),
                Ok(n) if n <= u32::MAX as i64 => break n as u32,
                Ok(_) => println!("Number of half-lives is too large."),
                Err(_) => println!("Invalid input. Please enter an integer value for half-lives."),
            }
        };

        let remaining = db.remaining_grams(grams, half_lives);
        let (risk, dose) = db.classify_risk(substance, remaining)?;
        let decay_time = db.decay_time_years(substance, half_lives)?;
        print_results(substance, remaining, risk, dose, decay_time);

        let Some(retry) = prompt(
            &mut lines,
            "Do you want to perform another calculation? (y/n): ",
        )?
        else {
            break;
        };
        if !retry.eq_ignore_ascii_case("y") {
            println!("Thank you for using the Fallout Simulator. Goodbye!");
            break;
        }
    }

    Ok(())
}
