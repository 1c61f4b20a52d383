//! Trikona CLI
//!
//! Usage:
//!   trikona triangle --dob 29-10-2001            # Single-person report
//!   trikona yearly --dob 29-10-2001 --year 2025  # Yearly cycle report
//!   trikona monthly --dob 29-10-2001 --year 2025 # Monthly cycle report
//!   trikona daily --dob 29-10-2001 --day today   # Daily cycle report
//!   trikona combined --left DOB --right DOB      # Two-person combination
//!   trikona serve                                # HTTP API server
//!   trikona triangle --dob ... --json            # JSON output

use clap::{Parser, Subcommand};
use colored::Colorize;

use trikona::core::{
    build_reads, combine, daily_report, monthly_report, person_report, resolve_day,
    run_server, scan_special_signals, summarize_polarity, triangle_from_dob,
    yearly_report, CycleReport, PersonReport,
};
use trikona::types::{SignalBundle, Triangle};
use trikona::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "trikona",
    version = VERSION,
    about = "Trikona - deterministic numerology triangle engine",
    long_about = "Trikona computes a deterministic numerology triangle from a date of\n\
                  birth, combines it with time-cycle driver triangles, derives read\n\
                  codes, and scans the result for special signal patterns.\n\n\
                  All output is recomputed on every call; nothing is stored."
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Single-person report: triangle, reads, polarity, signals
    Triangle {
        /// Date of birth (DD-MM-YYYY or YYYY-MM-DD)
        #[arg(short, long)]
        dob: String,
    },
    /// Yearly cycle report: DOB ⊕ year-only driver
    Yearly {
        #[arg(short, long)]
        dob: String,
        /// Target year
        #[arg(short, long)]
        year: u32,
    },
    /// Monthly cycle report: DOB ⊕ month-year driver
    Monthly {
        #[arg(short, long)]
        dob: String,
        #[arg(short, long)]
        year: u32,
        /// Override the DOB month with a selected month (1-12)
        #[arg(short, long)]
        month: Option<u32>,
    },
    /// Daily cycle report: DOB ⊕ a calendar day
    Daily {
        #[arg(short, long)]
        dob: String,
        /// Day date or "today" (default: today)
        #[arg(long)]
        day: Option<String>,
    },
    /// Combine two DOB triangles (relationship context)
    Combined {
        /// Left person's DOB
        #[arg(long)]
        left: String,
        /// Right person's DOB or "today"
        #[arg(long, default_value = "today")]
        right: String,
    },
    /// Run the HTTP API server
    Serve {
        /// Server address
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: String,
    },
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    let result = match &args.command {
        Command::Triangle { dob } => run_triangle(dob, &args),
        Command::Yearly { dob, year } => run_cycle(yearly_report(dob, *year), &args),
        Command::Monthly { dob, year, month } => {
            run_cycle(monthly_report(dob, *year, *month), &args)
        }
        Command::Daily { dob, day } => {
            run_cycle(daily_report(dob, day.as_deref()), &args)
        }
        Command::Combined { left, right } => run_combined(left, right, &args),
        Command::Serve { addr } => {
            if let Err(e) = run_server(addr).await {
                eprintln!("Server error: {}", e);
                std::process::exit(1);
            }
            Ok(())
        }
    };

    if let Err(msg) = result {
        eprintln!("{}", msg.red());
        std::process::exit(1);
    }
}

/// Single-person report
fn run_triangle(dob: &str, args: &Args) -> Result<(), String> {
    let report = person_report(dob).map_err(|e| e.to_string())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report).unwrap());
        return Ok(());
    }

    print_header(&format!("Triangle for {}", report.dob));
    print_triangle(&report.values);
    print_person_summary(&report);
    print_signals(report.special_signals.as_ref());
    Ok(())
}

/// Shared path for the three cycle commands
fn run_cycle(
    report: Result<CycleReport, trikona::core::InvalidDateFormat>,
    args: &Args,
) -> Result<(), String> {
    let report = report.map_err(|e| e.to_string())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report).unwrap());
        return Ok(());
    }

    print_header(&format!(
        "{} report: {} ⊕ {}",
        report.feature, report.dob, report.right_label
    ));
    println!("{}", "Combined (active pattern):".bold());
    print_triangle(&report.combined.values);
    println!(
        "  glance: G={} EF={} P={}",
        report.glance.g, report.glance.ef, report.glance.p
    );
    println!(
        "  polarity: {} (+{} -{} ={})",
        report.polarity.balance.to_string().cyan(),
        report.polarity.positive,
        report.polarity.negative,
        report.polarity.neutral
    );
    print_signals(report.special_signals.as_ref());
    Ok(())
}

/// Two-person combination scanned in the relationship context
fn run_combined(left: &str, right: &str, args: &Args) -> Result<(), String> {
    let left_t = triangle_from_dob(left).map_err(|e| e.to_string())?;
    let (right_t, right_label) =
        resolve_day(Some(right)).map_err(|e| e.to_string())?;
    let combined = combine(&left_t, &right_t);
    let reads = build_reads(&combined);
    let polarity = summarize_polarity(&combined);
    let signals = scan_special_signals("relationship", &combined, Some(&reads));

    if args.json {
        let out = serde_json::json!({
            "left": left_t,
            "right": right_t,
            "right_label": right_label,
            "combined": combined,
            "reads": reads,
            "polarity": polarity,
            "special_signals": signals,
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap());
        return Ok(());
    }

    print_header(&format!("Combined: {} ⊕ {}", left, right_label));
    print_triangle(&combined);
    println!(
        "  polarity: {} (+{} -{} ={})",
        polarity.balance.to_string().cyan(),
        polarity.positive,
        polarity.negative,
        polarity.neutral
    );
    print_signals(signals.as_ref());
    Ok(())
}

fn print_header(title: &str) {
    println!();
    println!("{}", format!("=== Trikona v{} - {} ===", VERSION, title).bold());
    println!();
}

/// Render the four tiers as labeled rows
fn print_triangle(t: &Triangle) {
    let row = |cells: &[(char, u8)]| {
        cells
            .iter()
            .map(|(l, v)| format!("{}={}", l.to_string().dimmed(), v))
            .collect::<Vec<_>>()
            .join("  ")
    };
    let flat = t.flatten();
    println!("  inputs        {}", row(&flat[0..4]));
    println!("  layer1        {}", row(&flat[4..7]));
    println!("  second layer  {}", row(&flat[7..13]));
    println!("  third layer   {}", row(&flat[13..18]));
    println!(
        "  core          EF={} G={} P={}",
        t.core.core_pair.to_string().green(),
        t.core.g.to_string().green(),
        t.core.p_outcome.to_string().green()
    );
}

fn print_person_summary(report: &PersonReport) {
    println!(
        "  mulank={} bhagyank={}",
        report.mulank.to_string().yellow(),
        report.bhagyank.to_string().yellow()
    );
    println!(
        "  polarity: {} (+{} -{} ={})",
        report.polarity.balance.to_string().cyan(),
        report.polarity.positive,
        report.polarity.negative,
        report.polarity.neutral
    );
}

fn print_signals(signals: Option<&SignalBundle>) {
    match signals {
        None => println!("  signals: none"),
        Some(bundle) => {
            println!("  signals: {}", bundle.tags.join(", ").magenta());
            for note in &bundle.notes {
                println!("    - {}", note);
            }
            if let Some(r18) = &bundle.r18 {
                println!(
                    "    18/81 downfall: {} occurrence(s), ~{} total",
                    r18.occurrences, r18.estimated_total_downfalls
                );
            }
        }
    }
}
