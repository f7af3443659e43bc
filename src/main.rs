use std::io::Write;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;

use accessdiff::{analyze_batch, Reporter, ResponseRecord};

#[derive(Parser, Debug)]
#[command(
    name = "accessdiff",
    version,
    about = "Offline access-control analyzer for captured HTTP responses",
    override_usage = "accessdiff <captures.json> [options]",
    after_help = "\x1b[1;36mEXAMPLES:\x1b[0m
  Analyze a capture file:          accessdiff captures.json
  Stricter pair matching:          accessdiff captures.json --min-path-similarity 0.9
  Framework-specific guidance:     accessdiff captures.json --framework laravel
  Custom output path:              accessdiff captures.json -o report.json
  Dry-run:                         accessdiff captures.json --dry-run"
)]
pub struct Args {
    /// JSON array of captured responses: [{"url": "...", "body": "...", "identity": "..."}]
    pub captures: String,

    #[arg(
        long,
        default_value_t = 0.8,
        help = "Minimum URL path similarity before a pair is cross-compared"
    )]
    pub min_path_similarity: f64,

    #[arg(short = 'o', long, default_value = "findings.json", help = "Output file path for findings (JSON lines)")]
    pub output: String,

    #[arg(long, help = "Detected target framework (e.g. wordpress, laravel, node-express)")]
    pub framework: Option<String>,

    #[arg(short = 'v', long, default_value_t = false, help = "Show per-pair comparison scores (Verbose Mode)")]
    pub verbose: bool,

    #[arg(long, help = "Load and count captures without analyzing")]
    pub dry_run: bool,
}

fn main() {
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default()
            .default_filter_or(if args.verbose { "debug" } else { "warn" }),
    )
    .init();

    print_banner();

    if let Err(e) = run(&args) {
        eprint!("{}\r\n", format!("[!] {:#}", e).red());
        process::exit(1);
    }
}

fn print_banner() {
    print!("{}\r\n", "ACCESSDIFF :: response-pair access-control analysis".bright_cyan().bold());
    print!("{}\r\n", "──────────────────────────────────────────────────".dimmed());
    std::io::stdout().flush().ok();
}

fn run(args: &Args) -> Result<()> {
    let records = load_captures(&args.captures)?;

    print!(
        "{}\r\n",
        format!("[+] Loaded {} capture(s) from {}", records.len(), args.captures)
            .green()
            .bold()
    );
    std::io::stdout().flush().ok();

    if args.dry_run {
        println!("[DRY RUN] Would analyze {} capture(s)", records.len());
        return Ok(());
    }

    print_config(args);

    print!("\r\n{}\r\n", "[*] Analyzing capture batch...".bright_cyan().bold());
    std::io::stdout().flush().ok();

    let mut reporter = Reporter::new(args.framework.clone());
    for finding in analyze_batch(&records, args.min_path_similarity) {
        reporter.record(finding);
    }

    reporter
        .write_jsonl(&args.output)
        .with_context(|| format!("failed to write '{}'", args.output))?;

    print!("\r\n");
    reporter.print_summary();
    Ok(())
}

/// Reads a capture file: a JSON array of response records.
fn load_captures(path: &str) -> Result<Vec<ResponseRecord>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read '{}'", path))?;
    let records: Vec<ResponseRecord> = serde_json::from_str(&data)
        .with_context(|| format!("'{}' is not a JSON array of captures", path))?;
    Ok(records)
}

/// Prints the analysis configuration summary.
fn print_config(args: &Args) {
    print!("{}\r\n", format!("[+] Min path similarity: {:.2}", args.min_path_similarity).blue());
    print!("{}\r\n", format!("[+] Output:              {}", args.output).blue());
    if let Some(ref framework) = args.framework {
        print!("{}\r\n", format!("[+] Framework:           {}", framework).yellow());
    }
    print!("{}\r\n", "──────────────────────────────────────────────────".dimmed());
    std::io::stdout().flush().ok();
}
