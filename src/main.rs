use std::env;
use std::fs;
use std::path::PathBuf;

use chrono::Local;
use clap::{Parser, ValueEnum};
use restamp::RestampError;
use restamp::apply::{FileEntryTimes, apply_to_tree};
use restamp::config::{self, PlannerConfig};
use restamp::dry_run::{self, ExportFormat};
use restamp::plan;
use restamp::timeline::TimelineStrategy;

#[derive(Parser)]
#[command(name = "restamp")]
#[command(
    about = "Deterministically set folder timestamps by name and category, newest to oldest",
    long_about = None
)]
struct Cli {
    /// Top-level directory containing the root folders to timestamp.
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Do not modify timestamps; write restamp-dryrun.[csv|tsv] in the
    /// current working directory instead.
    #[arg(long)]
    dry_run: bool,

    /// File format for the --dry-run output.
    #[arg(long, value_enum, default_value_t = Format::Tsv)]
    dry_run_format: Format,

    /// Extra logging.
    #[arg(long)]
    verbose: bool,

    /// Snap all times to even seconds (zero sub-second) to match FAT/VFAT
    /// mtime precision.
    #[arg(long)]
    fat_safe: bool,

    /// Signed seconds added to every planned timestamp, to counter a known
    /// clock skew on the playback device.
    #[arg(long, default_value_t = 0)]
    bias_seconds: i64,

    /// Timeline strategy.
    #[arg(long, value_enum, default_value_t = Timeline::ForwardAnchor)]
    timeline: Timeline,

    /// Spacing in seconds between items inside a category.
    #[arg(long, default_value_t = config::DEFAULT_SECONDS_BETWEEN_ITEMS)]
    seconds_between_items: u32,

    /// Slot budget per category.
    #[arg(long, default_value_t = config::DEFAULT_SLOTS_PER_CATEGORY)]
    slots_per_category: u32,

    /// Apply a deterministic 0/1 second nudge to break same-slot ties.
    #[arg(long, overrides_with = "no_stable_nudge")]
    stable_nudge: bool,

    /// Disable the deterministic 0/1 second nudge (the default).
    #[arg(long)]
    no_stable_nudge: bool,

    /// JSON file mapping category keys to extra bare names treated as
    /// members of that category, merged with the built-in table.
    #[arg(long)]
    aliases: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Csv,
    Tsv,
}

#[derive(Clone, Copy, ValueEnum)]
enum Timeline {
    FixedAnchor,
    ForwardAnchor,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), RestampError> {
    let mut config = PlannerConfig::default();
    config.seconds_between_items = cli.seconds_between_items;
    config.slots_per_category = cli.slots_per_category;
    config.strategy = match cli.timeline {
        Timeline::FixedAnchor => TimelineStrategy::FixedAnchor,
        Timeline::ForwardAnchor => TimelineStrategy::ForwardAnchor,
    };
    config.stable_nudge = cli.stable_nudge && !cli.no_stable_nudge;
    config.fat_safe = cli.fat_safe;
    config.bias_seconds = cli.bias_seconds;

    if let Some(path) = &cli.aliases {
        let text = fs::read_to_string(path)?;
        config.merge_alias_overlay(&text)?;
    }
    config.validate()?;

    let base_path = cli
        .path
        .canonicalize()
        .map_err(|_| RestampError::Config(format!("Not a directory: {}", cli.path.display())))?;
    if !base_path.is_dir() {
        return Err(RestampError::Config(format!(
            "Not a directory: {}",
            base_path.display()
        )));
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(&base_path)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
    }
    names.sort();

    if cli.verbose {
        println!(
            "[restamp] Found {} root folders under {}",
            names.len(),
            base_path.display()
        );
    }

    let entries = plan::build_plan(&names, &config);

    if cli.dry_run {
        let format = match cli.dry_run_format {
            Format::Csv => ExportFormat::Csv,
            Format::Tsv => ExportFormat::Tsv,
        };
        let out_path = dry_run::write_plan(&entries, &base_path, &env::current_dir()?, format)?;
        println!(
            "[restamp] Dry-run complete. {} root folders planned (newest to oldest).",
            entries.len()
        );
        println!("[restamp] Plan written to: {}", out_path.display());
        return Ok(());
    }

    let setter = FileEntryTimes;
    for entry in &entries {
        let full = base_path.join(&entry.name);
        if cli.verbose {
            println!(
                "[restamp] === {} [{}] cat={} slot={} offset={}s -> {} (UTC {}) ===",
                entry.name,
                entry.label,
                entry.rank,
                entry.slot,
                entry.offset_seconds,
                entry
                    .instant
                    .with_timezone(&Local)
                    .format("%m/%d/%Y %H:%M:%S %Z"),
                entry.instant.format("%Y-%m-%d %H:%M:%S")
            );
        }
        apply_to_tree(&setter, &full, entry.instant, cli.verbose);
    }

    Ok(())
}
