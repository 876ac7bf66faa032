mod csv_import;
mod improve;
mod merge;
mod normalize;
mod overrides;
mod pages;
mod parser;
mod scraper;
mod settings;
mod stats;
mod store;

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use overrides::OverrideTables;
use settings::Settings;
use store::Level;

#[derive(Parser)]
#[command(name = "topik_vocab", about = "Maintenance jobs for the TOPIK vocabulary dataset")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape the koreantopik.com TOPIK II word list into a vocabulary file
    Scrape {
        /// Output file (default: scrape_output setting)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Level assigned to every scraped word
        #[arg(short, long, default_value = "2")]
        level: Level,
        /// Read sub-page links from the index page instead of the fixed list
        #[arg(long)]
        discover: bool,
        /// Only fetch the first N pages
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// Pause between requests in milliseconds (default: delay_ms setting)
        #[arg(long)]
        delay_ms: Option<u64>,
    },
    /// Merge a second vocabulary file into the main one (writes a backup first)
    Merge {
        /// File to merge in (default: scrape_output setting)
        #[arg(short, long)]
        source: Option<PathBuf>,
        /// Main vocabulary file (default: vocab_path setting)
        #[arg(long)]
        vocab: Option<PathBuf>,
        /// Treat every entry of the source file as this level
        #[arg(short, long)]
        level: Option<Level>,
    },
    /// Shorten verbose English translations using the override tables
    Improve {
        /// Main vocabulary file (default: vocab_path setting)
        #[arg(long)]
        vocab: Option<PathBuf>,
        /// Print the changes without writing
        #[arg(long)]
        dry_run: bool,
    },
    /// Counts per level and part of speech, missing translations
    Stats {
        /// Vocabulary file (default: vocab_path setting)
        #[arg(long)]
        vocab: Option<PathBuf>,
    },
    /// Convert a CSV word list (header: word,level,pos,en,zh,ja) to vocabulary JSON
    ImportCsv {
        /// CSV file to read
        input: PathBuf,
        /// Output file (default: topik-vocab-imported.json next to the main file)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Add only words missing from the main vocabulary file
        #[arg(long)]
        merge: bool,
        /// Main vocabulary file (default: vocab_path setting)
        #[arg(long)]
        vocab: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load()?;
    info!(settings = ?settings, "Settings loaded");

    let result = match cli.command {
        Commands::Scrape {
            output,
            level,
            discover,
            limit,
            delay_ms,
        } => {
            let output = output.unwrap_or_else(|| settings.scrape_output.clone());
            run_scrape(&settings, &output, level, discover, limit, delay_ms).await
        }
        Commands::Merge {
            source,
            vocab,
            level,
        } => {
            let source = source.unwrap_or_else(|| settings.scrape_output.clone());
            let vocab = vocab.unwrap_or_else(|| settings.vocab_path.clone());
            run_merge(&vocab, &source, level)
        }
        Commands::Improve { vocab, dry_run } => {
            let vocab = vocab.unwrap_or_else(|| settings.vocab_path.clone());
            run_improve(&vocab, dry_run)
        }
        Commands::Stats { vocab } => {
            let vocab = vocab.unwrap_or_else(|| settings.vocab_path.clone());
            let entries = store::load(&vocab)?;
            println!("{} ({} entries)\n", vocab.display(), entries.len());
            stats::summarize(&entries).print();
            Ok(())
        }
        Commands::ImportCsv {
            input,
            output,
            merge,
            vocab,
        } => {
            let vocab = vocab.unwrap_or_else(|| settings.vocab_path.clone());
            let output = output.unwrap_or_else(|| vocab.with_file_name("topik-vocab-imported.json"));
            run_import_csv(&input, &output, merge.then_some(vocab.as_path()))
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

async fn run_scrape(
    settings: &Settings,
    output: &Path,
    level: Level,
    discover: bool,
    limit: Option<usize>,
    delay_ms: Option<u64>,
) -> Result<()> {
    println!("TOPIK II 3900 Vocabulary Scraper");
    println!("================================\n");

    let mut fetcher = scraper::Fetcher::new(settings)?;
    if let Some(ms) = delay_ms {
        fetcher = fetcher.with_delay(Duration::from_millis(ms));
    }

    let mut urls = if discover {
        pages::discover_page_urls(&fetcher).await
    } else {
        pages::page_urls()
    };
    if let Some(n) = limit {
        urls.truncate(n);
    }

    println!("Fetching {} sub-pages...", urls.len());
    let (pairs, stats) = scraper::scrape_pages(&fetcher, &urls).await;
    println!(
        "Fetched {} pages ({} ok, {} errors, {} without words)",
        stats.total, stats.ok, stats.errors, stats.empty
    );

    let pairs = scraper::require_words(pairs)?;
    println!("Total word pairs collected: {}", pairs.len());

    let entries = normalize::words_to_entries(&pairs, level);
    println!("Unique vocab entries: {}", entries.len());

    store::save(output, &entries)?;
    println!("\nSaved to: {}", output.display());

    println!("\nSample entries:");
    for e in entries.iter().take(5) {
        println!(
            "  {} ({}) -> {}",
            e.word,
            e.pos.as_deref().unwrap_or("-"),
            e.translations.en
        );
    }
    Ok(())
}

fn run_merge(vocab: &Path, source: &Path, level: Option<Level>) -> Result<()> {
    let old = store::load(vocab)?;
    let mut new = store::load(source)?;
    println!("Old vocab: {} entries", old.len());
    println!("New vocab: {} entries", new.len());

    if let Some(level) = level {
        merge::apply_level(&mut new, level);
    }

    for o in merge::overlap(&old, &new) {
        if o.old == 0 && o.new == 0 {
            continue;
        }
        println!(
            "\nLevel {}: old {}, new {}, in both {}, only new {}, only old {}",
            o.level, o.old, o.new, o.both, o.only_new, o.only_old
        );
    }

    let (merged, stats) = merge::merge(old, new);
    println!("\nMerge stats:");
    println!("  Updated (in both): {}", stats.updated);
    println!("  Added (new only):  {}", stats.added);
    println!("  Kept (old only):   {}", stats.kept_old);

    println!("\nFinal total: {} entries", merged.len());
    for level in Level::ALL {
        let n = merged.iter().filter(|e| e.level == level).count();
        println!("  Level {}: {}", level, n);
    }

    let backup = store::backup(vocab)?;
    println!("\nBacked up old file to: {}", backup.display());

    store::save(vocab, &merged)?;
    println!("Written to: {}", vocab.display());

    let verify = store::load(vocab).context("Re-reading merged file failed")?;
    println!("\nVerification - loaded {} entries OK", verify.len());
    report_missing_english(&verify);
    Ok(())
}

fn run_improve(vocab: &Path, dry_run: bool) -> Result<()> {
    let mut entries = store::load(vocab)?;
    let tables = OverrideTables::builtin();

    let changes = improve::improve_entries(&mut entries, &tables);
    for c in &changes {
        println!("  {}: \"{}\" -> \"{}\"", c.word, c.before, c.after);
    }
    println!("\nTotal changed: {}", changes.len());

    if dry_run {
        println!("Dry run, nothing written.");
        return Ok(());
    }
    store::save(vocab, &entries)?;
    println!("Saved to {}", vocab.display());
    Ok(())
}

fn run_import_csv(input: &Path, output: &Path, merge_into: Option<&Path>) -> Result<()> {
    println!("Reading CSV file: {}", input.display());
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let imported = csv_import::parse_csv(&text);
    println!("Parsed {} words", imported.len());

    let mut vocab = match merge_into {
        Some(main) if main.exists() => {
            let existing = store::load(main)?;
            let merged = csv_import::merge_new_words(existing, imported);
            println!("Merged with {}: {} words", main.display(), merged.len());
            merged
        }
        _ => imported,
    };
    csv_import::sort_by_level_then_word(&mut vocab);

    store::save(output, &vocab)?;
    println!("Output saved to: {}\n", output.display());
    stats::summarize(&vocab).print();
    Ok(())
}

fn report_missing_english(entries: &[store::VocabEntry]) {
    let missing = store::missing_english(entries);
    println!("Entries with empty English translation: {}", missing.len());
    for e in missing.iter().take(5) {
        println!("  {}: {:?}", e.word, e.translations);
    }
}

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
