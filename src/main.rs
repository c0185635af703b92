use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};

use card_title_parser::batch;
use card_title_parser::localize::{localize, DisplayRecord};
use card_title_parser::parser::{parse_title, ParsedTitle};
use card_title_parser::settings::{OutputFormat, Settings};
use card_title_parser::tables;
use card_title_parser::text::truncate;

#[derive(Parser)]
#[command(name = "card_title_parser", about = "Parse trading-card listing titles into display fields")]
struct Cli {
    /// Settings file (default: ./card_title_parser.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Output format (overrides settings)
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,
    /// Emit raw extracted fields instead of localized labels
    #[arg(long, global = true)]
    raw: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one or more titles given as arguments
    Parse {
        /// Each argument is one title
        #[arg(required = true)]
        titles: Vec<String>,
    },
    /// Parse one title per line from a file or stdin
    Batch {
        /// Input file (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },
    /// Show the recognised vocabulary
    Tables,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;
    if let Some(format) = cli.format {
        settings.format = format;
    }
    if cli.raw {
        settings.display = Some(false);
    }
    tracing::debug!(?settings, "settings loaded");

    match cli.command {
        Commands::Parse { titles } => {
            let parsed: Vec<ParsedTitle> = titles.iter().map(|t| parse_title(t)).collect();
            let stdout = io::stdout();
            emit(stdout.lock(), &settings, &parsed)?;
        }
        Commands::Batch {
            input,
            output,
            no_progress,
        } => {
            let titles = batch::read_titles(input.as_deref())?;
            if titles.is_empty() {
                eprintln!("No titles to parse.");
                return Ok(());
            }

            let pb = (settings.progress && !no_progress).then(|| batch::progress_bar(titles.len()));
            let out = batch::parse_many(&titles, settings.chunk_size(), pb.as_ref());
            if let Some(pb) = pb {
                pb.finish_and_clear();
            }

            match output {
                Some(path) => {
                    let file = fs::File::create(&path)
                        .with_context(|| format!("Failed to create {:?}", path))?;
                    emit(BufWriter::new(file), &settings, &out.records)?;
                }
                None => {
                    let stdout = io::stdout();
                    emit(stdout.lock(), &settings, &out.records)?;
                }
            }

            eprintln!(
                "Parsed {} titles ({} empty) in {}",
                out.stats.total,
                out.stats.empty,
                format_duration(t0.elapsed())
            );
        }
        Commands::Tables => print_tables(),
    }

    Ok(())
}

fn emit<W: Write>(mut w: W, settings: &Settings, parsed: &[ParsedTitle]) -> anyhow::Result<()> {
    let display: Vec<DisplayRecord> = if settings.display() {
        parsed.iter().map(localize).collect()
    } else {
        Vec::new()
    };

    match settings.format {
        OutputFormat::Table => {
            for (i, p) in parsed.iter().enumerate() {
                if i > 0 {
                    writeln!(w)?;
                }
                write_table(&mut w, p, display.get(i))?;
            }
            w.flush()?;
        }
        OutputFormat::Json => {
            if settings.display() {
                serde_json::to_writer_pretty(&mut w, &display)?;
            } else {
                serde_json::to_writer_pretty(&mut w, parsed)?;
            }
            writeln!(w)?;
            w.flush()?;
        }
        OutputFormat::Jsonl => {
            if settings.display() {
                batch::write_jsonl(w, &display)?;
            } else {
                batch::write_jsonl(w, parsed)?;
            }
        }
    }
    Ok(())
}

fn write_table<W: Write>(w: &mut W, p: &ParsedTitle, display: Option<&DisplayRecord>) -> io::Result<()> {
    writeln!(w, "{}", truncate(&p.raw, 96))?;
    writeln!(w, "{}", "-".repeat(40))?;
    match display {
        Some(d) => {
            for (label, value) in d.rows() {
                writeln!(w, "{:<10} | {}", label, value)?;
            }
        }
        None => {
            let rows = [
                ("grader", &p.grader),
                ("grade", &p.grade),
                ("gradeText", &p.grade_text),
                ("year", &p.year),
                ("game", &p.game),
                ("language", &p.language),
                ("series", &p.series),
                ("cardNo", &p.card_no),
                ("cardName", &p.card_name),
                ("finish", &p.finish),
            ];
            for (key, value) in rows {
                writeln!(w, "{:<10} | {}", key, value)?;
            }
        }
    }
    Ok(())
}

fn print_tables() {
    println!("Graders:   {}", tables::GRADERS.join(", "));
    println!("Languages: {}", tables::LANGUAGES.join(", "));

    println!("\n--- Finish ---");
    for (word, label) in tables::finish_labels() {
        let zh = tables::finish_zh(label).unwrap_or("");
        println!("  {:<10} -> {:<14} {}", word, label, zh);
    }

    println!("\n--- Grade text ---");
    for (key, zh) in tables::grade_texts() {
        println!("  {:<16} {}", key, zh);
    }

    println!("\n--- Promo codes ---");
    for (code, zh) in tables::PROMO_CODES {
        println!("  {:<6} {}", code, zh);
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
