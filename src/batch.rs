use std::fs;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::parser::{parse_title, ParsedTitle};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchStats {
    pub total: usize,
    /// Titles where nothing but `raw` was recovered.
    pub empty: usize,
}

#[derive(Debug, Clone, Default)]
pub struct BatchOutput {
    pub records: Vec<ParsedTitle>,
    pub stats: BatchStats,
}

/// One title per line. Lines that are not valid UTF-8 become empty titles so
/// line N of the output always answers line N of the input. Any other read
/// error stops the batch.
pub fn read_titles(input: Option<&Path>) -> Result<Vec<String>> {
    match input {
        Some(path) => {
            let file = fs::File::open(path).map_err(|source| Error::Read {
                path: path.to_path_buf(),
                source,
            })?;
            collect_lines(BufReader::new(file), path)
        }
        None => collect_lines(io::stdin().lock(), Path::new("<stdin>")),
    }
}

fn collect_lines<R: BufRead>(reader: R, path: &Path) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        match line {
            Ok(line) => lines.push(line),
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                warn!("Skipping unreadable line {}: {}", i + 1, e);
                lines.push(String::new());
            }
            Err(source) => {
                return Err(Error::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }
    Ok(lines)
}

pub fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);
    pb
}

/// Parse every title in parallel chunks, keeping input order.
pub fn parse_many(titles: &[String], chunk_size: usize, pb: Option<&ProgressBar>) -> BatchOutput {
    let mut out = BatchOutput {
        records: Vec::with_capacity(titles.len()),
        stats: BatchStats::default(),
    };

    for chunk in titles.chunks(chunk_size.max(1)) {
        let parsed: Vec<ParsedTitle> = chunk.par_iter().map(|t| parse_title(t)).collect();
        out.stats.empty += parsed.iter().filter(|p| p.is_empty()).count();
        out.records.extend(parsed);
        if let Some(pb) = pb {
            pb.inc(chunk.len() as u64);
        }
    }

    out.stats.total = out.records.len();
    info!(
        "Parsed {} titles ({} without any recognised field)",
        out.stats.total, out.stats.empty
    );
    out
}

/// Write one JSON object per line.
pub fn write_jsonl<W: Write, T: Serialize>(mut writer: W, records: &[T]) -> Result<()> {
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}
