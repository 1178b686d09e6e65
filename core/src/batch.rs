use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use evaluation::scores::win_probability;
use evaluation::{EvalParams, Evaluator};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use utils::{FormatError, Position};

/// One input line worth scoring, with its 1-based line number.
#[derive(Debug, Clone, PartialEq)]
pub struct InputLine {
    pub number: usize,
    pub text: String,
}

pub struct BatchSummary {
    pub scored: usize,
    pub skipped: usize,
}

pub fn run(
    path: &Path,
    params: &EvalParams,
    threads: usize,
    k_factor: f64,
) -> Result<BatchSummary, Box<dyn Error>> {
    let lines = read_positions(BufReader::new(File::open(path)?))?;
    log::info!("Loaded {} positions from {}", lines.len(), path.display());

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads.max(1))
        .build()?;

    let progress = ProgressBar::new(lines.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} positions ({per_sec})")?
            .progress_chars("=> "),
    );

    let evaluator = Evaluator::new(*params);
    let scores = pool.install(|| {
        lines
            .par_iter()
            .map(|line| {
                let score = score_line(&evaluator, line);
                progress.inc(1);
                score
            })
            .collect::<Vec<_>>()
    });
    progress.finish_and_clear();

    let mut out = BufWriter::new(io::stdout().lock());
    let mut summary = BatchSummary {
        scored: 0,
        skipped: 0,
    };

    for (line, score) in lines.iter().zip(scores) {
        match score {
            Ok(score) => {
                writeln!(
                    out,
                    "{:.2}\t{:.4}\t{}",
                    score,
                    win_probability(score, k_factor),
                    line.text
                )?;
                summary.scored += 1;
            }
            Err(e) => {
                log::warn!("Skipping line {}: {}", line.number, e);
                summary.skipped += 1;
            }
        }
    }
    out.flush()?;

    log::info!(
        "Scored {} positions, skipped {}",
        summary.scored,
        summary.skipped
    );

    Ok(summary)
}

fn score_line(evaluator: &Evaluator, line: &InputLine) -> Result<f64, FormatError> {
    let position = Position::parse(&line.text)?;
    Ok(evaluator.evaluate_position(&position))
}

/// Collects non-empty lines, skipping `#` comments.
pub fn read_positions(reader: impl BufRead) -> io::Result<Vec<InputLine>> {
    let mut lines = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        lines.push(InputLine {
            number: idx + 1,
            text: text.to_string(),
        });
    }
    Ok(lines)
}
