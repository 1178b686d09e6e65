mod args;
mod batch;

use args::{Args, Command};
use clap::Parser;
use evaluation::{EvalParams, Evaluator, HCE};
use log::{debug, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode, WriteLogger};
use std::error::Error;
use std::fs::File;
use utils::Position;

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;
    let params = build_params(&args.overrides)?;

    match args.command {
        Command::Eval { fen, breakdown } => {
            eval(&fen.join(" "), &params, breakdown)?;
        }
        Command::Batch {
            file,
            threads,
            k_factor,
        } => {
            let threads = threads.unwrap_or_else(num_cpus::get);
            debug!("Scoring {} on {} threads", file.display(), threads);
            let summary = batch::run(&file, &params, threads, k_factor)?;
            if summary.scored == 0 && summary.skipped > 0 {
                return Err(format!("no position in {} could be scored", file.display()).into());
            }
        }
        Command::Params => {
            let vector = params.to_vector();
            for (name, value) in EvalParams::names().iter().zip(vector) {
                println!("{:<28} {}", name, value);
            }
        }
    }

    Ok(())
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();

    if let Some(log_file) = &args.log_file {
        WriteLogger::init(
            LevelFilter::Debug,
            Config::default(),
            File::create(log_file)?,
        )?;
    } else {
        let level = if args.verbose {
            LevelFilter::Info
        } else {
            LevelFilter::Warn
        };
        TermLogger::init(
            level,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        )?;
    }

    Ok(args)
}

fn build_params(overrides: &[(String, String)]) -> Result<EvalParams, Box<dyn Error>> {
    let mut params = EvalParams::default();
    for (name, value) in overrides {
        params.set(name, value)?;
        debug!("Set parameter '{}' to '{}'", name, value);
    }
    Ok(params)
}

fn eval(fen: &str, params: &EvalParams, breakdown: bool) -> Result<(), Box<dyn Error>> {
    let position = Position::parse(fen)?;
    let evaluator = Evaluator::new(*params);
    debug!("Scoring with {}", evaluator.name());

    if breakdown {
        let parts = evaluator.breakdown(&position);
        println!("phase     {:.4}", parts.phase);
        println!("material  {:.2}", parts.material);
        println!("castling  {:.2}", parts.castling);
        println!("pawns     {:.2}", parts.pawns);
        println!("white     {:.2}", parts.total());
    }

    println!("{}", evaluator.evaluate_position(&position));
    Ok(())
}
