use std::fs::File;
use std::io::{BufWriter, IsTerminal};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_subscriber::EnvFilter;

use wordsum::io_utils::{cli_hint, io_cli_error, simple_cli_error, wordsum_cli_error};
use wordsum::{Cipher, CsvEmitter, SearchConfig, SumFinder, WordList, WordsumError};

/// Find word triples whose cipher encodings add up.
#[derive(Parser)]
struct Args {
    /// Path to word list used
    #[arg(short, long, default_value = "words.txt")]
    word_list: PathBuf,
    /// Max value of the sum (in base 10)
    #[arg(short, long, default_value_t = 200_000, allow_negative_numbers = true)]
    max: i64,
    /// Cipher key of distinct letters
    #[arg(short, long, default_value = "wanderlust")]
    key: String,
    /// Start the digit assignment with 0 instead of ending with it
    #[arg(short = '0', long)]
    leading0: bool,
    /// File path to output CSV [default: <key>-<max>[-0].csv]
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Print a JSON run summary to stdout
    #[arg(long)]
    json: bool,
    /// Hide the progress spinner
    #[arg(long)]
    quiet: bool,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> SearchConfig {
        SearchConfig {
            word_list: self.word_list.clone(),
            max: self.max,
            key: self.key.clone(),
            leading0: self.leading0,
            output: self.output.clone(),
        }
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);
    let cfg = args.config();
    let output_path = cfg.output_path();
    if output_path == cfg.word_list {
        let err = WordsumError::Config("output path equals the word list path".into());
        return Err(wordsum_cli_error("checking arguments", &output_path, err).into());
    }

    let start = Instant::now();
    let words = WordList::load(&cfg.word_list)
        .map_err(|e| wordsum_cli_error("loading word list", &cfg.word_list, e))?;
    info!(words = words.len(), path = %cfg.word_list.display(), "word list loaded");

    let cipher = Cipher::from_key(&cfg.key, cfg.leading0)
        .map_err(|e| simple_cli_error(&format!("error creating cipher: {}", cli_hint(&e))))?;
    info!(key = %cfg.key, base = cipher.base(), leading0 = cfg.leading0, "cipher ready");

    let file = File::create(&output_path)
        .map_err(|e| io_cli_error("creating csv file", &output_path, e))?;
    let mut emitter = CsvEmitter::new(BufWriter::new(file))
        .map_err(|e| wordsum_cli_error("writing csv header", &output_path, e))?;

    let spinner = if args.quiet || args.json {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner} {elapsed} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.enable_steady_tick(Duration::from_millis(120));
        pb
    };
    spinner.set_message(format!("searching sums below {}", cfg.max));

    let mut write_err: Option<WordsumError> = None;
    let stats = SumFinder::new(&cipher, &words).run(cfg.max, |t| {
        if write_err.is_some() {
            return;
        }
        match emitter.emit(t) {
            Ok(()) => {
                if emitter.rows() % 1_000 == 0 {
                    spinner.set_message(format!("{} triplets", emitter.rows()));
                }
            }
            Err(e) => write_err = Some(e),
        }
    });
    spinner.finish_and_clear();
    if let Some(e) = write_err {
        return Err(wordsum_cli_error("writing csv row", &output_path, e).into());
    }
    let rows = emitter
        .finish()
        .map_err(|e| wordsum_cli_error("flushing csv", &output_path, e))?;

    let elapsed = start.elapsed();
    info!(
        scanned = stats.scanned,
        valid = stats.valid,
        triplets = rows,
        output = %output_path.display(),
        elapsed_ms = elapsed.as_millis() as u64,
        "search finished"
    );

    if args.json {
        let out_json = serde_json::json!({
            "key": cfg.key,
            "base": cipher.base(),
            "max": cfg.max,
            "leading0": cfg.leading0,
            "triplets": rows,
            "stats": stats,
            "output": output_path.display().to_string(),
            "elapsed_ms": elapsed.as_millis(),
        });
        println!("{}", serde_json::to_string_pretty(&out_json)?);
    }
    Ok(())
}
