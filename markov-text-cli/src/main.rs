use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use env_logger::Env;
use log::{debug, info};
use markov_text_core::io::read_source;
use markov_text_core::{ChainTable, GenerationInput, Generator};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate Markov text from a source file", long_about = None)]
struct Cli {
	/// Path of the source text
	source: PathBuf,

	/// Seed of the random generator, for reproducible output
	#[arg(long, value_name = "SEED")]
	seed: Option<u64>,

	/// Number of texts to generate, one per line
	#[arg(short = 'n', long, value_name = "COUNT", default_value_t = 1)]
	count: usize,

	/// Stop each text after this many words
	#[arg(long, value_name = "WORDS")]
	max_words: Option<usize>,

	/// Increase verbosity (-v, -vv)
	#[arg(short = 'v', long, action = ArgAction::Count)]
	verbose: u8,

	/// Decrease verbosity (-q, -qq)
	#[arg(short = 'q', long, action = ArgAction::Count)]
	quiet: u8,
}

fn main() -> Result<()> {
	let cli = Cli::parse();
	init_logging(cli.verbose, cli.quiet);

	let text = read_source(&cli.source)
		.with_context(|| format!("unable to read source text {}", cli.source.display()))?;
	let table = ChainTable::from_text(&text);
	info!(
		"loaded {}: {} distinct bigrams from {} observations",
		cli.source.display(),
		table.len(),
		table.observations()
	);

	let mut input = GenerationInput::default();
	input.seed = cli.seed;
	input.set_count(cli.count)?;
	input.set_max_words(cli.max_words)?;

	let generator = Generator::new(&table);
	let texts = generator
		.generate_many(&input)
		.with_context(|| format!("unable to generate text from {}", cli.source.display()))?;
	debug!("generated {} text(s)", texts.len());

	let stdout = io::stdout();
	let mut out = stdout.lock();
	for text in texts {
		writeln!(out, "{text}")?;
	}
	out.flush()?;
	Ok(())
}

fn init_logging(verbose: u8, quiet: u8) {
	use log::LevelFilter;

	let level = match (quiet, verbose) {
		(0, 0) => LevelFilter::Info,
		(0, 1) => LevelFilter::Debug,
		(0, _) => LevelFilter::Trace,
		(1, _) => LevelFilter::Warn,
		_ => LevelFilter::Error,
	};

	let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
	builder.format_timestamp_millis();
	builder.filter_level(level);
	let _ = builder.try_init();
}
