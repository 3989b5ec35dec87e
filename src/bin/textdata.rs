//! Corpus preprocessing binary.
//!
//! Reads a text file, builds the vocabulary and shuffled windows, draws a
//! few training batches, and prints random seed slices. Optionally writes
//! the vocabulary to a JSON file.

use clap::Parser;
use ndarray::Axis;
use std::path::PathBuf;
use textdata::data::read_corpus;
use textdata::export::{save_vocabulary, vocabulary_literal};
use textdata::{SampleConfig, TextData};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "textdata",
    about = "Prepare a text corpus for character-level training"
)]
struct Args {
    /// Path to a UTF-8 corpus file
    #[arg(long)]
    corpus: PathBuf,

    /// Data identifier (defaults to the corpus file stem)
    #[arg(long)]
    id: Option<String>,

    /// Characters per training window
    #[arg(long, default_value_t = 40)]
    sample_len: usize,

    /// Stride between window offsets
    #[arg(long, default_value_t = 3)]
    sample_step: usize,

    /// Examples per batch
    #[arg(long, default_value_t = 128)]
    batch_size: usize,

    /// Number of batches to draw
    #[arg(long, default_value_t = 1)]
    batches: usize,

    /// Number of random seed slices to print
    #[arg(long, default_value_t = 3)]
    slices: usize,

    /// Random seed for shuffling and slicing (entropy if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Write the vocabulary to this JSON file
    #[arg(long)]
    export_vocab: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("textdata=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let (name, text) = read_corpus(&args.corpus)?;
    let id = args.id.unwrap_or(name);
    let config = SampleConfig {
        sample_len: args.sample_len,
        sample_step: args.sample_step,
    };

    let mut data = match args.seed {
        Some(seed) => TextData::with_seed(id, text, config, seed)?,
        None => TextData::new(id, text, config)?,
    };

    info!(vocabulary = %vocabulary_literal(data.vocabulary())?, "vocabulary");

    for batch in 0..args.batches {
        let (inputs, targets) = data.next_data_epoch(args.batch_size);
        let hot = inputs.sum_axis(Axis(2)).sum() + targets.sum();
        info!(
            batch,
            inputs = ?inputs.shape(),
            targets = ?targets.shape(),
            hot_cells = hot,
            cursor = data.cursor(),
            "batch"
        );
    }

    for _ in 0..args.slices {
        let (slice, indices) = data.random_slice();
        println!("{slice:?} -> {indices:?}");
    }

    if let Some(path) = &args.export_vocab {
        save_vocabulary(path, data.id(), data.vocabulary())?;
    }

    Ok(())
}
