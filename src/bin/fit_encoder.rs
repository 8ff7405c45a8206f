//! Fits the one-hot encoder for the five nominal listing columns on a
//! training CSV and writes it out as JSON.
//!
//! Run by hand; any problem with the input stops it with the error shown.

use anyhow::Context;
use clap::Parser;
use price_predictor::encoder::{Dataset, OneHotEncoder};
use price_predictor::logging;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Parser)]
#[command(about = "Fit the categorical encoder on a training dataset")]
struct Args {
    /// Training data with a header row
    #[arg(long, default_value = "airbnb_data.csv")]
    data: PathBuf,

    /// Where to write the fitted encoder
    #[arg(long, default_value = "encoder.json")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let args = Args::parse();

    let data = Dataset::from_csv_path(&args.data)
        .with_context(|| format!("loading {}", args.data.display()))?;
    info!(rows = data.len(), columns = data.headers().len(), "loaded training data");

    let encoder = OneHotEncoder::fit(&data).context("fitting encoder")?;
    for column in &encoder.columns {
        info!(column = %column.name, categories = column.categories.len(), "fitted");
    }

    debug!(features = ?encoder.feature_names_out(), "output columns");

    encoder
        .save(&args.out)
        .with_context(|| format!("writing {}", args.out.display()))?;

    info!(path = %args.out.display(), width = encoder.width(), "Encoder saved successfully!");
    Ok(())
}
