use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::generator::FlagGenerator;
use crate::summary::render_summary;
use crate::writer::{write_document, DEFAULT_OUTPUT_PATH};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Where to write the generated flagd configuration. Overwritten if it already exists
    #[arg(short, long, env = "FLAGD_GENERATOR_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Seed for the rollout and segment randomness. Runs with the same seed produce identical
    /// files; a random seed is used when omitted
    #[arg(long, env = "FLAGD_GENERATOR_SEED")]
    seed: Option<u64>,
}

impl Cli {
    pub fn run() -> Result<()> {
        Cli::parse().execute()
    }

    pub fn execute(&self) -> Result<()> {
        let document = match self.seed {
            Some(seed) => FlagGenerator::seeded(seed).generate(),
            None => FlagGenerator::from_entropy().generate(),
        };

        write_document(&document, &self.output)?;
        print!("{}", render_summary(&self.output));

        Ok(())
    }
}
