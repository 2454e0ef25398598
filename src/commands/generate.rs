use std::path::Path;

use tracing::{debug, info};

use crate::core::{generate, load_reference, Sampler};
use crate::error::WordGenError;
use crate::models::ReseedPolicy;

/// Options for word generation
pub struct GenerateOptions {
    /// Category indices, in concatenation order
    pub indices: Vec<i64>,
    /// Number of words to produce
    pub count: i64,
    /// Optional deterministic seed string
    pub seed: Option<String>,
    /// Reseed cadence for the random number generator
    pub reseed: ReseedPolicy,
}

/// Generate words and print one per line.
///
/// All words are assembled before anything is printed, so an invalid index
/// aborts the run without emitting partial output.
pub fn generate_words(reference: &Path, options: GenerateOptions) -> Result<(), WordGenError> {
    let table = load_reference(reference)?;
    info!(
        "Word generation from reference file [{}]",
        reference.display()
    );

    let mut sampler = Sampler::new(options.seed, options.reseed);
    let words = generate(&table, &options.indices, options.count, &mut sampler)?;
    debug!("Generated {} word(s)", words.len());

    for word in &words {
        println!("{}", word);
    }

    Ok(())
}
