//! Suggest queries for a JSON dataset

use rand::{SeedableRng, rngs::StdRng};

use super::CliError;
use crate::recommend_json;

/// Options for the recommend command
#[derive(Debug, Clone, Default)]
pub struct RecommendOptions {
    /// JSON input string
    pub input: Option<String>,
    /// Fixed seed for reproducible output
    pub seed: Option<u64>,
}

/// Generate recommended queries for the input dataset
pub fn execute_recommend(options: &RecommendOptions) -> Result<Vec<String>, CliError> {
    let json = options.input.as_deref().ok_or(CliError::NoInput)?;

    let recommendations = match options.seed {
        Some(seed) => recommend_json(json, &mut StdRng::seed_from_u64(seed))?,
        None => recommend_json(json, &mut rand::rng())?,
    };
    Ok(recommendations)
}
