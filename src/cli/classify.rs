//! `classify` command: concept text to a primary color.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{load_output_config, print_json, CliResult};
use crate::color::{classify_concept, concept_description};
use crate::models::ConceptCategory;

/// Pick the primary color for a service concept
#[derive(Debug, Clone, Args)]
pub struct ClassifyArgs {
    /// Free-text concept, e.g. "금융 투자 앱"
    #[arg(value_name = "CONCEPT")]
    pub concept: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ClassifyResponse<'a> {
    concept: &'a str,
    category: Option<ConceptCategory>,
    score: f32,
    color: String,
    fallback: bool,
    description: &'static str,
}

impl ClassifyArgs {
    /// Execute the classify command
    pub fn execute(&self) -> CliResult<()> {
        let output = load_output_config();
        let matched = classify_concept(&self.concept);

        let response = ClassifyResponse {
            concept: &self.concept,
            category: matched.category,
            score: matched.score,
            color: output.format_hex(&matched.color.to_hex()),
            fallback: matched.is_fallback(),
            description: concept_description(&self.concept),
        };

        if self.json {
            return print_json(&response, output.pretty_json);
        }

        println!("Concept:  {}", response.concept);
        match response.category {
            Some(category) => println!("Category: {} (score {:.1})", category.key(), response.score),
            None => println!("Category: (none, fallback color)"),
        }
        println!("Primary:  {}", response.color);
        println!();
        println!("{}", response.description);

        Ok(())
    }
}
