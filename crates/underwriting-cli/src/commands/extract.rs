use clap::Args;
use serde_json::Value;

use underwriting_core::extraction::extract_financials;

use super::BorrowerTypeArg;
use crate::input;

#[derive(Args)]
pub struct ExtractArgs {
    /// Path to the document text (as produced by external PDF extraction)
    #[arg(long)]
    pub document: String,

    #[arg(long, default_value = "salaried")]
    pub borrower_type: BorrowerTypeArg,
}

pub fn run_extract(args: ExtractArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let text = input::file::read_text(&args.document)?;
    let financials = extract_financials(&text, args.borrower_type.into())?;
    Ok(serde_json::to_value(financials)?)
}
