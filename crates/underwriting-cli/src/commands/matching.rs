use clap::Args;
use serde_json::{json, Value};

use underwriting_core::matching::{match_lender, MatchInput};

use crate::input;

#[derive(Args)]
pub struct MatchLenderArgs {
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_match_lender(args: MatchLenderArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input_data: MatchInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file.json> or stdin required".into());
    };
    let tier = match_lender(&input_data);
    Ok(json!({
        "lender_tier": tier,
        "lender_matched": tier.to_string(),
    }))
}
