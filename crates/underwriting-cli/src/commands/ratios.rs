use clap::Args;
use serde_json::Value;

use underwriting_core::ratios::{calculate_ratios, RatioInput};

use crate::input;

#[derive(Args)]
pub struct RatiosArgs {
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_ratios(args: RatiosArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input_data: RatioInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input <file.json> or stdin required".into());
    };
    let result = calculate_ratios(&input_data)?;
    Ok(serde_json::to_value(result)?)
}
