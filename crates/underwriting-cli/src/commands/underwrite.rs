use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use underwriting_core::pipeline::{run_underwriting, UnderwritingConfig};
use underwriting_core::BorrowerProfile;

use super::{AmortizationArg, BorrowerTypeArg, RateTypeArg};
use crate::input;

#[derive(Args)]
pub struct UnderwriteArgs {
    /// Path to the document text (as produced by external PDF extraction)
    #[arg(long)]
    pub document: String,

    #[arg(long, default_value = "salaried")]
    pub borrower_type: BorrowerTypeArg,

    #[arg(long, default_value = "fixed")]
    pub rate_type: RateTypeArg,

    #[arg(long, default_value = "25-years")]
    pub amortization: AmortizationArg,

    /// Assumed monthly mortgage payment
    #[arg(long, default_value = "5090")]
    pub mortgage_payment: Decimal,

    /// Assumed monthly heating cost
    #[arg(long, default_value = "100")]
    pub heat: Decimal,

    /// Stress-test buffer in percentage points
    #[arg(long, default_value = "5.25")]
    pub stress_test_rate: Decimal,
}

pub fn run_underwrite(args: UnderwriteArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let text = input::file::read_text(&args.document)?;

    let config = UnderwritingConfig {
        profile: BorrowerProfile {
            borrower_type: args.borrower_type.into(),
            interest_rate_type: args.rate_type.into(),
            amortization_period: args.amortization.into(),
        },
        mortgage_payment: args.mortgage_payment,
        heat: args.heat,
        stress_test_rate: args.stress_test_rate,
    };

    let result = run_underwriting(&text, &config)?;
    Ok(serde_json::to_value(result)?)
}
