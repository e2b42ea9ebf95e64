//! End-to-end underwriting pipeline.
//!
//! One synchronous pass: extract fields, compute stress-tested ratios,
//! match a lender tier, generate the rationale, assemble the summary.
//! Stateless; concurrent runs over different documents need no
//! coordination.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::UnderwritingError;
use crate::explanation::generate_explanation;
use crate::extraction::extract_financials;
use crate::matching::{match_lender, MatchInput};
use crate::ratios::{calculate_ratios, total_monthly_debts, RatioInput};
use crate::types::{
    format_currency, format_percent, with_metadata, BorrowerProfile, ComputationOutput, Money,
    Rate, ReportFields, UnderwritingSummary,
};
use crate::UnderwritingResult;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Pipeline configuration. Payment and heat are assumed constants supplied
/// by the caller, not derived from the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnderwritingConfig {
    pub profile: BorrowerProfile,
    pub mortgage_payment: Money,
    pub heat: Money,
    pub stress_test_rate: Rate,
}

impl Default for UnderwritingConfig {
    fn default() -> Self {
        Self {
            profile: BorrowerProfile::default(),
            mortgage_payment: dec!(5090),
            heat: dec!(100),
            stress_test_rate: dec!(5.25),
        }
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Run the full underwriting pipeline over one document's text.
///
/// Defaulted fields (a credit score or down payment that no pattern
/// matched) are reported as warnings on the envelope, not errors. Income
/// that extracts to zero is fatal: the ratio formula divides by it.
pub fn run_underwriting(
    text: &str,
    config: &UnderwritingConfig,
) -> UnderwritingResult<ComputationOutput<UnderwritingSummary>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let financials = extract_financials(text, config.profile.borrower_type)?;

    if financials.income <= Money::ZERO {
        return Err(UnderwritingError::DivisionByZero {
            context: "gross income (no income pattern matched in document)".into(),
        });
    }
    if financials.credit_score == 0 {
        warnings.push("no credit score pattern matched; credit score defaulted to 0".into());
    }
    if financials.down_payment == Money::ZERO {
        warnings.push("no down payment pattern matched; down payment defaulted to 0".into());
    }
    if financials.liabilities.is_empty() {
        warnings.push("no liabilities found in document".into());
    }

    let ratios = calculate_ratios(&RatioInput {
        gross_income: financials.income,
        mortgage_payment: config.mortgage_payment,
        heat: config.heat,
        other_debts: total_monthly_debts(&financials.liabilities),
        stress_test_rate: config.stress_test_rate,
    })?;

    let lender_tier = match_lender(&MatchInput {
        gds: ratios.gds,
        tds: ratios.tds,
        credit_score: financials.credit_score,
        down_payment: financials.down_payment,
        borrower_type: config.profile.borrower_type,
    });

    let explanation = generate_explanation(
        config.profile.borrower_type,
        &ratios,
        financials.credit_score,
        financials.down_payment,
        lender_tier,
    );

    let report = ReportFields {
        borrower_type: config.profile.borrower_type.to_string(),
        income: format_currency(financials.income),
        credit_score: financials.credit_score.to_string(),
        down_payment: format_currency(financials.down_payment),
        gds: format_percent(ratios.gds),
        tds: format_percent(ratios.tds),
        lender_matched: lender_tier.to_string(),
    };

    let summary = UnderwritingSummary {
        profile: config.profile,
        financials,
        ratios,
        lender_tier,
        explanation,
        report,
    };

    Ok(with_metadata(
        "Stress-tested GDS/TDS debt-service ratios with ordered lender-tier rules",
        config,
        warnings,
        start.elapsed().as_micros() as u64,
        summary,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
