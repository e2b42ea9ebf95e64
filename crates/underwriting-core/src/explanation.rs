//! Human-readable underwriting rationale.

use crate::types::{format_currency, BorrowerType, LenderTier, Money, RatioResult};

/// Build the decision rationale for the report.
///
/// The tier is passed in rather than re-derived so the explanation can
/// never disagree with the tier recorded in the summary.
pub fn generate_explanation(
    borrower_type: BorrowerType,
    ratios: &RatioResult,
    credit_score: u32,
    down_payment: Money,
    tier: LenderTier,
) -> String {
    format!(
        "This file was underwritten based on the following factors: \
         Income was calculated based on borrower type ({borrower_type}). \
         GDS and TDS ratios were determined as {gds}% and {tds}% respectively. \
         Credit score of {credit_score} was considered for lender eligibility. \
         A down payment of {down_payment} was factored into LTV calculations. \
         Based on these factors, the best lender match was determined to be: {tier}.",
        gds = ratios.gds,
        tds = ratios.tds,
        down_payment = format_currency(down_payment),
    )
}
