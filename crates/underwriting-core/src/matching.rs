//! Lender-tier matching.
//!
//! Rules are evaluated top to bottom and the first match wins; the order
//! is part of the product contract, not an optimization.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{BorrowerType, LenderTier, Money};

// Prime eligibility thresholds.
const PRIME_MAX_GDS: Decimal = dec!(39);
const PRIME_MAX_TDS: Decimal = dec!(44);
const PRIME_MIN_CREDIT_SCORE: u32 = 680;
// Compared against the raw down-payment amount, matching the qualification
// engine this replaces. A percentage threshold would read the same "20";
// do not reinterpret without a product decision.
const PRIME_MIN_DOWN_PAYMENT: Decimal = dec!(20);

// Community Trust alternative program (self-employed only).
const ALTERNATIVE_MAX_RATIO: Decimal = dec!(46.3);

// B-lender ceiling.
const B_LENDER_MAX_RATIO: Decimal = dec!(50);

/// Inputs to a single tier decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchInput {
    pub gds: Decimal,
    pub tds: Decimal,
    pub credit_score: u32,
    pub down_payment: Money,
    pub borrower_type: BorrowerType,
}

/// Classify the applicant into a lender tier. Pure; no side effects.
pub fn match_lender(input: &MatchInput) -> LenderTier {
    if input.gds <= PRIME_MAX_GDS
        && input.tds <= PRIME_MAX_TDS
        && input.credit_score >= PRIME_MIN_CREDIT_SCORE
        && input.down_payment >= PRIME_MIN_DOWN_PAYMENT
    {
        LenderTier::PrimeLender
    } else if input.gds <= ALTERNATIVE_MAX_RATIO
        && input.tds <= ALTERNATIVE_MAX_RATIO
        && input.borrower_type == BorrowerType::SelfEmployed
    {
        LenderTier::CommunityTrustAlternative
    } else if input.gds <= B_LENDER_MAX_RATIO && input.tds <= B_LENDER_MAX_RATIO {
        LenderTier::BLender
    } else {
        LenderTier::PrivateLenderNeeded
    }
}
