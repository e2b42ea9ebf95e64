//! Stress-tested GDS/TDS debt-service ratios.
//!
//! The formula mirrors the qualification engine this system replaces:
//! gross income is the annual figure while payment, heat, and other debts
//! are monthly, with no annualization step. Conventional GDS/TDS would
//! multiply the monthly costs by 12 before dividing; downstream tier
//! thresholds are calibrated against this formula, so it must be
//! reproduced exactly rather than corrected.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::UnderwritingError;
use crate::types::{Liability, Money, Rate, RatioResult};
use crate::UnderwritingResult;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatioInput {
    /// Annual gross income. Must be positive.
    pub gross_income: Money,
    /// Nominal monthly mortgage payment before the stress-test buffer.
    pub mortgage_payment: Money,
    /// Monthly heating/utility cost.
    pub heat: Money,
    /// Sum of monthly payments on all other debts.
    pub other_debts: Money,
    /// Stress-test buffer in percentage points (5.25 = +5.25%).
    pub stress_test_rate: Rate,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Sum of monthly payments across a liability list, 0 when empty.
pub fn total_monthly_debts(liabilities: &[Liability]) -> Money {
    liabilities.iter().map(|l| l.monthly_payment).sum()
}

/// Compute stress-tested GDS and TDS, each rounded to 2 decimal places.
pub fn calculate_ratios(input: &RatioInput) -> UnderwritingResult<RatioResult> {
    validate_input(input)?;

    let qualified_payment =
        input.mortgage_payment * (Decimal::ONE + input.stress_test_rate / dec!(100));

    let gds = (qualified_payment + input.heat) / input.gross_income * dec!(100);
    let tds = (qualified_payment + input.heat + input.other_debts) / input.gross_income * dec!(100);

    Ok(RatioResult {
        gds: round2(gds),
        tds: round2(tds),
    })
}

fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_input(input: &RatioInput) -> UnderwritingResult<()> {
    if input.gross_income <= Decimal::ZERO {
        return Err(UnderwritingError::DivisionByZero {
            context: "gross income".into(),
        });
    }
    if input.mortgage_payment < Decimal::ZERO {
        return Err(UnderwritingError::InvalidInput {
            field: "mortgage_payment".into(),
            reason: "Monthly payment cannot be negative.".into(),
        });
    }
    if input.heat < Decimal::ZERO {
        return Err(UnderwritingError::InvalidInput {
            field: "heat".into(),
            reason: "Heating cost cannot be negative.".into(),
        });
    }
    if input.other_debts < Decimal::ZERO {
        return Err(UnderwritingError::InvalidInput {
            field: "other_debts".into(),
            reason: "Other-debt payments cannot be negative.".into(),
        });
    }
    if input.stress_test_rate < Decimal::ZERO {
        return Err(UnderwritingError::InvalidInput {
            field: "stress_test_rate".into(),
            reason: "Stress-test rate cannot be negative.".into(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LiabilityKind;

    fn sample_input() -> RatioInput {
        RatioInput {
            gross_income: dec!(10000),
            mortgage_payment: dec!(5090),
            heat: dec!(100),
            other_debts: Decimal::ZERO,
            stress_test_rate: dec!(5.25),
        }
    }

    #[test]
    fn test_reference_ratios() {
        let result = calculate_ratios(&sample_input()).unwrap();

        // qualified = 5090 * 1.0525 = 5357.225
        // GDS = (5357.225 + 100) / 10000 * 100 = 54.57225 -> 54.57
        assert_eq!(result.gds, dec!(54.57));
        // No other debts: TDS equals GDS.
        assert_eq!(result.tds, dec!(54.57));
    }

    #[test]
    fn test_other_debts_raise_tds_only() {
        let input = RatioInput {
            other_debts: dec!(430),
            ..sample_input()
        };
        let result = calculate_ratios(&input).unwrap();

        assert_eq!(result.gds, dec!(54.57));
        // TDS = (5357.225 + 100 + 430) / 10000 * 100 = 58.87225 -> 58.87
        assert_eq!(result.tds, dec!(58.87));
        assert!(result.tds >= result.gds);
    }

    #[test]
    fn test_zero_stress_rate_means_nominal_payment() {
        let input = RatioInput {
            stress_test_rate: Decimal::ZERO,
            ..sample_input()
        };
        let result = calculate_ratios(&input).unwrap();
        // (5090 + 100) / 10000 * 100 = 51.9
        assert_eq!(result.gds, dec!(51.90));
    }

    #[test]
    fn test_zero_income_is_explicit_error() {
        let input = RatioInput {
            gross_income: Decimal::ZERO,
            ..sample_input()
        };
        match calculate_ratios(&input).unwrap_err() {
            UnderwritingError::DivisionByZero { context } => {
                assert_eq!(context, "gross income")
            }
            other => panic!("expected DivisionByZero, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_income_is_explicit_error() {
        let input = RatioInput {
            gross_income: dec!(-1),
            ..sample_input()
        };
        assert!(calculate_ratios(&input).is_err());
    }

    #[test]
    fn test_negative_payment_rejected() {
        let input = RatioInput {
            mortgage_payment: dec!(-5090),
            ..sample_input()
        };
        match calculate_ratios(&input).unwrap_err() {
            UnderwritingError::InvalidInput { field, .. } => {
                assert_eq!(field, "mortgage_payment")
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_total_monthly_debts_sums_payments() {
        let liabilities = vec![
            Liability {
                kind: LiabilityKind::CreditCard,
                amount: dec!(1000),
                monthly_payment: dec!(30.00),
            },
            Liability {
                kind: LiabilityKind::Loan,
                amount: dec!(6000),
                monthly_payment: dec!(100.00),
            },
        ];
        assert_eq!(total_monthly_debts(&liabilities), dec!(130.00));
        assert_eq!(total_monthly_debts(&[]), Decimal::ZERO);
    }
}
