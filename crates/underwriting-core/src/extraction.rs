//! Field extraction from mortgage-document text.
//!
//! The document arrives as plain text from an external text-extraction
//! collaborator. Fields are located by a small table of literal labels
//! rather than ad hoc inline patterns: each label is expected verbatim,
//! followed by a colon, optional whitespace, a `$` sign (except the credit
//! score), and a run of digits with optional thousands commas.
//!
//! Absence is never fatal. A label that does not appear yields a zero or
//! empty default; only a matched amount that fails integer parsing is an
//! error, surfaced as `MalformedAmount` naming the offending label.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::error::UnderwritingError;
use crate::types::{BorrowerType, ExtractedFinancials, Liability, LiabilityKind, Money};
use crate::UnderwritingResult;

// ---------------------------------------------------------------------------
// Label tables
// ---------------------------------------------------------------------------

/// Income fields read for self-employed borrowers.
const INCOME_FIELDS_SELF_EMPLOYED: [&str; 2] =
    ["Total Deposits", "Stated Personal Business Income"];

/// Income fields read for all other borrower types.
const INCOME_FIELDS_EMPLOYED: [&str; 2] = ["Salary Rate", "T4 Line 15000"];

const CREDIT_SCORE_FIELD: &str = "Credit Score";
const DOWN_PAYMENT_FIELD: &str = "Down Payment";

/// Liability labels in the order they are tried at each document position.
const LIABILITY_LABELS: [(&str, LiabilityKind); 3] = [
    ("Credit Card", LiabilityKind::CreditCard),
    ("Loan", LiabilityKind::Loan),
    ("Line of Credit", LiabilityKind::LineOfCredit),
];

// Minimum-payment factors applied to liability balances.
const CREDIT_CARD_PAYMENT_FACTOR: Decimal = dec!(0.03);
const LINE_OF_CREDIT_PAYMENT_FACTOR: Decimal = dec!(0.02);
const LOAN_AMORTIZATION_MONTHS: Decimal = dec!(60);

// ---------------------------------------------------------------------------
// Scanner
// ---------------------------------------------------------------------------

/// After a label, a value is `:` + optional whitespace + (`$` if currency)
/// + a non-empty run of digits/commas. Returns the raw digit/comma run.
fn match_value(rest: &str, currency: bool) -> Option<&str> {
    let rest = rest.strip_prefix(':')?;
    let rest = rest.trim_start_matches([' ', '\t']);
    let rest = if currency {
        rest.strip_prefix('$')?
    } else {
        rest
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit() && c != ',')
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    Some(&rest[..end])
}

/// First occurrence of `label` followed by a well-formed value.
fn find_field<'a>(text: &'a str, label: &str, currency: bool) -> Option<&'a str> {
    let mut search = text;
    while let Some(pos) = search.find(label) {
        let rest = &search[pos + label.len()..];
        if let Some(raw) = match_value(rest, currency) {
            return Some(raw);
        }
        search = &search[pos + label.len()..];
    }
    None
}

/// Strip thousands commas and parse the remaining digits as a whole amount.
fn parse_amount(label: &str, raw: &str) -> UnderwritingResult<u64> {
    let stripped: String = raw.chars().filter(|c| *c != ',').collect();
    stripped
        .parse::<u64>()
        .map_err(|_| UnderwritingError::MalformedAmount {
            label: label.to_string(),
            raw: raw.to_string(),
        })
}

// ---------------------------------------------------------------------------
// Per-field extraction
// ---------------------------------------------------------------------------

/// Extract gross income for the given borrower type.
///
/// Self-employed borrowers are qualified on the greater of bank-statement
/// deposits and stated business income; everyone else on the greater of
/// salary rate and the T4 line-15000 figure. No matching field means 0.
pub fn extract_income(text: &str, borrower_type: BorrowerType) -> UnderwritingResult<Money> {
    let labels: &[&str] = match borrower_type {
        BorrowerType::SelfEmployed => &INCOME_FIELDS_SELF_EMPLOYED,
        _ => &INCOME_FIELDS_EMPLOYED,
    };

    let mut best: Option<u64> = None;
    for label in labels {
        if let Some(raw) = find_field(text, label, true) {
            let value = parse_amount(label, raw)?;
            best = Some(best.map_or(value, |b| b.max(value)));
        }
    }
    Ok(Money::from(best.unwrap_or(0)))
}

/// Extract the credit score, 0 if absent.
pub fn extract_credit_score(text: &str) -> UnderwritingResult<u32> {
    match find_field(text, CREDIT_SCORE_FIELD, false) {
        Some(raw) => {
            let value = parse_amount(CREDIT_SCORE_FIELD, raw)?;
            u32::try_from(value).map_err(|_| UnderwritingError::MalformedAmount {
                label: CREDIT_SCORE_FIELD.to_string(),
                raw: raw.to_string(),
            })
        }
        None => Ok(0),
    }
}

/// Extract the down payment amount, 0 if absent.
pub fn extract_down_payment(text: &str) -> UnderwritingResult<Money> {
    match find_field(text, DOWN_PAYMENT_FIELD, true) {
        Some(raw) => Ok(Money::from(parse_amount(DOWN_PAYMENT_FIELD, raw)?)),
        None => Ok(Money::from(0u64)),
    }
}

/// Extract every liability in document order, duplicates preserved.
///
/// The monthly payment is derived from the balance: 3% for credit cards,
/// 2% for lines of credit, a 60-month straight amortization for loans.
pub fn extract_liabilities(text: &str) -> UnderwritingResult<Vec<Liability>> {
    // (byte offset, kind, raw amount) for every label hit with a value.
    let mut hits: Vec<(usize, LiabilityKind, &str)> = Vec::new();

    for (label, kind) in LIABILITY_LABELS {
        let mut offset = 0usize;
        while let Some(pos) = text[offset..].find(label) {
            let start = offset + pos;
            let rest = &text[start + label.len()..];
            if let Some(raw) = match_value(rest, true) {
                hits.push((start, kind, raw));
            }
            offset = start + label.len();
        }
    }

    hits.sort_by_key(|(pos, _, _)| *pos);

    let mut liabilities = Vec::with_capacity(hits.len());
    for (_, kind, raw) in hits {
        let amount = Money::from(parse_amount(&kind.to_string(), raw)?);
        liabilities.push(Liability {
            kind,
            amount,
            monthly_payment: monthly_payment_for(kind, amount),
        });
    }
    Ok(liabilities)
}

fn monthly_payment_for(kind: LiabilityKind, amount: Money) -> Money {
    let payment = match kind {
        LiabilityKind::CreditCard => amount * CREDIT_CARD_PAYMENT_FACTOR,
        LiabilityKind::LineOfCredit => amount * LINE_OF_CREDIT_PAYMENT_FACTOR,
        LiabilityKind::Loan => amount / LOAN_AMORTIZATION_MONTHS,
    };
    payment.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Run all four extractors over one document.
pub fn extract_financials(
    text: &str,
    borrower_type: BorrowerType,
) -> UnderwritingResult<ExtractedFinancials> {
    Ok(ExtractedFinancials {
        income: extract_income(text, borrower_type)?,
        credit_score: extract_credit_score(text)?,
        down_payment: extract_down_payment(text)?,
        liabilities: extract_liabilities(text)?,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_income_self_employed_takes_max_of_both_fields() {
        let text = "Total Deposits: $85,000\nStated Personal Business Income: $92,500\n";
        let income = extract_income(text, BorrowerType::SelfEmployed).unwrap();
        assert_eq!(income, Money::from(92_500u64));
    }

    #[test]
    fn test_income_self_employed_single_field() {
        let text = "Total Deposits: $85,000\n";
        let income = extract_income(text, BorrowerType::SelfEmployed).unwrap();
        assert_eq!(income, Money::from(85_000u64));
    }

    #[test]
    fn test_income_salaried_takes_max_of_salary_and_t4() {
        let text = "Salary Rate: $78,000\nT4 Line 15000: $81,250\n";
        let income = extract_income(text, BorrowerType::Salaried).unwrap();
        assert_eq!(income, Money::from(81_250u64));
    }

    #[test]
    fn test_income_ignores_fields_for_other_borrower_type() {
        // A salaried borrower never qualifies on deposit history.
        let text = "Total Deposits: $500,000\nSalary Rate: $60,000\n";
        let income = extract_income(text, BorrowerType::Salaried).unwrap();
        assert_eq!(income, Money::from(60_000u64));
    }

    #[test]
    fn test_income_defaults_to_zero_when_no_pattern_matches() {
        let text = "Nothing relevant in this document.";
        assert_eq!(
            extract_income(text, BorrowerType::SelfEmployed).unwrap(),
            Money::ZERO
        );
        assert_eq!(
            extract_income(text, BorrowerType::CommissionBased).unwrap(),
            Money::ZERO
        );
    }

    #[test]
    fn test_credit_score_parses_digits() {
        assert_eq!(extract_credit_score("Credit Score: 712").unwrap(), 712);
        assert_eq!(extract_credit_score("no score here").unwrap(), 0);
    }

    #[test]
    fn test_credit_score_requires_value_after_label() {
        // Label present but no digits: treated as absent, not an error.
        assert_eq!(extract_credit_score("Credit Score: pending").unwrap(), 0);
    }

    #[test]
    fn test_down_payment_strips_commas() {
        let dp = extract_down_payment("Down Payment: $120,000").unwrap();
        assert_eq!(dp, Money::from(120_000u64));
        assert_eq!(extract_down_payment("").unwrap(), Money::ZERO);
    }

    #[test]
    fn test_liability_credit_card_payment_factor() {
        let liabilities = extract_liabilities("Credit Card: $1,000").unwrap();
        assert_eq!(
            liabilities,
            vec![Liability {
                kind: LiabilityKind::CreditCard,
                amount: Money::from(1000u64),
                monthly_payment: dec!(30.00),
            }]
        );
    }

    #[test]
    fn test_liability_loan_sixty_month_amortization() {
        let liabilities = extract_liabilities("Loan: $6,000").unwrap();
        assert_eq!(liabilities[0].monthly_payment, dec!(100.00));
    }

    #[test]
    fn test_liability_line_of_credit_factor() {
        let liabilities = extract_liabilities("Line of Credit: $10,000").unwrap();
        assert_eq!(liabilities.len(), 1);
        assert_eq!(liabilities[0].kind, LiabilityKind::LineOfCredit);
        assert_eq!(liabilities[0].monthly_payment, dec!(200.00));
    }

    #[test]
    fn test_liabilities_preserve_document_order_and_duplicates() {
        let text = "Loan: $6,000\nCredit Card: $1,000\nLoan: $6,000\n";
        let liabilities = extract_liabilities(text).unwrap();
        let kinds: Vec<LiabilityKind> = liabilities.iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![
                LiabilityKind::Loan,
                LiabilityKind::CreditCard,
                LiabilityKind::Loan
            ]
        );
    }

    #[test]
    fn test_liability_payment_rounds_to_two_places() {
        // 1234.56.. not exactly representable from 74074 / 60
        let liabilities = extract_liabilities("Loan: $74,074").unwrap();
        assert_eq!(liabilities[0].monthly_payment, dec!(1234.57));
    }

    #[test]
    fn test_malformed_amount_surfaces_label() {
        // All-commas run matches the value pattern but parses to nothing.
        let err = extract_down_payment("Down Payment: $,,,").unwrap_err();
        match err {
            UnderwritingError::MalformedAmount { label, raw } => {
                assert_eq!(label, "Down Payment");
                assert_eq!(raw, ",,,");
            }
            other => panic!("expected MalformedAmount, got {other:?}"),
        }
    }

    #[test]
    fn test_extract_financials_full_document() {
        let text = "\
Applicant: J. Doe
Salary Rate: $90,000
T4 Line 15000: $88,400
Credit Score: 701
Down Payment: $150,000
Credit Card: $2,500
Line of Credit: $12,000
";
        let financials = extract_financials(text, BorrowerType::Salaried).unwrap();
        assert_eq!(financials.income, Money::from(90_000u64));
        assert_eq!(financials.credit_score, 701);
        assert_eq!(financials.down_payment, Money::from(150_000u64));
        assert_eq!(financials.liabilities.len(), 2);
    }
}
