use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed in percentage points (5.25 = 5.25%), matching the
/// qualification-rate convention used on mortgage commitment letters.
pub type Rate = Decimal;

/// Employment classification of the borrower. Drives which income fields
/// are read from the document and which lender programs apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BorrowerType {
    #[default]
    Salaried,
    SelfEmployed,
    CommissionBased,
    Other,
}

impl std::fmt::Display for BorrowerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Salaried => write!(f, "Salaried"),
            Self::SelfEmployed => write!(f, "Self-Employed"),
            Self::CommissionBased => write!(f, "Commission-Based"),
            Self::Other => write!(f, "Other"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterestRateType {
    #[default]
    Fixed,
    Variable,
}

impl std::fmt::Display for InterestRateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed => write!(f, "Fixed"),
            Self::Variable => write!(f, "Variable"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmortizationPeriod {
    #[default]
    TwentyFiveYears,
    ThirtyYears,
    Other,
}

impl std::fmt::Display for AmortizationPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TwentyFiveYears => write!(f, "25 Years"),
            Self::ThirtyYears => write!(f, "30 Years"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// Caller-selected borrower attributes, fixed before extraction runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowerProfile {
    pub borrower_type: BorrowerType,
    pub interest_rate_type: InterestRateType,
    pub amortization_period: AmortizationPeriod,
}

/// Debt category found on the document. Determines the minimum-payment
/// factor applied to the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LiabilityKind {
    CreditCard,
    Loan,
    LineOfCredit,
}

impl std::fmt::Display for LiabilityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CreditCard => write!(f, "Credit Card"),
            Self::Loan => write!(f, "Loan"),
            Self::LineOfCredit => write!(f, "Line of Credit"),
        }
    }
}

/// A single debt obligation. `monthly_payment` is always derived from
/// `amount` and `kind`; it is never set independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Liability {
    pub kind: LiabilityKind,
    pub amount: Money,
    pub monthly_payment: Money,
}

/// Everything the extractor pulls from the document text. Built once per
/// document and never mutated afterward; missing fields default to zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFinancials {
    pub income: Money,
    pub credit_score: u32,
    pub down_payment: Money,
    pub liabilities: Vec<Liability>,
}

/// Stress-tested debt-service ratios, each rounded to 2 decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatioResult {
    pub gds: Decimal,
    pub tds: Decimal,
}

/// Lender category the applicant qualifies for. Exactly one per decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LenderTier {
    PrimeLender,
    CommunityTrustAlternative,
    BLender,
    PrivateLenderNeeded,
}

impl std::fmt::Display for LenderTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PrimeLender => write!(f, "Prime Lender"),
            Self::CommunityTrustAlternative => write!(f, "Community Trust (Alternative Lender)"),
            Self::BLender => write!(f, "B Lender"),
            Self::PrivateLenderNeeded => write!(f, "Private Lender Needed"),
        }
    }
}

/// Report-ready string renderings of the headline figures, matching the
/// formatting conventions of the downloadable underwriting report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFields {
    pub borrower_type: String,
    pub income: String,
    pub credit_score: String,
    pub down_payment: String,
    pub gds: String,
    pub tds: String,
    pub lender_matched: String,
}

/// The final decision record for one pipeline run. Immutable; handed to
/// the external report-rendering layer as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnderwritingSummary {
    pub profile: BorrowerProfile,
    pub financials: ExtractedFinancials,
    pub ratios: RatioResult,
    pub lender_tier: LenderTier,
    pub explanation: String,
    pub report: ReportFields,
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

/// Format a monetary amount with a `$` sign and thousands separators,
/// truncating any fractional part ("$1,234").
pub fn format_currency(amount: Money) -> String {
    let negative = amount.is_sign_negative();
    let digits = amount.abs().trunc().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Format a ratio as a percentage string with its stored scale ("54.57%").
pub fn format_percent(value: Decimal) -> String {
    format!("{value}%")
}
