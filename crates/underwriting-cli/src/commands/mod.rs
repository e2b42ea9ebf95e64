pub mod extract;
pub mod matching;
pub mod ratios;
pub mod underwrite;

use clap::ValueEnum;
use underwriting_core::{AmortizationPeriod, BorrowerType, InterestRateType};

/// Borrower employment type as a CLI argument.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum BorrowerTypeArg {
    #[default]
    Salaried,
    SelfEmployed,
    CommissionBased,
    Other,
}

impl From<BorrowerTypeArg> for BorrowerType {
    fn from(arg: BorrowerTypeArg) -> Self {
        match arg {
            BorrowerTypeArg::Salaried => BorrowerType::Salaried,
            BorrowerTypeArg::SelfEmployed => BorrowerType::SelfEmployed,
            BorrowerTypeArg::CommissionBased => BorrowerType::CommissionBased,
            BorrowerTypeArg::Other => BorrowerType::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum RateTypeArg {
    #[default]
    Fixed,
    Variable,
}

impl From<RateTypeArg> for InterestRateType {
    fn from(arg: RateTypeArg) -> Self {
        match arg {
            RateTypeArg::Fixed => InterestRateType::Fixed,
            RateTypeArg::Variable => InterestRateType::Variable,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum AmortizationArg {
    #[default]
    #[value(name = "25-years")]
    TwentyFiveYears,
    #[value(name = "30-years")]
    ThirtyYears,
    Other,
}

impl From<AmortizationArg> for AmortizationPeriod {
    fn from(arg: AmortizationArg) -> Self {
        match arg {
            AmortizationArg::TwentyFiveYears => AmortizationPeriod::TwentyFiveYears,
            AmortizationArg::ThirtyYears => AmortizationPeriod::ThirtyYears,
            AmortizationArg::Other => AmortizationPeriod::Other,
        }
    }
}
