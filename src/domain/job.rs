use crate::error::CommissionError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single job ("file") as entered by the user.
///
/// Every numeric field is kept as the raw text the user typed so that partially
/// typed values such as `"12."` survive editing. Parsing happens only inside the
/// payout engine.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Job {
    pub id: u32,
    pub customer_name: String,
    pub job_number: String,
    pub contract_amount: String,
    pub cash_check: String,
    pub finance_amount: String,
    /// Dealer fee rate on the financed amount, e.g. `"5%"`.
    pub dealer_fee: String,
    pub credit_card: String,
    /// Processing fee rate on the credit card amount, e.g. `"3%"`.
    pub credit_card_fee: String,
    pub house_fee_percent: String,
    pub labor_material: String,
    pub ride_along: String,
    pub ride_along_bonus: String,
    pub num_ride_alongs: String,
    pub num_vets: String,
    pub num_reps: String,
}

impl Job {
    /// Creates a job with every field empty.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn get(&self, field: JobField) -> &str {
        match field {
            JobField::CustomerName => &self.customer_name,
            JobField::JobNumber => &self.job_number,
            JobField::ContractAmount => &self.contract_amount,
            JobField::CashCheck => &self.cash_check,
            JobField::FinanceAmount => &self.finance_amount,
            JobField::DealerFee => &self.dealer_fee,
            JobField::CreditCard => &self.credit_card,
            JobField::CreditCardFee => &self.credit_card_fee,
            JobField::HouseFeePercent => &self.house_fee_percent,
            JobField::LaborMaterial => &self.labor_material,
            JobField::RideAlong => &self.ride_along,
            JobField::RideAlongBonus => &self.ride_along_bonus,
            JobField::NumRideAlongs => &self.num_ride_alongs,
            JobField::NumVets => &self.num_vets,
            JobField::NumReps => &self.num_reps,
        }
    }

    /// Replaces one field wholesale with `value`.
    pub fn set(&mut self, field: JobField, value: impl Into<String>) {
        let slot = match field {
            JobField::CustomerName => &mut self.customer_name,
            JobField::JobNumber => &mut self.job_number,
            JobField::ContractAmount => &mut self.contract_amount,
            JobField::CashCheck => &mut self.cash_check,
            JobField::FinanceAmount => &mut self.finance_amount,
            JobField::DealerFee => &mut self.dealer_fee,
            JobField::CreditCard => &mut self.credit_card,
            JobField::CreditCardFee => &mut self.credit_card_fee,
            JobField::HouseFeePercent => &mut self.house_fee_percent,
            JobField::LaborMaterial => &mut self.labor_material,
            JobField::RideAlong => &mut self.ride_along,
            JobField::RideAlongBonus => &mut self.ride_along_bonus,
            JobField::NumRideAlongs => &mut self.num_ride_alongs,
            JobField::NumVets => &mut self.num_vets,
            JobField::NumReps => &mut self.num_reps,
        };
        *slot = value.into();
    }
}

/// The editable fields of a [`Job`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum JobField {
    CustomerName,
    JobNumber,
    ContractAmount,
    CashCheck,
    FinanceAmount,
    DealerFee,
    CreditCard,
    CreditCardFee,
    HouseFeePercent,
    LaborMaterial,
    RideAlong,
    RideAlongBonus,
    NumRideAlongs,
    NumVets,
    NumReps,
}

impl JobField {
    pub const ALL: [JobField; 15] = [
        JobField::CustomerName,
        JobField::JobNumber,
        JobField::ContractAmount,
        JobField::CashCheck,
        JobField::FinanceAmount,
        JobField::DealerFee,
        JobField::CreditCard,
        JobField::CreditCardFee,
        JobField::HouseFeePercent,
        JobField::LaborMaterial,
        JobField::RideAlong,
        JobField::RideAlongBonus,
        JobField::NumRideAlongs,
        JobField::NumVets,
        JobField::NumReps,
    ];

    /// The camelCase name used in the persisted report format.
    pub fn name(self) -> &'static str {
        match self {
            JobField::CustomerName => "customerName",
            JobField::JobNumber => "jobNumber",
            JobField::ContractAmount => "contractAmount",
            JobField::CashCheck => "cashCheck",
            JobField::FinanceAmount => "financeAmount",
            JobField::DealerFee => "dealerFee",
            JobField::CreditCard => "creditCard",
            JobField::CreditCardFee => "creditCardFee",
            JobField::HouseFeePercent => "houseFeePercent",
            JobField::LaborMaterial => "laborMaterial",
            JobField::RideAlong => "rideAlong",
            JobField::RideAlongBonus => "rideAlongBonus",
            JobField::NumRideAlongs => "numRideAlongs",
            JobField::NumVets => "numVets",
            JobField::NumReps => "numReps",
        }
    }
}

impl fmt::Display for JobField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for JobField {
    type Err = CommissionError;

    /// Accepts the camelCase name or its snake_case spelling, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        JobField::ALL
            .into_iter()
            .find(|field| field.name().to_lowercase() == wanted)
            .ok_or_else(|| CommissionError::Validation(format!("Unknown job field '{}'", s)))
    }
}

/// A named, timestamped snapshot of a job list.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Report {
    pub name: String,
    pub date: DateTime<Utc>,
    pub calculators: Vec<Job>,
}

impl Report {
    /// Copies `jobs` into a new report; later edits to the source do not leak in.
    pub fn snapshot(name: impl Into<String>, date: DateTime<Utc>, jobs: &[Job]) -> Self {
        Self {
            name: name.into(),
            date,
            calculators: jobs.to_vec(),
        }
    }
}

/// A report together with the storage key it was loaded from.
#[derive(Debug, PartialEq, Clone)]
pub struct SavedReport {
    pub key: String,
    pub report: Report,
}
