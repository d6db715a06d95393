//! The payout engine.
//!
//! [`calculate`] turns one job's raw fields into every derived figure shown to
//! the user, [`aggregate`] folds those figures across a job list. Both are pure.

use super::arith::{add, div, mul, sub};
use super::job::Job;
use super::parse::{parse_amount, parse_percent_fee};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::iter::Sum;
use std::ops;

/// Commission rates, in whole percent, for one profitability band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tier {
    pub vet_rate: u8,
    pub rep_rate: u8,
}

/// Lower bounds (inclusive) of each band, highest first.
const TIERS: [(Decimal, Tier); 3] = [
    (dec!(50), Tier { vet_rate: 55, rep_rate: 40 }),
    (dec!(40), Tier { vet_rate: 45, rep_rate: 30 }),
    (dec!(33), Tier { vet_rate: 35, rep_rate: 25 }),
];

const BASE_TIER: Tier = Tier {
    vet_rate: 25,
    rep_rate: 20,
};

impl Tier {
    /// Looks up the band for a job's margin, `percent_of_contract`.
    pub fn for_percent(percent_of_contract: Decimal) -> Self {
        TIERS
            .iter()
            .find(|(floor, _)| percent_of_contract >= *floor)
            .map(|(_, tier)| *tier)
            .unwrap_or(BASE_TIER)
    }

    pub fn vet_fraction(&self) -> Decimal {
        Decimal::from(self.vet_rate) / Decimal::ONE_HUNDRED
    }

    pub fn rep_fraction(&self) -> Decimal {
        Decimal::from(self.rep_rate) / Decimal::ONE_HUNDRED
    }
}

/// Every figure derived from a single job.
///
/// Nothing is clamped: negative payouts and negative profit are reported as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct Payout {
    pub contract_amount: Decimal,
    pub house_fee_amount: Decimal,
    pub dealer_fee_amount: Decimal,
    pub credit_card_fee_amount: Decimal,
    pub total_payments: Decimal,
    pub after_house_fee: Decimal,
    /// Payments less house fee and labor/material; the job's margin.
    pub total_after_fees: Decimal,
    pub percent_of_contract: Decimal,
    pub tier: Tier,
    pub num_vets: Decimal,
    pub num_reps: Decimal,
    pub people: Decimal,
    pub per_vet_payout: Decimal,
    pub per_rep_payout: Decimal,
    pub per_person_ride_along: Decimal,
    pub per_person_dealer_fee: Decimal,
    pub per_person_credit_card_fee: Decimal,
    pub final_per_vet_payout: Decimal,
    pub final_per_rep_payout: Decimal,
    pub final_total_vets_payout: Decimal,
    pub final_total_reps_payout: Decimal,
    pub combined_payout: Decimal,
    pub num_ride_alongs: Decimal,
    pub total_ride_along_payout: Decimal,
    pub per_ride_along_payout: Decimal,
    pub profit: Decimal,
}

/// Runs the payout formula for one job.
///
/// Any step whose result would leave the `Decimal` range counts as zero.
pub fn calculate(job: &Job) -> Payout {
    let contract_amount = parse_amount(&job.contract_amount);
    let house_fee_amount = div(
        mul(contract_amount, parse_amount(&job.house_fee_percent)),
        Decimal::ONE_HUNDRED,
    );
    let dealer_fee_amount = parse_percent_fee(&job.finance_amount, &job.dealer_fee);
    let credit_card_fee_amount = parse_percent_fee(&job.credit_card, &job.credit_card_fee);

    let total_payments = add(
        add(parse_amount(&job.cash_check), parse_amount(&job.finance_amount)),
        parse_amount(&job.credit_card),
    );
    let after_house_fee = sub(total_payments, house_fee_amount);
    let total_after_fees = sub(after_house_fee, parse_amount(&job.labor_material));
    let percent_of_contract = if after_house_fee > Decimal::ZERO {
        mul(div(total_after_fees, after_house_fee), Decimal::ONE_HUNDRED)
    } else {
        Decimal::ZERO
    };
    let tier = Tier::for_percent(percent_of_contract);

    let num_vets = parse_amount(&job.num_vets);
    let num_reps = parse_amount(&job.num_reps);
    let people = add(num_vets, num_reps);

    let per_vet_payout = div(mul(total_after_fees, tier.vet_fraction()), people);
    let per_rep_payout = div(mul(total_after_fees, tier.rep_fraction()), people);

    let ride_along = parse_amount(&job.ride_along);
    let per_person_ride_along = div(ride_along, people);
    let per_person_dealer_fee = div(dealer_fee_amount, people);
    let per_person_credit_card_fee = div(credit_card_fee_amount, people);
    let per_person_deductions = add(
        add(per_person_ride_along, per_person_dealer_fee),
        per_person_credit_card_fee,
    );

    let final_per_vet_payout = sub(per_vet_payout, per_person_deductions);
    let final_per_rep_payout = sub(per_rep_payout, per_person_deductions);
    let final_total_vets_payout = mul(final_per_vet_payout, num_vets);
    let final_total_reps_payout = mul(final_per_rep_payout, num_reps);
    let combined_payout = add(final_total_vets_payout, final_total_reps_payout);

    let total_ride_along_payout = add(ride_along, parse_amount(&job.ride_along_bonus));
    let num_ride_alongs = parse_amount(&job.num_ride_alongs);
    let per_ride_along_payout = if num_ride_alongs > Decimal::ZERO {
        div(total_ride_along_payout, num_ride_alongs)
    } else {
        Decimal::ZERO
    };

    let profit = sub(
        sub(sub(total_after_fees, final_total_vets_payout), final_total_reps_payout),
        total_ride_along_payout,
    );

    Payout {
        contract_amount,
        house_fee_amount,
        dealer_fee_amount,
        credit_card_fee_amount,
        total_payments,
        after_house_fee,
        total_after_fees,
        percent_of_contract,
        tier,
        num_vets,
        num_reps,
        people,
        per_vet_payout,
        per_rep_payout,
        per_person_ride_along,
        per_person_dealer_fee,
        per_person_credit_card_fee,
        final_per_vet_payout,
        final_per_rep_payout,
        final_total_vets_payout,
        final_total_reps_payout,
        combined_payout,
        num_ride_alongs,
        total_ride_along_payout,
        per_ride_along_payout,
        profit,
    }
}

/// Sums of the payout figures across a job list.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub total_vet_payout: Decimal,
    pub total_rep_payout: Decimal,
    pub total_ride_along_payout: Decimal,
    pub total_after_fees: Decimal,
}

impl Totals {
    pub fn total_combined_payout(&self) -> Decimal {
        add(self.total_vet_payout, self.total_rep_payout)
    }

    pub fn total_profit(&self) -> Decimal {
        sub(
            sub(
                sub(self.total_after_fees, self.total_vet_payout),
                self.total_rep_payout,
            ),
            self.total_ride_along_payout,
        )
    }
}

impl From<&Payout> for Totals {
    fn from(payout: &Payout) -> Self {
        Self {
            total_vet_payout: payout.final_total_vets_payout,
            total_rep_payout: payout.final_total_reps_payout,
            total_ride_along_payout: payout.total_ride_along_payout,
            total_after_fees: payout.total_after_fees,
        }
    }
}

impl ops::Add for Totals {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            total_vet_payout: add(self.total_vet_payout, rhs.total_vet_payout),
            total_rep_payout: add(self.total_rep_payout, rhs.total_rep_payout),
            total_ride_along_payout: add(self.total_ride_along_payout, rhs.total_ride_along_payout),
            total_after_fees: add(self.total_after_fees, rhs.total_after_fees),
        }
    }
}

impl Sum for Totals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Totals::default(), |acc, next| acc + next)
    }
}

/// Recomputes every job and sums the results.
pub fn aggregate<'a, I>(jobs: I) -> Totals
where
    I: IntoIterator<Item = &'a Job>,
{
    jobs.into_iter()
        .map(|job| Totals::from(&calculate(job)))
        .sum()
}
