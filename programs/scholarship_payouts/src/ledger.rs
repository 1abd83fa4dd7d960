//! Balance reconciliation between collected application fees and payout
//! requests.
//!
//! Everything here is a pure function of its inputs. Amounts are minor
//! currency units and all sums saturate instead of wrapping. The program
//! feeds these functions from account state; off-chain clients can feed
//! them from fetched `ApplicationFee` and `PayoutRequest` accounts.

use crate::state::*;

/// An application fee as seen by the reducer.
pub trait FeeEntry {
    fn fee_amount(&self) -> u64;
    fn dependent_count(&self) -> u8;
    fn is_paid(&self) -> bool;
}

/// A payout request as seen by the reducer.
pub trait ReservedEntry {
    fn amount(&self) -> u64;
    fn status(&self) -> PayoutStatus;
}

impl FeeEntry for ApplicationFee {
    fn fee_amount(&self) -> u64 {
        self.fee_amount
    }
    fn dependent_count(&self) -> u8 {
        self.dependent_count
    }
    fn is_paid(&self) -> bool {
        self.is_paid
    }
}

impl ReservedEntry for PayoutRecord {
    fn amount(&self) -> u64 {
        self.amount
    }
    fn status(&self) -> PayoutStatus {
        self.status
    }
}

impl ReservedEntry for PayoutRequest {
    fn amount(&self) -> u64 {
        self.amount
    }
    fn status(&self) -> PayoutStatus {
        self.status
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BalanceSnapshot {
    pub total_revenue: u64,
    pub reserved: u64,
    pub available_balance: u64,
}

impl BalanceSnapshot {
    pub fn new(total_revenue: u64, reserved: u64) -> Self {
        Self {
            total_revenue,
            reserved,
            available_balance: total_revenue.saturating_sub(reserved),
        }
    }

    /// How much `amount` overshoots the available balance, if it does.
    pub fn shortfall(&self, amount: u64) -> Option<u64> {
        amount
            .checked_sub(self.available_balance)
            .filter(|&s| s > 0)
    }
}

pub fn effective_fee(fee_amount: u64, dependent_count: u8, dependent_surcharge: u64) -> u64 {
    if dependent_count == 0 {
        return fee_amount;
    }
    fee_amount.saturating_add((dependent_count as u64).saturating_mul(dependent_surcharge))
}

pub fn total_revenue<'a, F>(fees: impl IntoIterator<Item = &'a F>, dependent_surcharge: u64) -> u64
where
    F: FeeEntry + 'a,
{
    fees.into_iter()
        .filter(|f| f.is_paid())
        .map(|f| effective_fee(f.fee_amount(), f.dependent_count(), dependent_surcharge))
        .fold(0, u64::saturating_add)
}

pub fn reserved<'a, R>(requests: impl IntoIterator<Item = &'a R>) -> u64
where
    R: ReservedEntry + 'a,
{
    requests
        .into_iter()
        .filter(|r| r.status().is_reserved())
        .map(|r| r.amount())
        .fold(0, u64::saturating_add)
}

pub fn reduce<'a, F, R>(
    fees: impl IntoIterator<Item = &'a F>,
    requests: impl IntoIterator<Item = &'a R>,
    dependent_surcharge: u64,
) -> BalanceSnapshot
where
    F: FeeEntry + 'a,
    R: ReservedEntry + 'a,
{
    BalanceSnapshot::new(
        total_revenue(fees, dependent_surcharge),
        reserved(requests),
    )
}
