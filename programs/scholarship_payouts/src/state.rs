use crate::{config::*, error::*, ledger::*};
use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PayoutStatus {
    Pending,
    Approved,
    Paid,
    Rejected,
    Cancelled,
}

#[derive(AnchorSerialize, AnchorDeserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PayoutMethod {
    Zelle,
    BankTransfer,
    Stripe,
}

#[derive(AnchorSerialize, AnchorDeserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Method-specific destination of a payout. Which fields are required
/// depends on the [`PayoutMethod`], see [`PayoutDetails::validate`].
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PayoutDetails {
    pub zelle_email: Option<String>,
    pub zelle_phone: Option<String>,
    pub account_name: Option<String>,
    pub bank_name: Option<String>,
    pub routing_number: Option<String>,
    pub account_number: Option<String>,
    pub swift: Option<String>,
    pub iban: Option<String>,
    pub stripe_email: Option<String>,
    pub stripe_account_id: Option<String>,
}
impl PayoutDetails {
    pub const FIELDS: usize = 10;
    pub const SPACE: usize = Self::FIELDS * (1 + 4 + MAX_DETAIL_LEN);
}

/// Open payout request as tracked by its university.
#[derive(AnchorSerialize, AnchorDeserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct PayoutRecord {
    pub id: u32,
    pub amount: u64,
    pub status: PayoutStatus,
}
impl PayoutRecord {
    pub const SPACE: usize = 4 + 8 + 1;
}

#[account]
pub struct Platform {
    pub bump: u8,
    pub authority: Pubkey,
    pub dependent_surcharge: u64,
    pub universities_count: u32,
}
impl Platform {
    pub const SPACE: usize = 1 + 32 + 8 + 4;
}

#[account]
pub struct University {
    pub bump: u8,
    pub authority: Pubkey,
    pub id: u32,
    /// Sum of effective fees of paid applications.
    pub revenue_sum: u64,
    /// Sum of payout requests that reached `Paid`.
    pub paid_out_sum: u64,
    pub payout_requests_count: u32,
    /// Pending and approved payout requests, in submission order.
    pub open_requests: Vec<PayoutRecord>,
    pub scholarships_count: u16,
    /// Highlighted scholarship ids; featured order is position + 1.
    pub featured: Vec<u16>,
}
impl University {
    pub const SPACE: usize = (1 + 32 + 4 + 8 + 8 + 4 + 2)
        + (4 + OPEN_REQUESTS_CAPACITY * PayoutRecord::SPACE)
        + (4 + FEATURED_CAPACITY * 2);

    pub fn balance(&self) -> BalanceSnapshot {
        BalanceSnapshot::new(
            self.revenue_sum,
            self.paid_out_sum
                .saturating_add(reserved(self.open_requests.iter())),
        )
    }

    /// Mirrors a status change of payout request `id` in the open list.
    /// Terminal requests leave the list, paid ones move into `paid_out_sum`.
    pub fn record_transition(
        &mut self,
        id: u32,
        next: PayoutStatus,
    ) -> core::result::Result<(), ScholarshipError> {
        let i = self
            .open_requests
            .iter()
            .position(|r| r.id == id)
            .ok_or(ScholarshipError::InvalidStatusTransition)?;

        if !next.is_terminal() {
            self.open_requests[i].status = next;
            return Ok(());
        }

        let record = self.open_requests.remove(i);
        if next == PayoutStatus::Paid {
            self.paid_out_sum = self
                .paid_out_sum
                .checked_add(record.amount)
                .ok_or(ScholarshipError::ArithmeticOverflow)?;
        }
        Ok(())
    }
}

#[account]
#[derive(Debug)]
pub struct Scholarship {
    pub bump: u8,
    pub university: Pubkey,
    pub id: u16,
    pub application_fee: u64,
    pub is_highlighted: bool,
}
impl Scholarship {
    pub const SPACE: usize = 1 + 32 + 2 + 8 + 1;
}

#[account]
#[derive(Debug)]
pub struct ApplicationFee {
    pub bump: u8,
    pub university: Pubkey,
    pub scholarship: Pubkey,
    pub student: Pubkey,
    pub fee_amount: u64,
    pub dependent_count: u8,
    pub is_paid: bool,
    pub created_at: i64,
    pub paid_at: i64,
}
impl ApplicationFee {
    pub const SPACE: usize = 1 + 32 + 32 + 32 + 8 + 1 + 1 + 8 + 8;
}

#[account]
#[derive(Debug)]
pub struct PayoutRequest {
    pub bump: u8,
    pub id: u32,
    pub university: Pubkey,
    pub requested_by: Pubkey,
    pub amount: u64,
    pub method: PayoutMethod,
    pub details: PayoutDetails,
    pub status: PayoutStatus,
    pub admin_notes: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}
impl PayoutRequest {
    pub const SPACE: usize = 1
        + 4
        + 32
        + 32
        + 8
        + 1
        + PayoutDetails::SPACE
        + 1
        + (1 + 4 + MAX_ADMIN_NOTES_LEN)
        + 8
        + 8;
}
