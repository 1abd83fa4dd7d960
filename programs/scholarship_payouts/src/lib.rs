use crate::{instructions::*, state::*};
use anchor_lang::prelude::*;

pub mod config;
pub mod error;
pub mod featured;
pub mod instructions;
pub mod ledger;
pub mod payout;
pub mod state;

declare_id!("dR6tXF1TUj34f2VtY5JcwFnhD27en7oa1Cm12zkUsws");

#[program]
pub mod scholarship_payouts {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, dependent_surcharge: u64) -> Result<()> {
        instructions::initialize(ctx, dependent_surcharge)
    }

    pub fn register_university(ctx: Context<RegisterUniversity>) -> Result<()> {
        instructions::register_university(ctx)
    }

    pub fn create_scholarship(ctx: Context<CreateScholarship>, application_fee: u64) -> Result<()> {
        instructions::create_scholarship(ctx, application_fee)
    }

    pub fn set_application_fee(ctx: Context<SetApplicationFee>, application_fee: u64) -> Result<()> {
        instructions::set_application_fee(ctx, application_fee)
    }

    pub fn record_application_fee(
        ctx: Context<RecordApplicationFee>,
        dependent_count: u8,
    ) -> Result<()> {
        instructions::record_application_fee(ctx, dependent_count)
    }

    pub fn confirm_fee_payment(ctx: Context<ConfirmFeePayment>) -> Result<()> {
        instructions::confirm_fee_payment(ctx)
    }

    pub fn submit_payout_request(
        ctx: Context<SubmitPayoutRequest>,
        amount: u64,
        method: PayoutMethod,
        details: PayoutDetails,
    ) -> Result<()> {
        instructions::submit_payout_request(ctx, amount, method, details)
    }

    pub fn approve_payout_request(ctx: Context<ReviewPayoutRequest>) -> Result<()> {
        instructions::approve_payout_request(ctx)
    }

    pub fn mark_payout_paid(ctx: Context<ReviewPayoutRequest>) -> Result<()> {
        instructions::mark_payout_paid(ctx)
    }

    pub fn reject_payout_request(
        ctx: Context<ReviewPayoutRequest>,
        admin_notes: Option<String>,
    ) -> Result<()> {
        instructions::reject_payout_request(ctx, admin_notes)
    }

    pub fn cancel_payout_request(ctx: Context<CancelPayoutRequest>) -> Result<()> {
        instructions::cancel_payout_request(ctx)
    }

    pub fn highlight_scholarship(ctx: Context<FeatureScholarship>) -> Result<()> {
        instructions::highlight_scholarship(ctx)
    }

    pub fn unhighlight_scholarship(ctx: Context<FeatureScholarship>) -> Result<()> {
        instructions::unhighlight_scholarship(ctx)
    }

    pub fn reorder_featured(ctx: Context<FeatureScholarship>, direction: Direction) -> Result<()> {
        instructions::reorder_featured(ctx, direction)
    }
}
