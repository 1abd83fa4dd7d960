use crate::{config::*, error::*, payout::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct SubmitPayoutRequest<'info> {
    #[account(
        mut,
        seeds = [b"university", university_authority.key().as_ref()],
        bump = university.bump,
    )]
    university: Account<'info, University>,
    #[account(
        init,
        payer = university_authority,
        seeds = [
            b"payout_request",
            university.key().as_ref(),
            university.payout_requests_count.to_le_bytes().as_ref(),
        ],
        bump,
        space = 8 + PayoutRequest::SPACE,
    )]
    payout_request: Account<'info, PayoutRequest>,
    #[account(mut)]
    university_authority: Signer<'info>,
    system_program: Program<'info, System>,
}

pub fn submit_payout_request(
    ctx: Context<SubmitPayoutRequest>,
    amount: u64,
    method: PayoutMethod,
    details: PayoutDetails,
) -> Result<()> {
    let university = &mut ctx.accounts.university;
    let balance = university.balance();

    validate_submission(amount, &balance, method, &details).map_err(|e| {
        if let SubmissionError::InsufficientBalance { shortfall } = e {
            msg!(
                "Requested {} but only {} is available, short by {}",
                amount,
                balance.available_balance,
                shortfall
            );
        }
        ScholarshipError::from(e)
    })?;

    if university.open_requests.len() >= OPEN_REQUESTS_CAPACITY {
        return err!(ScholarshipError::OpenRequestsLimit);
    }

    let id = university.payout_requests_count;
    university.open_requests.push(PayoutRecord {
        id,
        amount,
        status: PayoutStatus::Pending,
    });
    university.payout_requests_count += 1;

    let now = Clock::get()?.unix_timestamp;
    let payout_request = &mut ctx.accounts.payout_request;
    payout_request.bump = *ctx.bumps.get("payout_request").unwrap();
    payout_request.id = id;
    payout_request.university = university.key();
    payout_request.requested_by = ctx.accounts.university_authority.key();
    payout_request.amount = amount;
    payout_request.method = method;
    payout_request.details = details;
    payout_request.status = PayoutStatus::Pending;
    payout_request.admin_notes = None;
    payout_request.created_at = now;
    payout_request.updated_at = now;

    emit!(SubmitPayoutRequestEvent {
        university: payout_request.university,
        payout_request: payout_request.key(),
        id,
        amount,
        method,
        available_balance: university.balance().available_balance,
    });

    Ok(())
}

#[event]
pub struct SubmitPayoutRequestEvent {
    pub university: Pubkey,
    pub payout_request: Pubkey,
    pub id: u32,
    pub amount: u64,
    pub method: PayoutMethod,
    pub available_balance: u64,
}
