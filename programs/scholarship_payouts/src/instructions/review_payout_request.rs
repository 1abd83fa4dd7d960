use crate::{config::*, error::*, payout::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct ReviewPayoutRequest<'info> {
    #[account(seeds = [b"platform"], bump = platform.bump)]
    platform: Account<'info, Platform>,
    #[account(address = platform.authority)]
    platform_authority: Signer<'info>,
    #[account(
        mut,
        seeds = [
            b"payout_request",
            payout_request.university.as_ref(),
            payout_request.id.to_le_bytes().as_ref(),
        ],
        bump = payout_request.bump,
    )]
    payout_request: Account<'info, PayoutRequest>,
    #[account(mut, address = payout_request.university)]
    university: Account<'info, University>,
}

#[derive(Accounts)]
pub struct CancelPayoutRequest<'info> {
    #[account(
        mut,
        seeds = [b"university", university_authority.key().as_ref()],
        bump = university.bump,
    )]
    university: Account<'info, University>,
    #[account(
        mut,
        has_one = university,
        seeds = [
            b"payout_request",
            university.key().as_ref(),
            payout_request.id.to_le_bytes().as_ref(),
        ],
        bump = payout_request.bump,
    )]
    payout_request: Account<'info, PayoutRequest>,
    university_authority: Signer<'info>,
}

fn transition(
    university: &mut University,
    payout_request: &mut PayoutRequest,
    event: PayoutEvent,
) -> Result<PayoutStatus> {
    let next = payout_request.status.apply(event)?;
    university.record_transition(payout_request.id, next)?;
    payout_request.status = next;
    payout_request.updated_at = Clock::get()?.unix_timestamp;
    Ok(next)
}

fn emit_transition(university: &Account<University>, payout_request: &Account<PayoutRequest>) {
    emit!(PayoutStatusEvent {
        university: university.key(),
        payout_request: payout_request.key(),
        id: payout_request.id,
        amount: payout_request.amount,
        status: payout_request.status,
        available_balance: university.balance().available_balance,
    });
}

pub fn approve_payout_request(ctx: Context<ReviewPayoutRequest>) -> Result<()> {
    let accounts = ctx.accounts;
    transition(
        &mut accounts.university,
        &mut accounts.payout_request,
        PayoutEvent::Approve,
    )?;
    emit_transition(&accounts.university, &accounts.payout_request);

    Ok(())
}

pub fn mark_payout_paid(ctx: Context<ReviewPayoutRequest>) -> Result<()> {
    let accounts = ctx.accounts;
    transition(
        &mut accounts.university,
        &mut accounts.payout_request,
        PayoutEvent::MarkPaid,
    )?;
    emit_transition(&accounts.university, &accounts.payout_request);

    Ok(())
}

pub fn reject_payout_request(
    ctx: Context<ReviewPayoutRequest>,
    admin_notes: Option<String>,
) -> Result<()> {
    if let Some(notes) = &admin_notes {
        require!(
            notes.len() <= MAX_ADMIN_NOTES_LEN,
            ScholarshipError::AdminNotesTooLong
        );
    }

    let accounts = ctx.accounts;
    transition(
        &mut accounts.university,
        &mut accounts.payout_request,
        PayoutEvent::Reject,
    )?;
    accounts.payout_request.admin_notes = admin_notes;
    emit_transition(&accounts.university, &accounts.payout_request);

    Ok(())
}

/// Withdraws a pending request; its amount becomes available again.
pub fn cancel_payout_request(ctx: Context<CancelPayoutRequest>) -> Result<()> {
    let accounts = ctx.accounts;
    transition(
        &mut accounts.university,
        &mut accounts.payout_request,
        PayoutEvent::Cancel,
    )?;
    emit_transition(&accounts.university, &accounts.payout_request);

    Ok(())
}

#[event]
pub struct PayoutStatusEvent {
    pub university: Pubkey,
    pub payout_request: Pubkey,
    pub id: u32,
    pub amount: u64,
    pub status: PayoutStatus,
    pub available_balance: u64,
}
