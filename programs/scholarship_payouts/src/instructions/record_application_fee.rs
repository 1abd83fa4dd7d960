use crate::{error::*, ledger::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct RecordApplicationFee<'info> {
    #[account(seeds = [b"platform"], bump = platform.bump)]
    platform: Account<'info, Platform>,
    #[account(mut, address = platform.authority)]
    platform_authority: Signer<'info>,
    #[account(
        seeds = [b"scholarship", scholarship.university.as_ref(), scholarship.id.to_le_bytes().as_ref()],
        bump = scholarship.bump,
    )]
    scholarship: Account<'info, Scholarship>,
    /// CHECK: the applicant; only its key is recorded
    student: UncheckedAccount<'info>,
    #[account(
        init,
        payer = platform_authority,
        seeds = [b"application_fee", scholarship.key().as_ref(), student.key().as_ref()],
        bump,
        space = 8 + ApplicationFee::SPACE,
    )]
    application_fee: Account<'info, ApplicationFee>,
    system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct ConfirmFeePayment<'info> {
    #[account(seeds = [b"platform"], bump = platform.bump)]
    platform: Account<'info, Platform>,
    #[account(address = platform.authority)]
    platform_authority: Signer<'info>,
    #[account(
        mut,
        seeds = [
            b"application_fee",
            application_fee.scholarship.as_ref(),
            application_fee.student.as_ref(),
        ],
        bump = application_fee.bump,
    )]
    application_fee: Account<'info, ApplicationFee>,
    #[account(mut, address = application_fee.university)]
    university: Account<'info, University>,
}

/// Opens an unpaid fee record when a student starts checkout.
pub fn record_application_fee(ctx: Context<RecordApplicationFee>, dependent_count: u8) -> Result<()> {
    let scholarship = &ctx.accounts.scholarship;
    let application_fee = &mut ctx.accounts.application_fee;
    application_fee.bump = *ctx.bumps.get("application_fee").unwrap();
    application_fee.university = scholarship.university;
    application_fee.scholarship = scholarship.key();
    application_fee.student = ctx.accounts.student.key();
    application_fee.fee_amount = scholarship.application_fee;
    application_fee.dependent_count = dependent_count;
    application_fee.created_at = Clock::get()?.unix_timestamp;

    emit!(RecordApplicationFeeEvent {
        university: application_fee.university,
        scholarship: application_fee.scholarship,
        student: application_fee.student,
        fee_amount: application_fee.fee_amount,
        dependent_count,
    });

    Ok(())
}

/// Marks the fee paid once the payment provider settles it and credits the
/// effective fee to the university's revenue.
pub fn confirm_fee_payment(ctx: Context<ConfirmFeePayment>) -> Result<()> {
    let application_fee = &mut ctx.accounts.application_fee;
    require!(!application_fee.is_paid, ScholarshipError::FeeAlreadyPaid);

    let credited = effective_fee(
        application_fee.fee_amount,
        application_fee.dependent_count,
        ctx.accounts.platform.dependent_surcharge,
    );
    let university = &mut ctx.accounts.university;
    university.revenue_sum = university
        .revenue_sum
        .checked_add(credited)
        .ok_or(ScholarshipError::ArithmeticOverflow)?;

    application_fee.is_paid = true;
    application_fee.paid_at = Clock::get()?.unix_timestamp;

    emit!(ConfirmFeePaymentEvent {
        university: university.key(),
        application_fee: application_fee.key(),
        credited,
        revenue_sum: university.revenue_sum,
    });

    Ok(())
}

#[event]
pub struct RecordApplicationFeeEvent {
    pub university: Pubkey,
    pub scholarship: Pubkey,
    pub student: Pubkey,
    pub fee_amount: u64,
    pub dependent_count: u8,
}

#[event]
pub struct ConfirmFeePaymentEvent {
    pub university: Pubkey,
    pub application_fee: Pubkey,
    pub credited: u64,
    pub revenue_sum: u64,
}
