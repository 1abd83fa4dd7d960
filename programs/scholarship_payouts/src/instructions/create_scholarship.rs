use crate::state::*;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct CreateScholarship<'info> {
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
            b"scholarship",
            university.key().as_ref(),
            university.scholarships_count.to_le_bytes().as_ref(),
        ],
        bump,
        space = 8 + Scholarship::SPACE,
    )]
    scholarship: Account<'info, Scholarship>,
    #[account(mut)]
    university_authority: Signer<'info>,
    system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct SetApplicationFee<'info> {
    #[account(
        seeds = [b"university", university_authority.key().as_ref()],
        bump = university.bump,
    )]
    university: Account<'info, University>,
    #[account(
        mut,
        has_one = university,
        seeds = [b"scholarship", university.key().as_ref(), scholarship.id.to_le_bytes().as_ref()],
        bump = scholarship.bump,
    )]
    scholarship: Account<'info, Scholarship>,
    university_authority: Signer<'info>,
}

pub fn create_scholarship(ctx: Context<CreateScholarship>, application_fee: u64) -> Result<()> {
    let university = &mut ctx.accounts.university;
    let id = university.scholarships_count;
    university.scholarships_count += 1;

    let scholarship = &mut ctx.accounts.scholarship;
    scholarship.bump = *ctx.bumps.get("scholarship").unwrap();
    scholarship.university = university.key();
    scholarship.id = id;
    scholarship.application_fee = application_fee;

    emit!(CreateScholarshipEvent {
        university: scholarship.university,
        scholarship: scholarship.key(),
        id,
        application_fee,
    });

    Ok(())
}

/// Applies to checkouts recorded from now on; existing fee records keep
/// the amount they were created with.
pub fn set_application_fee(ctx: Context<SetApplicationFee>, application_fee: u64) -> Result<()> {
    ctx.accounts.scholarship.application_fee = application_fee;

    emit!(SetApplicationFeeEvent {
        scholarship: ctx.accounts.scholarship.key(),
        application_fee,
    });

    Ok(())
}

#[event]
pub struct CreateScholarshipEvent {
    pub university: Pubkey,
    pub scholarship: Pubkey,
    pub id: u16,
    pub application_fee: u64,
}

#[event]
pub struct SetApplicationFeeEvent {
    pub scholarship: Pubkey,
    pub application_fee: u64,
}
