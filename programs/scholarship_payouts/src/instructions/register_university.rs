use crate::state::*;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct RegisterUniversity<'info> {
    #[account(mut, seeds = [b"platform"], bump = platform.bump)]
    platform: Account<'info, Platform>,
    #[account(
        init,
        payer = university_authority,
        seeds = [b"university", university_authority.key().as_ref()],
        bump,
        space = 8 + University::SPACE,
    )]
    university: Account<'info, University>,
    #[account(mut)]
    university_authority: Signer<'info>,
    system_program: Program<'info, System>,
}

pub fn register_university(ctx: Context<RegisterUniversity>) -> Result<()> {
    let platform = &mut ctx.accounts.platform;
    let id = platform.universities_count;
    platform.universities_count += 1;

    let university = &mut ctx.accounts.university;
    university.bump = *ctx.bumps.get("university").unwrap();
    university.authority = ctx.accounts.university_authority.key();
    university.id = id;

    emit!(RegisterUniversityEvent {
        university: university.key(),
        authority: university.authority,
        id,
    });

    Ok(())
}

#[event]
pub struct RegisterUniversityEvent {
    pub university: Pubkey,
    pub authority: Pubkey,
    pub id: u32,
}
