use crate::{config::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = platform_authority,
        seeds = [b"platform"],
        bump,
        space = 8 + Platform::SPACE,
    )]
    platform: Account<'info, Platform>,
    #[account(mut)]
    platform_authority: Signer<'info>,
    system_program: Program<'info, System>,
}

pub fn initialize(ctx: Context<Initialize>, dependent_surcharge: u64) -> Result<()> {
    if cfg!(production) {
        require_eq!(dependent_surcharge, DEPENDENT_SURCHARGE);
    }

    let platform = &mut ctx.accounts.platform;
    platform.bump = *ctx.bumps.get("platform").unwrap();
    platform.authority = ctx.accounts.platform_authority.key();
    platform.dependent_surcharge = dependent_surcharge;

    emit!(InitializeEvent {
        authority: platform.authority,
        dependent_surcharge,
    });

    Ok(())
}

#[event]
pub struct InitializeEvent {
    pub authority: Pubkey,
    pub dependent_surcharge: u64,
}
