use crate::{featured, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct FeatureScholarship<'info> {
    #[account(
        mut,
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

pub fn highlight_scholarship(ctx: Context<FeatureScholarship>) -> Result<()> {
    let university = &mut ctx.accounts.university;
    let scholarship = &mut ctx.accounts.scholarship;
    let featured_order = featured::highlight(&mut university.featured, scholarship.id)?;
    scholarship.is_highlighted = true;

    emit!(FeaturedEvent {
        university: university.key(),
        featured: university.featured.clone(),
    });
    msg!("Scholarship {} featured at {}", scholarship.id, featured_order);

    Ok(())
}

pub fn unhighlight_scholarship(ctx: Context<FeatureScholarship>) -> Result<()> {
    let university = &mut ctx.accounts.university;
    let scholarship = &mut ctx.accounts.scholarship;
    featured::unhighlight(&mut university.featured, scholarship.id)?;
    scholarship.is_highlighted = false;

    emit!(FeaturedEvent {
        university: university.key(),
        featured: university.featured.clone(),
    });

    Ok(())
}

pub fn reorder_featured(ctx: Context<FeatureScholarship>, direction: Direction) -> Result<()> {
    let university = &mut ctx.accounts.university;
    let id = ctx.accounts.scholarship.id;
    if featured::reorder(&mut university.featured, id, direction)? {
        emit!(FeaturedEvent {
            university: university.key(),
            featured: university.featured.clone(),
        });
    }

    Ok(())
}

/// Featured scholarship ids in display order after a change.
#[event]
pub struct FeaturedEvent {
    pub university: Pubkey,
    pub featured: Vec<u16>,
}
