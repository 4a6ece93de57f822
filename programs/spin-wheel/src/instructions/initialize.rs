use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::SpinWheelError;
use crate::events::PoolInitialized;
use crate::guard;
use crate::state::{Pool, Slot};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init_if_needed,
        seeds = [POOL_SEED],
        bump,
        payer = owner,
        space = Pool::SIZE,
    )]
    pub pool: Box<Account<'info, Pool>>,

    /// CHECK: keyless PDA, only ever used as the vaults' token authority
    #[account(seeds = [VAULT_AUTHORITY_SEED], bump)]
    pub vault_authority: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_initialize(ctx: Context<Initialize>, bump: u8) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    require!(!pool.is_initialized(), SpinWheelError::AlreadyInitialized);
    guard::verify_program_address(&[POOL_SEED], bump, &pool.key())?;

    pool.owner = ctx.accounts.owner.key();
    pool.bump = bump;
    pool.vault_authority_bump = ctx.bumps.vault_authority;
    pool.slot_count = 0;
    pool.last_drawn_index = None;
    pool.draw_count = 0;
    pool.slots = [Slot::default(); MAX_SLOTS];

    msg!("Pool initialized, owner {}", pool.owner);

    emit!(PoolInitialized {
        pool: pool.key(),
        owner: pool.owner,
    });

    Ok(())
}
