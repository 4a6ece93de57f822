use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::slot_hashes;

use crate::constants::*;
use crate::draw::{self, SlotHashEntropy};
use crate::events::WheelSpun;
use crate::state::Pool;

#[derive(Accounts)]
pub struct SpinWheel<'info> {
    #[account(
        mut,
        seeds = [POOL_SEED],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, Pool>>,

    /// CHECK: address constrained to the SlotHashes sysvar
    #[account(address = slot_hashes::ID)]
    pub slot_hashes: UncheckedAccount<'info>,
}

pub fn handle_spin_wheel(ctx: Context<SpinWheel>) -> Result<()> {
    let clock = Clock::get()?;
    let pool_key = ctx.accounts.pool.key();

    let entropy = SlotHashEntropy::new(
        &ctx.accounts.slot_hashes,
        &clock,
        pool_key,
        ctx.accounts.pool.draw_count,
    );

    let pool = &mut ctx.accounts.pool;
    let index = draw::spin(pool, &entropy)?;
    let total_weight = pool.total_weight()?;

    msg!("Wheel landed on slot {}", index);

    emit!(WheelSpun {
        pool: pool_key,
        index,
        total_weight,
        draw_count: pool.draw_count,
    });

    Ok(())
}
