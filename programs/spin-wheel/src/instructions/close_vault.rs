use anchor_lang::prelude::*;
use anchor_spl::token::{self, CloseAccount, Token, TokenAccount};

use crate::constants::*;
use crate::errors::SpinWheelError;
use crate::events::VaultClosed;
use crate::guard;
use crate::state::Pool;

#[derive(Accounts)]
pub struct CloseVault<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        seeds = [POOL_SEED],
        bump = pool.bump,
        constraint = pool.owner == owner.key() @ SpinWheelError::Unauthorized,
    )]
    pub pool: Box<Account<'info, Pool>>,

    /// CHECK: keyless PDA, only ever used as the vaults' token authority
    #[account(seeds = [VAULT_AUTHORITY_SEED], bump = pool.vault_authority_bump)]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(mut)]
    pub token_vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

pub fn handle_close_vault(ctx: Context<CloseVault>, index: u8) -> Result<()> {
    let pool = &ctx.accounts.pool;
    let slot = *pool.slot(index)?;

    guard::verify_vault(&pool.key(), &slot, &ctx.accounts.token_vault.key())?;
    require!(
        ctx.accounts.token_vault.amount == 0,
        SpinWheelError::VaultNotEmpty
    );

    let authority_bump = [pool.vault_authority_bump];
    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_AUTHORITY_SEED, &authority_bump]];

    // Rent goes back to the owner who paid for the vault
    token::close_account(CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        CloseAccount {
            account: ctx.accounts.token_vault.to_account_info(),
            destination: ctx.accounts.owner.to_account_info(),
            authority: ctx.accounts.vault_authority.to_account_info(),
        },
        signer_seeds,
    ))?;

    emit!(VaultClosed {
        pool: pool.key(),
        index,
        vault: slot.vault,
    });

    Ok(())
}
