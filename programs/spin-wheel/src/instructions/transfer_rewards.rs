use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::errors::SpinWheelError;
use crate::events::RewardsTransferred;
use crate::guard;
use crate::state::Pool;

#[derive(Accounts)]
pub struct TransferRewards<'info> {
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

    #[account(mut)]
    pub dest_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

/// Full vault balance, refused once the vault has been drained.
pub fn payout_amount(vault_balance: u64) -> Result<u64> {
    require!(vault_balance > 0, SpinWheelError::VaultEmpty);
    Ok(vault_balance)
}

pub fn handle_transfer_rewards(ctx: Context<TransferRewards>, index: u8) -> Result<()> {
    let pool = &ctx.accounts.pool;
    let slot = *pool.claimable_slot(index)?;

    guard::verify_vault(&pool.key(), &slot, &ctx.accounts.token_vault.key())?;
    require_keys_eq!(
        ctx.accounts.token_vault.mint,
        slot.mint,
        SpinWheelError::MintMismatch
    );
    require_keys_eq!(
        ctx.accounts.dest_account.mint,
        slot.mint,
        SpinWheelError::MintMismatch
    );

    let amount = payout_amount(ctx.accounts.token_vault.amount)?;

    // Vault authority PDA signs for the vault
    let authority_bump = [pool.vault_authority_bump];
    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_AUTHORITY_SEED, &authority_bump]];

    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.token_vault.to_account_info(),
                to: ctx.accounts.dest_account.to_account_info(),
                authority: ctx.accounts.vault_authority.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    msg!("Released {} tokens from slot {}", amount, index);

    emit!(RewardsTransferred {
        pool: pool.key(),
        index,
        vault: slot.vault,
        destination: ctx.accounts.dest_account.key(),
        amount,
    });

    Ok(())
}
