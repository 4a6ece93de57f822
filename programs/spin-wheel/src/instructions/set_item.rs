use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::errors::SpinWheelError;
use crate::events::SlotConfigured;
use crate::guard;
use crate::state::{Pool, Slot};

#[derive(Accounts)]
pub struct SetItem<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL_SEED],
        bump = pool.bump,
        constraint = pool.owner == owner.key() @ SpinWheelError::Unauthorized,
    )]
    pub pool: Box<Account<'info, Pool>>,

    pub token_mint: Account<'info, Mint>,

    /// CHECK: throwaway per-slot nonce, only its address is used as a seed
    pub rand: UncheckedAccount<'info>,

    /// CHECK: keyless PDA, only ever used as the vaults' token authority
    #[account(seeds = [VAULT_AUTHORITY_SEED], bump = pool.vault_authority_bump)]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        init,
        seeds = [VAULT_SEED, pool.key().as_ref(), rand.key().as_ref()],
        bump,
        payer = owner,
        token::mint = token_mint,
        token::authority = vault_authority,
    )]
    pub token_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = reward_account.mint == token_mint.key() @ SpinWheelError::MintMismatch,
    )]
    pub reward_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

/// Source balance must cover the whole deposit.
pub fn check_funding(source_balance: u64, amount: u64) -> Result<()> {
    require!(source_balance >= amount, SpinWheelError::InsufficientFunds);
    Ok(())
}

pub fn handle_set_item(
    ctx: Context<SetItem>,
    bump: u8,
    index: u8,
    weight: u32,
    amount: u64,
) -> Result<()> {
    let pool_key = ctx.accounts.pool.key();
    let nonce = ctx.accounts.rand.key();
    let vault = ctx.accounts.token_vault.key();
    let mint = ctx.accounts.token_mint.key();

    guard::verify_program_address(
        &[VAULT_SEED, pool_key.as_ref(), nonce.as_ref()],
        bump,
        &vault,
    )?;

    ctx.accounts.pool.push_slot(
        index,
        Slot {
            weight,
            reward_amount: amount,
            mint,
            vault,
            vault_bump: bump,
            nonce,
        },
    )?;

    check_funding(ctx.accounts.reward_account.amount, amount)?;

    // Fund the slot's vault from the owner's account
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.reward_account.to_account_info(),
                to: ctx.accounts.token_vault.to_account_info(),
                authority: ctx.accounts.owner.to_account_info(),
            },
        ),
        amount,
    )?;

    msg!("Slot {} configured: weight {}, reward {}", index, weight, amount);

    emit!(SlotConfigured {
        pool: pool_key,
        index,
        weight,
        reward_amount: amount,
        mint,
        vault,
    });

    Ok(())
}
