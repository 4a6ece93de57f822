use anchor_lang::prelude::*;

pub mod constants;
pub mod draw;
pub mod errors;
pub mod events;
pub mod guard;
pub mod instructions;
pub mod state;


use instructions::*;

declare_id!("EL7sdb92YQFzXdU9hgxHd67znWXCSiLaergfFr2ZdhsZ");

#[program]
pub mod spin_wheel {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, bump: u8) -> Result<()> {
        instructions::initialize::handle_initialize(ctx, bump)
    }

    pub fn set_item(
        ctx: Context<SetItem>,
        bump: u8,
        index: u8,
        weight: u32,
        amount: u64,
    ) -> Result<()> {
        instructions::set_item::handle_set_item(ctx, bump, index, weight, amount)
    }

    pub fn spin_wheel(ctx: Context<SpinWheel>) -> Result<()> {
        instructions::spin::handle_spin_wheel(ctx)
    }

    pub fn transfer_rewards(ctx: Context<TransferRewards>, index: u8) -> Result<()> {
        instructions::transfer_rewards::handle_transfer_rewards(ctx, index)
    }

    pub fn close_vault(ctx: Context<CloseVault>, index: u8) -> Result<()> {
        instructions::close_vault::handle_close_vault(ctx, index)
    }
}
