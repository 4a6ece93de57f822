use anchor_lang::prelude::*;

use crate::constants::MAX_SLOTS;
use crate::draw::select_weighted;
use crate::errors::SpinWheelError;

#[account]
#[derive(Debug, Default)]
pub struct Pool {
    /// Account allowed to configure slots and release rewards
    pub owner: Pubkey,
    /// PDA bump seed
    pub bump: u8,
    /// Bump of the vault authority PDA that signs vault withdrawals
    pub vault_authority_bump: u8,
    /// Number of configured slots, also the next index to configure
    pub slot_count: u8,
    /// Slot picked by the most recent spin
    pub last_drawn_index: Option<u8>,
    /// Spins performed (lifetime counter)
    pub draw_count: u64,
    /// Fixed-capacity slot table, only `..slot_count` is live
    pub slots: [Slot; MAX_SLOTS],
}

impl Pool {
    pub const SIZE: usize = 8  // discriminator
        + 32   // owner
        + 1    // bump
        + 1    // vault_authority_bump
        + 1    // slot_count
        + 2    // last_drawn_index
        + 8    // draw_count
        + Slot::SIZE * MAX_SLOTS; // slots

    pub fn is_initialized(&self) -> bool {
        self.owner != Pubkey::default()
    }

    pub fn configured_slots(&self) -> &[Slot] {
        &self.slots[..self.slot_count as usize]
    }

    /// Looks up a configured slot.
    pub fn slot(&self, index: u8) -> Result<&Slot> {
        self.configured_slots()
            .get(index as usize)
            .ok_or_else(|| error!(SpinWheelError::IndexOutOfOrder))
    }

    /// Appends a slot. Indices are handed out strictly in order, so `index`
    /// must be the current slot count.
    pub fn push_slot(&mut self, index: u8, slot: Slot) -> Result<()> {
        require!(index == self.slot_count, SpinWheelError::IndexOutOfOrder);
        require!(
            (self.slot_count as usize) < MAX_SLOTS,
            SpinWheelError::CapacityExceeded
        );
        // A vault backs exactly one slot, even after an earlier one was closed
        require!(
            !self
                .configured_slots()
                .iter()
                .any(|s| s.nonce == slot.nonce || s.vault == slot.vault),
            SpinWheelError::VaultInUse
        );
        require!(slot.weight > 0, SpinWheelError::InvalidWeight);
        require!(slot.reward_amount > 0, SpinWheelError::InvalidAmount);

        self.slots[index as usize] = slot;
        self.slot_count = self
            .slot_count
            .checked_add(1)
            .ok_or(SpinWheelError::MathOverflow)?;
        Ok(())
    }

    pub fn total_weight(&self) -> Result<u64> {
        self.configured_slots()
            .iter()
            .try_fold(0u64, |acc, slot| acc.checked_add(slot.weight as u64))
            .ok_or_else(|| error!(SpinWheelError::MathOverflow))
    }

    /// Stores the slot hit by `point`, a value in `[0, total_weight)`.
    pub fn record_draw(&mut self, point: u64) -> Result<u8> {
        require!(self.slot_count > 0, SpinWheelError::NoSlots);

        let weights = self.configured_slots().iter().map(|s| s.weight as u64);
        let index = select_weighted(weights, point).ok_or(SpinWheelError::MathOverflow)? as u8;

        self.last_drawn_index = Some(index);
        self.draw_count = self
            .draw_count
            .checked_add(1)
            .ok_or(SpinWheelError::MathOverflow)?;
        Ok(index)
    }

    /// Returns the slot that may be paid out, which is only ever the one
    /// named by the last draw.
    pub fn claimable_slot(&self, index: u8) -> Result<&Slot> {
        let drawn = self.last_drawn_index.ok_or(SpinWheelError::NoDrawYet)?;
        require!(index == drawn, SpinWheelError::IndexMismatch);
        self.slot(index)
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Slot {
    /// Relative draw weight
    pub weight: u32,
    /// Tokens deposited into the vault at configuration
    pub reward_amount: u64,
    /// Mint paid out by this slot
    pub mint: Pubkey,
    /// The slot's token vault (PDA)
    pub vault: Pubkey,
    /// Vault bump seed
    pub vault_bump: u8,
    /// Per-slot discriminator the vault address is derived from
    pub nonce: Pubkey,
}

impl Slot {
    pub const SIZE: usize = 4 // weight
        + 8    // reward_amount
        + 32   // mint
        + 32   // vault
        + 1    // vault_bump
        + 32;  // nonce
}
