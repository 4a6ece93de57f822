use anchor_lang::prelude::*;

#[event]
pub struct PoolInitialized {
    pub pool: Pubkey,
    pub owner: Pubkey,
}

#[event]
pub struct SlotConfigured {
    pub pool: Pubkey,
    pub index: u8,
    pub weight: u32,
    pub reward_amount: u64,
    pub mint: Pubkey,
    pub vault: Pubkey,
}

#[event]
pub struct WheelSpun {
    pub pool: Pubkey,
    pub index: u8,
    pub total_weight: u64,
    pub draw_count: u64,
}

#[event]
pub struct RewardsTransferred {
    pub pool: Pubkey,
    pub index: u8,
    pub vault: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
}

#[event]
pub struct VaultClosed {
    pub pool: Pubkey,
    pub index: u8,
    pub vault: Pubkey,
}
