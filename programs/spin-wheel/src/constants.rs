pub const POOL_SEED: &[u8] = b"sw_game_seeds";
pub const VAULT_AUTHORITY_SEED: &[u8] = b"escrow";
pub const VAULT_SEED: &[u8] = b"sw_token-seed";

/// Slot capacity of a pool, fixed by the pool account size
pub const MAX_SLOTS: usize = 15;
