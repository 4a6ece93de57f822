use anchor_lang::prelude::*;

#[error_code]
pub enum SpinWheelError {
    #[msg("Pool is already initialized")]
    AlreadyInitialized,

    #[msg("Unauthorized: signer does not match pool owner")]
    Unauthorized,

    #[msg("Slot index must equal the number of configured slots")]
    IndexOutOfOrder,

    #[msg("Slot weight must be greater than zero")]
    InvalidWeight,

    #[msg("Source token account cannot cover the reward amount")]
    InsufficientFunds,

    #[msg("The wheel has not been spun yet")]
    NoDrawYet,

    #[msg("Slot index does not match the last drawn index")]
    IndexMismatch,

    #[msg("Address does not match its seeds and bump")]
    AddressMismatch,

    #[msg("Vault holds no tokens")]
    VaultEmpty,

    #[msg("Pool slot capacity reached")]
    CapacityExceeded,

    #[msg("Pool has no configured slots")]
    NoSlots,

    #[msg("Reward amount must be greater than zero")]
    InvalidAmount,

    #[msg("Token mint does not match slot mint")]
    MintMismatch,

    #[msg("Vault still holds tokens")]
    VaultNotEmpty,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("SlotHashes sysvar data is malformed")]
    InvalidSlotHashes,

    #[msg("Vault already backs another slot")]
    VaultInUse,
}
