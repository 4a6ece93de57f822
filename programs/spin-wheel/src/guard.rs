use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::SpinWheelError;
use crate::state::Slot;

/// Canonical program address and bump for `seeds`.
pub fn derive(seeds: &[&[u8]]) -> (Pubkey, u8) {
    Pubkey::find_program_address(seeds, &crate::ID)
}

/// Re-derives the address for `seeds` + `bump` and checks it against the
/// address the caller handed in.
pub fn verify_program_address(seeds: &[&[u8]], bump: u8, expected: &Pubkey) -> Result<()> {
    let bump_seed = [bump];
    let mut signer_seeds = seeds.to_vec();
    signer_seeds.push(&bump_seed);

    let derived = Pubkey::create_program_address(&signer_seeds, &crate::ID)
        .map_err(|_| SpinWheelError::AddressMismatch)?;
    require_keys_eq!(derived, *expected, SpinWheelError::AddressMismatch);
    Ok(())
}

pub fn pool_address() -> (Pubkey, u8) {
    derive(&[POOL_SEED])
}

pub fn vault_authority_address() -> (Pubkey, u8) {
    derive(&[VAULT_AUTHORITY_SEED])
}

pub fn vault_address(pool: &Pubkey, nonce: &Pubkey) -> (Pubkey, u8) {
    derive(&[VAULT_SEED, pool.as_ref(), nonce.as_ref()])
}

/// Checks that `supplied` is the vault recorded for `slot` and that the
/// recorded vault still re-derives from the slot's nonce and bump.
pub fn verify_vault(pool: &Pubkey, slot: &Slot, supplied: &Pubkey) -> Result<()> {
    verify_program_address(
        &[VAULT_SEED, pool.as_ref(), slot.nonce.as_ref()],
        slot.vault_bump,
        &slot.vault,
    )?;
    require_keys_eq!(*supplied, slot.vault, SpinWheelError::AddressMismatch);
    Ok(())
}
