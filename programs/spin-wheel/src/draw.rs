use anchor_lang::prelude::*;
use solana_sha256_hasher::hashv;

use crate::errors::SpinWheelError;
use crate::state::Pool;

/// Source of the 32-byte seed a spin is derived from.
pub trait EntropySource {
    fn seed(&self) -> Result<[u8; 32]>;
}

/// Entropy from the most recent SlotHashes entry, mixed with the clock, the
/// pool address and the pool's draw counter so repeated spins within one
/// slot land on different points.
pub struct SlotHashEntropy<'a, 'info> {
    slot_hashes: &'a AccountInfo<'info>,
    clock: &'a Clock,
    pool: Pubkey,
    draw_count: u64,
}

impl<'a, 'info> SlotHashEntropy<'a, 'info> {
    pub fn new(
        slot_hashes: &'a AccountInfo<'info>,
        clock: &'a Clock,
        pool: Pubkey,
        draw_count: u64,
    ) -> Self {
        Self {
            slot_hashes,
            clock,
            pool,
            draw_count,
        }
    }
}

impl EntropySource for SlotHashEntropy<'_, '_> {
    fn seed(&self) -> Result<[u8; 32]> {
        let data = self.slot_hashes.try_borrow_data()?;
        let (slot, hash) = latest_slot_hash(&data)?;

        #[cfg(feature = "verbose")]
        msg!("Entropy from slot hash at slot {}", slot);

        Ok(hashv(&[
            hash,
            &slot.to_le_bytes(),
            &self.clock.slot.to_le_bytes(),
            &self.clock.unix_timestamp.to_le_bytes(),
            self.pool.as_ref(),
            &self.draw_count.to_le_bytes(),
        ])
        .to_bytes())
    }
}

/// Parses the newest `(slot, hash)` entry out of raw SlotHashes sysvar data.
/// Layout: u64 entry count, then `count` entries of u64 slot + 32-byte hash,
/// newest first.
pub fn latest_slot_hash(data: &[u8]) -> Result<(u64, &[u8])> {
    require!(data.len() >= 8 + 40, SpinWheelError::InvalidSlotHashes);

    let count = u64::from_le_bytes(
        data[0..8]
            .try_into()
            .map_err(|_| SpinWheelError::InvalidSlotHashes)?,
    );
    require!(count > 0, SpinWheelError::InvalidSlotHashes);

    let slot = u64::from_le_bytes(
        data[8..16]
            .try_into()
            .map_err(|_| SpinWheelError::InvalidSlotHashes)?,
    );
    Ok((slot, &data[16..48]))
}

/// Maps `seed` to a value uniform on `[0, bound)`. Words falling in the
/// biased tail of the u64 range are rejected and the seed is rehashed.
pub fn uniform_below(seed: [u8; 32], bound: u64) -> Result<u64> {
    require!(bound > 0, SpinWheelError::NoSlots);

    // Largest accepted value; `zone + 1` is a multiple of `bound`.
    let zone = u64::MAX - (u64::MAX - bound + 1) % bound;
    let mut seed = seed;
    loop {
        for word in seed.chunks_exact(8) {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(word);
            let value = u64::from_le_bytes(bytes);
            if value <= zone {
                return Ok(value % bound);
            }
        }
        seed = hashv(&[&seed]).to_bytes();
    }
}

/// Linear weighted pick: the first index whose cumulative weight exceeds
/// `point`. Returns `None` when `point` is not below the total weight.
pub fn select_weighted<I>(weights: I, point: u64) -> Option<usize>
where
    I: IntoIterator<Item = u64>,
{
    let mut cumulative: u64 = 0;
    for (index, weight) in weights.into_iter().enumerate() {
        cumulative = cumulative.checked_add(weight)?;
        if point < cumulative {
            return Some(index);
        }
    }
    None
}

/// Spins the wheel: draws a point on `[0, total_weight)` from `entropy` and
/// records the slot it lands on.
pub fn spin<E: EntropySource>(pool: &mut Pool, entropy: &E) -> Result<u8> {
    let total_weight = pool.total_weight()?;
    require!(total_weight > 0, SpinWheelError::NoSlots);

    let point = uniform_below(entropy.seed()?, total_weight)?;

    #[cfg(feature = "verbose")]
    msg!("Spin point {} of {}", point, total_weight);

    pool.record_draw(point)
}
