pub mod initialize;
pub mod set_item;
pub mod spin;
pub mod transfer_rewards;
pub mod close_vault;

pub use initialize::*;
pub use set_item::*;
pub use spin::*;
pub use transfer_rewards::*;
pub use close_vault::*;
