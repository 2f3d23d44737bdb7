use anchor_lang::prelude::*;

/// Seed of the fee configuration PDA.
pub const FEE_CONFIG_SEED: &[u8] = b"fee_config";

/// Receiver the deployment scripts configure by default.
pub const DEFAULT_RECEIVER: Pubkey = pubkey!("3y6mdTynqHFcL2DGSZukvKjcEqFpwCR1A2koPkmkwE28");
