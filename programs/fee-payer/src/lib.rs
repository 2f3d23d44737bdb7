#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;
use instructions::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

#[cfg(test)]
mod test_utils;

declare_id!("5HvJqqCJRTjLya5eEd8wSbZh2zhBUnNgySdViGkZoAwZ");

#[program]
pub mod fee_payer {
    use super::*;

    pub fn initialise_config(
        ctx: Context<InitialiseConfig>,
        receiver: Option<Pubkey>,
    ) -> Result<()> {
        process_initialise_config(ctx, receiver)
    }

    pub fn transfer_sol(ctx: Context<TransferSol>, amount: u64) -> Result<()> {
        process_transfer_sol(ctx, amount)
    }
}
