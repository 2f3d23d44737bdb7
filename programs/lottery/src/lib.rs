#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;
use instructions::*;

/// Program-wide constants such as account sizing and seed lengths.
pub mod constants;

/// Custom error types returned when instructions fail.
pub mod error;

/// Events emitted at every lottery state transition.
pub mod events;

/// Instruction handlers: creating a lottery, buying tickets,
/// picking and paying out the winner.
pub mod instructions;

/// Derivation of ticket addresses from their index.
pub mod pda;

/// On-chain state: the `Lottery` and its `Ticket` accounts.
pub mod state;

#[cfg(test)]
mod test_utils;

declare_id!("HLkognudb187tQonWj95oR3hFTrxHaR53AUYHLAfwec");

#[program]
pub mod lottery {
    use super::*;

    pub fn initialise(ctx: Context<Initialise>, ticket_price: u64, oracle: Pubkey) -> Result<()> {
        process_initialise(ctx, ticket_price, oracle)
    }

    pub fn buy_ticket(ctx: Context<BuyTicket>) -> Result<()> {
        process_buy_ticket(ctx)
    }

    pub fn pick_winner(ctx: Context<PickWinner>, winner_index: u32) -> Result<()> {
        process_pick_winner(ctx, winner_index)
    }

    pub fn pay_out_winner(ctx: Context<PayOutWinner>) -> Result<()> {
        process_pay_out_winner(ctx)
    }
}
