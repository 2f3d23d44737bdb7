use anchor_lang::prelude::*;

use crate::events::WinnerPicked;
use crate::state::Lottery;

/// Accounts required to pick a lottery winner.
///
/// This ensures that:
/// 1. Only the oracle recorded on the lottery can pick a winner.
/// 2. The index refers to a sold ticket.
/// 3. A winner hasn't already been chosen.
#[derive(Accounts)]
pub struct PickWinner<'info> {
    /// The main lottery state account.
    #[account(mut)]
    pub lottery: Account<'info, Lottery>,

    /// The oracle responsible for picking the winner.
    pub oracle: Signer<'info>,
}

pub fn process_pick_winner(ctx: Context<PickWinner>, winner_index: u32) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;

    lottery.declare_winner(&ctx.accounts.oracle.key(), winner_index)?;

    msg!("Ticket num: {}", lottery.count);
    msg!("Winner: {}", winner_index);

    emit!(WinnerPicked {
        lottery: lottery.key(),
        winner_index,
    });

    Ok(())
}
