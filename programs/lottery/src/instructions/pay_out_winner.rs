use anchor_lang::prelude::*;

use crate::events::WinnerPaid;
use crate::pda::index_seed;
use crate::state::{payable_amount, Lottery, Ticket};

/// Accounts required for paying out the lottery prize.
///
/// Ensures:
/// 1. The ticket was issued by this lottery (its address re-derives from its index).
/// 2. The winner account is the player that bought the ticket.
///
/// Nobody needs to sign beyond the fee payer: the prize can only ever
/// reach the submitter of the winning ticket.
#[derive(Accounts)]
pub struct PayOutWinner<'info> {
    /// The lottery holding the pot.
    #[account(mut)]
    pub lottery: Account<'info, Lottery>,

    /// The ticket claimed to be the winner.
    #[account(
        seeds = [index_seed(ticket.idx).as_ref(), lottery.key().as_ref()],
        bump = ticket.bump,
    )]
    pub ticket: Account<'info, Ticket>,

    /// CHECK: Only receives lamports; must be the ticket's submitter.
    #[account(mut, constraint = winner.key() == ticket.submitter)]
    pub winner: UncheckedAccount<'info>,

    /// Rent sysvar for the lottery's rent-exempt reserve.
    pub rent: Sysvar<'info, Rent>,
}

/// Processes the payout for the winner.
///
/// Steps:
/// 1. Verify that a winner has been chosen and not yet paid.
/// 2. Verify the ticket holds the winning index.
/// 3. Move everything above the lottery's rent-exempt reserve to the winner.
pub fn process_pay_out_winner(ctx: Context<PayOutWinner>) -> Result<()> {
    let ticket_index = ctx.accounts.ticket.idx;
    ctx.accounts.lottery.settle(ticket_index)?;

    let lottery_info = ctx.accounts.lottery.to_account_info();
    let reserve = ctx.accounts.rent.minimum_balance(lottery_info.data_len());
    let amount = payable_amount(lottery_info.lamports(), reserve)?;

    **lottery_info.try_borrow_mut_lamports()? -= amount;
    **ctx.accounts.winner.try_borrow_mut_lamports()? += amount;

    msg!("Winning ticket: {}", ticket_index);
    msg!("Paid {} lamports to {}", amount, ctx.accounts.winner.key());

    emit!(WinnerPaid {
        lottery: ctx.accounts.lottery.key(),
        winner: ctx.accounts.winner.key(),
        amount,
    });

    Ok(())
}
