use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::DISCRIMINATOR_LEN;
use crate::events::TicketPurchased;
use crate::pda::index_seed;
use crate::state::{Lottery, Ticket};

/// Accounts required to buy a lottery ticket.
///
/// The ticket is created at the address derived from the lottery's current
/// counter, so a request built against a stale `count` fails the seeds
/// check. The raw constraint runs after the ticket's rent has been taken
/// from the player, which makes price plus rent the effective minimum.
#[derive(Accounts)]
pub struct BuyTicket<'info> {
    /// The lottery receiving the payment; its counter is incremented.
    #[account(mut)]
    pub lottery: Account<'info, Lottery>,

    /// The player buying (and paying rent for) the ticket.
    #[account(mut)]
    pub player: Signer<'info>,

    /// Ticket for the current index.
    #[account(
        init,
        payer = player,
        space = DISCRIMINATOR_LEN + Ticket::INIT_SPACE,
        seeds = [index_seed(lottery.count).as_ref(), lottery.key().as_ref()],
        bump,
        constraint = player.to_account_info().lamports() >= lottery.ticket_price,
    )]
    pub ticket: Account<'info, Ticket>,

    /// System program interface
    pub system_program: Program<'info, System>,
}

/// Buys a lottery ticket for the caller.
///
/// Steps performed:
/// 1. Transfer the ticket price from the player to the lottery.
/// 2. Record the player and index on the ticket.
/// 3. Increment the lottery ticket counter.
pub fn process_buy_ticket(ctx: Context<BuyTicket>) -> Result<()> {
    let price = ctx.accounts.lottery.ticket_price;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: ctx.accounts.lottery.to_account_info(),
            },
        ),
        price,
    )?;

    let lottery_key = ctx.accounts.lottery.key();
    let index = ctx.accounts.lottery.issue_ticket()?;

    let ticket = &mut ctx.accounts.ticket;
    ticket.lottery = lottery_key;
    ticket.submitter = ctx.accounts.player.key();
    ticket.idx = index;
    ticket.bump = ctx.bumps.ticket;

    msg!("Ticket {} bought by {}", index, ticket.submitter);
    msg!("Tickets sold: {}", ctx.accounts.lottery.count);

    emit!(TicketPurchased {
        lottery: lottery_key,
        ticket: ticket.key(),
        submitter: ticket.submitter,
        index,
    });

    Ok(())
}
