use anchor_lang::prelude::*;

use crate::constants::DISCRIMINATOR_LEN;
use crate::events::LotteryInitialised;
use crate::state::Lottery;

/// Accounts required to create a new lottery.
/// The lottery lives at a fresh keypair address that co-signs its creation.
#[derive(Accounts)]
pub struct Initialise<'info> {
    /// The lottery account being created.
    #[account(
        init,
        payer = admin,
        space = DISCRIMINATOR_LEN + Lottery::INIT_SPACE
    )]
    pub lottery: Account<'info, Lottery>,

    /// The admin paying for account creation and recorded as its creator.
    #[account(mut)]
    pub admin: Signer<'info>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Initialises the lottery with its ticket price and oracle.
///
/// # Arguments
/// * `ctx` - Context holding the Initialise accounts
/// * `ticket_price` - Ticket price in lamports
/// * `oracle` - Identity allowed to pick the winner
pub fn process_initialise(ctx: Context<Initialise>, ticket_price: u64, oracle: Pubkey) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let lottery = &mut ctx.accounts.lottery;

    lottery.initialise(admin, oracle, ticket_price)?;

    msg!("Lottery created: {}", lottery.key());
    msg!("Ticket price: {} lamports", ticket_price);
    msg!("Oracle: {}", oracle);

    emit!(LotteryInitialised {
        lottery: lottery.key(),
        admin,
        oracle,
        ticket_price,
    });

    Ok(())
}
