use anchor_lang::prelude::*;

use crate::error::LotteryError;

#[account]
#[derive(InitSpace)]
pub struct Lottery {
    /// The admin that created and paid for this lottery.
    pub admin: Pubkey,

    /// The identity trusted to declare the winning ticket index.
    pub oracle: Pubkey,

    /// The price (in lamports) required to purchase a single ticket.
    pub ticket_price: u64,

    /// The number of tickets sold so far, which is also the index
    /// the next ticket will be issued under.
    pub count: u32,

    /// The index of the winning ticket.
    /// `None` until the oracle picks a winner.
    pub winner_index: Option<u32>,

    /// Set once the pot has been released to the winner.
    pub paid_out: bool,
}

impl Lottery {
    /// Writes the initial state of a freshly created lottery.
    /// Re-creating an existing lottery is rejected by `init` before this runs.
    pub fn initialise(&mut self, admin: Pubkey, oracle: Pubkey, ticket_price: u64) -> Result<()> {
        require!(ticket_price > 0, LotteryError::InvalidTicketPrice);

        self.admin = admin;
        self.oracle = oracle;
        self.ticket_price = ticket_price;
        self.count = 0;
        self.winner_index = None;
        self.paid_out = false;
        Ok(())
    }

    /// Claims the current index for a new ticket and advances the counter.
    /// Returns the claimed index.
    pub fn issue_ticket(&mut self) -> Result<u32> {
        let index = self.count;
        self.count = index
            .checked_add(1)
            .ok_or(LotteryError::TicketLimitReached)?;
        Ok(index)
    }

    /// Records the oracle's choice of winning ticket.
    ///
    /// Fails if `oracle` is not the lottery's oracle, if a winner is already
    /// set (whatever index is requested), or if `winner_index` is not a sold
    /// ticket.
    pub fn declare_winner(&mut self, oracle: &Pubkey, winner_index: u32) -> Result<()> {
        require_keys_eq!(*oracle, self.oracle, LotteryError::Unauthorized);
        require!(
            self.winner_index.is_none(),
            LotteryError::WinnerAlreadyChosen
        );
        require!(
            winner_index < self.count,
            LotteryError::WinnerIndexOutOfRange
        );

        self.winner_index = Some(winner_index);
        Ok(())
    }

    /// Checks `ticket_index` against the recorded winner and closes the
    /// lottery for further payouts.
    pub fn settle(&mut self, ticket_index: u32) -> Result<()> {
        let winner_index = self.winner_index.ok_or(LotteryError::WinnerNotChosen)?;
        require!(!self.paid_out, LotteryError::AlreadyPaidOut);
        require!(
            ticket_index == winner_index,
            LotteryError::NotWinningTicket
        );

        self.paid_out = true;
        Ok(())
    }
}

/// Lamports that can leave the lottery while keeping `reserve` behind.
pub fn payable_amount(balance: u64, reserve: u64) -> Result<u64> {
    match balance.checked_sub(reserve) {
        Some(amount) if amount > 0 => Ok(amount),
        _ => err!(LotteryError::EmptyPot),
    }
}

#[account]
#[derive(InitSpace, Default)]
pub struct Ticket {
    /// The lottery this ticket was bought in.
    pub lottery: Pubkey,

    /// The player that paid for the ticket.
    pub submitter: Pubkey,

    /// The lottery counter at the time of purchase.
    pub idx: u32,

    /// Bump of the ticket's derived address.
    pub bump: u8,
}
