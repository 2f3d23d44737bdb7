use anchor_lang::prelude::*;

#[error_code]
pub enum LotteryError {
    #[msg("Ticket price must be greater than zero")]
    InvalidTicketPrice,

    #[msg("No more tickets can be issued for this lottery")]
    TicketLimitReached,

    #[msg("Only the lottery oracle can pick the winner")]
    Unauthorized,

    #[msg("Winner index is outside the range of sold tickets")]
    WinnerIndexOutOfRange,

    #[msg("A winner has already been chosen")]
    WinnerAlreadyChosen,

    #[msg("Winner has not been chosen yet")]
    WinnerNotChosen,

    #[msg("Ticket does not hold the winning index")]
    NotWinningTicket,

    #[msg("Prize has already been paid out")]
    AlreadyPaidOut,

    #[msg("Lottery holds nothing above its rent reserve")]
    EmptyPot,
}
