use anchor_lang::prelude::*;

#[event]
#[derive(Debug)]
pub struct LotteryInitialised {
    pub lottery: Pubkey,
    pub admin: Pubkey,
    pub oracle: Pubkey,
    pub ticket_price: u64,
}

#[event]
#[derive(Debug)]
pub struct TicketPurchased {
    pub lottery: Pubkey,
    pub ticket: Pubkey,
    pub submitter: Pubkey,
    pub index: u32,
}

#[event]
#[derive(Debug)]
pub struct WinnerPicked {
    pub lottery: Pubkey,
    pub winner_index: u32,
}

#[event]
#[derive(Debug)]
pub struct WinnerPaid {
    pub lottery: Pubkey,
    pub winner: Pubkey,
    pub amount: u64,
}
