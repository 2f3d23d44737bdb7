use anchor_lang::prelude::*;

#[event]
#[derive(Debug)]
pub struct FeeConfigInitialised {
    pub authority: Pubkey,
    pub receiver: Pubkey,
}

#[event]
#[derive(Debug)]
pub struct FeeForwarded {
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
}
