//! In-memory accounts for running instruction account validation and
//! handlers without a validator.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::system_program;

use crate::constants::FEE_CONFIG_SEED;
use crate::state::FeeConfig;

fn account(key: Pubkey, owner: Pubkey, lamports: u64, data: Vec<u8>, is_signer: bool, executable: bool) -> AccountInfo<'static> {
    AccountInfo::new(
        Box::leak(Box::new(key)),
        is_signer,
        !executable,
        Box::leak(Box::new(lamports)),
        Box::leak(data.into_boxed_slice()),
        Box::leak(Box::new(owner)),
        executable,
        0,
    )
}

pub fn wallet(key: Pubkey, lamports: u64, is_signer: bool) -> AccountInfo<'static> {
    account(key, system_program::ID, lamports, Vec::new(), is_signer, false)
}

pub fn executable(program_id: Pubkey) -> AccountInfo<'static> {
    account(program_id, Pubkey::default(), 1, Vec::new(), false, true)
}

/// The fee config PDA naming `receiver`.
pub fn fee_config(receiver: Pubkey) -> AccountInfo<'static> {
    let (address, bump) = Pubkey::find_program_address(&[FEE_CONFIG_SEED], &crate::ID);
    let config = FeeConfig {
        authority: Pubkey::new_unique(),
        receiver,
        bump,
    };
    let mut data = Vec::new();
    config.try_serialize(&mut data).unwrap();
    account(address, crate::ID, 1_000_000, data, false, false)
}

pub fn leak(infos: Vec<AccountInfo<'static>>) -> &'static [AccountInfo<'static>] {
    Box::leak(infos.into_boxed_slice())
}
