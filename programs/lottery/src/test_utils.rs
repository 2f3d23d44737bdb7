//! In-memory accounts for running instruction account validation and
//! handlers without a validator.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::{system_program, sysvar};

pub fn account(key: Pubkey, owner: Pubkey, lamports: u64, data: Vec<u8>, is_signer: bool) -> AccountInfo<'static> {
    AccountInfo::new(
        Box::leak(Box::new(key)),
        is_signer,
        true,
        Box::leak(Box::new(lamports)),
        Box::leak(data.into_boxed_slice()),
        Box::leak(Box::new(owner)),
        false,
        0,
    )
}

pub fn wallet(key: Pubkey, lamports: u64, is_signer: bool) -> AccountInfo<'static> {
    account(key, system_program::ID, lamports, Vec::new(), is_signer)
}

/// A lottery-owned account holding `value`, padded to `space` bytes.
pub fn program_account<T: AccountSerialize>(key: Pubkey, lamports: u64, value: &T, space: usize) -> AccountInfo<'static> {
    let mut data = Vec::with_capacity(space);
    value.try_serialize(&mut data).unwrap();
    data.resize(space, 0);
    account(key, crate::ID, lamports, data, false)
}

pub fn executable(program_id: Pubkey) -> AccountInfo<'static> {
    AccountInfo::new(
        Box::leak(Box::new(program_id)),
        false,
        false,
        Box::leak(Box::new(1u64)),
        Box::leak(Vec::<u8>::new().into_boxed_slice()),
        Box::leak(Box::new(Pubkey::default())),
        true,
        0,
    )
}

/// The rent sysvar holding `Rent::default()`.
pub fn rent_sysvar() -> AccountInfo<'static> {
    let rent = Rent::default();
    let mut data = rent.lamports_per_byte_year.to_le_bytes().to_vec();
    data.extend_from_slice(&rent.exemption_threshold.to_le_bytes());
    data.push(rent.burn_percent);

    let mut info = account(sysvar::rent::ID, sysvar::ID, 1, data, false);
    info.is_writable = false;
    info
}

pub fn leak(infos: Vec<AccountInfo<'static>>) -> &'static [AccountInfo<'static>] {
    Box::leak(infos.into_boxed_slice())
}

pub fn read<T: AccountDeserialize>(info: &AccountInfo) -> T {
    let data = info.try_borrow_data().unwrap();
    T::try_deserialize(&mut &data[..]).unwrap()
}

struct RentStubs;

impl anchor_lang::solana_program::program_stubs::SyscallStubs for RentStubs {
    fn sol_get_rent_sysvar(&self, var_addr: *mut u8) -> u64 {
        unsafe { *(var_addr as *mut Rent) = Rent::default() };
        anchor_lang::solana_program::entrypoint::SUCCESS
    }
}

/// Lets `Rent::get()` (emitted by Anchor for `init` accounts) succeed off-chain.
pub fn install_rent_stub() {
    anchor_lang::solana_program::program_stubs::set_syscall_stubs(Box::new(RentStubs));
}
