//! Ticket address derivation.
//!
//! A ticket lives at the program-derived address of
//! `[index as 4-byte big endian, lottery address]`. Clients only need the
//! lottery's current `count` to find the next ticket address, and any
//! index in `[0, count)` can be recomputed without an index table.

use solana_program::pubkey::Pubkey;

use crate::constants::TICKET_INDEX_SEED_LEN;

/// Seed bytes for a ticket index.
pub fn index_seed(index: u32) -> [u8; TICKET_INDEX_SEED_LEN] {
    index.to_be_bytes()
}

/// Derives the ticket address and bump for `index` under `lottery`, owned by `program_id`.
pub fn find_ticket_address(program_id: &Pubkey, lottery: &Pubkey, index: u32) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[&index_seed(index), lottery.as_ref()], program_id)
}

/// Same as [`find_ticket_address`] for this program's id.
pub fn ticket_address(lottery: &Pubkey, index: u32) -> (Pubkey, u8) {
    find_ticket_address(&crate::ID, lottery, index)
}
