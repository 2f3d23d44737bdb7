/// Size of the Anchor account discriminator prefixed to every program account.
pub const DISCRIMINATOR_LEN: usize = 8;

/// Number of bytes a ticket index occupies in its address seeds.
pub const TICKET_INDEX_SEED_LEN: usize = 4;
