use anchor_lang::prelude::*;

#[error_code]
pub enum FeePayerError {
    #[msg("The receiver account does not match the configured receiver.")]
    InvalidReceiver,

    #[msg("Fee payer cannot cover the transfer amount.")]
    InsufficientFunds,

    #[msg("Only the program upgrade authority can configure the receiver.")]
    Unauthorized,
}
