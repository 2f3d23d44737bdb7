use anchor_lang::prelude::*;

use crate::error::FeePayerError;

/// Configuration naming the only account fees may be forwarded to.
/// Written once by the program's upgrade authority and never changed.
#[account]
#[derive(InitSpace)]
pub struct FeeConfig {
    /// The upgrade authority that created the config.
    pub authority: Pubkey,

    /// The account every `transfer_sol` must pay.
    pub receiver: Pubkey,

    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,
}

impl FeeConfig {
    pub fn check_receiver(&self, receiver: &Pubkey) -> Result<()> {
        require_keys_eq!(*receiver, self.receiver, FeePayerError::InvalidReceiver);
        Ok(())
    }
}

/// Only the upgrade authority recorded in the program data may configure
/// the program. An immutable program (no authority) can't be configured.
pub fn check_upgrade_authority(upgrade_authority: Option<Pubkey>, signer: &Pubkey) -> Result<()> {
    match upgrade_authority {
        Some(authority) if authority == *signer => Ok(()),
        _ => err!(FeePayerError::Unauthorized),
    }
}

/// Validates that the payer's `balance` covers `amount`.
pub fn check_transfer(balance: u64, amount: u64) -> Result<()> {
    require_gte!(balance, amount, FeePayerError::InsufficientFunds);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_RECEIVER;

    #[test]
    fn test_check_receiver() {
        let config = FeeConfig {
            authority: Pubkey::new_unique(),
            receiver: DEFAULT_RECEIVER,
            bump: 255,
        };

        assert!(config.check_receiver(&DEFAULT_RECEIVER).is_ok());

        let wrong = Pubkey::new_unique();
        let err = config.check_receiver(&wrong).unwrap_err();
        assert_eq!(err, FeePayerError::InvalidReceiver.into());
    }

    #[test]
    fn test_check_upgrade_authority() {
        let authority = Pubkey::new_unique();

        assert!(check_upgrade_authority(Some(authority), &authority).is_ok());

        let err = check_upgrade_authority(Some(authority), &Pubkey::new_unique()).unwrap_err();
        assert_eq!(err, FeePayerError::Unauthorized.into());

        let err = check_upgrade_authority(None, &authority).unwrap_err();
        assert_eq!(err, FeePayerError::Unauthorized.into());
    }

    #[test]
    fn test_check_transfer() {
        assert!(check_transfer(2_000_000_000, 500_000_000).is_ok());
        assert!(check_transfer(500_000_000, 500_000_000).is_ok());
        assert!(check_transfer(0, 0).is_ok());

        let err = check_transfer(100, 101).unwrap_err();
        assert_eq!(err, FeePayerError::InsufficientFunds.into());
    }

    #[test]
    fn test_space() {
        assert_eq!(FeeConfig::INIT_SPACE, 32 + 32 + 1);
    }
}
