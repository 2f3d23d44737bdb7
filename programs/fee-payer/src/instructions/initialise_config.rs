use anchor_lang::prelude::*;

use crate::constants::{DEFAULT_RECEIVER, FEE_CONFIG_SEED};
use crate::events::FeeConfigInitialised;
use crate::program::FeePayer;
use crate::state::{check_upgrade_authority, FeeConfig};

/// Accounts required to create the fee configuration.
///
/// The config lives at a single PDA, so it can be created only once, and
/// only by the upgrade authority of this program.
#[derive(Accounts)]
pub struct InitialiseConfig<'info> {
    /// The program's upgrade authority, paying for creation.
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = 8 + FeeConfig::INIT_SPACE,
        seeds = [FEE_CONFIG_SEED],
        bump
    )]
    pub fee_config: Account<'info, FeeConfig>,

    #[account(constraint = program.programdata_address()? == Some(program_data.key()))]
    pub program: Program<'info, FeePayer>,

    /// Program data account holding the upgrade authority.
    pub program_data: Account<'info, ProgramData>,

    pub system_program: Program<'info, System>,
}

/// Creates the fee configuration. Without an explicit `receiver` the
/// default receiver is used.
pub fn process_initialise_config(
    ctx: Context<InitialiseConfig>,
    receiver: Option<Pubkey>,
) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    check_upgrade_authority(
        ctx.accounts.program_data.upgrade_authority_address,
        &authority,
    )?;

    let fee_config = &mut ctx.accounts.fee_config;
    fee_config.authority = authority;
    fee_config.receiver = receiver.unwrap_or(DEFAULT_RECEIVER);
    fee_config.bump = ctx.bumps.fee_config;

    msg!("Fee receiver: {}", fee_config.receiver);

    emit!(FeeConfigInitialised {
        authority,
        receiver: fee_config.receiver,
    });

    Ok(())
}
