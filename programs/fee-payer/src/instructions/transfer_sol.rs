use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::FEE_CONFIG_SEED;
use crate::events::FeeForwarded;
use crate::state::{check_transfer, FeeConfig};

/// Accounts required to forward SOL to the configured receiver.
#[derive(Accounts)]
pub struct TransferSol<'info> {
    /// The account paying both the fee and the forwarded amount.
    #[account(mut)]
    pub fee_payer: Signer<'info>,

    /// Must be the receiver recorded in the fee config.
    #[account(mut)]
    pub receiver: SystemAccount<'info>,

    #[account(
        seeds = [FEE_CONFIG_SEED],
        bump = fee_config.bump,
    )]
    pub fee_config: Account<'info, FeeConfig>,

    pub system_program: Program<'info, System>,
}

pub fn process_transfer_sol(ctx: Context<TransferSol>, amount: u64) -> Result<()> {
    ctx.accounts
        .fee_config
        .check_receiver(&ctx.accounts.receiver.key())?;
    check_transfer(ctx.accounts.fee_payer.lamports(), amount)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.fee_payer.to_account_info(),
                to: ctx.accounts.receiver.to_account_info(),
            },
        ),
        amount,
    )?;

    msg!(
        "Forwarded {} lamports from {} to {}",
        amount,
        ctx.accounts.fee_payer.key(),
        ctx.accounts.receiver.key()
    );

    emit!(FeeForwarded {
        from: ctx.accounts.fee_payer.key(),
        to: ctx.accounts.receiver.key(),
        amount,
    });

    Ok(())
}
