use anchor_lang::prelude::*;

use crate::{constants::ESCROW_SEED, errors::TicketingError, state::EscrowVault};

/// Contextual accounts required to withdraw accumulated ticket proceeds.
#[derive(Accounts)]
pub struct WithdrawFromEscrow<'info> {
    /// The caller's escrow vault.
    #[account(
        mut,
        seeds = [ESCROW_SEED, creator.key().as_ref()],
        bump = escrow_vault.bump,
    )]
    pub escrow_vault: Account<'info, EscrowVault>,

    /// The vault owner, paid out in full.
    #[account(mut, address = escrow_vault.creator @ TicketingError::AuthorityMismatch)]
    pub creator: Signer<'info>,
}

/// Handles the logic for withdrawing the entire escrow balance.
///
/// The full balance is transferred to the creator and reset to zero. The
/// vault account stays alive with its rent-exempt reserve, ready for
/// further sales.
///
/// # Arguments
///
/// * `ctx` - The context containing all necessary accounts.
///
/// # Returns
///
/// An empty `Result` indicating success or failure.
pub fn withdraw_from_escrow_handler(ctx: Context<WithdrawFromEscrow>) -> Result<()> {
    let amount = ctx.accounts.escrow_vault.drain()?;

    **ctx
        .accounts
        .escrow_vault
        .to_account_info()
        .try_borrow_mut_lamports()? -= amount;

    **ctx
        .accounts
        .creator
        .to_account_info()
        .try_borrow_mut_lamports()? += amount;

    msg!("Escrow paid out: {} lamports", amount);

    Ok(())
}
