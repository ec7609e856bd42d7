use anchor_lang::prelude::*;

use crate::{constants::EVENT_SEED, errors::TicketingError, state::Event};

/// Contextual accounts required to expire an event.
#[derive(Accounts)]
#[instruction(event_id: u64)]
pub struct UpdateEventState<'info> {
    /// The event account to be expired.
    #[account(
        mut,
        seeds = [EVENT_SEED, event_id.to_be_bytes().as_ref()],
        bump = event.bump,
    )]
    pub event: Account<'info, Event>,

    /// The caller. Must be the event creator or one of its moderators.
    pub caller: Signer<'info>,
}

/// Handles the logic for expiring an event.
///
/// Expiry is one-way: an expired event never becomes active again, and
/// expiring an already expired event is a no-op.
///
/// # Arguments
///
/// * `ctx` - The context containing all necessary accounts.
/// * `_event_id` - The ID of the event, used for PDA validation.
///
/// # Returns
///
/// An empty `Result` indicating success or failure.
pub fn update_event_state_handler(ctx: Context<UpdateEventState>, _event_id: u64) -> Result<()> {
    let event = &mut ctx.accounts.event;
    require!(
        event.is_authorized(&ctx.accounts.caller.key()),
        TicketingError::Unauthorized
    );

    event.expire();

    msg!("Event {} expired", event.id);

    Ok(())
}
