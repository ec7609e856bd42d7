use anchor_lang::prelude::*;

use crate::{
    constants::EVENT_SEED, errors::TicketingError, events::ModeratorAdded, state::Event,
};

/// Contextual accounts required to grant moderator authority on an event.
#[derive(Accounts)]
#[instruction(event_id: u64)]
pub struct AddEventModerator<'info> {
    /// The event account whose moderator list is being extended.
    #[account(
        mut,
        seeds = [EVENT_SEED, event_id.to_be_bytes().as_ref()],
        bump = event.bump,
    )]
    pub event: Account<'info, Event>,

    /// The caller. Must be the event creator or one of its moderators.
    pub caller: Signer<'info>,
}

/// Handles the logic for adding a moderator to an event.
///
/// Granting is idempotent: an account that already holds authority is not
/// added twice and no audit record is emitted for it.
///
/// # Arguments
///
/// * `ctx` - The context containing all necessary accounts.
/// * `_event_id` - The ID of the event, used for PDA validation.
/// * `new_moderator` - The account being granted moderator authority.
///
/// # Returns
///
/// An empty `Result` indicating success or failure.
pub fn add_event_moderator_handler(
    ctx: Context<AddEventModerator>,
    _event_id: u64,
    new_moderator: Pubkey,
) -> Result<()> {
    let event = &mut ctx.accounts.event;
    let caller = ctx.accounts.caller.key();
    require!(event.is_authorized(&caller), TicketingError::Unauthorized);

    if event.add_moderator(new_moderator)? {
        emit!(ModeratorAdded {
            event_id: event.id,
            sender: caller,
            account: new_moderator,
        });

        msg!("Moderator added to event {}: {}", event.id, new_moderator);
    }

    Ok(())
}
