use anchor_lang::prelude::*;

use crate::{
    constants::{
        DISCRIMINATOR_LENGTH, ESCROW_SEED, EVENT_COUNTER_SEED, EVENT_SEED, MAX_EVENT_NAME_LEN,
        MAX_EVENT_URL_LEN,
    },
    errors::TicketingError,
    state::{EscrowVault, Event, EventCounter, EventState},
};

/// Contextual accounts required to create a new event.
#[derive(Accounts)]
pub struct CreateEvent<'info> {
    /// The global event counter. It is initialized on the first event.
    #[account(
        init_if_needed,
        payer = creator,
        space = DISCRIMINATOR_LENGTH + EventCounter::INIT_SPACE,
        seeds = [EVENT_COUNTER_SEED],
        bump
    )]
    pub event_counter: Account<'info, EventCounter>,

    /// The new event account, initialized by this instruction.
    /// The PDA is derived from the next sequential event id.
    #[account(
        init,
        payer = creator,
        space = DISCRIMINATOR_LENGTH + Event::INIT_SPACE,
        seeds = [EVENT_SEED, (event_counter.total_events + 1).to_be_bytes().as_ref()],
        bump,
    )]
    pub event: Account<'info, Event>,

    /// The creator's escrow vault, which will accumulate ticket proceeds
    /// across all of their events. Initialized on their first event.
    #[account(
        init_if_needed,
        payer = creator,
        space = DISCRIMINATOR_LENGTH + EscrowVault::INIT_SPACE,
        seeds = [ESCROW_SEED, creator.key().as_ref()],
        bump,
    )]
    pub escrow_vault: Account<'info, EscrowVault>,

    /// The account creating the event. Must be a signer.
    #[account(mut)]
    pub creator: Signer<'info>,

    /// The system program, required for creating accounts.
    pub system_program: Program<'info, System>,
}

/// Creation guards in the order they are checked; the first failure wins.
pub fn validate_event_fields(
    capacity: u32,
    name: &str,
    url: &str,
) -> std::result::Result<(), TicketingError> {
    if name.is_empty() {
        return Err(TicketingError::NameEmpty);
    }
    if name.len() > MAX_EVENT_NAME_LEN {
        return Err(TicketingError::NameTooLong);
    }
    if url.is_empty() {
        return Err(TicketingError::UrlEmpty);
    }
    if url.len() > MAX_EVENT_URL_LEN {
        return Err(TicketingError::UrlTooLong);
    }
    if capacity == 0 {
        return Err(TicketingError::InvalidCapacity);
    }
    Ok(())
}

/// Handles the logic for creating a new event.
///
/// # Arguments
///
/// * `ctx` - The context containing all necessary accounts.
/// * `capacity` - The maximum number of tickets sellable. Must be positive.
/// * `price` - The price of one ticket in lamports. Zero is allowed.
/// * `name` - The name of the event.
/// * `url` - A link with further event details.
///
/// # Returns
///
/// The id assigned to the new event. Ids are sequential and start at 1.
pub fn create_event_handler(
    ctx: Context<CreateEvent>,
    capacity: u32,
    price: u64,
    name: String,
    url: String,
) -> Result<u64> {
    validate_event_fields(capacity, &name, &url)?;

    // The event PDA seed already computed this same sum during account
    // validation, where an overflow aborts before reaching here.
    let counter = &mut ctx.accounts.event_counter;
    let event_id = counter
        .total_events
        .checked_add(1)
        .ok_or(TicketingError::NumericOverflow)?;

    // Initialize Escrow Vault (if new)
    let vault = &mut ctx.accounts.escrow_vault;
    if vault.creator == Pubkey::default() {
        vault.creator = ctx.accounts.creator.key();
        vault.bump = ctx.bumps.escrow_vault;
    }

    // Initialize Event Account
    let event = &mut ctx.accounts.event;
    event.id = event_id;
    event.creator = ctx.accounts.creator.key();
    event.name = name;
    event.url = url;
    event.price = price;
    event.capacity = capacity;
    event.total_attendees = 0;
    event.state = EventState::Active;
    event.moderators = Vec::new();
    event.bump = ctx.bumps.event;

    // Advance Event Counter
    counter.total_events = event_id;

    msg!("Event created: {}", event_id);

    Ok(event_id)
}
