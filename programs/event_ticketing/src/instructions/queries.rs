use anchor_lang::prelude::*;

use crate::{
    constants::{ESCROW_SEED, EVENT_COUNTER_SEED, EVENT_SEED, TICKET_SEED},
    state::{EscrowVault, Event, EventCounter, EventInfo},
};

/// Contextual accounts required to read an event's fields.
#[derive(Accounts)]
#[instruction(event_id: u64)]
pub struct GetEventInfo<'info> {
    /// The event account to read. Resolution fails for an unknown id.
    #[account(
        seeds = [EVENT_SEED, event_id.to_be_bytes().as_ref()],
        bump = event.bump,
    )]
    pub event: Account<'info, Event>,
}

pub fn get_event_info_handler(ctx: Context<GetEventInfo>, _event_id: u64) -> Result<EventInfo> {
    Ok(EventInfo::from(&*ctx.accounts.event))
}

/// Contextual accounts required to read the number of created events.
#[derive(Accounts)]
pub struct GetTotalEventsCount<'info> {
    /// CHECK: Probed for existence only; the counter PDA does not exist
    /// until the first event is created.
    #[account(seeds = [EVENT_COUNTER_SEED], bump)]
    pub event_counter: UncheckedAccount<'info>,
}

pub fn get_total_events_count_handler(ctx: Context<GetTotalEventsCount>) -> Result<u64> {
    let info = ctx.accounts.event_counter.to_account_info();
    if info.data_is_empty() {
        return Ok(0);
    }
    let data = info.try_borrow_data()?;
    let counter = EventCounter::try_deserialize(&mut &data[..])?;
    Ok(counter.total_events)
}

/// Contextual accounts required to check whether an attendee holds a ticket.
#[derive(Accounts)]
#[instruction(event_id: u64, attendee: Pubkey)]
pub struct GetAttendeeTicketStatus<'info> {
    /// The event account the query refers to.
    #[account(
        seeds = [EVENT_SEED, event_id.to_be_bytes().as_ref()],
        bump = event.bump,
    )]
    pub event: Account<'info, Event>,

    /// CHECK: Probed for existence only; a receipt PDA exists iff the
    /// attendee bought a ticket for this event.
    #[account(seeds = [TICKET_SEED, event.key().as_ref(), attendee.as_ref()], bump)]
    pub ticket_receipt: UncheckedAccount<'info>,
}

pub fn get_attendee_ticket_status_handler(
    ctx: Context<GetAttendeeTicketStatus>,
    _event_id: u64,
    _attendee: Pubkey,
) -> Result<bool> {
    Ok(!ctx.accounts.ticket_receipt.to_account_info().data_is_empty())
}

/// Contextual accounts required to read the caller's escrow balance.
#[derive(Accounts)]
pub struct EscrowBalance<'info> {
    /// CHECK: Probed for existence only; the vault PDA does not exist until
    /// the caller creates their first event.
    #[account(seeds = [ESCROW_SEED, caller.key().as_ref()], bump)]
    pub escrow_vault: UncheckedAccount<'info>,

    /// The account whose balance is being read.
    pub caller: Signer<'info>,
}

pub fn escrow_balance_handler(ctx: Context<EscrowBalance>) -> Result<u64> {
    let info = ctx.accounts.escrow_vault.to_account_info();
    if info.data_is_empty() {
        return Ok(0);
    }
    let data = info.try_borrow_data()?;
    let vault = EscrowVault::try_deserialize(&mut &data[..])?;
    Ok(vault.balance)
}
