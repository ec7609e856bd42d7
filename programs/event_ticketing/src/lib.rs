pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

#[cfg(test)]
mod tests;

use anchor_lang::prelude::*;

use instructions::*;
use state::EventInfo;

declare_id!("2x7gbh4iXgYbxKS9w9yAiv8xyJegTELJ2eUFMFMMB9Tc");

#[program]
pub mod event_ticketing {
    use super::*;

    /// Creates a new event.
    ///
    /// This instruction initializes a new `Event` account, the creator's
    /// `EscrowVault` for storing ticket proceeds, and the global
    /// `EventCounter` if they do not exist yet.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The context containing all necessary accounts.
    /// * `capacity` - The maximum number of tickets sellable. Must be positive.
    /// * `price` - The price of one ticket in lamports.
    /// * `name` - The name of the event.
    /// * `url` - A link with further event details.
    ///
    /// # Returns
    ///
    /// The sequential id assigned to the new event, starting at 1.
    pub fn create_event(
        ctx: Context<CreateEvent>,
        capacity: u32,
        price: u64,
        name: String,
        url: String,
    ) -> Result<u64> {
        create_event_handler(ctx, capacity, price, name, url)
    }

    /// Returns a snapshot of an event's fields. Fails during account
    /// validation if no event with `event_id` exists.
    pub fn get_event_info(ctx: Context<GetEventInfo>, event_id: u64) -> Result<EventInfo> {
        get_event_info_handler(ctx, event_id)
    }

    /// Returns the number of events created so far.
    pub fn get_total_events_count(ctx: Context<GetTotalEventsCount>) -> Result<u64> {
        get_total_events_count_handler(ctx)
    }

    /// Expires an event.
    ///
    /// Only the event creator or one of its moderators may call this. The
    /// transition is one-way and idempotent.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The context containing all necessary accounts.
    /// * `event_id` - The unique ID of the event to expire.
    pub fn update_event_state(ctx: Context<UpdateEventState>, event_id: u64) -> Result<()> {
        update_event_state_handler(ctx, event_id)
    }

    /// Grants moderator authority on an event.
    ///
    /// Only the event creator or an existing moderator may call this.
    /// Emits a `ModeratorAdded` audit record on every effective grant.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The context containing all necessary accounts.
    /// * `event_id` - The unique ID of the event.
    /// * `new_moderator` - The account being granted moderator authority.
    pub fn add_event_moderator(
        ctx: Context<AddEventModerator>,
        event_id: u64,
        new_moderator: Pubkey,
    ) -> Result<()> {
        add_event_moderator_handler(ctx, event_id, new_moderator)
    }

    /// Buys a ticket for an event.
    ///
    /// This instruction verifies that the event is active, not sold out, and
    /// that the payment covers the ticket price. The price is credited to
    /// the creator's escrow balance and any excess payment is refunded to
    /// the buyer within the same transaction. Emits a `TicketPurchased`
    /// audit record.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The context containing all necessary accounts.
    /// * `event_id` - The unique ID of the event.
    /// * `amount_paid` - The payment attached to the purchase, in lamports.
    pub fn buy_event_ticket(
        ctx: Context<BuyEventTicket>,
        event_id: u64,
        amount_paid: u64,
    ) -> Result<()> {
        buy_event_ticket_handler(ctx, event_id, amount_paid)
    }

    /// Returns whether `attendee` holds a ticket for the event.
    pub fn get_attendee_ticket_status(
        ctx: Context<GetAttendeeTicketStatus>,
        event_id: u64,
        attendee: Pubkey,
    ) -> Result<bool> {
        get_attendee_ticket_status_handler(ctx, event_id, attendee)
    }

    /// Returns the caller's current escrow balance in lamports, zero if
    /// they never sold a ticket.
    pub fn escrow_balance(ctx: Context<EscrowBalance>) -> Result<u64> {
        escrow_balance_handler(ctx)
    }

    /// Withdraws the caller's entire escrow balance.
    ///
    /// The full balance is paid out to the caller and reset to zero. Fails
    /// if there is nothing to withdraw.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The context containing all necessary accounts.
    pub fn withdraw_from_escrow(ctx: Context<WithdrawFromEscrow>) -> Result<()> {
        withdraw_from_escrow_handler(ctx)
    }
}
