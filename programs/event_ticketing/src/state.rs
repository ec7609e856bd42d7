use anchor_lang::prelude::*;

use crate::constants::MAX_EVENT_MODERATORS;
use crate::errors::TicketingError;

/// Lifecycle state of an event. The transition only ever goes forward:
/// an expired event never becomes active again.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, PartialEq, Eq, Debug)]
pub enum EventState {
    Active,
    Expired,
}

#[account]
#[derive(InitSpace)]
pub struct Event {
    pub id: u64,
    pub creator: Pubkey,
    #[max_len(100)]
    pub name: String,
    #[max_len(200)]
    pub url: String,
    pub price: u64,
    pub capacity: u32,
    pub total_attendees: u32,
    pub state: EventState,
    #[max_len(16)]
    pub moderators: Vec<Pubkey>,
    pub bump: u8,
}

impl Event {
    /// The creator is always authorized; moderators are granted explicitly
    /// and the creator is never stored in the moderator list.
    pub fn is_authorized(&self, caller: &Pubkey) -> bool {
        *caller == self.creator || self.has_moderator(caller)
    }

    pub fn has_moderator(&self, account: &Pubkey) -> bool {
        self.moderators.contains(account)
    }

    pub fn is_sold_out(&self) -> bool {
        self.total_attendees >= self.capacity
    }

    /// Records a moderator grant. Returns `false` when the account already
    /// holds authority (creator or existing moderator), leaving the list
    /// unchanged.
    pub fn add_moderator(
        &mut self,
        account: Pubkey,
    ) -> std::result::Result<bool, TicketingError> {
        if account == self.creator || self.has_moderator(&account) {
            return Ok(false);
        }
        if self.moderators.len() >= MAX_EVENT_MODERATORS {
            return Err(TicketingError::ModeratorLimitReached);
        }
        self.moderators.push(account);
        Ok(true)
    }

    /// Moves the event to `Expired`. Calling this on an already expired
    /// event leaves it expired.
    pub fn expire(&mut self) {
        self.state = EventState::Expired;
    }
}

/// Global sequential id counter. Created lazily by the first `create_event`;
/// ids start at 1.
#[account]
#[derive(InitSpace)]
pub struct EventCounter {
    pub total_events: u64,
}

/// Proof of purchase for one attendee of one event. The account's existence
/// is the ticket-ownership record.
#[account]
#[derive(InitSpace)]
pub struct TicketReceipt {
    pub event: Pubkey,
    pub attendee: Pubkey,
    pub bump: u8,
}

/// Per-creator accumulator of ticket proceeds. The lamports live on this
/// account; `balance` tracks the withdrawable part, excluding the
/// rent-exempt reserve.
#[account]
#[derive(InitSpace)]
pub struct EscrowVault {
    pub creator: Pubkey,
    pub balance: u64,
    pub bump: u8,
}

impl EscrowVault {
    pub fn credit(&mut self, amount: u64) -> std::result::Result<(), TicketingError> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(TicketingError::NumericOverflow)?;
        Ok(())
    }

    /// Takes the full withdrawable balance, leaving it at zero. An empty
    /// vault has nothing to pay out.
    pub fn drain(&mut self) -> std::result::Result<u64, TicketingError> {
        if self.balance == 0 {
            return Err(TicketingError::NothingToWithdraw);
        }
        let amount = self.balance;
        self.balance = 0;
        Ok(amount)
    }
}

/// Snapshot of an event's fields, returned by `get_event_info`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct EventInfo {
    pub id: u64,
    pub name: String,
    pub url: String,
    pub price: u64,
    pub capacity: u32,
    pub total_attendees: u32,
    pub state: EventState,
    pub creator: Pubkey,
}

impl From<&Event> for EventInfo {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id,
            name: event.name.clone(),
            url: event.url.clone(),
            price: event.price,
            capacity: event.capacity,
            total_attendees: event.total_attendees,
            state: event.state,
            creator: event.creator,
        }
    }
}
