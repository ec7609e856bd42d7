use anchor_lang::prelude::*;

#[event]
pub struct ModeratorAdded {
    pub event_id: u64,
    pub sender: Pubkey,
    pub account: Pubkey,
}

#[event]
pub struct TicketPurchased {
    pub event_id: u64,
    pub attendee: Pubkey,
}
