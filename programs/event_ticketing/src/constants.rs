use anchor_lang::constant;

pub const DISCRIMINATOR_LENGTH: usize = 8;

#[constant]
pub const EVENT_COUNTER_SEED: &[u8] = "event_counter".as_bytes();

#[constant]
pub const EVENT_SEED: &[u8] = "event".as_bytes();

#[constant]
pub const TICKET_SEED: &[u8] = "ticket".as_bytes();

#[constant]
pub const ESCROW_SEED: &[u8] = "escrow".as_bytes();

pub const MAX_EVENT_NAME_LEN: usize = 100;
pub const MAX_EVENT_URL_LEN: usize = 200;
pub const MAX_EVENT_MODERATORS: usize = 16;
