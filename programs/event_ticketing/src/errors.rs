use anchor_lang::prelude::*;

#[error_code]
pub enum TicketingError {
    #[msg("Event name cannot be empty")]
    NameEmpty,
    #[msg("Event name is too long. Max length is 100 characters")]
    NameTooLong,
    #[msg("Event URL cannot be empty")]
    UrlEmpty,
    #[msg("Event URL is too long. Max length is 200 characters")]
    UrlTooLong,
    #[msg("Event capacity must be greater than zero")]
    InvalidCapacity,

    #[msg("Caller is neither the event creator nor a moderator")]
    Unauthorized,
    #[msg("Moderator list is full")]
    ModeratorLimitReached,

    #[msg("Event is expired")]
    EventExpired,
    #[msg("Event is sold out")]
    EventSoldOut,
    #[msg("Payment is below the ticket price")]
    InsufficientPayment,

    #[msg("Escrow balance is empty")]
    NothingToWithdraw,
    #[msg("Signer does not own this escrow vault")]
    AuthorityMismatch,

    #[msg("Numeric overflow")]
    NumericOverflow,
}
