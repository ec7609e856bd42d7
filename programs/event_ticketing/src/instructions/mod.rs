pub mod add_event_moderator;
pub mod buy_ticket;
pub mod create_event;
pub mod queries;
pub mod update_event_state;
pub mod withdraw_escrow;

pub use add_event_moderator::*;
pub use buy_ticket::*;
pub use create_event::*;
pub use queries::*;
pub use update_event_state::*;
pub use withdraw_escrow::*;
