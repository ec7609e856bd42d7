use anchor_lang::prelude::*;

use crate::constants::MAX_EVENT_MODERATORS;
use crate::errors::TicketingError;
use crate::instructions::buy_ticket::validate_purchase;
use crate::instructions::create_event::validate_event_fields;
use crate::state::{EscrowVault, Event, EventInfo, EventState};

// Helper: Generate a test pubkey
fn test_pubkey(seed: u8) -> Pubkey {
    Pubkey::new_from_array([seed; 32])
}

// 0.156 SOL, the ticket price used by the reference scenario.
const TICKET_PRICE: u64 = 156_000_000;

fn bootcamp_event(creator: Pubkey) -> Event {
    Event {
        id: 1,
        creator,
        name: "ConsenSys Bootcamp".to_string(),
        url: "https://google.com".to_string(),
        price: TICKET_PRICE,
        capacity: 3,
        total_attendees: 0,
        state: EventState::Active,
        moderators: Vec::new(),
        bump: 255,
    }
}

#[test]
fn new_event_has_expected_fields() {
    let mod1 = test_pubkey(1);
    let event = bootcamp_event(mod1);

    assert_eq!(event.id, 1);
    assert_eq!(event.name, "ConsenSys Bootcamp");
    assert_eq!(event.url, "https://google.com");
    assert_eq!(event.price, TICKET_PRICE);
    assert_eq!(event.capacity, 3);
    assert_eq!(event.total_attendees, 0);
    assert_eq!(event.state, EventState::Active);
    assert_eq!(event.creator, mod1);
    assert!(event.moderators.is_empty());
}

#[test]
fn event_state_wire_codes_are_stable() {
    // Clients rely on Active = 0 and Expired = 1 in the serialized form.
    let mut active = Vec::new();
    EventState::Active.serialize(&mut active).unwrap();
    assert_eq!(active, vec![0]);

    let mut expired = Vec::new();
    EventState::Expired.serialize(&mut expired).unwrap();
    assert_eq!(expired, vec![1]);
}

#[test]
fn creation_accepts_valid_fields() {
    assert!(validate_event_fields(3, "ConsenSys Bootcamp", "https://google.com").is_ok());
}

#[test]
fn creation_rejects_empty_name() {
    assert!(matches!(
        validate_event_fields(3, "", "https://google.com"),
        Err(TicketingError::NameEmpty)
    ));
}

#[test]
fn creation_rejects_over_length_name() {
    let name = "x".repeat(101);
    assert!(matches!(
        validate_event_fields(3, &name, "https://google.com"),
        Err(TicketingError::NameTooLong)
    ));
}

#[test]
fn creation_rejects_empty_url() {
    assert!(matches!(
        validate_event_fields(3, "ConsenSys Bootcamp", ""),
        Err(TicketingError::UrlEmpty)
    ));
}

#[test]
fn creation_rejects_over_length_url() {
    let url = format!("https://{}.com", "x".repeat(200));
    assert!(matches!(
        validate_event_fields(3, "ConsenSys Bootcamp", &url),
        Err(TicketingError::UrlTooLong)
    ));
}

#[test]
fn creation_rejects_zero_capacity() {
    assert!(matches!(
        validate_event_fields(0, "ConsenSys Bootcamp", "https://google.com"),
        Err(TicketingError::InvalidCapacity)
    ));
}

#[test]
fn creator_is_authorized_without_being_a_moderator() {
    let mod1 = test_pubkey(1);
    let event = bootcamp_event(mod1);

    assert!(event.is_authorized(&mod1));
    assert!(!event.has_moderator(&mod1));
}

#[test]
fn strangers_are_not_authorized() {
    let mod1 = test_pubkey(1);
    let mod2 = test_pubkey(2);
    let event = bootcamp_event(mod1);

    assert!(!event.is_authorized(&mod2));
}

#[test]
fn granted_moderator_becomes_authorized() {
    let mod1 = test_pubkey(1);
    let mod2 = test_pubkey(2);
    let mut event = bootcamp_event(mod1);

    assert!(event.add_moderator(mod2).unwrap());
    assert!(event.has_moderator(&mod2));
    assert!(event.is_authorized(&mod2));
}

#[test]
fn moderator_grant_is_idempotent() {
    let mod1 = test_pubkey(1);
    let mod2 = test_pubkey(2);
    let mut event = bootcamp_event(mod1);

    assert!(event.add_moderator(mod2).unwrap());
    assert!(!event.add_moderator(mod2).unwrap());
    assert_eq!(event.moderators.len(), 1);
}

#[test]
fn creator_is_never_stored_in_the_moderator_list() {
    let mod1 = test_pubkey(1);
    let mut event = bootcamp_event(mod1);

    assert!(!event.add_moderator(mod1).unwrap());
    assert!(event.moderators.is_empty());
}

#[test]
fn moderator_list_is_bounded() {
    let mod1 = test_pubkey(1);
    let mut event = bootcamp_event(mod1);

    for i in 0..MAX_EVENT_MODERATORS {
        assert!(event.add_moderator(test_pubkey(10 + i as u8)).unwrap());
    }
    assert!(matches!(
        event.add_moderator(test_pubkey(200)),
        Err(TicketingError::ModeratorLimitReached)
    ));
    assert_eq!(event.moderators.len(), MAX_EVENT_MODERATORS);
}

#[test]
fn expire_is_one_way_and_idempotent() {
    let mod1 = test_pubkey(1);
    let mut event = bootcamp_event(mod1);

    event.expire();
    assert_eq!(event.state, EventState::Expired);

    // A second call leaves the event expired.
    event.expire();
    assert_eq!(event.state, EventState::Expired);
}

#[test]
fn purchase_succeeds_at_exact_price_and_above() {
    let mod1 = test_pubkey(1);
    let event = bootcamp_event(mod1);

    assert!(validate_purchase(&event, TICKET_PRICE).is_ok());
    assert!(validate_purchase(&event, 2 * TICKET_PRICE).is_ok());
}

#[test]
fn purchase_rejects_underpayment() {
    let mod1 = test_pubkey(1);
    let event = bootcamp_event(mod1);

    assert!(matches!(
        validate_purchase(&event, TICKET_PRICE - 1),
        Err(TicketingError::InsufficientPayment)
    ));
}

#[test]
fn purchase_on_free_event_accepts_zero_payment() {
    let mod1 = test_pubkey(1);
    let mut event = bootcamp_event(mod1);
    event.price = 0;

    assert!(validate_purchase(&event, 0).is_ok());
}

#[test]
fn purchase_rejects_expired_event_before_other_guards() {
    let mod1 = test_pubkey(1);
    let mut event = bootcamp_event(mod1);
    event.expire();
    event.total_attendees = event.capacity;

    // Expired wins over both sold-out and underpayment.
    assert!(matches!(
        validate_purchase(&event, 0),
        Err(TicketingError::EventExpired)
    ));
}

#[test]
fn purchase_rejects_sold_out_before_payment_check() {
    let mod1 = test_pubkey(1);
    let mut event = bootcamp_event(mod1);
    event.total_attendees = event.capacity;

    assert!(matches!(
        validate_purchase(&event, 0),
        Err(TicketingError::EventSoldOut)
    ));
}

#[test]
fn capacity_plus_one_purchase_always_fails() {
    let mod1 = test_pubkey(1);
    let mut event = bootcamp_event(mod1);

    for _ in 0..event.capacity {
        validate_purchase(&event, TICKET_PRICE).unwrap();
        event.total_attendees += 1;
    }
    assert_eq!(event.total_attendees, event.capacity);
    assert!(matches!(
        validate_purchase(&event, TICKET_PRICE),
        Err(TicketingError::EventSoldOut)
    ));
}

#[test]
fn excess_payment_is_refunded_not_escrowed() {
    let mod1 = test_pubkey(1);
    let event = bootcamp_event(mod1);
    let amount_paid = 2 * TICKET_PRICE;

    validate_purchase(&event, amount_paid).unwrap();

    // The vault keeps exactly the price; the rest goes back to the buyer.
    let refund = amount_paid - event.price;
    assert_eq!(refund, TICKET_PRICE);

    let mut vault = EscrowVault {
        creator: mod1,
        balance: 0,
        bump: 255,
    };
    vault.credit(event.price).unwrap();
    assert_eq!(vault.balance, TICKET_PRICE);
}

#[test]
fn escrow_accumulates_across_sales_and_withdraws_to_zero() {
    let mod1 = test_pubkey(1);
    let mut vault = EscrowVault {
        creator: mod1,
        balance: 0,
        bump: 255,
    };

    vault.credit(TICKET_PRICE).unwrap();
    vault.credit(TICKET_PRICE).unwrap();
    assert_eq!(vault.balance, 2 * TICKET_PRICE);

    let amount = vault.drain().unwrap();
    assert_eq!(amount, 2 * TICKET_PRICE);
    assert_eq!(vault.balance, 0);
}

#[test]
fn empty_vault_has_nothing_to_withdraw() {
    let mod1 = test_pubkey(1);
    let mut vault = EscrowVault {
        creator: mod1,
        balance: 0,
        bump: 255,
    };

    assert!(matches!(
        vault.drain(),
        Err(TicketingError::NothingToWithdraw)
    ));

    // A drained vault is equally empty.
    vault.credit(TICKET_PRICE).unwrap();
    vault.drain().unwrap();
    assert!(matches!(
        vault.drain(),
        Err(TicketingError::NothingToWithdraw)
    ));
}

#[test]
fn escrow_credit_detects_overflow() {
    let mod1 = test_pubkey(1);
    let mut vault = EscrowVault {
        creator: mod1,
        balance: u64::MAX,
        bump: 255,
    };

    assert!(matches!(
        vault.credit(1),
        Err(TicketingError::NumericOverflow)
    ));
}

#[test]
fn event_info_snapshot_matches_event() {
    let mod1 = test_pubkey(1);
    let mut event = bootcamp_event(mod1);
    event.total_attendees = 2;

    let info = EventInfo::from(&event);
    assert_eq!(info.id, event.id);
    assert_eq!(info.name, event.name);
    assert_eq!(info.url, event.url);
    assert_eq!(info.price, event.price);
    assert_eq!(info.capacity, event.capacity);
    assert_eq!(info.total_attendees, 2);
    assert_eq!(info.state, EventState::Active);
    assert_eq!(info.creator, mod1);
}

// Mirrors the reference scenario: mod1 creates the event, mod2 is rejected
// until granted, then expires the event; an attendee pays double and is
// refunded the difference; mod1 withdraws the proceeds.
#[test]
fn bootcamp_scenario() {
    let mod1 = test_pubkey(1);
    let mod2 = test_pubkey(2);
    let attendee = test_pubkey(3);

    let mut event = bootcamp_event(mod1);
    assert_eq!(event.state, EventState::Active);

    // mod2 holds no authority yet.
    assert!(!event.is_authorized(&mod2));

    // Granted by mod1, mod2 may now expire the event.
    assert!(event.add_moderator(mod2).unwrap());
    assert!(event.is_authorized(&mod2));

    // Buying a ticket grants no moderator authority.
    assert!(!event.is_authorized(&attendee));

    // Attendee buys with twice the price attached; only the price sticks.
    let amount_paid = 2 * TICKET_PRICE;
    validate_purchase(&event, amount_paid).unwrap();
    event.total_attendees += 1;
    let buyer_net_cost = amount_paid - (amount_paid - event.price);
    assert_eq!(buyer_net_cost, TICKET_PRICE);
    assert!(buyer_net_cost < amount_paid);

    let mut vault = EscrowVault {
        creator: mod1,
        balance: 0,
        bump: 255,
    };
    vault.credit(event.price).unwrap();
    assert_eq!(vault.balance, TICKET_PRICE);

    // Withdrawal pays out in full and empties the escrow.
    assert_eq!(vault.drain().unwrap(), TICKET_PRICE);
    assert_eq!(vault.balance, 0);

    // mod2 expires the event; purchases are rejected from then on.
    event.expire();
    assert_eq!(event.state, EventState::Expired);
    assert!(matches!(
        validate_purchase(&event, amount_paid),
        Err(TicketingError::EventExpired)
    ));
}
