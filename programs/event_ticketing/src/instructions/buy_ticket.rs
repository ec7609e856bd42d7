use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::{
    constants::{DISCRIMINATOR_LENGTH, ESCROW_SEED, EVENT_SEED, TICKET_SEED},
    errors::TicketingError,
    events::TicketPurchased,
    state::{EscrowVault, Event, EventState, TicketReceipt},
};

/// Contextual accounts required to buy a ticket for an event.
#[derive(Accounts)]
#[instruction(event_id: u64)]
pub struct BuyEventTicket<'info> {
    /// The event account for which the ticket is being bought.
    #[account(
        mut,
        seeds = [EVENT_SEED, event_id.to_be_bytes().as_ref()],
        bump = event.bump,
    )]
    pub event: Account<'info, Event>,

    /// The event creator's escrow vault, where the ticket price is credited.
    #[account(
        mut,
        seeds = [ESCROW_SEED, event.creator.as_ref()],
        bump = escrow_vault.bump,
    )]
    pub escrow_vault: Account<'info, EscrowVault>,

    /// The buyer of the ticket. Must be a signer.
    #[account(mut)]
    pub buyer: Signer<'info>,

    /// The purchase receipt; its existence is the ticket-ownership record.
    /// `init` makes a second purchase by the same buyer fail before any
    /// effect, so one attendee holds at most one ticket per event.
    #[account(
        init,
        payer = buyer,
        space = DISCRIMINATOR_LENGTH + TicketReceipt::INIT_SPACE,
        seeds = [TICKET_SEED, event.key().as_ref(), buyer.key().as_ref()],
        bump,
    )]
    pub ticket_receipt: Account<'info, TicketReceipt>,

    /// The system program, required for the payment transfer.
    pub system_program: Program<'info, System>,
}

/// Purchase guards in the order they are checked; the first failure wins.
/// Event existence is already guaranteed by account validation.
pub fn validate_purchase(
    event: &Event,
    amount_paid: u64,
) -> std::result::Result<(), TicketingError> {
    if event.state != EventState::Active {
        return Err(TicketingError::EventExpired);
    }
    if event.is_sold_out() {
        return Err(TicketingError::EventSoldOut);
    }
    if amount_paid < event.price {
        return Err(TicketingError::InsufficientPayment);
    }
    Ok(())
}

/// Handles the logic for buying an event ticket.
///
/// The buyer is debited for `amount_paid`, anything above the ticket price
/// is refunded within the same instruction, and exactly the price is
/// credited to the creator's escrow balance.
///
/// # Arguments
///
/// * `ctx` - The context containing all necessary accounts.
/// * `_event_id` - The ID of the event, used for PDA validation.
/// * `amount_paid` - The payment attached to the purchase, in lamports.
///
/// # Returns
///
/// An empty `Result` indicating success or failure.
pub fn buy_event_ticket_handler(
    ctx: Context<BuyEventTicket>,
    _event_id: u64,
    amount_paid: u64,
) -> Result<()> {
    validate_purchase(&ctx.accounts.event, amount_paid)?;

    let price = ctx.accounts.event.price;

    // Payment Transfer
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.buyer.to_account_info(),
                to: ctx.accounts.escrow_vault.to_account_info(),
            },
        ),
        amount_paid,
    )?;

    // Refund the excess above the ticket price
    let refund = amount_paid - price;
    if refund > 0 {
        **ctx
            .accounts
            .escrow_vault
            .to_account_info()
            .try_borrow_mut_lamports()? -= refund;

        **ctx
            .accounts
            .buyer
            .to_account_info()
            .try_borrow_mut_lamports()? += refund;
    }

    let vault = &mut ctx.accounts.escrow_vault;
    vault.credit(price)?;

    // Initialize Ticket Receipt
    let event_key = ctx.accounts.event.key();
    let receipt = &mut ctx.accounts.ticket_receipt;
    receipt.event = event_key;
    receipt.attendee = ctx.accounts.buyer.key();
    receipt.bump = ctx.bumps.ticket_receipt;

    // Update Event State
    let event = &mut ctx.accounts.event;
    event.total_attendees = event
        .total_attendees
        .checked_add(1)
        .ok_or(TicketingError::NumericOverflow)?;

    emit!(TicketPurchased {
        event_id: event.id,
        attendee: ctx.accounts.buyer.key(),
    });

    msg!(
        "Ticket sold for event {}: {}/{}",
        event.id,
        event.total_attendees,
        event.capacity
    );

    Ok(())
}
