//! Checkout command.

use anyhow::Result;
use dialoguer::Confirm;
use serde::Serialize;
use storefront_commerce::checkout::{
    place_order, CustomerDetails, LoggingGateway, OrderConfirmation, OrderDetails, PaymentMethod,
};
use storefront_commerce::CommerceError;

use super::CheckoutArgs;
use crate::context::Context;

/// Run the checkout command.
pub fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut cart = ctx.open_cart()?;

    if cart.is_empty() {
        ctx.output.info("Your cart is empty. Add something with `storefront cart add` first.");
        return Ok(());
    }

    let mut customer =
        CustomerDetails::new(args.name, args.phone, args.address, args.city, args.province);
    if let Some(email) = args.email {
        customer = customer.with_email(email);
    }
    if let Some(note) = args.note {
        customer = customer.with_note(note);
    }

    ctx.output.header("Order Summary");
    ctx.output.kv("Deliver to", &customer.one_line_address());
    ctx.output.kv("Payment", PaymentMethod::CashOnDelivery.display_name());
    ctx.output.kv("Total", &cart.total_amount().display());

    if !args.yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt("Place this order?")
            .default(true)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Order not placed; your cart is unchanged");
            return Ok(());
        }
    }

    let order = match place_order(&mut cart, customer, &LoggingGateway) {
        Ok(order) => order,
        Err(CommerceError::CheckoutIncomplete(field)) => {
            anyhow::bail!("Please fill in all required fields: missing {}", field)
        }
        Err(e) => return Err(e.into()),
    };

    let confirmation = OrderConfirmation::compose(&order, &ctx.config.notifications);

    if ctx.output.is_json() {
        ctx.output.json(&PlacedOrder {
            order: &order,
            confirmation: confirmation.as_ref(),
        });
        return Ok(());
    }

    ctx.output.success(&format!("Order {} placed", order.order_id));
    for line in order.summary_lines() {
        ctx.output.list_item(&line);
    }
    ctx.output.kv("Total", &order.total.display());
    ctx.output.kv("Status", order.status.display_name());
    ctx.output.kv("Order date", &order.order_date.to_rfc3339());
    match confirmation {
        Some(message) => {
            ctx.output.kv("Confirmation to", &message.to);
            ctx.output.kv("Subject", &message.subject);
            ctx.output.debug(&message.text);
        }
        None => ctx.output.info("No confirmation email will be sent"),
    }

    Ok(())
}

#[derive(Serialize)]
struct PlacedOrder<'a> {
    order: &'a OrderDetails,
    confirmation: Option<&'a OrderConfirmation>,
}
