//! Cart commands.

use anyhow::{bail, Result};
use dialoguer::Confirm;
use serde::Serialize;
use storefront_cache::KeyValueStore;
use storefront_commerce::cart::{CartLineItem, CartStore};
use storefront_commerce::catalog::ProductSnapshot;
use storefront_commerce::{Money, ProductId};

use super::{AddArgs, CartArgs, CartCommand};
use crate::context::Context;
use crate::output::truncate;

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut cart = ctx.open_cart()?;

    match args.command {
        Some(CartCommand::Show) | None => {}
        Some(CartCommand::Add(add)) => add_item(&mut cart, add, ctx)?,
        Some(CartCommand::Update { id, quantity }) => {
            let id = ProductId::new(id);
            if cart.get_item(id).is_none() {
                ctx.output.warn(&format!("Product {} is not in the cart", id));
            } else {
                cart.update_quantity(id, quantity);
                if quantity <= 0 {
                    ctx.output.success(&format!("Removed product {}", id));
                } else {
                    ctx.output
                        .success(&format!("Set product {} to quantity {}", id, quantity));
                }
            }
        }
        Some(CartCommand::Remove { id }) => {
            let id = ProductId::new(id);
            match cart.get_item(id).map(|i| i.name.clone()) {
                Some(name) => {
                    cart.remove_item(id);
                    ctx.output.success(&format!("{} has been removed from your cart", name));
                }
                None => ctx.output.warn(&format!("Product {} is not in the cart", id)),
            }
        }
        Some(CartCommand::Clear { yes }) => {
            if !yes && !ctx.output.is_json() && !cart.is_empty() {
                let confirmed = Confirm::new()
                    .with_prompt("Remove every item from the cart?")
                    .default(false)
                    .interact()?;

                if !confirmed {
                    ctx.output.warn("Cart left unchanged");
                    return Ok(());
                }
            }
            cart.clear();
            ctx.output.success("Cart cleared");
        }
    }

    if cart.persist_failures() > 0 {
        ctx.output.warn("The cart could not be saved; changes will be lost on exit");
    }

    show(&cart, ctx);
    Ok(())
}

fn add_item<S: KeyValueStore>(
    cart: &mut CartStore<S>,
    args: AddArgs,
    ctx: &Context,
) -> Result<()> {
    if !args.price.is_finite() || args.price < 0.0 {
        bail!("Price must be a non-negative amount, got {}", args.price);
    }

    let price = Money::from_decimal(args.price, cart.currency());
    let mut product =
        ProductSnapshot::new(ProductId::new(args.id), args.name, price.amount_cents);
    if let Some(description) = args.description {
        product = product.with_description(description);
    }
    if let Some(category) = args.category {
        product = product.with_category(category);
    }
    if let Some(image) = args.image {
        product = product.with_image_url(image);
    }

    cart.add_item_quantity(&product, args.quantity);
    ctx.output.success(&format!(
        "{} x {} added to your cart",
        args.quantity, product.name
    ));
    Ok(())
}

#[derive(Serialize)]
struct CartView<'a> {
    items: &'a [CartLineItem],
    total_items: i64,
    total_amount: String,
}

fn show<S: KeyValueStore>(cart: &CartStore<S>, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(&CartView {
            items: cart.items(),
            total_items: cart.total_items(),
            total_amount: cart.total_amount().display_amount(),
        });
        return;
    }

    ctx.output.header("Shopping Cart");

    if cart.is_empty() {
        ctx.output.info("Your cart is empty.");
        return;
    }

    let widths: [usize; 5] = [6, 28, 12, 5, 12];
    ctx.output
        .table_row(&["ID", "Name", "Unit price", "Qty", "Total"], &widths);
    for item in cart.items() {
        let cols = [
            item.product_id.to_string(),
            truncate(&item.name, 28),
            item.unit_price.display(),
            item.quantity.to_string(),
            item.line_total().display(),
        ];
        let cols: Vec<&str> = cols.iter().map(String::as_str).collect();
        ctx.output.table_row(&cols, &widths);
    }

    let count = cart.total_items();
    println!();
    ctx.output.kv(
        "Items",
        &format!("{} {}", count, if count == 1 { "item" } else { "items" }),
    );
    ctx.output.kv("Total", &cart.total_amount().display());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Output;

    fn context(dir: &tempfile::TempDir) -> Context {
        Context::load_in(dir.path().to_path_buf(), None, Output::new(false, true)).unwrap()
    }

    fn add_args(id: i64, price: f64) -> AddArgs {
        AddArgs {
            id,
            name: format!("Product {}", id),
            price,
            quantity: 1,
            description: None,
            category: None,
            image: None,
        }
    }

    fn cart_command(command: CartCommand) -> CartArgs {
        CartArgs {
            command: Some(command),
        }
    }

    #[test]
    fn test_add_prices_in_cart_currency() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(&dir);

        run(cart_command(CartCommand::Add(add_args(1, 19.99))), &ctx).unwrap();

        let cart = ctx.open_cart().unwrap();
        let item = cart.get_item(ProductId::new(1)).unwrap();
        assert_eq!(item.unit_price, Money::new(1999, cart.currency()));
    }

    #[test]
    fn test_add_rejects_bad_price() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(&dir);

        for price in [-1.0, f64::NAN, f64::INFINITY] {
            let result = run(cart_command(CartCommand::Add(add_args(1, price))), &ctx);
            assert!(result.is_err());
        }
        assert!(ctx.open_cart().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_id_leaves_cart_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(&dir);
        run(cart_command(CartCommand::Add(add_args(1, 5.0))), &ctx).unwrap();

        run(cart_command(CartCommand::Update { id: 9, quantity: 3 }), &ctx).unwrap();
        run(cart_command(CartCommand::Remove { id: 9 }), &ctx).unwrap();

        let cart = ctx.open_cart().unwrap();
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.total_items(), 1);
        assert!(cart.get_item(ProductId::new(9)).is_none());
    }

    #[test]
    fn test_update_to_zero_removes() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(&dir);
        run(cart_command(CartCommand::Add(add_args(1, 5.0))), &ctx).unwrap();
        run(cart_command(CartCommand::Add(add_args(2, 3.0))), &ctx).unwrap();

        run(cart_command(CartCommand::Update { id: 1, quantity: 4 }), &ctx).unwrap();
        run(cart_command(CartCommand::Update { id: 2, quantity: 0 }), &ctx).unwrap();

        let cart = ctx.open_cart().unwrap();
        assert_eq!(cart.get_item(ProductId::new(1)).map(|i| i.quantity), Some(4));
        assert!(cart.get_item(ProductId::new(2)).is_none());
    }

    #[test]
    fn test_clear_in_json_mode_skips_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(&dir);
        run(cart_command(CartCommand::Add(add_args(1, 5.0))), &ctx).unwrap();

        run(cart_command(CartCommand::Clear { yes: false }), &ctx).unwrap();

        assert!(ctx.open_cart().unwrap().is_empty());
    }
}
