//! Walk-through of a dispatch board session
//!
//! Run with `RUST_LOG=dispatch=debug cargo run --example board_session` to see
//! the store and selector logs. An optional first argument names a YAML
//! config file; otherwise the three sample orders are used.

use dispatch::prelude::*;
use tracing_subscriber::EnvFilter;

fn print_list(board: &DispatchBoard) {
    let visible = board.visible_orders();
    println!("All Orders View ({})", visible.len());
    if let Some(reason) = visible.empty_reason() {
        println!("   {}", reason.message());
    }
    for order in &visible.orders {
        println!(
            "   #{:<5} {:<14} {:>2} items  {:>5} km  {}",
            order.id().short(),
            order.restaurant_name(),
            order.item_count(),
            order.delivery_distance(),
            order.payment_status()
        );
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut board = match std::env::args().nth(1) {
        Some(path) => DispatchBoard::from_config_file(&path)?,
        None => DispatchBoard::new(BoardConfig::default_config())?,
    };

    println!("🚚 Online Food Delivery Manager\n");
    print_list(&board);

    println!("\n📋 Adding an order from the form...");
    let form = OrderForm {
        restaurant: "Subway".to_string(),
        dish: "Veggie Delite".to_string(),
        items: "1".to_string(),
        distance: "2.1".to_string(),
        is_paid: "false".to_string(),
    };
    match board.submit(&form) {
        Ok(order) => println!("✅ Added order #{}", order.id().short()),
        Err(err) => println!("❌ {}", err),
    }

    println!("\n📋 Submitting an incomplete form...");
    let incomplete = OrderForm {
        restaurant: String::new(),
        dish: "X".to_string(),
        items: "1".to_string(),
        distance: "1".to_string(),
        is_paid: "false".to_string(),
    };
    if let Err(err) = board.submit(&incomplete) {
        let response = DispatchError::from(err).to_response();
        println!("❌ Please fill all details! {}", serde_json::to_string(&response)?);
    }

    println!("\n🔎 Unpaid only:");
    board.set_show_paid(false);
    print_list(&board);

    println!("\n🔎 Nothing selected:");
    board.set_show_unpaid(false);
    print_list(&board);

    for threshold in [10.0, 2.0, 2.1] {
        let applied = board.set_max_distance(threshold);
        println!("\n📍 Max distance {} km: {}", applied, board.assign());
    }

    Ok(())
}
