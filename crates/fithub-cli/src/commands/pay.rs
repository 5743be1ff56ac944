use anyhow::{Context, Result};

use fithub_core::payment::{PaymentMethod, checkout};
use fithub_core::pricing::format_money;
use fithub_core::selection::SelectionStore;

/// Runs a simulated checkout and prints the receipt.
pub fn pay(store: &SelectionStore, method: &str) -> Result<()> {
    let method: PaymentMethod = method.parse()?;
    let receipt = checkout(store.selection(), method).context("Checkout failed")?;

    println!("Payment received via {}", receipt.method);
    println!(
        "  Amount   {}",
        format_money(receipt.amount, &store.config().currency_symbol)
    );
    println!("  Receipt  {}", receipt.id);
    println!("  Paid at  {}", receipt.paid_at.to_rfc3339());
    Ok(())
}
