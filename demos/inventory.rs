use serde::{Deserialize, Serialize};
use sovran_collections::{CollectionError, SafeOrderedMap};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Item {
    name: String,
    quantity: u32,
    price_cents: u64,
}

impl Item {
    fn new(name: &str, quantity: u32, price_cents: u64) -> Self {
        Self {
            name: name.to_string(),
            quantity,
            price_cents,
        }
    }
}

/// Demonstrates an ordered inventory that survives a JSON round trip
fn main() -> Result<(), CollectionError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let inventory = SafeOrderedMap::new();
    inventory
        .add("sku-300", Item::new("lamp", 4, 2_500))
        .add("sku-100", Item::new("desk", 1, 18_000))
        .add("sku-200", Item::new("chair", 0, 7_500));

    // Restock in place; the SKU keeps its position
    inventory.with_mut("sku-200", |item| item.quantity += 6);

    println!("Inventory (insertion order):");
    inventory.for_each(|sku, item| {
        println!("  {sku}: {} x{} @ {} cents", item.name, item.quantity, item.price_cents);
    });

    let stock_value = inventory.reduce(0u64, |acc, _, item| {
        acc + item.quantity as u64 * item.price_cents
    });
    println!("Stock value: {} cents", stock_value);

    let cheap = inventory.filter(|_, item| item.price_cents < 10_000);
    println!("Under 100.00: {:?}", cheap.keys());

    // Discontinue an item
    inventory.delete("sku-100");

    let json = inventory.to_json()?;
    println!("Saved: {}", json);

    let restored = SafeOrderedMap::<Item>::new();
    restored.load_json(&json)?;
    println!("Restored keys: {:?}", restored.keys());

    if let Some((position, item)) = restored.index_of("sku-200") {
        println!("{} is at position {}", item.name, position);
    }

    Ok(())
}
