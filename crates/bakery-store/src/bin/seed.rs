//! # Seed Data Generator
//!
//! Populates an empty item store with a bakery's worth of sample items.
//!
//! ## Usage
//! ```bash
//! # Seed ./bakery_dev.json (default)
//! cargo run -p bakery-store --bin seed
//!
//! # Specify store path
//! cargo run -p bakery-store --bin seed -- --store ./data/bakery.json
//! ```
//!
//! Items go through `ItemRepository::add`, so they get the same IDs and
//! validation as items entered at the menu.

use std::env;

use bakery_core::ItemRepository;
use bakery_store::{RecordStore, StoreConfig};

/// Sample items: (name, base price)
const ITEMS: &[(&str, f64)] = &[
    ("White Loaf", 2.20),
    ("Wholemeal Loaf", 2.60),
    ("Sourdough", 4.50),
    ("Rye Bread", 3.80),
    ("Baguette", 1.90),
    ("Ciabatta", 2.10),
    ("Bun", 1.50),
    ("Croissant", 2.50),
    ("Pain au Chocolat", 2.80),
    ("Cinnamon Roll", 3.20),
    ("Blueberry Muffin", 2.40),
    ("Scone", 1.80),
    ("Eclair", 2.90),
    ("Doughnut", 1.60),
    ("Brownie", 2.70),
    ("Carrot Cake Slice", 3.50),
    ("Cheesecake Slice", 3.90),
    ("Cake", 10.00),
    ("Apple Pie", 12.50),
    ("Sausage Roll", 2.30),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut store_path = String::from("./bakery_dev.json");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--store" | "-s" => {
                if i + 1 < args.len() {
                    store_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Bakery POS Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -s, --store <PATH>  Store file path (default: ./bakery_dev.json)");
                println!("  -h, --help          Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Bakery POS Seed Data Generator");
    println!("==============================");
    println!("Store: {}", store_path);
    println!();

    let store = RecordStore::new(StoreConfig::new(&store_path));
    let existing = store.load()?;
    if !existing.is_empty() {
        println!("Store already has {} items", existing.len());
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the store file to regenerate.");
        return Ok(());
    }

    let mut repo = ItemRepository::new(existing);
    for (name, price) in ITEMS {
        if let Err(e) = repo.add(name, *price) {
            eprintln!("Failed to add {}: {}", name, e);
        }
    }

    store.save(repo.items())?;

    println!("Seeded {} items", repo.len());
    Ok(())
}
