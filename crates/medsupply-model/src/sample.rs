//! Built-in sample inventory used to seed an empty data file.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{Category, SupplyItemInput};

struct SampleRow {
    name: &'static str,
    category: Category,
    supplier: &'static str,
    quantity: u32,
    min_stock: u32,
    /// Unit price in cents.
    unit_price_cents: i64,
    expiry: (i32, u32, u32),
}

const SAMPLE_ROWS: [SampleRow; 5] = [
    SampleRow {
        name: "Surgical Masks",
        category: Category::Ppe,
        supplier: "MedCorp Inc",
        quantity: 150,
        min_stock: 100,
        unit_price_cents: 75,
        expiry: (2025, 12, 31),
    },
    SampleRow {
        name: "Disposable Gloves",
        category: Category::Ppe,
        supplier: "SafeGuard Medical",
        quantity: 45,
        min_stock: 50,
        unit_price_cents: 25,
        expiry: (2025, 8, 15),
    },
    SampleRow {
        name: "Insulin Syringes",
        category: Category::Injection,
        supplier: "PharmaSupply Co",
        quantity: 200,
        min_stock: 75,
        unit_price_cents: 150,
        expiry: (2026, 3, 20),
    },
    SampleRow {
        name: "Bandages",
        category: Category::WoundCare,
        supplier: "MedCorp Inc",
        quantity: 25,
        min_stock: 30,
        unit_price_cents: 200,
        expiry: (2027, 1, 10),
    },
    SampleRow {
        name: "Thermometers",
        category: Category::Diagnostic,
        supplier: "TechMed Solutions",
        quantity: 80,
        min_stock: 20,
        unit_price_cents: 1500,
        expiry: (2028, 6, 30),
    },
];

/// The sample inventory, in the order it should be added to a store.
pub fn sample_inputs() -> Vec<SupplyItemInput> {
    SAMPLE_ROWS
        .iter()
        .filter_map(|row| {
            let (year, month, day) = row.expiry;
            let expiry_date = NaiveDate::from_ymd_opt(year, month, day)?;
            Some(SupplyItemInput {
                name: row.name.to_string(),
                category: row.category,
                supplier: row.supplier.to_string(),
                quantity: row.quantity,
                min_stock: row.min_stock,
                unit_price: Decimal::new(row.unit_price_cents, 2),
                expiry_date,
            })
        })
        .collect()
}
