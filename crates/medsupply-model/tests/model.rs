//! Tests for medsupply-model types.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use medsupply_model::{
    Category, StockStatus, SupplyError, SupplyField, SupplyId, SupplyItem, SupplyItemInput,
};

fn gloves_input() -> SupplyItemInput {
    SupplyItemInput {
        name: "Disposable Gloves".to_string(),
        category: Category::Ppe,
        supplier: "SafeGuard Medical".to_string(),
        quantity: 45,
        min_stock: 50,
        unit_price: Decimal::new(25, 2),
        expiry_date: NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(),
    }
}

#[test]
fn status_follows_levels_after_apply() {
    let id = SupplyId::new(2).unwrap();
    let mut item = SupplyItem::new(id, gloves_input());
    assert_eq!(item.status(), StockStatus::LowStock);

    let mut input = gloves_input();
    input.quantity = 500;
    item.apply(input);
    assert_eq!(item.id, id);
    assert_eq!(item.status(), StockStatus::InStock);
}

#[test]
fn item_value_keeps_full_precision() {
    let mut input = gloves_input();
    input.quantity = 3;
    input.unit_price = Decimal::new(3333, 3);
    let item = SupplyItem::new(SupplyId::FIRST, input);
    assert_eq!(item.value(), Decimal::new(9999, 3));
}

#[test]
fn zero_id_is_rejected() {
    assert_eq!(SupplyId::new(0), Err(SupplyError::InvalidId("0".to_string())));
    assert!("abc".parse::<SupplyId>().is_err());
    assert_eq!("7".parse::<SupplyId>().unwrap().get(), 7);
}

#[test]
fn item_serializes_without_status() {
    let item = SupplyItem::new(SupplyId::FIRST, gloves_input());
    let json = serde_json::to_value(&item).expect("serialize item");
    assert_eq!(json["id"], 1);
    assert_eq!(json["category"], "PPE");
    assert_eq!(json["minStock"], 50);
    assert_eq!(json["expiryDate"], "2025-08-15");
    assert!(json.get("status").is_none());

    let round: SupplyItem = serde_json::from_value(json).expect("deserialize item");
    assert_eq!(round, item);
}

#[test]
fn stored_status_is_ignored_on_load() {
    let json = r#"{
        "id": 4,
        "name": "Bandages",
        "category": "Wound Care",
        "supplier": "MedCorp Inc",
        "quantity": 25,
        "minStock": 30,
        "unitPrice": "2.00",
        "expiryDate": "2027-01-10",
        "status": "In Stock"
    }"#;
    let item: SupplyItem = serde_json::from_str(json).expect("deserialize item");
    assert_eq!(item.status(), StockStatus::LowStock);
}

#[test]
fn zero_id_fails_to_deserialize() {
    let json = r#"{
        "id": 0,
        "name": "Bandages",
        "category": "Wound Care",
        "supplier": "MedCorp Inc",
        "quantity": 25,
        "minStock": 30,
        "unitPrice": "2.00",
        "expiryDate": "2027-01-10"
    }"#;
    assert!(serde_json::from_str::<SupplyItem>(json).is_err());
}

#[test]
fn field_errors_name_their_field() {
    let error = SupplyError::InvalidNumber {
        field: SupplyField::MinStock,
        value: "ten".to_string(),
    };
    assert_eq!(error.field(), Some(SupplyField::MinStock));
    assert_eq!(
        error.to_string(),
        "Min Stock must be a valid number, got \"ten\""
    );
    assert_eq!(
        SupplyError::NotFound {
            id: SupplyId::FIRST
        }
        .field(),
        None
    );
}
