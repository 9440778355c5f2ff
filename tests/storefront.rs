//! End-to-end storefront flow over file-backed storage.
//!
//! Walks the full journey a device goes through: open the seeded
//! catalog, build a cart, check out, then reopen every store from the
//! same data directory and confirm the state survived. Numbers follow
//! the seed catalog: a Classic Jar candle is GHS 220.00 (22_000
//! pesewas) and a Standard reed diffuser GHS 150.00 (15_000), so two
//! jars plus one diffuser total 59_000.

use std::{sync::Arc, time::Duration};

use tempfile::tempdir;
use testresult::TestResult;

use emberwick::{
    admin,
    cart::CartStore,
    catalog::{CatalogStore, NewProduct},
    checkout::{Checkout, CheckoutRequest, SimulatedGateway},
    orders::{ContactInfo, OrderStatus, OrderStore, PaymentMethod},
    storage::JsonFileStorage,
};

fn contact() -> ContactInfo {
    ContactInfo {
        name: "Ama Mensah".to_string(),
        email: "ama@example.com".to_string(),
        phone: "+233201234567".to_string(),
        address: "12 Ring Road, Accra".to_string(),
        note: None,
    }
}

#[tokio::test]
async fn purchase_flow_survives_reopening_the_data_directory() -> TestResult {
    let dir = tempdir()?;
    let storage = Arc::new(JsonFileStorage::open(dir.path())?);

    let catalog = CatalogStore::open(Arc::clone(&storage))?;
    let candle = catalog
        .get_by_slug("amber-glow-candle")
        .ok_or("seed candle missing")?
        .clone();
    let diffuser = catalog
        .get_by_slug("midnight-reed-diffuser")
        .ok_or("seed diffuser missing")?
        .clone();

    let mut cart = CartStore::open(Arc::clone(&storage))?;
    cart.add_item(&candle, Some("jar"), None, Some("Vanilla Ember"), 2)?;
    cart.add_item(&diffuser, Some("standard"), None, None, 1)?;

    assert_eq!(cart.total(), 59_000);
    assert_eq!(cart.item_count(), 3);

    let mut orders = OrderStore::open(Arc::clone(&storage))?;
    let checkout = Checkout::new(SimulatedGateway::with_delay(Duration::ZERO));

    let order = checkout
        .place_order(
            &mut cart,
            &mut orders,
            CheckoutRequest {
                contact: contact(),
                method: PaymentMethod::Card,
                card_number: Some("4111111111111111".to_string()),
            },
        )
        .await?;

    assert_eq!(order.total, 59_000);
    assert_eq!(order.status, OrderStatus::Paid);
    assert!(cart.is_empty());

    // Everything below uses fresh stores over the same directory.
    let storage = Arc::new(JsonFileStorage::open(dir.path())?);

    let cart = CartStore::open(Arc::clone(&storage))?;
    assert!(cart.is_empty());

    let mut orders = OrderStore::open(Arc::clone(&storage))?;
    let persisted = orders.get(order.id).ok_or("order missing after reopen")?;

    assert_eq!(persisted.items.len(), 2);
    assert_eq!(persisted.reference, order.reference);

    orders.update_status(order.id, OrderStatus::Shipped)?;

    let reopened = OrderStore::open(Arc::clone(&storage))?;
    let shipped = reopened.get(order.id).ok_or("order missing after update")?;

    assert_eq!(shipped.status, OrderStatus::Shipped);

    Ok(())
}

#[tokio::test]
async fn declined_payment_keeps_the_cart_for_a_retry() -> TestResult {
    let dir = tempdir()?;
    let storage = Arc::new(JsonFileStorage::open(dir.path())?);

    let catalog = CatalogStore::open(Arc::clone(&storage))?;
    let mist = catalog
        .get_by_slug("room-linen-mist")
        .ok_or("seed mist missing")?
        .clone();

    let mut cart = CartStore::open(Arc::clone(&storage))?;
    cart.add_item(&mist, None, None, Some("Lavender Dusk"), 2)?;

    let mut orders = OrderStore::open(Arc::clone(&storage))?;
    let checkout = Checkout::new(SimulatedGateway::with_delay(Duration::ZERO));

    let declined = checkout
        .place_order(
            &mut cart,
            &mut orders,
            CheckoutRequest {
                contact: contact(),
                method: PaymentMethod::Card,
                card_number: None,
            },
        )
        .await;

    assert!(declined.is_err());
    assert_eq!(cart.item_count(), 2);
    assert!(orders.list().is_empty());

    // Same cart, corrected details.
    let order = checkout
        .place_order(
            &mut cart,
            &mut orders,
            CheckoutRequest {
                contact: contact(),
                method: PaymentMethod::Card,
                card_number: Some("4111111111111111".to_string()),
            },
        )
        .await?;

    assert_eq!(order.total, 17_000);
    assert!(cart.is_empty());

    Ok(())
}

#[tokio::test]
async fn admin_report_reflects_placed_orders_and_seeded_stock() -> TestResult {
    let dir = tempdir()?;
    let storage = Arc::new(JsonFileStorage::open(dir.path())?);

    let catalog = CatalogStore::open(Arc::clone(&storage))?;
    let gift_set = catalog
        .get_by_slug("discovery-scent-set")
        .ok_or("seed gift set missing")?
        .clone();

    let mut cart = CartStore::open(Arc::clone(&storage))?;
    let mut orders = OrderStore::open(Arc::clone(&storage))?;
    let checkout = Checkout::new(SimulatedGateway::with_delay(Duration::ZERO));

    cart.add_item(&gift_set, None, None, None, 2)?;
    checkout
        .place_order(
            &mut cart,
            &mut orders,
            CheckoutRequest {
                contact: contact(),
                method: PaymentMethod::CashOnDelivery,
                card_number: None,
            },
        )
        .await?;

    cart.add_item(&gift_set, None, None, None, 1)?;
    checkout
        .place_order(
            &mut cart,
            &mut orders,
            CheckoutRequest {
                contact: ContactInfo {
                    name: "Kofi Boateng".to_string(),
                    email: "kofi@example.com".to_string(),
                    ..contact()
                },
                method: PaymentMethod::MobileMoney,
                card_number: None,
            },
        )
        .await?;

    let summary = admin::sales_summary(orders.list());

    assert_eq!(summary.order_count, 2);
    assert_eq!(summary.revenue, 37_500);
    assert_eq!(summary.average_order_value, 18_750);

    let customers = admin::customer_summaries(orders.list());

    assert_eq!(customers.len(), 2);
    assert_eq!(customers[0].email, "kofi@example.com");

    // The seed ships the diffuser at 4 and the wax melts at 3 in stock.
    let low: Vec<_> = admin::low_stock(catalog.list())
        .iter()
        .map(|product| product.slug.as_str())
        .collect();

    assert_eq!(low, vec!["midnight-reed-diffuser", "wax-melt-collection"]);

    Ok(())
}

#[test]
fn catalog_edits_persist_across_reopening() -> TestResult {
    let dir = tempdir()?;
    let storage = Arc::new(JsonFileStorage::open(dir.path())?);

    let mut catalog = CatalogStore::open(Arc::clone(&storage))?;
    let seeded = catalog.list().len();

    let created = catalog.create(NewProduct {
        title: "Solstice Pillar Candle".to_string(),
        slug: "solstice-pillar-candle".to_string(),
        category: "candles".to_string(),
        base_price: 24_000,
        variants: Vec::new(),
        colors: Vec::new(),
        scents: vec!["Oud & Amber".to_string()],
        stock: 10,
        featured: false,
    })?;

    let reopened = CatalogStore::open(Arc::new(JsonFileStorage::open(dir.path())?))?;

    assert_eq!(reopened.list().len(), seeded + 1);

    let found = reopened
        .get_by_slug("solstice-pillar-candle")
        .ok_or("created product missing after reopen")?;

    assert_eq!(found.id, created.id);
    assert_eq!(found.base_price, 24_000);

    Ok(())
}
