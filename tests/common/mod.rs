#![allow(dead_code)]

use async_trait::async_trait;
use orderbatch::domain::order::{Amount, Order, OrderPriority, OrderStatus};
use orderbatch::domain::ports::{OrderExporter, OrderRepository, StatusRecord};
use orderbatch::error::{OrderError, Result};
use orderbatch::infrastructure::in_memory::InMemoryOrderRepository;
use rand::Rng;
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::fs::File;
use std::io::Error;
use std::path::Path;

pub fn order(id: u32, kind: &str, amount: Decimal, flag: bool) -> Order {
    Order::new(id, kind, Amount::new(amount).unwrap(), flag)
}

/// Writes an orders input file with the columns `id,user,type,amount,flag`.
pub fn write_orders_csv(path: &Path, rows: &[[&str; 5]]) -> std::result::Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["id", "user", "type", "amount", "flag"])?;
    for row in rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes an API responses file with the columns `order,status,data`.
pub fn write_api_responses_csv(path: &Path, rows: &[[&str; 3]]) -> std::result::Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["order", "status", "data"])?;
    for row in rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Generates `count` orders with random types, amounts and flags.
///
/// Amounts are whole numbers in `0..=400` so that every threshold is hit.
pub fn random_orders(count: u32) -> Vec<Order> {
    let mut rng = rand::thread_rng();
    let kinds = ["A", "B", "C", "D", "E"];

    (1..=count)
        .map(|id| {
            let kind = kinds[rng.gen_range(0..kinds.len())];
            let amount = Decimal::from(rng.gen_range(0u32..=400));
            order(id, kind, amount, rng.gen_bool(0.5))
        })
        .collect()
}

/// An in-memory repository that refuses to save the given orders.
#[derive(Clone, Default)]
pub struct FailingRepository {
    inner: InMemoryOrderRepository,
    failing: HashSet<u32>,
}

impl FailingRepository {
    pub fn new(failing: impl IntoIterator<Item = u32>) -> Self {
        Self {
            inner: InMemoryOrderRepository::new(),
            failing: failing.into_iter().collect(),
        }
    }
}

#[async_trait]
impl OrderRepository for FailingRepository {
    async fn update_order_status(
        &self,
        order_id: u32,
        status: OrderStatus,
        priority: OrderPriority,
    ) -> Result<()> {
        if self.failing.contains(&order_id) {
            return Err(OrderError::DatabaseError(format!(
                "write rejected for order {order_id}"
            )));
        }
        self.inner.update_order_status(order_id, status, priority).await
    }

    async fn get(&self, order_id: u32) -> Result<Option<StatusRecord>> {
        self.inner.get(order_id).await
    }
}

/// An exporter that accepts every order without writing anything.
#[derive(Clone, Default)]
pub struct NullExporter;

#[async_trait]
impl OrderExporter for NullExporter {
    async fn export(&self, _order: &Order) -> Result<()> {
        Ok(())
    }
}

/// An exporter whose storage is gone.
#[derive(Clone, Default)]
pub struct BrokenExporter;

#[async_trait]
impl OrderExporter for BrokenExporter {
    async fn export(&self, _order: &Order) -> Result<()> {
        Err(OrderError::IoError(std::io::Error::other("export volume unavailable")))
    }
}
