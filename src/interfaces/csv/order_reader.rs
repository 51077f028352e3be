use crate::domain::order::{Amount, Order, OrderType};
use crate::error::{OrderError, Result};
use serde::Deserialize;
use std::io::Read;

/// One line of the orders input file.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct OrderRow {
    pub id: u32,
    pub user: u32,
    pub r#type: OrderType,
    pub amount: Amount,
    pub flag: bool,
}

impl OrderRow {
    pub fn into_order(self) -> Order {
        Order::new(self.id, self.r#type, self.amount, self.flag)
    }
}

/// Reads orders from a CSV source with the columns `id,user,type,amount,flag`.
///
/// This reader wraps `csv::Reader` and provides an iterator over `Result<OrderRow>`.
/// It handles whitespace trimming and flexible record lengths automatically.
pub struct OrderReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OrderReader<R> {
    /// Creates a new `OrderReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes order rows.
    pub fn orders(self) -> impl Iterator<Item = Result<OrderRow>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(OrderError::from))
    }
}
