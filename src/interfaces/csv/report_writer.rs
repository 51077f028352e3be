use crate::domain::order::{Amount, Order, OrderPriority, OrderStatus};
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// Column set of the batch report, in output order.
pub const REPORT_HEADER: [&str; 5] = ["id", "type", "status", "priority", "amount"];

#[derive(Serialize)]
struct ReportRow<'a> {
    id: u32,
    r#type: &'a str,
    status: OrderStatus,
    priority: OrderPriority,
    amount: Amount,
}

impl<'a> From<&'a Order> for ReportRow<'a> {
    fn from(order: &'a Order) -> Self {
        Self {
            id: order.id,
            r#type: order.r#type.as_str(),
            status: order.status,
            priority: order.priority,
            amount: order.amount,
        }
    }
}

/// Writes the batch report: a header row followed by one row per order.
///
/// The header is written and flushed as soon as the writer is created, so a
/// run with no orders still leaves a well-formed report behind.
pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(sink: W) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(sink);
        writer.write_record(REPORT_HEADER)?;
        writer.flush()?;
        Ok(Self { writer })
    }

    pub fn write_order(&mut self, order: &Order) -> Result<()> {
        self.writer.serialize(ReportRow::from(order))?;
        Ok(())
    }

    pub fn write_orders<'a>(&mut self, orders: impl IntoIterator<Item = &'a Order>) -> Result<()> {
        for order in orders {
            self.write_order(order)?;
        }
        Ok(())
    }

    /// Flushes buffered rows into the underlying sink.
    pub fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
