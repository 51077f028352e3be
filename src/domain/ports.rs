use super::api::ApiResponse;
use super::order::{Order, OrderPriority, OrderStatus};
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The persisted outcome of one order.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub struct StatusRecord {
    pub status: OrderStatus,
    pub priority: OrderPriority,
}

/// Loads the pending orders of a user.
#[async_trait]
pub trait OrderSource: Send + Sync {
    async fn orders_for_user(&self, user_id: u32) -> Result<Vec<Order>>;
}

/// Persists the outcome of each order. Failures are reported as
/// `OrderError::DatabaseError`.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn update_order_status(
        &self,
        order_id: u32,
        status: OrderStatus,
        priority: OrderPriority,
    ) -> Result<()>;
    async fn get(&self, order_id: u32) -> Result<Option<StatusRecord>>;
}

/// External API consulted by type B orders. A call that cannot be completed
/// is reported as `OrderError::ApiError`.
#[async_trait]
pub trait ApiClient: Send + Sync {
    async fn call_api(&self, order_id: u32) -> Result<ApiResponse>;
}

/// Export sink for type A orders. Write failures are reported as
/// `OrderError::IoError` or `OrderError::CsvError`.
#[async_trait]
pub trait OrderExporter: Send + Sync {
    async fn export(&self, order: &Order) -> Result<()>;
}

pub type OrderSourceBox = Box<dyn OrderSource>;
pub type OrderRepositoryBox = Box<dyn OrderRepository>;
pub type ApiClientBox = Box<dyn ApiClient>;
pub type OrderExporterBox = Box<dyn OrderExporter>;
