use crate::domain::api::ApiResponse;
use crate::domain::order::{Order, OrderPriority, OrderStatus};
use crate::domain::ports::{ApiClient, OrderRepository, OrderSource, StatusRecord};
use crate::error::{OrderError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory source of pending orders, grouped by user.
///
/// Orders keep the order in which they were added for their user.
#[derive(Default, Clone)]
pub struct InMemoryOrderSource {
    orders: Arc<RwLock<HashMap<u32, Vec<Order>>>>,
}

impl InMemoryOrderSource {
    /// Creates a new, empty in-memory order source.
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add(&self, user_id: u32, order: Order) {
        let mut orders = self.orders.write().await;
        orders.entry(user_id).or_default().push(order);
    }
}

#[async_trait]
impl OrderSource for InMemoryOrderSource {
    async fn orders_for_user(&self, user_id: u32) -> Result<Vec<Order>> {
        let orders = self.orders.read().await;
        Ok(orders.get(&user_id).cloned().unwrap_or_default())
    }
}

/// A thread-safe in-memory store for order outcomes.
///
/// Uses `Arc<RwLock<HashMap<u32, StatusRecord>>>` to allow shared concurrent access.
/// Ideal for testing or one-off runs where persistence is not required.
#[derive(Default, Clone)]
pub struct InMemoryOrderRepository {
    records: Arc<RwLock<HashMap<u32, StatusRecord>>>,
}

impl InMemoryOrderRepository {
    /// Creates a new, empty in-memory order repository.
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn update_order_status(
        &self,
        order_id: u32,
        status: OrderStatus,
        priority: OrderPriority,
    ) -> Result<()> {
        let mut records = self.records.write().await;
        records.insert(order_id, StatusRecord { status, priority });
        Ok(())
    }

    async fn get(&self, order_id: u32) -> Result<Option<StatusRecord>> {
        let records = self.records.read().await;
        Ok(records.get(&order_id).copied())
    }
}

/// An API client answering from a fixed table of responses.
///
/// Orders without a registered response fail the call, the same way an
/// unreachable API would.
#[derive(Default, Clone)]
pub struct StaticApiClient {
    responses: Arc<RwLock<HashMap<u32, ApiResponse>>>,
}

impl StaticApiClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, order_id: u32, response: ApiResponse) {
        let mut responses = self.responses.write().await;
        responses.insert(order_id, response);
    }
}

#[async_trait]
impl ApiClient for StaticApiClient {
    async fn call_api(&self, order_id: u32) -> Result<ApiResponse> {
        let responses = self.responses.read().await;
        responses
            .get(&order_id)
            .copied()
            .ok_or_else(|| OrderError::ApiError(format!("no response for order {order_id}")))
    }
}
