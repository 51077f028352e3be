use crate::domain::api::ApiResponse;
use crate::domain::order::{Order, OrderPriority, OrderStatus};
use crate::domain::ports::{ApiClient, OrderExporter, OrderRepository, OrderSource, StatusRecord};
use crate::error::Result;
use async_trait::async_trait;
use mockall::mock;

mock! {
    pub Api {}

    #[async_trait]
    impl ApiClient for Api {
        async fn call_api(&self, order_id: u32) -> Result<ApiResponse>;
    }
}

mock! {
    pub Repository {}

    #[async_trait]
    impl OrderRepository for Repository {
        async fn update_order_status(
            &self,
            order_id: u32,
            status: OrderStatus,
            priority: OrderPriority,
        ) -> Result<()>;
        async fn get(&self, order_id: u32) -> Result<Option<StatusRecord>>;
    }
}

mock! {
    pub Exporter {}

    #[async_trait]
    impl OrderExporter for Exporter {
        async fn export(&self, order: &Order) -> Result<()>;
    }
}

mock! {
    pub Source {}

    #[async_trait]
    impl OrderSource for Source {
        async fn orders_for_user(&self, user_id: u32) -> Result<Vec<Order>>;
    }
}
