use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Success,
    Error,
}

/// What the external API answered for a type B order.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct ApiResponse {
    pub status: ApiStatus,
    pub data: Decimal,
}

impl ApiResponse {
    pub fn new(status: ApiStatus, data: Decimal) -> Self {
        Self { status, data }
    }

    pub fn success(data: Decimal) -> Self {
        Self::new(ApiStatus::Success, data)
    }

    pub fn is_success(&self) -> bool {
        self.status == ApiStatus::Success
    }
}
