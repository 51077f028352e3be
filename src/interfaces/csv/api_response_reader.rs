use crate::domain::api::{ApiResponse, ApiStatus};
use crate::error::{OrderError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// One recorded API answer, keyed by the order it belongs to.
#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
pub struct ApiResponseRow {
    pub order: u32,
    pub status: ApiStatus,
    pub data: Decimal,
}

impl ApiResponseRow {
    pub fn response(&self) -> ApiResponse {
        ApiResponse::new(self.status, self.data)
    }
}

/// Reads canned API responses from a CSV source with the columns
/// `order,status,data`.
pub struct ApiResponseReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ApiResponseReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn responses(self) -> impl Iterator<Item = Result<ApiResponseRow>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(OrderError::from))
    }
}
