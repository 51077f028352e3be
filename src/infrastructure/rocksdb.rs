use crate::domain::order::{OrderPriority, OrderStatus};
use crate::domain::ports::{OrderRepository, StatusRecord};
use crate::error::{OrderError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;

/// Column Family for storing order outcomes.
pub const CF_ORDER_STATUS: &str = "order_status";

/// A persistent order repository backed by RocksDB.
///
/// Outcomes live in their own Column Family, keyed by the big-endian order id
/// and stored as JSON `StatusRecord`s.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDBOrderRepository {
    db: Arc<DB>,
}

impl RocksDBOrderRepository {
    /// Opens or creates a RocksDB instance at the specified path.
    ///
    /// Ensures that the "order_status" column family exists.
    ///
    /// # Arguments
    ///
    /// * `path` - The filesystem path where the database will be stored.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_status = ColumnFamilyDescriptor::new(CF_ORDER_STATUS, Options::default());

        let db = DB::open_cf_descriptors(&opts, path, vec![cf_status]).map_err(database_error)?;

        Ok(Self { db: Arc::new(db) })
    }
}

fn database_error(e: rocksdb::Error) -> OrderError {
    OrderError::DatabaseError(e.to_string())
}

#[async_trait]
impl OrderRepository for RocksDBOrderRepository {
    async fn update_order_status(
        &self,
        order_id: u32,
        status: OrderStatus,
        priority: OrderPriority,
    ) -> Result<()> {
        let cf = self.db.cf_handle(CF_ORDER_STATUS).ok_or_else(|| {
            OrderError::DatabaseError("Order status column family not found".to_string())
        })?;

        let key = order_id.to_be_bytes();
        let value = serde_json::to_vec(&StatusRecord { status, priority }).map_err(|e| {
            OrderError::InternalError(Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization error: {}", e),
            )))
        })?;

        self.db.put_cf(&cf, key, value).map_err(database_error)?;

        Ok(())
    }

    async fn get(&self, order_id: u32) -> Result<Option<StatusRecord>> {
        let cf = self.db.cf_handle(CF_ORDER_STATUS).ok_or_else(|| {
            OrderError::DatabaseError("Order status column family not found".to_string())
        })?;

        let key = order_id.to_be_bytes();
        let result = self.db.get_cf(&cf, key).map_err(database_error)?;

        if let Some(bytes) = result {
            let record = serde_json::from_slice(&bytes).map_err(|e| {
                OrderError::InternalError(Box::new(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!("Deserialization error: {}", e),
                )))
            })?;
            Ok(Some(record))
        } else {
            Ok(None)
        }
    }
}
