use crate::domain::order::Order;
use crate::domain::ports::OrderExporter;
use crate::error::Result;
use async_trait::async_trait;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::Mutex;

pub const EXPORT_HEADER: [&str; 6] = ["ID", "Type", "Amount", "Flag", "Status", "Priority"];

/// Appends exported type A orders to a CSV file.
///
/// Nothing touches the filesystem until the first export: that call creates
/// (or truncates) the file and writes its header. After that the file is
/// reopened for every export so that a failing export only affects the order
/// being exported.
#[derive(Debug)]
pub struct CsvOrderExporter {
    path: PathBuf,
    created: Mutex<bool>,
}

impl CsvOrderExporter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            created: Mutex::new(false),
        }
    }

    /// Exporter for `user_id` inside `dir`, writing to
    /// `orders_type_A_<user>_<unix seconds>.csv`.
    pub fn for_user<P: AsRef<Path>>(dir: P, user_id: u32) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        Self::new(dir.as_ref().join(format!("orders_type_A_{user_id}_{timestamp}.csv")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self, created: bool) -> Result<csv::Writer<File>> {
        let file = if created {
            OpenOptions::new().append(true).open(&self.path)?
        } else {
            File::create(&self.path)?
        };
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if !created {
            writer.write_record(EXPORT_HEADER)?;
        }
        Ok(writer)
    }
}

#[async_trait]
impl OrderExporter for CsvOrderExporter {
    async fn export(&self, order: &Order) -> Result<()> {
        let mut created = self.created.lock().await;
        let mut writer = self.open(*created)?;
        *created = true;

        writer.write_record([
            order.id.to_string(),
            order.r#type.to_string(),
            order.amount.to_string(),
            order.flag.to_string(),
            order.status.to_string(),
            order.priority.to_string(),
        ])?;
        if let Some(note) = &order.note {
            writer.write_record(["", "", "", "", "Note", note.as_str()])?;
        }
        writer.flush()?;
        Ok(())
    }
}
