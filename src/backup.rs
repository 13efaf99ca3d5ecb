use std::fmt;

use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};
use crate::report::iso_timestamp;
use crate::store::BlobStore;

pub const BACKUP_PREFIX: &str = "deleted-orders/";

/// Price as it arrives in the order payload: either a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Number(n) => write!(f, "{n}"),
            Price::Text(s) => f.write_str(s),
        }
    }
}

/// An order record as it looked right before it was deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedOrder {
    pub order_id: String,
    #[serde(default)]
    pub order_description: String,
    pub price: Price,
    pub creation_date: String,
}

impl DeletedOrder {
    pub fn validate(&self) -> Result<()> {
        if self.order_id.trim().is_empty() {
            return Err(ReportError::InvalidOrder("orderId is required".into()));
        }
        // the id becomes part of a blob key
        if self.order_id.contains(['/', '\\']) {
            return Err(ReportError::InvalidOrder(format!(
                "orderId may not contain path separators: {}",
                self.order_id
            )));
        }
        Ok(())
    }
}

pub fn backup_key(order: &DeletedOrder) -> String {
    format!("{BACKUP_PREFIX}{}-{}.txt", order.order_id, order.creation_date)
}

/// Plain-text body of a backup file. Starts with an empty line.
pub fn backup_text(order: &DeletedOrder, deleted_at: DateTime<Utc>) -> String {
    format!(
        "\nOrder ID: {}\nDescription: {}\nPrice: {}\nCreated At: {}\nDeleted At: {}\n",
        order.order_id,
        order.order_description,
        order.price,
        order.creation_date,
        iso_timestamp(deleted_at),
    )
}

/// Write the backup file for `order` and return its key.
pub fn backup_deleted_order<S: BlobStore + ?Sized>(
    store: &S,
    order: &DeletedOrder,
    now: DateTime<Utc>,
) -> Result<String> {
    order.validate()?;
    let key = backup_key(order);
    store.put(&key, backup_text(order, now).as_bytes(), "text/plain")?;
    info!("deleted order backed up: {}", key);
    Ok(key)
}
