pub mod postgres;

pub use postgres::PgStore;

use std::fmt;

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::forms::{InvoiceInput, PropertyInput};
use crate::models::{Customer, Invoice, InvoiceListing, Property, User};

#[derive(Debug)]
pub enum StoreError {
    Database(sqlx::Error),
    Unavailable,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Database(err) => write!(f, "database error: {err}"),
            StoreError::Unavailable => write!(f, "store unavailable"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Database(err)
    }
}

/// Persistence port for the dashboard. Every method issues exactly one
/// statement against the backing store; actions never see the pool directly.
#[async_trait]
pub trait Store: Send + Sync {
    async fn list_customers(&self) -> Result<Vec<Customer>, StoreError>;

    async fn list_invoices(&self) -> Result<Vec<InvoiceListing>, StoreError>;
    async fn find_invoice(&self, id: Uuid) -> Result<Option<Invoice>, StoreError>;
    async fn insert_invoice(&self, input: &InvoiceInput, date: NaiveDate)
        -> Result<(), StoreError>;
    async fn update_invoice(&self, id: Uuid, input: &InvoiceInput) -> Result<(), StoreError>;
    async fn delete_invoice(&self, id: Uuid) -> Result<(), StoreError>;

    async fn list_properties(&self) -> Result<Vec<Property>, StoreError>;
    async fn find_property(&self, id: Uuid) -> Result<Option<Property>, StoreError>;
    async fn insert_property(&self, input: &PropertyInput) -> Result<(), StoreError>;
    async fn update_property(&self, id: Uuid, input: &PropertyInput) -> Result<(), StoreError>;
    async fn delete_property(&self, id: Uuid) -> Result<(), StoreError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
}
