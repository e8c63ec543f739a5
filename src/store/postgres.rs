use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::forms::{InvoiceInput, PropertyInput};
use crate::models::{Customer, Invoice, InvoiceListing, Property, User};

use super::{Store, StoreError};

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn list_customers(&self) -> Result<Vec<Customer>, StoreError> {
        let customers = sqlx::query_as::<_, Customer>(
            "SELECT * FROM customers ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(customers)
    }

    async fn list_invoices(&self) -> Result<Vec<InvoiceListing>, StoreError> {
        let invoices = sqlx::query_as::<_, InvoiceListing>(
            "SELECT i.id, i.customer_id, c.name AS customer_name, i.amount, i.status, i.date
             FROM invoices i JOIN customers c ON c.id = i.customer_id
             ORDER BY i.date DESC, i.id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(invoices)
    }

    async fn find_invoice(&self, id: Uuid) -> Result<Option<Invoice>, StoreError> {
        let invoice = sqlx::query_as::<_, Invoice>("SELECT * FROM invoices WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(invoice)
    }

    async fn insert_invoice(
        &self,
        input: &InvoiceInput,
        date: NaiveDate,
    ) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO invoices (customer_id, amount, status, date) VALUES ($1, $2, $3, $4)",
        )
        .bind(input.customer_id)
        .bind(input.amount_cents)
        .bind(input.status)
        .bind(date)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn update_invoice(&self, id: Uuid, input: &InvoiceInput) -> Result<(), StoreError> {
        // Zero rows affected (unknown id) is not an error here.
        sqlx::query(
            "UPDATE invoices SET customer_id = $2, amount = $3, status = $4 WHERE id = $1",
        )
        .bind(id)
        .bind(input.customer_id)
        .bind(input.amount_cents)
        .bind(input.status)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete_invoice(&self, id: Uuid) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_properties(&self) -> Result<Vec<Property>, StoreError> {
        let properties = sqlx::query_as::<_, Property>(
            "SELECT * FROM properties ORDER BY title ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(properties)
    }

    async fn find_property(&self, id: Uuid) -> Result<Option<Property>, StoreError> {
        let property = sqlx::query_as::<_, Property>("SELECT * FROM properties WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(property)
    }

    async fn insert_property(&self, input: &PropertyInput) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO properties
             (title, address, image_url, monthly_rent, tenants, letting_status, compliance_status)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(&input.title)
        .bind(&input.address)
        .bind(&input.image_url)
        .bind(input.monthly_rent_cents)
        .bind(input.tenants)
        .bind(input.letting_status)
        .bind(input.compliance_status)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn update_property(&self, id: Uuid, input: &PropertyInput) -> Result<(), StoreError> {
        sqlx::query(
            "UPDATE properties
             SET title = $2, address = $3, image_url = $4, monthly_rent = $5, tenants = $6,
                 letting_status = $7, compliance_status = $8
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.address)
        .bind(&input.image_url)
        .bind(input.monthly_rent_cents)
        .bind(input.tenants)
        .bind(input.letting_status)
        .bind(input.compliance_status)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete_property(&self, id: Uuid) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM properties WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }
}
