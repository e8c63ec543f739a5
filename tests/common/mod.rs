use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use uuid::Uuid;

use rentdesk::auth::password;
use rentdesk::config::Config;
use rentdesk::forms::{InvoiceInput, PropertyInput};
use rentdesk::models::{Customer, Invoice, InvoiceListing, Property, User};
use rentdesk::store::{Store, StoreError};

pub const TEST_EMAIL: &str = "manager@rentdesk.test";
pub const SECOND_EMAIL: &str = "ops@rentdesk.test";
pub const TEST_PASSWORD: &str = "password123";

/// In-memory `Store` for driving the app without Postgres. `set_failing`
/// simulates a database outage: every call errors until cleared.
pub struct MemStore {
    pub customers: Vec<Customer>,
    users: Vec<User>,
    pub invoices: Mutex<Vec<Invoice>>,
    pub properties: Mutex<Vec<Property>>,
    failing: AtomicBool,
}

impl MemStore {
    /// Two users and two customers, enough for every flow.
    pub fn seeded() -> Self {
        let password_hash = password::hash(TEST_PASSWORD).unwrap();
        let users = vec![
            User {
                id: Uuid::new_v4(),
                email: TEST_EMAIL.to_string(),
                name: "Maeve".to_string(),
                password_hash: password_hash.clone(),
            },
            User {
                id: Uuid::new_v4(),
                email: SECOND_EMAIL.to_string(),
                name: "Noel".to_string(),
                password_hash,
            },
        ];
        let customers = vec![
            Customer {
                id: Uuid::new_v4(),
                name: "Acme Lettings".to_string(),
                email: "billing@acme.test".to_string(),
            },
            Customer {
                id: Uuid::new_v4(),
                name: "Harbour Holdings".to_string(),
                email: "accounts@harbour.test".to_string(),
            },
        ];
        Self {
            customers,
            users,
            invoices: Mutex::new(Vec::new()),
            properties: Mutex::new(Vec::new()),
            failing: AtomicBool::new(false),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable)
        } else {
            Ok(())
        }
    }

    pub fn customer_id(&self, index: usize) -> Uuid {
        self.customers[index].id
    }
}

#[async_trait]
impl Store for MemStore {
    async fn list_customers(&self) -> Result<Vec<Customer>, StoreError> {
        self.check()?;
        Ok(self.customers.clone())
    }

    async fn list_invoices(&self) -> Result<Vec<InvoiceListing>, StoreError> {
        self.check()?;
        let invoices = self.invoices.lock().unwrap();
        Ok(invoices
            .iter()
            .map(|i| InvoiceListing {
                id: i.id,
                customer_id: i.customer_id,
                customer_name: self
                    .customers
                    .iter()
                    .find(|c| c.id == i.customer_id)
                    .map(|c| c.name.clone())
                    .unwrap_or_default(),
                amount: i.amount,
                status: i.status,
                date: i.date,
            })
            .collect())
    }

    async fn find_invoice(&self, id: Uuid) -> Result<Option<Invoice>, StoreError> {
        self.check()?;
        let invoices = self.invoices.lock().unwrap();
        Ok(invoices.iter().find(|i| i.id == id).cloned())
    }

    async fn insert_invoice(
        &self,
        input: &InvoiceInput,
        date: NaiveDate,
    ) -> Result<(), StoreError> {
        self.check()?;
        self.invoices.lock().unwrap().push(Invoice {
            id: Uuid::new_v4(),
            customer_id: input.customer_id,
            amount: input.amount_cents,
            status: input.status,
            date,
        });
        Ok(())
    }

    async fn update_invoice(&self, id: Uuid, input: &InvoiceInput) -> Result<(), StoreError> {
        self.check()?;
        let mut invoices = self.invoices.lock().unwrap();
        if let Some(invoice) = invoices.iter_mut().find(|i| i.id == id) {
            invoice.customer_id = input.customer_id;
            invoice.amount = input.amount_cents;
            invoice.status = input.status;
        }
        // Unknown id: zero rows affected, still Ok.
        Ok(())
    }

    async fn delete_invoice(&self, id: Uuid) -> Result<(), StoreError> {
        self.check()?;
        self.invoices.lock().unwrap().retain(|i| i.id != id);
        Ok(())
    }

    async fn list_properties(&self) -> Result<Vec<Property>, StoreError> {
        self.check()?;
        Ok(self.properties.lock().unwrap().clone())
    }

    async fn find_property(&self, id: Uuid) -> Result<Option<Property>, StoreError> {
        self.check()?;
        let properties = self.properties.lock().unwrap();
        Ok(properties.iter().find(|p| p.id == id).cloned())
    }

    async fn insert_property(&self, input: &PropertyInput) -> Result<(), StoreError> {
        self.check()?;
        self.properties.lock().unwrap().push(Property {
            id: Uuid::new_v4(),
            title: input.title.clone(),
            address: input.address.clone(),
            image_url: input.image_url.clone(),
            monthly_rent: input.monthly_rent_cents,
            tenants: input.tenants,
            letting_status: input.letting_status,
            compliance_status: input.compliance_status,
        });
        Ok(())
    }

    async fn update_property(&self, id: Uuid, input: &PropertyInput) -> Result<(), StoreError> {
        self.check()?;
        let mut properties = self.properties.lock().unwrap();
        if let Some(property) = properties.iter_mut().find(|p| p.id == id) {
            property.title = input.title.clone();
            property.address = input.address.clone();
            property.image_url = input.image_url.clone();
            property.monthly_rent = input.monthly_rent_cents;
            property.tenants = input.tenants;
            property.letting_status = input.letting_status;
            property.compliance_status = input.compliance_status;
        }
        Ok(())
    }

    async fn delete_property(&self, id: Uuid) -> Result<(), StoreError> {
        self.check()?;
        self.properties.lock().unwrap().retain(|p| p.id != id);
        Ok(())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        self.check()?;
        Ok(self.users.iter().find(|u| u.email == email).cloned())
    }
}

/// A running app instance backed by a `MemStore`.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub store: Arc<MemStore>,
    pub session: String,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Sign in with the default seeded user and capture the session cookie.
    pub async fn sign_in(&mut self) {
        self.sign_in_as(TEST_EMAIL).await;
    }

    pub async fn sign_in_as(&mut self, email: &str) {
        let resp = self
            .client
            .post(self.url("/login"))
            .form(&[("email", email), ("password", TEST_PASSWORD)])
            .send()
            .await
            .expect("login request failed");
        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "login did not redirect");

        let cookie = resp
            .headers()
            .get_all(reqwest::header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find(|v| v.starts_with("session="))
            .expect("no session cookie set");
        self.session = cookie.split(';').next().unwrap().to_string();
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .header("cookie", &self.session)
            .send()
            .await
            .expect("get request failed")
    }

    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .header("cookie", &self.session)
            .form(fields)
            .send()
            .await
            .expect("post request failed")
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(Arc::new(MemStore::seeded())).await
}

pub async fn spawn_app_with(store: Arc<MemStore>) -> TestApp {
    let config = Config {
        database_url: String::new(),
        session_secret: "test-session-secret".to_string(),
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        log_level: "warn".to_string(),
    };

    let app = rentdesk::build_app(store.clone(), config);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        addr,
        client,
        store,
        session: String::new(),
    }
}
