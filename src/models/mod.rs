pub mod customer;
pub mod invoice;
pub mod property;
pub mod user;

pub use customer::Customer;
pub use invoice::{Invoice, InvoiceListing, InvoiceStatus};
pub use property::{ComplianceStatus, LettingStatus, Property};
pub use user::User;
