pub mod store;
pub mod contact_repo;
pub mod service_inquiry_repo;
pub mod portfolio_repo;
pub mod testimonial_repo;
pub mod newsletter_repo;
pub mod pg_store;
pub mod memory_store;

pub use store::*;
pub use contact_repo::*;
pub use service_inquiry_repo::*;
pub use portfolio_repo::*;
pub use testimonial_repo::*;
pub use newsletter_repo::*;
pub use pg_store::PgSiteStore;
pub use memory_store::MemoryStore;
