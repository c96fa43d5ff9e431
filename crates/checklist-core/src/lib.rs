//! Checklist Core
//!
//! Target-independent logic shared by the STS checklist forms:
//! - typed form records seeded from immutable templates
//! - operation-reference resolution from page query strings
//! - date normalization
//! - the transport error taxonomy and its user-facing message mapping
//! - backend response classification and submission route building

pub mod dates;
pub mod error;
pub mod forms;
pub mod json;
pub mod opref;
pub mod respond;
pub mod routes;
pub mod signature;

pub use error::FetchError;
pub use forms::{FormKey, FormRecord};
pub use opref::{trim_operation_ref, FormMode, PageQuery};
