pub mod types;

pub use types::{PortalError, StoreError, ValidationError};
