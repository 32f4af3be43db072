pub mod registry;

pub use crate::domain::model::{Activity, ActivitySnapshot, Confirmation, SeedActivity};
pub use crate::domain::ports::ActivityRegistry;
pub use crate::utils::error::Result;
pub use registry::InMemoryRegistry;
