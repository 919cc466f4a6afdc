pub mod aggregate;
pub mod queries;
pub mod static_entries;
pub mod types;

pub use aggregate::*;
pub use queries::*;
pub use types::*;
