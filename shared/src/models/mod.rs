//! Data models
//!
//! Shared between mesa-server and its API clients.
//! Every document carries its own string id field (`room_id`, `table_id`, ...),
//! which is also the SurrealDB record key.

pub mod serde_helpers;

pub mod dashboard;
pub mod dining_table;
pub mod equipment;
pub mod haccp;
pub mod reservation;
pub mod room;
pub mod settings;
pub mod space;
pub mod user;

// Re-exports
pub use dashboard::*;
pub use dining_table::*;
pub use equipment::*;
pub use haccp::*;
pub use reservation::*;
pub use room::*;
pub use settings::*;
pub use space::*;
pub use user::*;
