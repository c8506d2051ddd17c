pub mod errors;
pub mod id;
pub mod persona;

pub use errors::{ConfigError, WatcherError};
pub use id::{new_id, SessionId};
