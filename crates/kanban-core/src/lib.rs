pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
pub mod result;
pub mod selection;
pub mod traits;

#[cfg(any(test, feature = "mock"))]
pub use clock::MockClock;
pub use clock::{Clock, SystemClock};
pub use config::AppConfig;
pub use error::KanbanError;
pub use result::KanbanResult;
pub use selection::Selection;
pub use traits::{find_by_id, Identifiable};
