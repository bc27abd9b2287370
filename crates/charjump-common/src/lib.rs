pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{CharJumpError, ConfigError, EngineError};
pub use events::{EventBus, NavigationEvent, OutcomeKind};
pub use id::{new_correlation_id, NavigationId};
pub use types::{Position, Range, ViewId};

pub type Result<T> = std::result::Result<T, CharJumpError>;
