//! Step Counter Core
//!
//! Browser-free logic behind the counter widget: the bounded state machine,
//! the persisted-count adapter, the auto-increment timer driver and the
//! session that ties them together. The Leptos frontend only renders what a
//! [`CounterSession`] reports.

pub mod config;
pub mod error;
pub mod session;
pub mod state;
pub mod storage;
pub mod timer;

pub use config::CounterConfig;
pub use error::{ConfigError, StorageError, StorageResult};
pub use session::CounterSession;
pub use state::{parse_step, Bounds, CounterState, Tone};
pub use storage::{KeyValueStore, MemoryStore, PersistedCount};
pub use timer::{AutoIncrement, ManualScheduler, ManualTask, RepeatingTask, Scheduler};
