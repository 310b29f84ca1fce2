//! Match event infrastructure
//!
//! Systems emit GameEvents to the EventBus; the logger drains the bus each
//! frame and writes a compact text log for later inspection.

pub mod bus;
pub mod format;
pub mod logger;
pub mod types;

pub use bus::{BusEvent, EventBus, update_event_bus_time};
pub use format::serialize_event;
pub use logger::{EventLogConfig, EventLogger, log_events};
pub use types::GameEvent;
