pub mod components;
pub mod config;
pub mod events;
pub mod migration;
pub mod notify;
pub mod plugin;
pub mod point_data;

pub use components::*;
pub use config::SplineDataConfig;
pub use events::SplineChangedEvent;
pub use migration::{FLOW_DATA_VERSION, MigrationOutcome, migrate_flow_point};
pub use notify::{NoopNotifier, SplineChangeNotifier, SplineChangeSender};
pub use plugin::*;
pub use point_data::*;
