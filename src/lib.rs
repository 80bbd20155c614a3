// ./src/lib.rs
//! Per-control-point data for splines that drive ocean surface effects
//! (rivers, shorelines), integrated as a Bevy plugin.

pub mod error;
pub mod spline;

pub use error::{SplineDataError, SplineResult};

// Öffentliche API
pub mod prelude {
    pub use super::{
        error::{SplineDataError, SplineResult},
        spline::{
            NoopNotifier, Spline, SplineChangeNotifier, SplineChangeSender, SplineChangedEvent,
            SplineControlPoint, SplineDataConfig, SplineDataPlugin, SplineDataSet, SplineDirty,
            SplinePointData, SplinePointDataFlow, gather_point_data,
        },
    };
}
