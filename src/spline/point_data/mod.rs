//! Per-point data attached to spline control points.
//!
//! Every kind of point data emits the same two-channel shape so the sampling
//! pipeline can iterate over it uniformly. Kinds that need only one channel
//! leave the second one at exactly `0.0`.

pub mod flow;
pub use flow::*;

use bevy::prelude::*;

/// Die generische "Per-Point-Data"-Schnittstelle des Spline-Systems.
pub trait SplinePointData {
    fn get_data(&self) -> Vec2;
}

/// Sammelt die Ausgaben aller Punktdaten in der gegebenen Reihenfolge.
pub fn gather_point_data<'a, I>(points: I) -> Vec<Vec2>
where
    I: IntoIterator<Item = &'a dyn SplinePointData>,
{
    points.into_iter().map(|point| point.get_data()).collect()
}
