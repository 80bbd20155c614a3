use bevy::prelude::*;

/// Wird gesendet, wenn sich Punktdaten eines Splines geändert haben und
/// dessen abgeleitete Daten neu berechnet werden müssen.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplineChangedEvent {
    pub spline: Entity,
}
