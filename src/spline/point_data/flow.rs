// src/spline/point_data/flow.rs
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::SplinePointData;
use crate::spline::migration::FLOW_DATA_VERSION;
use crate::spline::notify::SplineChangeNotifier;

pub const DEFAULT_FLOW_VELOCITY: f32 = 2.0;

/// Flow-Daten eines Kontrollpunktes: Fließgeschwindigkeit entlang der Spline-Tangente.
///
/// Negative Werte drehen die Fließrichtung um. Es gibt keine Bereichsprüfung,
/// die Interpretation extremer Werte bleibt dem Sampler überlassen.
#[derive(Component, Reflect, Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[reflect(Component, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SplinePointDataFlow {
    /// Nur für die Migration relevant, nicht Teil des funktionalen Zustands.
    version: u32,
    flow_velocity: f32,
}

impl Default for SplinePointDataFlow {
    fn default() -> Self {
        Self {
            version: FLOW_DATA_VERSION,
            flow_velocity: DEFAULT_FLOW_VELOCITY,
        }
    }
}

impl SplinePointDataFlow {
    pub fn new(flow_velocity: f32) -> Self {
        Self {
            flow_velocity,
            ..default()
        }
    }

    pub fn flow_velocity(&self) -> f32 {
        self.flow_velocity
    }

    /// Übernimmt `value` unverändert und benachrichtigt danach `notifier` genau einmal.
    pub fn set_flow_velocity<N>(&mut self, value: f32, notifier: &mut N)
    where
        N: SplineChangeNotifier + ?Sized,
    {
        self.flow_velocity = value;
        notifier.notify_of_spline_change();
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub(crate) fn set_version(&mut self, version: u32) {
        self.version = version;
    }
}

impl SplinePointData for SplinePointDataFlow {
    // Zweiter Kanal ist reserviert und bleibt immer 0
    fn get_data(&self) -> Vec2 {
        Vec2::new(self.flow_velocity, 0.0)
    }
}
