// src/spline/config.rs

use bevy::prelude::*;

use crate::error::{SplineDataError, SplineResult};

/// Konfiguration für das `SplineDataPlugin`.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SplineDataConfig {
    /// Direkte Feldzuweisungen (ohne Setter) über Bevys Change Detection melden.
    pub notify_on_direct_mutation: bool,
    /// `SplineDirty` auf dem Besitzer-Spline setzen, sobald ein `SplineChangedEvent` eintrifft.
    pub mark_dirty: bool,
    /// Neu hinzugefügte bzw. geladene Punktdaten auf die aktuelle Schema-Version migrieren.
    pub migrate_on_load: bool,
    /// Warnung loggen, wenn eine Flow-Geschwindigkeit NaN oder unendlich ist.
    /// Der Wert wird trotzdem unverändert übernommen.
    pub warn_on_non_finite: bool,
    /// Länge der Debug-Pfeile pro Einheit Flow-Geschwindigkeit.
    pub debug_arrow_scale: f32,
}

impl Default for SplineDataConfig {
    fn default() -> Self {
        Self {
            notify_on_direct_mutation: true,
            mark_dirty: true,
            migrate_on_load: true,
            warn_on_non_finite: true,
            debug_arrow_scale: 0.25,
        }
    }
}

impl SplineDataConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_direct_mutation_notify(mut self, enabled: bool) -> Self {
        self.notify_on_direct_mutation = enabled;
        self
    }

    pub fn with_mark_dirty(mut self, enabled: bool) -> Self {
        self.mark_dirty = enabled;
        self
    }

    pub fn with_migrate_on_load(mut self, enabled: bool) -> Self {
        self.migrate_on_load = enabled;
        self
    }

    pub fn with_non_finite_warning(mut self, enabled: bool) -> Self {
        self.warn_on_non_finite = enabled;
        self
    }

    pub fn with_debug_arrow_scale(mut self, scale: f32) -> Self {
        self.debug_arrow_scale = scale;
        self
    }

    pub fn validate(&self) -> SplineResult<()> {
        if !self.debug_arrow_scale.is_finite() || self.debug_arrow_scale <= 0.0 {
            return Err(SplineDataError::InvalidConfiguration {
                message: format!(
                    "debug_arrow_scale must be a positive finite number, got {}",
                    self.debug_arrow_scale
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SplineDataConfig::default().validate().is_ok());
    }

    #[test]
    fn test_builder_sets_flags() {
        let config = SplineDataConfig::new()
            .with_mark_dirty(false)
            .with_direct_mutation_notify(false)
            .with_migrate_on_load(false)
            .with_non_finite_warning(false);
        assert!(!config.mark_dirty);
        assert!(!config.notify_on_direct_mutation);
        assert!(!config.migrate_on_load);
        assert!(!config.warn_on_non_finite);
    }

    #[test]
    fn test_rejects_bad_arrow_scale() {
        for scale in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let result = SplineDataConfig::new().with_debug_arrow_scale(scale).validate();
            assert!(
                matches!(result, Err(SplineDataError::InvalidConfiguration { .. })),
                "scale {scale} should be rejected"
            );
        }
    }
}
