//! Provides a Bevy `Plugin` that wires spline point data into the ECS.
//!
//! The plugin registers the point data types for reflection, the
//! `SplineChangedEvent`, the `SplineDataConfig` resource, and the systems that
//! migrate loaded data and mark owning splines dirty when their points change.
//! Adding or removing control points (via the `Children` hierarchy) counts as
//! a change too. Points despawned without updating their parent's `Children`
//! (plain `despawn` instead of `despawn_recursive`) are not detected.

use bevy::prelude::*;

use super::components::{Spline, SplineControlPoint, SplineDirty};
use super::config::SplineDataConfig;
use super::events::SplineChangedEvent;
use super::migration::{FLOW_DATA_VERSION, MigrationOutcome, migrate_flow_point};
use super::point_data::SplinePointDataFlow;

/// System set containing all systems of the [`SplineDataPlugin`].
///
/// Consumers that recompute spline geometry should run after this set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SplineDataSet;

#[derive(Default)]
pub struct SplineDataPlugin {
    pub config: SplineDataConfig,
}

impl SplineDataPlugin {
    pub fn with_config(config: SplineDataConfig) -> Self {
        Self { config }
    }
}

impl Plugin for SplineDataPlugin {
    fn build(&self, app: &mut App) {
        let config = match self.config.validate() {
            Ok(()) => self.config.clone(),
            Err(err) => {
                error!("Spline data configuration rejected, using defaults: {err}");
                SplineDataConfig::default()
            }
        };

        app.insert_resource(config)
            .register_type::<Spline>()
            .register_type::<SplineControlPoint>()
            .register_type::<SplinePointDataFlow>()
            .add_event::<SplineChangedEvent>()
            .add_systems(
                Update,
                (
                    migrate_flow_points_system
                        .run_if(|config: Res<SplineDataConfig>| config.migrate_on_load),
                    propagate_flow_changes_system,
                    propagate_hierarchy_changes_system,
                    mark_splines_dirty_system
                        .run_if(|config: Res<SplineDataConfig>| config.mark_dirty),
                )
                    .chain()
                    .in_set(SplineDataSet),
            );
    }
}

/// Bringt neu hinzugefügte Flow-Daten auf die aktuelle Schema-Version.
/// Fehlschläge werden geloggt, die Daten bleiben dann unverändert.
pub fn migrate_flow_points_system(
    mut query: Query<(Entity, &mut SplinePointDataFlow), Added<SplinePointDataFlow>>,
) {
    for (entity, mut data) in query.iter_mut() {
        // Nur lesend prüfen, damit Change Detection nicht unnötig auslöst
        if data.version() == FLOW_DATA_VERSION {
            continue;
        }
        match migrate_flow_point(&mut data) {
            Ok(MigrationOutcome::Migrated { from, to }) => {
                info!("Migrated flow data of {entity:?} from version {from} to {to}");
            }
            Ok(MigrationOutcome::UpToDate) => {}
            Err(err) => {
                warn!("Flow data of {entity:?} kept as loaded: {err}");
            }
        }
    }
}

pub fn propagate_flow_changes_system(
    config: Res<SplineDataConfig>,
    query: Query<(Entity, &SplinePointDataFlow, Option<&Parent>), Changed<SplinePointDataFlow>>,
    mut events: EventWriter<SplineChangedEvent>,
) {
    for (entity, data, parent) in query.iter() {
        if config.warn_on_non_finite && !data.flow_velocity().is_finite() {
            warn!(
                "Control point {entity:?} has non-finite flow velocity {}",
                data.flow_velocity()
            );
        }
        if !config.notify_on_direct_mutation {
            continue;
        }
        match parent {
            Some(parent) => {
                events.send(SplineChangedEvent {
                    spline: parent.get(),
                });
            }
            None => debug!("Flow data on {entity:?} has no owning spline"),
        }
    }
}

/// Meldet Splines, deren Kontrollpunkte hinzugefügt oder entfernt wurden.
/// Wird der letzte Punkt entfernt, verschwindet `Children` komplett.
pub fn propagate_hierarchy_changes_system(
    changed: Query<Entity, (With<Spline>, Changed<Children>)>,
    mut removed: RemovedComponents<Children>,
    splines: Query<(), With<Spline>>,
    mut events: EventWriter<SplineChangedEvent>,
) {
    for spline in changed.iter() {
        events.send(SplineChangedEvent { spline });
    }
    for spline in removed.read() {
        if splines.contains(spline) {
            events.send(SplineChangedEvent { spline });
        }
    }
}

pub fn mark_splines_dirty_system(
    mut commands: Commands,
    mut events: EventReader<SplineChangedEvent>,
    splines: Query<(), With<Spline>>,
) {
    for event in events.read() {
        if splines.contains(event.spline) {
            commands.entity(event.spline).insert(SplineDirty);
        } else {
            debug!("Ignoring change for {:?}: not a spline", event.spline);
        }
    }
}

/// Entfernt `SplineDirty` von allen Splines. Für Konsumenten, die ihre
/// abgeleiteten Daten neu berechnet haben.
pub fn clear_dirty_splines_system(mut commands: Commands, query: Query<Entity, With<SplineDirty>>) {
    for entity in query.iter() {
        commands.entity(entity).remove::<SplineDirty>();
    }
}
