// src/spline/migration.rs
//! Schema migration for persisted spline point data.
//!
//! The `version` tag on point data is consulted only here. Each entry of
//! [`FLOW_MIGRATIONS`] upgrades data from version `i` to `i + 1`.

use crate::error::{SplineDataError, SplineResult};
use crate::spline::point_data::SplinePointDataFlow;

/// Aktuelle Schema-Version von `SplinePointDataFlow`.
pub const FLOW_DATA_VERSION: u32 = 0;

type FlowMigrationStep = fn(&mut SplinePointDataFlow);

// Index = Ausgangsversion. Noch keine Schritte, da es nur Version 0 gibt.
const FLOW_MIGRATIONS: &[FlowMigrationStep] = &[];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationOutcome {
    UpToDate,
    Migrated { from: u32, to: u32 },
}

pub fn migrate_flow_point(data: &mut SplinePointDataFlow) -> SplineResult<MigrationOutcome> {
    migrate_with_steps(data, FLOW_DATA_VERSION, FLOW_MIGRATIONS)
}

fn migrate_with_steps(
    data: &mut SplinePointDataFlow,
    current: u32,
    steps: &[FlowMigrationStep],
) -> SplineResult<MigrationOutcome> {
    let found = data.version();
    if found == current {
        return Ok(MigrationOutcome::UpToDate);
    }
    if found > current {
        return Err(SplineDataError::UnsupportedVersion {
            found,
            supported: current,
        });
    }

    // Erst prüfen, dann anwenden: bei fehlendem Schritt bleiben die Daten unverändert
    let pending: Vec<FlowMigrationStep> = (found..current)
        .map(|version| {
            steps
                .get(version as usize)
                .copied()
                .ok_or(SplineDataError::MissingMigrationStep { version })
        })
        .collect::<SplineResult<_>>()?;

    for step in pending {
        step(data);
    }
    data.set_version(current);
    Ok(MigrationOutcome::Migrated { from: found, to: current })
}
