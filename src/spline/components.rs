// src/spline/components.rs
use bevy::prelude::*;

// Marker component: Besitzer der Kontrollpunkte (Kinder über `Parent`)
#[derive(Component, Reflect, Debug, Default, Clone, Copy)]
#[reflect(Component, Default)]
pub struct Spline;

/// Ein vom Benutzer platzierter Ankerpunkt des Splines.
#[derive(Component, Reflect, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct SplineControlPoint {
    /// Position des Punktes entlang des Splines (0 = Anfang).
    pub index: usize,
}

// Abgeleitete Geometrie/Sampling-Daten des Splines sind veraltet
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct SplineDirty;
