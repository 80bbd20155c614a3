use bevy::prelude::*;
use ocean_spline::prelude::*;

const FORWARD_COLOR: Color = Color::rgb(0.2, 0.6, 1.0);
const REVERSED_COLOR: Color = Color::ORANGE;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowArrow {
    pub origin: Vec3,
    pub tip: Vec3,
    /// Fließt entgegen der Spline-Richtung.
    pub reversed: bool,
}

/// Komponente auf dem Spline: vorberechnete Flow-Pfeile in lokalen Spline-Koordinaten.
#[derive(Component, Debug, Default, Clone)]
pub struct FlowArrowVisual {
    /// Ein Pfeil je Kontrollpunkt, sortiert nach Index.
    pub arrows: Vec<FlowArrow>,
}

/// Berechnet einen Pfeil pro Punkt entlang der Spline-Tangente.
///
/// Die Tangente ist die Differenz der Nachbarpunkte (an den Enden der einseitige
/// Nachbar). Die Pfeillänge ist `flow_velocity * scale`, negative Werte zeigen
/// entgegen der Spline-Richtung.
pub fn compute_flow_arrows(points: &[(Vec3, Vec2)], scale: f32) -> Vec<FlowArrow> {
    let n = points.len();
    (0..n)
        .map(|i| {
            let (origin, data) = points[i];
            let prev = points[i.saturating_sub(1)].0;
            let next = points[(i + 1).min(n - 1)].0;
            let tangent = (next - prev).normalize_or_zero();
            // Kanal 0 ist die Geschwindigkeit, Kanal 1 ist für Flow reserviert
            FlowArrow {
                origin,
                tip: origin + tangent * data.x * scale,
                reversed: data.x < 0.0,
            }
        })
        .collect()
}

/// Baut die Pfeile aller als `SplineDirty` markierten Splines neu auf.
pub fn rebuild_flow_arrows_system(
    config: Res<SplineDataConfig>,
    mut splines: Query<
        (Entity, Option<&Children>, &mut FlowArrowVisual),
        (With<Spline>, With<SplineDirty>),
    >,
    points: Query<(&SplineControlPoint, &Transform, &SplinePointDataFlow)>,
) {
    for (entity, children, mut visual) in splines.iter_mut() {
        // Ohne `Children` (letzter Punkt entfernt) bleiben keine Pfeile übrig
        let children = children.into_iter().flat_map(|children| children.iter());
        let mut ordered: Vec<_> = points.iter_many(children).collect();
        ordered.sort_by_key(|(control_point, _, _)| control_point.index);

        let data = gather_point_data(
            ordered
                .iter()
                .map(|&(_, _, flow)| flow as &dyn SplinePointData),
        );
        let samples: Vec<(Vec3, Vec2)> = ordered
            .iter()
            .zip(data)
            .map(|((_, transform, _), point_data)| (transform.translation, point_data))
            .collect();
        visual.arrows = compute_flow_arrows(&samples, config.debug_arrow_scale);
        debug!("Rebuilt {} flow arrows for {entity:?}", visual.arrows.len());
    }
}

/// System, das alle `FlowArrowVisual`-Komponenten als Gizmos zeichnet.
pub fn draw_flow_arrows_system(
    query: Query<(&FlowArrowVisual, &GlobalTransform)>,
    mut gizmos: Gizmos,
) {
    for (visual, spline_transform) in query.iter() {
        for arrow in &visual.arrows {
            let start = spline_transform.transform_point(arrow.origin);
            let end = spline_transform.transform_point(arrow.tip);
            gizmos.sphere(start, Quat::IDENTITY, 0.05, Color::WHITE);
            if start.distance_squared(end) <= f32::EPSILON {
                continue;
            }
            let color = if arrow.reversed {
                REVERSED_COLOR
            } else {
                FORWARD_COLOR
            };
            gizmos.arrow(start, end, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ocean_spline::spline::clear_dirty_splines_system;

    fn consumer_app() -> App {
        let mut app = App::new();
        app.add_plugins(SplineDataPlugin::with_config(
            SplineDataConfig::new().with_debug_arrow_scale(1.0),
        ))
        .add_systems(
            Update,
            (rebuild_flow_arrows_system, clear_dirty_splines_system)
                .chain()
                .after(SplineDataSet),
        );
        app
    }

    fn spawn_river(app: &mut App) -> (Entity, Vec<Entity>) {
        let mut points = Vec::new();
        let spline = app
            .world
            .spawn((Spline, FlowArrowVisual::default()))
            .with_children(|parent| {
                // Absichtlich in umgekehrter Index-Reihenfolge
                for index in (0..3).rev() {
                    let point = parent
                        .spawn((
                            SplineControlPoint { index },
                            SplinePointDataFlow::default(),
                            Transform::from_xyz(index as f32, 0.0, 0.0),
                        ))
                        .id();
                    points.push(point);
                }
            })
            .id();
        (spline, points)
    }

    #[test]
    fn test_dirty_spline_gets_arrows_and_is_cleared() {
        let mut app = consumer_app();
        let (spline, _) = spawn_river(&mut app);

        app.update();
        app.update();

        let visual = app.world.get::<FlowArrowVisual>(spline).unwrap();
        assert_eq!(visual.arrows.len(), 3);
        for (index, arrow) in visual.arrows.iter().enumerate() {
            assert_relative_eq!(arrow.origin.x, index as f32);
            assert_relative_eq!(arrow.tip.x - arrow.origin.x, 2.0);
            assert!(!arrow.reversed);
        }
        assert!(app.world.get::<SplineDirty>(spline).is_none());
    }

    #[test]
    fn test_flow_change_rebuilds_arrows() {
        let mut app = consumer_app();
        let (spline, points) = spawn_river(&mut app);
        app.update();
        app.update();

        // points[0] ist der Kontrollpunkt mit Index 2
        app.world
            .get_mut::<SplinePointDataFlow>(points[0])
            .unwrap()
            .set_flow_velocity(-3.5, &mut || {});
        app.update();
        app.update();

        let visual = app.world.get::<FlowArrowVisual>(spline).unwrap();
        let last = visual.arrows[2];
        assert!(last.reversed);
        assert_relative_eq!(last.tip.x - last.origin.x, -3.5);
        assert!(app.world.get::<SplineDirty>(spline).is_none());
    }

    #[test]
    fn test_arrow_follows_tangent() {
        let points = [
            (Vec3::new(0.0, 0.0, 0.0), Vec2::new(2.0, 0.0)),
            (Vec3::new(1.0, 0.0, 0.0), Vec2::new(2.0, 0.0)),
            (Vec3::new(2.0, 0.0, 0.0), Vec2::new(2.0, 0.0)),
        ];
        let arrows = compute_flow_arrows(&points, 0.5);
        assert_eq!(arrows.len(), 3);
        for arrow in arrows {
            assert_relative_eq!(arrow.tip.x - arrow.origin.x, 1.0);
            assert_relative_eq!(arrow.tip.z, 0.0);
            assert!(!arrow.reversed);
        }
    }

    #[test]
    fn test_negative_flow_reverses_arrow() {
        let points = [
            (Vec3::ZERO, Vec2::new(-3.5, 0.0)),
            (Vec3::new(0.0, 0.0, 2.0), Vec2::new(-3.5, 0.0)),
        ];
        let arrows = compute_flow_arrows(&points, 1.0);
        let arrow = arrows[0];
        assert_relative_eq!(arrow.tip.z - arrow.origin.z, -3.5);
        assert!(arrow.reversed);
    }

    #[test]
    fn test_single_point_has_zero_length_arrow() {
        let arrows = compute_flow_arrows(&[(Vec3::ONE, Vec2::new(2.0, 0.0))], 1.0);
        assert_eq!(
            arrows,
            vec![FlowArrow {
                origin: Vec3::ONE,
                tip: Vec3::ONE,
                reversed: false,
            }]
        );
    }

    #[test]
    fn test_no_points() {
        assert!(compute_flow_arrows(&[], 1.0).is_empty());
    }
}
