// ./src/setup.rs
use crate::debug::visualization::flow_arrow::FlowArrowVisual;
use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;
use ocean_spline::prelude::*;

const WATER_SIZE: f32 = 20.0;

// Lokale Position und Flow-Geschwindigkeit der Kontrollpunkte des Demo-Flusses
const RIVER_POINTS: [(Vec3, Option<f32>); 6] = [
    (Vec3::new(-6.0, 0.1, -3.0), None),
    (Vec3::new(-3.5, 0.1, -1.0), None),
    (Vec3::new(-1.0, 0.1, -0.5), Some(3.0)),
    (Vec3::new(1.5, 0.1, 0.5), Some(0.0)),
    (Vec3::new(4.0, 0.1, 2.0), Some(-3.5)),
    (Vec3::new(6.0, 0.1, 4.5), None),
];

pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Wasserfläche als Platzhalter für den Ozean
    commands.spawn(PbrBundle {
        mesh: meshes.add(Plane3d::default().mesh().size(WATER_SIZE, WATER_SIZE).build()),
        material: materials.add(StandardMaterial {
            base_color: Color::rgb(0.1, 0.3, 0.5),
            metallic: 0.1,
            perceptual_roughness: 0.3,
            ..default()
        }),
        ..default()
    });

    // Licht
    commands.spawn(PointLightBundle {
        point_light: PointLight {
            shadows_enabled: true,
            intensity: 10_000_000.,
            range: 100.0,
            ..default()
        },
        transform: Transform::from_xyz(4.0, 8.0, 4.0),
        ..default()
    });

    // Kamera
    commands.spawn((
        Camera3dBundle {
            transform: Transform::from_xyz(0.0, 12.0, 14.0).looking_at(Vec3::ZERO, Vec3::Y),
            ..default()
        },
        PanOrbitCamera {
            button_orbit: MouseButton::Right,
            button_pan: MouseButton::Middle,
            radius: Some(18.0),
            ..default()
        },
    ));

    let spline = commands
        .spawn((
            Spline,
            Name::new("River"),
            SpatialBundle::default(),
            FlowArrowVisual::default(),
        ))
        .with_children(|parent| {
            for (index, (position, flow_velocity)) in RIVER_POINTS.into_iter().enumerate() {
                let flow = flow_velocity.map_or_else(SplinePointDataFlow::default, SplinePointDataFlow::new);
                parent.spawn((
                    Name::new(format!("Kontrollpunkt {index}")),
                    SplineControlPoint { index },
                    flow,
                    TransformBundle::from_transform(Transform::from_translation(position)),
                ));
            }
        })
        .id();
    info!("Spawned demo spline {spline:?} with {} control points", RIVER_POINTS.len());
}
