// ./src/main.rs
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use bevy_panorbit_camera::PanOrbitCameraPlugin;
use ocean_spline::prelude::*;
use ocean_spline::spline::clear_dirty_splines_system;

// Demo-Host: Debug-UI und Visualisierung
pub mod debug;
pub mod setup;

use debug::{
    ui::flow_inspector_ui_system,
    visualization::flow_arrow::{draw_flow_arrows_system, rebuild_flow_arrows_system},
};
use setup::setup_scene;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(EguiPlugin)
        .add_plugins(PanOrbitCameraPlugin)
        .add_plugins(SplineDataPlugin::with_config(
            SplineDataConfig::new().with_debug_arrow_scale(0.5),
        ))
        .add_systems(Startup, setup_scene)
        .add_systems(Update, flow_inspector_ui_system.before(SplineDataSet))
        .add_systems(
            Update,
            (
                // Konsument: Pfeile neu berechnen, danach ist der Spline wieder aktuell
                rebuild_flow_arrows_system,
                clear_dirty_splines_system,
            )
                .chain()
                .after(SplineDataSet),
        )
        .add_systems(Update, draw_flow_arrows_system)
        .run();
}
