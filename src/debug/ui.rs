// ./src/debug/ui.rs
use bevy::prelude::*;
use bevy_egui::{
    EguiContexts,
    egui::{self, Slider, Window},
};
use ocean_spline::prelude::*;
use ocean_spline::spline::DEFAULT_FLOW_VELOCITY;

const FLOW_RANGE: std::ops::RangeInclusive<f32> = -10.0..=10.0;

pub fn flow_inspector_ui_system(
    mut contexts: EguiContexts,
    mut config: ResMut<SplineDataConfig>,
    splines: Query<Entity, With<Spline>>,
    mut points: Query<(&SplineControlPoint, &Parent, &mut SplinePointDataFlow)>,
    mut events: EventWriter<SplineChangedEvent>,
) {
    Window::new("Spline Flow")
        .default_width(320.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.collapsing("Kontrollpunkte", |ui| {
                let mut rows: Vec<_> = points.iter_mut().collect();
                rows.sort_by_key(|(control_point, parent, _)| (parent.get(), control_point.index));

                if rows.is_empty() {
                    ui.label("Keine Kontrollpunkte vorhanden.");
                }

                for (control_point, parent, mut flow) in rows {
                    // Nur über den Setter schreiben, damit der Spline benachrichtigt wird
                    let mut value = flow.flow_velocity();
                    let mut requested = None;
                    ui.horizontal(|ui| {
                        if ui
                            .add(
                                Slider::new(&mut value, FLOW_RANGE)
                                    .text(format!("Punkt {}", control_point.index)),
                            )
                            .changed()
                        {
                            requested = Some(value);
                        }
                        if ui.button("⇄").on_hover_text("Richtung umkehren").clicked() {
                            requested = Some(-flow.flow_velocity());
                        }
                        if ui.button("↺").on_hover_text("Standardwert").clicked() {
                            requested = Some(DEFAULT_FLOW_VELOCITY);
                        }
                    });
                    if let Some(new_value) = requested {
                        let mut sender = SplineChangeSender::new(&mut events, parent.get());
                        flow.set_flow_velocity(new_value, &mut sender);
                    }
                    ui.label(format!("get_data() = {:?}", flow.get_data()));
                }
            });

            ui.collapsing("Einstellungen", |ui| {
                ui.checkbox(
                    &mut config.notify_on_direct_mutation,
                    "Direkte Zuweisungen melden",
                );
                ui.checkbox(&mut config.mark_dirty, "Splines als dirty markieren");
                ui.checkbox(&mut config.warn_on_non_finite, "Warnung bei NaN/∞");

                let mut scale = config.debug_arrow_scale;
                if ui
                    .add(
                        Slider::new(&mut scale, 0.01..=2.0)
                            .logarithmic(true)
                            .text("Pfeilskala"),
                    )
                    .changed()
                {
                    config.debug_arrow_scale = scale;
                    // Pfeile aller Splines neu aufbauen lassen
                    for spline in splines.iter() {
                        events.send(SplineChangedEvent { spline });
                    }
                }
            });

            ui.collapsing("Kamerasteuerung Info", |ui| {
                ui.label("Rechte Maustaste + Ziehen: Orbit");
                ui.label("Mittlere Maustaste + Ziehen: Pan");
                ui.label("Mausrad: Zoom");
                ui.separator();
                ui.label(egui::RichText::new("Blau: Fluss in Spline-Richtung, Orange: umgekehrt").small());
            });
        });
}
