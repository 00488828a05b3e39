use bevy::prelude::*;
use bevy_egui::egui::{self, Slider};
use bevy_egui::EguiContexts;
use orrery::clock::presets;

use super::Simulation;

pub fn render(mut egui_context: EguiContexts, mut simulation: ResMut<Simulation>) {
    let ctx = egui_context.ctx_mut();
    let simulation = simulation.as_mut();

    egui::TopBottomPanel::bottom("Bottom").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let days = simulation.clock.accumulated_days();
            let (y, d) = ((days / 365.25).floor(), days % 365.25);

            ui.label(format!("Elapsed: {y:.0}Y {d:.1}D"));

            if simulation.clock.is_paused() {
                ui.label("Paused");
            }
        });
    });

    egui::Window::new("Simulation").show(ctx, |ui| {
        ui.heading("Time");

        let slider = Slider::new(&mut simulation.rate_slider, presets::SLOWEST..=presets::FASTEST)
            .show_value(false)
            .text("Rate");

        if ui.add(slider).changed() {
            if let Err(err) = simulation.clock.set_rate_from_slider(simulation.rate_slider) {
                warn!(%err, "Rejected rate");
            }
        }

        ui.label(simulation.clock.rate_label());

        ui.horizontal(|ui| {
            let label = if simulation.clock.is_paused() {
                "Resume"
            } else {
                "Pause"
            };

            if ui.button(label).clicked() {
                simulation.clock.toggle_pause();
            }

            if ui.button("Real-time").clicked() {
                simulation.rate_slider = presets::REALTIME;
                if let Err(err) = simulation.clock.set_rate_from_slider(presets::REALTIME) {
                    warn!(%err, "Rejected rate");
                }
            }
        });

        ui.separator();
        ui.heading("Focus");

        let len = simulation.system.len();

        ui.horizontal(|ui| {
            if ui.button("<").clicked() {
                simulation.focus.previous(len);
            }

            if ui.button("Overview").clicked() {
                simulation.focus.clear();
            }

            if ui.button(">").clicked() {
                simulation.focus.next(len);
            }
        });

        let focused = simulation
            .focus
            .index()
            .and_then(|index| simulation.system.bodies().get(index))
            .map_or("Solar system", |body| body.name());
        ui.label(focused);

        ui.separator();
        ui.checkbox(&mut simulation.draw_orbits, "Draw orbits");
    });
}
