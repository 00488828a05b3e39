use bevy::prelude::*;
use smooth_bevy_cameras::LookTransform;

use super::{CelestialBody, Simulation};

pub fn simulation(time: Res<Time>, mut simulation: ResMut<Simulation>) {
    let Simulation { system, clock, .. } = simulation.as_mut();

    let report = system.update(clock, time.delta_seconds_f64());

    for failure in &report.failures {
        debug!(body = %failure.body, "Body skipped this frame");
    }
}

pub fn bodies(simulation: Res<Simulation>, mut bodies: Query<(&CelestialBody, &mut Transform)>) {
    for (body, mut transform) in bodies.iter_mut() {
        let spin = simulation.system.bodies()[body.index].spin();

        transform.translation = simulation.scene_position(body.index);
        transform.rotation = spin.orientation.as_f32();
    }
}

pub fn keyboard(keys: Res<Input<KeyCode>>, mut simulation: ResMut<Simulation>) {
    let len = simulation.system.len();

    if keys.just_pressed(KeyCode::Right) {
        simulation.focus.next(len);
    }

    if keys.just_pressed(KeyCode::Left) {
        simulation.focus.previous(len);
    }

    if keys.just_pressed(KeyCode::Escape) {
        simulation.focus.clear();
    }

    if keys.just_pressed(KeyCode::Space) {
        simulation.clock.toggle_pause();
    }
}

/// Keeps the camera's offset from its target while the target moves
pub fn camera_focus(mut look_transform: Query<&mut LookTransform>, simulation: Res<Simulation>) {
    let Ok(mut look) = look_transform.get_single_mut() else {
        return;
    };

    let target = match simulation.focus.index() {
        Some(index) if index < simulation.system.len() => simulation.scene_position(index),
        _ => Vec3::ZERO,
    };

    let offset = look.eye - look.target;
    look.target = target;
    look.eye = target + offset;
}
