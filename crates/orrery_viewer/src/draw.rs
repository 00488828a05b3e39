use bevy::prelude::*;
use orrery::OrbitPath;

use crate::Simulation;

/// Gizmo line strips are rebuilt every frame, so paths are thinned to this
const MAX_DISPLAY_POINTS: usize = 4096;

/// Orbit path prepared once for drawing
pub struct DisplayPath {
    pub points: Vec<Vec3>,
    pub color: Color,
}

impl DisplayPath {
    pub fn new(path: &OrbitPath, scale: f32) -> Self {
        let [r, g, b] = path.color.rgb();

        Self {
            points: decimate(&path.points, MAX_DISPLAY_POINTS)
                .into_iter()
                .map(|p| p * scale)
                .collect(),
            color: Color::rgb(r, g, b),
        }
    }
}

/// Keeps at most about `max_points` evenly strided points, always including
/// the last one so closed paths stay closed.
fn decimate(points: &[orrery::Vec3], max_points: usize) -> Vec<Vec3> {
    let max_points = max_points.max(1);
    let step = ((points.len() + max_points - 1) / max_points).max(1);

    let mut out: Vec<Vec3> = points.iter().step_by(step).map(|p| p.as_vec3()).collect();

    if let Some(last) = points.last() {
        if (points.len() - 1) % step != 0 {
            out.push(last.as_vec3());
        }
    }

    out
}

pub fn orbits(mut lines: Gizmos, simulation: Res<Simulation>) {
    if !simulation.draw_orbits {
        return;
    }

    for (body, path) in simulation.system.bodies().iter().zip(&simulation.paths) {
        let Some(path) = path else {
            continue;
        };

        let offset = match body.parent() {
            Some(parent) => simulation.scene_position(parent),
            None => Vec3::ZERO,
        };

        lines.linestrip(path.points.iter().map(|p| offset + *p), path.color);
    }
}

#[cfg(test)]
mod tests {
    use orrery::vec3;

    use super::*;

    fn line(len: usize) -> Vec<orrery::Vec3> {
        (0..len).map(|i| vec3(i as f64, 0.0, 0.0)).collect()
    }

    #[test]
    fn short_paths_are_kept() {
        assert_eq!(decimate(&line(10), 4096).len(), 10);
    }

    #[test]
    fn long_paths_are_thinned_and_keep_both_ends() {
        let points = decimate(&line(1_000_001), 4096);

        assert!(points.len() <= 4097);
        assert_eq!(points[0], Vec3::ZERO);
        assert_eq!(*points.last().unwrap(), Vec3::new(1_000_000.0, 0.0, 0.0));
    }
}
