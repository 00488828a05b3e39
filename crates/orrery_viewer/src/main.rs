use bevy::core_pipeline::bloom::BloomSettings;
use bevy::pbr::NotShadowCaster;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use orrery::catalog::BodyKind;
use orrery::clock::presets;
use orrery::{Catalog, EngineConfig, Focus, SimulationClock, SolarSystem};

use crate::draw::DisplayPath;
use smooth_bevy_cameras::controllers::orbit::{
    OrbitCameraBundle, OrbitCameraController, OrbitCameraPlugin,
};
use smooth_bevy_cameras::LookTransformPlugin;

mod draw;
mod ui;
mod update;

/// Bodies are drawn this many times larger than their true size
const BODY_SCALE: f32 = 500.0;
const STAR_SCALE: f32 = 20.0;

/// Satellite orbits are spread out from their parent so they clear its
/// exaggerated radius
const SATELLITE_SPREAD: f64 = 40.0;

fn main() -> orrery::Result<()> {
    let system = SolarSystem::from_catalog(&Catalog::solar_system(), EngineConfig::default())?;

    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(LookTransformPlugin)
        .add_plugins(OrbitCameraPlugin::new(false))
        .add_plugins(EguiPlugin)
        .insert_resource(Simulation::new(system))
        .add_systems(Startup, setup)
        .add_systems(Update, ui::render)
        .add_systems(Update, update::keyboard)
        .add_systems(Update, update::simulation)
        .add_systems(Update, update::bodies.after(update::simulation))
        .add_systems(Update, update::camera_focus.after(update::bodies))
        .add_systems(Update, draw::orbits.after(update::simulation))
        .run();

    Ok(())
}

#[derive(Resource)]
struct Simulation {
    system: SolarSystem,
    clock: SimulationClock,
    focus: Focus,

    /// Decimated orbit paths in render space, relative to the parent
    paths: Vec<Option<DisplayPath>>,

    /// Logarithmic rate slider position
    rate_slider: f64,
    draw_orbits: bool,
}

impl Simulation {
    fn new(system: SolarSystem) -> Self {
        let paths = system
            .bodies()
            .iter()
            .map(|body| {
                let scale = body.parent().map_or(1.0, |_| SATELLITE_SPREAD as f32);

                body.path().map(|path| DisplayPath::new(path, scale))
            })
            .collect();

        Self {
            system,
            paths,
            clock: SimulationClock::new(),
            focus: Focus::overview(),
            rate_slider: presets::REALTIME,
            draw_orbits: true,
        }
    }

    /// Position of the body at `index` in render space
    fn scene_position(&self, index: usize) -> Vec3 {
        let bodies = self.system.bodies();
        let km_per_unit = self.system.config().path.km_per_unit;
        let body = &bodies[index];

        match body.parent() {
            Some(parent) => {
                self.scene_position(parent)
                    + (body.state().local / km_per_unit * SATELLITE_SPREAD).as_vec3()
            }
            None => (body.state().position / km_per_unit).as_vec3(),
        }
    }
}

#[derive(Component)]
struct CelestialBody {
    index: usize,
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    simulation: Res<Simulation>,
) {
    commands.insert_resource(ClearColor(Color::BLACK));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 0.01,
    });

    let sphere = meshes.add(Mesh::from(shape::UVSphere {
        radius: 1.0,
        sectors: 32,
        stacks: 16,
    }));

    commands.spawn(PointLightBundle {
        point_light: PointLight {
            intensity: 100000.0,
            range: 100000.0,
            shadows_enabled: true,
            ..default()
        },
        ..default()
    });

    let km_per_unit = simulation.system.config().path.km_per_unit;

    for (index, body) in simulation.system.bodies().iter().enumerate() {
        let descriptor = body.descriptor();
        let radius = (descriptor.radius / km_per_unit) as f32;

        let [r, g, b] = descriptor.orbit_color.rgb();
        let color = Color::rgb(r, g, b);

        let (material, scale) = match descriptor.kind {
            BodyKind::Star => (
                StandardMaterial {
                    emissive: Color::YELLOW * 100.0,
                    ..default()
                },
                radius * STAR_SCALE,
            ),
            _ => (
                StandardMaterial {
                    base_color: color,
                    emissive: color * 0.2,
                    perceptual_roughness: 1.0,
                    ..default()
                },
                radius * BODY_SCALE,
            ),
        };

        let mut entity = commands.spawn(PbrBundle {
            mesh: sphere.clone(),
            material: materials.add(material),
            transform: Transform::from_translation(simulation.scene_position(index))
                .with_scale(Vec3::ONE * scale),
            ..default()
        });

        entity
            .insert(CelestialBody { index })
            .insert(Name::new(descriptor.name.clone()));

        if descriptor.kind == BodyKind::Star {
            entity.insert(NotShadowCaster);
        }
    }

    commands
        .spawn(Camera3dBundle::default())
        .insert(BloomSettings::OLD_SCHOOL)
        .insert(OrbitCameraBundle::new(
            {
                let mut controller = OrbitCameraController::default();

                controller.mouse_rotate_sensitivity = Vec2::ONE * 1.0;
                controller.mouse_translate_sensitivity = Vec2::ONE * 10.0;

                controller
            },
            Vec3::new(-20.0, 50.0, 50.0),
            Vec3::new(0., 0., 0.),
            Vec3::Y,
        ));
}
