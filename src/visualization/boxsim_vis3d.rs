use bevy::math::primitives::{Cone, Cuboid, Sphere};
use bevy::prelude::*;

use std::collections::HashMap;

use crate::simulation::clock::MonotonicClock;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::Particle;

/// Component tagging each box with its particle id in Scenario.world
#[derive(Component)]
struct ParticleId(pub u64);

/// Component tagging each collector rig with its index into Scenario.world.collectors
#[derive(Component)]
struct CollectorIndex(pub usize);

/// Wall clock driving the simulation while the viewer runs
#[derive(Resource)]
struct SimClock(MonotonicClock);

/// Mesh handles shared across spawns, so a new particle costs one material
/// and no new mesh
#[derive(Resource)]
struct VisAssets {
    box_mesh: Handle<Mesh>,
}

/// Edge length of a particle box, world units
const BOX_EDGE: f32 = 2.0;

/// Side length of the ground slab, world units
const GROUND_EDGE: f32 = 1000.0;

/// Convenience entrypoint: hand over a built scenario and block in the viewer
pub fn run_3d(scenario: Scenario) {
    println!(
        "run_3d: starting Bevy viewer with {} collectors",
        scenario.world.collectors.len()
    );

    App::new()
        .insert_resource(scenario)
        .insert_resource(SimClock(MonotonicClock::start()))
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_3d)
        .add_systems(
            Update,
            (world_step_3d, sync_particles_3d, sync_collectors_3d).chain(),
        )
        .run();
}

/// Startup system: spawn camera, light, ground, and one rig per collector
fn setup_3d(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scenario: Res<Scenario>,
) {
    // Camera looking into the launch arc (boxes drift toward +x, -z)
    commands.spawn(Camera3dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::srgb(0.16, 0.32, 0.75)), // sky
            ..Default::default()
        },
        transform: Transform::from_xyz(-60.0, 70.0, 90.0)
            .looking_at(Vec3::new(10.0, 35.0, -25.0), Vec3::Y),
        ..Default::default()
    });

    // Basic point light
    commands.spawn(PointLightBundle {
        point_light: PointLight {
            intensity: 1500.0,
            range: 1000.0,
            ..Default::default()
        },
        transform: Transform::from_xyz(0.0, 150.0, 100.0),
        ..Default::default()
    });

    // =====================================================================
    // Ground slab, top face flush with y = 0
    spawn_ground(&mut commands, &mut meshes, &mut materials);
    // =====================================================================

    // Spawn one rig per collector
    for (i, c) in scenario.world.collectors.iter().enumerate() {
        spawn_collector_rig(
            &mut commands,
            &mut meshes,
            &mut materials,
            i,
            Vec3::new(c.pos.x as f32, c.pos.y as f32, c.pos.z as f32),
        );
    }

    // Particles share one mesh; their materials are created per spawn
    let box_mesh = meshes.add(Cuboid::new(BOX_EDGE, BOX_EDGE, BOX_EDGE).mesh());
    commands.insert_resource(VisAssets { box_mesh });
}

/// Per-frame world step, on wall-clock time
fn world_step_3d(mut scenario: ResMut<Scenario>, clock: Res<SimClock>) {
    let now = clock.0.now_seconds();
    scenario.step(now);
}

/// Mirror the live particle set into box entities: update survivors,
/// despawn collected/evicted boxes, spawn newcomers.
fn sync_particles_3d(
    mut commands: Commands,
    scenario: Res<Scenario>,
    assets: Res<VisAssets>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut query: Query<(Entity, &ParticleId, &mut Transform)>,
) {
    let mut live: HashMap<u64, &Particle> =
        scenario.world.particles.iter().map(|p| (p.id, p)).collect();

    for (entity, ParticleId(id), mut transform) in &mut query {
        match live.remove(id) {
            Some(p) => {
                transform.translation =
                    Vec3::new(p.pos.x as f32, p.pos.y as f32, p.pos.z as f32);
                transform.rotation = Quat::from_euler(
                    EulerRot::XYZ,
                    p.rot.x as f32,
                    p.rot.y as f32,
                    p.rot.z as f32,
                );
            }
            // Gone from the world: collected or evicted
            None => commands.entity(entity).despawn(),
        }
    }

    // Whatever survived the drain is new since last frame
    for (id, p) in live {
        commands.spawn((
            PbrBundle {
                mesh: assets.box_mesh.clone(),
                material: materials.add(StandardMaterial {
                    base_color: Color::srgb(p.color[0], p.color[1], p.color[2]),
                    unlit: true,
                    ..Default::default()
                }),
                transform: Transform::from_xyz(
                    p.pos.x as f32,
                    p.pos.y as f32,
                    p.pos.z as f32,
                ),
                ..Default::default()
            },
            ParticleId(id),
        ));
    }
}

/// Slide each collector rig to its agent's ground position
fn sync_collectors_3d(
    scenario: Res<Scenario>,
    mut query: Query<(&CollectorIndex, &mut Transform)>,
) {
    for (CollectorIndex(i), mut transform) in &mut query {
        if let Some(c) = scenario.world.collectors.get(*i) {
            transform.translation = Vec3::new(c.pos.x as f32, c.pos.y as f32, c.pos.z as f32);
        }
    }
}

// =========================================================================================
// Static scenery
// =========================================================================================

fn spawn_ground(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let thickness = 1.0;

    commands.spawn(PbrBundle {
        mesh: meshes.add(Cuboid::new(GROUND_EDGE, thickness, GROUND_EDGE).mesh()),
        material: materials.add(StandardMaterial {
            base_color: Color::srgb(0.2, 0.55, 0.25), // grass
            unlit: true,
            ..Default::default()
        }),
        // Cuboid is centered at its transform origin, so sink it by half
        transform: Transform::from_xyz(0.0, -0.5 * thickness, 0.0),
        ..Default::default()
    });
}

/// A collector is a cone body with an ellipsoid head, grouped under one
/// parent so the whole rig moves with a single transform write
fn spawn_collector_rig(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    index: usize,
    pos: Vec3,
) {
    let body_radius = 1.5;
    let body_height = 3.0;

    commands
        .spawn((
            SpatialBundle::from_transform(Transform::from_translation(pos)),
            CollectorIndex(index),
        ))
        .with_children(|rig| {
            // Cone body, base flush with the ground
            rig.spawn(PbrBundle {
                mesh: meshes.add(
                    Cone {
                        radius: body_radius,
                        height: body_height,
                    }
                    .mesh(),
                ),
                material: materials.add(StandardMaterial {
                    base_color: Color::srgb(0.8, 0.25, 0.2),
                    unlit: true,
                    ..Default::default()
                }),
                transform: Transform::from_xyz(0.0, 0.5 * body_height, 0.0),
                ..Default::default()
            });

            // Ellipsoid head: a scaled sphere sitting on the cone tip
            rig.spawn(PbrBundle {
                mesh: meshes.add(Sphere::new(0.6).mesh()),
                material: materials.add(StandardMaterial {
                    base_color: Color::srgb(0.95, 0.85, 0.65),
                    unlit: true,
                    ..Default::default()
                }),
                transform: Transform::from_xyz(0.0, body_height + 0.5, 0.0)
                    .with_scale(Vec3::new(1.0, 1.3, 1.0)),
                ..Default::default()
            });
        });
}
