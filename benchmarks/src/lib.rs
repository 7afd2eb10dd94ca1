//! Scene builders shared by the benchmarks.

use capsule2d::ecs::components::{
    Agent, AgentInput, Bounds, BoxCollider, LevelGeometry, RigidBody, Velocity,
};
use capsule2d::editor::{editor_coefficients, EDITOR_BASE_RADIUS};
use capsule2d::physics::{
    Body, BodyRole, BodyState, BufferCoefficients, CapsulePolygon, Circle, PhysicsConfig,
    PhysicsWorld,
};
use glam::Vec2;

/// Zig-zag open polyline with `n` vertices spanning `width`.
pub fn zigzag(n: usize, width: f32, amplitude: f32, y: f32) -> CapsulePolygon {
    let step = width / (n.max(2) - 1) as f32;
    let verts = (0..n.max(2))
        .map(|i| {
            let dy = if i % 2 == 0 { 0.0 } else { amplitude };
            Vec2::new(i as f32 * step, y + dy)
        })
        .collect();
    CapsulePolygon::open(verts, EDITOR_BASE_RADIUS, editor_coefficients())
}

/// Closed square box polygon of side `size` at `position` (top-left).
pub fn box_polygon(position: Vec2, size: f32) -> CapsulePolygon {
    let collider = BoxCollider::for_box(
        Vec2::splat(size),
        size * 0.12,
        BufferCoefficients::default(),
    );
    let verts = collider.local_verts.iter().map(|v| *v + position).collect();
    CapsulePolygon::closed(verts, collider.corner_radius, collider.coeffs)
}

/// Resolver input: an agent circle plus `n` overlapping boxes resting on a floor.
pub fn setup_bodies(n: usize) -> (Vec<Body>, Vec<BodyState>) {
    let mut bodies = Vec::with_capacity(n + 2);
    let mut states = Vec::with_capacity(n + 1);

    states.push(BodyState::new(Vec2::new(0.0, 500.0), Vec2::new(3.0, 1.0)));
    bodies.push(Body::circle(
        0,
        BodyRole::Agent,
        Circle::new(Vec2::new(25.0, 525.0), 25.0),
        0.5,
        0.2,
    ));

    for i in 0..n {
        let owner = states.len();
        let position = Vec2::new(30.0 + i as f32 * 55.0, 520.0);
        let size = 60.0;
        states.push(BodyState::new(position, Vec2::new(0.0, 2.0)));
        let inner = Circle::new(position + Vec2::splat(size * 0.5), size * 0.35);
        bodies.push(Body::polygon(
            owner,
            BodyRole::Entity,
            box_polygon(position, size),
            Some(inner),
            5.0,
            0.0,
        ));
    }

    bodies.push(Body::fixed_polygon(
        zigzag(2, 60.0 * n as f32 + 200.0, 0.0, 600.0),
        0.0,
    ));
    (bodies, states)
}

/// hecs scene with an agent, `n` boxes and a floor.
pub fn setup_scene(n: usize) -> (hecs::World, PhysicsWorld) {
    let mut world = hecs::World::new();
    world.spawn((
        Agent::default(),
        AgentInput {
            move_x: 1.0,
            ..Default::default()
        },
        Bounds::new(Vec2::new(0.0, 300.0), Vec2::splat(256.0)),
        Velocity::default(),
    ));

    for i in 0..n {
        let column = (i % 20) as f32;
        let row = (i / 20) as f32;
        let position = Vec2::new(300.0 + column * 70.0, 500.0 - row * 70.0);
        let size = Vec2::splat(64.0);
        let mut collider = BoxCollider::for_box(size, 7.68, editor_coefficients());
        collider.sync(position);
        world.spawn((
            Bounds::new(position, size),
            Velocity::default(),
            RigidBody::new_dynamic(5.0),
            collider,
        ));
    }

    world.spawn((LevelGeometry(zigzag(2, 4000.0, 0.0, 620.0)),));
    (world, PhysicsWorld::new(PhysicsConfig::default()))
}
