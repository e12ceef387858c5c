use flock::geometry;
use flock::physics;
use flock::{Boid, Flock, FlockError, FlockParams, Simulation};
use nannou::color::srgba;
use nannou::prelude::*;

const SPEED_EPSILON: f32 = 1e-5;

fn boid(position: Vec2, velocity: Vec2) -> Boid {
    Boid::new(
        position,
        velocity,
        srgba(0.5, 0.5, 0.5, 1.0),
        &FlockParams::default().triangle,
    )
}

fn assert_flock_invariants(flock: &Flock, params: &FlockParams) {
    assert!(flock.all_finite(), "non-finite boid state");
    for boid in flock {
        assert!(
            boid.speed() <= 1.0 + SPEED_EPSILON,
            "speed {} exceeds the cap",
            boid.speed()
        );
        assert_eq!(
            boid.triangle,
            geometry::triangle_for_velocity(boid.position, boid.velocity, &params.triangle)
        );
    }
}

#[test]
fn five_boids_hundred_frames_stay_bounded_and_finite() {
    let mut sim = Simulation::with_flock(FlockParams::default(), 0x5EED, 5).unwrap();

    for _ in 0..100 {
        sim.update(0.016, 1.0);
        assert_flock_invariants(sim.flock(), sim.params());
    }
}

#[test]
fn larger_flock_stays_bounded_with_zoom_changes() {
    let mut sim = Simulation::with_flock(FlockParams::default(), 42, 40).unwrap();

    for frame in 0..300 {
        let scale = 0.5 + (frame % 60) as f32 / 20.0;
        sim.update(1.0 / 60.0, scale);
        assert_flock_invariants(sim.flock(), sim.params());
    }
}

#[test]
fn seeded_runs_are_identical() {
    let run = || {
        let mut sim = Simulation::with_flock(FlockParams::default(), 1234, 12).unwrap();
        let mut trajectory = Vec::new();
        for _ in 0..50 {
            sim.update(0.016, 1.0);
            trajectory.extend(sim.flock().positions());
        }
        trajectory
    };

    assert_eq!(run(), run());
}

#[test]
fn parallel_run_matches_sequential_run() {
    let params = FlockParams::default();
    let mut sequential = Simulation::with_flock(params.clone(), 77, 20).unwrap();
    let mut parallel = Simulation::with_flock(params, 77, 20).unwrap();
    parallel.set_parallel(true);

    for _ in 0..30 {
        sequential.update(0.016, 1.0);
        parallel.update(0.016, 1.0);
    }

    assert_eq!(sequential.flock().boids(), parallel.flock().boids());
}

#[test]
fn single_boid_only_feels_boundary_and_clamp() {
    let params = FlockParams::default();
    let mut flock = Flock::from_boids(vec![boid(vec2(0.0, 0.0), vec2(0.4, 0.3))]);

    for _ in 0..20 {
        assert_eq!(physics::flocking_force(&flock, 0, &params), Vec2::ZERO);
        let before = flock.boids()[0];
        physics::update(&mut flock, 0.8, 1.0, &params);
        let after = flock.boids()[0];

        // Well inside the boundary, so the velocity is untouched
        assert!((after.velocity - before.velocity).length() < 1e-6);
    }
}

#[test]
fn single_boid_outside_edge_is_pushed_back() {
    let params = FlockParams::default();
    let dt = 0.8;
    let scale = 1.0;
    let start = vec2(params.edge + 0.05, 0.1);
    let velocity = vec2(0.1, 0.0);
    let mut flock = Flock::from_boids(vec![boid(start, velocity)]);

    assert_eq!(physics::flocking_force(&flock, 0, &params), Vec2::ZERO);
    physics::update(&mut flock, dt, scale, &params);
    let after = flock.boids()[0];

    let px = start.x * scale - params.edge;
    let expected = physics::clamp_speed(vec2(velocity.x - dt / px, velocity.y));
    assert!((after.velocity - expected).length() < 1e-6);
    assert!(after.velocity.x < 0.0);
    assert!((after.position - (start + expected * dt * params.speed)).length() < 1e-6);
    assert_flock_invariants(&flock, &params);
}

#[test]
fn coincident_boids_never_produce_nan() {
    let params = FlockParams::default();
    let mut flock = Flock::from_boids(vec![
        boid(vec2(0.2, -0.1), vec2(0.3, 0.0)),
        boid(vec2(0.2, -0.1), vec2(0.0, 0.3)),
    ]);

    let forces = physics::compute_forces(&flock, &params);
    assert!(forces.iter().all(|force| force.is_finite()));

    for _ in 0..10 {
        physics::update(&mut flock, 0.8, 1.0, &params);
        assert_flock_invariants(&flock, &params);
    }
}

#[test]
fn boundary_correction_matches_formula() {
    let params = FlockParams::default();
    let delta = 0.02;
    let dt = 0.8;
    let position = vec2(params.edge + delta, 0.0);
    let mut b = boid(position, vec2(0.1, 0.0));

    physics::integrate(&mut b, Vec2::ZERO, dt, 1.0, &params);

    let px = position.x - params.edge;
    let expected = physics::clamp_speed(vec2(0.1 - dt / px, 0.0));
    assert!((b.velocity - expected).length() < 1e-6);
    // The correction turned the boid around
    assert!(b.velocity.x < 0.0);
}

#[test]
fn boundary_correction_uses_scaled_position() {
    let params = FlockParams::default();
    let dt = 0.8;
    let scale = 2.0;
    let position = vec2(0.25, 0.0);

    let correction = physics::boundary_correction(position, dt, scale, params.edge);

    let px = position.x * scale - params.edge;
    assert!((correction.x + dt / px).abs() < 1e-4);
}

#[test]
fn respawn_replaces_all_boids() {
    let mut sim = Simulation::with_flock(FlockParams::default(), 8, 7).unwrap();
    for _ in 0..5 {
        sim.update(0.016, 1.0);
    }
    let before = sim.flock().boids().to_vec();

    sim.respawn().unwrap();

    assert_eq!(sim.flock().len(), before.len());
    for (old, new) in before.iter().zip(sim.flock().boids()) {
        assert_ne!(old.color, new.color);
    }
    assert_flock_invariants_after_spawn(sim.flock(), sim.params());
}

fn assert_flock_invariants_after_spawn(flock: &Flock, params: &FlockParams) {
    for boid in flock {
        assert!(boid.position.x.abs() <= params.spawn_position_spread);
        assert!(boid.position.y.abs() <= params.spawn_position_spread);
        assert_eq!(boid.color.alpha, 1.0);
    }
}

#[test]
fn zero_count_is_rejected() {
    let result = Simulation::with_flock(FlockParams::default(), 1, 0);
    assert!(matches!(
        result,
        Err(FlockError::InvalidCount { count: 0, min: 1 })
    ));
}

#[test]
fn colors_survive_updates() {
    let mut sim = Simulation::with_flock(FlockParams::default(), 99, 10).unwrap();
    let colors: Vec<_> = sim.flock().iter().map(|boid| boid.color).collect();

    for _ in 0..25 {
        sim.update(0.016, 1.3);
    }

    let after: Vec<_> = sim.flock().iter().map(|boid| boid.color).collect();
    assert_eq!(colors, after);
}
