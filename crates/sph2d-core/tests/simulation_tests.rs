use glam::DVec2;
use sph2d_core::particle::ParticleSystem;
use sph2d_core::solver::{run, step};
use sph2d_core::{Simulation, SimulationConfig};

const H: f64 = 0.02;
const K: f64 = 2.3;
const DT: f64 = 0.02;
const G: DVec2 = DVec2::new(0.0, -1.0);

fn assert_close(actual: f64, expected: f64, what: &str) {
    let tol = 1e-9 * expected.abs().max(1e-12);
    assert!(
        (actual - expected).abs() <= tol,
        "{what}: got {actual:e}, expected {expected:e}"
    );
}

fn small_tank() -> SimulationConfig {
    SimulationConfig {
        grid_dim: 5,
        wall_particles: 12,
        frame_count: 8,
        ..SimulationConfig::default()
    }
}

#[test]
fn test_single_step_four_particle_fixture() {
    let positions = vec![
        DVec2::new(0.0, 0.0) * 0.02,
        DVec2::new(1.0, 0.0) * 0.02,
        DVec2::new(0.0, 1.0) * 0.02,
        DVec2::new(1.0, 1.0) * 0.02,
    ];
    let mut particles =
        ParticleSystem::new(vec![0.1; 4], positions, vec![DVec2::ZERO; 4], H, K, 4).unwrap();

    step(&mut particles, G, DT);

    // The arrangement is still at rest density, so the pressure contribution
    // is exactly zero and only gravity acts.
    for (i, v) in particles.velocities().iter().enumerate() {
        assert_close(v.y, DT * -1.0, &format!("v[{i}].y"));
        assert_eq!(v.x, 0.0, "v[{i}].x");
    }
    for &rho0 in particles.rest_densities() {
        assert_close(rho0, 5.148231963067298, "rest density");
    }
}

#[test]
fn test_two_step_fixture_with_walls() {
    // Four fluid particles falling onto two wall particles. The first step
    // only moves the fluid; the second step sees the compression.
    let positions = vec![
        DVec2::new(0.0, 0.0),
        DVec2::new(0.02, 0.0),
        DVec2::new(0.0, 0.02),
        DVec2::new(0.02, 0.02),
        DVec2::new(0.0, -0.02),
        DVec2::new(0.02, -0.02),
    ];
    let mut velocities = vec![DVec2::new(0.0, -0.5); 4];
    velocities.extend([DVec2::ZERO; 2]);
    let mut particles = ParticleSystem::new(vec![0.1; 6], positions, velocities, H, K, 4).unwrap();

    step(&mut particles, G, DT);
    for v in &particles.velocities()[..4] {
        assert_close(v.y, -0.52, "after first step");
    }

    step(&mut particles, G, DT);

    let expected_velocities = [
        (-0.2790858094868623, -0.5929056446573295),
        (0.2790858094868623, -0.5929056446573295),
        (-0.3192010780223506, -0.06017967655851697),
        (0.3192010780223506, -0.060179676558516915),
        (-0.6763007705092956, -0.7427112220442241),
        (0.6763007705092956, -0.7427112220442242),
    ];
    let expected_positions = [
        (-0.005581716189737246, -0.02225811289314659),
        (0.025581716189737248, -0.02225811289314659),
        (-0.006384021560447012, 0.00839640646882966),
        (0.026384021560447012, 0.008396406468829661),
        (0.0, -0.02),
        (0.02, -0.02),
    ];

    for i in 0..6 {
        let v = particles.velocities()[i];
        let p = particles.positions()[i];
        assert_close(v.x, expected_velocities[i].0, &format!("v[{i}].x"));
        assert_close(v.y, expected_velocities[i].1, &format!("v[{i}].y"));
        assert_close(p.x, expected_positions[i].0, &format!("x[{i}].x"));
        assert_close(p.y, expected_positions[i].1, &format!("x[{i}].y"));
    }
}

#[test]
fn test_boundary_positions_never_move() {
    let mut sim = Simulation::from_config(small_tank()).unwrap();
    let fluid_count = sim.particles.fluid_count();
    let initial: Vec<DVec2> = sim.particles.positions()[fluid_count..].to_vec();

    for _ in 0..25 {
        sim.step();
        let boundary = &sim.particles.positions()[fluid_count..];
        for (now, then) in boundary.iter().zip(&initial) {
            assert_eq!(now.x.to_bits(), then.x.to_bits());
            assert_eq!(now.y.to_bits(), then.y.to_bits());
        }
    }
}

#[test]
fn test_frames_keep_boundary_fixed() {
    let mut sim = Simulation::from_config(small_tank()).unwrap();
    let fluid_count = sim.particles.fluid_count();
    let frames = sim.run();

    // Boundary positions stay put in every frame even though their
    // velocities are free to drift.
    for frame in &frames {
        assert_eq!(frame.boundary(), &sim.particles.positions()[fluid_count..]);
    }
    assert!(sim.particles.velocities()[fluid_count..]
        .iter()
        .all(|v| v.is_finite()));
}

#[test]
fn test_rest_densities_are_write_once() {
    let mut sim = Simulation::from_config(small_tank()).unwrap();
    let before: Vec<u64> = sim.particles.rest_densities().iter().map(|r| r.to_bits()).collect();

    for _ in 0..10 {
        sim.step();
    }

    let after: Vec<u64> = sim.particles.rest_densities().iter().map(|r| r.to_bits()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_quiescent_lattice_keeps_velocity() {
    let spacing = 0.02;
    let mut positions = Vec::new();
    for row in 0..4 {
        for col in 0..4 {
            positions.push(DVec2::new(col as f64 * spacing, row as f64 * spacing));
        }
    }
    let count = positions.len();
    let drift = DVec2::new(0.3, -0.1);
    let mut particles =
        ParticleSystem::new(vec![0.1; count], positions, vec![drift; count], H, K, count).unwrap();

    step(&mut particles, DVec2::ZERO, DT);

    for (i, v) in particles.velocities().iter().enumerate() {
        assert_eq!(*v, drift, "velocity[{i}] changed");
    }
}

#[test]
fn test_run_produces_one_frame_per_step() {
    let config = small_tank();
    let mut particles = sph2d_core::scene::build_tank(&config).unwrap();
    let mut reference = particles.clone();

    let frames = run(&mut particles, config.gravity, config.dt, 6);
    assert_eq!(frames.len(), 6);

    for frame in &frames {
        step(&mut reference, config.gravity, config.dt);
        assert_eq!(frame.positions(), reference.positions());
        assert_eq!(frame.fluid_count(), 25);
        assert_eq!(frame.len(), 25 + 48);
    }
    assert_eq!(frames.last().unwrap().positions(), particles.positions());
}

#[test]
fn test_frames_are_deep_copies() {
    let mut sim = Simulation::from_config(small_tank()).unwrap();
    let frames = sim.run();
    assert_eq!(frames.len(), 8);
    // Gravity pulls the fluid down, so consecutive frames differ.
    assert_ne!(frames[0].fluid(), frames[7].fluid());
    assert!(frames[7].fluid()[0].y < frames[0].fluid()[0].y);
}

#[test]
fn test_zero_frames() {
    let mut sim = Simulation::from_config(small_tank()).unwrap();
    let initial = sim.particles.positions().to_vec();
    let frames = run(&mut sim.particles, G, DT, 0);
    assert!(frames.is_empty());
    assert_eq!(sim.particles.positions(), initial.as_slice());
}

#[test]
fn test_no_nan_default_tank() {
    let mut sim = Simulation::from_config(SimulationConfig {
        frame_count: 20,
        ..SimulationConfig::default()
    })
    .unwrap();
    let frames = sim.run();
    assert_eq!(frames.len(), 20);
    for (f, frame) in frames.iter().enumerate() {
        for (i, p) in frame.positions().iter().enumerate() {
            assert!(p.is_finite(), "non-finite position {p} at particle {i}, frame {f}");
        }
    }
}
