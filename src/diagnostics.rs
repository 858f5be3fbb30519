use nalgebra::Vector3;

use crate::system::{NBodySystem, G};

// ---------------------------------------------------------------------------
// Conserved-quantity bookkeeping
// ---------------------------------------------------------------------------
// Read-only summaries the driver (and the regression tests) sample between
// integration steps. In a closed system — no thrust, all bodies sourcing
// gravity — total momentum and total mechanical energy stay constant up to
// the integrator's drift.

/// Total kinetic energy, J: sum of ½·m·v² over all bodies.
pub fn kinetic_energy(sys: &NBodySystem) -> f64 {
    sys.bodies()
        .iter()
        .map(|b| 0.5 * b.mass * b.velocity.norm_squared())
        .sum()
}

/// Gravitational potential energy, J: -G·m_i·m_j / r over unordered pairs
/// in which both bodies source gravity (only those pairs exchange the
/// equal-and-opposite forces a potential accounts for).
pub fn potential_energy(sys: &NBodySystem) -> f64 {
    let bodies = sys.bodies();
    let mut total = 0.0;
    for i in 0..bodies.len() {
        if !bodies[i].exerts_gravity {
            continue;
        }
        for j in (i + 1)..bodies.len() {
            if !bodies[j].exerts_gravity {
                continue;
            }
            let r = (bodies[j].position - bodies[i].position).norm();
            total -= G * bodies[i].mass * bodies[j].mass / r;
        }
    }
    total
}

/// Total mechanical energy, J.
pub fn total_energy(sys: &NBodySystem) -> f64 {
    kinetic_energy(sys) + potential_energy(sys)
}

/// Total linear momentum, kg·m/s.
pub fn total_momentum(sys: &NBodySystem) -> Vector3<f64> {
    sys.bodies()
        .iter()
        .fold(Vector3::zeros(), |acc, b| acc + b.momentum())
}

/// Mass-weighted mean position, m.
pub fn center_of_mass(sys: &NBodySystem) -> Vector3<f64> {
    let mut weighted = Vector3::zeros();
    let mut mass = 0.0;
    for b in sys.bodies() {
        weighted += b.position * b.mass;
        mass += b.mass;
    }
    assert!(mass > 0.0, "center of mass of an empty system is undefined");
    weighted / mass
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
