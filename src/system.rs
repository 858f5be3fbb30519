use nalgebra::Vector3;

use crate::body::Body;
use crate::integrator::IntegrableSystem;

// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

/// Newtonian gravitational constant, m^3/(kg·s^2).
pub const G: f64 = 6.67384e-11;

/// Scalars per body in the flattened state: position then velocity.
pub const STATE_PER_BODY: usize = 6;

/// Pairs closer than this (m) have their squared separation clamped before
/// the inverse-square law is applied. Exactly coincident bodies therefore
/// contribute a zero acceleration instead of NaN; at any physically
/// meaningful separation the clamp is inert and trajectories match the
/// unclamped formula bit-for-bit.
pub const MIN_SEPARATION: f64 = 1.0;

// ---------------------------------------------------------------------------
// Gravitational N-body system
// ---------------------------------------------------------------------------

/// A collection of point masses under mutual Newtonian gravity, plus
/// per-body externally applied thrust.
///
/// Bodies are append-only and index-stable; the flattened state vector is
/// laid out as consecutive `[pos.x, pos.y, pos.z, vel.x, vel.y, vel.z]`
/// blocks in body-index order. That layout is the single source of truth
/// for every `get_state`/`set_state`/`eval_deriv` call.
#[derive(Debug, Clone, Default)]
pub struct NBodySystem {
    bodies: Vec<Body>,
    time: f64, // s
}

impl NBodySystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a body and return its stable index.
    pub fn add_body(
        &mut self,
        mass: f64,
        position: Vector3<f64>,
        velocity: Vector3<f64>,
        exerts_gravity: bool,
    ) -> usize {
        self.bodies.push(Body::new(mass, position, velocity, exerts_gravity));
        self.bodies.len() - 1
    }

    /// Re-initialize an existing body (setup-time only; during simulation
    /// position/velocity move solely through `set_state`).
    pub fn set_body(
        &mut self,
        index: usize,
        position: Vector3<f64>,
        velocity: Vector3<f64>,
        mass: f64,
    ) {
        assert!(mass > 0.0, "body mass must be positive, got {}", mass);
        let body = &mut self.bodies[index];
        body.position = position;
        body.velocity = velocity;
        body.mass = mass;
    }

    /// Shift every body's position by `offset`, e.g. to re-center the
    /// coordinate frame on a reference body. Velocities and dynamics are
    /// unaffected: gravity depends only on relative position.
    pub fn translate(&mut self, offset: Vector3<f64>) {
        for body in &mut self.bodies {
            body.position += offset;
        }
    }

    /// Set the externally applied force on one body. Takes effect on the
    /// next `integrate` call and persists until changed.
    pub fn set_thrust(&mut self, index: usize, force: Vector3<f64>) {
        self.bodies[index].thrust = force;
    }

    /// Toggle whether one body sources gravity.
    pub fn set_exerts_gravity(&mut self, index: usize, exerts: bool) {
        self.bodies[index].exerts_gravity = exerts;
    }

    pub fn body(&self, index: usize) -> &Body {
        &self.bodies[index]
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Current simulation time, s.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Recompute every body's acceleration accumulator at the current
    /// configuration: pairwise gravity plus thrust/mass.
    fn accumulate_accelerations(&mut self) {
        for body in &mut self.bodies {
            body.accel = Vector3::zeros();
        }

        // Full ordered-pair loop. The equal-and-opposite shortcut is
        // deliberately not taken: summation order in body-index order is
        // part of the system's determinism guarantee.
        let n = self.bodies.len();
        for i in 0..n {
            let mut accel = Vector3::zeros();
            for j in 0..n {
                if i == j || !self.bodies[j].exerts_gravity {
                    continue;
                }
                let r = self.bodies[j].position - self.bodies[i].position;
                let r2 = r.norm_squared().max(MIN_SEPARATION * MIN_SEPARATION);
                // r / r2^(3/2) == r_hat / r2; coincident bodies give a
                // zero numerator against the clamped denominator.
                accel += r * (G * self.bodies[j].mass / (r2 * r2.sqrt()));
            }
            self.bodies[i].accel = accel;
        }

        for body in &mut self.bodies {
            body.accel += body.thrust / body.mass;
        }
    }
}

// ---------------------------------------------------------------------------
// State vector contract
// ---------------------------------------------------------------------------

// Bounds-checked pack/unpack helpers. The 3-scalar writes below, together
// with the block offsets in the impl, define the layout contract:
// position then velocity, per body, in body-index order.

fn write_vector3(buffer: &mut [f64], at: usize, v: &Vector3<f64>) {
    buffer[at] = v.x;
    buffer[at + 1] = v.y;
    buffer[at + 2] = v.z;
}

fn read_vector3(buffer: &[f64], at: usize) -> Vector3<f64> {
    Vector3::new(buffer[at], buffer[at + 1], buffer[at + 2])
}

impl IntegrableSystem for NBodySystem {
    fn size(&self) -> usize {
        STATE_PER_BODY * self.bodies.len()
    }

    fn get_state(&self, state: &mut [f64]) -> f64 {
        assert_eq!(
            state.len(),
            self.size(),
            "state buffer length must equal size()"
        );
        for (i, body) in self.bodies.iter().enumerate() {
            let idx = STATE_PER_BODY * i;
            write_vector3(state, idx, &body.position);
            write_vector3(state, idx + 3, &body.velocity);
        }
        self.time
    }

    fn set_state(&mut self, state: &[f64], time: f64) {
        assert_eq!(
            state.len(),
            self.size(),
            "state buffer length must equal size()"
        );
        for (i, body) in self.bodies.iter_mut().enumerate() {
            let idx = STATE_PER_BODY * i;
            body.position = read_vector3(state, idx);
            body.velocity = read_vector3(state, idx + 3);
        }
        self.time = time;
    }

    fn eval_deriv(&mut self, deriv: &mut [f64]) {
        assert_eq!(
            deriv.len(),
            self.size(),
            "derivative buffer length must equal size()"
        );
        self.accumulate_accelerations();
        for (i, body) in self.bodies.iter().enumerate() {
            let idx = STATE_PER_BODY * i;
            write_vector3(deriv, idx, &body.velocity);
            write_vector3(deriv, idx + 3, &body.accel);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
