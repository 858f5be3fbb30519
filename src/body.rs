use nalgebra::Vector3;

// ---------------------------------------------------------------------------
// Point mass
// ---------------------------------------------------------------------------

/// A point mass owned by an [`NBodySystem`](crate::system::NBodySystem).
///
/// `position` and `velocity` are part of the integrated state and are only
/// moved through the system's `set_state` path. `thrust` and
/// `exerts_gravity` are driver-writable between steps via the owning
/// system; the acceleration accumulator is scratch, recomputed on every
/// derivative evaluation, and never enters the state vector.
#[derive(Debug, Clone)]
pub struct Body {
    pub position: Vector3<f64>,   // m
    pub velocity: Vector3<f64>,   // m/s
    pub mass: f64,                // kg, > 0
    /// If false the body attracts nothing; it is still attracted by
    /// others and still moves.
    pub exerts_gravity: bool,
    /// Externally applied force, N. Persists across steps until changed;
    /// contributes thrust/mass to the body's acceleration.
    pub thrust: Vector3<f64>,
    pub(crate) accel: Vector3<f64>, // scratch, m/s^2
}

impl Body {
    pub fn new(
        mass: f64,
        position: Vector3<f64>,
        velocity: Vector3<f64>,
        exerts_gravity: bool,
    ) -> Self {
        assert!(mass > 0.0, "body mass must be positive, got {}", mass);
        Self {
            position,
            velocity,
            mass,
            exerts_gravity,
            thrust: Vector3::zeros(),
            accel: Vector3::zeros(),
        }
    }

    /// Speed, m/s.
    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    /// Linear momentum, kg·m/s.
    pub fn momentum(&self) -> Vector3<f64> {
        self.velocity * self.mass
    }
}
