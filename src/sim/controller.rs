use nalgebra::Vector3;

use crate::system::NBodySystem;

// ---------------------------------------------------------------------------
// Per-tick thrust scheduling
// ---------------------------------------------------------------------------

/// A force to apply to one body for the coming tick (and every following
/// tick until superseded — thrust persists on the body).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrustCommand {
    pub body: usize,
    pub force: Vector3<f64>, // N
}

/// Decides thrust once per tick, before the integration step.
///
/// Implementations only observe the system; the runner applies the
/// returned commands through `set_thrust`, keeping thrust the sole
/// externally written body field.
pub trait Controller {
    fn control(&mut self, sys: &NBodySystem, dt: f64) -> Vec<ThrustCommand>;
}

/// Burns nothing. Default controller for a coasting system.
#[derive(Debug, Default)]
pub struct Coast;

impl Controller for Coast {
    fn control(&mut self, _sys: &NBodySystem, _dt: f64) -> Vec<ThrustCommand> {
        Vec::new()
    }
}

// ---------------------------------------------------------------------------
// Prograde burn
// ---------------------------------------------------------------------------

/// Constant-magnitude thrust along the body's velocity relative to a
/// reference body, active inside a time window. Raises the orbit around
/// the reference while the engines are lit, then commands zero thrust.
#[derive(Debug, Clone)]
pub struct ProgradeBurn {
    pub body: usize,
    pub reference: usize,
    pub magnitude: f64, // N
    pub start: f64,     // s
    pub end: f64,       // s
}

impl Controller for ProgradeBurn {
    fn control(&mut self, sys: &NBodySystem, _dt: f64) -> Vec<ThrustCommand> {
        let t = sys.time();
        let force = if t >= self.start && t < self.end {
            let rel = sys.body(self.body).velocity - sys.body(self.reference).velocity;
            let speed = rel.norm();
            if speed > 0.0 {
                rel * (self.magnitude / speed)
            } else {
                Vector3::zeros()
            }
        } else {
            Vector3::zeros()
        };
        vec![ThrustCommand {
            body: self.body,
            force,
        }]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
