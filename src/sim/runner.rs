use nalgebra::Vector3;

use crate::integrator::RungeKutta4;
use crate::system::NBodySystem;

use super::controller::{Coast, Controller};

// ---------------------------------------------------------------------------
// Simulation configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SimConfig {
    pub dt: f64,       // integration timestep, s
    pub max_time: f64, // simulated duration, s
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: 60.0,                       // orbital timescales
            max_time: 86_400.0 * 365.25,    // one year
        }
    }
}

// ---------------------------------------------------------------------------
// Trajectory recording
// ---------------------------------------------------------------------------

/// Positions and velocities of every body at one instant, in body-index
/// order. Read-only view for the presentation layer; nothing here feeds
/// back into the simulation.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub time: f64,
    pub positions: Vec<Vector3<f64>>,
    pub velocities: Vec<Vector3<f64>>,
}

impl Snapshot {
    fn capture(sys: &NBodySystem) -> Self {
        Self {
            time: sys.time(),
            positions: sys.bodies().iter().map(|b| b.position).collect(),
            velocities: sys.bodies().iter().map(|b| b.velocity).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Driving loop
// ---------------------------------------------------------------------------

/// Run the system forward with a controller scheduling thrust.
///
/// Each tick: the controller observes the system, its commands are applied
/// through `set_thrust`, then the stepper advances the system by exactly
/// one `dt`. Snapshots are recorded after every step (plus the initial
/// configuration).
pub fn simulate_with(
    sys: &mut NBodySystem,
    config: &SimConfig,
    controller: &mut dyn Controller,
) -> Vec<Snapshot> {
    let mut rk4 = RungeKutta4::new();

    let capacity = (config.max_time / config.dt) as usize + 1;
    let mut trajectory = Vec::with_capacity(capacity.min(200_000));
    trajectory.push(Snapshot::capture(sys));

    let end = sys.time() + config.max_time;
    while sys.time() < end {
        for cmd in controller.control(sys, config.dt) {
            sys.set_thrust(cmd.body, cmd.force);
        }
        rk4.integrate(sys, config.dt);
        trajectory.push(Snapshot::capture(sys));
    }

    trajectory
}

/// Run the system forward with no thrust scheduling (convenience wrapper).
pub fn simulate(sys: &mut NBodySystem, config: &SimConfig) -> Vec<Snapshot> {
    let mut coast = Coast;
    simulate_with(sys, config, &mut coast)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{total_energy, total_momentum};
    use crate::sim::controller::ThrustCommand;

    /// Earth-Moon pair, closed (both gravitating, no thrust).
    fn earth_moon() -> NBodySystem {
        let mut sys = NBodySystem::new();
        sys.add_body(5.97219e24, Vector3::zeros(), Vector3::zeros(), true);
        sys.add_body(
            7.3477e22,
            Vector3::new(4.054e8, 0.0, 0.0),
            Vector3::new(0.0, 9.70e2, 0.0),
            true,
        );
        sys
    }

    #[test]
    fn records_initial_plus_one_snapshot_per_step() {
        let mut sys = earth_moon();
        let config = SimConfig {
            dt: 60.0,
            max_time: 600.0,
        };
        let traj = simulate(&mut sys, &config);
        assert_eq!(traj.len(), 11, "10 steps plus the initial snapshot");
        assert_eq!(traj[0].time, 0.0);
        assert!((traj.last().unwrap().time - 600.0).abs() < 1e-9);
        assert_eq!(traj[0].positions.len(), 2);
    }

    #[test]
    fn closed_two_body_conserves_energy_and_momentum() {
        let mut sys = earth_moon();
        let e0 = total_energy(&sys);
        let p0 = total_momentum(&sys);

        // ~46 days at dt = 1 h: a couple of lunar orbits
        let config = SimConfig {
            dt: 3_600.0,
            max_time: 4.0e6,
        };
        simulate(&mut sys, &config);

        let e1 = total_energy(&sys);
        let p1 = total_momentum(&sys);
        let momentum_scale = sys.body(1).momentum().norm();
        assert!(
            ((e1 - e0) / e0).abs() < 1e-6,
            "relative energy drift {:.2e} over the run",
            ((e1 - e0) / e0).abs()
        );
        assert!(
            (p1 - p0).norm() / momentum_scale < 1e-8,
            "momentum drift {:.2e} relative to the moon's momentum",
            (p1 - p0).norm() / momentum_scale
        );
    }

    #[test]
    fn thrusted_body_diverges_from_coasting_twin() {
        // 30.3 t ship in low orbit around the Earth-Moon pair's primary
        fn with_ship() -> NBodySystem {
            let mut sys = earth_moon();
            sys.add_body(
                30.3e3,
                Vector3::new(6.556e6, 0.0, 0.0),
                Vector3::new(0.0, 7.796e3, 0.0),
                false,
            );
            sys
        }

        struct ConstantPush;
        impl Controller for ConstantPush {
            fn control(&mut self, _sys: &NBodySystem, _dt: f64) -> Vec<ThrustCommand> {
                vec![ThrustCommand {
                    body: 2,
                    force: Vector3::new(0.0, 1.0e5, 0.0),
                }]
            }
        }

        let config = SimConfig {
            dt: 60.0,
            max_time: 6_000.0,
        };
        let mut coasting = with_ship();
        simulate(&mut coasting, &config);

        let mut pushed = with_ship();
        simulate_with(&mut pushed, &config, &mut ConstantPush);

        let gap = (pushed.body(2).position - coasting.body(2).position).norm();
        assert!(
            gap > 1.0e4,
            "thrust must alter the trajectory, gap {} m",
            gap
        );
    }

    #[test]
    fn thrust_persists_until_superseded() {
        let mut sys = NBodySystem::new();
        let i = sys.add_body(1.0e3, Vector3::zeros(), Vector3::zeros(), false);
        sys.set_thrust(i, Vector3::new(1.0e3, 0.0, 0.0));

        // No controller: the pre-set thrust keeps acting every tick
        let config = SimConfig {
            dt: 1.0,
            max_time: 10.0,
        };
        simulate(&mut sys, &config);
        // a = 1 m/s^2 for 10 s → x = 50 m, v = 10 m/s
        assert!((sys.body(i).position.x - 50.0).abs() < 1e-9);
        assert!((sys.body(i).velocity.x - 10.0).abs() < 1e-12);
    }
}
