// ---------------------------------------------------------------------------
// Integrable-system contract
// ---------------------------------------------------------------------------

/// A dynamical system exposed as a flat state vector plus a derivative
/// function.
///
/// The flattened layout is fixed by the implementor and must be identical
/// across `get_state`, `set_state`, and `eval_deriv`; callers allocate
/// buffers of exactly `size()` scalars. Passing a buffer of any other
/// length is a programming error and panics.
pub trait IntegrableSystem {
    /// Dimension of the flattened state vector.
    fn size(&self) -> usize;

    /// Write the current flattened state into `state` and return the
    /// current simulation time. Does not mutate the system.
    fn get_state(&self, state: &mut [f64]) -> f64;

    /// Overwrite the internal configuration (and time) from `state`.
    ///
    /// This is the only way the simulated configuration changes; a
    /// `set_state` followed by `get_state` reproduces the buffer and time
    /// bit-exactly.
    fn set_state(&mut self, state: &[f64], time: f64);

    /// Write the time-derivative of the state, evaluated at the current
    /// internal configuration, into `deriv`.
    ///
    /// Internal caches may be recomputed, but position/velocity state is
    /// left untouched.
    fn eval_deriv(&mut self, deriv: &mut [f64]);
}

// ---------------------------------------------------------------------------
// Classical 4th-order Runge-Kutta stepper
// ---------------------------------------------------------------------------

/// Fixed-step RK4 integrator working purely through [`IntegrableSystem`].
///
/// Four derivative evaluations per step buy fourth-order local truncation
/// error without requiring a Jacobian from the system. The step size is
/// dictated entirely by the caller: no adaptive control, no sub-stepping,
/// no rollback.
///
/// The stepper owns its scratch buffers and resizes them whenever the
/// system dimension changes; no semantic state survives between calls, so
/// a single stepper may drive systems of varying size in sequence.
#[derive(Debug, Default)]
pub struct RungeKutta4 {
    state: Vec<f64>,
    state2: Vec<f64>,
    k1: Vec<f64>,
    k2: Vec<f64>,
    k3: Vec<f64>,
    k4: Vec<f64>,
}

impl RungeKutta4 {
    pub fn new() -> Self {
        Self::default()
    }

    fn resize_scratch(&mut self, size: usize) {
        self.state.resize(size, 0.0);
        self.state2.resize(size, 0.0);
        self.k1.resize(size, 0.0);
        self.k2.resize(size, 0.0);
        self.k3.resize(size, 0.0);
        self.k4.resize(size, 0.0);
    }

    /// Advance `sys` by one step of length `dt`.
    ///
    /// On return the system sits at the committed configuration for
    /// `t + dt`; intermediate stage configurations set during evaluation
    /// are not observable afterwards.
    pub fn integrate(&mut self, sys: &mut dyn IntegrableSystem, dt: f64) {
        let size = sys.size();
        if size == 0 {
            return;
        }
        self.resize_scratch(size);

        let time = sys.get_state(&mut self.state);

        // k1 at (state, t) — the system already sits there
        sys.eval_deriv(&mut self.k1);

        // k2 at (state + dt/2 * k1, t + dt/2)
        for i in 0..size {
            self.state2[i] = self.state[i] + 0.5 * dt * self.k1[i];
        }
        sys.set_state(&self.state2, time + 0.5 * dt);
        sys.eval_deriv(&mut self.k2);

        // k3 at (state + dt/2 * k2, t + dt/2)
        for i in 0..size {
            self.state2[i] = self.state[i] + 0.5 * dt * self.k2[i];
        }
        sys.set_state(&self.state2, time + 0.5 * dt);
        sys.eval_deriv(&mut self.k3);

        // k4 at (state + dt * k3, t + dt)
        for i in 0..size {
            self.state2[i] = self.state[i] + dt * self.k3[i];
        }
        sys.set_state(&self.state2, time + dt);
        sys.eval_deriv(&mut self.k4);

        // Weighted combination, committed as the final configuration
        for i in 0..size {
            self.state[i] +=
                (dt / 6.0) * (self.k1[i] + 2.0 * self.k2[i] + 2.0 * self.k3[i] + self.k4[i]);
        }
        sys.set_state(&self.state, time + dt);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// dx/dt = -x, analytic solution x(t) = x0 * exp(-t).
    struct Decay {
        x: f64,
        time: f64,
    }

    impl IntegrableSystem for Decay {
        fn size(&self) -> usize {
            1
        }
        fn get_state(&self, state: &mut [f64]) -> f64 {
            state[0] = self.x;
            self.time
        }
        fn set_state(&mut self, state: &[f64], time: f64) {
            self.x = state[0];
            self.time = time;
        }
        fn eval_deriv(&mut self, deriv: &mut [f64]) {
            deriv[0] = -self.x;
        }
    }

    /// Undamped harmonic oscillator: x'' = -x, state [x, v].
    struct Oscillator {
        x: f64,
        v: f64,
        time: f64,
    }

    impl IntegrableSystem for Oscillator {
        fn size(&self) -> usize {
            2
        }
        fn get_state(&self, state: &mut [f64]) -> f64 {
            state[0] = self.x;
            state[1] = self.v;
            self.time
        }
        fn set_state(&mut self, state: &[f64], time: f64) {
            self.x = state[0];
            self.v = state[1];
            self.time = time;
        }
        fn eval_deriv(&mut self, deriv: &mut [f64]) {
            deriv[0] = self.v;
            deriv[1] = -self.x;
        }
    }

    struct Empty;

    impl IntegrableSystem for Empty {
        fn size(&self) -> usize {
            0
        }
        fn get_state(&self, _state: &mut [f64]) -> f64 {
            unreachable!("stepper must not touch an empty system")
        }
        fn set_state(&mut self, _state: &[f64], _time: f64) {
            unreachable!("stepper must not touch an empty system")
        }
        fn eval_deriv(&mut self, _deriv: &mut [f64]) {
            unreachable!("stepper must not touch an empty system")
        }
    }

    #[test]
    fn decay_matches_analytic_solution() {
        let mut sys = Decay { x: 1.0, time: 0.0 };
        let mut rk4 = RungeKutta4::new();
        let dt = 0.01;
        for _ in 0..100 {
            rk4.integrate(&mut sys, dt);
        }
        let exact = (-1.0_f64).exp();
        assert!(
            (sys.x - exact).abs() < 1e-9,
            "RK4 error vs exp(-1): {:.2e}",
            (sys.x - exact).abs()
        );
        assert!((sys.time - 1.0).abs() < 1e-12, "time should advance to 1.0");
    }

    #[test]
    fn oscillator_energy_nearly_conserved() {
        let mut sys = Oscillator {
            x: 1.0,
            v: 0.0,
            time: 0.0,
        };
        let mut rk4 = RungeKutta4::new();
        for _ in 0..1_000 {
            rk4.integrate(&mut sys, 0.01);
        }
        let energy = sys.x * sys.x + sys.v * sys.v;
        assert!(
            (energy - 1.0).abs() < 1e-9,
            "oscillator energy drifted to {}",
            energy
        );
    }

    #[test]
    fn fourth_order_convergence() {
        // Halving dt should shrink the global error by roughly 2^4.
        let run = |dt: f64| -> f64 {
            let mut sys = Decay { x: 1.0, time: 0.0 };
            let mut rk4 = RungeKutta4::new();
            let steps = (1.0 / dt).round() as usize;
            for _ in 0..steps {
                rk4.integrate(&mut sys, dt);
            }
            (sys.x - (-1.0_f64).exp()).abs()
        };
        let coarse = run(0.1);
        let fine = run(0.05);
        let order = (coarse / fine).log2();
        assert!(
            order > 3.5,
            "expected ~4th-order convergence, measured order {:.2}",
            order
        );
    }

    #[test]
    fn empty_system_is_a_noop() {
        let mut sys = Empty;
        let mut rk4 = RungeKutta4::new();
        // Must return without calling into the system at all.
        rk4.integrate(&mut sys, 1.0);
    }

    #[test]
    fn scratch_buffers_follow_system_size() {
        let mut rk4 = RungeKutta4::new();
        let mut small = Decay { x: 1.0, time: 0.0 };
        let mut large = Oscillator {
            x: 1.0,
            v: 0.0,
            time: 0.0,
        };
        rk4.integrate(&mut small, 0.01);
        rk4.integrate(&mut large, 0.01);
        rk4.integrate(&mut small, 0.01);
        assert!(small.x < 1.0 && small.x > 0.9, "decay should progress");
        assert!(large.x < 1.0, "oscillator should have moved");
    }
}
