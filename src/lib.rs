pub mod body;
pub mod diagnostics;
pub mod integrator;
pub mod scenario;
pub mod sim;
pub mod system;

// Convenience re-exports: the whole engine surface in one place
pub use body::Body;
pub use integrator::{IntegrableSystem, RungeKutta4};
pub use sim::{simulate, simulate_with, Controller, ProgradeBurn, SimConfig, Snapshot};
pub use system::{NBodySystem, G};
