pub mod controller;
pub mod runner;

pub use controller::{Controller, ProgradeBurn, ThrustCommand};
pub use runner::{simulate, simulate_with, SimConfig, Snapshot};
