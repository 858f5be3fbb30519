//! Prograde burn demo: a 30.3 t spacecraft in low Earth orbit lights a
//! 1 MN engine along its Earth-relative velocity for ten minutes, raising
//! the far side of its orbit.
//!
//! Run with: cargo run --example prograde_burn

use newton_sim::scenario::{self, EARTH};
use newton_sim::sim::{simulate_with, ProgradeBurn, SimConfig};

fn main() {
    let mut sys = scenario::solar_system();
    let ship = scenario::add_spacecraft(&mut sys);

    // Re-center the frame on Earth, as a driver would for display
    let earth_pos = sys.body(EARTH).position;
    sys.translate(-earth_pos);

    let mut burn = ProgradeBurn {
        body: ship,
        reference: EARTH,
        magnitude: 1.0e6, // N
        start: 0.0,
        end: 60.0, // ~2 km/s of delta-v
    };

    // Three hours: burn, then coast through the raised arc
    let config = SimConfig {
        dt: 5.0,
        max_time: 3.0 * 3_600.0,
    };
    let trajectory = simulate_with(&mut sys, &config, &mut burn);

    println!();
    println!("  PROGRADE BURN — 1 MN for 60 s, then coast");
    println!("  ────────────────────────────────────────────────────────");
    println!(
        "  {:>10} {:>14} {:>14} {:>10}",
        "t (s)", "alt (km)", "v rel (km/s)", "phase"
    );

    let mut max_range = 0.0_f64;
    let sample = (trajectory.len() / 18).max(1);
    for (i, snap) in trajectory.iter().enumerate() {
        let range = (snap.positions[ship] - snap.positions[EARTH]).norm();
        max_range = max_range.max(range);

        if i % sample != 0 && i != trajectory.len() - 1 {
            continue;
        }
        let rel_speed = (snap.velocities[ship] - snap.velocities[EARTH]).norm();
        let phase = if snap.time < 60.0 { "BURN" } else { "COAST" };
        println!(
            "  {:>10.0} {:>14.1} {:>14.3} {:>10}",
            snap.time,
            (range - 6.371e6) / 1_000.0,
            rel_speed / 1_000.0,
            phase
        );
    }

    println!();
    println!(
        "  Max range from Earth: {:.0} km (started at {:.0} km)",
        max_range / 1_000.0,
        6.556e3
    );
    println!();
}
