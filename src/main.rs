use newton_sim::diagnostics::{center_of_mass, total_energy, total_momentum};
use newton_sim::scenario::{self, EARTH, MOON, SUN};
use newton_sim::sim::{simulate, SimConfig};

const AU: f64 = 1.495_978_707e11; // m
const DAY: f64 = 86_400.0; // s

fn main() {
    // -----------------------------------------------------------------------
    // Scenario: Sun through Neptune, one simulated year
    // -----------------------------------------------------------------------
    let mut sys = scenario::solar_system();

    let config = SimConfig {
        dt: 3_600.0,               // 1 h
        max_time: 365.25 * DAY,    // 1 yr
    };

    let e0 = total_energy(&sys);
    let p0 = total_momentum(&sys);
    let names = [
        "Sun", "Mercury", "Venus", "Earth", "Moon", "Mars", "Jupiter", "Saturn", "Uranus",
        "Neptune",
    ];

    // -----------------------------------------------------------------------
    // Run simulation
    // -----------------------------------------------------------------------
    let trajectory = simulate(&mut sys, &config);

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  SOLAR SYSTEM SIMULATION — {} bodies, RK4", sys.len());
    println!("====================================================================");
    println!();
    println!(
        "  Duration: {:.2} days   dt: {:.0} s   steps: {}",
        config.max_time / DAY,
        config.dt,
        trajectory.len() - 1
    );
    println!();

    println!("  Final configuration (heliocentric)");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:<9} {:>12} {:>12} {:>14} {:>11}",
        "body", "r (AU)", "v (km/s)", "mass (kg)", "gravity"
    );
    let sun_pos = sys.body(SUN).position;
    for (i, name) in names.iter().enumerate() {
        let b = sys.body(i);
        println!(
            "  {:<9} {:>12.4} {:>12.2} {:>14.4e} {:>11}",
            name,
            (b.position - sun_pos).norm() / AU,
            b.speed() / 1_000.0,
            b.mass,
            if b.exerts_gravity { "source" } else { "passive" }
        );
    }
    println!();

    // Earth should be near the far side of its orbit from aphelion after
    // half a year and back near the start after a full one.
    let earth_angle = {
        let r = sys.body(EARTH).position - sun_pos;
        r.y.atan2(r.x).to_degrees()
    };
    let moon_range = (sys.body(MOON).position - sys.body(EARTH).position).norm();

    println!("  Sanity checks");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  Earth orbital phase:   {:>10.1} deg after one year", earth_angle);
    println!("  Earth-Moon range:      {:>10.0} km", moon_range / 1_000.0);
    println!(
        "  Barycenter offset:     {:>10.0} km from the Sun",
        (center_of_mass(&sys) - sun_pos).norm() / 1_000.0
    );
    println!();

    let e1 = total_energy(&sys);
    let p1 = total_momentum(&sys);
    println!("  Conservation");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  Total energy:      {:>14.6e} J", e1);
    println!("  Energy drift:      {:>14.2e} (relative)", ((e1 - e0) / e0).abs());
    println!(
        "  Momentum drift:    {:>14.2e} kg·m/s (|p1 - p0|)",
        (p1 - p0).norm()
    );
    println!();

    // -----------------------------------------------------------------------
    // Trajectory table (sampled, Earth)
    // -----------------------------------------------------------------------
    println!("  Earth trajectory (sampled)");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>10} {:>12} {:>12} {:>12}",
        "t (days)", "x (AU)", "y (AU)", "v (km/s)"
    );
    let sample_interval = (trajectory.len() / 12).max(1);
    for (i, snap) in trajectory.iter().enumerate() {
        if i % sample_interval != 0 && i != trajectory.len() - 1 {
            continue;
        }
        println!(
            "  {:>10.1} {:>12.4} {:>12.4} {:>12.2}",
            snap.time / DAY,
            snap.positions[EARTH].x / AU,
            snap.positions[EARTH].y / AU,
            snap.velocities[EARTH].norm() / 1_000.0
        );
    }
    println!();
    println!("====================================================================");
    println!();
}
