use nalgebra::Vector3;

use crate::system::NBodySystem;

// ---------------------------------------------------------------------------
// Canonical solar-system setup
// ---------------------------------------------------------------------------
// Body indices in the system returned by `solar_system`. All x-coordinates
// are aphelion distances; orbital speeds are the speeds at aphelion.

pub const SUN: usize = 0;
pub const MERCURY: usize = 1;
pub const VENUS: usize = 2;
pub const EARTH: usize = 3;
pub const MOON: usize = 4;
pub const MARS: usize = 5;
pub const JUPITER: usize = 6;
pub const SATURN: usize = 7;
pub const URANUS: usize = 8;
pub const NEPTUNE: usize = 9;

pub const EARTH_POSITION: Vector3<f64> = Vector3::new(1.5210e11, 0.0, 0.0);
pub const EARTH_VELOCITY: Vector3<f64> = Vector3::new(0.0, 2.9300e4, 0.0);

/// Sun through Neptune (plus the Moon), heliocentric frame, all bodies
/// sourcing gravity. Planets start on the +x axis at aphelion with their
/// aphelion speed along +y.
pub fn solar_system() -> NBodySystem {
    let mut sys = NBodySystem::new();
    let zero = Vector3::zeros();

    sys.add_body(1.989e30, zero, zero, true); // SUN
    sys.add_body(
        3.3022e23,
        Vector3::new(6.9817e10, 0.0, 0.0),
        Vector3::new(0.0, 3.886e4, 0.0),
        true,
    ); // MERCURY
    sys.add_body(
        4.8676e24,
        Vector3::new(1.0894e11, 0.0, 0.0),
        Vector3::new(0.0, 3.479e4, 0.0),
        true,
    ); // VENUS
    sys.add_body(5.97219e24, EARTH_POSITION, EARTH_VELOCITY, true); // EARTH
    sys.add_body(
        7.3477e22,
        EARTH_POSITION + Vector3::new(4.054e8, 0.0, 0.0),
        EARTH_VELOCITY + Vector3::new(0.0, 9.64e2, 0.0),
        true,
    ); // MOON
    sys.add_body(
        6.4185e23,
        Vector3::new(2.492e11, 0.0, 0.0),
        Vector3::new(0.0, 2.1977e4, 0.0),
        true,
    ); // MARS
    sys.add_body(
        1.89813e27,
        Vector3::new(8.1652e11, 0.0, 0.0),
        Vector3::new(0.0, 1.2435e4, 0.0),
        true,
    ); // JUPITER
    sys.add_body(
        5.6846e26,
        Vector3::new(1.513e12, 0.0, 0.0),
        Vector3::new(0.0, 9.101e3, 0.0),
        true,
    ); // SATURN
    sys.add_body(
        8.68e25,
        Vector3::new(3.006e12, 0.0, 0.0),
        Vector3::new(0.0, 6.486e3, 0.0),
        true,
    ); // URANUS
    sys.add_body(
        1.0243e26,
        Vector3::new(4.538e12, 0.0, 0.0),
        Vector3::new(0.0, 5.385e3, 0.0),
        true,
    ); // NEPTUNE

    sys
}

/// Append a 30.3 t spacecraft in low Earth orbit (178 km altitude,
/// prograde). The ship does not source gravity; it is still attracted and
/// still moves. Returns its body index.
pub fn add_spacecraft(sys: &mut NBodySystem) -> usize {
    sys.add_body(
        30.3e3,
        EARTH_POSITION + Vector3::new(6.556e6, 0.0, 0.0),
        EARTH_VELOCITY + Vector3::new(0.0, 7.796e3, 0.0),
        false,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
