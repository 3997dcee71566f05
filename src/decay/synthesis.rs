//! Placeholder values for the dashboard.
//!
//! Nothing here is a physical prediction. Positions, sizes and masses are
//! random draws that only depend on the object type and inclination.

use std::ops::Range;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

use crate::decay::types::{ObjectType, PhysicalEstimate};

enum SizeRange {
    WholeMeters(Range<u32>),
    Meters(Range<f64>),
}

struct PhysicalRanges {
    size: SizeRange,
    mass_kg: Range<u32>,
}

fn tracked_ranges(object_type: ObjectType) -> PhysicalRanges {
    match object_type {
        ObjectType::RocketBody => PhysicalRanges {
            size: SizeRange::WholeMeters(8..20),
            mass_kg: 2000..8000,
        },
        ObjectType::Debris => PhysicalRanges {
            size: SizeRange::Meters(0.1..3.0),
            mass_kg: 1..500,
        },
        ObjectType::Satellite => PhysicalRanges {
            size: SizeRange::Meters(1.0..8.0),
            mass_kg: 100..2000,
        },
    }
}

fn backup_ranges(object_type: ObjectType) -> PhysicalRanges {
    match object_type {
        ObjectType::RocketBody => PhysicalRanges {
            size: SizeRange::WholeMeters(8..25),
            mass_kg: 2000..8000,
        },
        ObjectType::Debris => PhysicalRanges {
            size: SizeRange::Meters(0.5..3.0),
            mass_kg: 5..200,
        },
        ObjectType::Satellite => PhysicalRanges {
            size: SizeRange::Meters(1.0..8.0),
            mass_kg: 100..2000,
        },
    }
}

fn sample_physical<R: Rng + ?Sized>(ranges: PhysicalRanges, rng: &mut R) -> PhysicalEstimate {
    let size = match ranges.size {
        SizeRange::WholeMeters(range) => format!("{}m", rng.random_range(range)),
        SizeRange::Meters(range) => format!("{:.1}m", rng.random_range(range)),
    };
    let mass = format!("{} kg", rng.random_range(ranges.mass_kg));

    PhysicalEstimate { size, mass }
}

/// Random (latitude, longitude) in degrees.
///
/// Latitude stays within the band an orbit of this inclination can reach.
/// A non-finite inclination is treated as equatorial.
pub fn synthesize_ground_position<R: Rng + ?Sized>(inclination_deg: f64, rng: &mut R) -> (f64, f64) {
    let inclination = if inclination_deg.is_finite() {
        inclination_deg.clamp(0.0, 180.0)
    } else {
        0.0
    };
    let lat_range = if inclination > 90.0 {
        inclination.min(180.0 - inclination)
    } else {
        inclination
    };

    let lat = rng.random_range(-lat_range..=lat_range);
    let lon = rng.random_range(-180.0..=180.0);
    (lat, lon)
}

/// Size and mass guesses for a tracked object of the given type
pub fn synthesize_size_and_mass<R: Rng + ?Sized>(
    object_type: ObjectType,
    rng: &mut R,
) -> PhysicalEstimate {
    sample_physical(tracked_ranges(object_type), rng)
}

pub(crate) fn synthesize_backup_size_and_mass<R: Rng + ?Sized>(
    object_type: ObjectType,
    rng: &mut R,
) -> PhysicalEstimate {
    sample_physical(backup_ranges(object_type), rng)
}

/// Reproducible generator when a seed is given, OS-seeded otherwise
pub fn seeded_rng(seed: Option<u64>) -> ChaChaRng {
    match seed {
        Some(seed) => ChaChaRng::seed_from_u64(seed),
        None => ChaChaRng::from_rng(&mut rand::rng()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_leading_number(s: &str) -> f64 {
        s.trim_end_matches(" kg")
            .trim_end_matches('m')
            .parse()
            .unwrap()
    }

    #[test]
    fn test_position_respects_inclination_band() {
        let mut rng = ChaChaRng::seed_from_u64(7);

        for _ in 0..500 {
            let (lat, lon) = synthesize_ground_position(51.6, &mut rng);
            assert!((-51.6..=51.6).contains(&lat));
            assert!((-180.0..=180.0).contains(&lon));

            // Retrograde sun-synchronous orbit reaches 180 - 97.4 degrees
            let (lat, _) = synthesize_ground_position(97.4, &mut rng);
            assert!(lat.abs() <= 82.6 + 1e-9);
        }
    }

    #[test]
    fn test_equatorial_orbit_stays_on_equator() {
        let mut rng = ChaChaRng::seed_from_u64(1);
        let (lat, _) = synthesize_ground_position(0.0, &mut rng);
        assert_eq!(lat, 0.0);
    }

    #[test]
    fn test_non_finite_inclination_is_equatorial() {
        let mut rng = ChaChaRng::seed_from_u64(2);
        for inclination in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let (lat, lon) = synthesize_ground_position(inclination, &mut rng);
            assert_eq!(lat, 0.0);
            assert!((-180.0..=180.0).contains(&lon));
        }
    }

    #[test]
    fn test_same_seed_same_position() {
        let mut a = ChaChaRng::seed_from_u64(99);
        let mut b = ChaChaRng::seed_from_u64(99);
        assert_eq!(
            synthesize_ground_position(65.0, &mut a),
            synthesize_ground_position(65.0, &mut b)
        );
    }

    #[test]
    fn test_tracked_size_and_mass_ranges() {
        let mut rng = ChaChaRng::seed_from_u64(42);

        for _ in 0..200 {
            let rocket = synthesize_size_and_mass(ObjectType::RocketBody, &mut rng);
            let size = parse_leading_number(&rocket.size);
            let mass = parse_leading_number(&rocket.mass);
            assert!((8.0..20.0).contains(&size));
            assert!((2000.0..8000.0).contains(&mass));
            assert!(!rocket.size.contains('.'));

            let debris = synthesize_size_and_mass(ObjectType::Debris, &mut rng);
            assert!((0.1..=3.0).contains(&parse_leading_number(&debris.size)));
            assert!((1.0..500.0).contains(&parse_leading_number(&debris.mass)));

            let satellite = synthesize_size_and_mass(ObjectType::Satellite, &mut rng);
            assert!((1.0..=8.0).contains(&parse_leading_number(&satellite.size)));
            assert!((100.0..2000.0).contains(&parse_leading_number(&satellite.mass)));
        }
    }

    #[test]
    fn test_backup_rockets_can_be_larger() {
        let mut rng = ChaChaRng::seed_from_u64(3);
        let largest = (0..500)
            .map(|_| synthesize_backup_size_and_mass(ObjectType::RocketBody, &mut rng))
            .map(|p| parse_leading_number(&p.size))
            .fold(0.0, f64::max);
        assert!(largest >= 20.0);
        assert!(largest < 25.0);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let a: u64 = seeded_rng(Some(5)).random();
        let b: u64 = seeded_rng(Some(5)).random();
        assert_eq!(a, b);
    }
}
