//! Per-region climatological baselines.

use iris_catalog::Region;

/// Fixed climatological baseline for one region: mean annual temperature
/// (°C), total annual rainfall (mm), and total annual sunshine (hours).
///
/// Rainfall and sunshine baselines are annual totals; the generator divides
/// them by 12 to seed the monthly synthesis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionProfile {
    pub temp_base: f64,
    pub rainfall_base: f64,
    pub sunshine_base: f64,
}

impl RegionProfile {
    /// The compiled-in baseline for `region`.
    pub fn for_region(region: Region) -> Self {
        let (temp_base, rainfall_base, sunshine_base) = match region {
            Region::EnglandN => (9.0, 850.0, 1300.0),
            Region::EnglandS => (11.0, 750.0, 1600.0),
            Region::EnglandENe => (9.5, 650.0, 1450.0),
            Region::EnglandCentral => (10.0, 700.0, 1400.0),
            Region::EnglandSwSWales => (10.5, 1100.0, 1500.0),
            Region::Midlands => (9.5, 720.0, 1350.0),
            Region::EastAnglia => (10.0, 600.0, 1550.0),
            Region::ScotlandN => (7.0, 1200.0, 1100.0),
            Region::ScotlandE => (8.0, 800.0, 1250.0),
            Region::ScotlandW => (8.5, 1500.0, 1150.0),
            Region::WalesN => (9.0, 1300.0, 1250.0),
            Region::Wales => (9.5, 1200.0, 1300.0),
            Region::NorthernIreland => (9.0, 1000.0, 1200.0),
            Region::Uk => (9.5, 900.0, 1350.0),
        };
        Self {
            temp_base,
            rainfall_base,
            sunshine_base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uk_aggregate_baseline() {
        let p = RegionProfile::for_region(Region::Uk);
        assert_eq!(p.temp_base, 9.5);
        assert_eq!(p.rainfall_base, 900.0);
        assert_eq!(p.sunshine_base, 1350.0);
    }

    #[test]
    fn western_scotland_is_the_wettest_baseline() {
        let wettest = Region::ALL
            .into_iter()
            .max_by(|a, b| {
                RegionProfile::for_region(*a)
                    .rainfall_base
                    .total_cmp(&RegionProfile::for_region(*b).rainfall_base)
            })
            .unwrap();
        assert_eq!(wettest, Region::ScotlandW);
    }

    #[test]
    fn northern_scotland_is_the_coldest_baseline() {
        let coldest = Region::ALL
            .into_iter()
            .min_by(|a, b| {
                RegionProfile::for_region(*a)
                    .temp_base
                    .total_cmp(&RegionProfile::for_region(*b).temp_base)
            })
            .unwrap();
        assert_eq!(coldest, Region::ScotlandN);
    }
}
