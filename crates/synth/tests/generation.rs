//! End-to-end generation properties: determinism, ordering, aggregate
//! invariants, and the documented draw sequence.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use iris_catalog::{Metric, Region, Season};
use iris_synth::{generate, GenerateConfig, Lcg};

#[test]
fn repeated_generation_is_identical() {
    let config = GenerateConfig::new();
    let a = generate(&config).unwrap();
    let b = generate(&config).unwrap();
    assert_eq!(a, b);
    // Byte-identical through serialization too.
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn different_seeds_differ() {
    let a = generate(&GenerateConfig::new()).unwrap();
    let b = generate(&GenerateConfig::new().with_seed(54321)).unwrap();
    assert_ne!(a, b);
}

#[test]
fn one_record_per_region_year_in_region_major_order() {
    let config = GenerateConfig::new().with_start_year(2000).with_end_year(2004);
    let dataset = generate(&config).unwrap();
    assert_eq!(dataset.len(), 14 * 5);

    let mut expected = Vec::new();
    for region in Region::ALL {
        for year in 2000..=2004 {
            expected.push((region, year));
        }
    }
    let actual: Vec<(Region, i32)> = dataset.iter().map(|r| (r.region, r.year)).collect();
    assert_eq!(actual, expected);
}

#[test]
fn seasonal_and_annual_slots_recompute_from_monthly() {
    let dataset = generate(&GenerateConfig::new()).unwrap();
    for record in &dataset {
        for metric in Metric::ALL {
            let series = record.series(metric);
            let monthly = series.monthly();

            let annual = monthly.iter().sum::<f64>() / 12.0;
            assert_abs_diff_eq!(series.annual(), annual, epsilon = 1e-9);

            for season in Season::ALL {
                let mean: f64 = season
                    .months()
                    .iter()
                    .map(|m| monthly[m.index()])
                    .sum::<f64>()
                    / 3.0;
                assert_abs_diff_eq!(series.season(season), mean, epsilon = 1e-9);
            }
        }
    }
}

#[test]
fn single_year_uk_record_stays_in_the_profile_envelope() {
    let config = GenerateConfig::new().with_start_year(2020).with_end_year(2020);
    let dataset = generate(&config).unwrap();

    let uk: Vec<_> = dataset.iter().filter(|r| r.region == Region::Uk).collect();
    assert_eq!(uk.len(), 1);

    // UK mean-temperature base is 9.5 with variation 4.5; every monthly
    // value lies within base ± variation * 1.1, so the annual mean does too.
    let annual = uk[0].temperature_mean.annual();
    assert!(
        (annual - 9.5).abs() <= 4.5 * 1.1,
        "uk annual mean temperature out of envelope: {annual}"
    );
}

#[test]
fn scottish_regions_get_more_frost_than_english_ones() {
    let dataset = generate(&GenerateConfig::new()).unwrap();
    for year in 2014..=2024 {
        let frost = |region: Region| {
            dataset
                .iter()
                .find(|r| r.region == region && r.year == year)
                .unwrap()
                .frost_days
                .annual()
        };
        // Base 8 vs 5 dominates the ±1 monthly noise in every year.
        assert!(frost(Region::ScotlandN) > frost(Region::EnglandN));
    }
}

/// Replays the documented draw sequence for the first two records and
/// checks every monthly value, pinning the metric order, the
/// one-draw-per-month rule, and the year trend.
#[test]
fn first_records_match_the_documented_draw_sequence() {
    const TEMP: [f64; 12] = [
        -0.8, -0.7, -0.4, 0.0, 0.4, 0.8, 1.0, 0.9, 0.5, 0.1, -0.3, -0.7,
    ];
    const RAIN: [f64; 12] = [
        0.2, 0.1, 0.0, -0.2, -0.3, -0.4, -0.3, -0.2, 0.0, 0.2, 0.3, 0.3,
    ];
    const SUN: [f64; 12] = [
        -0.9, -0.7, -0.3, 0.2, 0.6, 0.9, 1.0, 0.9, 0.4, -0.1, -0.6, -0.9,
    ];
    const FROST: [f64; 12] = [
        0.8, 0.7, 0.4, 0.1, 0.0, 0.0, 0.0, 0.0, 0.0, 0.1, 0.4, 0.7,
    ];

    let dataset = generate(&GenerateConfig::new()).unwrap();
    let mut rng = Lcg::new(12345);
    let mut synth = |base: f64, variation: f64, pattern: &[f64; 12]| -> Vec<f64> {
        pattern
            .iter()
            .map(|p| base + p * variation + (rng.next_f64() - 0.5) * variation * 0.2)
            .collect()
    };

    // First two records: Northern England (temp 9, rain 850, sun 1300),
    // years 2014 (trend 0.00) and 2015 (trend 0.02).
    for (i, trend) in [(0usize, 0.0), (1usize, 0.02)] {
        let record = &dataset.records()[i];
        assert_eq!(record.region, Region::EnglandN);
        assert_eq!(record.year, 2014 + i as i32);

        let expected: Vec<(Metric, Vec<f64>)> = vec![
            (Metric::TemperatureMin, synth(9.0 - 3.0 + trend, 4.0, &TEMP)),
            (Metric::TemperatureMax, synth(9.0 + 5.0 + trend, 5.0, &TEMP)),
            (Metric::TemperatureMean, synth(9.0 + trend, 4.5, &TEMP)),
            (Metric::FrostDays, synth(5.0, 10.0, &FROST)),
            (Metric::Rainfall, synth(850.0 / 12.0, 20.0, &RAIN)),
            (Metric::RainDays, synth(15.0, 5.0, &RAIN)),
            (Metric::Sunshine, synth(1300.0 / 12.0, 80.0, &SUN)),
        ];
        for (metric, monthly) in expected {
            for (m, value) in monthly.iter().enumerate() {
                assert_relative_eq!(
                    record.series(metric).monthly()[m],
                    *value,
                    epsilon = 1e-12
                );
            }
        }
    }
}
