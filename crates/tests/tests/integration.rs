//! End-to-end integration tests.
//!
//! Each test runs a complete scenario through the public pipeline:
//! YAML source, validation, simulation, results, and (where relevant)
//! report artifacts.

use rainlap_tests::TestHarness;

const REFERENCE_SCENARIO: &str = r#"
apiVersion: rainlap/v1
kind: Scenario
metadata:
  name: reference-three-laps
race:
  trackWetness: 0.7
  raceDistance: 3
  baseTemperature: 15.0
  loadPerLap: 1500.0
compounds:
  - name: Intermediate
    baseGrip: 0.8
    wearRate: 0.01
    waterDisplacement: 0.6
"#;

const WET_GP_SCENARIO: &str = r#"
apiVersion: rainlap/v1
kind: Scenario
metadata:
  name: wet-gp
race:
  trackWetness: 0.7
  raceDistance: 50
  baseTemperature: 15.0
  loadPerLap: 1500.0
compounds:
  - name: Intermediate
    baseGrip: 0.8
    wearRate: 0.01
    waterDisplacement: 0.6
  - name: Full Wet
    baseGrip: 1.0
    wearRate: 0.015
    waterDisplacement: 0.8
"#;

/// The worked three-lap example: felt wetness 0.1, grip falls 0.02 per
/// lap, temperature climbs toward equilibrium, performance is 90% of
/// grip.
#[test]
fn reference_three_lap_values() {
    let mut harness = TestHarness::from_yaml(REFERENCE_SCENARIO);
    harness.run();

    let expected = [
        (1, 0.78, 15.15, 0.702),
        (2, 0.76, 15.2925, 0.684),
        (3, 0.74, 15.427875, 0.666),
    ];
    for (lap, grip, temperature, performance) in expected {
        assert!(
            (harness.grip("Intermediate", lap) - grip).abs() < 1e-12,
            "grip mismatch on lap {lap}"
        );
        assert!(
            (harness.temperature("Intermediate", lap) - temperature).abs() < 1e-12,
            "temperature mismatch on lap {lap}"
        );
        assert!(
            (harness.performance("Intermediate", lap) - performance).abs() < 1e-12,
            "performance mismatch on lap {lap}"
        );
    }
}

/// Two runs of the same scenario agree bit-for-bit.
#[test]
fn runs_are_deterministic() {
    let mut first = TestHarness::from_yaml(WET_GP_SCENARIO);
    first.run();
    let mut second = TestHarness::from_yaml(WET_GP_SCENARIO);
    second.run();

    for name in ["Intermediate", "Full Wet"] {
        assert_eq!(
            first.results().get(name).unwrap(),
            second.results().get(name).unwrap(),
            "{name} diverged between runs"
        );
    }
}

/// A full wet race: every series has race-distance length, grip only
/// falls, and the compound that clears the water outperforms the one
/// that cannot on every lap.
#[test]
fn wet_gp_series_shapes_and_ordering() {
    let mut harness = TestHarness::from_yaml(WET_GP_SCENARIO);
    harness.run();
    let results = harness.results();

    assert_eq!(results.len(), 2);
    assert_eq!(results.laps(), 50);
    let names: Vec<&str> = results.names().collect();
    assert_eq!(names, vec!["Intermediate", "Full Wet"]);

    for name in ["Intermediate", "Full Wet"] {
        let grip = results.get(name).unwrap().remaining_grip();
        assert_eq!(grip.len(), 50);
        for window in grip.windows(2) {
            assert!(window[1] <= window[0], "{name} grip increased");
        }
        assert!(grip.iter().all(|&g| g >= 0.0));
    }

    // Full Wet displaces all 0.7 wetness; Intermediate carries a 0.1
    // penalty on grip decay and on the score.
    let intermediate = results.get("Intermediate").unwrap().performance();
    let full_wet = results.get("Full Wet").unwrap().performance();
    for lap in 0..50 {
        assert!(full_wet[lap] > intermediate[lap], "lap {}", lap + 1);
    }
}

/// Temperature under constant load climbs strictly and never crosses
/// the heating/cooling equilibrium it converges to.
#[test]
fn temperature_converges_to_equilibrium() {
    use rainlap_sim::model::{COOLING_FRACTION, LOAD_HEAT_RATE};

    let mut harness = TestHarness::from_yaml(WET_GP_SCENARIO);
    harness.run();
    let temps = harness.results().get("Full Wet").unwrap().temperature();

    for window in temps.windows(2) {
        assert!(window[1] > window[0]);
    }

    let equilibrium = 15.0 + 1500.0 * LOAD_HEAT_RATE / COOLING_FRACTION;
    assert!(temps.iter().all(|&t| t < equilibrium));
    // 50 laps closes most of the 3 degree gap.
    assert!(*temps.last().unwrap() > equilibrium - 0.5);
}

/// Wear beyond the available grip floors the series at zero; the score
/// follows and temperature keeps evolving.
#[test]
fn worn_out_compound_floors_at_zero() {
    let source = r#"
apiVersion: rainlap/v1
kind: Scenario
metadata:
  name: destroyer
race:
  trackWetness: 0.4
  raceDistance: 20
  baseTemperature: 15.0
  loadPerLap: 1500.0
compounds:
  - name: Chalk
    baseGrip: 0.6
    wearRate: 0.2
    waterDisplacement: 0.4
"#;
    let mut harness = TestHarness::from_yaml(source);
    harness.run();
    let result = harness.results().get("Chalk").unwrap();

    // 0.6 grip at 0.2 wear per lap: gone after lap 3.
    assert_eq!(harness.grip("Chalk", 3), 0.0);
    assert!(result.remaining_grip()[3..].iter().all(|&g| g == 0.0));
    assert!(result.performance()[3..].iter().all(|&p| p == 0.0));
    assert!(result.temperature()[19] > result.temperature()[3]);
}

/// Invalid scenarios fail before any lap is simulated.
#[test]
fn invalid_scenarios_are_rejected() {
    let mut zero_laps = TestHarness::from_yaml(
        r#"
apiVersion: rainlap/v1
kind: Scenario
metadata:
  name: zero-laps
race:
  trackWetness: 0.5
  raceDistance: 0
  baseTemperature: 15.0
  loadPerLap: 1500.0
compounds:
  - name: Wet
    baseGrip: 1.0
    wearRate: 0.01
    waterDisplacement: 0.5
"#,
    );
    assert!(zero_laps.try_run().is_err());

    let mut duplicate = TestHarness::from_yaml(
        r#"
apiVersion: rainlap/v1
kind: Scenario
metadata:
  name: duplicates
compounds:
  - name: Wet
    baseGrip: 1.0
    wearRate: 0.01
    waterDisplacement: 0.5
  - name: Wet
    baseGrip: 0.9
    wearRate: 0.02
    waterDisplacement: 0.6
"#,
    );
    assert!(duplicate.try_run().is_err());

    let mut bald = TestHarness::from_yaml(
        r#"
apiVersion: rainlap/v1
kind: Scenario
metadata:
  name: bald
compounds:
  - name: Bald
    baseGrip: 0.0
    wearRate: 0.01
    waterDisplacement: 0.5
"#,
    );
    assert!(bald.try_run().is_err());
}

/// The full pipeline down to artifacts: run the wet GP, render JSON and
/// CSV, and read both back.
#[test]
fn renders_artifacts_for_a_finished_run() {
    use rainlap_report::{CsvSink, JsonSink, JsonSinkConfig, ReportSink, RunManifest};

    let mut harness = TestHarness::from_yaml(WET_GP_SCENARIO);
    harness.run();

    let dir = tempfile::tempdir().unwrap();

    let mut json_sink = JsonSink::new(JsonSinkConfig {
        output_dir: dir.path().join("json"),
        scenario: harness.scenario().metadata.name.clone(),
    })
    .unwrap();
    json_sink
        .render(&harness.scenario().race, harness.results())
        .unwrap();

    let manifest_path = json_sink.run_dir().join("manifest.json");
    let manifest: RunManifest =
        serde_json::from_str(&std::fs::read_to_string(manifest_path).unwrap()).unwrap();
    assert_eq!(manifest.scenario, "wet-gp");
    assert_eq!(manifest.laps, 50);
    assert_eq!(manifest.compounds, vec!["Intermediate", "Full Wet"]);

    let mut csv_sink = CsvSink::new(dir.path().join("csv")).unwrap();
    csv_sink
        .render(&harness.scenario().race, harness.results())
        .unwrap();

    for table in ["grip.csv", "temperature.csv", "performance.csv"] {
        let path = dir.path().join("csv").join(table);
        let content = std::fs::read_to_string(path).unwrap();
        // Header plus one row per lap.
        assert_eq!(content.lines().count(), 51, "{table}");
        assert!(content.starts_with("lap,Intermediate,Full Wet"));
    }
}
