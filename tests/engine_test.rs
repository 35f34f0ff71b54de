use numbench::core::series::calculate;
use numbench::{BenchEngine, SeriesParams, SeriesWorkload, SubarrayParams, SubarrayWorkload};

#[test]
fn test_engine_scales_series_result() {
    let params = SeriesParams {
        iterations: 1,
        ..SeriesParams::default()
    };
    let mut engine = BenchEngine::new(SeriesWorkload::new(params));
    let mut out = Vec::new();
    let measurement = engine.run_and_report(&mut out).unwrap();

    assert_eq!(measurement.value, calculate(1, 4, 1) * 4.0);
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Result: 3.466666666667\n"));
    assert!(text.lines().nth(1).unwrap().starts_with("Execution Time: "));
}

#[test]
fn test_engine_zero_iterations_reports_scale() {
    let params = SeriesParams {
        iterations: 0,
        ..SeriesParams::default()
    };
    let mut engine = BenchEngine::new(SeriesWorkload::new(params));
    let measurement = engine.run();

    assert_eq!(measurement.value, 4.0);
    assert!(measurement.elapsed_secs() > 0.0);
    assert!(measurement.elapsed_secs().is_finite());
}

#[test]
fn test_monitored_engine_produces_same_value() {
    let params = SubarrayParams {
        n: 100,
        ..SubarrayParams::default()
    };
    let plain = BenchEngine::new(SubarrayWorkload::new(params)).run();
    let monitored = BenchEngine::new_with_monitoring(SubarrayWorkload::new(params), true).run();

    assert_eq!(plain.value, Some(2102));
    assert_eq!(plain.value, monitored.value);
}
