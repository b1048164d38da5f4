use isa_golden::config::Config;
use isa_golden::executor::Backend;
use isa_golden::suites;

fn run_all(config: &Config) -> Vec<isa_golden::Summary> {
    let executor = config.executor();
    suites::run_suites(&config.suites, executor.as_ref(), config.stop_on_fail).unwrap()
}

#[test]
fn soft_golden_suites() {
    let summaries = run_all(&Config::default());
    assert_eq!(summaries.len(), suites::names().len());
    for s in summaries.iter() {
        println!("{}: passed {} failed {} skipped {}", s.suite, s.passed, s.failed, s.skipped);
        assert!(s.mismatches.is_empty(), "{}: {:x?}", s.suite, s.mismatches);
    }
    assert_eq!(suites::exit_code(&summaries), 0);
}

#[test]
fn host_golden_suites() {
    let config = Config {
        backend: Backend::Host,
        ..Config::default()
    };
    let summaries = run_all(&config);
    //native integer saturation always agrees
    for s in summaries.iter().filter(|s| s.suite.starts_with("sat.")) {
        assert_eq!((s.failed, s.skipped), (0, 0), "{}", s.suite);
    }
    assert!(summaries.iter().any(|s| s.passed > 0));
    assert!(summaries.iter().any(|s| s.skipped > 0));
}

#[test]
fn configured_suites() {
    let config = Config::parse(r#"{"suites": ["sat.e32", "fpu.compare"], "stop_on_fail": true}"#).unwrap();
    let summaries = run_all(&config);
    assert_eq!(summaries.iter().map(|s| s.suite.as_str()).collect::<Vec<_>>(), vec!["sat.e32", "fpu.compare"]);
    assert_eq!(suites::exit_code(&summaries), 0);
}
