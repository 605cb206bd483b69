use std::sync::Mutex;

use tempfile::NamedTempFile;

use percept_kernel::config::PerceptdConfig;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn clear_env() {
    for key in [
        "PERCEPT_CONFIG",
        "PERCEPT_SOURCE_LOCATOR",
        "PERCEPT_SCORER_BACKEND",
        "PERCEPT_REPORT_SINK",
        "PERCEPT_TARGET_FPS",
        "PERCEPT_MAX_ITERATIONS",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn defaults_resolve_without_file_or_env() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let cfg = PerceptdConfig::load().expect("load defaults");

    assert_eq!(cfg.source.locator, "pattern://ramp");
    assert_eq!(cfg.scorer.backend, "checksum");
    assert_eq!(cfg.report.sink, "log");
    assert_eq!(cfg.rate.target_fps, 10);
    assert_eq!(cfg.rate.max_iterations, None);

    clear_env();
}

#[test]
fn loads_config_from_file_and_env_overrides() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let mut file = NamedTempFile::new().expect("temp config");
    let json = r#"{
        "source": {
            "locator": "pattern://ramp"
        },
        "scorer": {
            "backend": "checksum"
        },
        "report": {
            "sink": "jsonl"
        },
        "rate": {
            "target_fps": 24,
            "max_iterations": 100
        }
    }"#;
    std::io::Write::write_all(&mut file, json.as_bytes()).expect("write config");

    std::env::set_var("PERCEPT_CONFIG", file.path());
    std::env::set_var("PERCEPT_TARGET_FPS", "12");

    let cfg = PerceptdConfig::load().expect("load config");

    assert_eq!(cfg.source.locator, "pattern://ramp");
    assert_eq!(cfg.scorer.backend, "checksum");
    assert_eq!(cfg.report.sink, "jsonl");
    assert_eq!(cfg.rate.target_fps, 12);
    assert_eq!(cfg.rate.max_iterations, Some(100));

    clear_env();
}

#[test]
fn zero_frame_rate_is_rejected() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    std::env::set_var("PERCEPT_TARGET_FPS", "0");
    assert!(PerceptdConfig::load().is_err());

    clear_env();
}

#[test]
fn unknown_sink_is_rejected() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    std::env::set_var("PERCEPT_REPORT_SINK", "mqtt");
    assert!(PerceptdConfig::load().is_err());

    clear_env();
}

#[test]
fn non_numeric_iteration_bound_is_rejected() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    std::env::set_var("PERCEPT_MAX_ITERATIONS", "forever");
    assert!(PerceptdConfig::load().is_err());

    clear_env();
}
