//! Configuration loading integration tests

use std::io::Write;

use diaglab_config::{ConfigLoader, DiaglabConfig, LogLevel};

#[test]
fn default_config_validates() {
    assert!(DiaglabConfig::default().validate().is_ok());
}

#[test]
fn yaml_round_trip_preserves_every_domain() {
    let config = DiaglabConfig::default();
    let yaml = serde_yaml::to_string(&config).unwrap();

    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let loaded = ConfigLoader::new().from_file(file.path()).unwrap();
    assert_eq!(loaded.http.bind_address, config.http.bind_address);
    assert_eq!(
        loaded.engine.deadlock.amplification_threads,
        config.engine.deadlock.amplification_threads
    );
    assert_eq!(
        loaded.engine.spike.high_plateau,
        config.engine.spike.high_plateau
    );
}

#[test]
fn partial_yaml_keeps_defaults_elsewhere() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(
        file,
        "engine:\n  deadlock:\n    amplification_threads: 12\nhttp:\n  bind_address: \"0.0.0.0:9000\""
    )
    .unwrap();

    let config = ConfigLoader::new().from_file(file.path()).unwrap();
    assert_eq!(config.engine.deadlock.amplification_threads, 12);
    assert_eq!(config.http.bind_address, "0.0.0.0:9000");
    assert_eq!(config.engine.leak.records_per_kb, 10);
    assert_eq!(config.logging.level, LogLevel::Info);
}

#[test]
fn invalid_values_are_rejected_at_load_time() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(file, "engine:\n  spike:\n    burst_records: 0").unwrap();

    assert!(ConfigLoader::new().from_file(file.path()).is_err());
}

#[test]
fn env_overrides_win_over_file_values() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(file, "http:\n  bind_address: \"127.0.0.1:7000\"").unwrap();

    temp_env::with_var("DIAGLAB_BIND_ADDRESS", Some("127.0.0.1:7001"), || {
        let config = ConfigLoader::new().from_file(file.path()).unwrap();
        assert_eq!(config.http.bind_address, "127.0.0.1:7001");
    });
}
