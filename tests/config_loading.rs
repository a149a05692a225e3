use motifevo::config::{AppConfig, ConfigManager, ConfigSection, RecombinationConfig};
use std::io::Write;

#[test]
fn test_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("motifevo.toml");

    let manager = ConfigManager::new();
    manager
        .update(|c| {
            c.organism.pwm_length = 8;
            c.recombination.swap_probability = 0.25;
        })
        .unwrap();
    manager.save_to_file(&path).unwrap();

    let reloaded = ConfigManager::new();
    reloaded.load_from_file(&path).unwrap();
    let config = reloaded.get().unwrap();
    assert_eq!(config.organism.pwm_length, 8);
    assert_eq!(config.recombination.swap_probability, 0.25);
    assert_eq!(config.pssm.pseudocount, 0.01);
}

#[test]
fn test_partial_file_uses_defaults() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[recombination]\nmin_sigma = 0.5").unwrap();

    let manager = ConfigManager::new();
    manager.load_from_file(file.path()).unwrap();
    let config = manager.get().unwrap();
    assert_eq!(config.recombination.min_sigma, 0.5);
    assert_eq!(config.organism.max_mu, 20);
}

#[test]
fn test_environment_overrides_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[organism]\nmax_sigma = 6").unwrap();

    std::env::set_var("MOTIFEVO__ORGANISM__MAX_SIGMA", "9");
    let manager = ConfigManager::new();
    let result = manager.load_from_file(file.path());
    std::env::remove_var("MOTIFEVO__ORGANISM__MAX_SIGMA");

    result.unwrap();
    assert_eq!(manager.get().unwrap().organism.max_sigma, 9);
}

#[test]
fn test_invalid_file_rejected() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[recombination]\nswap_probability = 1.5").unwrap();

    let manager = ConfigManager::new();
    assert!(manager.load_from_file(file.path()).is_err());
    assert_eq!(manager.get().unwrap().recombination.swap_probability, 0.5);
}

#[test]
fn test_section_names() {
    assert_eq!(RecombinationConfig::section_name(), "recombination");
    assert!(AppConfig::default().validate().is_ok());
}
