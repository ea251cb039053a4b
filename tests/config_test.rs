use anyhow::Result;
use fwt_event_matcher::config::Config;
use fwt_event_matcher::MatcherError;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_from_file() -> Result<()> {
    let temp_dir = tempdir()?;
    let path = temp_dir.path().join("matcher.toml");
    fs::write(
        &path,
        r#"
[matching]
similarity_threshold = 0.5

[logging]
directory = "var/log"
file_output = false
"#,
    )?;

    let config = Config::load(Some(path.as_path()))?;
    assert_eq!(config.matching.similarity_threshold, 0.5);
    assert_eq!(config.logging.directory, "var/log");
    assert!(!config.logging.file_output);
    assert_eq!(config.logging.file_prefix, "matcher.log");

    // the lower threshold lets neighbouring venues with the same format match
    assert!(config.matcher().matches("Kappl Open Faces 2023", "Gurgl Open Faces 2023"));
    Ok(())
}

#[test]
fn test_missing_explicit_file_is_an_error() -> Result<()> {
    let temp_dir = tempdir()?;
    let path = temp_dir.path().join("absent.toml");
    assert!(matches!(Config::load(Some(path.as_path())), Err(MatcherError::Config(_))));
    Ok(())
}

#[test]
fn test_invalid_threshold_rejected_on_load() -> Result<()> {
    let temp_dir = tempdir()?;
    let path = temp_dir.path().join("matcher.toml");
    fs::write(&path, "[matching]\nsimilarity_threshold = -0.1\n")?;
    assert!(Config::load(Some(path.as_path())).is_err());
    Ok(())
}
