//! Checks on the runtime dependency set published to downstream crates.

const MANIFEST: &str = include_str!("../Cargo.toml");

/// Lines of one `[section]` of the manifest, up to the next header.
fn section(name: &str) -> Vec<&'static str> {
    let header = format!("[{name}]");
    MANIFEST
        .lines()
        .skip_while(|line| line.trim() != header)
        .skip(1)
        .take_while(|line| !line.trim_start().starts_with('['))
        .filter(|line| !line.trim().is_empty())
        .collect()
}

fn declares(lines: &[&str], krate: &str) -> bool {
    lines
        .iter()
        .any(|line| line.split('=').next().is_some_and(|key| key.trim() == krate))
}

#[test]
fn test_async_runtime_is_dev_only() {
    assert!(!declares(&section("dependencies"), "tokio"));
    assert!(declares(&section("dev-dependencies"), "tokio"));
}

#[test]
fn test_reqwest_has_no_unused_features() {
    let dependencies = section("dependencies");
    let reqwest = dependencies
        .iter()
        .find(|line| line.trim_start().starts_with("reqwest"))
        .expect("reqwest is a runtime dependency");
    assert!(!reqwest.contains("features"), "{reqwest}");
}
