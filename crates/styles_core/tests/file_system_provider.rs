use std::fs;
use std::path::Path;
use styles_core::format;
use styles_core::{
    build_provider, FileSystemStyleProvider, ProviderConfig, StyleError, StyleProvider,
};

const STREETS_JSON: &str = r#"{"version": 8, "name": "streets", "layers": []}"#;
const STREETS_SLD: &str = "<StyledLayerDescriptor version=\"1.0.0\"/>";

fn write_fixture(dir: &Path) {
    fs::write(dir.join("streets.json"), STREETS_JSON).expect("write mapbox stylesheet");
    fs::create_dir_all(dir.join("sld")).expect("create sld dir");
    fs::write(dir.join("sld").join("streets.sld"), STREETS_SLD).expect("write sld stylesheet");
}

fn provider_for(dir: &Path) -> FileSystemStyleProvider {
    let config = serde_json::json!({
        "provider": "file_system",
        "server_url": "https://maps.example.com",
        "base_dir": dir,
        "styles": [
            {
                "id": "streets",
                "title": "Streets",
                "stylesheets": [
                    { "type": "mapbox", "path": "streets.json", "native": true },
                    { "type": "sld10", "path": "sld/streets.sld" },
                    { "type": "se11", "path": "missing.se" }
                ]
            }
        ]
    });
    let config = ProviderConfig::from_json_str(&config.to_string()).expect("config should parse");
    FileSystemStyleProvider::from_config(&config).expect("provider should build")
}

#[test]
fn reads_stylesheet_relative_to_base_dir() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_fixture(dir.path());
    let provider = provider_for(dir.path());

    let mapbox = provider
        .get_style_definition("streets", format::FORMAT_MAPBOX)
        .expect("read should succeed");
    assert_eq!(mapbox.as_deref(), Some(STREETS_JSON));

    let sld = provider
        .get_style_definition("streets", format::FORMAT_SLD10)
        .expect("read should succeed");
    assert_eq!(sld.as_deref(), Some(STREETS_SLD));
}

#[test]
fn unknown_style_or_unconfigured_format_is_absent() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_fixture(dir.path());
    let provider = provider_for(dir.path());

    assert!(provider
        .get_style_definition("unknown", format::FORMAT_MAPBOX)
        .expect("unknown style is not an error")
        .is_none());
    assert!(provider
        .get_style_definition("streets", "qml")
        .expect("unconfigured format is not an error")
        .is_none());
}

#[test]
fn missing_file_is_absent() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_fixture(dir.path());
    let provider = provider_for(dir.path());

    assert!(provider
        .get_style_definition("streets", format::FORMAT_SE11)
        .expect("missing file is not an error")
        .is_none());
}

#[test]
fn file_deleted_after_construction_is_absent() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_fixture(dir.path());
    let provider = provider_for(dir.path());

    fs::remove_file(dir.path().join("streets.json")).expect("remove stylesheet");
    assert!(provider
        .get_style_definition("streets", format::FORMAT_MAPBOX)
        .expect("deleted file is not an error")
        .is_none());
}

#[test]
fn unreadable_path_propagates_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_fixture(dir.path());
    fs::create_dir_all(dir.path().join("dir.json")).expect("create directory stylesheet");

    let config = serde_json::json!({
        "server_url": "https://maps.example.com",
        "base_dir": dir.path(),
        "styles": [{
            "id": "broken",
            "stylesheets": [{ "type": "mapbox", "path": "dir.json" }]
        }]
    });
    let config = ProviderConfig::from_json_str(&config.to_string()).expect("config should parse");
    let provider = FileSystemStyleProvider::from_config(&config).expect("provider should build");

    let err = provider
        .get_style_definition("broken", format::FORMAT_MAPBOX)
        .expect_err("reading a directory must surface as an error");
    assert!(matches!(err, StyleError::Io { .. }));
}

#[test]
fn without_base_dir_paths_are_used_as_configured() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_fixture(dir.path());
    let absolute = dir.path().join("streets.json");

    let config = serde_json::json!({
        "server_url": "https://maps.example.com",
        "styles": [{
            "id": "streets",
            "stylesheets": [{ "type": "mapbox", "path": absolute }]
        }]
    });
    let config = ProviderConfig::from_json_str(&config.to_string()).expect("config should parse");
    let provider = build_provider(&config).expect("provider should build");

    let content = provider
        .get_style_definition("streets", format::FORMAT_MAPBOX)
        .expect("read should succeed");
    assert_eq!(content.as_deref(), Some(STREETS_JSON));
}

#[test]
fn link_format_code_resolves_to_same_definition() {
    let dir = tempfile::tempdir().expect("temp dir");
    write_fixture(dir.path());
    let provider = provider_for(dir.path());

    let entry = provider.get_style("streets").expect("style should be listed");
    for link in entry.stylesheet_links() {
        let (_, code) = link.href.split_once("?f=").expect("href should carry format code");
        let descriptor = format::from_format_code(code).expect("code should be registered");

        let via_link = provider
            .get_style_definition("streets", descriptor.tag)
            .expect("read should not fail");
        let direct = provider
            .style_definition_path("streets", descriptor.tag)
            .map(|path| fs::read_to_string(path).expect("direct read"));
        assert_eq!(via_link, direct);
    }
}

#[test]
fn preview_is_unsupported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let provider = provider_for(dir.path());
    let err = provider
        .get_style_preview("streets")
        .expect_err("preview must be unsupported");
    assert!(matches!(err, StyleError::Unsupported(_)));
}
