//! Loading configuration from disk and building the resolver from it.

use std::fs;
use std::path::PathBuf;

use iframed::config::{load_config, ConfigError, ValidationError};
use iframed::{Iframed, NamedRoutes};

fn write_config(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("iframed-{}-{}.toml", std::process::id(), name));
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_and_resolve() {
    let path = write_config(
        "valid",
        r#"
        default_base = "http://parentdomain.com"

        [[mappings]]
        internal = "/appname/viewname"
        external = "/refererpath"

        [aliases]
        "/alternative_location" = "/refererpath"

        [observability]
        metrics_enabled = false
        "#,
    );
    let config = load_config(&path).unwrap();
    fs::remove_file(&path).unwrap();

    let iframed = Iframed::from_config(&config);
    let resolution = iframed
        .resolve_inbound(Some("http://www.referer.com/alternative_location?id=/a"))
        .unwrap();
    assert_eq!(resolution.internal_path, "/appname/viewname/a");

    let routes = NamedRoutes::new().route("test", "/appname/viewname/{}");
    assert_eq!(
        iframed.reverse(&routes, "test", &["param"], None, true).unwrap(),
        "http://parentdomain.com/refererpath?id=/param"
    );
}

#[test]
fn test_invalid_file_reports_every_problem() {
    let path = write_config(
        "invalid",
        r#"
        default_base = "http://parentdomain.com/"
        script_prefix = "mounted"

        [[mappings]]
        internal = "/appname/viewname"
        external = "refererpath"
        "#,
    );
    let err = load_config(&path).unwrap_err();
    fs::remove_file(&path).unwrap();

    match err {
        ConfigError::Validation(errors) => {
            assert_eq!(errors.len(), 3);
            assert!(errors.contains(&ValidationError::InvalidScriptPrefix("mounted".into())));
        }
        other => panic!("unexpected error: {other}"),
    }
}
