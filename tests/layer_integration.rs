//! Inbound and outbound rewriting through an axum app.

use iframed::config::IframedConfig;

mod common;

const REFERER: &str = "http://www.referer.com/refererpath/?id=/viewparams/moreparams";

#[tokio::test]
async fn test_request_dispatched_on_referer_path() {
    let lines = common::get_lines(
        common::app(&common::config()),
        "/appnameignored/viewnameignored",
        Some(REFERER),
    )
    .await;
    assert_eq!(lines[0], "/appname/viewname/viewparams/moreparams");
}

#[tokio::test]
async fn test_no_sub_path_dispatches_to_prefix_root() {
    let lines = common::get_lines(
        common::app(&common::config()),
        "/appnameignored/viewnameignored",
        Some("http://www.referer.com/refererpath/"),
    )
    .await;
    assert_eq!(lines[0], "/appname/viewname/");
}

#[tokio::test]
async fn test_no_mappings_keeps_request_path() {
    let lines = common::get_lines(
        common::app(&IframedConfig::default()),
        "/appnameoriginal/viewnameoriginal",
        Some(REFERER),
    )
    .await;
    assert_eq!(lines, vec!["/appnameoriginal/viewnameoriginal".to_string()]);
}

#[tokio::test]
async fn test_unparsable_referer_keeps_request_path() {
    let lines = common::get_lines(
        common::app(&common::config()),
        "/appnameoriginal/viewnameoriginal",
        Some("refererpath/?id=/viewparams"),
    )
    .await;
    assert_eq!(lines, vec!["/appnameoriginal/viewnameoriginal".to_string()]);
}

#[tokio::test]
async fn test_aliased_referer() {
    let mut config = common::config();
    config
        .aliases
        .insert("/alternative_location".into(), "/refererpath".into());
    let referer = "http://www.referer.com/alternative_location/?id=/viewparams/moreparams";

    let lines = common::get_lines(
        common::app(&config),
        "/appnamehonoured/viewnamehonoured",
        Some(referer),
    )
    .await;
    assert_eq!(lines[0], "/appname/viewname/viewparams/moreparams");

    config.dispatch_aliased = false;
    let lines = common::get_lines(
        common::app(&config),
        "/appnamehonoured/viewnamehonoured",
        Some(referer),
    )
    .await;
    assert_eq!(lines, vec!["/appnamehonoured/viewnamehonoured".to_string()]);
}

#[tokio::test]
async fn test_explicit_query_id() {
    let mut config = common::config();
    config.query_id = "url".into();

    let lines = common::get_lines(
        common::app(&config),
        "/appnameignored/viewnameignored",
        Some("http://www.referer.com/refererpath/?url=/viewparams/moreparams"),
    )
    .await;
    assert_eq!(lines[0], "/appname/viewname/viewparams/moreparams");
    assert_eq!(lines[1], "http://www.referer.com/refererpath?url=/param");
}

#[tokio::test]
async fn test_reverse_with_referer() {
    let lines = common::get_lines(
        common::app(&common::config()),
        "/appnameignored/viewnameignored",
        Some(REFERER),
    )
    .await;
    assert_eq!(lines[1], "http://www.referer.com/refererpath?id=/param");
}

#[tokio::test]
async fn test_reverse_without_referer() {
    let lines = common::get_lines(common::app(&common::config()), "/appname/viewname/direct", None).await;
    assert_eq!(lines[0], "/appname/viewname/direct");
    assert_eq!(lines[1], "/appname/viewname/param");
    assert_eq!(lines[2], "/appname/viewname/direct");
}

#[tokio::test]
async fn test_reverse_with_rewrite_override() {
    let mut config = common::config();
    config
        .rewrites
        .insert("/appname/viewname/param".into(), "http://www.otherdomain/arbitrarypath/".into());

    let lines = common::get_lines(common::app(&config), "/ignored", Some(REFERER)).await;
    assert_eq!(lines[1], "http://www.otherdomain/arbitrarypath/");
}

#[tokio::test]
async fn test_round_trip_reproduces_referer() {
    let referer = "http://www.referer.com/refererpath?id=/viewparams/moreparams";
    let lines = common::get_lines(common::app(&common::config()), "/ignored", Some(referer)).await;
    assert_eq!(lines[0], "/appname/viewname/viewparams/moreparams");
    assert_eq!(lines[2], referer);
}

#[tokio::test]
async fn test_sub_path_with_space_is_dispatched_encoded() {
    let lines = common::get_lines(
        common::app(&common::config()),
        "/appnameignored/viewnameignored",
        Some("http://www.referer.com/refererpath/?id=/has%20space"),
    )
    .await;
    assert_eq!(lines[0], "/appname/viewname/has%20space");
}
