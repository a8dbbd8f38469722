//! Tests for options loaded from TOML.

use ::url::Url;
use url_relation::*;

fn parse(url: &str) -> Url {
    Url::parse(url).unwrap()
}

#[test]
fn test_full_document() {
    let options = options_from_toml(
        r#"
        profile = "careful"
        ignore_www = true
        ignore_query_names = true
        query_names = ["sessionid", { regex = "^utm_" }]
        index_filenames = ["index.html", { regex = "^default\\.[a-z]+$" }]
        ignore_index_filename = true
        target_component = "path"

        [default_ports]
        "http:" = 80
        "#,
    )
    .unwrap();

    let url1 = parse("http://www.domain.com/dir/default.aspx?utm_source=x&page=2&sessionid=1#top");
    let url2 = parse("http://domain.com/dir/?page=2#bottom");

    // Hash differs but the target stops at path
    assert!(UrlRelation::matches(&url1, &url2, Some(&options)).unwrap());

    let relation = UrlRelation::new(&url1, &url2, Some(&options)).unwrap();
    assert!(!relation.up_to(Some(Component::Hash), &[]).unwrap());
}

#[test]
fn test_profile_fills_unset_keys() {
    let careful = options_from_toml(r#"profile = "careful""#).unwrap();
    let defaults = options_from_toml("").unwrap();

    let url1 = parse("http://www.domain.com/");
    let url2 = parse("http://domain.com/");

    assert!(!UrlRelation::matches(&url1, &url2, Some(&careful)).unwrap());
    assert!(UrlRelation::matches(&url1, &url2, Some(&defaults)).unwrap());
}

#[test]
fn test_components_list() {
    let options = options_from_toml(
        r#"
        components = ["protocol", "port"]
        ignore_components = true
        "#,
    )
    .unwrap();

    let url1 = parse("http://www.domain.com:1234/dir/file.html?query#hash");
    let url2 = parse("https://www.domain.com/dir/file.html?query#hash");
    assert!(UrlRelation::matches(&url1, &url2, Some(&options)).unwrap());

    let options = options_from_toml(
        r#"
        components = ["protocol", "port"]
        ignore_components = false
        "#,
    )
    .unwrap();
    assert!(!UrlRelation::matches(&url1, &url2, Some(&options)).unwrap());
}

#[test]
fn test_invalid_component_name() {
    let error = options_from_toml(r#"components = ["protocol", "scheme"]"#).unwrap_err();

    match error {
        ConfigError::Component(RelationError::InvalidComponent(name)) => assert_eq!(name, "scheme"),
        other => panic!("Expected invalid component, got {:?}", other),
    }
}

#[test]
fn test_wrong_value_type() {
    let error = options_from_toml("ignore_www = \"yes\"").unwrap_err();
    assert!(matches!(error, ConfigError::Parse(_)));
    assert!(error.to_string().starts_with("Invalid options file"));
}
