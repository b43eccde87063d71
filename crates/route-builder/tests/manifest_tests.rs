//! Integration tests for TOML route manifests

use pretty_assertions::assert_eq;
use route_builder::*;
use serde_json::json;
use std::fs;
use std::path::PathBuf;

const MANIFEST: &str = r#"
guards = ["session"]

[[routes]]
path = "/"
view = "Home"
name = "home"

[[routes]]
group = "dashboard"
guards = ["auth"]

  [[routes.routes]]
  path = "home"
  view = "DashboardHome"
  views = { sidebar = "DashboardNav" }
  meta = { title = "Dashboard" }

    [[routes.routes.children]]
    group = "set"

      [[routes.routes.children.routes]]
      path = "a"

      [[routes.routes.children.routes]]
      path = "b"
      guards = ["auth"]

  [[routes.routes]]
  path = "/legacy/"
  redirect = "/dashboard/home"
  alias = ["/old", "/older"]
"#;

fn registry() -> GuardRegistry {
    GuardRegistry::new()
        .with("session", Guard::from_fn(|_, _| Ok(true)))
        .with(
            "auth",
            Guard::from_fn(|to, _from| Ok(if to.query.contains_key("token") { None } else { Some("/login") })),
        )
}

fn temp_manifest(name: &str, content: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("route-builder-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();

    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_manifest_compiles_to_route_table() {
    let scope = RouteManifest::from_toml_str(MANIFEST)
        .unwrap()
        .into_scope(&registry())
        .unwrap();

    assert_eq!(
        serde_json::to_value(scope.build()).unwrap(),
        json!([
            { "path": "/", "components": { "default": "Home" }, "name": "home" },
            {
                "path": "/dashboard/home",
                "components": { "default": "DashboardHome", "sidebar": "DashboardNav" },
                "meta": { "title": "Dashboard" },
                "children": [
                    { "path": "set/a", "components": {} },
                    { "path": "set/b", "components": {} }
                ]
            },
            {
                "path": "/dashboard/legacy",
                "components": {},
                "redirect": "/dashboard/home",
                "alias": ["/old", "/older"]
            }
        ])
    );
}

#[tokio::test]
async fn test_manifest_guards_are_resolved_by_name() {
    let scope = RouteManifest::from_toml_str(MANIFEST)
        .unwrap()
        .into_scope(&registry())
        .unwrap();
    let built = scope.build();

    // root guard applies everywhere, group guard only inside the group
    assert!(built[0].before_enter().is_some());

    let hook = built[1].before_enter().unwrap();
    let denied = hook
        .run(RouteContext::new("/dashboard/home"), RouteContext::default())
        .await
        .unwrap();
    assert_eq!(denied, Some(Verdict::Halt(GuardOutcome::redirect("/login"))));

    let allowed = hook
        .run(
            RouteContext::new("/dashboard/home").with_query("token", "abc"),
            RouteContext::default(),
        )
        .await
        .unwrap();
    assert_eq!(allowed, Some(Verdict::Proceed));

    // children start a fresh guard chain
    let children = built[1].children();
    assert!(children[0].before_enter().is_none());
    assert!(children[1].before_enter().is_some());
}

#[test]
fn test_load_manifest_from_file() {
    let path = temp_manifest("routes.toml", MANIFEST);

    let manifest = RouteManifest::load(&path).unwrap();
    assert_eq!(manifest.guards, vec!["session"]);
    assert_eq!(manifest.routes.len(), 2);

    fs::remove_file(&path).ok();
}

#[test]
fn test_load_empty_file_is_empty_manifest() {
    let path = temp_manifest("empty.toml", "  \n");

    let scope = RouteManifest::load(&path)
        .unwrap()
        .into_scope(&GuardRegistry::new())
        .unwrap();
    assert!(scope.is_empty());

    fs::remove_file(&path).ok();
}

#[test]
fn test_load_missing_file_names_the_path() {
    let err = RouteManifest::load("/nonexistent/route-builder/routes.toml").unwrap_err();
    assert!(err.to_string().contains("Failed to read route manifest"));
    assert!(err.to_string().contains("routes.toml"));
}

#[test]
fn test_load_malformed_file_keeps_cause() {
    let path = temp_manifest("broken.toml", "[[routes]\npath = ");

    let err = RouteManifest::load(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse route manifest"));
    assert!(err.downcast_ref::<RouteError>().is_some());

    fs::remove_file(&path).ok();
}

#[test]
fn test_unknown_guard_in_nested_group() {
    let manifest = RouteManifest::from_toml_str(
        r#"
        [[routes]]
        group = "admin"

          [[routes.routes]]
          path = "users"
          guards = ["staff"]
        "#,
    )
    .unwrap();

    let err = manifest.into_scope(&registry()).unwrap_err();
    assert_eq!(err.to_string(), "unknown guard `staff` on `users`");
}

#[test]
fn test_misspelled_route_option_is_an_error() {
    let manifest = RouteManifest::from_toml_str(
        r#"
        [[routes]]
        path = "/x"
        caseSensitiv = true
        "#,
    )
    .unwrap();

    let err = manifest.into_scope(&registry()).unwrap_err();
    assert_eq!(err.to_string(), "unknown key `caseSensitiv` on `/x`");
}

#[test]
fn test_known_route_options_are_not_flagged() {
    let scope = RouteManifest::from_toml_str(
        r#"
        [[routes]]
        path = "/x"
        caseSensitive = true
        props = true
        pathToRegexpOptions = { strict = true }
        "#,
    )
    .unwrap()
    .into_scope(&registry())
    .unwrap();

    assert_eq!(
        serde_json::to_value(scope.build()).unwrap(),
        json!([{
            "path": "/x",
            "components": {},
            "caseSensitive": true,
            "props": true,
            "pathToRegexpOptions": { "strict": true }
        }])
    );
}
