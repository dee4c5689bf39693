//! Integration tests for `Serve Ad` bootstrap and navigation.
//!
//! These tests verify end-to-end workflows including:
//! - Bootstrap against a fake page (anchor present / absent, double mount)
//! - Navigation through the static route table over an in-memory history
//! - Not-found handling under both fallback policies

use serve_ad_core::{
    AppConfig, AppContext, AppRouter, Application, Error, FallbackPolicy, History, MemoryHistory,
    MountHost, NavigationKind, NavigationTarget, NotFoundReason, Outlet, PlayerOptions,
    Resolution, Result, View, bootstrap,
};

// =============================================================================
// Test Fixtures and Utilities
// =============================================================================

/// A fake page with a fixed set of element ids.
struct FakePage {
    ids: Vec<&'static str>,
    /// `(anchor id, context)` for every render call.
    renders: Vec<(String, AppContext)>,
}

impl FakePage {
    fn with_ids(ids: &[&'static str]) -> Self {
        Self {
            ids: ids.to_vec(),
            renders: Vec::new(),
        }
    }
}

impl MountHost for FakePage {
    type Anchor = String;

    fn find_anchor(&self, selector: &str) -> Option<String> {
        let id = selector.strip_prefix('#')?;
        self.ids.iter().any(|i| *i == id).then(|| id.to_string())
    }

    fn render(&mut self, anchor: String, context: AppContext) -> Result<()> {
        self.renders.push((anchor, context));
        Ok(())
    }
}

/// Route `tracing` output to the test writer; `RUST_LOG` filters it.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Bootstrap against a page that has `#app`, returning the router capability.
fn mounted_router(config: &AppConfig) -> (Application, FakePage, AppRouter) {
    init_tracing();
    let mut page = FakePage::with_ids(&["app"]);
    let app = bootstrap(config, &mut page).expect("Should bootstrap");
    let router = app
        .capabilities()
        .require::<AppRouter>()
        .expect("Router should be installed")
        .clone();
    (app, page, router)
}

// =============================================================================
// Bootstrap
// =============================================================================

#[test]
fn test_bootstrap_renders_once_into_app_anchor() {
    let (app, page, _) = mounted_router(&AppConfig::default());

    assert!(app.is_mounted());
    assert_eq!(page.renders.len(), 1);
    let (anchor, context) = &page.renders[0];
    assert_eq!(anchor, "app");
    assert_eq!(context.root_component, "App");
    assert!(context.capabilities.contains::<AppRouter>());
    assert!(context.capabilities.contains::<PlayerOptions>());
}

#[test]
fn test_bootstrap_fails_without_anchor() {
    let mut page = FakePage::with_ids(&["root"]);
    let err = bootstrap(&AppConfig::default(), &mut page).expect_err("Should fail");
    assert!(matches!(err, Error::MissingAnchor(_)));
    assert!(page.renders.is_empty());
}

#[test]
fn test_second_mount_on_same_anchor_rejected() {
    let (mut app, mut page, _) = mounted_router(&AppConfig::default());
    let err = app.mount(&mut page, "#app").expect_err("Should reject");
    assert!(matches!(err, Error::AlreadyMounted(_)));
    assert_eq!(page.renders.len(), 1);
}

#[test]
fn test_player_capability_reaches_every_view() {
    let config = AppConfig {
        player: PlayerOptions::default().with_poster("/serve_ad/poster.png"),
        ..Default::default()
    };
    let (_, page, _) = mounted_router(&config);
    let options = page.renders[0]
        .1
        .capabilities
        .require::<PlayerOptions>()
        .expect("Player options should be installed");
    assert_eq!(options.poster.as_deref(), Some("/serve_ad/poster.png"));
}

// =============================================================================
// Navigation
// =============================================================================

#[test]
fn test_show_uuid_end_to_end() {
    let (_, _, router) = mounted_router(&AppConfig::default());
    let mut history = MemoryHistory::new("/serve_ad/");

    let initial = router.sync(&mut history).expect("Should sync");
    assert_eq!(initial.resolution.component(), Some(&View::Origin));

    let nav = router.push(&mut history, "/show_uuid").expect("Should navigate");
    assert_eq!(nav.resolution.route_name(), Some("ShowUUID"));
    assert_eq!(nav.resolution.component(), Some(&View::ShowUuid));
    assert_eq!(nav.href, "/serve_ad/show_uuid");
    assert_eq!(history.location(), "/serve_ad/show_uuid");
}

#[test]
fn test_every_declared_path_resolves_exactly_once() {
    let (_, _, router) = mounted_router(&AppConfig::default());
    for view in View::ALL {
        let href = format!("/serve_ad{}", view.path());
        let resolution = router.resolve_href(&href);
        assert_eq!(resolution.component(), Some(&view), "{href}");
        let matching = router
            .table()
            .iter()
            .filter(|r| r.pattern.matches(resolution.location()).is_some())
            .count();
        assert_eq!(matching, 1, "{href}");
    }
}

#[test]
fn test_links_are_prefixed() {
    let (_, _, router) = mounted_router(&AppConfig::default());
    for view in View::ALL {
        let href = router
            .href(&NavigationTarget::named(view.route_name()))
            .expect("Should build href");
        assert!(href.starts_with("/serve_ad/"), "{href}");
    }
    assert_eq!(
        router.href(&"/".into()).expect("Should build href"),
        "/serve_ad/"
    );
}

#[test]
fn test_unprefixed_location_does_not_resolve() {
    let (_, _, router) = mounted_router(&AppConfig::default());
    let mut history = MemoryHistory::new("/show_uuid");
    let nav = router.sync(&mut history).expect("Should sync");
    assert!(matches!(
        nav.resolution,
        Resolution::NotFound {
            reason: NotFoundReason::OutsideBase,
            ..
        }
    ));
}

#[test]
fn test_nonexistent_renders_not_found_once() {
    let (_, _, router) = mounted_router(&AppConfig::default());
    let mut history = MemoryHistory::new("/serve_ad/");

    let nav = router.push(&mut history, "/nonexistent").expect("Should navigate");
    assert!(nav.resolution.is_not_found());
    assert_eq!(nav.kind, NavigationKind::Pushed);
    assert_eq!(history.entries(), ["/serve_ad/", "/serve_ad/nonexistent"]);

    // Repeating the navigation does not render again.
    let again = router.push(&mut history, "/nonexistent").expect("Should navigate");
    assert!(!again.changes_view());
    assert_eq!(history.len(), 2);
}

#[test]
fn test_nonexistent_redirects_once() {
    let config = AppConfig {
        not_found: FallbackPolicy::RedirectToDefault,
        ..Default::default()
    };
    let (_, _, router) = mounted_router(&config);
    let mut history = MemoryHistory::new("/serve_ad/show_uuid");

    let nav = router.push(&mut history, "/nonexistent").expect("Should navigate");
    assert_eq!(nav.resolution.component(), Some(&View::Origin));
    assert!(matches!(nav.kind, NavigationKind::Redirected { .. }));
    assert_eq!(history.entries(), ["/serve_ad/show_uuid", "/serve_ad/"]);
}

#[test]
fn test_back_and_forward_resync() {
    let (_, _, router) = mounted_router(&AppConfig::default());
    let mut history = MemoryHistory::new("/serve_ad/");
    router
        .push(&mut history, "/register_device")
        .expect("Should navigate");
    router
        .push(&mut history, NavigationTarget::named("FullCalendar"))
        .expect("Should navigate");

    history.back().expect("Should go back");
    let nav = router.sync(&mut history).expect("Should sync");
    assert_eq!(nav.resolution.component(), Some(&View::RegisterDevice));

    history.forward().expect("Should go forward");
    let nav = router.sync(&mut history).expect("Should sync");
    assert_eq!(nav.resolution.component(), Some(&View::FullCalendar));
}

#[test]
fn test_playlist_hash_link_keeps_player_mounted() {
    let (_, _, router) = mounted_router(&AppConfig::default());
    let mut history = MemoryHistory::new("/serve_ad/video_playlist");

    let nav = router
        .push(&mut history, "/video_playlist#now")
        .expect("Should navigate");
    assert_eq!(nav.kind, NavigationKind::Pushed);
    assert!(!nav.changes_view());
    assert_eq!(
        nav.resolution.outlet(),
        Outlet::Route {
            name: "FullCalendar".to_string(),
            component: View::FullCalendar,
        }
    );
    assert_eq!(history.location(), "/serve_ad/video_playlist#now");
}

#[test]
fn test_base_without_trailing_slash_is_origin() {
    let (_, _, router) = mounted_router(&AppConfig::default());
    let mut history = MemoryHistory::new("/serve_ad");

    let initial = router.sync(&mut history).expect("Should sync");
    assert_eq!(initial.resolution.component(), Some(&View::Origin));

    let nav = router.push(&mut history, "/").expect("Should navigate");
    assert_eq!(nav.kind, NavigationKind::Duplicate);
    assert!(!nav.changes_view());
    assert_eq!(history.entries(), ["/serve_ad"]);
}

#[test]
fn test_query_and_hash_survive_navigation() {
    let (_, _, router) = mounted_router(&AppConfig::default());
    let mut history = MemoryHistory::new("/serve_ad/");
    let nav = router
        .push(&mut history, "/video_playlist?day=2024-05-01#now")
        .expect("Should navigate");
    assert_eq!(nav.href, "/serve_ad/video_playlist?day=2024-05-01#now");
    assert_eq!(nav.resolution.component(), Some(&View::FullCalendar));
}
