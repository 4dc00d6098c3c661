//! Route guards and the composition root.

use std::sync::Arc;

use assert_matches::assert_matches;

use eduadmin_client::config::ClientConfig;
use eduadmin_client::navigation::Navigator;
use eduadmin_client::storage::MemoryStore;
use eduadmin_client::testing::{user_with_role, RecordingNavigator, ScriptedTransport, TEST_BASE_URL};
use eduadmin_core::error::CoreError;
use eduadmin_dashboard::app::{App, LocationNavigator};
use eduadmin_dashboard::pages::confirm::FixedAnswer;
use eduadmin_dashboard::shell::routes::{
    require_staff, resolve, PageKind, Route, RouteDecision, Section, Visitor,
};

fn redirect(to: &str) -> RouteDecision {
    RouteDecision::Redirect(to.to_string())
}

#[test]
fn anonymous_visitors_go_to_login() {
    let visitor = Visitor::anonymous();
    assert_eq!(resolve("/login", &visitor), RouteDecision::Render(Route::Login));
    assert_eq!(resolve("/dashboard", &visitor), redirect("/login"));
    assert_eq!(resolve("/leads", &visitor), redirect("/login"));
    assert_eq!(resolve("/courses", &visitor), redirect("/login"));
}

#[test]
fn signed_in_visitors_skip_login() {
    let visitor = Visitor::signed_in(user_with_role("sales"));
    assert_eq!(resolve("/login", &visitor), redirect("/dashboard"));
}

#[test]
fn sales_role_is_kept_out_of_content_sections() {
    let visitor = Visitor::signed_in(user_with_role("sales"));
    assert_eq!(resolve("/leads/l1", &visitor), RouteDecision::Render(Route::LeadView("l1".into())));
    assert_eq!(
        resolve("/sales-tools/fee-calculator", &visitor),
        RouteDecision::Render(Route::SalesTool("fee-calculator".into()))
    );
    assert_eq!(resolve("/courses/new", &visitor), redirect("/dashboard"));
    assert_eq!(resolve("/trainers/t1/calendar", &visitor), redirect("/dashboard"));
    assert_matches!(require_staff(&visitor), Err(CoreError::Forbidden(_)));
}

#[test]
fn staff_roles_reach_everything() {
    for role in ["admin", "manager"] {
        let visitor = Visitor::signed_in(user_with_role(role));
        assert_eq!(
            resolve("/refer-partners/p1/edit", &visitor),
            RouteDecision::Render(Route::Resource(
                Section::ReferPartners,
                PageKind::Edit("p1".into())
            ))
        );
    }
}

#[test]
fn token_without_profile_is_not_staff() {
    let visitor = Visitor {
        authenticated: true,
        user: None,
    };
    assert_eq!(
        resolve("/dashboard", &visitor),
        RouteDecision::Render(Route::Dashboard)
    );
    assert_eq!(resolve("/videos", &visitor), redirect("/dashboard"));
}

#[test]
fn unknown_paths_are_not_found() {
    let visitor = Visitor::signed_in(user_with_role("admin"));
    assert_eq!(resolve("/settings", &visitor), RouteDecision::NotFound);
    assert_eq!(resolve("/courses/c1/edit/more", &visitor), RouteDecision::NotFound);
}

#[tokio::test]
async fn app_resolves_against_stored_session() {
    let store = Arc::new(MemoryStore::new());
    let navigator = Arc::new(RecordingNavigator::new());
    let app = App::with_parts(
        ClientConfig::new(TEST_BASE_URL),
        store,
        Arc::new(ScriptedTransport::new()),
        navigator,
        Arc::new(FixedAnswer(true)),
    );

    assert_eq!(app.resolve("/faqs"), redirect("/login"));

    app.client
        .session()
        .sign_in("token", &user_with_role("manager"));
    assert_eq!(
        app.resolve("/faqs"),
        RouteDecision::Render(Route::Resource(Section::Faqs, PageKind::List))
    );
}

#[test]
fn location_navigator_tracks_last_move() {
    let navigator = LocationNavigator::new("/dashboard");
    navigator.navigate("/courses");
    assert_eq!(navigator.current(), "/courses");
    navigator.hard_redirect("/login");
    assert_eq!(navigator.current(), "/login");
}
