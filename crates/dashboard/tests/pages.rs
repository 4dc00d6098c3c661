//! Generic list and view pages.

mod common;

use std::time::Duration;

use assert_matches::assert_matches;
use eduadmin_client::transport::HttpResponse;
use serde_json::json;

use eduadmin_dashboard::pages::list::ListPage;
use eduadmin_dashboard::pages::view::{ViewPage, ViewState};

use common::{faq_json, rejected_envelope, Harness, Navigation};

#[tokio::test]
async fn search_resets_to_first_page() {
    let t = Harness::new([]);
    t.h.transport.push_json(
        200,
        json!({
            "success": true,
            "data": [faq_json("f1", "A?"), faq_json("f2", "B?")],
            "pagination": {"page": 1, "limit": 10, "total": 25, "totalPages": 3}
        }),
    );
    t.h.transport.push_ok(json!([faq_json("f11", "K?")]));
    t.h.transport.push_ok(json!([faq_json("f3", "Refund?")]));

    let mut page = ListPage::new(t.h.client.faqs(), t.ctx.clone());
    page.load().await;
    assert_eq!(page.rows().len(), 2);
    assert!(page.pagination().has_next());

    page.next_page().await;
    assert_eq!(page.query().page, 2);

    // Typing alone fetches nothing.
    page.set_search_input("refund");
    assert_eq!(t.h.transport.request_count(), 2);

    page.submit_search().await;
    let sent = t.h.transport.last_request().unwrap();
    assert_eq!(sent.query_param("search"), Some("refund"));
    assert_eq!(sent.query_param("page"), Some("1"));
    assert_eq!(page.rows()[0].question, "Refund?");
}

#[tokio::test]
async fn delete_requires_confirmation_then_reloads() {
    let t = Harness::new([false, true]);
    t.h.transport.push_ok(json!([faq_json("f1", "A?"), faq_json("f2", "B?")]));

    let mut page = ListPage::new(t.h.client.faqs(), t.ctx.clone());
    page.load().await;

    assert!(!page.delete("f1").await);
    assert_eq!(t.h.transport.request_count(), 1);

    t.h.transport.push_json(200, json!({"success": true, "message": "Deleted"}));
    t.h.transport.push_ok(json!([faq_json("f2", "B?")]));
    assert!(page.delete("f1").await);

    assert_eq!(
        t.confirm.prompts(),
        vec![
            "Are you sure you want to delete this faq?",
            "Are you sure you want to delete this faq?"
        ]
    );
    assert_eq!(t.successes(), vec!["FAQ deleted successfully"]);
    assert_eq!(page.position("f1"), None);
    assert_eq!(page.position("f2"), Some(0));
}

#[tokio::test]
async fn list_navigation_targets() {
    let t = Harness::new([]);
    let page = ListPage::new(t.h.client.courses(), t.ctx.clone());

    page.create_new();
    page.open("c1");
    page.edit("c1");

    assert_eq!(
        t.h.navigator.history(),
        vec![
            Navigation::Push("/courses/new".into()),
            Navigation::Push("/courses/c1".into()),
            Navigation::Push("/courses/c1/edit".into()),
        ]
    );
}

#[tokio::test]
async fn view_reports_missing_record() {
    let t = Harness::new([]);
    t.h.transport.push_json(404, rejected_envelope("FAQ not found"));

    let mut page = ViewPage::new(t.h.client.faqs(), t.ctx.clone(), "gone");
    page.load().await;

    assert_matches!(page.state(), ViewState::NotFound(msg) if msg == "FAQ not found");
    assert!(page.record().is_none());
    assert!(t.failures().is_empty());
}

#[tokio::test]
async fn view_delete_returns_to_list() {
    let t = Harness::new([true]);
    t.h.transport.push_ok(faq_json("f1", "Refunds?"));
    t.h.transport.push_json(200, json!({"success": true}));

    let mut page = ViewPage::new(t.h.client.faqs(), t.ctx.clone(), "f1");
    page.load().await;
    assert_eq!(page.record().unwrap().question, "Refunds?");

    assert!(page.delete().await);
    assert_eq!(t.last_navigation(), Some(Navigation::Push("/faqs".into())));
}

#[tokio::test(start_paused = true)]
async fn closed_page_ignores_late_response() {
    let t = Harness::new([]);
    t.h.transport.push_delayed(
        HttpResponse::new(200, json!({"success": true, "data": [faq_json("f1", "A?")]}).to_string()),
        Duration::from_secs(3),
    );

    let mut page = ListPage::new(t.h.client.faqs(), t.ctx.clone());
    let scope = page.scope().clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(1)).await;
        scope.close();
    });

    page.load().await;

    assert!(page.rows().is_empty());
    assert!(!page.is_loading());
    assert!(t.failures().is_empty());
}
