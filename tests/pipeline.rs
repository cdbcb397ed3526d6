//! End-to-end tests for audit_site against local mock websites.
//!
//! Every site here is served by wiremock on 127.0.0.1, so the tests never
//! touch the real internet.

use std::time::Duration;

use copy_auditor::audit::{Severity, ViolationType};
use copy_auditor::{audit_site, AuditConfig, AuditError, AuditOutcome, AuditResponse};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LONG_SENTENCE: &str = "Our small team of designers and engineers spends every single day \
    thinking about how to make the tools you rely on faster, friendlier and more reliable, \
    because we believe that good software should quietly get out of your way and let you \
    focus on the work that matters most to you.";

fn html_page(title: &str, body: &str) -> String {
    format!(
        "<html><head><title>{}</title></head><body>\
         <nav><a href=\"/\">Home</a><p>Navigation text that is long enough to count</p></nav>\
         {}\
         <footer><p>Copyright 2024 Example Company, all rights reserved.</p></footer>\
         </body></html>",
        title, body
    )
}

async fn mount_page(server: &MockServer, route: &str, html: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_raw(html, "text/html; charset=utf-8"))
        .mount(server)
        .await;
}

fn test_config() -> AuditConfig {
    AuditConfig {
        subpage_timeout: Duration::from_millis(500),
        probe_timeout: Duration::from_millis(500),
        ..AuditConfig::default()
    }
}

/// A homepage linking to /about, /pricing and /slow (which never answers in time)
async fn marketing_site() -> MockServer {
    let server = MockServer::start().await;

    let homepage = html_page(
        "Example",
        &format!(
            "<main>\
             <h1>Tools that get out of your way</h1>\
             <p>{}</p>\
             <p>Every feature was designed with small teams in mind.</p>\
             <p>Start a free trial today and see the difference yourself.</p>\
             <a href=\"/about\">About</a> <a href=\"/pricing\">Pricing</a> <a href=\"/slow\">Slow</a>\
             <a href=\"https://other.example.com/page\">Partner</a>\
             </main>",
            LONG_SENTENCE
        ),
    );
    mount_page(&server, "/", homepage).await;

    mount_page(
        &server,
        "/about",
        html_page(
            "About",
            "<article><h2>Founded by people who love writing</h2>\
             <p>The company was started in a garage by two friends.</p></article>",
        ),
    )
    .await;

    mount_page(
        &server,
        "/pricing",
        html_page(
            "Pricing",
            "<main><h2>Simple pricing for every team size</h2>\
             <p>All plans are billed monthly and can be cancelled anytime.</p></main>",
        ),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(html_page("Slow", "<p>This page answers far too late.</p>"), "text/html")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    server
}

fn completed(outcome: AuditOutcome) -> copy_auditor::AuditResult {
    match outcome {
        AuditOutcome::Completed(result) => result,
        other => panic!("expected a completed audit, got {:?}", other),
    }
}

#[tokio::test]
async fn test_audit_isolates_slow_subpage() {
    let server = marketing_site().await;

    let outcome = audit_site(&server.uri(), &test_config()).await.unwrap();
    let result = completed(outcome);

    // Homepage + /about + /pricing; /slow timed out and was dropped
    assert_eq!(result.summary.pages_crawled, 3);

    let home = format!("{}/", server.uri());
    assert_eq!(result.violations[0].kind, ViolationType::LongSentence);
    assert_eq!(result.violations[0].severity, Severity::High);
    assert_eq!(result.violations[0].page, home);

    let passive_pages: Vec<&str> = result
        .violations
        .iter()
        .filter(|v| v.kind == ViolationType::PassiveVoice)
        .map(|v| v.page.as_str())
        .collect();
    assert_eq!(
        passive_pages,
        vec![
            home.clone(),
            format!("{}/about", server.uri()),
            format!("{}/pricing", server.uri()),
        ]
    );

    assert_eq!(result.summary.total_violations, 4);
    assert_eq!(
        result.summary.top_issues,
        vec![ViolationType::LongSentence, ViolationType::PassiveVoice]
    );

    // Nothing from navigation or footers, and nothing cross-origin
    assert!(result.violations.iter().all(|v| !v.text.contains("Copyright")));
    assert!(result
        .violations
        .iter()
        .all(|v| v.page.starts_with(&server.uri())));
}

#[tokio::test]
async fn test_audit_is_idempotent() {
    let server = marketing_site().await;
    let config = test_config();

    let first = audit_site(&server.uri(), &config).await.unwrap();
    let second = audit_site(&server.uri(), &config).await.unwrap();
    assert_eq!(first, second);

    let first_json = serde_json::to_string(&AuditResponse::from_result(Ok(first))).unwrap();
    let second_json = serde_json::to_string(&AuditResponse::from_result(Ok(second))).unwrap();
    assert_eq!(first_json, second_json);
}

#[tokio::test]
async fn test_javascript_app_reports_sparse_content() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        "<html><head><title>App</title></head><body>\
         <div id=\"root\"></div><script src=\"/bundle.js\"></script>\
         </body></html>"
            .to_string(),
    )
    .await;
    // Every probe misses
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let outcome = audit_site(&server.uri(), &test_config()).await.unwrap();
    match &outcome {
        AuditOutcome::InsufficientContent(sparse) => {
            assert_eq!(sparse.pages_scanned, 1);
            assert_eq!(sparse.text_blocks, 0);
            assert_eq!(sparse.characters, 0);
        }
        other => panic!("expected sparse content, got {:?}", other),
    }

    let response = AuditResponse::from_result(Ok(outcome));
    assert_eq!(response.status_code(), 200);
    assert!(!response.success);
}

#[tokio::test]
async fn test_probing_finds_subpages_for_linkless_homepage() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        html_page("Home", "<main><p>Welcome to the homepage of our company.</p></main>"),
    )
    .await;
    for route in ["/about", "/team"] {
        Mock::given(method("HEAD"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        mount_page(
            &server,
            route,
            html_page("Page", "<p>Each release is reviewed by the whole team.</p>"),
        )
        .await;
    }
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let outcome = audit_site(&server.uri(), &test_config()).await.unwrap();
    // Both probed pages were crawled, but three short paragraphs are still too little copy
    match outcome {
        AuditOutcome::InsufficientContent(sparse) => assert_eq!(sparse.pages_scanned, 3),
        other => panic!("expected sparse content, got {:?}", other),
    }
}

#[tokio::test]
async fn test_homepage_failure_is_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let error = audit_site(&server.uri(), &test_config()).await.unwrap_err();
    assert!(matches!(error, AuditError::HomepageFetch { .. }));

    let response = AuditResponse::from_result(Err(error));
    assert_eq!(response.status_code(), 500);
}

#[tokio::test]
async fn test_invalid_url_never_fetches() {
    let error = audit_site("not a url", &test_config()).await.unwrap_err();
    assert!(matches!(error, AuditError::InvalidUrl(_)));
    assert_eq!(AuditResponse::failed(&error).status_code(), 400);
}

#[tokio::test]
async fn test_extended_rules_add_jargon() {
    let server = MockServer::start().await;
    let paragraphs: String = (0..5)
        .map(|i| format!("<p>Section {} explains how we leverage plain words.</p>", i))
        .collect();
    mount_page(&server, "/", html_page("Home", &paragraphs)).await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let standard = completed(audit_site(&server.uri(), &test_config()).await.unwrap());
    assert_eq!(standard.summary.total_violations, 0);

    let config = test_config().with_extended_rules(true);
    let extended = completed(audit_site(&server.uri(), &config).await.unwrap());
    assert_eq!(extended.summary.total_violations, 5);
    assert!(extended.violations.iter().all(|v| v.kind == ViolationType::Jargon));
}
