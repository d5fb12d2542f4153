//! Sync-run orchestration tests: company isolation, report order, and
//! enrichment side effects, all against in-memory dependencies.

mod common;

use common::{test_company, test_posting};
use server_core::config::Config;
use server_core::domains::sync::effects::run_sync;
use server_core::kernel::{MockAtsService, TestDependencies};
use server_core::store::{CompanyStore, JobStore};

fn config_with_logo_token(token: Option<&str>) -> Config {
    Config {
        database_url: "postgres://localhost/launchboard_test".to_string(),
        port: 0,
        environment: "development".to_string(),
        cron_secret: None,
        logo_dev_token: token.map(str::to_string),
    }
}

#[tokio::test]
async fn one_failing_company_never_interrupts_the_others() {
    let deps = TestDependencies::new().mock_ats(
        MockAtsService::new()
            .with_jobs(
                "alpha",
                vec![
                    test_posting("gh-1", "Platform Engineer"),
                    test_posting("gh-2", "Product Designer"),
                ],
            )
            .with_error("beacon", "Lever API error: 500")
            .with_jobs("cascade", vec![test_posting("ab-1", "Research Engineer")]),
    );
    let alpha = test_company("Alpha Robotics", "alpha-robotics", "greenhouse", "alpha");
    let beacon = test_company("Beacon Health", "beacon-health", "lever", "beacon");
    let cascade = test_company("Cascade AI", "cascade-ai", "ashby", "cascade");
    let (alpha_id, cascade_id) = (alpha.id, cascade.id);
    deps.store.add_company(alpha);
    deps.store.add_company(beacon);
    deps.store.add_company(cascade);

    let report = run_sync(&deps.to_deps()).await.unwrap();

    assert!(report.success);
    assert_eq!(report.results.len(), 3);

    let names: Vec<&str> = report.results.iter().map(|r| r.company.as_str()).collect();
    assert_eq!(names, vec!["Alpha Robotics", "Beacon Health", "Cascade AI"]);

    assert_eq!(report.results[0].inserted, 2);
    assert_eq!(report.results[0].error, None);

    assert_eq!(
        report.results[1].error.as_deref(),
        Some("Lever API error: 500")
    );
    assert_eq!(report.results[1].inserted, 0);
    assert_eq!(report.results[1].updated, 0);
    assert_eq!(report.results[1].marked_inactive, 0);

    assert_eq!(report.results[2].inserted, 1);

    // The failing company wrote nothing; the others landed
    assert_eq!(
        deps.store
            .active_jobs_for_company(alpha_id)
            .await
            .unwrap()
            .len(),
        2
    );
    assert_eq!(
        deps.store
            .active_jobs_for_company(cascade_id)
            .await
            .unwrap()
            .len(),
        1
    );
    assert_eq!(deps.store.job_count(), 3);
}

#[tokio::test]
async fn report_keeps_company_list_order() {
    let deps = TestDependencies::new();
    deps.store
        .add_company(test_company("Zenith", "zenith", "lever", "zenith"));
    deps.store
        .add_company(test_company("Apex", "apex", "greenhouse", "apex"));
    deps.store
        .add_company(test_company("Mango", "mango", "ashby", "mango"));

    let report = run_sync(&deps.to_deps()).await.unwrap();

    let names: Vec<&str> = report.results.iter().map(|r| r.company.as_str()).collect();
    assert_eq!(names, vec!["Apex", "Mango", "Zenith"]);
}

#[tokio::test]
async fn second_run_over_the_same_feed_reports_updates() {
    let deps = TestDependencies::new().mock_ats(MockAtsService::new().with_jobs(
        "alpha",
        vec![
            test_posting("gh-1", "Platform Engineer"),
            test_posting("gh-2", "Product Designer"),
        ],
    ));
    deps.store
        .add_company(test_company("Alpha Robotics", "alpha-robotics", "greenhouse", "alpha"));

    run_sync(&deps.to_deps()).await.unwrap();
    let report = run_sync(&deps.to_deps()).await.unwrap();

    assert_eq!(report.results[0].inserted, 0);
    assert_eq!(report.results[0].updated, 2);
    assert_eq!(report.results[0].marked_inactive, 0);
    assert_eq!(deps.store.job_count(), 2);
}

#[tokio::test]
async fn missing_logo_and_description_are_backfilled() {
    let deps = TestDependencies::new()
        .mock_ats(MockAtsService::new().with_description("alpha", "We build rockets."))
        .with_config(config_with_logo_token(Some("tok_123")));
    let mut company = test_company("Alpha Robotics", "alpha-robotics", "greenhouse", "alpha");
    company.website = Some("https://alpha.example.com".to_string());
    let company_id = company.id;
    deps.store.add_company(company);

    let report = run_sync(&deps.to_deps()).await.unwrap();
    assert_eq!(report.results[0].error, None);

    let company = deps.store.company_by_id(company_id).await.unwrap().unwrap();
    assert_eq!(
        company.logo_url.as_deref(),
        Some("https://img.logo.dev/alpha.example.com?token=tok_123")
    );
    assert_eq!(company.description.as_deref(), Some("We build rockets."));
}

#[tokio::test]
async fn existing_logo_and_description_are_left_alone() {
    let deps = TestDependencies::new()
        .mock_ats(MockAtsService::new().with_description("alpha", "Scraped blurb"))
        .with_config(config_with_logo_token(Some("tok_123")));
    let mut company = test_company("Alpha Robotics", "alpha-robotics", "greenhouse", "alpha");
    company.website = Some("https://alpha.example.com".to_string());
    company.logo_url = Some("https://cdn.example.com/alpha.png".to_string());
    company.description = Some("Hand-written blurb".to_string());
    let company_id = company.id;
    deps.store.add_company(company);

    run_sync(&deps.to_deps()).await.unwrap();

    let company = deps.store.company_by_id(company_id).await.unwrap().unwrap();
    assert_eq!(
        company.logo_url.as_deref(),
        Some("https://cdn.example.com/alpha.png")
    );
    assert_eq!(company.description.as_deref(), Some("Hand-written blurb"));
}

#[tokio::test]
async fn invalid_website_fails_only_that_company() {
    // No logo token configured; the URL is still parsed first
    let deps = TestDependencies::new().mock_ats(
        MockAtsService::new().with_jobs("beacon", vec![test_posting("lv-1", "Nurse")]),
    );
    let mut broken = test_company("Alpha Robotics", "alpha-robotics", "greenhouse", "alpha");
    broken.website = Some("not a url".to_string());
    deps.store.add_company(broken);
    deps.store
        .add_company(test_company("Beacon Health", "beacon-health", "lever", "beacon"));

    let report = run_sync(&deps.to_deps()).await.unwrap();

    assert!(report.results[0]
        .error
        .as_deref()
        .unwrap()
        .contains("Invalid website URL"));
    assert_eq!(report.results[1].error, None);
    assert_eq!(report.results[1].inserted, 1);
}

#[tokio::test]
async fn unknown_provider_tag_fails_only_that_company() {
    let deps = TestDependencies::new().mock_ats(
        MockAtsService::new().with_jobs("beacon", vec![test_posting("lv-1", "Nurse")]),
    );
    let mut unsupported = test_company("Alpha Robotics", "alpha-robotics", "taleo", "alpha");
    unsupported.website = None;
    deps.store.add_company(unsupported);
    deps.store
        .add_company(test_company("Beacon Health", "beacon-health", "lever", "beacon"));

    let report = run_sync(&deps.to_deps()).await.unwrap();

    assert!(report.results[0]
        .error
        .as_deref()
        .unwrap()
        .contains("Unknown ATS provider"));
    assert_eq!(report.results[1].inserted, 1);

    // The bad tag never reached the board client
    let calls = deps.ats.fetch_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].ats_id, "beacon");
}
