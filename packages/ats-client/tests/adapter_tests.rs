//! Adapter integration tests against a mock ATS server.
//!
//! Each provider's adapter is exercised end to end: request shape, status
//! handling, and field mapping from realistic payloads.

use ats_client::{AtsClient, AtsError, AtsProvider};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> AtsClient {
    AtsClient::new().with_base_url(server.uri())
}

fn greenhouse_jobs_payload() -> Value {
    json!({
        "jobs": [
            {
                "id": 4012345,
                "title": "Staff Engineer",
                "location": { "name": "Remote - US" },
                "content": "&lt;p&gt;Build things.&lt;/p&gt;",
                "absolute_url": "https://boards.greenhouse.io/acme/jobs/4012345",
                "departments": [{ "name": "Engineering" }],
                "metadata": [{ "name": "Employment Type", "value": "Full-time" }],
                "first_published": "2024-01-10T07:00:00-05:00"
            },
            {
                "id": 4012346,
                "title": "Recruiter",
                "location": null,
                "content": null,
                "absolute_url": "https://boards.greenhouse.io/acme/jobs/4012346",
                "departments": [],
                "metadata": null
            }
        ]
    })
}

#[tokio::test]
async fn greenhouse_maps_jobs_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/boards/acme/jobs"))
        .and(query_param("content", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(greenhouse_jobs_payload()))
        .mount(&server)
        .await;

    let jobs = client_for(&server)
        .await
        .fetch_jobs(AtsProvider::Greenhouse, "acme")
        .await
        .unwrap();

    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].external_id, "4012345");
    assert_eq!(jobs[0].description.as_deref(), Some("<p>Build things.</p>"));
    assert_eq!(jobs[0].employment_type.as_deref(), Some("Full-time"));
    assert_eq!(jobs[1].location, None);
    assert_eq!(jobs[1].description, None);
}

#[tokio::test]
async fn greenhouse_non_success_status_is_a_typed_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/boards/gone/jobs"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .fetch_jobs(AtsProvider::Greenhouse, "gone")
        .await
        .unwrap_err();

    assert!(matches!(err, AtsError::Api { status: 404, .. }));
    assert_eq!(err.to_string(), "Greenhouse API error: 404");
}

#[tokio::test]
async fn greenhouse_blurb_is_stripped_and_truncated() {
    let long_paragraph = format!("<div><p>{}</p></div>", "a".repeat(600));
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/boards/acme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "content": long_paragraph })))
        .mount(&server)
        .await;

    let blurb = client_for(&server)
        .await
        .fetch_company_description(AtsProvider::Greenhouse, "acme")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(blurb.chars().count(), 500);
    assert!(blurb.ends_with("..."));
    assert!(blurb.starts_with(&"a".repeat(400)));
}

#[tokio::test]
async fn greenhouse_blurb_absorbs_missing_boards() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/boards/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let blurb = client_for(&server)
        .await
        .fetch_company_description(AtsProvider::Greenhouse, "missing")
        .await
        .unwrap();

    assert_eq!(blurb, None);
}

#[tokio::test]
async fn lever_assembles_description_sections() {
    let payload = json!([
        {
            "id": "a1b2c3",
            "text": "Backend Engineer",
            "categories": {
                "commitment": "Full-time",
                "location": "New York",
                "team": "Platform"
            },
            "description": "<p>Intro</p>",
            "lists": [
                { "text": "Requirements", "content": "<li>Rust</li>" }
            ],
            "additional": "<p>EEO</p>",
            "salaryRange": {
                "min": 150000,
                "max": 185000,
                "currency": "USD",
                "interval": "year"
            },
            "createdAt": 1704067200000i64,
            "hostedUrl": "https://jobs.lever.co/acme/a1b2c3"
        }
    ]);

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0/postings/acme"))
        .and(query_param("mode", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload))
        .mount(&server)
        .await;

    let jobs = client_for(&server)
        .await
        .fetch_jobs(AtsProvider::Lever, "acme")
        .await
        .unwrap();

    assert_eq!(jobs.len(), 1);
    let description = jobs[0].description.as_deref().unwrap();
    assert_eq!(
        description,
        "<p>Intro</p>\n<h3>Requirements</h3>\n<li>Rust</li>\n<h3>Additional Information</h3>\n<p>EEO</p>\n<h3>Compensation</h3>\n<p>USD 150,000 - 185,000 per year</p>"
    );
    assert_eq!(jobs[0].department.as_deref(), Some("Platform"));
    assert_eq!(
        jobs[0].published_at.map(|t| t.to_rfc3339()),
        Some("2024-01-01T00:00:00+00:00".to_string())
    );
}

#[tokio::test]
async fn ashby_maps_board_and_blurb() {
    let payload = json!({
        "jobs": [
            {
                "id": "7f3a9c40",
                "title": "Product Designer",
                "location": "San Francisco",
                "department": null,
                "team": "Design",
                "employmentType": "FullTime",
                "descriptionHtml": "<p>Design the product.</p>",
                "descriptionPlain": "Design the product.",
                "publishedAt": "2024-02-20T18:00:00.000Z",
                "jobUrl": "https://jobs.ashbyhq.com/acme/7f3a9c40"
            }
        ],
        "description": "We design delightful software for dentists."
    });

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posting-api/job-board/acme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload))
        .mount(&server)
        .await;

    let client = client_for(&server).await;

    let jobs = client.fetch_jobs(AtsProvider::Ashby, "acme").await.unwrap();
    assert_eq!(jobs[0].description.as_deref(), Some("<p>Design the product.</p>"));
    assert_eq!(jobs[0].department.as_deref(), Some("Design"));

    let blurb = client
        .fetch_company_description(AtsProvider::Ashby, "acme")
        .await
        .unwrap();
    assert_eq!(
        blurb.as_deref(),
        Some("We design delightful software for dentists.")
    );
}

#[tokio::test]
async fn pinpoint_fetches_tenant_board() {
    let payload = json!({
        "data": [
            {
                "id": "98765",
                "title": " Operations Manager ",
                "description": "<p>Run the office.</p>",
                "key_responsibilities": "<ul><li>Coordinate</li></ul>",
                "key_responsibilities_header": null,
                "benefits": null,
                "benefits_header": null,
                "compensation": "$90k - $110k",
                "employment_type_text": "Full time",
                "workplace_type_text": "Hybrid",
                "url": "https://acme.pinpointhq.com/postings/98765",
                "location": { "name": "Chicago" },
                "job": { "department": { "name": "Operations" } }
            }
        ]
    });

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/postings.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload))
        .mount(&server)
        .await;

    let jobs = client_for(&server)
        .await
        .fetch_jobs(AtsProvider::Pinpoint, "acme")
        .await
        .unwrap();

    assert_eq!(jobs[0].title, "Operations Manager");
    assert_eq!(
        jobs[0].description.as_deref(),
        Some(
            "<p>Run the office.</p>\n\n<h2>What to Expect</h2><ul><li>Coordinate</li></ul>\n\n<p><strong>Compensation:</strong> $90k - $110k</p>\n\n<p><strong>Workplace:</strong> Hybrid</p>"
        )
    );
    assert_eq!(jobs[0].published_at, None);
}

#[tokio::test]
async fn careerpuck_decodes_double_encoded_content() {
    let payload = json!({
        "jobs": [
            {
                "permalink": "senior-data-engineer",
                "title": "Senior Data Engineer",
                "content": "&amp;lt;b&amp;gt;Pipelines&amp;lt;/b&amp;gt;",
                "location": "Remote",
                "publicUrl": "https://jobs.careerpuck.com/acme/senior-data-engineer",
                "postedAt": "2024-04-01T12:00:00Z",
                "offices": [{ "name": "Austin" }],
                "departments": [{ "name": "Data" }],
                "workType": "FULL_TIME"
            }
        ]
    });

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/public/job-boards/acme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload))
        .mount(&server)
        .await;

    let jobs = client_for(&server)
        .await
        .fetch_jobs(AtsProvider::CareerPuck, "acme")
        .await
        .unwrap();

    assert_eq!(jobs[0].description.as_deref(), Some("<b>Pipelines</b>"));
    assert_eq!(jobs[0].external_id, "senior-data-engineer");
    assert_eq!(jobs[0].location.as_deref(), Some("Austin"));
}

fn workday_posting(i: usize) -> Value {
    json!({
        "title": format!("Role {}", i),
        "externalPath": format!("/job/Remote/Role_R-{}", i),
        "timeType": "Full time",
        "locationsText": "Remote",
        "bulletFields": [format!("R-{}", i)]
    })
}

#[tokio::test]
async fn workday_pages_through_all_postings() {
    let first_page: Vec<Value> = (0..20).map(workday_posting).collect();
    let second_page: Vec<Value> = (20..21).map(workday_posting).collect();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/wday/cxs/acme/External/jobs"))
        .and(body_json(json!({ "limit": 20, "offset": 0 })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "total": 21, "jobPostings": first_page })),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/wday/cxs/acme/External/jobs"))
        .and(body_json(json!({ "limit": 20, "offset": 20 })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "total": 21, "jobPostings": second_page })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/wday/cxs/acme/External/job/.*$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jobPostingInfo": {
                "id": "detail",
                "title": "Role",
                "jobDescription": "&lt;p&gt;Work hard.&lt;/p&gt;",
                "postedDate": "2024-05-01T00:00:00.000Z",
                "jobFamily": [{ "descriptor": "Engineering" }]
            }
        })))
        .mount(&server)
        .await;

    let jobs = client_for(&server)
        .await
        .fetch_jobs(AtsProvider::Workday, "acme/wd5/External")
        .await
        .unwrap();

    assert_eq!(jobs.len(), 21);
    assert_eq!(jobs[0].external_id, "R-0");
    assert_eq!(jobs[20].external_id, "R-20");
    assert_eq!(jobs[0].description.as_deref(), Some("<p>Work hard.</p>"));
    assert_eq!(jobs[0].department.as_deref(), Some("Engineering"));
}

#[tokio::test]
async fn workday_detail_failure_keeps_the_posting() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/wday/cxs/acme/External/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 1,
            "jobPostings": [workday_posting(1)]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/wday/cxs/acme/External/job/.*$"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let jobs = client_for(&server)
        .await
        .fetch_jobs(AtsProvider::Workday, "acme/wd5/External")
        .await
        .unwrap();

    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].title, "Role 1");
    assert_eq!(jobs[0].description, None);
    assert_eq!(jobs[0].employment_type.as_deref(), Some("Full time"));
}

#[tokio::test]
async fn workday_rejects_malformed_ats_id() {
    let err = AtsClient::new()
        .fetch_jobs(AtsProvider::Workday, "just-a-tenant")
        .await
        .unwrap_err();
    assert!(matches!(err, AtsError::InvalidIdentifier(_)));
}
