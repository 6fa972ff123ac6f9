
use reqwest::StatusCode;
use serde_json::json;
use test_utils::{ids, Fixtures, TestApp, REPOS_JSON};

#[actix_rt::test]
async fn health_reports_snapshot_counts() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get_json("/api/v1/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["snapshot"]["projects"], 3);
    assert_eq!(body["snapshot"]["categories"], 2);
    assert_eq!(body["snapshot"]["experiences"], 2);
}

#[actix_rt::test]
async fn home_lists_endpoints() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get_json("/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["endpoints"]["projects"], "/api/v1/projects");
}

#[actix_rt::test]
async fn profile_is_served_from_the_data_file() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get_json("/api/v1/profile").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Test Person");
    assert_eq!(body["contact"]["email"], "test@example.com");
    assert_eq!(body["skills"][0]["items"], json!(["Rust", "TypeScript"]));
}

#[actix_rt::test]
async fn experiences_are_most_recent_first() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get_json("/api/v1/experiences").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["duration"], "JANUARY 2021 - PRESENT");
    assert_eq!(body[1]["duration"], "MARCH 2019 - DECEMBER 2020");
}

#[actix_rt::test]
async fn missing_data_files_serve_placeholders() {
    let app = TestApp::spawn_with(Fixtures {
        portfolio: None,
        catalog: None,
        repos: None,
    })
    .await;

    let (status, profile) = app.get_json("/api/v1/profile").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["name"], "Test-Portfolio");
    assert_eq!(profile["bio"], "Portfolio data loading failed");

    let (_, projects) = app.get_json("/api/v1/projects").await;
    assert_eq!(projects, json!([]));
}

#[actix_rt::test]
async fn projects_filter_by_category() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get_json("/api/v1/projects?category=frontend").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["p1", "p3"]);
}

#[actix_rt::test]
async fn projects_filters_combine() {
    let app = TestApp::spawn().await;

    let (_, body) = app
        .get_json("/api/v1/projects?technology=React&featured=false")
        .await;
    assert_eq!(ids(&body), vec!["p2"]);

    // Empty values impose no constraint.
    let (_, body) = app.get_json("/api/v1/projects?category=&search=").await;
    assert_eq!(ids(&body), vec!["p1", "p2", "p3"]);
}

#[actix_rt::test]
async fn projects_sort_by_completion_date() {
    let app = TestApp::spawn().await;

    let (_, asc) = app
        .get_json("/api/v1/projects?sort=completionDate&direction=asc")
        .await;
    assert_eq!(ids(&asc), vec!["p2", "p1", "p3"]);

    let (_, desc) = app
        .get_json("/api/v1/projects?sort=completionDate&direction=desc")
        .await;
    assert_eq!(ids(&desc), vec!["p3", "p1", "p2"]);
}

#[actix_rt::test]
async fn unknown_sort_field_is_rejected() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get_json("/api/v1/projects?sort=stars").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid input: Query string error"));
}

#[actix_rt::test]
async fn search_respects_field_toggles() {
    let app = TestApp::spawn().await;

    let (_, body) = app.get_json("/api/v1/projects/search?q=realtime").await;
    assert!(ids(&body).is_empty());

    let (_, body) = app
        .get_json("/api/v1/projects/search?q=realtime&includeChallenges=true")
        .await;
    assert_eq!(ids(&body), vec!["p1"]);

    let (_, body) = app.get_json("/api/v1/projects/search?q=VUE").await;
    assert_eq!(ids(&body), vec!["p3"]);
}

#[actix_rt::test]
async fn empty_search_query_fails_validation() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get_json("/api/v1/projects/search?q=").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["details"][0]["field"], "q");
}

#[actix_rt::test]
async fn project_by_id_and_not_found() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get_json("/api/v1/projects/p2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Billing Service");
    assert_eq!(body["completionDate"], "2023-01-01");

    let (status, body) = app.get_json("/api/v1/projects/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("nope"));
}

#[actix_rt::test]
async fn related_projects_share_technologies() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get_json("/api/v1/projects/p1/related").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["p2"]);

    let (_, body) = app.get_json("/api/v1/projects/nope/related").await;
    assert_eq!(body, json!([]));

    let (status, _) = app.get_json("/api/v1/projects/p1/related?limit=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn stats_count_categories_and_technologies() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get_json("/api/v1/projects/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalProjects"], 3);
    assert_eq!(body["featuredProjects"], 1);
    assert_eq!(body["categoryCounts"][0]["categoryId"], "frontend");
    assert_eq!(body["categoryCounts"][0]["count"], 2);

    let react = body["technologyCounts"]
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["technology"] == "React")
        .unwrap();
    assert_eq!(react["count"], 2);
    assert_eq!(ids(&body["recentProjects"]), vec!["p3", "p1", "p2"]);
}

#[actix_rt::test]
async fn timeline_is_oldest_month_first() {
    let app = TestApp::spawn().await;

    let (_, body) = app.get_json("/api/v1/projects/timeline").await;

    let months: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["month"].as_str().unwrap())
        .collect();
    assert_eq!(months, vec!["January 2023", "June 2023", "January 2024"]);
}

#[actix_rt::test]
async fn technologies_and_categories_are_listed() {
    let app = TestApp::spawn().await;

    let (_, techs) = app.get_json("/api/v1/projects/technologies").await;
    let names: Vec<&str> = techs
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Node.js", "React", "Vue.js"]);

    let (_, categories) = app.get_json("/api/v1/projects/categories").await;
    assert_eq!(ids(&categories), vec!["frontend", "backend"]);
}

#[actix_rt::test]
async fn validate_collects_every_problem() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(app.url("/api/v1/projects/validate"))
        .json(&json!({ "title": "Draft", "liveUrl": "not a url" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["isValid"], false);
    assert_eq!(
        body["errors"],
        json!([
            "Description is required",
            "Category is required",
            "At least one technology is required",
            "Completion date is required",
            "Live URL must be a valid URL"
        ])
    );
}

#[actix_rt::test]
async fn validate_reports_on_partial_nested_objects() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(app.url("/api/v1/projects/validate"))
        .json(&json!({
            "title": "x",
            "description": "d",
            "category": { "id": "web" },
            "technologies": [{ "name": "React" }],
            "githubUrl": "github.com/me/x"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["isValid"], false);
    assert_eq!(
        body["errors"],
        json!(["Completion date is required", "GitHub URL must be a valid URL"])
    );
}

#[actix_rt::test]
async fn malformed_validation_payload_is_a_json_error() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(app.url("/api/v1/projects/validate"))
        .header("content-type", "application/json")
        .body("{ not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().starts_with("Invalid input: JSON payload error"));
}

#[actix_rt::test]
async fn repository_listing_joins_the_catalog() {
    let app = TestApp::spawn_with(Fixtures {
        repos: Some(REPOS_JSON),
        ..Fixtures::default()
    })
    .await;

    let (status, body) = app.get_json("/api/v1/projects/gh-rust-cli").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["description"], "No description available");
    assert_eq!(body["category"]["id"], "backend");
    assert_eq!(body["featured"], true);
    assert_eq!(body["githubUrl"], "https://github.com/test/rust-cli");

    let (_, featured) = app.get_json("/api/v1/projects?featured=true").await;
    assert_eq!(ids(&featured), vec!["p1", "gh-rust-cli"]);
}

#[actix_rt::test]
async fn unknown_routes_answer_with_json_404() {
    let app = TestApp::spawn().await;

    let (status, body) = app.get_json("/api/v1/blog").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not found");
}

#[actix_rt::test]
async fn refresh_picks_up_edited_files() {
    let app = TestApp::spawn().await;

    let catalog = test_utils::CATALOG_YAML.replace("title: Storefront", "title: Webshop");
    std::fs::write(&app.config.catalog_path, catalog).unwrap();
    app.state.refresh().await;

    let (_, body) = app.get_json("/api/v1/projects/p3").await;
    assert_eq!(body["title"], "Webshop");
}
