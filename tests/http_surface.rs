use jobhunt::pkg::{
    internal::store::JobStore,
    server::{router::build_routes, state::AppState},
};
use serde_json::{Value, json};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

async fn spawn_app(store: JobStore) -> std::net::SocketAddr {
    let app = build_routes(AppState::with_store(store));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    addr
}

async fn send_raw(
    addr: std::net::SocketAddr,
    method: &str,
    path: &str,
    headers: &[(&str, &str)],
    body: &str,
) -> (u16, String, String) {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    let mut req = format!(
        "{method} {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\nContent-Length: {}\r\n",
        body.len()
    );
    for (k, v) in headers {
        req.push_str(&format!("{k}: {v}\r\n"));
    }
    req.push_str("\r\n");
    req.push_str(body);
    stream
        .write_all(req.as_bytes())
        .await
        .expect("write request");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    let (head, body) = response
        .split_once("\r\n\r\n")
        .expect("http response must have separator");
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|s| s.parse::<u16>().ok())
        .expect("http status");
    (status, head.to_string(), body.to_string())
}

async fn get(addr: std::net::SocketAddr, path: &str) -> (u16, String, String) {
    send_raw(addr, "GET", path, &[], "").await
}

async fn api_jobs(addr: std::net::SocketAddr) -> Vec<Value> {
    let (status, _, body) = get(addr, "/api/jobs").await;
    assert_eq!(status, 200);
    serde_json::from_str(&body).expect("jobs json")
}

const FORM: (&str, &str) = ("Content-Type", "application/x-www-form-urlencoded");
const JSON: (&str, &str) = ("Content-Type", "application/json");

#[tokio::test]
async fn dashboard_lists_seed_jobs() {
    let addr = spawn_app(JobStore::seeded()).await;
    let (status, head, body) = get(addr, "/").await;
    assert_eq!(status, 200);
    assert!(head.contains("text/html"));
    for title in [
        "Senior Frontend Engineer",
        "Fullstack TypeScript Developer",
        "Product Engineer",
        "Frontend Developer",
        "Staff UI Engineer",
    ] {
        assert!(body.contains(title), "dashboard is missing {title}");
    }
}

#[tokio::test]
async fn detail_page_and_not_found() {
    let addr = spawn_app(JobStore::seeded()).await;

    let (status, _, body) = get(addr, "/jobs/3").await;
    assert_eq!(status, 200);
    assert!(body.contains("Fjord Finance"));
    assert!(body.contains("2024-12-18"));

    for path in ["/jobs/999", "/jobs/0", "/jobs/abc"] {
        let (status, _, body) = get(addr, path).await;
        assert_eq!(status, 404, "{path}");
        assert!(body.contains("Job not found"), "{path}");
    }
}

#[tokio::test]
async fn add_form_submission_redirects_and_stores_the_job() {
    let addr = spawn_app(JobStore::seeded()).await;

    let (status, _, body) = get(addr, "/add").await;
    assert_eq!(status, 200);
    assert!(body.contains("name=\"date_applied\""));

    let (status, _, _) = get(addr, "/jobs/6").await;
    assert_eq!(status, 404);

    let (status, head, _) = send_raw(
        addr,
        "POST",
        "/add",
        &[FORM],
        "title=X&company=Y&status=Applied&salary_range=%241&description=d&date_applied=2025-01-01",
    )
    .await;
    assert_eq!(status, 303);
    assert!(head.lines().any(|line| line.eq_ignore_ascii_case("location: /")));

    let (status, _, body) = get(addr, "/jobs/6").await;
    assert_eq!(status, 200);
    assert!(body.contains("Applied: 2025-01-01"));

    let jobs = api_jobs(addr).await;
    assert_eq!(jobs.len(), 6);
    assert_eq!(
        jobs[5],
        json!({
            "id": 6,
            "title": "X",
            "company": "Y",
            "status": "Applied",
            "salary_range": "$1",
            "description": "d",
            "date_applied": "2025-01-01"
        })
    );
}

#[tokio::test]
async fn add_form_without_status_defaults_to_applied() {
    let addr = spawn_app(JobStore::empty()).await;
    let (status, _, _) = send_raw(
        addr,
        "POST",
        "/add",
        &[FORM],
        "title=Engineer&company=Acme&salary_range=open&description=build+things&date_applied=2025-02-03",
    )
    .await;
    assert_eq!(status, 303);

    let jobs = api_jobs(addr).await;
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0]["id"], 1);
    assert_eq!(jobs[0]["status"], "Applied");
    assert_eq!(jobs[0]["description"], "build things");
}

#[tokio::test]
async fn invalid_form_is_rejected_without_storing() {
    let addr = spawn_app(JobStore::seeded()).await;
    for body in [
        "title=&company=Y&status=Applied&salary_range=%241&description=d&date_applied=2025-01-01",
        "title=%20%20&company=Y&status=Applied&salary_range=%241&description=d&date_applied=2025-01-01",
        "title=X&company=Y&status=Applied&salary_range=%241&description=d&date_applied=someday",
        "title=X&company=Y&status=Ghosted&salary_range=%241&description=d&date_applied=2025-01-01",
    ] {
        let (status, head, page) = send_raw(addr, "POST", "/add", &[FORM], body).await;
        assert_eq!(status, 400, "{body}");
        assert!(head.to_ascii_lowercase().contains("content-type: text/html"), "{body}");
        assert!(page.contains("role=\"alert\""), "{body}");
    }
    assert_eq!(api_jobs(addr).await.len(), 5);
}

#[tokio::test]
async fn json_api_round_trip() {
    let addr = spawn_app(JobStore::seeded()).await;

    let (status, _, _) = get(addr, "/api/jobs/6").await;
    assert_eq!(status, 404);
    let (status, _, _) = get(addr, "/api/jobs/999").await;
    assert_eq!(status, 404);

    let payload = json!({
        "title": "X",
        "company": "Y",
        "salary_range": "$1",
        "description": "d",
        "date_applied": "2025-01-01"
    })
    .to_string();
    let (status, _, body) = send_raw(addr, "POST", "/api/jobs", &[JSON], &payload).await;
    assert_eq!(status, 201);
    let created: Value = serde_json::from_str(&body).expect("created json");
    assert_eq!(created["id"], 6);
    assert_eq!(created["status"], "Applied");

    let (status, _, body) = get(addr, "/api/jobs/6").await;
    assert_eq!(status, 200);
    let fetched: Value = serde_json::from_str(&body).expect("job json");
    assert_eq!(fetched, created);

    let (status, _, body) = send_raw(addr, "POST", "/api/jobs", &[JSON], &payload).await;
    assert_eq!(status, 201);
    let second: Value = serde_json::from_str(&body).expect("created json");
    assert_eq!(second["id"], 7);

    let jobs = api_jobs(addr).await;
    let ids: Vec<i64> = jobs.iter().filter_map(|j| j["id"].as_i64()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
}

#[tokio::test]
async fn json_api_rejects_blank_fields() {
    let addr = spawn_app(JobStore::seeded()).await;
    let payload = json!({ "title": " ", "company": "Y" }).to_string();
    let (status, _, _) = send_raw(addr, "POST", "/api/jobs", &[JSON], &payload).await;
    assert_eq!(status, 400);
    assert_eq!(api_jobs(addr).await.len(), 5);
}

#[tokio::test]
async fn probes_answer() {
    let addr = spawn_app(JobStore::seeded()).await;
    assert_eq!(get(addr, "/livez").await.0, 200);
    assert_eq!(get(addr, "/healthz").await.0, 200);
}
