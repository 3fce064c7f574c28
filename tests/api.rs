use poem::{
    Endpoint,
    http::StatusCode,
    test::{TestClient, TestResponse},
};
use serde_json::{Value, json};
use todo_service::{build_app, config::Config};

fn client() -> TestClient<impl Endpoint> {
    TestClient::new(build_app(Config::default()))
}

async fn body_json(response: TestResponse) -> Value {
    response.0.into_body().into_json().await.unwrap()
}

async fn create_user<E: Endpoint>(cli: &TestClient<E>, username: &str) -> Value {
    let resp = cli
        .post("/users")
        .body_json(&json!({ "name": "Test User", "username": username }))
        .send()
        .await;
    resp.assert_status(StatusCode::CREATED);
    body_json(resp).await
}

async fn create_todo<E: Endpoint>(cli: &TestClient<E>, username: &str, title: &str) -> TestResponse {
    cli.post("/todos")
        .header("username", username)
        .body_json(&json!({ "title": title, "deadline": "2030-05-01T12:00:00Z" }))
        .send()
        .await
}

async fn list_todos<E: Endpoint>(cli: &TestClient<E>, username: &str) -> Vec<Value> {
    let resp = cli.get("/todos").header("username", username).send().await;
    resp.assert_status_is_ok();
    match body_json(resp).await {
        Value::Array(items) => items,
        other => panic!("expected an array, got {other}"),
    }
}

// --- users ---

#[tokio::test]
async fn create_user_returns_201_on_free_plan() {
    let cli = client();

    let user = create_user(&cli, "ann").await;

    assert_eq!(user["username"], "ann");
    assert_eq!(user["name"], "Test User");
    assert_eq!(user["pro"], false);
    assert_eq!(user["todos"], json!([]));
    assert!(uuid::Uuid::parse_str(user["id"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn duplicate_username_returns_400_with_error_body() {
    let cli = client();
    create_user(&cli, "ann").await;

    let resp = cli
        .post("/users")
        .body_json(&json!({ "name": "Another Ann", "username": "ann" }))
        .send()
        .await;

    resp.assert_status(StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("Username already exists"));
}

#[tokio::test]
async fn get_user_includes_todos() {
    let cli = client();
    let user = create_user(&cli, "ann").await;
    create_todo(&cli, "ann", "Read book").await.assert_status(StatusCode::CREATED);

    let resp = cli
        .get(format!("/users/{}", user["id"].as_str().unwrap()))
        .send()
        .await;

    resp.assert_status_is_ok();
    let fetched = body_json(resp).await;
    assert_eq!(fetched["id"], user["id"]);
    assert_eq!(fetched["todos"][0]["title"], "Read book");
}

#[tokio::test]
async fn unknown_user_id_returns_404() {
    let cli = client();

    for id in [uuid::Uuid::new_v4().to_string(), "not-a-uuid".to_string()] {
        let resp = cli.get(format!("/users/{id}")).send().await;
        resp.assert_status(StatusCode::NOT_FOUND);
        assert!(body_json(resp).await["error"].is_string());
    }
}

#[tokio::test]
async fn upgrade_to_pro_succeeds_once() {
    let cli = client();
    let user = create_user(&cli, "ann").await;
    let uri = format!("/users/{}/pro", user["id"].as_str().unwrap());

    let first = cli.patch(&uri).send().await;
    first.assert_status_is_ok();
    assert_eq!(body_json(first).await["pro"], true);

    let second = cli.patch(&uri).send().await;
    second.assert_status(StatusCode::BAD_REQUEST);
    assert!(body_json(second).await["error"].is_string());

    let resp = cli
        .get(format!("/users/{}", user["id"].as_str().unwrap()))
        .send()
        .await;
    assert_eq!(body_json(resp).await["pro"], true);
}

#[tokio::test]
async fn upgrade_unknown_user_returns_404() {
    let cli = client();

    cli.patch(format!("/users/{}/pro", uuid::Uuid::new_v4()))
        .send()
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

// --- todos ---

#[tokio::test]
async fn unknown_username_returns_404() {
    let cli = client();

    let resp = cli.get("/todos").header("username", "ghost").send().await;

    resp.assert_status(StatusCode::NOT_FOUND);
    assert!(body_json(resp).await["error"].is_string());
    create_todo(&cli, "ghost", "nope")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_identity_header_returns_404() {
    let cli = client();
    create_user(&cli, "ann").await;

    let resp = cli.get("/todos").send().await;
    resp.assert_status(StatusCode::NOT_FOUND);
    assert!(body_json(resp).await["error"].is_string());

    let resp = cli
        .post("/todos")
        .body_json(&json!({ "title": "anonymous", "deadline": "2030-01-01" }))
        .send()
        .await;
    resp.assert_status(StatusCode::NOT_FOUND);
    assert!(body_json(resp).await["error"].is_string());
    assert!(list_todos(&cli, "ann").await.is_empty());
}

#[tokio::test]
async fn create_todo_returns_201_and_lists_in_order() {
    let cli = client();
    create_user(&cli, "ann").await;

    let resp = create_todo(&cli, "ann", "first").await;
    resp.assert_status(StatusCode::CREATED);
    let todo = body_json(resp).await;
    create_todo(&cli, "ann", "second").await.assert_status(StatusCode::CREATED);

    assert_eq!(todo["title"], "first");
    assert_eq!(todo["done"], false);
    assert_eq!(todo["deadline"], "2030-05-01T12:00:00.000Z");
    assert!(todo["created_at"].is_string());

    let titles: Vec<_> = list_todos(&cli, "ann")
        .await
        .iter()
        .map(|t| t["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles, ["first", "second"]);
}

#[tokio::test]
async fn date_only_deadline_is_accepted() {
    let cli = client();
    create_user(&cli, "ann").await;

    let resp = cli
        .post("/todos")
        .header("username", "ann")
        .body_json(&json!({ "title": "taxes", "deadline": "2031-04-15" }))
        .send()
        .await;

    resp.assert_status(StatusCode::CREATED);
    assert_eq!(body_json(resp).await["deadline"], "2031-04-15T00:00:00.000Z");
}

#[tokio::test]
async fn invalid_deadline_returns_400() {
    let cli = client();
    create_user(&cli, "ann").await;

    let resp = cli
        .post("/todos")
        .header("username", "ann")
        .body_json(&json!({ "title": "taxes", "deadline": "someday" }))
        .send()
        .await;

    resp.assert_status(StatusCode::BAD_REQUEST);
    assert!(list_todos(&cli, "ann").await.is_empty());
}

#[tokio::test]
async fn eleventh_todo_on_free_plan_returns_403() {
    let cli = client();
    create_user(&cli, "ann").await;

    for i in 0..10 {
        create_todo(&cli, "ann", &format!("todo {i}"))
            .await
            .assert_status(StatusCode::CREATED);
    }
    let resp = create_todo(&cli, "ann", "one too many").await;

    resp.assert_status(StatusCode::FORBIDDEN);
    assert!(body_json(resp).await["error"].is_string());
    assert_eq!(list_todos(&cli, "ann").await.len(), 10);
}

#[tokio::test]
async fn pro_user_can_exceed_quota() {
    let cli = client();
    let user = create_user(&cli, "ann").await;
    cli.patch(format!("/users/{}/pro", user["id"].as_str().unwrap()))
        .send()
        .await
        .assert_status_is_ok();

    for i in 0..11 {
        create_todo(&cli, "ann", &format!("todo {i}"))
            .await
            .assert_status(StatusCode::CREATED);
    }

    assert_eq!(list_todos(&cli, "ann").await.len(), 11);
}

#[tokio::test]
async fn update_todo_overwrites_title_and_deadline_only() {
    let cli = client();
    create_user(&cli, "ann").await;
    let created = body_json(create_todo(&cli, "ann", "draft").await).await;
    let id = created["id"].as_str().unwrap();

    let resp = cli
        .put(format!("/todos/{id}"))
        .header("username", "ann")
        .body_json(&json!({ "title": "final", "deadline": "2032-01-01T00:00:00Z" }))
        .send()
        .await;

    resp.assert_status_is_ok();
    let updated = body_json(resp).await;
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["title"], "final");
    assert_eq!(updated["deadline"], "2032-01-01T00:00:00.000Z");
    assert_eq!(updated["done"], false);
    assert_eq!(updated["created_at"], created["created_at"]);
}

#[tokio::test]
async fn mark_done_is_repeatable() {
    let cli = client();
    create_user(&cli, "ann").await;
    let created = body_json(create_todo(&cli, "ann", "chore").await).await;
    let uri = format!("/todos/{}/done", created["id"].as_str().unwrap());

    for _ in 0..2 {
        let resp = cli.patch(&uri).header("username", "ann").send().await;
        resp.assert_status_is_ok();
        assert_eq!(body_json(resp).await["done"], true);
    }
}

#[tokio::test]
async fn malformed_todo_id_returns_400() {
    let cli = client();
    create_user(&cli, "ann").await;

    cli.put("/todos/not-a-uuid")
        .header("username", "ann")
        .body_json(&json!({ "title": "x", "deadline": "2030-01-01" }))
        .send()
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    cli.patch("/todos/not-a-uuid/done")
        .header("username", "ann")
        .send()
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    cli.delete("/todos/not-a-uuid")
        .header("username", "ann")
        .send()
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_canonical_todo_id_returns_400() {
    let cli = client();
    create_user(&cli, "ann").await;
    let created = body_json(create_todo(&cli, "ann", "chore").await).await;
    let id = uuid::Uuid::parse_str(created["id"].as_str().unwrap()).unwrap();

    let resp = cli
        .patch(format!("/todos/{}/done", id.simple()))
        .header("username", "ann")
        .send()
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);
    assert!(body_json(resp).await["error"].is_string());
    cli.delete(format!("/todos/{}", id.urn()))
        .header("username", "ann")
        .send()
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let todos = list_todos(&cli, "ann").await;
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0]["done"], false);
}

#[tokio::test]
async fn unknown_todo_id_returns_404() {
    let cli = client();
    create_user(&cli, "ann").await;

    cli.patch(format!("/todos/{}/done", uuid::Uuid::new_v4()))
        .header("username", "ann")
        .send()
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn todos_are_isolated_between_users() {
    let cli = client();
    create_user(&cli, "ann").await;
    create_user(&cli, "bob").await;
    let bobs = body_json(create_todo(&cli, "bob", "bob's secret").await).await;
    let id = bobs["id"].as_str().unwrap();

    cli.patch(format!("/todos/{id}/done"))
        .header("username", "ann")
        .send()
        .await
        .assert_status(StatusCode::NOT_FOUND);
    cli.delete(format!("/todos/{id}"))
        .header("username", "ann")
        .send()
        .await
        .assert_status(StatusCode::NOT_FOUND);

    assert!(list_todos(&cli, "ann").await.is_empty());
    let remaining = list_todos(&cli, "bob").await;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["done"], false);
}

#[tokio::test]
async fn delete_removes_exactly_one_todo() {
    let cli = client();
    create_user(&cli, "ann").await;
    let keep = body_json(create_todo(&cli, "ann", "keep").await).await;
    let gone = body_json(create_todo(&cli, "ann", "gone").await).await;
    let uri = format!("/todos/{}", gone["id"].as_str().unwrap());

    let resp = cli.delete(&uri).header("username", "ann").send().await;
    resp.assert_status(StatusCode::NO_CONTENT);
    assert!(resp.0.into_body().into_bytes().await.unwrap().is_empty());

    let left = list_todos(&cli, "ann").await;
    assert_eq!(left.len(), 1);
    assert_eq!(left[0]["id"], keep["id"]);

    cli.delete(&uri)
        .header("username", "ann")
        .send()
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn stores_are_independent_per_app() {
    let first = client();
    let second = client();
    create_user(&first, "ann").await;

    create_user(&second, "ann").await;
}

// --- request validation ---

#[tokio::test]
async fn incomplete_user_body_returns_json_400() {
    let cli = client();

    let resp = cli
        .post("/users")
        .body_json(&json!({ "name": "A" }))
        .send()
        .await;

    resp.assert_status(StatusCode::BAD_REQUEST);
    assert!(body_json(resp).await["error"].is_string());
}

#[tokio::test]
async fn incomplete_todo_body_returns_json_400() {
    let cli = client();
    create_user(&cli, "ann").await;

    let resp = cli
        .post("/todos")
        .header("username", "ann")
        .body_json(&json!({ "title": "no deadline" }))
        .send()
        .await;

    resp.assert_status(StatusCode::BAD_REQUEST);
    assert!(body_json(resp).await["error"].is_string());
    assert!(list_todos(&cli, "ann").await.is_empty());
}

#[tokio::test]
async fn unknown_route_returns_json_404() {
    let cli = client();

    let resp = cli.get("/nowhere").send().await;

    resp.assert_status(StatusCode::NOT_FOUND);
    assert!(body_json(resp).await["error"].is_string());
}

// --- service surface ---

#[tokio::test]
async fn health_returns_ok() {
    let cli = client();

    let resp = cli.get("/health").send().await;

    resp.assert_status_is_ok();
    resp.assert_text("OK").await;
}

#[tokio::test]
async fn openapi_document_lists_the_routes() {
    let cli = client();

    let resp = cli.get("/openapi.json").send().await;

    resp.assert_status_is_ok();
    let spec = body_json(resp).await;
    for path in ["/users", "/users/{id}", "/users/{id}/pro", "/todos", "/todos/{id}", "/todos/{id}/done"] {
        assert!(spec["paths"].get(path).is_some(), "missing {path}");
    }
}
