//! HTTP API over one shared [`Database`].
//!
//! | Method | Path           | Body                 | Response                          |
//! |--------|----------------|----------------------|-----------------------------------|
//! | GET    | `/api/health`  |                      | `{status, tables}`                |
//! | POST   | `/api/execute` | `{command}`          | `CommandResponse` (400 on error)  |
//! | POST   | `/api/batch`   | `{commands: [...]}`  | `{results, succeeded, failed}`    |
//! | GET    | `/api/tables`  |                      | `{tables}`                        |
//! | GET    | `/api/schemas` |                      | `[TableSchema]`                   |
//! | POST   | `/api/reset`   |                      | `{status}`                        |

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use txt2db_core::script::run_commands;
use txt2db_core::{CommandResponse, Database, TableSchema};

pub type SharedDb = Arc<Mutex<Database>>;

#[derive(Debug, Deserialize)]
pub struct ExecuteRequest {
    pub command: String,
}

#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    pub commands: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub results: Vec<CommandResponse>,
    pub succeeded: usize,
    pub failed: usize,
}

pub fn router(db: SharedDb) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/execute", post(execute))
        .route("/api/batch", post(batch))
        .route("/api/tables", get(tables))
        .route("/api/schemas", get(schemas))
        .route("/api/reset", post(reset))
        .with_state(db)
}

async fn health(State(db): State<SharedDb>) -> Json<Value> {
    let tables = db.lock().await.table_names().len();
    Json(json!({ "status": "ok", "tables": tables }))
}

async fn execute(
    State(db): State<SharedDb>,
    Json(req): Json<ExecuteRequest>,
) -> (StatusCode, Json<CommandResponse>) {
    debug!(command = %req.command, "execute");
    let response = db.lock().await.execute_response(&req.command);
    let status = if response.is_error() {
        warn!(error = ?response.error, "command rejected");
        StatusCode::BAD_REQUEST
    } else {
        info!(kind = response.kind.as_deref().unwrap_or("-"), table = ?response.table, "command executed");
        StatusCode::OK
    };
    (status, Json(response))
}

async fn batch(State(db): State<SharedDb>, Json(req): Json<BatchRequest>) -> Json<BatchResponse> {
    let report = {
        let mut db = db.lock().await;
        run_commands(&mut db, &req.commands)
    };
    Json(BatchResponse {
        results: report.entries.iter().map(|e| e.response()).collect(),
        succeeded: report.succeeded(),
        failed: report.failed(),
    })
}

async fn tables(State(db): State<SharedDb>) -> Json<Value> {
    Json(json!({ "tables": db.lock().await.table_names() }))
}

async fn schemas(State(db): State<SharedDb>) -> Json<Vec<TableSchema>> {
    Json(db.lock().await.schemas())
}

async fn reset(State(db): State<SharedDb>) -> Json<Value> {
    db.lock().await.reset();
    Json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    fn app() -> (SharedDb, Router) {
        let db: SharedDb = Arc::new(Mutex::new(Database::new()));
        (db.clone(), router(db))
    }

    async fn call(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(v) => builder
                .header("content-type", "application/json")
                .body(Body::from(v.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn execute_create_insert_select() {
        let (_db, app) = app();
        let (status, body) = call(
            app.clone(),
            "POST",
            "/api/execute",
            Some(json!({ "command": "make table t fields a, b" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["type"], "create");
        assert_eq!(body["table"], "t");

        call(
            app.clone(),
            "POST",
            "/api/execute",
            Some(json!({ "command": "insert into t values 1, x" })),
        )
        .await;

        let (status, body) = call(
            app,
            "POST",
            "/api/execute",
            Some(json!({ "command": "select * from t where a = 1" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["output"], "a\tb\n1\tx");
        assert_eq!(body["row_count"], 1);
    }

    #[tokio::test]
    async fn engine_errors_are_bad_requests() {
        let (_db, app) = app();
        let (status, body) = call(
            app,
            "POST",
            "/api/execute",
            Some(json!({ "command": "select * from missing" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Table missing does not exist");
    }

    #[tokio::test]
    async fn batch_keeps_going_after_failures() {
        let (db, app) = app();
        let (status, body) = call(
            app,
            "POST",
            "/api/batch",
            Some(json!({ "commands": [
                "make table t fields a",
                "insert into nope values 1",
                "insert into t values 1",
            ]})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["succeeded"], 2);
        assert_eq!(body["failed"], 1);
        assert_eq!(body["results"].as_array().map(Vec::len), Some(3));
        assert_eq!(db.lock().await.table("t").map(|t| t.rows.len()), Some(1));
    }

    #[tokio::test]
    async fn tables_schemas_and_reset() {
        let (db, app) = app();
        db.lock().await.execute("make table people fields name, age").unwrap();

        let (_, body) = call(app.clone(), "GET", "/api/tables", None).await;
        assert_eq!(body["tables"], json!(["people"]));

        let (_, body) = call(app.clone(), "GET", "/api/schemas", None).await;
        assert_eq!(body[0]["name"], "people");
        assert_eq!(body[0]["columns"][1]["name"], "age");
        assert_eq!(body[0]["columns"][1]["type"], "TEXT");

        let (status, _) = call(app.clone(), "POST", "/api/reset", None).await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = call(app, "GET", "/api/health", None).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["tables"], 0);
    }
}
