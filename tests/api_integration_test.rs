// ==========================================
// API 层集成测试
// ==========================================
// 测试目标: 按端点表验证状态码与响应体契约
// 方式: tower oneshot，不真正监听端口
// ==========================================

mod test_helpers;

use axum::body::{self, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use test_helpers::create_test_router;

async fn response_json(response: Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("读取响应体失败");
    serde_json::from_slice(&bytes).expect("响应体不是 JSON")
}

async fn request(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    let req = match body {
        Some(v) => builder.body(Body::from(v.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(req).await.unwrap()
}

fn item_json(sku: &str, quantity: i64) -> Value {
    json!({
        "quantity": quantity,
        "sku": sku,
        "description": format!("desc-{sku}"),
        "store": "Main",
    })
}

// ==========================================
// GET /api/inventory
// ==========================================

#[tokio::test]
async fn test_get_inventory_empty() {
    let app = create_test_router();
    let response = request(&app, Method::GET, "/api/inventory", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await, json!([]));
}

#[tokio::test]
async fn test_get_inventory_orders_by_id_desc() {
    let app = create_test_router();
    let batch = json!([item_json("AB-0001", 1), item_json("AB-0002", 2)]);
    request(&app, Method::POST, "/api/inventory", Some(batch)).await;

    let response = request(&app, Method::GET, "/api/inventory", None).await;
    let data = response_json(response).await;
    let rows = data.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    // 最近插入在前
    assert_eq!(rows[0]["sku"], "AB-0002");
    assert_eq!(rows[1]["sku"], "AB-0001");
    assert!(rows[0]["id"].as_i64().unwrap() > rows[1]["id"].as_i64().unwrap());
}

// ==========================================
// POST /api/inventory（批量提交）
// ==========================================

#[tokio::test]
async fn test_submit_batch_returns_201_with_ids() {
    let app = create_test_router();
    let batch = json!([item_json("AB-1234", 10)]);

    let response = request(&app, Method::POST, "/api/inventory", Some(batch)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let data = response_json(response).await;
    let rows = data.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["sku"], "AB-1234");
    assert_eq!(rows[0]["quantity"], 10);
    assert!(rows[0]["id"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_submit_batch_upsert_keeps_id() {
    let app = create_test_router();

    let first = request(
        &app,
        Method::POST,
        "/api/inventory",
        Some(json!([item_json("AB-1234", 10)])),
    )
    .await;
    let first_id = response_json(first).await[0]["id"].as_i64().unwrap();

    // 同 sku 再次提交: 更新路径必须回报原 id 与新字段值
    let mut changed = item_json("AB-1234", 99);
    changed["description"] = json!("updated");
    let second = request(&app, Method::POST, "/api/inventory", Some(json!([changed]))).await;
    assert_eq!(second.status(), StatusCode::CREATED);

    let data = response_json(second).await;
    assert_eq!(data[0]["id"].as_i64().unwrap(), first_id);
    assert_eq!(data[0]["quantity"], 99);
    assert_eq!(data[0]["description"], "updated");

    let listed = request(&app, Method::GET, "/api/inventory", None).await;
    assert_eq!(response_json(listed).await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_submit_batch_rejects_duplicate_skus_in_request() {
    let app = create_test_router();
    let batch = json!([item_json("AB-0001", 1), item_json("AB-0001", 2)]);

    let response = request(&app, Method::POST, "/api/inventory", Some(batch)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response_json(response).await["error"],
        "Request contains duplicate SKUs"
    );

    // 原子性: 失败批次不得写入任何行
    let listed = request(&app, Method::GET, "/api/inventory", None).await;
    assert_eq!(response_json(listed).await, json!([]));
}

#[tokio::test]
async fn test_submit_batch_rejects_invalid_sku() {
    let app = create_test_router();
    let batch = json!([item_json("invalid SKU", 1)]);

    let response = request(&app, Method::POST, "/api/inventory", Some(batch)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let message = response_json(response).await["error"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(message.contains("SKU"));
}

#[tokio::test]
async fn test_submit_batch_coerces_string_quantity() {
    let app = create_test_router();
    let batch = json!([{
        "quantity": "42",
        "sku": "AB-1234",
        "description": "Widget",
        "store": "Main",
    }]);

    let response = request(&app, Method::POST, "/api/inventory", Some(batch)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response_json(response).await[0]["quantity"], 42);
}

#[tokio::test]
async fn test_submit_batch_rejects_non_numeric_quantity() {
    let app = create_test_router();
    let batch = json!([{
        "quantity": "ten",
        "sku": "AB-1234",
        "description": "Widget",
        "store": "Main",
    }]);

    let response = request(&app, Method::POST, "/api/inventory", Some(batch)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_submit_batch_rejects_empty_array_and_non_array() {
    let app = create_test_router();

    let response = request(&app, Method::POST, "/api/inventory", Some(json!([]))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = request(
        &app,
        Method::POST,
        "/api/inventory",
        Some(item_json("AB-0001", 1)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ==========================================
// POST /api/inventory/:sku（无条件插入）
// ==========================================

#[tokio::test]
async fn test_create_one_returns_200() {
    let app = create_test_router();
    let response = request(
        &app,
        Method::POST,
        "/api/inventory/AB-0001",
        Some(item_json("AB-0001", 5)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = response_json(response).await;
    assert_eq!(data["sku"], "AB-0001");
    assert!(data["id"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_create_one_rejects_existing_sku_via_unique_constraint() {
    // 与批量提交的 upsert 刻意不对称：单条新建不做冲突转更新
    let app = create_test_router();
    request(
        &app,
        Method::POST,
        "/api/inventory/AB-0001",
        Some(item_json("AB-0001", 5)),
    )
    .await;

    let response = request(
        &app,
        Method::POST,
        "/api/inventory/AB-0001",
        Some(item_json("AB-0001", 9)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_one_rejects_invalid_shape() {
    let app = create_test_router();
    let response = request(
        &app,
        Method::POST,
        "/api/inventory/AB-0001",
        Some(json!({"quantity": 1, "sku": "AB-0001"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ==========================================
// PUT /api/inventory/:sku（按当前 sku 覆盖）
// ==========================================

#[tokio::test]
async fn test_update_by_sku_overwrites_row() {
    let app = create_test_router();
    let created = request(
        &app,
        Method::POST,
        "/api/inventory",
        Some(json!([item_json("AB-0001", 1)])),
    )
    .await;
    let id = response_json(created).await[0]["id"].as_i64().unwrap();

    // 连 sku 一起改
    let response = request(
        &app,
        Method::PUT,
        "/api/inventory/AB-0001",
        Some(item_json("ZZ-9999", 7)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = response_json(response).await;
    assert_eq!(data["id"].as_i64().unwrap(), id);
    assert_eq!(data["sku"], "ZZ-9999");
    assert_eq!(data["quantity"], 7);
}

#[tokio::test]
async fn test_update_by_sku_404_when_absent() {
    let app = create_test_router();
    let response = request(
        &app,
        Method::PUT,
        "/api/inventory/XX-0000",
        Some(item_json("XX-0000", 1)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_by_sku_rejects_invalid_payload() {
    let app = create_test_router();
    request(
        &app,
        Method::POST,
        "/api/inventory",
        Some(json!([item_json("AB-0001", 1)])),
    )
    .await;

    let response = request(
        &app,
        Method::PUT,
        "/api/inventory/AB-0001",
        Some(item_json("not a sku", 1)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ==========================================
// DELETE /api/inventory/:sku
// ==========================================

#[tokio::test]
async fn test_delete_then_404_on_second_delete() {
    let app = create_test_router();
    request(
        &app,
        Method::POST,
        "/api/inventory",
        Some(json!([item_json("AB-0001", 1)])),
    )
    .await;

    let response = request(&app, Method::DELETE, "/api/inventory/AB-0001", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await, json!({ "message": "Success" }));

    // list() 不再包含该 sku
    let listed = request(&app, Method::GET, "/api/inventory", None).await;
    assert_eq!(response_json(listed).await, json!([]));

    // 再删一次 404
    let response = request(&app, Method::DELETE, "/api/inventory/AB-0001", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let data = response_json(response).await;
    assert!(data["error"].as_str().unwrap().contains("AB-0001"));
}
