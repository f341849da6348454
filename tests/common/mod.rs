#![allow(dead_code)]

use axum::{
    extract::{FromRequest, Multipart, OriginalUri, Path, Request, State},
    http::{header, HeaderMap, Method, StatusCode},
    middleware::{from_fn_with_state, Next},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use reqwest::Client;
use serde_json::{json, Value};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};
use tokio::net::TcpListener;

use patria_admin::{
    app,
    config::Config,
    entities::Staff,
    middleware::auth::{generate_token, SessionKeys},
    AppState,
};

pub const SECRET: &str = "integration-secret";

/// Every request the fake remote API received, as `METHOD /path`.
pub type Hits = Arc<Mutex<Vec<String>>>;

/// Bodies of the writes the fake remote API received. Multipart bodies are
/// kept as an object of their fields; file parts record the file name.
pub type Bodies = Arc<Mutex<Vec<(String, Value)>>>;

#[derive(Clone, Default)]
struct Upstream {
    hits: Hits,
    bodies: Bodies,
}

pub struct TestApp {
    pub base: String,
    pub upstream: String,
    pub client: Client,
    pub hits: Hits,
    pub bodies: Bodies,
    pub keys: SessionKeys,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub fn image_url(&self, filename: &str) -> String {
        format!("{}/uploads/{}", self.upstream, filename)
    }

    pub fn upstream_hits(&self, needle: &str) -> usize {
        self.hits
            .lock()
            .unwrap()
            .iter()
            .filter(|hit| hit.as_str() == needle)
            .count()
    }

    /// The last body written to `METHOD /path` on the fake remote API.
    pub fn upstream_body(&self, needle: &str) -> Option<Value> {
        self.bodies
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(hit, _)| hit.as_str() == needle)
            .map(|(_, body)| body.clone())
    }

    /// Signs in through the gateway and returns the session token.
    pub async fn login(&self, email: &str) -> String {
        let response = self
            .client
            .post(self.url("/auth/login"))
            .json(&json!({ "email": email, "password": "secret1" }))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let body = response
            .json::<Value>()
            .await
            .expect("Failed to parse response JSON");
        body["token"]
            .as_str()
            .expect("No token in login answer")
            .to_owned()
    }

    /// A session whose remote API token the fake backend rejects.
    pub fn stale_session(&self) -> String {
        let staff = Staff {
            id: "staff-admin".into(),
            name: "Amal".into(),
            email: "admin@patria.test".into(),
            role: "admin".into(),
            phone: None,
        };
        generate_token(&self.keys, &staff, "expired").expect("Failed to sign token")
    }
}

pub async fn spawn_app() -> TestApp {
    let fake = Upstream::default();
    let upstream = serve(fake_backend(fake.clone())).await;

    let values = HashMap::from([
        ("SECRET", SECRET.to_owned()),
        ("API_BASE_URL", format!("{upstream}/api/v1")),
        ("IMAGE_BASE_URL", format!("{upstream}/uploads/")),
        ("OFFER_IMAGE_LIMIT", "4096".to_owned()),
        ("PRODUCT_IMAGE_LIMIT", "16384".to_owned()),
    ]);
    let config = Config::from_lookup(|key| values.get(key).cloned()).expect("Bad test config");
    let keys = SessionKeys::new(SECRET, config.session_hours);
    let state = AppState::new(config).expect("Failed to build client");
    let base = serve(app(state)).await;

    TestApp {
        base,
        upstream,
        client: Client::new(),
        hits: fake.hits,
        bodies: fake.bodies,
        keys,
    }
}

async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Server failed");
    });
    format!("http://{addr}")
}

fn fake_backend(upstream: Upstream) -> Router {
    let api = Router::new()
        .route("/auth/login", post(login))
        .route(
            "/category",
            get(|headers: HeaderMap| async move { listing(&headers, category_list()) }).post(write),
        )
        .route(
            "/category/:id",
            get(|headers: HeaderMap, Path(id): Path<String>| async move {
                single(&headers, category_list(), &id)
            })
            .put(write)
            .delete(write),
        )
        .route(
            "/subcategory/",
            get(|headers: HeaderMap| async move { listing(&headers, subcategory_list()) }).post(write),
        )
        .route(
            "/subcategory/category/:id/",
            get(|headers: HeaderMap| async move { listing(&headers, subcategory_list()) }),
        )
        .route(
            "/subcategory/:id",
            get(|headers: HeaderMap, Path(id): Path<String>| async move {
                single(&headers, subcategory_list(), &id)
            })
            .put(write)
            .delete(write),
        )
        .route(
            "/product/",
            get(|headers: HeaderMap| async move { listing(&headers, product_list()) }),
        )
        .route("/product", post(write))
        .route(
            "/product/cat/:id",
            get(|headers: HeaderMap, Path(id): Path<String>| async move {
                listing(&headers, products_in(&id))
            }),
        )
        .route(
            "/product/:id",
            get(|headers: HeaderMap, Path(id): Path<String>| async move {
                single(&headers, product_list(), &id)
            })
            .put(write)
            .delete(write),
        )
        .route(
            "/products/:id/extras",
            get(|headers: HeaderMap| async move {
                listing(&headers, json!([{ "_id": "x1", "name": "Cream", "price": "0.75" }]))
            })
            .post(write),
        )
        .route("/products/:id/extras/:extra_id", put(write).delete(write))
        .route(
            "/ingredients",
            get(|headers: HeaderMap| async move {
                listing(&headers, json!([{ "_id": "i1", "name": "Milk" }]))
            })
            .post(write),
        )
        .route("/ingredients/:id", put(write).delete(write))
        .route("/offers", get(offers).post(write))
        .route("/review", get(reviews))
        .route(
            "/staff",
            get(|headers: HeaderMap| async move { listing(&headers, staff_list()) }).post(write),
        )
        .route(
            "/staff/:id",
            get(|headers: HeaderMap, Path(id): Path<String>| async move {
                single(&headers, staff_list(), &id)
            })
            .put(write)
            .delete(write),
        )
        .route(
            "/section",
            get(|headers: HeaderMap| async move { listing(&headers, section_list()) }).post(write),
        )
        .route(
            "/section/:id",
            get(|headers: HeaderMap, Path(id): Path<String>| async move {
                single(&headers, section_list(), &id)
            })
            .put(write)
            .delete(write),
        )
        .route(
            "/table",
            get(|headers: HeaderMap| async move { listing(&headers, table_list()) }).post(write),
        )
        .route(
            "/table/section/:id",
            get(|headers: HeaderMap| async move { listing(&headers, table_list()) }),
        )
        .route(
            "/table/:id",
            get(|headers: HeaderMap, Path(id): Path<String>| async move {
                single(&headers, table_list(), &id)
            })
            .put(write)
            .delete(write),
        )
        .route(
            "/order",
            get(|headers: HeaderMap| async move { listing(&headers, order_list()) }).post(write),
        )
        .route(
            "/order/:id",
            get(|headers: HeaderMap, Path(id): Path<String>| async move {
                single(&headers, order_list(), &id)
            })
            .patch(write)
            .delete(write),
        );

    Router::new()
        .nest("/api/v1", api)
        .route("/uploads/:filename", get(image))
        .layer(from_fn_with_state(upstream.clone(), record))
        .with_state(upstream)
}

async fn record(State(upstream): State<Upstream>, req: Request, next: Next) -> Response {
    upstream
        .hits
        .lock()
        .unwrap()
        .push(format!("{} {}", req.method(), req.uri().path()));
    next.run(req).await
}

fn rejected(headers: &HeaderMap) -> Option<Response> {
    match headers.get("token").and_then(|v| v.to_str().ok()) {
        Some("expired") | None => Some(
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "jwt expired" })),
            )
                .into_response(),
        ),
        Some(_) => None,
    }
}

fn listing(headers: &HeaderMap, records: Value) -> Response {
    if let Some(rejection) = rejected(headers) {
        return rejection;
    }
    Json(json!({ "data": records })).into_response()
}

fn single(headers: &HeaderMap, records: Value, id: &str) -> Response {
    if let Some(rejection) = rejected(headers) {
        return rejection;
    }
    let found = records
        .as_array()
        .and_then(|records| records.iter().find(|record| record["_id"] == id))
        .cloned();
    match found {
        Some(record) => Json(json!({ "data": record })).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "Record not found" })),
        )
            .into_response(),
    }
}

/// Records the body of a create, update or delete and answers like the
/// remote API does.
async fn write(
    State(upstream): State<Upstream>,
    OriginalUri(uri): OriginalUri,
    req: Request,
) -> Response {
    if let Some(rejection) = rejected(req.headers()) {
        return rejection;
    }
    let method = req.method().clone();
    let key = format!("{} {}", method, uri.path());
    let is_multipart = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("multipart/"));

    let body = if is_multipart {
        match Multipart::from_request(req, &()).await {
            Ok(multipart) => form_fields(multipart).await,
            Err(_) => Value::Null,
        }
    } else {
        Json::<Value>::from_request(req, &())
            .await
            .map(|Json(value)| value)
            .unwrap_or(Value::Null)
    };
    upstream.bodies.lock().unwrap().push((key, body.clone()));

    if method == Method::POST {
        (
            StatusCode::CREATED,
            Json(json!({ "message": "created", "data": { "_id": "new-id" } })),
        )
            .into_response()
    } else if method == Method::DELETE {
        Json(json!({ "message": "deleted" })).into_response()
    } else {
        Json(json!({ "message": "updated", "data": body })).into_response()
    }
}

async fn form_fields(mut multipart: Multipart) -> Value {
    let mut fields = serde_json::Map::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_owned();
        let value = match field.file_name().map(str::to_owned) {
            Some(file_name) => file_name,
            None => field.text().await.unwrap_or_default(),
        };
        fields.insert(name, Value::String(value));
    }
    Value::Object(fields)
}

async fn login(Json(body): Json<Value>) -> Response {
    let role = match (body["email"].as_str(), body["password"].as_str()) {
        (Some("admin@patria.test"), Some("secret1")) => "admin",
        (Some("waiter@patria.test"), Some("secret1")) => "waiter",
        (Some("chef@patria.test"), Some("secret1")) => "staff",
        _ => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "Invalid email or password" })),
            )
                .into_response()
        }
    };
    Json(json!({
        "token": format!("api-{role}"),
        "data": {
            "_id": format!("staff-{role}"),
            "name": "Test",
            "email": body["email"],
            "role": role
        }
    }))
    .into_response()
}

fn category_list() -> Value {
    json!([
        { "_id": "cat-drinks", "title": "Drinks", "image": "drinks.png" },
        { "_id": "cat-desserts", "title": "Desserts" }
    ])
}

/// Not filtered by category, like the remote list endpoint.
fn subcategory_list() -> Value {
    json!([
        { "_id": "sub-hot", "title": "Hot drinks", "category": "cat-drinks", "image": "hot.png" },
        {
            "_id": "sub-cold",
            "title": "Cold drinks",
            "category": { "_id": "cat-drinks", "title": "Drinks" }
        },
        { "_id": "sub-cakes", "title": "Cakes", "category": "cat-desserts" }
    ])
}

fn product_list() -> Value {
    json!([
        {
            "_id": "p1",
            "title": "Iced Latte",
            "price": "5",
            "category": "cat-drinks",
            "subCategory": "sub-hot",
            "image": { "filename": "latte.png" }
        },
        {
            "_id": "p2",
            "title": "Cheesecake",
            "price": 4,
            "category": { "_id": "cat-desserts", "title": "Desserts" },
            "subCategory": "sub-cakes"
        },
        {
            "_id": "p3",
            "title": "Hot Latte",
            "price": 3,
            "category": "cat-drinks",
            "subCategory": "sub-hot",
            "ingredients": "[\"milk\",\"espresso\"]"
        }
    ])
}

fn products_in(subcategory_id: &str) -> Value {
    let products: Vec<Value> = product_list()
        .as_array()
        .map(|products| {
            products
                .iter()
                .filter(|product| product["subCategory"] == subcategory_id)
                .cloned()
                .collect()
        })
        .unwrap_or_default();
    Value::Array(products)
}

fn staff_list() -> Value {
    json!([
        { "_id": "staff-admin", "name": "Amal", "email": "admin@patria.test", "role": "admin" },
        { "_id": "staff-waiter", "name": "Omar", "email": "waiter@patria.test", "role": "waiter" }
    ])
}

fn section_list() -> Value {
    json!([
        { "_id": "sec-terrace", "name": "Terrace" },
        { "_id": "sec-hall", "name": "Hall" }
    ])
}

/// Not filtered by section, like the remote list endpoint.
fn table_list() -> Value {
    json!([
        { "_id": "t2", "number": 7, "capacity": 4, "section": "sec-terrace" },
        { "_id": "t1", "number": 2, "section": { "_id": "sec-terrace", "name": "Terrace" } },
        { "_id": "t3", "number": 4, "section": "sec-hall" }
    ])
}

fn order_list() -> Value {
    json!([
        {
            "_id": "o1",
            "table": "t1",
            "status": "pending",
            "items": [{ "product": "p1", "quantity": 2 }],
            "createdAt": "2024-05-01T12:30:00Z"
        },
        {
            "_id": "o2",
            "table": "t2",
            "status": "Preparing",
            "items": [{ "product": "p3" }],
            "createdAt": "2024-05-01T12:05:00Z"
        },
        {
            "_id": "o3",
            "table": "t1",
            "status": "served",
            "createdAt": "2024-05-01T12:00:00Z"
        },
        {
            "_id": "o4",
            "table": "t2",
            "status": "canceled",
            "createdAt": "2024-05-01T12:10:00Z"
        }
    ])
}

async fn offers(headers: HeaderMap) -> Response {
    if let Some(rejection) = rejected(&headers) {
        return rejection;
    }
    Json(json!([
        { "_id": "o1", "image": "summer.png", "isActive": true },
        { "_id": "o2", "isActive": false }
    ]))
    .into_response()
}

async fn reviews(headers: HeaderMap) -> Response {
    if let Some(rejection) = rejected(&headers) {
        return rejection;
    }
    Json(json!({
        "data": [
            { "_id": "r1", "name": "Lina", "rate": 5, "food": 5 },
            { "_id": "r2", "rate": "4" },
            { "_id": "r3", "rate": 2, "comment": "Slow" }
        ]
    }))
    .into_response()
}

async fn image() -> Response {
    (
        [(header::CONTENT_TYPE, "image/png")],
        b"\x89PNG fake".to_vec(),
    )
        .into_response()
}
