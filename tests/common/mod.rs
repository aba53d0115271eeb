#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use std::sync::Arc;
use tower::ServiceExt;
use user_registry::{
    AppState,
    cache::UserCache,
    config::Config,
    error::AppError,
    routes,
    store::{UserRecord, UserStore},
};

pub fn test_config() -> Config {
    Config {
        db_name: "app".into(),
        db_user: "app".into(),
        db_password: "secret".into(),
        db_host: "localhost".into(),
        db_port: "5432".into(),
        redis_host: "localhost".into(),
        redis_port: "6379".into(),
        app_env: "prod".into(),
        instance_id: "1".into(),
        brand_logo_url: None,
        server_host: "0.0.0.0".into(),
        server_port: 8000,
    }
}

/// In-memory users table standing in for Postgres.
#[derive(Default)]
pub struct FakeStore {
    rows: Mutex<Vec<UserRecord>>,
    unreachable: AtomicBool,
}

impl FakeStore {
    pub fn set_unreachable(&self, unreachable: bool) {
        self.unreachable.store(unreachable, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), AppError> {
        if self.unreachable.load(Ordering::SeqCst) {
            Err(AppError::StoreUnavailable(sqlx::Error::PoolTimedOut))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl UserStore for FakeStore {
    async fn ping(&self) -> Result<(), AppError> {
        self.check()
    }

    async fn ensure_table(&self) -> Result<(), AppError> {
        self.check()
    }

    async fn insert_user(&self, name: &str, surname: &str, age: i32) -> Result<i32, AppError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let id = rows.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        rows.push(UserRecord {
            id,
            name: name.to_string(),
            surname: surname.to_string(),
            age,
        });
        Ok(id)
    }

    async fn recent_users(&self, limit: i64) -> Result<Vec<UserRecord>, AppError> {
        self.check()?;
        let rows = self.rows.lock().unwrap();
        let mut recent: Vec<UserRecord> = rows.clone();
        recent.sort_by(|a, b| b.id.cmp(&a.id));
        recent.truncate(limit as usize);
        Ok(recent)
    }
}

/// In-memory key-value cache standing in for Redis.
#[derive(Default)]
pub struct FakeCache {
    entries: Mutex<HashMap<String, (String, Instant)>>,
    unreachable: AtomicBool,
}

impl FakeCache {
    pub fn set_unreachable(&self, unreachable: bool) {
        self.unreachable.store(unreachable, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), AppError> {
        if self.unreachable.load(Ordering::SeqCst) {
            Err(AppError::CacheUnavailable(redis::RedisError::from((
                redis::ErrorKind::IoError,
                "connection refused",
            ))))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl UserCache for FakeCache {
    async fn ping(&self) -> Result<(), AppError> {
        self.check()
    }

    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        self.check()?;
        let mut entries = self.entries.lock().unwrap();
        match entries.get(key) {
            Some((value, deadline)) if Instant::now() < *deadline => Ok(Some(value.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set_ex(&self, key: &str, value: &str, ttl_secs: u64) -> Result<(), AppError> {
        self.check()?;
        let deadline = Instant::now() + Duration::from_secs(ttl_secs);
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_string(), deadline));
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), AppError> {
        self.check()?;
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

pub fn app(store: Arc<FakeStore>, cache: Option<Arc<FakeCache>>) -> Router {
    let cache = cache.map(|c| c as Arc<dyn UserCache>);
    routes::create_router(AppState::new(test_config(), store, cache))
}

pub async fn get(router: &Router, path: &str) -> Response<Body> {
    router
        .clone()
        .oneshot(
            Request::builder()
                .uri(path)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn post_form(router: &Router, path: &str, body: &str) -> Response<Body> {
    router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}
