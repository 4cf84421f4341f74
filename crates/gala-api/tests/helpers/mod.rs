//! Test helpers: build the app router over in-memory fakes.
//!
//! Run from the workspace root: `cargo test -p gala-api`.

pub mod fakes;

use std::sync::Arc;

use axum_test::TestServer;
use gala_api::setup;
use gala_api::RegistrationBackend;
use gala_core::Config;
use gala_store::RemoteStore;

use fakes::{FakeDrive, FakeRegistration};

/// Test application: server plus handles on the fakes behind it.
pub struct TestApp {
    pub server: TestServer,
    pub store: Arc<FakeDrive>,
    pub registration: Arc<FakeRegistration>,
}

pub fn test_config() -> Config {
    Config {
        server_port: 0,
        environment: "test".to_string(),
        cors_origins: vec!["*".to_string()],
        drive_api_key: "test-key".to_string(),
        gallery_root_folder_id: "root".to_string(),
        drive_api_base: "http://localhost:0".to_string(),
        upstream_timeout_secs: 5,
        upstream_connect_timeout_secs: 2,
        gallery_cache_ttl_secs: 3600,
        max_tree_depth: 10,
        max_folders_visited: 200,
        seed_enabled: true,
        registration_api_url: Some("http://localhost:0".to_string()),
        registration_api_key: Some("test".to_string()),
    }
}

/// Build a test app over the given fakes.
pub fn setup_test_app_with(config: Config, store: Arc<FakeDrive>) -> TestApp {
    let registration = Arc::new(FakeRegistration::default());
    let state = setup::build_state(
        &config,
        store.clone() as Arc<dyn RemoteStore>,
        Some(registration.clone() as Arc<dyn RegistrationBackend>),
    );
    let router = setup::routes::setup_routes(&config, state).expect("router builds");
    let server = TestServer::new(router).expect("test server starts");
    TestApp {
        server,
        store,
        registration,
    }
}

/// Default app: the standard event tree, registration configured.
pub fn setup_test_app() -> TestApp {
    setup_test_app_with(test_config(), Arc::new(FakeDrive::event_tree()))
}
