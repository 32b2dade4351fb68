//! Test utilities for building an application over a temporary storage directory.

use std::path::Path;

use axum_test::TestServer;

use crate::config::{Config, StorageConfig};

pub fn create_test_config(dir: &Path) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        storage: StorageConfig {
            dir: dir.to_path_buf(),
            ..Default::default()
        },
    }
}

pub async fn create_test_app(dir: &Path) -> TestServer {
    let config = create_test_config(dir);

    let app = crate::Application::new(config).await.expect("Failed to create application");

    app.into_test_server()
}
