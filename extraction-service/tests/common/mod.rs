use extraction_service::config::ExtractionConfig;
use extraction_service::startup::Application;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub upload_dir: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let upload_dir = format!("target/test-uploads-{}", Uuid::new_v4());

        let mut config = ExtractionConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing
        config.upload.dir = upload_dir.clone();

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp {
            address,
            upload_dir,
        }
    }

    /// Remove the per-test upload directory.
    pub async fn cleanup(&self) {
        let _ = tokio::fs::remove_dir_all(&self.upload_dir).await;
    }
}
