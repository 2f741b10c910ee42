use service_core::error::AppError;
use std::path::PathBuf;
use tokio::fs;

/// Uploaded PDFs are kept on local disk, one file per upload.
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub async fn new(base_path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let base_path = base_path.into();
        if !base_path.exists() {
            fs::create_dir_all(&base_path).await?;
        }
        Ok(Self { base_path })
    }

    pub async fn save(&self, filename: &str, data: Vec<u8>) -> Result<(), AppError> {
        let path = self.base_path.join(filename);
        fs::write(path, data).await?;
        Ok(())
    }
}
