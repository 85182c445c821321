//! File-backed still camera for demos and tests.

use std::collections::HashMap;
use std::path::PathBuf;

use facehub_app::ports::Camera;
use facehub_domain::error::ServiceError;

/// Serves fixed image files keyed by source name.
#[derive(Debug, Clone, Default)]
pub struct StaticCamera {
    sources: HashMap<String, PathBuf>,
}

impl StaticCamera {
    /// Create a camera over the given source → file-path map.
    #[must_use]
    pub fn new(sources: HashMap<String, PathBuf>) -> Self {
        Self { sources }
    }
}

impl Camera for StaticCamera {
    async fn capture(&self, source: &str) -> Result<Vec<u8>, ServiceError> {
        let path = self
            .sources
            .get(source)
            .ok_or_else(|| ServiceError::new(format!("unknown camera source '{source}'")))?;

        tokio::fs::read(path).await.map_err(|err| {
            tracing::warn!(source = %source, error = %err, "can't read camera file");
            ServiceError::new("cannot read camera image")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn should_read_image_bytes_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xFF, 0xD8, 0xFF, 0xE0]).unwrap();

        let camera = StaticCamera::new(HashMap::from([(
            "front_door".to_string(),
            file.path().to_path_buf(),
        )]));

        let image = camera.capture("front_door").await.unwrap();
        assert_eq!(image, vec![0xFF, 0xD8, 0xFF, 0xE0]);
    }

    #[tokio::test]
    async fn should_fail_for_unknown_source() {
        let camera = StaticCamera::default();

        let err = camera.capture("garden").await.unwrap_err();

        assert_eq!(err.message(), "unknown camera source 'garden'");
    }

    #[tokio::test]
    async fn should_fail_when_file_missing() {
        let camera = StaticCamera::new(HashMap::from([(
            "front_door".to_string(),
            PathBuf::from("/nonexistent/image.jpg"),
        )]));

        let err = camera.capture("front_door").await.unwrap_err();

        assert_eq!(err.message(), "cannot read camera image");
    }
}
