//! Environment/runtime helpers

use std::path::Path;

use tracing::debug;

/// Ensure an output directory exists, creating it and its parents if needed.
pub async fn ensure_dir(dir: impl AsRef<Path>) -> anyhow::Result<()> {
    let dir = dir.as_ref();
    if tokio::fs::metadata(dir).await.is_ok() {
        return Ok(());
    }
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", dir.display()))?;
    debug!(dir = %dir.display(), "created output directory");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ensure_dir_creates_nested_dirs() -> anyhow::Result<()> {
        let tmp = tempfile::tempdir()?;
        let nested = tmp.path().join("a").join("b");
        ensure_dir(&nested).await?;
        assert!(nested.is_dir());
        // second call is a no-op
        ensure_dir(&nested).await?;
        Ok(())
    }
}
