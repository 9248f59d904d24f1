/// Implements [`Store`](crate::store::Store) for types that are persisted as a
/// single JSON file under the user's home directory.
///
/// Files are written with owner-only permissions on unix since the auth store
/// holds a bearer token.
#[macro_export]
macro_rules! impl_store {
    ($($name:ty),+ $(,)?) => ($(
        #[async_trait::async_trait]
        impl $crate::store::Store for $name {
            async fn new() -> Result<Self> {
                use anyhow::{Context as _};

                let path = Self::path()?;

                if fs::metadata(path.clone()).await.is_err() {
                    log::debug!("No store at {}, creating default", path.display());

                    return Self::default().save().await;
                }

                let mut file = File::open(path.clone())
                    .await
                    .context("Error opening file")?;

                let mut buffer = String::new();
                file.read_to_string(&mut buffer).await?;

                serde_json::from_str(&buffer)
                    .with_context(|| format!("Failed to deserialize {}", path.display()))
            }

            async fn save(&self) -> Result<Self> {
                use anyhow::{Context as _};

                let path = Self::path()?;

                fs::create_dir_all(path.parent().context("Failed to get store directory")?)
                    .await
                    .context("Failed to create store directory")?;

                let mut options = fs::OpenOptions::new();
                options.write(true).create(true).truncate(true);

                // owner only from creation on
                #[cfg(unix)]
                options.mode(0o600);

                let mut file = options
                    .open(&path)
                    .await
                    .context("Error opening file")?;

                file.write_all(
                    serde_json::to_string(&self)
                        .context("Failed to serialize")?
                        .as_bytes(),
                )
                .await
                .context("Failed to write store")?;

                file.flush().await.context("Failed to write store")?;

                // files from older runs keep their mode on open
                #[cfg(unix)]
                {
                    use std::os::unix::fs::PermissionsExt;

                    if let Err(error) =
                        fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600)).await
                    {
                        log::warn!("Failed to restrict {}: {error}", path.display());
                    }
                }

                log::debug!("Saved store to {}", path.display());

                Ok(self.clone())
            }
        }
    )+)
}
