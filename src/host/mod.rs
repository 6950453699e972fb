pub mod file_host;
pub mod relaunch;

pub use file_host::FileHost;
pub use relaunch::Relaunch;

use crate::error::AppResult;

/// The boundary through which the UI layer asks the native host for profile state and restarts.
///
/// Every call is a request/response pair; callers await each one before issuing the next.
#[allow(async_fn_in_trait)]
pub trait HostBridge {
    async fn get_active_profile(&self) -> AppResult<String>;
    async fn get_existing_profiles(&self) -> AppResult<Vec<String>>;
    async fn set_active_profile(&self, profile: &str) -> AppResult<()>;
    /// Terminal for the calling flow: on success the host process is being replaced.
    async fn restart(&self) -> AppResult<()>;
}

impl<T: HostBridge> HostBridge for &T {
    async fn get_active_profile(&self) -> AppResult<String> {
        (**self).get_active_profile().await
    }

    async fn get_existing_profiles(&self) -> AppResult<Vec<String>> {
        (**self).get_existing_profiles().await
    }

    async fn set_active_profile(&self, profile: &str) -> AppResult<()> {
        (**self).set_active_profile(profile).await
    }

    async fn restart(&self) -> AppResult<()> {
        (**self).restart().await
    }
}
