//! Backing-store liveness probe.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Cheap reachability check against the persistent store
#[async_trait]
pub trait StoreHealth: Send + Sync {
    async fn ping(&self) -> Result<(), DomainError>;
}

#[cfg(any(test, feature = "testing"))]
pub use mock::MockStoreHealth;

#[cfg(any(test, feature = "testing"))]
mod mock {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use super::*;

    /// Store probe whose outcome is toggled by the test
    #[derive(Clone)]
    pub struct MockStoreHealth {
        up: Arc<AtomicBool>,
    }

    impl MockStoreHealth {
        pub fn up() -> Self {
            Self {
                up: Arc::new(AtomicBool::new(true)),
            }
        }

        pub fn down() -> Self {
            Self {
                up: Arc::new(AtomicBool::new(false)),
            }
        }

        pub fn set_up(&self, up: bool) {
            self.up.store(up, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl StoreHealth for MockStoreHealth {
        async fn ping(&self) -> Result<(), DomainError> {
            if self.up.load(Ordering::SeqCst) {
                Ok(())
            } else {
                Err(DomainError::internal("connection refused"))
            }
        }
    }
}
