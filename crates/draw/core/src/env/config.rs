//! Config oracle trait.

use crate::config::DrawConfig;

/// Read-only access to geometry/motion tuning.
pub trait ConfigOracle: Send + Sync {
    /// The active tuning values. Expected to have passed
    /// [`DrawConfig::validate`](crate::config::DrawConfig::validate).
    fn tuning(&self) -> &DrawConfig;
}
