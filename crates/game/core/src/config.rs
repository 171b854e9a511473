/// Client-side casting configuration and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CastConfig {
    /// Release a fully charged, non-channeled cast without waiting for the
    /// host to report that the use action stopped.
    pub auto_release: bool,
}

impl CastConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_AUTO_RELEASE: bool = false;

    pub fn new() -> Self {
        Self {
            auto_release: Self::DEFAULT_AUTO_RELEASE,
        }
    }

    pub fn with_auto_release(auto_release: bool) -> Self {
        Self { auto_release }
    }
}

impl Default for CastConfig {
    fn default() -> Self {
        Self::new()
    }
}
