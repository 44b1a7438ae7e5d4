/// Import session outcome types
use serde::{Deserialize, Serialize};

/// Terminal outcome of one import session
///
/// Determined by the decode loop; the host decides user-visible messaging.
/// No retries happen at this layer - a `Failed` session is re-initiated from
/// scratch if the host wants to retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportStatus {
    /// Whole stream decoded
    Success,

    /// Stream ended before the declared frame count (truncated/corrupt)
    Failed,

    /// Host requested cancellation; partial results are discarded
    Cancelled,

    /// Host requested a stop; partial results are kept
    Stopped,
}

impl ImportStatus {
    /// Whether this outcome hands decoded buffers to the host
    ///
    /// Only `Success` and `Stopped` transfer ownership; `Failed` and
    /// `Cancelled` discard everything.
    pub fn delivers_buffers(self) -> bool {
        matches!(self, Self::Success | Self::Stopped)
    }
}
