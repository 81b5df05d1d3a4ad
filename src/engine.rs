use async_trait::async_trait;

use crate::rpc::{
    AppendEntriesRequest, AppendEntriesResponse, LogEntry, SnapshotRecoveryRequest,
    SnapshotRecoveryResponse, SnapshotRequest, SnapshotResponse, VoteRequest, VoteResponse,
};

/// The local consensus participant, as seen from the wire.
///
/// The bridge forwards each decoded request to the matching operation
/// exactly once and treats the call as synchronous: no timeout, no
/// cancellation, no reordering. All protocol correctness (term
/// comparisons, log matching, quorum rules) lives behind this trait.
///
/// `None` means the engine declined to produce a response for a
/// structurally valid request; the bridge renders that as a server
/// error, identically to a decode failure.
#[async_trait]
pub trait ConsensusEngine: Send + Sync {
    /// This participant's stable identifier within the cluster.
    fn name(&self) -> String;

    async fn request_vote(&self, req: VoteRequest) -> Option<VoteResponse>;

    async fn append_entries(&self, req: AppendEntriesRequest) -> Option<AppendEntriesResponse>;

    async fn request_snapshot(&self, req: SnapshotRequest) -> Option<SnapshotResponse>;

    async fn snapshot_recovery(
        &self,
        req: SnapshotRecoveryRequest,
    ) -> Option<SnapshotRecoveryResponse>;

    /// Current contents of the replicated log, oldest first.
    async fn log_entries(&self) -> Vec<LogEntry>;
}
