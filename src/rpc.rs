use serde::{Deserialize, Serialize};

/// Wire messages exchanged with consensus peers.
///
/// Request containers carry `#[serde(default)]` so a body with missing
/// fields decodes to zero values; unknown fields are ignored. Semantic
/// validation (term comparisons, log matching) belongs to the engine,
/// not to decoding.

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoteRequest {
    pub candidate_name: String,
    pub term: u64,
    pub last_log_index: u64,
    pub last_log_term: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VoteResponse {
    pub term: u64,
    pub vote_granted: bool,
}

/// A replicated log entry. Opaque to the bridge: the command payload is
/// forwarded to the engine, never interpreted here.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub index: u64,
    pub term: u64,
    pub command: Vec<u8>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppendEntriesRequest {
    pub leader_name: String,
    pub term: u64,
    pub prev_log_index: u64,
    pub prev_log_term: u64,
    pub entries: Vec<LogEntry>,
    pub commit_index: u64,
}

/// On `success == false` the leader uses `index`/`commit_index` to step
/// its replication cursor back for this follower and resend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppendEntriesResponse {
    pub term: u64,
    pub index: u64,
    pub commit_index: u64,
    pub success: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotRequest {
    pub leader_name: String,
    pub last_included_index: u64,
    pub last_included_term: u64,
    pub state: Vec<u8>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotResponse {
    pub success: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Peer {
    pub name: String,
    pub connection_string: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotRecoveryRequest {
    pub leader_name: String,
    pub last_included_index: u64,
    pub last_included_term: u64,
    pub peers: Vec<Peer>,
    pub state: Vec<u8>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRecoveryResponse {
    pub success: bool,
    pub term: u64,
    pub commit_index: u64,
}

/// Application-level membership command. Not a consensus primitive: it
/// must be linearized through the authoritative node, so the bridge
/// hands it to a `CommandDispatcher` instead of applying it locally.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoinCommand {
    pub name: String,
    pub connection_string: String,
}
