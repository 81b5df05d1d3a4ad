use async_trait::async_trait;
use bytes::Bytes;

use crate::rpc::JoinCommand;

/// Resolves a participant name to its reachable raft URL.
///
/// Consumed only for diagnostic logging; a failed lookup never fails a
/// request.
pub trait PeerResolver: Send + Sync {
    fn raft_url(&self, name: &str) -> Option<String>;
}

/// Apply-or-forward mechanism for mutating cluster commands.
///
/// Membership changes must be serialized through the single
/// authoritative node to avoid split views of cluster composition. The
/// implementation either applies the command locally (if this node is
/// authoritative) or forwards it there; the bridge relays whatever
/// payload comes back, verbatim.
#[async_trait]
pub trait CommandDispatcher: Send + Sync {
    async fn dispatch(&self, command: JoinCommand) -> anyhow::Result<Bytes>;
}
