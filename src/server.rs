use std::net::SocketAddr;
use std::sync::Arc;

use warp::Filter;

use crate::cluster::{CommandDispatcher, PeerResolver};
use crate::config::BridgeConfig;
use crate::engine::ConsensusEngine;
use crate::handlers;

/// Route path segments, declared once. The handlers use the same
/// constants for their diagnostic labels, so a renamed route cannot
/// leave stale endpoint names in the logs.
pub mod paths {
    pub const LOG: &str = "log";
    pub const APPEND: &str = "append";
    /// Diagnostic label for the two-segment append route.
    pub const LOG_APPEND: &str = "log/append";
    pub const VOTE: &str = "vote";
    pub const SNAPSHOT: &str = "snapshot";
    pub const SNAPSHOT_RECOVERY: &str = "snapshotRecovery";
    pub const ETCD_URL: &str = "etcdURL";
    pub const JOIN: &str = "join";
    pub const NAME: &str = "name";
}

/// Context shared by every handler: the local consensus participant,
/// the apply-or-forward dispatcher for membership commands, the peer
/// resolver used for diagnostics, and this node's published info.
///
/// Constructed once at startup and cloned (cheap `Arc` bumps) into each
/// request; handlers read it and never mutate it. Consensus state
/// changes only inside the engine.
#[derive(Clone)]
pub struct Bridge {
    pub engine: Arc<dyn ConsensusEngine>,
    pub dispatcher: Arc<dyn CommandDispatcher>,
    pub resolver: Arc<dyn PeerResolver>,
    pub etcd_url: String,
    bind_addr: SocketAddr,
}

impl Bridge {
    pub fn new(
        engine: Arc<dyn ConsensusEngine>,
        dispatcher: Arc<dyn CommandDispatcher>,
        resolver: Arc<dyn PeerResolver>,
        config: &BridgeConfig,
    ) -> Self {
        Self {
            engine,
            dispatcher,
            resolver,
            etcd_url: config.etcd_url.clone(),
            bind_addr: config.bind_addr,
        }
    }

    /// This node's raft URL, for request diagnostics. Falls back to the
    /// bare participant name when the resolver has no entry.
    pub(crate) fn local_url(&self) -> String {
        let name = self.engine.name();
        self.resolver.raft_url(&name).unwrap_or(name)
    }

    /// The full raft-facing route table.
    pub fn routes(
        &self,
    ) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
        let ctx = self.clone();
        let with_bridge = warp::any().map(move || ctx.clone());

        let log = warp::path(paths::LOG)
            .and(warp::path::end())
            .and(warp::get())
            .and(with_bridge.clone())
            .and_then(handlers::log_entries);

        let vote = warp::path(paths::VOTE)
            .and(warp::path::end())
            .and(warp::post())
            .and(warp::body::bytes())
            .and(with_bridge.clone())
            .and_then(handlers::vote);

        let append = warp::path(paths::LOG)
            .and(warp::path(paths::APPEND))
            .and(warp::path::end())
            .and(warp::post())
            .and(warp::body::bytes())
            .and(with_bridge.clone())
            .and_then(handlers::append_entries);

        let snapshot = warp::path(paths::SNAPSHOT)
            .and(warp::path::end())
            .and(warp::post())
            .and(warp::body::bytes())
            .and(with_bridge.clone())
            .and_then(handlers::snapshot);

        let snapshot_recovery = warp::path(paths::SNAPSHOT_RECOVERY)
            .and(warp::path::end())
            .and(warp::post())
            .and(warp::body::bytes())
            .and(with_bridge.clone())
            .and_then(handlers::snapshot_recovery);

        let etcd_url = warp::path(paths::ETCD_URL)
            .and(warp::path::end())
            .and(warp::get())
            .and(with_bridge.clone())
            .and_then(handlers::etcd_url);

        let join = warp::path(paths::JOIN)
            .and(warp::path::end())
            .and(warp::post())
            .and(warp::body::bytes())
            .and(with_bridge.clone())
            .and_then(handlers::join);

        let name = warp::path(paths::NAME)
            .and(warp::path::end())
            .and(warp::get())
            .and(with_bridge)
            .and_then(handlers::name);

        log.or(vote)
            .or(append)
            .or(snapshot)
            .or(snapshot_recovery)
            .or(etcd_url)
            .or(join)
            .or(name)
    }

    pub async fn serve(self) {
        let addr = self.bind_addr;
        tracing::info!(%addr, name = %self.engine.name(), "raft bridge listening");
        warp::serve(self.routes()).run(addr).await;
    }
}

#[cfg(test)]
mod tests {
    use super::paths;

    #[test]
    fn append_label_matches_its_route_segments() {
        assert_eq!(
            format!("{}/{}", paths::LOG, paths::APPEND),
            paths::LOG_APPEND
        );
    }
}
