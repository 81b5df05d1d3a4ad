use std::net::{Ipv4Addr, SocketAddr};

#[derive(Clone, Debug)]
pub struct BridgeConfig {
    /// Address the raft-facing HTTP listener binds to.
    pub bind_addr: SocketAddr,
    /// Externally published client URL, returned verbatim by `GET /etcdURL`.
    pub etcd_url: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 7001)),
            etcd_url: "http://127.0.0.1:4001".to_string(),
        }
    }
}
