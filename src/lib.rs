//! HTTP bridge between a consensus engine and its peers: decodes wire
//! requests into typed protocol messages, invokes the engine, and
//! encodes results with the transport status semantics peers expect.

pub mod cluster;
pub mod config;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod rpc;
pub mod server;
pub mod trace;
