//! One handler per wire operation, all funneled through a single
//! decode → engine call → encode helper so the failure symmetry
//! (decode error and engine refusal both become 500 with an empty
//! body) is enforced in exactly one place.

use std::convert::Infallible;
use std::future::Future;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;
use warp::http::header::{HeaderValue, CONTENT_TYPE};
use warp::http::StatusCode;
use warp::hyper::Body;
use warp::reply::Response;
use warp::Reply;

use crate::error::BridgeError;
use crate::rpc::{
    AppendEntriesRequest, JoinCommand, SnapshotRecoveryRequest, SnapshotRequest, VoteRequest,
};
use crate::server::{paths, Bridge};

/// Server error with an empty body. Decode failures and engine refusals
/// are indistinguishable on the wire; the remote peer resends if it
/// cares.
fn error_response() -> Response {
    warp::reply::with_status(warp::reply(), StatusCode::INTERNAL_SERVER_ERROR).into_response()
}

fn decode<Req: DeserializeOwned>(body: &Bytes) -> crate::error::Result<Req> {
    serde_json::from_slice(body).map_err(BridgeError::from)
}

/// Decode the body into `Req`, run the engine operation, encode the
/// response. `op` returning `None` means the engine declined; that and
/// a decode failure short-circuit to the same empty server error.
async fn consensus_op<Req, Resp, F, Fut>(endpoint: &'static str, body: Bytes, op: F) -> Response
where
    Req: DeserializeOwned,
    Resp: Serialize,
    F: FnOnce(Req) -> Fut,
    Fut: Future<Output = Option<Resp>>,
{
    let req = match decode::<Req>(&body) {
        Ok(req) => req,
        Err(e) => {
            tracing::warn!(endpoint, error = %e, "request rejected");
            return error_response();
        }
    };

    match op(req).await {
        Some(resp) => warp::reply::json(&resp).into_response(),
        None => {
            tracing::warn!(endpoint, error = %BridgeError::EngineRefusal, "request rejected");
            error_response()
        }
    }
}

pub async fn vote(body: Bytes, bridge: Bridge) -> Result<Response, Infallible> {
    Ok(consensus_op(paths::VOTE, body, move |req: VoteRequest| async move {
        tracing::debug!(url = %bridge.local_url(), endpoint = paths::VOTE, candidate = %req.candidate_name, "[recv] POST");
        bridge.engine.request_vote(req).await
    })
    .await)
}

pub async fn append_entries(body: Bytes, bridge: Bridge) -> Result<Response, Infallible> {
    Ok(consensus_op(
        paths::LOG_APPEND,
        body,
        move |req: AppendEntriesRequest| async move {
            tracing::debug!(url = %bridge.local_url(), endpoint = paths::LOG_APPEND, entries = req.entries.len(), "[recv] POST");
            let resp = bridge.engine.append_entries(req).await;
            if let Some(resp) = &resp {
                if !resp.success {
                    // Logical rejection still travels as 200; the leader
                    // steps its cursor back and resends.
                    tracing::debug!(
                        term = resp.term,
                        index = resp.index,
                        "append rejected, step back"
                    );
                }
            }
            resp
        },
    )
    .await)
}

pub async fn snapshot(body: Bytes, bridge: Bridge) -> Result<Response, Infallible> {
    Ok(
        consensus_op(paths::SNAPSHOT, body, move |req: SnapshotRequest| async move {
            tracing::debug!(url = %bridge.local_url(), endpoint = paths::SNAPSHOT, "[recv] POST");
            bridge.engine.request_snapshot(req).await
        })
        .await,
    )
}

pub async fn snapshot_recovery(body: Bytes, bridge: Bridge) -> Result<Response, Infallible> {
    Ok(consensus_op(
        paths::SNAPSHOT_RECOVERY,
        body,
        move |req: SnapshotRecoveryRequest| async move {
            tracing::debug!(url = %bridge.local_url(), endpoint = paths::SNAPSHOT_RECOVERY, "[recv] POST");
            bridge.engine.snapshot_recovery(req).await
        },
    )
    .await)
}

/// Membership entry point. A well-formed command is handed to the
/// apply-or-forward dispatcher, never applied locally here; its payload
/// is relayed verbatim. A malformed command never reaches the
/// dispatcher.
pub async fn join(body: Bytes, bridge: Bridge) -> Result<Response, Infallible> {
    let command: JoinCommand = match decode(&body) {
        Ok(command) => command,
        Err(e) => {
            tracing::warn!(endpoint = paths::JOIN, error = %e, "request rejected");
            return Ok(error_response());
        }
    };

    tracing::debug!(name = %command.name, "received join request");

    match bridge.dispatcher.dispatch(command).await {
        Ok(payload) => {
            let mut resp = Response::new(Body::from(payload));
            resp.headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            Ok(resp)
        }
        Err(e) => {
            tracing::warn!(endpoint = paths::JOIN, error = %e, "dispatch failed");
            Ok(error_response())
        }
    }
}

pub async fn log_entries(bridge: Bridge) -> Result<Response, Infallible> {
    tracing::debug!(url = %bridge.local_url(), endpoint = paths::LOG, "[recv] GET");
    let entries = bridge.engine.log_entries().await;
    Ok(warp::reply::json(&entries).into_response())
}

pub async fn name(bridge: Bridge) -> Result<Response, Infallible> {
    tracing::debug!(url = %bridge.local_url(), endpoint = paths::NAME, "[recv] GET");
    Ok(bridge.engine.name().into_response())
}

pub async fn etcd_url(bridge: Bridge) -> Result<Response, Infallible> {
    tracing::debug!(url = %bridge.local_url(), endpoint = paths::ETCD_URL, "[recv] GET");
    Ok(bridge.etcd_url.clone().into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::{VoteRequest, VoteResponse};

    async fn body_bytes(resp: Response) -> Bytes {
        warp::hyper::body::to_bytes(resp.into_body()).await.unwrap()
    }

    #[tokio::test]
    async fn decode_failure_short_circuits_before_the_engine() {
        let resp = consensus_op::<VoteRequest, VoteResponse, _, _>(
            paths::VOTE,
            Bytes::from_static(b"{ truncated"),
            |_req| async move { unreachable!("engine must not be called") },
        )
        .await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_bytes(resp).await.is_empty());
    }

    #[tokio::test]
    async fn engine_refusal_renders_like_a_decode_failure() {
        let resp = consensus_op::<VoteRequest, VoteResponse, _, _>(
            paths::VOTE,
            Bytes::from_static(b"{}"),
            |_req| async move { None },
        )
        .await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_bytes(resp).await.is_empty());
    }

    #[tokio::test]
    async fn engine_response_is_encoded_with_status_ok() {
        let resp = consensus_op::<VoteRequest, VoteResponse, _, _>(
            paths::VOTE,
            Bytes::from_static(b"{\"term\": 4}"),
            |req| async move {
                assert_eq!(req.term, 4);
                Some(VoteResponse {
                    term: 4,
                    vote_granted: true,
                })
            },
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_bytes(resp).await;
        let decoded: VoteResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(decoded.term, 4);
        assert!(decoded.vote_granted);
    }
}
