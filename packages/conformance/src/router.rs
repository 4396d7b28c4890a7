//! Assembles the Axum [`Router`] for the mock node.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::state::NodeState;

/// Build the `/eth/v1/beacon` router over `state`.
pub fn build_router(state: Arc<NodeState>) -> Router {
    Router::new()
        .route("/eth/v1/beacon/genesis", get(handlers::genesis))
        // States
        .route("/eth/v1/beacon/states/{state_id}/root", get(handlers::state_root))
        .route("/eth/v1/beacon/states/{state_id}/fork", get(handlers::state_fork))
        .route(
            "/eth/v1/beacon/states/{state_id}/finality_checkpoints",
            get(handlers::finality_checkpoints),
        )
        .route(
            "/eth/v1/beacon/states/{state_id}/validators",
            get(handlers::list_validators),
        )
        .route(
            "/eth/v1/beacon/states/{state_id}/validators/{validator_id}",
            get(handlers::get_validator),
        )
        // Headers and blocks
        .route("/eth/v1/beacon/headers", get(handlers::list_headers))
        .route("/eth/v1/beacon/headers/{block_id}", get(handlers::get_header))
        .route("/eth/v1/beacon/blocks", post(handlers::publish_block))
        .route("/eth/v1/beacon/blocks/{block_id}", get(handlers::get_block))
        .route(
            "/eth/v1/beacon/blocks/{block_id}/root",
            get(handlers::block_root_handler),
        )
        .route(
            "/eth/v1/beacon/blocks/{block_id}/attestations",
            get(handlers::block_attestations),
        )
        // Operation pools
        .route(
            "/eth/v1/beacon/pool/attestations",
            get(handlers::list_pool_attestations).post(handlers::submit_pool_attestation),
        )
        .route(
            "/eth/v1/beacon/pool/attester_slashings",
            get(handlers::list_attester_slashings).post(handlers::submit_attester_slashing),
        )
        .route(
            "/eth/v1/beacon/pool/proposer_slashings",
            get(handlers::list_proposer_slashings).post(handlers::submit_proposer_slashing),
        )
        .route(
            "/eth/v1/beacon/pool/voluntary_exits",
            get(handlers::list_voluntary_exits).post(handlers::submit_voluntary_exit),
        )
        .with_state(state)
}
