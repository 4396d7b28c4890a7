//! Handlers for the `/eth/v1/beacon` endpoint group.
//!
//! Query strings are read raw because list filters repeat keys
//! (`?id=0&id=1`), which the `Query` extractor cannot express. Comma-separated
//! values (`?id=0,1`) are accepted too.

use std::sync::{Arc, RwLockReadGuard, RwLockWriteGuard};

use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    Json,
};
use beacon_node_api::{
    Attestation, AttesterSlashing, BlockHeader, Checkpoint, Envelope, FinalityCheckpoints, Fork,
    GenesisInfo, ProposerSlashing, Root, SignedBeaconBlock, SignedVoluntaryExit, StateValidator,
    ValidatorStatus,
};

use crate::error::AppError;
use crate::state::{block_root, NodeState, Pools, StoredBlock};

type Node = State<Arc<NodeState>>;
type ApiResult<T> = Result<Json<Envelope<T>>, AppError>;

fn ok<T>(data: T) -> ApiResult<T> {
    Ok(Json(Envelope::new(data)))
}

// ---------------------------------------------------------------------------
// Query and identifier parsing
// ---------------------------------------------------------------------------

/// Decode a raw query into `(key, value)` pairs, splitting comma lists.
fn parse_query(raw: Option<String>) -> Result<Vec<(String, String)>, AppError> {
    let raw = raw.unwrap_or_default();
    let mut pairs = Vec::new();
    for part in raw.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = part.split_once('=').unwrap_or((part, ""));
        let key = urlencoding::decode(key)
            .map_err(|_| AppError::bad_request("query is not valid UTF-8"))?;
        let value = urlencoding::decode(value)
            .map_err(|_| AppError::bad_request("query is not valid UTF-8"))?;
        for item in value.split(',').filter(|v| !v.is_empty()) {
            pairs.push((key.to_string(), item.to_string()));
        }
    }
    Ok(pairs)
}

fn values<'a>(pairs: &'a [(String, String)], key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    pairs
        .iter()
        .filter(move |(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn single<'a>(pairs: &'a [(String, String)], key: &'a str) -> Option<&'a str> {
    values(pairs, key).next()
}

/// Resolve a `{state_id}` to a slot.
fn resolve_state(node: &NodeState, id: &str) -> Result<u64, AppError> {
    if node.is_syncing() {
        return Err(AppError::Syncing);
    }
    let head = node.head_slot();
    match id {
        "head" => Ok(head),
        "genesis" | "finalized" | "justified" => Ok(0),
        _ if id.starts_with("0x") => (0..=head)
            .find(|slot| NodeState::state_root(*slot) == id)
            .ok_or_else(|| AppError::NotFound("State not found".into())),
        _ => match id.parse::<u64>() {
            Ok(slot) if slot <= head => Ok(slot),
            Ok(_) => Err(AppError::NotFound("State not found".into())),
            Err(_) => Err(AppError::bad_request(format!("Invalid state ID: {id}"))),
        },
    }
}

/// Resolve a `{block_id}` to a stored block.
fn resolve_block<'a>(node: &'a NodeState, id: &str) -> Result<&'a StoredBlock, AppError> {
    let not_found = || AppError::NotFound("Block not found".into());
    match id {
        "head" => node.blocks.last().ok_or_else(not_found),
        "genesis" | "finalized" => node.blocks.first().ok_or_else(not_found),
        _ if id.starts_with("0x") => node
            .blocks
            .iter()
            .find(|b| b.root == id)
            .ok_or_else(not_found),
        _ => match id.parse::<u64>() {
            Ok(slot) => node
                .blocks
                .iter()
                .find(|b| b.slot() == slot.to_string())
                .ok_or_else(not_found),
            Err(_) => Err(AppError::bad_request(format!("Invalid block ID: {id}"))),
        },
    }
}

/// Find a validator by decimal index or hex public key.
fn find_validator<'a>(
    node: &'a NodeState,
    id: &str,
) -> Result<Option<&'a StateValidator>, AppError> {
    if id.starts_with("0x") {
        return Ok(node.validators.iter().find(|v| {
            v.validator.as_ref().is_some_and(|inner| inner.pubkey == id)
        }));
    }
    match id.parse::<usize>() {
        Ok(index) => Ok(node.validators.get(index)),
        Err(_) => Err(AppError::bad_request(format!("Invalid validator ID: {id}"))),
    }
}

fn read_pools(node: &NodeState) -> Result<RwLockReadGuard<'_, Pools>, AppError> {
    node.pools
        .read()
        .map_err(|_| AppError::Internal("pool lock poisoned".into()))
}

fn write_pools(node: &NodeState) -> Result<RwLockWriteGuard<'_, Pools>, AppError> {
    node.pools
        .write()
        .map_err(|_| AppError::Internal("pool lock poisoned".into()))
}

fn require_signature(signature: &str, what: &str) -> Result<(), AppError> {
    if signature.is_empty() {
        return Err(AppError::BadRequest {
            message: format!("Invalid {what}"),
            details: vec!["signature must not be empty".into()],
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Genesis and states
// ---------------------------------------------------------------------------

pub async fn genesis(State(node): Node) -> ApiResult<GenesisInfo> {
    ok(node.genesis.clone())
}

pub async fn state_root(State(node): Node, Path(state_id): Path<String>) -> ApiResult<Root> {
    let slot = resolve_state(&node, &state_id)?;
    ok(Root {
        root: NodeState::state_root(slot),
    })
}

pub async fn state_fork(State(node): Node, Path(state_id): Path<String>) -> ApiResult<Fork> {
    resolve_state(&node, &state_id)?;
    ok(Fork {
        previous_version: node.genesis.genesis_fork_version.clone(),
        current_version: node.genesis.genesis_fork_version.clone(),
        epoch: "0".into(),
    })
}

pub async fn finality_checkpoints(
    State(node): Node,
    Path(state_id): Path<String>,
) -> ApiResult<FinalityCheckpoints> {
    resolve_state(&node, &state_id)?;
    let genesis = Checkpoint {
        epoch: "0".into(),
        root: block_root(0),
    };
    ok(FinalityCheckpoints {
        previous_justified: genesis.clone(),
        current_justified: genesis.clone(),
        finalized: genesis,
    })
}

pub async fn list_validators(
    State(node): Node,
    Path(state_id): Path<String>,
    RawQuery(query): RawQuery,
) -> ApiResult<Vec<StateValidator>> {
    resolve_state(&node, &state_id)?;
    let pairs = parse_query(query)?;

    let statuses = values(&pairs, "status")
        .map(|s| {
            s.parse::<ValidatorStatus>()
                .map_err(|e| AppError::bad_request(format!("Invalid validator status: {e}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let ids: Vec<&str> = values(&pairs, "id").collect();
    let mut selected: Vec<&StateValidator> = if ids.is_empty() {
        node.validators.iter().collect()
    } else {
        let mut found = Vec::new();
        for id in ids {
            // Unknown ids are skipped rather than failing the whole request.
            if let Some(v) = find_validator(&node, id)? {
                found.push(v);
            }
        }
        found
    };

    if !statuses.is_empty() {
        selected.retain(|v| v.status.is_some_and(|s| statuses.contains(&s)));
    }

    ok(selected.into_iter().cloned().collect())
}

pub async fn get_validator(
    State(node): Node,
    Path((state_id, validator_id)): Path<(String, String)>,
) -> ApiResult<StateValidator> {
    resolve_state(&node, &state_id)?;
    match find_validator(&node, &validator_id)? {
        Some(v) => ok(v.clone()),
        None => Err(AppError::NotFound("Validator not found".into())),
    }
}

// ---------------------------------------------------------------------------
// Headers and blocks
// ---------------------------------------------------------------------------

pub async fn list_headers(
    State(node): Node,
    RawQuery(query): RawQuery,
) -> ApiResult<Vec<BlockHeader>> {
    let pairs = parse_query(query)?;
    let slot = single(&pairs, "slot");
    let parent_root = single(&pairs, "parent_root");

    if let Some(slot) = slot {
        if slot.parse::<u64>().is_err() {
            return Err(AppError::bad_request(format!("Invalid slot: {slot}")));
        }
    }

    if slot.is_none() && parent_root.is_none() {
        return ok(node.blocks.last().map(StoredBlock::header).into_iter().collect());
    }

    let headers = node
        .blocks
        .iter()
        .filter(|b| slot.map_or(true, |s| b.slot() == s))
        .filter(|b| parent_root.map_or(true, |p| b.block.message.parent_root == p))
        .map(StoredBlock::header)
        .collect();
    ok(headers)
}

pub async fn get_header(State(node): Node, Path(block_id): Path<String>) -> ApiResult<BlockHeader> {
    ok(resolve_block(&node, &block_id)?.header())
}

pub async fn get_block(
    State(node): Node,
    Path(block_id): Path<String>,
) -> ApiResult<SignedBeaconBlock> {
    ok(resolve_block(&node, &block_id)?.block.clone())
}

pub async fn block_root_handler(
    State(node): Node,
    Path(block_id): Path<String>,
) -> ApiResult<Root> {
    ok(Root {
        root: resolve_block(&node, &block_id)?.root.clone(),
    })
}

pub async fn block_attestations(
    State(node): Node,
    Path(block_id): Path<String>,
) -> ApiResult<Vec<Attestation>> {
    let block = resolve_block(&node, &block_id)?;
    ok(block.block.message.body.attestations.clone().unwrap_or_default())
}

pub async fn publish_block(
    State(node): Node,
    Json(block): Json<SignedBeaconBlock>,
) -> Result<StatusCode, AppError> {
    require_signature(&block.signature, "block")?;
    tracing::info!(slot = %block.message.slot, "block published");
    node.published
        .write()
        .map_err(|_| AppError::Internal("block lock poisoned".into()))?
        .push(block);
    Ok(StatusCode::OK)
}

// ---------------------------------------------------------------------------
// Pools
// ---------------------------------------------------------------------------

pub async fn list_pool_attestations(
    State(node): Node,
    RawQuery(query): RawQuery,
) -> ApiResult<Vec<Attestation>> {
    let pairs = parse_query(query)?;
    let slot = single(&pairs, "slot");
    let committee_index = single(&pairs, "committee_index");

    let pools = read_pools(&node)?;
    let matching = pools
        .attestations
        .iter()
        .filter(|a| slot.map_or(true, |s| a.data.slot == s))
        .filter(|a| committee_index.map_or(true, |c| a.data.index == c))
        .cloned()
        .collect();
    ok(matching)
}

pub async fn submit_pool_attestation(
    State(node): Node,
    Json(attestation): Json<Attestation>,
) -> Result<StatusCode, AppError> {
    require_signature(&attestation.signature, "attestation")?;
    write_pools(&node)?.attestations.push(attestation);
    Ok(StatusCode::OK)
}

pub async fn list_attester_slashings(State(node): Node) -> ApiResult<Vec<AttesterSlashing>> {
    ok(read_pools(&node)?.attester_slashings.clone())
}

pub async fn submit_attester_slashing(
    State(node): Node,
    Json(slashing): Json<AttesterSlashing>,
) -> Result<StatusCode, AppError> {
    write_pools(&node)?.attester_slashings.push(slashing);
    Ok(StatusCode::OK)
}

pub async fn list_proposer_slashings(State(node): Node) -> ApiResult<Vec<ProposerSlashing>> {
    ok(read_pools(&node)?.proposer_slashings.clone())
}

pub async fn submit_proposer_slashing(
    State(node): Node,
    Json(slashing): Json<ProposerSlashing>,
) -> Result<StatusCode, AppError> {
    write_pools(&node)?.proposer_slashings.push(slashing);
    Ok(StatusCode::OK)
}

pub async fn list_voluntary_exits(State(node): Node) -> ApiResult<Vec<SignedVoluntaryExit>> {
    ok(read_pools(&node)?.voluntary_exits.clone())
}

pub async fn submit_voluntary_exit(
    State(node): Node,
    Json(exit): Json<SignedVoluntaryExit>,
) -> Result<StatusCode, AppError> {
    let mut details = Vec::new();
    if exit.signature.is_empty() {
        details.push("signature must not be empty".to_string());
    }
    if find_validator(&node, &exit.message.validator_index)
        .ok()
        .flatten()
        .is_none()
    {
        details.push(format!(
            "validator {} does not exist",
            exit.message.validator_index
        ));
    }
    if !details.is_empty() {
        return Err(AppError::BadRequest {
            message: "Invalid voluntary exit".into(),
            details,
        });
    }

    tracing::info!(validator_index = %exit.message.validator_index, "voluntary exit accepted");
    write_pools(&node)?.voluntary_exits.push(exit);
    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_pairs_split_repeats_and_commas() {
        let pairs = parse_query(Some("id=0&id=1,2&status=active_ongoing".into())).unwrap();
        let ids: Vec<&str> = values(&pairs, "id").collect();
        assert_eq!(ids, ["0", "1", "2"]);
        assert_eq!(single(&pairs, "status"), Some("active_ongoing"));
        assert_eq!(single(&pairs, "slot"), None);
    }

    #[test]
    fn query_values_are_percent_decoded() {
        let pairs = parse_query(Some("parent_root=a%26b".into())).unwrap();
        assert_eq!(single(&pairs, "parent_root"), Some("a&b"));
        assert!(parse_query(None).unwrap().is_empty());
    }

    #[test]
    fn state_ids_resolve() {
        let node = NodeState::seeded();
        assert_eq!(resolve_state(&node, "head").unwrap(), 2);
        assert_eq!(resolve_state(&node, "justified").unwrap(), 0);
        assert_eq!(resolve_state(&node, "1").unwrap(), 1);
        assert_eq!(resolve_state(&node, &NodeState::state_root(2)).unwrap(), 2);
        assert!(matches!(resolve_state(&node, "99"), Err(AppError::NotFound(_))));
        assert!(matches!(
            resolve_state(&node, "latest"),
            Err(AppError::BadRequest { .. })
        ));
    }

    #[test]
    fn syncing_node_refuses_state_queries() {
        let node = NodeState::seeded();
        node.set_syncing(true);
        assert!(matches!(resolve_state(&node, "head"), Err(AppError::Syncing)));
    }

    #[test]
    fn block_ids_resolve() {
        let node = NodeState::seeded();
        assert_eq!(resolve_block(&node, "head").unwrap().slot(), "2");
        assert_eq!(resolve_block(&node, "genesis").unwrap().slot(), "0");
        assert_eq!(resolve_block(&node, &block_root(1)).unwrap().slot(), "1");
        assert!(matches!(resolve_block(&node, "7"), Err(AppError::NotFound(_))));
    }
}
