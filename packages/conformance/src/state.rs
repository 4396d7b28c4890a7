//! In-memory chain fixture served by the mock node.
//!
//! The chain has three blocks at slots 0, 1 and 2, four validators (index 3
//! still `pending_initialized`, the rest `active_ongoing`), and empty
//! operation pools. Pools and published blocks live behind [`RwLock`]s so
//! submissions are visible to subsequent reads.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use beacon_node_api::{
    Attestation, AttestationData, AttesterSlashing, BeaconBlock, BeaconBlockBody,
    BeaconBlockHeader, BlockHeader, Checkpoint, Eth1Data, GenesisInfo, ProposerSlashing,
    SignedBeaconBlock, SignedBeaconBlockHeader, SignedVoluntaryExit, StateValidator, Validator,
    ValidatorStatus,
};

/// Far-future epoch, used for validators that have not exited.
pub const FAR_FUTURE_EPOCH: &str = "18446744073709551615";

/// Number of validators in the fixture.
pub const VALIDATOR_COUNT: u64 = 4;

/// A block together with its root.
#[derive(Debug, Clone)]
pub struct StoredBlock {
    pub root: String,
    pub block: SignedBeaconBlock,
}

impl StoredBlock {
    pub fn slot(&self) -> &str {
        &self.block.message.slot
    }

    /// The `/headers` view of this block.
    pub fn header(&self) -> BlockHeader {
        let message = &self.block.message;
        BlockHeader {
            root: self.root.clone(),
            canonical: true,
            header: SignedBeaconBlockHeader {
                message: BeaconBlockHeader {
                    slot: message.slot.clone(),
                    proposer_index: message.proposer_index.clone(),
                    parent_root: message.parent_root.clone(),
                    state_root: message.state_root.clone(),
                    body_root: hex_root(0xb0d7, slot_number(&message.slot)),
                },
                signature: self.block.signature.clone(),
            },
        }
    }
}

/// Operation pools.
#[derive(Debug, Default)]
pub struct Pools {
    pub attestations: Vec<Attestation>,
    pub attester_slashings: Vec<AttesterSlashing>,
    pub proposer_slashings: Vec<ProposerSlashing>,
    pub voluntary_exits: Vec<SignedVoluntaryExit>,
}

/// Everything the mock node serves.
pub struct NodeState {
    pub genesis: GenesisInfo,
    pub validators: Vec<StateValidator>,
    pub blocks: Vec<StoredBlock>,
    /// Blocks accepted by `POST /blocks`. They are not imported into the chain.
    pub published: RwLock<Vec<SignedBeaconBlock>>,
    pub pools: RwLock<Pools>,
    syncing: AtomicBool,
}

impl NodeState {
    /// The seeded fixture.
    pub fn seeded() -> Self {
        let blocks = (0..3).map(seed_block).collect();
        let validators = (0..VALIDATOR_COUNT).map(seed_validator).collect();

        Self {
            genesis: GenesisInfo {
                genesis_time: "1606824023".into(),
                genesis_validators_root: hex_root(0x9e9e, 0),
                genesis_fork_version: "0x00000000".into(),
            },
            validators,
            blocks,
            published: RwLock::new(Vec::new()),
            pools: RwLock::new(Pools::default()),
            syncing: AtomicBool::new(false),
        }
    }

    /// While set, state endpoints answer `503` with a plain-text body.
    pub fn set_syncing(&self, syncing: bool) {
        self.syncing.store(syncing, Ordering::SeqCst);
    }

    pub fn is_syncing(&self) -> bool {
        self.syncing.load(Ordering::SeqCst)
    }

    /// Slot of the canonical head.
    pub fn head_slot(&self) -> u64 {
        self.blocks.len().saturating_sub(1) as u64
    }

    /// Root of the state after the block at `slot`.
    pub fn state_root(slot: u64) -> String {
        hex_root(0x57a7, slot)
    }
}

impl Default for NodeState {
    fn default() -> Self {
        Self::seeded()
    }
}

/// A 32-byte hex root whose high bytes tag its kind and low bytes the slot.
pub fn hex_root(tag: u16, slot: u64) -> String {
    format!("0x{tag:04x}{slot:060x}")
}

pub fn block_root(slot: u64) -> String {
    hex_root(0xb10c, slot)
}

fn slot_number(slot: &str) -> u64 {
    slot.parse().unwrap_or(0)
}

/// A validator public key; deterministic per index.
pub fn pubkey(index: u64) -> String {
    format!("0x{:096x}", 0xa11ce_u64 + index)
}

fn seed_validator(index: u64) -> StateValidator {
    let pending = index == VALIDATOR_COUNT - 1;
    let (status, activation_epoch) = if pending {
        (ValidatorStatus::PendingInitialized, FAR_FUTURE_EPOCH)
    } else {
        (ValidatorStatus::ActiveOngoing, "0")
    };
    StateValidator {
        index: Some(index.to_string()),
        balance: Some("32000000000".into()),
        status: Some(status),
        validator: Some(Validator {
            pubkey: pubkey(index),
            withdrawal_credentials: hex_root(0x00, index),
            effective_balance: "32000000000".into(),
            slashed: false,
            activation_eligibility_epoch: if pending { FAR_FUTURE_EPOCH } else { "0" }.into(),
            activation_epoch: activation_epoch.into(),
            exit_epoch: FAR_FUTURE_EPOCH.into(),
            withdrawable_epoch: FAR_FUTURE_EPOCH.into(),
        }),
    }
}

fn seed_block(slot: u64) -> StoredBlock {
    let parent_root = if slot == 0 {
        hex_root(0, 0)
    } else {
        block_root(slot - 1)
    };

    // Every block after genesis carries one attestation to its parent.
    let attestations = if slot == 0 {
        vec![]
    } else {
        vec![Attestation {
            aggregation_bits: "0x01".into(),
            signature: format!("0x{:0192x}", slot),
            data: AttestationData {
                slot: (slot - 1).to_string(),
                index: "0".into(),
                beacon_block_root: block_root(slot - 1),
                source: Checkpoint {
                    epoch: "0".into(),
                    root: block_root(0),
                },
                target: Checkpoint {
                    epoch: "0".into(),
                    root: block_root(0),
                },
            },
        }]
    };

    StoredBlock {
        root: block_root(slot),
        block: SignedBeaconBlock {
            message: BeaconBlock {
                slot: slot.to_string(),
                proposer_index: (slot % VALIDATOR_COUNT).to_string(),
                parent_root,
                state_root: NodeState::state_root(slot),
                body: BeaconBlockBody {
                    randao_reveal: Some(format!("0x{:0192x}", slot + 1)),
                    eth1_data: Some(Eth1Data {
                        deposit_root: hex_root(0xde90, 0),
                        deposit_count: VALIDATOR_COUNT.to_string(),
                        block_hash: hex_root(0xe7a1, 0),
                    }),
                    graffiti: Some(hex_root(0, 0)),
                    proposer_slashings: Some(vec![]),
                    attester_slashings: Some(vec![]),
                    attestations: Some(attestations),
                    deposits: Some(vec![]),
                    voluntary_exits: Some(vec![]),
                },
            },
            signature: format!("0x{:0192x}", slot + 0x5169),
        },
    }
}
