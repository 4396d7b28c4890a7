//! `beacon`: command-line client for the Eth2 beacon node HTTP API.
//!
//! Every read subcommand prints the response's `data` payload as pretty JSON.
//! `submit` reads a JSON record from a file path or from stdin (`-`) and
//! posts it to the matching pool or to `/blocks`.
//!
//! Exit codes: 0 on success, 1 when the node or the network fails the
//! request, 2 for local input errors.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use beacon_node_api::{
    Attestation, AttesterSlashing, Envelope, ProposerSlashing, SignedBeaconBlock,
    SignedVoluntaryExit, ValidatorStatus,
};
use beacon_node_client::prelude::*;
use beacon_node_client::{AttestationFilter, HeaderFilter, ValidatorFilter};
use clap::{Parser, Subcommand, ValueEnum};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// beacon: query and feed an Eth2 beacon node
#[derive(Parser)]
#[command(name = "beacon", version, about, long_about = None)]
struct Cli {
    /// Base URL of the beacon node REST API.
    #[arg(long, global = true, env = "BEACON_NODE_URL", default_value = "http://localhost:5052")]
    url: String,

    /// Per-request timeout in seconds.
    #[arg(long, global = true, env = "BEACON_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Genesis time, validators root and fork version.
    Genesis,

    /// Root of a state.
    ///
    /// STATE is head | genesis | finalized | justified | <slot> | <root>.
    StateRoot {
        #[arg(default_value = "head")]
        state: StateId,
    },

    /// Fork object of a state.
    Fork {
        #[arg(default_value = "head")]
        state: StateId,
    },

    /// Previous justified, current justified and finalized checkpoints.
    Finality {
        #[arg(default_value = "head")]
        state: StateId,
    },

    /// One validator by index or public key.
    Validator {
        /// Validator index or hex-encoded public key.
        id: ValidatorId,

        #[arg(long, default_value = "head")]
        state: StateId,
    },

    /// Validators of a state, optionally filtered.
    ///
    /// Examples:
    ///   beacon validators --id 0 --id 1
    ///   beacon validators --status pending_initialized --status active_ongoing
    Validators {
        #[arg(long, default_value = "head")]
        state: StateId,

        /// Restrict to this index or public key. Repeatable.
        #[arg(long = "id", value_name = "ID")]
        ids: Vec<ValidatorId>,

        /// Restrict to this status. Repeatable.
        #[arg(long = "status", value_name = "STATUS")]
        statuses: Vec<ValidatorStatus>,
    },

    /// Header of one block.
    ///
    /// BLOCK is head | genesis | finalized | <slot> | <root>.
    Header {
        #[arg(default_value = "head")]
        block: BlockId,
    },

    /// Block headers, optionally filtered by slot and parent root.
    Headers {
        #[arg(long)]
        slot: Option<String>,

        #[arg(long)]
        parent_root: Option<String>,
    },

    /// A full signed block.
    Block {
        #[arg(default_value = "head")]
        block: BlockId,
    },

    /// Root of a block.
    BlockRoot {
        #[arg(default_value = "head")]
        block: BlockId,
    },

    /// Attestations included in a block.
    BlockAttestations {
        #[arg(default_value = "head")]
        block: BlockId,
    },

    /// Contents of an operation pool.
    Pool {
        kind: PoolKind,

        /// Attestations only: restrict to this slot.
        #[arg(long)]
        slot: Option<String>,

        /// Attestations only: restrict to this committee index.
        #[arg(long)]
        committee_index: Option<String>,
    },

    /// Submit a JSON record to a pool, or publish a signed block.
    ///
    /// Pass `-` as FILE to read from stdin.
    Submit {
        kind: SubmitKind,

        /// Path to a JSON file, or `-` for stdin.
        file: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PoolKind {
    Attestations,
    AttesterSlashings,
    ProposerSlashings,
    VoluntaryExits,
}

#[derive(Clone, Copy, ValueEnum)]
enum SubmitKind {
    Block,
    Attestation,
    AttesterSlashing,
    ProposerSlashing,
    VoluntaryExit,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "beacon_node_client=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let config = ClientConfig::new(cli.url).with_timeout(Duration::from_secs(cli.timeout_secs));
    let client = BeaconNodeClient::new(&config)
        .unwrap_or_else(|e| fatal(&format!("cannot build client: {}", e)));
    let beacon = client.beacon();

    match cli.command {
        Command::Genesis => emit(beacon.genesis().get()),

        Command::StateRoot { state } => emit(beacon.states().with_id(state).root().get()),

        Command::Fork { state } => emit(beacon.states().with_id(state).fork().get()),

        Command::Finality { state } => {
            emit(beacon.states().with_id(state).finality_checkpoints().get())
        }

        Command::Validator { id, state } => {
            emit(beacon.states().with_id(state).validators().find_by_id(id))
        }

        Command::Validators {
            state,
            ids,
            statuses,
        } => {
            let filter = ValidatorFilter {
                ids,
                statuses: statuses.into_iter().collect(),
            };
            emit(beacon.states().with_id(state).validators().find(&filter))
        }

        Command::Header { block } => emit(beacon.headers().find_by_block_id(block)),

        Command::Headers { slot, parent_root } => {
            emit(beacon.headers().find(&HeaderFilter { slot, parent_root }))
        }

        Command::Block { block } => emit(beacon.blocks().find_by_id(block)),

        Command::BlockRoot { block } => emit(beacon.blocks().with_id(block).root().get()),

        Command::BlockAttestations { block } => {
            emit(beacon.blocks().with_id(block).attestations().find_all())
        }

        Command::Pool {
            kind,
            slot,
            committee_index,
        } => {
            let pool = beacon.pool();
            let filtered = slot.is_some() || committee_index.is_some();
            if !matches!(kind, PoolKind::Attestations) && filtered {
                fatal("--slot and --committee-index only apply to attestations");
            }
            match kind {
                PoolKind::Attestations => emit(pool.attestations().find(&AttestationFilter {
                    slot,
                    committee_index,
                })),
                PoolKind::AttesterSlashings => emit(pool.attester_slashings().find_all()),
                PoolKind::ProposerSlashings => emit(pool.proposer_slashings().find_all()),
                PoolKind::VoluntaryExits => emit(pool.voluntary_exits().find_all()),
            }
        }

        Command::Submit { kind, file } => {
            let json = read_input(&file);
            let pool = beacon.pool();
            let result = match kind {
                SubmitKind::Block => beacon.blocks().publish(&parse::<SignedBeaconBlock>(&json)),
                SubmitKind::Attestation => {
                    pool.attestations().submit(&parse::<Attestation>(&json))
                }
                SubmitKind::AttesterSlashing => pool
                    .attester_slashings()
                    .submit(&parse::<AttesterSlashing>(&json)),
                SubmitKind::ProposerSlashing => pool
                    .proposer_slashings()
                    .submit(&parse::<ProposerSlashing>(&json)),
                SubmitKind::VoluntaryExit => pool
                    .voluntary_exits()
                    .submit(&parse::<SignedVoluntaryExit>(&json)),
            };
            match result {
                Ok(()) => println!("accepted"),
                Err(e) => fail(e),
            }
        }
    }
}

/// Print the payload of a successful response, or report the failure.
fn emit<T: Serialize>(result: Result<Envelope<T>, ClientError>) {
    match result {
        Ok(envelope) => match serde_json::to_string_pretty(&envelope.data) {
            Ok(json) => println!("{}", json),
            Err(e) => fatal(&format!("failed to render response: {}", e)),
        },
        Err(e) => fail(e),
    }
}

/// Report a request failure, including the node's error details, and exit 1.
fn fail(error: ClientError) -> ! {
    eprintln!("beacon: {}", error);
    if let Some(record) = error.error_message() {
        if let Some(kind) = &record.error_type {
            eprintln!("  type: {}", kind);
        }
        for detail in &record.details {
            eprintln!("  - {}", detail);
        }
    }
    process::exit(1);
}

/// Read the full contents of a file, or stdin when the path is `"-"`.
fn read_input(path: &PathBuf) -> String {
    if path.to_str() == Some("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .unwrap_or_else(|e| fatal(&format!("failed to read stdin: {}", e)));
        buf
    } else {
        fs::read_to_string(path).unwrap_or_else(|e| {
            fatal(&format!("failed to read {}: {}", path.display(), e))
        })
    }
}

fn parse<T: DeserializeOwned>(json: &str) -> T {
    serde_json::from_str(json)
        .unwrap_or_else(|e| fatal(&format!("input is not a valid record: {}", e)))
}

/// Print an error message to stderr and exit with code 2.
fn fatal(msg: &str) -> ! {
    eprintln!("beacon: {}", msg);
    process::exit(2);
}
