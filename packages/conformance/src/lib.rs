//! Shared helpers for the beacon node client conformance suite.
//!
//! Provides [`spawn_node`], which binds a `TcpListener` on an ephemeral port,
//! serves an in-process mock beacon node over a seeded [`NodeState`], and
//! returns both the base URL and the state so tests can inspect pools or
//! flip the node into syncing mode without going through the HTTP layer.

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

use std::sync::{mpsc, Arc};
use std::thread;

pub use router::build_router;
pub use state::NodeState;

/// Start an ephemeral mock node and return `(base_url, state)`.
///
/// The node runs on its own thread with a current-thread `tokio` runtime, so
/// callers can drive it with the blocking client from plain `#[test]`
/// functions. It is bound to an OS-assigned port on `127.0.0.1`; the
/// returned `String` is the full base URL, e.g. `http://127.0.0.1:51234`.
///
/// # Panics
///
/// Panics if the runtime cannot be built or the TCP listener cannot be bound.
pub fn spawn_node() -> (String, Arc<NodeState>) {
    let state = Arc::new(NodeState::seeded());
    let router = build_router(Arc::clone(&state));
    let (addr_tx, addr_rx) = mpsc::channel();

    thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("build tokio runtime");

        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("bind ephemeral port");
            let addr = listener.local_addr().expect("get local addr");
            addr_tx.send(addr).expect("report bound address");

            axum::serve(listener, router)
                .await
                .expect("mock node error");
        });
    });

    let addr = addr_rx.recv().expect("mock node failed to start");
    (format!("http://{addr}"), state)
}
