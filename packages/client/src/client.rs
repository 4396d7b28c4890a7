use std::sync::Arc;

use crate::config::ClientConfig;
use crate::dispatch::Dispatcher;
use crate::http::HttpTransport;
use crate::node::Node;
use crate::resources::BeaconResource;
use crate::transport::{Transport, TransportError};

/// Entry point: owns the shared transport and hands out resource trees.
///
/// ```no_run
/// use beacon_node_client::{BeaconNodeClient, ClientConfig, Identified, NamedStateId};
///
/// let client = BeaconNodeClient::new(&ClientConfig::new("http://localhost:5052"))?;
/// let root = client.beacon().states().with_id(NamedStateId::Head).root().get()?;
/// println!("{}", root.data.root);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct BeaconNodeClient {
    root: Node,
}

impl BeaconNodeClient {
    /// Client over the default HTTP transport.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let transport = HttpTransport::new(config)?;
        tracing::info!(base_url = %transport.base_url(), "beacon node client ready");
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Client configured from `BEACON_*` environment variables.
    pub fn from_env() -> Result<Self, TransportError> {
        Self::new(&ClientConfig::from_env())
    }

    /// Client over any transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            root: Node::root(Dispatcher::new(transport)),
        }
    }

    /// `/eth/v1/beacon`
    pub fn beacon(&self) -> BeaconResource {
        BeaconResource::new(self.root.child("eth").child("v1").child("beacon"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Resource;
    use crate::test_utils::StubTransport;

    #[test]
    fn beacon_root_path() {
        let client = BeaconNodeClient::with_transport(StubTransport::json(200, "{}"));
        assert_eq!(client.beacon().path(), "/eth/v1/beacon");
    }

    #[test]
    fn clones_share_transport() {
        use crate::node::Identified;

        let stub = StubTransport::json(200, r#"{"data": {"root": "0x01"}}"#);
        let client = BeaconNodeClient::with_transport(stub.clone());
        let other = client.clone();

        let handle = std::thread::spawn(move || {
            other
                .beacon()
                .blocks()
                .with_id(crate::NamedBlockId::Head)
                .root()
                .get()
                .map(|env| env.data.root)
        });
        assert_eq!(handle.join().unwrap().unwrap(), "0x01");
        assert_eq!(stub.requests().len(), 1);
    }

    #[test]
    fn new_from_config() {
        let client = BeaconNodeClient::new(&ClientConfig::new("http://localhost:5052/")).unwrap();
        assert_eq!(client.beacon().path(), "/eth/v1/beacon");
    }
}
