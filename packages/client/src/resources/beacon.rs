use beacon_node_api::GenesisInfo;

use crate::node::sealed::Bound;
use crate::node::{Node, Resource, Single};
use crate::resources::{BlocksResource, HeadersResource, PoolResource, StatesResource};

/// `/eth/v1/beacon`
#[derive(Debug, Clone)]
pub struct BeaconResource {
    node: Node,
}

impl BeaconResource {
    pub(crate) fn new(node: Node) -> Self {
        Self { node }
    }

    /// `GET /genesis`: genesis time, validators root and fork version.
    pub fn genesis(&self) -> Single<GenesisInfo> {
        Single::new(self.node.child("genesis"))
    }

    pub fn states(&self) -> StatesResource {
        StatesResource::new(self.node.child("states"))
    }

    pub fn headers(&self) -> HeadersResource {
        HeadersResource::new(self.node.child("headers"))
    }

    pub fn blocks(&self) -> BlocksResource {
        BlocksResource::new(self.node.child("blocks"))
    }

    pub fn pool(&self) -> PoolResource {
        PoolResource::new(self.node.child("pool"))
    }
}

impl Bound for BeaconResource {
    fn node(&self) -> &Node {
        &self.node
    }
}

impl Resource for BeaconResource {}

#[cfg(test)]
mod tests {
    use crate::node::{Identified, Resource};
    use crate::test_utils::StubTransport;
    use crate::BeaconNodeClient;

    #[test]
    fn genesis_path_and_decode() {
        let stub = StubTransport::json(
            200,
            r#"{"data": {
                "genesis_time": "1590832934",
                "genesis_validators_root": "0xd8ea",
                "genesis_fork_version": "0x00000000"
            }}"#,
        );
        let client = BeaconNodeClient::with_transport(stub.clone());

        let genesis = client.beacon().genesis().get().unwrap().data;
        assert_eq!(genesis.genesis_time, "1590832934");
        assert_eq!(stub.last_request().path, "/eth/v1/beacon/genesis");
    }

    #[test]
    fn child_paths() {
        let client = BeaconNodeClient::with_transport(StubTransport::json(200, "{}"));
        let beacon = client.beacon();
        assert_eq!(beacon.path(), "/eth/v1/beacon");
        assert_eq!(beacon.states().path(), "/eth/v1/beacon/states");
        assert_eq!(beacon.headers().path(), "/eth/v1/beacon/headers");
        assert_eq!(beacon.blocks().path(), "/eth/v1/beacon/blocks");
        assert_eq!(beacon.pool().path(), "/eth/v1/beacon/pool");
    }
}
