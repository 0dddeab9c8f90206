//! TorBot transport: request/response boundary to the crawler service.
mod handle;
mod transport;
mod types;
mod wire;

pub use handle::{TransportEvents, TransportHandle};
pub use transport::{ReqwestTransport, Transport, TransportSettings, DEFAULT_ENDPOINT};
pub use types::{FailureKind, LinkRequest, LinkStatus, RequestId, TransportError, TransportEvent};
pub use wire::decode_links_response;
