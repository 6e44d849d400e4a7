//! Home API port: read access to the upstream home service.

use std::future::Future;
use std::time::Duration;

use eve_domain::error::ValidationError;
use eve_domain::fridge::FridgeState;
use eve_domain::occupant::OccupantMetric;
use eve_domain::room::RoomState;

/// Why a read against the home API produced no usable data.
///
/// Every variant is handled the same way by the dashboard (the previous
/// value is kept); they exist so the cause can be logged and tested.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request URL could not be built.
    #[error("invalid request URL {0:?}")]
    InvalidUrl(String),

    /// Connection or protocol failure.
    #[error("request failed")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// No response within the configured timeout.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// The server answered with a non-2xx status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The body was not the expected JSON shape.
    #[error("malformed response body")]
    Decode(#[from] serde_json::Error),

    /// The body parsed but broke a domain invariant.
    #[error("invalid response payload")]
    Invalid(#[from] ValidationError),
}

/// Read-only access to the home API.
///
/// Each method maps to one endpoint and returns the unwrapped collection
/// from its JSON envelope.
pub trait HomeApi: Send + Sync {
    /// `GET /api/v1/rooms`.
    fn fetch_rooms(&self) -> impl Future<Output = Result<Vec<RoomState>, FetchError>> + Send;

    /// `GET /api/v1/fridge`.
    fn fetch_fridges(&self) -> impl Future<Output = Result<Vec<FridgeState>, FetchError>> + Send;

    /// `GET /api/v1/occupants/{person}/weight`.
    fn fetch_occupant_metrics(
        &self,
        person: &str,
    ) -> impl Future<Output = Result<Vec<OccupantMetric>, FetchError>> + Send;
}

impl<T: HomeApi> HomeApi for std::sync::Arc<T> {
    fn fetch_rooms(&self) -> impl Future<Output = Result<Vec<RoomState>, FetchError>> + Send {
        (**self).fetch_rooms()
    }

    fn fetch_fridges(&self) -> impl Future<Output = Result<Vec<FridgeState>, FetchError>> + Send {
        (**self).fetch_fridges()
    }

    fn fetch_occupant_metrics(
        &self,
        person: &str,
    ) -> impl Future<Output = Result<Vec<OccupantMetric>, FetchError>> + Send {
        (**self).fetch_occupant_metrics(person)
    }
}
