//! # eve-adapter-http-hyper
//!
//! HTTP client adapter built on [hyper](https://docs.rs/hyper).
//!
//! ## Responsibilities
//! - Implement the `HomeApi` port against the home API's read endpoints
//! - Unwrap the JSON envelopes (`{ rooms: [...] }`, …) into domain records
//! - Map transport, status and decoding failures into `FetchError`
//!
//! Requests are plain `GET`s without authentication. A timeout is applied
//! only when configured.
//!
//! ## Dependency rule
//! Depends on `eve-app` (for the port trait) and `eve-domain` (for the
//! records it decodes). Never leaks hyper types past `HyperError`.

mod config;
mod error;
mod wire;

pub use config::HttpApiConfig;
pub use error::HyperError;

use std::time::Duration;

use http_body_util::{BodyExt, Empty};
use hyper::Uri;
use hyper::body::Bytes;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::de::DeserializeOwned;

use eve_app::ports::{FetchError, HomeApi};
use eve_domain::fridge::FridgeState;
use eve_domain::occupant::OccupantMetric;
use eve_domain::room::RoomState;

use crate::wire::{FridgesEnvelope, MetricsEnvelope, RoomsEnvelope};

const ROOMS_PATH: &str = "/api/v1/rooms";
const FRIDGE_PATH: &str = "/api/v1/fridge";

/// Characters escaped in a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// [`HomeApi`] implementation talking HTTP/1 to the home API.
pub struct HyperHomeApi {
    client: Client<HttpConnector, Empty<Bytes>>,
    base_url: String,
    timeout: Option<Duration>,
}

impl HyperHomeApi {
    #[must_use]
    pub fn new(config: &HttpApiConfig) -> Self {
        Self {
            client: Client::builder(TokioExecutor::new()).build_http(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout(),
        }
    }

    /// Base URL requests are issued against, without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, HyperError> {
        let url = format!("{}{path}", self.base_url);
        let uri: Uri = url.parse().map_err(|_| HyperError::InvalidUrl(url.clone()))?;

        tracing::debug!(%uri, "requesting home API");
        let exchange = async {
            let response = self.client.get(uri).await?;
            let status = response.status();
            if !status.is_success() {
                return Err(HyperError::Status(status));
            }
            let body = response.into_body().collect().await?.to_bytes();
            Ok::<T, HyperError>(serde_json::from_slice(&body)?)
        };

        // the limit covers the body too, not only the response head
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, exchange)
                .await
                .map_err(|_| HyperError::Timeout(limit))?,
            None => exchange.await,
        }
    }
}

fn weight_path(person: &str) -> String {
    format!(
        "/api/v1/occupants/{}/weight",
        utf8_percent_encode(person, PATH_SEGMENT)
    )
}

impl HomeApi for HyperHomeApi {
    async fn fetch_rooms(&self) -> Result<Vec<RoomState>, FetchError> {
        let envelope: RoomsEnvelope = self.get_json(ROOMS_PATH).await?;
        Ok(envelope.rooms)
    }

    async fn fetch_fridges(&self) -> Result<Vec<FridgeState>, FetchError> {
        let envelope: FridgesEnvelope = self.get_json(FRIDGE_PATH).await?;
        Ok(envelope.fridges)
    }

    async fn fetch_occupant_metrics(
        &self,
        person: &str,
    ) -> Result<Vec<OccupantMetric>, FetchError> {
        let envelope: MetricsEnvelope = self.get_json(&weight_path(person)).await?;
        Ok(envelope.metrics)
    }
}
