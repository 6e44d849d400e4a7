//! JSON envelopes returned by the home API.

use serde::Deserialize;

use eve_domain::fridge::FridgeState;
use eve_domain::occupant::OccupantMetric;
use eve_domain::room::RoomState;

/// `GET /api/v1/rooms`
#[derive(Debug, Deserialize)]
pub struct RoomsEnvelope {
    pub rooms: Vec<RoomState>,
}

/// `GET /api/v1/fridge`
#[derive(Debug, Deserialize)]
pub struct FridgesEnvelope {
    pub fridges: Vec<FridgeState>,
}

/// `GET /api/v1/occupants/{person}/weight`
#[derive(Debug, Deserialize)]
pub struct MetricsEnvelope {
    pub metrics: Vec<OccupantMetric>,
}
