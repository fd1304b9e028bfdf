//! Store action handlers.
//!
//! `GET /api/data` returns the full snapshot. `POST /api/data` dispatches a
//! `{action, payload}` request to the matching store operation; action names
//! and payload fields map 1:1 to the store's call interface.

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::store::{ResourceKind, Snapshot};

use super::super::{error::ApiError, state::AppState};

/// Action dispatch request body.
#[derive(Debug, Deserialize)]
pub struct ActionRequest {
    pub action: String,
    #[serde(default)]
    pub payload: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VisitPayload {
    ip: String,
    path: String,
    user_agent: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessagePayload {
    audio_url: String,
    duration: f64,
}

#[derive(Debug, Deserialize)]
struct IpPayload {
    ip: String,
}

#[derive(Debug, Deserialize)]
struct IdPayload {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ResourcePayload {
    name: String,
    url: String,
    #[serde(rename = "type")]
    kind: ResourceKind,
    size: u64,
}

#[derive(Debug, Deserialize)]
struct ShowcasePayload {
    title: String,
    #[serde(default)]
    image: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ShowcaseImagePayload {
    id: String,
    image: String,
}

/// Return the current snapshot.
pub async fn get_data(State(state): State<AppState>) -> Json<Snapshot> {
    Json(state.store().await.snapshot())
}

/// Dispatch one store action.
pub async fn post_action(
    State(state): State<AppState>,
    Json(request): Json<ActionRequest>,
) -> Result<Json<Value>, ApiError> {
    let ActionRequest { action, payload } = request;
    let mut store = state.store().await;

    let response = match action.as_str() {
        "recordVisit" => {
            let p: VisitPayload = parse(&action, payload)?;
            let visit = store.record_visit(p.ip, p.path, p.user_agent)?;
            json!({ "success": true, "visit": visit })
        }
        "recordMessage" => {
            let p: MessagePayload = parse(&action, payload)?;
            let message = store.record_message(p.audio_url, p.duration)?;
            json!({ "success": true, "message": message })
        }
        "freeze" => {
            let p: IpPayload = parse(&action, payload)?;
            store.freeze(&p.ip)?;
            json!({ "success": true })
        }
        "unfreeze" => {
            let p: IpPayload = parse(&action, payload)?;
            store.unfreeze(&p.ip)?;
            json!({ "success": true })
        }
        "isFrozen" => {
            let p: IpPayload = parse(&action, payload)?;
            json!({ "frozen": store.is_frozen(&p.ip) })
        }
        "addResource" => {
            let p: ResourcePayload = parse(&action, payload)?;
            let resource = store.add_resource(p.name, p.url, p.kind, p.size)?;
            json!({ "success": true, "resource": resource })
        }
        "removeResource" => {
            let p: IdPayload = parse(&action, payload)?;
            store.remove_resource(&p.id)?;
            json!({ "success": true })
        }
        "incrementDownload" => {
            let p: IdPayload = parse(&action, payload)?;
            store.increment_download(&p.id)?;
            json!({ "success": true })
        }
        "addShowcaseItem" => {
            let p: ShowcasePayload = parse(&action, payload)?;
            let item = store.add_showcase_item(p.title, p.image)?;
            json!({ "success": true, "item": item })
        }
        "removeShowcaseItem" => {
            let p: IdPayload = parse(&action, payload)?;
            store.remove_showcase_item(&p.id)?;
            json!({ "success": true })
        }
        "setShowcaseImage" => {
            let p: ShowcaseImagePayload = parse(&action, payload)?;
            store.set_showcase_image(&p.id, p.image)?;
            json!({ "success": true })
        }
        "toggleVisitStatus" => {
            let p: IdPayload = parse(&action, payload)?;
            store.toggle_visit_status(&p.id)?;
            json!({ "success": true })
        }
        "snapshot" => serde_json::to_value(store.snapshot())
            .map_err(|e| ApiError::internal(e.to_string()))?,
        _ => return Err(ApiError::unknown_action(&action)),
    };

    Ok(Json(response))
}

/// Deserialize an action payload, rejecting the request before any mutation.
fn parse<T: serde::de::DeserializeOwned>(action: &str, payload: Value) -> Result<T, ApiError> {
    serde_json::from_value(payload).map_err(|e| ApiError::invalid_payload(action, e.to_string()))
}
