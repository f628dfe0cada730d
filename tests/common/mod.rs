//! In-process stand-in for the geography and demographic APIs.

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;

use demog::{CensusClient, CensusConfig};

async fn state_lookup(Path(name): Path<String>) -> Response {
    let (fips, display) = match name.as_str() {
        "new york" | "ny" => ("36", "New York"),
        "rhode island" | "ri" => ("44", "Rhode Island"),
        "texas" | "tx" => ("48", "Texas"),
        "garbled" => return (StatusCode::OK, "{not json").into_response(),
        "outage" => return StatusCode::SERVICE_UNAVAILABLE.into_response(),
        "empty" => ("99", "Empty"),
        _ => {
            return Json(json!({
                "status": "OK",
                "responseTime": 1,
                "message": [],
                "Results": { "state": [] }
            }))
            .into_response();
        }
    };

    Json(json!({
        "status": "OK",
        "responseTime": 3,
        "message": [],
        "Results": {
            "state": [
                { "geographyType": "STATE2010", "name": display, "fips": fips, "stateCode": "XX" }
            ]
        }
    }))
    .into_response()
}

async fn demographics(Path(fips): Path<String>) -> Response {
    let (population, households, income) = match fips.as_str() {
        "36" => (19_746_227u64, 100u64, 50000.0),
        "44" => (1_055_173, 300, 70000.0),
        "48" => (26_956_958, 9_289_554, 53035.0),
        _ => {
            return Json(json!({ "status": "OK", "Results": [] })).into_response();
        }
    };

    Json(json!({
        "status": "OK",
        "responseTime": 7,
        "message": [],
        "Results": [{
            "geographyId": fips,
            "geographyName": "somewhere",
            "landArea": 1000.5,
            "population": population,
            "households": households,
            "medianIncome": income,
            "raceWhite": 0.6,
            "incomeBetween25to50": 0.2,
            "myAreaIndicator": false
        }]
    }))
    .into_response()
}

pub async fn spawn_upstream() -> SocketAddr {
    let app = Router::new()
        .route("/census/state/:name", get(state_lookup))
        .route("/demographic/jun2014/:fips", get(demographics));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

pub fn client_for(addr: SocketAddr) -> CensusClient {
    CensusClient::with_config(CensusConfig {
        state_url: format!("http://{}/census/state/", addr),
        demographic_url: format!("http://{}/demographic/jun2014/", addr),
        proxy: None,
        timeout: Duration::from_secs(5),
    })
    .unwrap()
}
