use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use tower::limit::ConcurrencyLimitLayer;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use viaplan_core::prelude::*;

const MAX_IN_FLIGHT_REQUESTS: usize = 64;

pub struct AppState {
    pub graph: RouteGraph,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/places", get(list_places))
        .route("/route", get(find_route))
        .route("/graph.dot", get(render_graph))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(ConcurrencyLimitLayer::new(MAX_IN_FLIGHT_REQUESTS))
        .with_state(state)
}

async fn list_places(State(state): State<Arc<AppState>>) -> Json<Vec<Place>> {
    Json(state.graph.places().cloned().collect())
}

#[derive(Debug, Deserialize)]
struct RouteQuery {
    from: String,
    to: String,
    #[serde(default)]
    metric: Metric,
}

#[derive(Debug, Serialize)]
struct RouteResponse {
    places: Vec<String>,
    total: f64,
    metric: Metric,
    unit: &'static str,
    message: String,
}

impl From<RoutePath> for RouteResponse {
    fn from(path: RoutePath) -> Self {
        let metric = path.metric;
        Self {
            message: format!("Total {}: {:.2} {}", metric, path.total, metric.unit()),
            unit: metric.unit(),
            total: path.total,
            places: path.places,
            metric,
        }
    }
}

async fn find_route(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<RouteResponse>, ApiError> {
    let path = shortest_path(&state.graph, &query.from, &query.to, query.metric)?;
    Ok(Json(path.into()))
}

#[derive(Debug, Deserialize)]
struct GraphQuery {
    from: Option<String>,
    to: Option<String>,
    #[serde(default)]
    metric: Metric,
}

/// DOT rendering of the graph; highlights the shortest route when both
/// endpoints are given
async fn render_graph(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GraphQuery>,
) -> Result<Response, ApiError> {
    let highlight = match (&query.from, &query.to) {
        (Some(from), Some(to)) => Some(shortest_path(&state.graph, from, to, query.metric)?),
        _ => None,
    };

    let dot = graph_to_dot(&state.graph, highlight.as_ref());
    Ok(([(header::CONTENT_TYPE, "text/vnd.graphviz")], dot).into_response())
}

#[derive(Debug)]
pub struct ApiError(viaplan_core::Error);

impl From<viaplan_core::Error> for ApiError {
    fn from(err: viaplan_core::Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        use viaplan_core::Error;

        let status = match &self.0 {
            Error::SameEndpoints | Error::UnknownPlace(_) => StatusCode::BAD_REQUEST,
            Error::NoRouteFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_GATEWAY,
        };
        let body = Json(serde_json::json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}
