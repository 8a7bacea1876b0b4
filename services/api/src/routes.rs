use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde_json::json;
use skillscope::vacancies::report::{self, ChartSpec, SelectorOptions};
use skillscope::vacancies::Selection;

use crate::infra::AppState;

pub(crate) fn router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/skills/options", get(options_endpoint))
        .route("/api/v1/skills/chart", post(chart_endpoint))
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Option lists for the two UI dropdowns.
async fn options_endpoint() -> Json<SelectorOptions> {
    Json(report::selector_options())
}

/// One selector state in, one render instruction out, computed against the
/// dataset cache populated at startup.
async fn chart_endpoint(
    Extension(state): Extension<AppState>,
    Json(selection): Json<Selection>,
) -> Json<ChartSpec> {
    Json(ChartSpec::build(&state.dataset, selection))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use skillscope::vacancies::{ChartKind, SkillDataset, Vacancy, VacancyCategory};
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn sample_state() -> AppState {
        let dataset = SkillDataset::from_collections([(
            VacancyCategory::Backend,
            vec![
                Vacancy {
                    name: "Backend developer".to_string(),
                    skills: vec!["rust".to_string(), "sql".to_string()],
                },
                Vacancy {
                    name: "Platform engineer".to_string(),
                    skills: vec!["rust".to_string()],
                },
            ],
        )]);

        AppState {
            readiness: Arc::new(AtomicBool::new(true)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
            dataset: Arc::new(dataset),
        }
    }

    #[tokio::test]
    async fn chart_endpoint_ranks_cached_skills() {
        let state = sample_state();
        let selection = Selection::new(VacancyCategory::Backend, ChartKind::Bubble);

        let Json(spec) = chart_endpoint(Extension(state), Json(selection)).await;

        assert_eq!(spec.entries.len(), 2);
        assert_eq!(spec.entries[0].rank, 1);
        assert_eq!(spec.entries[0].skill, "rust");
        assert_eq!(spec.entries[0].count, 2);
        assert_eq!(spec.entries[1].skill, "sql");
    }

    #[tokio::test]
    async fn chart_endpoint_returns_empty_for_unloaded_category() {
        let state = sample_state();
        let selection = Selection::new(VacancyCategory::Frontend, ChartKind::Bar);

        let Json(spec) = chart_endpoint(Extension(state), Json(selection)).await;

        assert!(spec.entries.is_empty());
        assert_eq!(spec.total_mentions, 0);
    }

    #[tokio::test]
    async fn options_endpoint_lists_both_selectors() {
        let Json(options) = options_endpoint().await;

        assert_eq!(options.categories.len(), 4);
        assert_eq!(options.charts.len(), 3);
    }

    #[tokio::test]
    async fn router_rejects_an_unknown_category() {
        let app = router().layer(Extension(sample_state()));
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/skills/chart")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"category": "devops", "chart": "bar"}"#))
            .expect("request builds");

        let response = app.oneshot(request).await.expect("router responds");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
