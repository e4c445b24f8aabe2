//! Request handlers.
//!
//! Rendering touches SQLite synchronously, so every render runs on the
//! blocking pool. Handlers own nothing between requests.

use axum::{
    extract::{Path, Query, State},
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;

use super::state::AppState;
use crate::entity::EntityKind;
use crate::error::ApiError;
use crate::page::render_document;

#[derive(Debug, Deserialize)]
pub struct SelectorParams {
    pub kind: EntityKind,
}

/// Body of the filter form.
#[derive(Debug, Deserialize)]
pub struct Submission {
    pub kind: EntityKind,
    pub id: String,
}

async fn full_page(
    state: AppState,
    entity_id: Option<String>,
    kind: EntityKind,
) -> Result<Html<String>, ApiError> {
    let controller = state.controller.clone();
    let html = tokio::task::spawn_blocking(move || {
        let body = controller.render_full_page(entity_id.as_deref(), kind);
        render_document(kind, &body)
    })
    .await?;
    Ok(Html(html))
}

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    full_page(state, None, EntityKind::Individual).await
}

pub async fn report_for_kind(
    State(state): State<AppState>,
    Path(kind): Path<EntityKind>,
) -> Result<Html<String>, ApiError> {
    full_page(state, None, kind).await
}

pub async fn report(
    State(state): State<AppState>,
    Path((kind, id)): Path<(EntityKind, String)>,
) -> Result<Html<String>, ApiError> {
    log::debug!("GET report {} {}", kind, id);
    full_page(state, Some(id), kind).await
}

/// Selector fragment for the kind toggle. Not wrapped in a document.
pub async fn selector(
    State(state): State<AppState>,
    Query(params): Query<SelectorParams>,
) -> Result<Html<String>, ApiError> {
    let controller = state.controller.clone();
    let fragment =
        tokio::task::spawn_blocking(move || controller.rerender_selector(params.kind)).await?;
    Ok(Html(fragment.into_string()))
}

/// 303 to the canonical report route.
pub async fn select(State(state): State<AppState>, Form(form): Form<Submission>) -> Redirect {
    let instruction = state.controller.resolve_submission(form.kind, &form.id);
    log::debug!("Redirecting selection to {}", instruction.location);
    Redirect::to(&instruction.location)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        Router,
    };
    use tower::ServiceExt;

    use crate::api::{create_router, AppState};
    use crate::controller::test_support::controller;
    use crate::db::fixtures;

    fn test_router() -> Router {
        create_router(AppState::new(controller(fixtures::seeded_source())))
    }

    async fn body_text(resp: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn get(uri: &str) -> axum::response::Response {
        test_router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_index_renders_employee_page() {
        let resp = get("/").await;
        assert_eq!(resp.status(), StatusCode::OK);
        let html = body_text(resp).await;
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(">Employee</h1>"));
        assert!(html.contains(r#"value="individual" hx-get="/selector""#));
    }

    #[tokio::test]
    async fn test_report_route_renders_entity() {
        let resp = get("/report/group/1").await;
        assert_eq!(resp.status(), StatusCode::OK);
        let html = body_text(resp).await;
        assert!(html.contains(">Analytics</h1>"));
        assert!(html.contains(r#"<option value="1" selected>Analytics</option>"#));
        assert!(html.contains("Asked about the night shift"));
    }

    #[tokio::test]
    async fn test_legacy_kind_slug_is_accepted() {
        let resp = get("/report/employee/3").await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_text(resp).await.contains(">Grace Hopper</h1>"));
    }

    #[tokio::test]
    async fn test_unknown_kind_is_rejected() {
        let resp = get("/report/department/1").await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let resp = get("/selector?kind=department").await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_id_still_renders() {
        let resp = get("/report/individual/999").await;
        assert_eq!(resp.status(), StatusCode::OK);
        let html = body_text(resp).await;
        assert!(html.contains(r#"data-component="header"></h1>"#));
        assert!(html.contains("</html>"));
    }

    #[tokio::test]
    async fn test_selector_returns_bare_fragment() {
        let resp = get("/selector?kind=group").await;
        assert_eq!(resp.status(), StatusCode::OK);
        let html = body_text(resp).await;
        assert!(html.starts_with(r#"<div id="selector""#));
        assert!(!html.contains("<html"));
        assert!(html.contains(r#"<option value="2">Platform</option>"#));
    }

    #[tokio::test]
    async fn test_select_redirects_with_see_other() {
        let resp = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/select")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("kind=group&id=7"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/report/group/7"
        );
    }

    #[tokio::test]
    async fn test_blank_selection_lands_on_kind_report() {
        let resp = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/select")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("kind=group&id="))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        let location = resp.headers()[header::LOCATION].to_str().unwrap().to_string();
        assert_eq!(location, "/report/group");

        let resp = get(&location).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_text(resp).await.contains(">Team</h1>"));
    }
}
