use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Html,
    Form,
};
use serde::Deserialize;
use tracing::debug;

use crate::contact::{ContactForm, FormState, LatestNotifier};
use crate::errors::AppError;
use crate::navigation::{NavState, Section};
use crate::render::{render_page, PageView};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SectionQuery {
    pub section: Option<String>,
}

/// GET /
/// Renders the page. `?section=<id>` moves the active nav marker.
pub async fn page_handler(Query(query): Query<SectionQuery>) -> Result<Html<String>, AppError> {
    let mut nav = NavState::default();
    if let Some(id) = query.section.as_deref() {
        let section = Section::from_id(id)
            .ok_or_else(|| AppError::NotFound(format!("Section '{id}' not found")))?;
        nav.select(section);
    }

    Ok(Html(render_page(&PageView {
        nav,
        ..PageView::default()
    })))
}

/// POST /
/// Runs the contact form's submit flow for the posted fields and re-renders
/// the page with the resulting notification. The fields come back cleared
/// on success and unchanged on failure.
pub async fn submit_handler(
    State(state): State<AppState>,
    Form(form): Form<FormState>,
) -> Html<String> {
    let notifier = Arc::new(LatestNotifier::default());
    let controller = ContactForm::new(state.submitter.clone(), notifier.clone());
    controller.load(form);

    let outcome = controller.submit().await;
    debug!(?outcome, "Contact form posted");

    let mut nav = NavState::default();
    nav.select(Section::Contact);

    Html(render_page(&PageView {
        nav,
        form: controller.form(),
        status: controller.status(),
        notification: notifier.take(),
    }))
}
