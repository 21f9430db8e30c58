use crate::errors::AppError;
use crate::identity::Identity;
use crate::metrics::build_metrics;
use crate::models::{
    FieldEditRequest, IdentityRequest, MetricsResponse, Notification, VolumeView,
};
use crate::session::{Phase, SessionError};
use crate::state::{AppState, Dashboard};
use crate::store::load_existing;
use crate::ui::render_index;
use axum::{Json, extract::State, response::Html};
use tracing::error;

pub async fn index() -> Html<String> {
    Html(render_index(&build_metrics().week))
}

pub async fn get_metrics() -> Json<MetricsResponse> {
    Json(build_metrics())
}

pub async fn get_volume(State(state): State<AppState>) -> Json<VolumeView> {
    let dash = state.dashboard.lock().await;
    Json(volume_view(&dash, None))
}

/// Captures the visitor's email. On success the saved series (if any) is
/// loaded and adopted, then the edit request that triggered the dialog is
/// re-run, so the response already carries the next phase.
pub async fn submit_identity(
    State(state): State<AppState>,
    Json(payload): Json<IdentityRequest>,
) -> Result<Json<VolumeView>, AppError> {
    let mut guard = state.dashboard.lock().await;
    let dash = &mut *guard;

    // Capture only ever starts from the viewing phase; anything else is a
    // stale or misdirected page.
    if dash.session.phase() != Phase::Viewing {
        return Err(SessionError::OutOfPhase { event: "capture" }.into());
    }

    let identity = match Identity::parse(&payload.email) {
        Ok(identity) => identity,
        Err(err) => {
            return Ok(Json(volume_view(
                dash,
                Some(Notification::error(err.to_string())),
            )));
        }
    };

    if let Some(dataset) = load_existing(state.store.as_ref(), &identity).await {
        dash.session.adopt_loaded(dataset);
    }
    dash.identity = Some(identity);

    dash.session.request_edit(dash.identity.as_ref())?;
    Ok(Json(volume_view(
        dash,
        Some(Notification::success(
            "You can now customize your analytics data.",
        )),
    )))
}

pub async fn request_edit(State(state): State<AppState>) -> Result<Json<VolumeView>, AppError> {
    let mut guard = state.dashboard.lock().await;
    let dash = &mut *guard;
    dash.session.request_edit(dash.identity.as_ref())?;
    Ok(Json(volume_view(dash, None)))
}

pub async fn confirm_overwrite(State(state): State<AppState>) -> Result<Json<VolumeView>, AppError> {
    let mut dash = state.dashboard.lock().await;
    dash.session.confirm_overwrite()?;
    Ok(Json(volume_view(&dash, None)))
}

pub async fn cancel_edit(State(state): State<AppState>) -> Result<Json<VolumeView>, AppError> {
    let mut dash = state.dashboard.lock().await;
    dash.session.cancel()?;
    Ok(Json(volume_view(&dash, None)))
}

pub async fn edit_field(
    State(state): State<AppState>,
    Json(payload): Json<FieldEditRequest>,
) -> Result<Json<VolumeView>, AppError> {
    let mut dash = state.dashboard.lock().await;
    dash.session.edit_field(payload.index, &payload.value)?;
    Ok(Json(volume_view(&dash, None)))
}

/// Persists the draft. Save failures keep the visitor in the grid with the
/// draft intact; the outcome travels back as a notification either way.
pub async fn save_volume(State(state): State<AppState>) -> Result<Json<VolumeView>, AppError> {
    let mut guard = state.dashboard.lock().await;
    let dash = &mut *guard;

    match dash
        .session
        .save(dash.identity.as_ref(), state.store.as_ref())
        .await
    {
        Ok(()) => Ok(Json(volume_view(
            dash,
            Some(Notification::success("Your custom data has been saved.")),
        ))),
        Err(SessionError::IdentityRequired) => Ok(Json(volume_view(
            dash,
            Some(Notification::error("Please provide your email first.")),
        ))),
        Err(SessionError::Store(err)) => {
            error!("saving call volume failed: {err}");
            Ok(Json(volume_view(
                dash,
                Some(Notification::error(
                    "Failed to save data. Please try again.",
                )),
            )))
        }
        Err(err) => Err(err.into()),
    }
}

fn volume_view(dash: &Dashboard, notification: Option<Notification>) -> VolumeView {
    VolumeView {
        phase: dash.session.phase().as_str(),
        points: dash.session.display().clone(),
        has_identity: dash.identity.is_some(),
        notification,
    }
}
