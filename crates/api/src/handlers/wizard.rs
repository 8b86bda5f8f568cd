//! Handlers for the wizard step sequencer.
//!
//! The draft is client-held state: every request carries the current step
//! and the accumulated draft, and the server answers from the pure wizard
//! engine without keeping any session state. Advancing past the last step
//! and retreating before the first are no-ops, mirroring the engine.

use altana_core::draft::ConfigurationDraft;
use altana_core::wizard::{StepKind, Wizard};
use axum::extract::Path;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::handlers::{ensure_line_matches, parse_line};
use crate::response::DataResponse;

// ---------------------------------------------------------------------------
// Request / response bodies
// ---------------------------------------------------------------------------

/// Body for `advance` and `validate`: the current 1-based step plus the
/// accumulated draft.
#[derive(Debug, Deserialize)]
pub struct StepRequest {
    pub step: u8,
    pub draft: ConfigurationDraft,
}

/// Body for `retreat`: only the position matters.
#[derive(Debug, Deserialize)]
pub struct RetreatRequest {
    pub step: u8,
}

/// The sequencer position after an operation.
#[derive(Debug, Serialize)]
pub struct StepResponse {
    pub step: u8,
    pub kind: StepKind,
    pub is_last: bool,
}

/// Outcome of a non-transitioning validation check.
#[derive(Debug, Serialize)]
pub struct ValidationResponse {
    pub valid: bool,
    pub message: Option<String>,
}

// ---------------------------------------------------------------------------
// POST /wizard/{line}/advance
// ---------------------------------------------------------------------------

/// Validate the current step and move the wizard forward.
///
/// A failed gating rule returns 400 with the user-facing message and the
/// position is unchanged.
pub async fn advance(
    Path(line): Path<String>,
    Json(body): Json<StepRequest>,
) -> AppResult<impl IntoResponse> {
    let line = parse_line(&line)?;
    ensure_line_matches(line, body.draft.product_line)?;

    let mut wizard = Wizard::at(line, body.step)?;
    let step = wizard.advance(&body.draft)?;

    tracing::debug!(
        line = line.as_str(),
        from_step = body.step,
        to_step = step,
        "Wizard advanced"
    );

    Ok(Json(DataResponse {
        data: StepResponse {
            step,
            kind: wizard.current_kind(),
            is_last: wizard.is_last(),
        },
    }))
}

// ---------------------------------------------------------------------------
// POST /wizard/{line}/retreat
// ---------------------------------------------------------------------------

/// Move the wizard back one step. No validation applies going backwards.
pub async fn retreat(
    Path(line): Path<String>,
    Json(body): Json<RetreatRequest>,
) -> AppResult<impl IntoResponse> {
    let line = parse_line(&line)?;

    let mut wizard = Wizard::at(line, body.step)?;
    let step = wizard.retreat();

    tracing::debug!(
        line = line.as_str(),
        from_step = body.step,
        to_step = step,
        "Wizard retreated"
    );

    Ok(Json(DataResponse {
        data: StepResponse {
            step,
            kind: wizard.current_kind(),
            is_last: wizard.is_last(),
        },
    }))
}

// ---------------------------------------------------------------------------
// POST /wizard/{line}/validate
// ---------------------------------------------------------------------------

/// Check the current step without transitioning.
///
/// Always answers 200; the gating outcome is in the body so clients can
/// show or clear the step message without treating it as a failure.
pub async fn validate(
    Path(line): Path<String>,
    Json(body): Json<StepRequest>,
) -> AppResult<impl IntoResponse> {
    let line = parse_line(&line)?;
    ensure_line_matches(line, body.draft.product_line)?;

    let outcome = match altana_core::wizard::validate_step(line, body.step, &body.draft) {
        Ok(()) => ValidationResponse {
            valid: true,
            message: None,
        },
        Err(altana_core::error::CoreError::Validation(msg)) => ValidationResponse {
            valid: false,
            message: Some(msg),
        },
        Err(err) => return Err(err.into()),
    };

    Ok(Json(DataResponse { data: outcome }))
}
