//! Handlers for quote submission.
//!
//! The single write of the whole pipeline: a fully assembled draft is
//! re-validated, shaped into the line-specific record, and inserted. The
//! notification emails go out only after the insert succeeds, and their
//! failure is logged without affecting the response — the record of
//! intent is already durable.

use altana_core::draft::ConfigurationDraft;
use altana_core::product_line::ProductLine;
use altana_core::submission::{self, ColorRef, ContactInfo};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use altana_db::models::metal_quote::CreateMetalQuote;
use altana_db::models::wood_quote::CreateWoodQuote;
use altana_db::repositories::{ColorRepo, MetalQuoteRepo, ProductModelRepo, WoodQuoteRepo};
use altana_events::QuoteNotification;

use crate::error::AppResult;
use crate::handlers::{ensure_line_matches, parse_line};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /quotes/{line}
// ---------------------------------------------------------------------------

/// Submit a completed configuration as a quote request.
///
/// Preconditions are re-checked independently of the step gating the
/// draft already passed; any failure aborts with 400 and nothing is
/// written. On success the stored row is returned with 201.
pub async fn submit(
    State(state): State<AppState>,
    Path(line): Path<String>,
    Json(draft): Json<ConfigurationDraft>,
) -> AppResult<Response> {
    let line = parse_line(&line)?;
    ensure_line_matches(line, draft.product_line)?;

    match line {
        ProductLine::Metal => submit_metal(&state, &draft).await,
        ProductLine::Wood => submit_wood(&state, &draft).await,
    }
}

async fn submit_metal(state: &AppState, draft: &ConfigurationDraft) -> AppResult<Response> {
    // The color catalog backs the free-text resolution heuristic.
    let colors: Vec<ColorRef> =
        ColorRepo::list_by_line(&state.pool, ProductLine::Metal.as_str(), None)
            .await?
            .into_iter()
            .map(|c| ColorRef {
                id: c.id,
                name: c.name,
            })
            .collect();

    let submission = submission::build_metal(draft, &colors)?;

    let input = CreateMetalQuote {
        structure_type: submission.structure_type.clone(),
        model_id: submission.model_id,
        coverage_id: submission.coverage_id,
        structure_color_id: submission.structure_color_id,
        coverage_color_id: submission.coverage_color_id,
        surface_id: submission.surface_id,
        width_cm: submission.width_cm as i32,
        depth_cm: submission.depth_cm as i32,
        height_cm: submission.height_cm as i32,
        package_type: submission.package_type.as_str().to_string(),
        name: submission.contact.name.clone(),
        email: submission.contact.email.clone(),
        phone: submission.contact.phone.clone(),
        address: submission.contact.address.clone(),
        city: submission.contact.city.clone(),
        postal_code: submission.contact.postal_code.clone(),
        province: submission.contact.province.clone(),
        contact_preference: submission.contact.preference.map(|p| p.as_str().to_string()),
        total_price_cents: submission.total_price_cents,
    };

    let quote = MetalQuoteRepo::insert(&state.pool, &input).await?;

    tracing::info!(quote_id = %quote.id, line = "metal", "Quote request stored");

    let summary = format!(
        "Line: metal\nStructure: {}\nModel: {}\nCoverage: {}\nColor: {}\n{}",
        submission.structure_type,
        model_label(state, submission.model_id).await,
        submission.coverage_id,
        draft.structure_color.as_deref().unwrap_or("-"),
        common_summary(&submission.contact, submission.width_cm, submission.depth_cm, submission.height_cm),
    );
    dispatch_emails(state, quote.id, ProductLine::Metal, &submission.contact, summary);

    Ok((StatusCode::CREATED, Json(DataResponse { data: quote })).into_response())
}

async fn submit_wood(state: &AppState, draft: &ConfigurationDraft) -> AppResult<Response> {
    let submission = submission::build_wood(draft)?;

    let input = CreateWoodQuote {
        structure_type_id: submission.structure_type_id,
        model_id: submission.model_id,
        coverage_id: submission.coverage_id,
        color_id: submission.color_id,
        surface_id: submission.surface_id,
        accessory_ids: submission.accessory_ids.clone(),
        width_cm: submission.width_cm as i32,
        depth_cm: submission.depth_cm as i32,
        height_cm: submission.height_cm as i32,
        package_type: submission.package_type.as_str().to_string(),
        name: submission.contact.name.clone(),
        email: submission.contact.email.clone(),
        phone: submission.contact.phone.clone(),
        address: submission.contact.address.clone(),
        city: submission.contact.city.clone(),
        postal_code: submission.contact.postal_code.clone(),
        province: submission.contact.province.clone(),
        contact_preference: submission.contact.preference.map(|p| p.as_str().to_string()),
        privacy_accepted: submission.privacy_accepted,
        total_price_cents: submission.total_price_cents,
    };

    let quote = WoodQuoteRepo::insert(&state.pool, &input).await?;

    tracing::info!(quote_id = %quote.id, line = "wood", "Quote request stored");

    let summary = format!(
        "Line: wood\nModel: {}\nColor: {}\nAccessories: {}\n{}",
        model_label(state, submission.model_id).await,
        draft.color_name.as_deref().unwrap_or("-"),
        submission.accessory_ids.len(),
        common_summary(&submission.contact, submission.width_cm, submission.depth_cm, submission.height_cm),
    );
    dispatch_emails(state, quote.id, ProductLine::Wood, &submission.contact, summary);

    Ok((StatusCode::CREATED, Json(DataResponse { data: quote })).into_response())
}

// ---------------------------------------------------------------------------
// Notification dispatch
// ---------------------------------------------------------------------------

/// Best-effort human label for a model; falls back to its id.
async fn model_label(state: &AppState, model_id: altana_core::types::EntityId) -> String {
    match ProductModelRepo::find_by_id(&state.pool, model_id).await {
        Ok(Some(model)) => model.name,
        _ => model_id.to_string(),
    }
}

fn common_summary(contact: &ContactInfo, width: u32, depth: u32, height: u32) -> String {
    format!(
        "Dimensions: {width} x {depth} x {height} cm\nContact: {} <{}> {}",
        contact.name, contact.email, contact.phone
    )
}

/// Fire-and-forget email dispatch after a successful insert.
///
/// Delivery failure is logged and never surfaces to the submitter.
fn dispatch_emails(
    state: &AppState,
    quote_id: altana_core::types::EntityId,
    line: ProductLine,
    contact: &ContactInfo,
    summary: String,
) {
    let Some(mailer) = state.mailer.clone() else {
        tracing::debug!(quote_id = %quote_id, "Email delivery not configured; skipping quote emails");
        return;
    };

    let notification = QuoteNotification {
        quote_id,
        product_line: line.as_str().to_string(),
        customer_name: contact.name.clone(),
        customer_email: contact.email.clone(),
        summary,
    };

    tokio::spawn(async move {
        if let Err(err) = mailer.send_quote_emails(&notification).await {
            tracing::error!(
                error = %err,
                quote_id = %notification.quote_id,
                "Quote email delivery failed"
            );
        }
    });
}
