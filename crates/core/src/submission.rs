//! Submission-time validation and record shaping.
//!
//! A fully assembled draft resolves into exactly one of two persisted
//! shapes: [`MetalSubmission`] or [`WoodSubmission`]. The preconditions
//! here are checked independently of the per-step gating, immediately
//! before a record is built; any failure aborts with a user-facing
//! message and nothing is written.
//!
//! The metal line's `structure_color` conflates three encodings (catalog
//! id as text, UUID-looking text, arbitrary free text) and is resolved
//! heuristically by [`resolve_structure_color`]: a parseable UUID is used
//! verbatim, otherwise the first case-insensitive substring match against
//! the color catalog wins, otherwise the color id is left NULL and the
//! customer's text is dropped.

use std::sync::LazyLock;

use regex::Regex;

use crate::draft::{ConfigurationDraft, ContactPreference, PackageType};
use crate::error::CoreError;
use crate::product_line::ProductLine;
use crate::types::EntityId;

/// Initial status of every stored quote.
pub const INITIAL_STATUS: &str = "new";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid regex")
});

// ---------------------------------------------------------------------------
// Contact data
// ---------------------------------------------------------------------------

/// Contact fields of a validated submission. Name, email and phone are
/// mandatory; the rest is whatever the customer filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub province: Option<String>,
    pub preference: Option<ContactPreference>,
}

// ---------------------------------------------------------------------------
// Color resolution
// ---------------------------------------------------------------------------

/// Minimal catalog view used for metal color resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRef {
    pub id: EntityId,
    pub name: String,
}

/// Resolve a metal-line `structure_color` value to a catalog color id.
///
/// A value parseable as a canonical UUID is taken verbatim as the id.
/// Otherwise the value is matched case-insensitively as a substring of the
/// catalog color names and the first match wins. An unmatched value
/// resolves to `None`; the submission proceeds with a NULL color id.
pub fn resolve_structure_color(value: &str, colors: &[ColorRef]) -> Option<EntityId> {
    let value = value.trim();

    if let Ok(id) = uuid::Uuid::try_parse(value) {
        return Some(id);
    }

    let needle = value.to_lowercase();
    colors
        .iter()
        .find(|c| c.name.to_lowercase().contains(&needle))
        .map(|c| c.id)
}

// ---------------------------------------------------------------------------
// Preconditions
// ---------------------------------------------------------------------------

/// Check the full set of line-specific submission preconditions.
///
/// Re-checked immediately before building a record, independently of the
/// step-local gating the draft already passed. The first failure is
/// returned as a user-facing validation message.
pub fn validate_preconditions(
    line: ProductLine,
    draft: &ConfigurationDraft,
) -> Result<(), CoreError> {
    // Line-specific mandatory selections.
    match line {
        ProductLine::Metal => {
            if draft
                .structure_type
                .as_deref()
                .map_or(true, |s| s.trim().is_empty())
            {
                return Err(missing("structure type"));
            }
            if draft.model_id.is_none() {
                return Err(missing("model"));
            }
            if draft.coverage_id.is_none() {
                return Err(missing("coverage"));
            }
            if draft
                .structure_color
                .as_deref()
                .map_or(true, |s| s.trim().is_empty())
            {
                return Err(missing("color"));
            }
        }
        ProductLine::Wood => {
            if draft.structure_type_id.is_none() {
                return Err(missing("structure type"));
            }
            if draft.model_id.is_none() {
                return Err(missing("model"));
            }
            if draft.coverage_id.is_none() {
                return Err(missing("coverage"));
            }
            if draft.color_id.is_none() {
                return Err(missing("color"));
            }
            if draft.surface_id.is_none() {
                return Err(missing("surface"));
            }
        }
    }

    if draft.package_type.is_none() {
        return Err(CoreError::Validation(
            "Choose a fulfillment package before submitting".to_string(),
        ));
    }

    // Contact data.
    if draft.name.as_deref().map_or(true, |s| s.trim().is_empty()) {
        return Err(CoreError::Validation("Enter your name".to_string()));
    }
    let email = draft.email.as_deref().unwrap_or("");
    if email.trim().is_empty() {
        return Err(CoreError::Validation("Enter your email address".to_string()));
    }
    if !EMAIL_RE.is_match(email.trim()) {
        return Err(CoreError::Validation(
            "Enter a valid email address".to_string(),
        ));
    }
    if draft.phone.as_deref().map_or(true, |s| s.trim().is_empty()) {
        return Err(CoreError::Validation("Enter your phone number".to_string()));
    }

    // Consent gate, wood line only.
    if line == ProductLine::Wood && !draft.privacy_accepted {
        return Err(CoreError::Validation(
            "Accept the privacy terms to submit".to_string(),
        ));
    }

    Ok(())
}

fn missing(what: &str) -> CoreError {
    CoreError::Validation(format!("Configuration incomplete: choose a {what}"))
}

// ---------------------------------------------------------------------------
// Record shapes
// ---------------------------------------------------------------------------

/// The metal-line record shape, fully resolved and ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct MetalSubmission {
    /// Literal structure type name as entered/selected.
    pub structure_type: String,
    pub model_id: EntityId,
    pub coverage_id: EntityId,
    /// Resolved catalog color, or `None` when the customer's free text
    /// matched nothing.
    pub structure_color_id: Option<EntityId>,
    /// Coverage color is not selectable on this line; always `None`.
    pub coverage_color_id: Option<EntityId>,
    pub surface_id: Option<EntityId>,
    pub width_cm: u32,
    pub depth_cm: u32,
    pub height_cm: u32,
    pub package_type: PackageType,
    pub contact: ContactInfo,
    /// No pricing is computed; persisted as zero.
    pub total_price_cents: i64,
}

/// The wood-line record shape, fully resolved and ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct WoodSubmission {
    pub structure_type_id: EntityId,
    pub model_id: EntityId,
    pub coverage_id: EntityId,
    pub color_id: EntityId,
    /// Mandatory on this line; never NULL in the stored record.
    pub surface_id: EntityId,
    pub accessory_ids: Vec<EntityId>,
    pub width_cm: u32,
    pub depth_cm: u32,
    pub height_cm: u32,
    pub package_type: PackageType,
    pub contact: ContactInfo,
    pub privacy_accepted: bool,
    pub total_price_cents: i64,
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Build the metal-line record from a draft.
///
/// `colors` is the metal color catalog used for free-text resolution.
/// Fails with the first unmet precondition; on success the caller hands
/// the shape to the persistence layer unchanged.
pub fn build_metal(
    draft: &ConfigurationDraft,
    colors: &[ColorRef],
) -> Result<MetalSubmission, CoreError> {
    if draft.product_line != ProductLine::Metal {
        return Err(CoreError::Validation(
            "Draft belongs to the wood line".to_string(),
        ));
    }
    validate_preconditions(ProductLine::Metal, draft)?;

    let (width_cm, depth_cm, height_cm) = require_dimensions(draft)?;
    let raw_color = require(draft.structure_color.clone(), "color")?;

    Ok(MetalSubmission {
        structure_type: require(draft.structure_type.clone(), "structure type")?,
        model_id: require(draft.model_id, "model")?,
        coverage_id: require(draft.coverage_id, "coverage")?,
        structure_color_id: resolve_structure_color(&raw_color, colors),
        coverage_color_id: None,
        surface_id: draft.surface_id,
        width_cm,
        depth_cm,
        height_cm,
        package_type: require(draft.package_type, "fulfillment package")?,
        contact: contact_info(draft)?,
        total_price_cents: 0,
    })
}

/// Build the wood-line record from a draft.
pub fn build_wood(draft: &ConfigurationDraft) -> Result<WoodSubmission, CoreError> {
    if draft.product_line != ProductLine::Wood {
        return Err(CoreError::Validation(
            "Draft belongs to the metal line".to_string(),
        ));
    }
    validate_preconditions(ProductLine::Wood, draft)?;

    let (width_cm, depth_cm, height_cm) = require_dimensions(draft)?;

    Ok(WoodSubmission {
        structure_type_id: require(draft.structure_type_id, "structure type")?,
        model_id: require(draft.model_id, "model")?,
        coverage_id: require(draft.coverage_id, "coverage")?,
        color_id: require(draft.color_id, "color")?,
        surface_id: require(draft.surface_id, "surface")?,
        accessory_ids: draft.accessory_ids.clone(),
        width_cm,
        depth_cm,
        height_cm,
        package_type: require(draft.package_type, "fulfillment package")?,
        contact: contact_info(draft)?,
        privacy_accepted: draft.privacy_accepted,
        total_price_cents: 0,
    })
}

fn require<T>(value: Option<T>, field: &str) -> Result<T, CoreError> {
    value.ok_or_else(|| missing(field))
}

fn require_dimensions(draft: &ConfigurationDraft) -> Result<(u32, u32, u32), CoreError> {
    match (draft.width_cm, draft.depth_cm, draft.height_cm) {
        (Some(w), Some(d), Some(h)) => Ok((w, d, h)),
        _ => Err(CoreError::Validation(
            "Configuration incomplete: enter the dimensions".to_string(),
        )),
    }
}

fn contact_info(draft: &ConfigurationDraft) -> Result<ContactInfo, CoreError> {
    Ok(ContactInfo {
        name: require(draft.name.clone(), "name")?,
        email: require(draft.email.clone(), "email")?,
        phone: require(draft.phone.clone(), "phone")?,
        address: draft.address.clone(),
        city: draft.city.clone(),
        postal_code: draft.postal_code.clone(),
        province: draft.province.clone(),
        preference: draft.contact_preference,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::DraftPatch;
    use assert_matches::assert_matches;
    use uuid::Uuid;

    fn color(name: &str) -> ColorRef {
        ColorRef {
            id: Uuid::new_v4(),
            name: name.to_string(),
        }
    }

    fn complete_metal_draft() -> ConfigurationDraft {
        ConfigurationDraft::new(ProductLine::Metal).merged(&DraftPatch {
            structure_type: Some("Freestanding".to_string()),
            model_id: Some(Uuid::new_v4()),
            width_cm: Some(400),
            depth_cm: Some(600),
            height_cm: Some(250),
            coverage_id: Some(Uuid::new_v4()),
            structure_color: Some("RAL 9005".to_string()),
            package_type: Some(PackageType::Turnkey),
            name: Some("Anna Bianchi".to_string()),
            email: Some("anna@example.com".to_string()),
            phone: Some("+39 333 1234567".to_string()),
            ..DraftPatch::default()
        })
    }

    fn complete_wood_draft() -> ConfigurationDraft {
        ConfigurationDraft::new(ProductLine::Wood).merged(&DraftPatch {
            structure_type_id: Some(Uuid::new_v4()),
            model_id: Some(Uuid::new_v4()),
            width_cm: Some(400),
            depth_cm: Some(600),
            height_cm: Some(250),
            coverage_id: Some(Uuid::new_v4()),
            color_id: Some(Uuid::new_v4()),
            surface_id: Some(Uuid::new_v4()),
            package_type: Some(PackageType::SelfInstall),
            name: Some("Marco Rossi".to_string()),
            email: Some("marco@example.com".to_string()),
            phone: Some("+39 333 7654321".to_string()),
            privacy_accepted: Some(true),
            ..DraftPatch::default()
        })
    }

    // -- color resolution --

    #[test]
    fn uuid_color_value_is_used_verbatim() {
        let resolved =
            resolve_structure_color("a1b2c3d4-e5f6-7890-abcd-ef1234567890", &[color("RAL 9005")]);
        assert_eq!(
            resolved,
            Some(Uuid::parse_str("a1b2c3d4-e5f6-7890-abcd-ef1234567890").unwrap())
        );
    }

    #[test]
    fn free_text_resolves_by_substring_case_insensitive() {
        let nero = color("RAL 9005 Nero");
        let colors = vec![color("RAL 7016 Antracite"), nero.clone()];

        assert_eq!(resolve_structure_color("RAL 9005", &colors), Some(nero.id));
        assert_eq!(resolve_structure_color("ral 9005", &colors), Some(nero.id));
    }

    #[test]
    fn unmatched_free_text_resolves_to_none() {
        let colors = vec![color("RAL 9005 Nero")];
        assert_eq!(
            resolve_structure_color("Colore Inesistente XYZ", &colors),
            None
        );
    }

    #[test]
    fn first_substring_match_wins() {
        let first = color("RAL 9005 Nero Opaco");
        let second = color("RAL 9005 Nero Lucido");
        let colors = vec![first.clone(), second];

        assert_eq!(resolve_structure_color("RAL 9005", &colors), Some(first.id));
    }

    // -- metal submission --

    #[test]
    fn metal_submission_resolves_color_and_nulls_coverage_color() {
        let nero = color("RAL 9005 Nero");
        let submission = build_metal(&complete_metal_draft(), &[nero.clone()]).unwrap();

        assert_eq!(submission.structure_color_id, Some(nero.id));
        assert_eq!(submission.coverage_color_id, None);
        assert_eq!(submission.total_price_cents, 0);
    }

    #[test]
    fn metal_submission_without_coverage_is_blocked() {
        let mut draft = complete_metal_draft();
        draft.coverage_id = None;

        let err = build_metal(&draft, &[]).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("coverage"));
    }

    #[test]
    fn metal_submission_keeps_unmatched_color_as_null_id() {
        let mut draft = complete_metal_draft();
        draft.structure_color = Some("Colore Inesistente XYZ".to_string());

        let submission = build_metal(&draft, &[color("RAL 9005 Nero")]).unwrap();
        assert_eq!(submission.structure_color_id, None);
    }

    #[test]
    fn metal_rejects_wood_draft() {
        assert!(build_metal(&complete_wood_draft(), &[]).is_err());
    }

    // -- wood submission --

    #[test]
    fn wood_submission_carries_mandatory_surface() {
        let draft = complete_wood_draft();
        let expected = draft.surface_id.unwrap();

        let submission = build_wood(&draft).unwrap();
        assert_eq!(submission.surface_id, expected);
    }

    #[test]
    fn wood_submission_without_surface_is_blocked() {
        let mut draft = complete_wood_draft();
        draft.surface_id = None;

        let err = build_wood(&draft).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("surface"));
    }

    #[test]
    fn wood_submission_without_consent_is_blocked() {
        let mut draft = complete_wood_draft();
        draft.privacy_accepted = false;

        let err = build_wood(&draft).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("privacy"));
    }

    // -- contact preconditions --

    #[test]
    fn malformed_email_is_blocked_on_both_lines() {
        let mut metal = complete_metal_draft();
        metal.email = Some("not-an-email".to_string());
        assert!(build_metal(&metal, &[]).is_err());

        let mut wood = complete_wood_draft();
        wood.email = Some("also@bad".to_string());
        assert!(build_wood(&wood).is_err());
    }

    #[test]
    fn blank_phone_is_blocked() {
        let mut draft = complete_metal_draft();
        draft.phone = Some("   ".to_string());
        assert!(build_metal(&draft, &[]).is_err());
    }

    #[test]
    fn metal_line_needs_no_consent() {
        let draft = complete_metal_draft();
        assert!(!draft.privacy_accepted);
        assert!(build_metal(&draft, &[]).is_ok());
    }
}
