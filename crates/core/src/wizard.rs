//! Wizard step tables, step validation, and the step sequencer.
//!
//! Both product lines run on the same engine: a declarative per-line step
//! table ([`METAL_STEPS`], [`WOOD_STEPS`]) names which [`StepKind`] sits at
//! each position, and [`validate_step`] applies that kind's gating rule to
//! the accumulated draft. [`Wizard`] drives the table with `advance` /
//! `retreat`, holding only the current position and the last rejection
//! message.
//!
//! Steps are numbered 1-based, matching what the client displays.

use serde::{Deserialize, Serialize};

use crate::draft::ConfigurationDraft;
use crate::error::CoreError;
use crate::product_line::ProductLine;
use crate::submission;

// ---------------------------------------------------------------------------
// Step tables
// ---------------------------------------------------------------------------

/// The purpose of a wizard step, independent of its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    StructureType,
    Model,
    Dimensions,
    Coverage,
    Color,
    Surface,
    Summary,
}

impl StepKind {
    /// Human-readable label for the step.
    pub fn label(self) -> &'static str {
        match self {
            Self::StructureType => "Structure Type",
            Self::Model => "Model",
            Self::Dimensions => "Dimensions",
            Self::Coverage => "Coverage",
            Self::Color => "Color",
            Self::Surface => "Surface",
            Self::Summary => "Summary",
        }
    }
}

/// Step table for the metal line.
pub const METAL_STEPS: [StepKind; 7] = [
    StepKind::StructureType,
    StepKind::Model,
    StepKind::Dimensions,
    StepKind::Coverage,
    StepKind::Color,
    StepKind::Surface,
    StepKind::Summary,
];

/// Step table for the wood line. Surface and accessory choices are
/// captured by the color step's patch; surface completeness is enforced at
/// submission.
pub const WOOD_STEPS: [StepKind; 6] = [
    StepKind::StructureType,
    StepKind::Model,
    StepKind::Dimensions,
    StepKind::Coverage,
    StepKind::Color,
    StepKind::Summary,
];

/// Minimum accepted width, inclusive, in centimeters.
pub const MIN_WIDTH_CM: u32 = 200;

/// Minimum accepted depth, inclusive, in centimeters.
pub const MIN_DEPTH_CM: u32 = 300;

/// Minimum accepted height, inclusive, in centimeters.
pub const MIN_HEIGHT_CM: u32 = 180;

/// The step table for a product line.
pub fn steps(line: ProductLine) -> &'static [StepKind] {
    match line {
        ProductLine::Metal => &METAL_STEPS,
        ProductLine::Wood => &WOOD_STEPS,
    }
}

/// Number of steps for a product line (7 metal, 6 wood).
pub fn step_count(line: ProductLine) -> u8 {
    steps(line).len() as u8
}

/// Resolve a 1-based step number to its kind.
pub fn step_kind(line: ProductLine, step: u8) -> Result<StepKind, CoreError> {
    let table = steps(line);
    if step < 1 || step as usize > table.len() {
        return Err(CoreError::Validation(format!(
            "Invalid step {step} for the {} line. Must be between 1 and {}",
            line.as_str(),
            table.len()
        )));
    }
    Ok(table[step as usize - 1])
}

// ---------------------------------------------------------------------------
// Step validation
// ---------------------------------------------------------------------------

/// Check whether the draft satisfies the gating rule of the given step.
///
/// Returns the user-facing rejection message on failure. Surface and
/// accessory choices never block a step; the summary step re-checks the
/// full submission preconditions.
pub fn validate_step(
    line: ProductLine,
    step: u8,
    draft: &ConfigurationDraft,
) -> Result<(), CoreError> {
    match step_kind(line, step)? {
        StepKind::StructureType => {
            let chosen = match line {
                ProductLine::Metal => draft
                    .structure_type
                    .as_deref()
                    .is_some_and(|s| !s.trim().is_empty()),
                ProductLine::Wood => draft.structure_type_id.is_some(),
            };
            if !chosen {
                return Err(CoreError::Validation(
                    "Choose a structure type to continue".to_string(),
                ));
            }
        }
        StepKind::Model => {
            if draft.model_id.is_none() {
                return Err(CoreError::Validation(
                    "Choose a model to continue".to_string(),
                ));
            }
        }
        StepKind::Dimensions => {
            let (Some(width), Some(depth), Some(height)) =
                (draft.width_cm, draft.depth_cm, draft.height_cm)
            else {
                return Err(CoreError::Validation(
                    "Enter width, depth and height to continue".to_string(),
                ));
            };
            if width < MIN_WIDTH_CM {
                return Err(CoreError::Validation(format!(
                    "Width must be at least {MIN_WIDTH_CM} cm"
                )));
            }
            if depth < MIN_DEPTH_CM {
                return Err(CoreError::Validation(format!(
                    "Depth must be at least {MIN_DEPTH_CM} cm"
                )));
            }
            if height < MIN_HEIGHT_CM {
                return Err(CoreError::Validation(format!(
                    "Height must be at least {MIN_HEIGHT_CM} cm"
                )));
            }
        }
        StepKind::Coverage => {
            if draft.coverage_id.is_none() {
                return Err(CoreError::Validation(
                    "Choose a coverage to continue".to_string(),
                ));
            }
        }
        StepKind::Color => {
            let chosen = match line {
                ProductLine::Metal => draft
                    .structure_color
                    .as_deref()
                    .is_some_and(|s| !s.trim().is_empty()),
                ProductLine::Wood => draft.color_id.is_some(),
            };
            if !chosen {
                return Err(CoreError::Validation(
                    "Choose a color to continue".to_string(),
                ));
            }
        }
        // Surface is optional at step level on both lines; the wood line
        // enforces it at submission.
        StepKind::Surface => {}
        StepKind::Summary => submission::validate_preconditions(line, draft)?,
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Wizard sequencer
// ---------------------------------------------------------------------------

/// The step sequencer for one wizard session.
///
/// A small value-type state machine: the current 1-based step plus the
/// last rejection message. Advancing past the last step and retreating
/// before the first are no-ops.
#[derive(Debug, Clone, PartialEq)]
pub struct Wizard {
    line: ProductLine,
    step: u8,
    pending_message: Option<String>,
}

impl Wizard {
    /// Start a wizard at the first step.
    pub fn new(line: ProductLine) -> Self {
        Self {
            line,
            step: 1,
            pending_message: None,
        }
    }

    /// Resume a wizard at a given 1-based step.
    pub fn at(line: ProductLine, step: u8) -> Result<Self, CoreError> {
        step_kind(line, step)?;
        Ok(Self {
            line,
            step,
            pending_message: None,
        })
    }

    pub fn product_line(&self) -> ProductLine {
        self.line
    }

    /// The current 1-based step number.
    pub fn current_step(&self) -> u8 {
        self.step
    }

    /// The kind of the current step.
    pub fn current_kind(&self) -> StepKind {
        steps(self.line)[self.step as usize - 1]
    }

    pub fn is_first(&self) -> bool {
        self.step == 1
    }

    pub fn is_last(&self) -> bool {
        self.step == step_count(self.line)
    }

    /// The message of the last rejected `advance`, if any.
    pub fn pending_message(&self) -> Option<&str> {
        self.pending_message.as_deref()
    }

    /// Validate the current step against the draft and move forward.
    ///
    /// On success the step index is incremented (a no-op on the last step)
    /// and any pending message is cleared. On failure the position is
    /// unchanged, the message is retained for display, and the validation
    /// error is returned.
    pub fn advance(&mut self, draft: &ConfigurationDraft) -> Result<u8, CoreError> {
        if let Err(err) = validate_step(self.line, self.step, draft) {
            if let CoreError::Validation(msg) = &err {
                self.pending_message = Some(msg.clone());
            }
            return Err(err);
        }

        self.pending_message = None;
        if !self.is_last() {
            self.step += 1;
        }
        Ok(self.step)
    }

    /// Move back one step, clearing any pending validation message.
    ///
    /// A no-op on the first step.
    pub fn retreat(&mut self) -> u8 {
        self.pending_message = None;
        if self.step > 1 {
            self.step -= 1;
        }
        self.step
    }
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

    fn wood_draft() -> ConfigurationDraft {
        ConfigurationDraft::new(ProductLine::Wood)
    }

    fn metal_draft() -> ConfigurationDraft {
        ConfigurationDraft::new(ProductLine::Metal)
    }

    // -- step tables --

    #[test]
    fn metal_has_seven_steps_wood_has_six() {
        assert_eq!(step_count(ProductLine::Metal), 7);
        assert_eq!(step_count(ProductLine::Wood), 6);
    }

    #[test]
    fn both_lines_start_with_structure_and_end_with_summary() {
        for line in [ProductLine::Metal, ProductLine::Wood] {
            let table = steps(line);
            assert_eq!(table[0], StepKind::StructureType);
            assert_eq!(*table.last().unwrap(), StepKind::Summary);
        }
    }

    #[test]
    fn step_kind_rejects_out_of_range() {
        assert!(step_kind(ProductLine::Metal, 0).is_err());
        assert!(step_kind(ProductLine::Metal, 8).is_err());
        assert!(step_kind(ProductLine::Wood, 7).is_err());
    }

    // -- structure type step --

    #[test]
    fn structure_step_blocks_until_chosen() {
        assert!(validate_step(ProductLine::Wood, 1, &wood_draft()).is_err());

        let chosen = wood_draft().merged(&DraftPatch {
            structure_type_id: Some(Uuid::new_v4()),
            ..DraftPatch::default()
        });
        assert!(validate_step(ProductLine::Wood, 1, &chosen).is_ok());
    }

    #[test]
    fn metal_structure_step_rejects_blank_text() {
        let blank = metal_draft().merged(&DraftPatch {
            structure_type: Some("   ".to_string()),
            ..DraftPatch::default()
        });
        assert!(validate_step(ProductLine::Metal, 1, &blank).is_err());

        let named = metal_draft().merged(&DraftPatch {
            structure_type: Some("Freestanding".to_string()),
            ..DraftPatch::default()
        });
        assert!(validate_step(ProductLine::Metal, 1, &named).is_ok());
    }

    // -- dimensions step --

    fn with_dims(width: u32, depth: u32, height: u32) -> ConfigurationDraft {
        wood_draft().merged(&DraftPatch {
            width_cm: Some(width),
            depth_cm: Some(depth),
            height_cm: Some(height),
            ..DraftPatch::default()
        })
    }

    #[test]
    fn dimensions_below_minimum_are_rejected() {
        let err = validate_step(ProductLine::Wood, 3, &with_dims(150, 400, 200)).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("Width"));
    }

    #[test]
    fn dimension_minimums_are_inclusive() {
        assert!(validate_step(ProductLine::Wood, 3, &with_dims(200, 300, 180)).is_ok());
    }

    #[test]
    fn missing_dimension_is_rejected() {
        let partial = wood_draft().merged(&DraftPatch {
            width_cm: Some(400),
            depth_cm: Some(400),
            ..DraftPatch::default()
        });
        assert!(validate_step(ProductLine::Wood, 3, &partial).is_err());
    }

    // -- color step --

    #[test]
    fn color_step_per_line_fields() {
        let metal = metal_draft().merged(&DraftPatch {
            structure_color: Some("RAL 7016".to_string()),
            ..DraftPatch::default()
        });
        assert!(validate_step(ProductLine::Metal, 5, &metal).is_ok());

        let wood = wood_draft().merged(&DraftPatch {
            color_id: Some(Uuid::new_v4()),
            ..DraftPatch::default()
        });
        assert!(validate_step(ProductLine::Wood, 5, &wood).is_ok());
        assert!(validate_step(ProductLine::Wood, 5, &wood_draft()).is_err());
    }

    // -- surface step (metal only has one) --

    #[test]
    fn surface_step_never_blocks() {
        assert!(validate_step(ProductLine::Metal, 6, &metal_draft()).is_ok());
    }

    // -- sequencer --

    #[test]
    fn advance_moves_forward_when_step_is_satisfied() {
        let mut wizard = Wizard::new(ProductLine::Wood);
        let draft = wood_draft().merged(&DraftPatch {
            structure_type_id: Some(Uuid::new_v4()),
            ..DraftPatch::default()
        });

        assert_eq!(wizard.advance(&draft).unwrap(), 2);
        assert_eq!(wizard.current_step(), 2);
        assert_eq!(wizard.pending_message(), None);
    }

    #[test]
    fn advance_rejection_keeps_position_and_message() {
        let mut wizard = Wizard::new(ProductLine::Wood);

        assert!(wizard.advance(&wood_draft()).is_err());
        assert_eq!(wizard.current_step(), 1);
        assert!(wizard.pending_message().is_some());
    }

    #[test]
    fn retreat_clears_message_and_stops_at_first_step() {
        let mut wizard = Wizard::new(ProductLine::Wood);
        let _ = wizard.advance(&wood_draft());
        assert!(wizard.pending_message().is_some());

        assert_eq!(wizard.retreat(), 1);
        assert_eq!(wizard.pending_message(), None);

        let mut resumed = Wizard::at(ProductLine::Wood, 3).unwrap();
        assert_eq!(resumed.retreat(), 2);
    }

    #[test]
    fn at_rejects_out_of_range_step() {
        assert!(Wizard::at(ProductLine::Wood, 0).is_err());
        assert!(Wizard::at(ProductLine::Wood, 9).is_err());
    }

    #[test]
    fn advance_clamps_at_last_step() {
        let complete = wood_draft().merged(&DraftPatch {
            structure_type_id: Some(Uuid::new_v4()),
            model_id: Some(Uuid::new_v4()),
            width_cm: Some(400),
            depth_cm: Some(600),
            height_cm: Some(250),
            coverage_id: Some(Uuid::new_v4()),
            color_id: Some(Uuid::new_v4()),
            surface_id: Some(Uuid::new_v4()),
            package_type: Some(crate::draft::PackageType::Turnkey),
            name: Some("Marco Rossi".to_string()),
            email: Some("marco@example.com".to_string()),
            phone: Some("+39 333 7654321".to_string()),
            privacy_accepted: Some(true),
            ..DraftPatch::default()
        });

        let mut wizard = Wizard::at(ProductLine::Wood, 6).unwrap();
        assert!(wizard.is_last());

        // Satisfying the summary preconditions does not move past the end.
        assert_eq!(wizard.advance(&complete).unwrap(), 6);
        assert_eq!(wizard.current_step(), 6);
    }

    #[test]
    fn summary_step_enforces_submission_preconditions() {
        let mut wizard = Wizard::at(ProductLine::Wood, 6).unwrap();

        let err = wizard.advance(&wood_draft()).unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
        assert!(wizard.pending_message().is_some());
    }
}
