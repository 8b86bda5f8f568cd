//! The in-progress configuration draft and its merge-patch accumulator.
//!
//! A [`ConfigurationDraft`] is created empty (only the product line set)
//! when a wizard session starts, and is advanced step by step by merging
//! [`DraftPatch`] values into it. Merging is pure and shallow: a later
//! patch always wins for the fields it carries, and fields a patch does
//! not carry are left untouched. The draft lives entirely on the client
//! between requests; the server never stores a partial configuration.
//!
//! The only derived mutation is the structure-type → model invalidation:
//! when a structure-type change narrows the compatible model set below the
//! previously chosen model, the model selection is cleared rather than
//! left dangling. Nothing else cascades.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::product_line::ProductLine;
use crate::types::EntityId;

// ---------------------------------------------------------------------------
// Fulfillment package
// ---------------------------------------------------------------------------

/// How the customer wants the structure delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageType {
    /// Delivered and assembled on site.
    Turnkey,
    /// Delivered as a kit for self-assembly.
    SelfInstall,
}

impl PackageType {
    /// Parse a package type string from the database.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "turnkey" => Ok(Self::Turnkey),
            "self_install" => Ok(Self::SelfInstall),
            _ => Err(CoreError::Validation(format!(
                "Invalid package type '{s}'. Must be one of: turnkey, self_install"
            ))),
        }
    }

    /// Convert to a database-compatible string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Turnkey => "turnkey",
            Self::SelfInstall => "self_install",
        }
    }
}

// ---------------------------------------------------------------------------
// Contact preference
// ---------------------------------------------------------------------------

/// Preferred channel for following up on a quote request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactPreference {
    Email,
    Phone,
    Whatsapp,
}

impl ContactPreference {
    /// Parse a contact preference string from the database.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "whatsapp" => Ok(Self::Whatsapp),
            _ => Err(CoreError::Validation(format!(
                "Invalid contact preference '{s}'. Must be one of: email, phone, whatsapp"
            ))),
        }
    }

    /// Convert to a database-compatible string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Whatsapp => "whatsapp",
        }
    }
}

// ---------------------------------------------------------------------------
// ConfigurationDraft
// ---------------------------------------------------------------------------

/// The accumulated, partial, in-progress configuration.
///
/// All selection and contact fields are optional; only `product_line` is
/// fixed for the lifetime of a wizard session. Which fields are meaningful
/// depends on the line: the metal line identifies its structure by the
/// free-text `structure_type` and its color by the `structure_color`
/// name-or-id string, while the wood line uses `structure_type_id` and
/// `color_id` catalog references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationDraft {
    pub product_line: ProductLine,

    /// Structure category, metal line: catalog name or id rendered as text.
    pub structure_type: Option<String>,
    /// Structure category, wood line: catalog reference.
    pub structure_type_id: Option<EntityId>,

    pub model_id: Option<EntityId>,

    /// Dimensions in centimeters.
    pub width_cm: Option<u32>,
    pub depth_cm: Option<u32>,
    pub height_cm: Option<u32>,

    pub coverage_id: Option<EntityId>,

    /// Metal line color: a catalog id rendered as text, or customer-supplied
    /// free text. Resolved to an id (or dropped) at submission time.
    pub structure_color: Option<String>,
    /// Wood line color: catalog reference.
    pub color_id: Option<EntityId>,
    /// Wood line display name for the chosen color; kept for the summary
    /// screen only, never persisted as the color itself.
    pub color_name: Option<String>,

    pub surface_id: Option<EntityId>,

    /// Wood line only. Empty means no accessories chosen.
    #[serde(default)]
    pub accessory_ids: Vec<EntityId>,

    pub package_type: Option<PackageType>,

    // Contact data, collected on the final step.
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub province: Option<String>,
    pub contact_preference: Option<ContactPreference>,

    /// Privacy/contact consent; a wood-line submission gate.
    #[serde(default)]
    pub privacy_accepted: bool,
}

impl ConfigurationDraft {
    /// Create an empty draft for the given product line.
    pub fn new(product_line: ProductLine) -> Self {
        Self {
            product_line,
            structure_type: None,
            structure_type_id: None,
            model_id: None,
            width_cm: None,
            depth_cm: None,
            height_cm: None,
            coverage_id: None,
            structure_color: None,
            color_id: None,
            color_name: None,
            surface_id: None,
            accessory_ids: Vec::new(),
            package_type: None,
            name: None,
            email: None,
            phone: None,
            address: None,
            city: None,
            postal_code: None,
            province: None,
            contact_preference: None,
            privacy_accepted: false,
        }
    }

    /// Merge a patch into this draft, returning the new draft.
    ///
    /// Shallow and non-mutating: a field present in the patch replaces the
    /// draft's value; a field absent from the patch is left untouched. No
    /// field is derived from another here.
    pub fn merged(&self, patch: &DraftPatch) -> Self {
        Self {
            product_line: self.product_line,
            structure_type: patch
                .structure_type
                .clone()
                .or_else(|| self.structure_type.clone()),
            structure_type_id: patch.structure_type_id.or(self.structure_type_id),
            model_id: patch.model_id.or(self.model_id),
            width_cm: patch.width_cm.or(self.width_cm),
            depth_cm: patch.depth_cm.or(self.depth_cm),
            height_cm: patch.height_cm.or(self.height_cm),
            coverage_id: patch.coverage_id.or(self.coverage_id),
            structure_color: patch
                .structure_color
                .clone()
                .or_else(|| self.structure_color.clone()),
            color_id: patch.color_id.or(self.color_id),
            color_name: patch.color_name.clone().or_else(|| self.color_name.clone()),
            surface_id: patch.surface_id.or(self.surface_id),
            accessory_ids: patch
                .accessory_ids
                .clone()
                .unwrap_or_else(|| self.accessory_ids.clone()),
            package_type: patch.package_type.or(self.package_type),
            name: patch.name.clone().or_else(|| self.name.clone()),
            email: patch.email.clone().or_else(|| self.email.clone()),
            phone: patch.phone.clone().or_else(|| self.phone.clone()),
            address: patch.address.clone().or_else(|| self.address.clone()),
            city: patch.city.clone().or_else(|| self.city.clone()),
            postal_code: patch
                .postal_code
                .clone()
                .or_else(|| self.postal_code.clone()),
            province: patch.province.clone().or_else(|| self.province.clone()),
            contact_preference: patch.contact_preference.or(self.contact_preference),
            privacy_accepted: patch.privacy_accepted.unwrap_or(self.privacy_accepted),
        }
    }

    /// Merge a patch that changes the structure type, clearing a model
    /// selection the new structure no longer offers.
    ///
    /// `compatible_model_ids` is the model candidate set for the structure
    /// type after the patch. A previously chosen model outside that set is
    /// cleared rather than left dangling.
    pub fn with_structure_change(
        &self,
        patch: &DraftPatch,
        compatible_model_ids: &[EntityId],
    ) -> Self {
        let mut next = self.merged(patch);
        next.model_id = next.model_id.filter(|id| compatible_model_ids.contains(id));
        next
    }
}

// ---------------------------------------------------------------------------
// DraftPatch
// ---------------------------------------------------------------------------

/// A partial update emitted by a single wizard step.
///
/// Every field is optional; `None` means "leave the draft's value alone".
/// `accessory_ids`, when present, replaces the whole set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftPatch {
    pub structure_type: Option<String>,
    pub structure_type_id: Option<EntityId>,
    pub model_id: Option<EntityId>,
    pub width_cm: Option<u32>,
    pub depth_cm: Option<u32>,
    pub height_cm: Option<u32>,
    pub coverage_id: Option<EntityId>,
    pub structure_color: Option<String>,
    pub color_id: Option<EntityId>,
    pub color_name: Option<String>,
    pub surface_id: Option<EntityId>,
    pub accessory_ids: Option<Vec<EntityId>>,
    pub package_type: Option<PackageType>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub province: Option<String>,
    pub contact_preference: Option<ContactPreference>,
    pub privacy_accepted: Option<bool>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn draft() -> ConfigurationDraft {
        ConfigurationDraft::new(ProductLine::Wood)
    }

    // -- merge --

    #[test]
    fn merge_accumulates_across_patches() {
        let m1 = Uuid::new_v4();

        let step1 = DraftPatch {
            model_id: Some(m1),
            ..DraftPatch::default()
        };
        let step2 = DraftPatch {
            width_cm: Some(500),
            ..DraftPatch::default()
        };

        let merged = draft().merged(&step1).merged(&step2);
        assert_eq!(merged.model_id, Some(m1));
        assert_eq!(merged.width_cm, Some(500));
    }

    #[test]
    fn later_patch_wins_without_touching_other_fields() {
        let m1 = Uuid::new_v4();
        let m2 = Uuid::new_v4();

        let merged = draft()
            .merged(&DraftPatch {
                model_id: Some(m1),
                ..DraftPatch::default()
            })
            .merged(&DraftPatch {
                width_cm: Some(500),
                ..DraftPatch::default()
            })
            .merged(&DraftPatch {
                model_id: Some(m2),
                ..DraftPatch::default()
            });

        assert_eq!(merged.model_id, Some(m2));
        assert_eq!(merged.width_cm, Some(500));
    }

    #[test]
    fn empty_patch_is_identity() {
        let base = draft().merged(&DraftPatch {
            coverage_id: Some(Uuid::new_v4()),
            name: Some("Anna".to_string()),
            ..DraftPatch::default()
        });

        assert_eq!(base.merged(&DraftPatch::default()), base);
    }

    #[test]
    fn accessory_patch_replaces_whole_set() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        let with_a = draft().merged(&DraftPatch {
            accessory_ids: Some(vec![a]),
            ..DraftPatch::default()
        });
        assert_eq!(with_a.accessory_ids, vec![a]);

        let with_b = with_a.merged(&DraftPatch {
            accessory_ids: Some(vec![b]),
            ..DraftPatch::default()
        });
        assert_eq!(with_b.accessory_ids, vec![b]);
    }

    // -- structure change --

    #[test]
    fn structure_change_clears_incompatible_model() {
        let m1 = Uuid::new_v4();
        let s2 = Uuid::new_v4();

        let base = draft().merged(&DraftPatch {
            structure_type_id: Some(Uuid::new_v4()),
            model_id: Some(m1),
            ..DraftPatch::default()
        });

        // The new structure type offers a disjoint model set.
        let changed = base.with_structure_change(
            &DraftPatch {
                structure_type_id: Some(s2),
                ..DraftPatch::default()
            },
            &[Uuid::new_v4(), Uuid::new_v4()],
        );

        assert_eq!(changed.structure_type_id, Some(s2));
        assert_eq!(changed.model_id, None);
    }

    #[test]
    fn structure_change_keeps_compatible_model() {
        let m1 = Uuid::new_v4();
        let s2 = Uuid::new_v4();

        let base = draft().merged(&DraftPatch {
            model_id: Some(m1),
            ..DraftPatch::default()
        });

        let changed = base.with_structure_change(
            &DraftPatch {
                structure_type_id: Some(s2),
                ..DraftPatch::default()
            },
            &[m1],
        );

        assert_eq!(changed.model_id, Some(m1));
    }

    // -- enum parsing --

    #[test]
    fn package_type_roundtrip() {
        for p in [PackageType::Turnkey, PackageType::SelfInstall] {
            assert_eq!(PackageType::from_str_db(p.as_str()).unwrap(), p);
        }
        assert!(PackageType::from_str_db("leasing").is_err());
    }

    #[test]
    fn contact_preference_roundtrip() {
        for p in [
            ContactPreference::Email,
            ContactPreference::Phone,
            ContactPreference::Whatsapp,
        ] {
            assert_eq!(ContactPreference::from_str_db(p.as_str()).unwrap(), p);
        }
        assert!(ContactPreference::from_str_db("fax").is_err());
    }
}
