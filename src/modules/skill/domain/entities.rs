use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    content::domain::{ordering::deserialize_order, OrderedResource, Resource},
    shared::{
        patch::PatchField,
        validation::{ValidationError, Validator},
    },
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    /// Icon URL or inline data URL.
    pub icon: Option<String>,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub icon: PatchField<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_order",
        skip_serializing_if = "Option::is_none"
    )]
    pub order: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillDraft {
    pub name: String,
    pub icon: Option<String>,
    pub order: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillChanges {
    pub name: Option<String>,
    pub icon: PatchField<String>,
    pub order: Option<i32>,
}

/// Blank icons are stored as absent.
fn normalize_icon(icon: PatchField<String>) -> PatchField<String> {
    match icon {
        PatchField::Value(v) if v.trim().is_empty() => PatchField::Null,
        PatchField::Value(v) => PatchField::Value(v.trim().to_string()),
        other => other,
    }
}

impl Resource for Skill {
    type Payload = SkillPayload;
    type Draft = SkillDraft;
    type Changes = SkillChanges;

    const NAME: &'static str = "Skill";
    const COLLECTION: &'static str = "skills";

    fn id(&self) -> Uuid {
        self.id
    }

    fn validate_draft(payload: SkillPayload) -> Result<SkillDraft, ValidationError> {
        let mut v = Validator::new();
        let name = v.required("name", "Name", payload.name);
        let icon = normalize_icon(payload.icon).into_option();
        let order = v.non_negative("order", "Order", payload.order);

        v.finish(SkillDraft { name, icon, order })
    }

    fn validate_changes(payload: SkillPayload) -> Result<SkillChanges, ValidationError> {
        let mut v = Validator::new();
        let name = payload
            .name
            .map(|name| v.required("name", "Name", Some(name)));
        let order = v.non_negative("order", "Order", payload.order);

        v.finish(SkillChanges {
            name,
            icon: normalize_icon(payload.icon),
            order,
        })
    }

    fn to_payload(&self) -> SkillPayload {
        SkillPayload {
            name: Some(self.name.clone()),
            icon: self.icon.clone().into(),
            order: Some(self.order),
        }
    }

    fn from_draft(id: Uuid, draft: SkillDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            icon: draft.icon,
            order: draft.order.unwrap_or(0),
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_changes(&mut self, changes: SkillChanges, now: DateTime<Utc>) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        match changes.icon {
            PatchField::Unset => {}
            PatchField::Null => self.icon = None,
            PatchField::Value(icon) => self.icon = Some(icon),
        }
        if let Some(order) = changes.order {
            self.order = order;
        }
        self.updated_at = now;
    }

    fn unique_key(&self) -> Option<(&'static str, String)> {
        Some(("name", self.name.clone()))
    }

    fn arrange(items: &mut [Self]) {
        items.sort_by_key(|s| s.order);
    }
}

impl OrderedResource for Skill {
    fn order(&self) -> i32 {
        self.order
    }

    fn set_order(&mut self, order: i32) {
        self.order = order;
    }

    fn draft_order(draft: &SkillDraft) -> Option<i32> {
        draft.order
    }

    fn assign_order(draft: &mut SkillDraft, order: i32) {
        draft.order = Some(order);
    }
}
