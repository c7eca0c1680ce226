use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    content::domain::{ordering::deserialize_order, OrderedResource, Resource},
    shared::validation::{ValidationError, Validator},
};

/// A link to one of the owner's profiles, e.g. GitHub or LinkedIn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMedia {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub platform: String,
    pub url: String,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialMediaPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_order",
        skip_serializing_if = "Option::is_none"
    )]
    pub order: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SocialMediaDraft {
    pub platform: String,
    pub url: String,
    pub order: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SocialMediaChanges {
    pub platform: Option<String>,
    pub url: Option<String>,
    pub order: Option<i32>,
}

impl Resource for SocialMedia {
    type Payload = SocialMediaPayload;
    type Draft = SocialMediaDraft;
    type Changes = SocialMediaChanges;

    const NAME: &'static str = "Social media";
    const COLLECTION: &'static str = "social-media";

    fn id(&self) -> Uuid {
        self.id
    }

    fn validate_draft(p: SocialMediaPayload) -> Result<SocialMediaDraft, ValidationError> {
        let mut v = Validator::new();
        let platform = v.required("platform", "Platform", p.platform);
        let url = v.required("url", "URL", p.url);
        let order = v.non_negative("order", "Order", p.order);

        v.finish(SocialMediaDraft {
            platform,
            url,
            order,
        })
    }

    fn validate_changes(p: SocialMediaPayload) -> Result<SocialMediaChanges, ValidationError> {
        let mut v = Validator::new();
        let platform = p
            .platform
            .map(|value| v.required("platform", "Platform", Some(value)));
        let url = p.url.map(|value| v.required("url", "URL", Some(value)));
        let order = v.non_negative("order", "Order", p.order);

        v.finish(SocialMediaChanges {
            platform,
            url,
            order,
        })
    }

    fn to_payload(&self) -> SocialMediaPayload {
        SocialMediaPayload {
            platform: Some(self.platform.clone()),
            url: Some(self.url.clone()),
            order: Some(self.order),
        }
    }

    fn from_draft(id: Uuid, draft: SocialMediaDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            platform: draft.platform,
            url: draft.url,
            order: draft.order.unwrap_or(0),
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_changes(&mut self, c: SocialMediaChanges, now: DateTime<Utc>) {
        if let Some(platform) = c.platform {
            self.platform = platform;
        }
        if let Some(url) = c.url {
            self.url = url;
        }
        if let Some(order) = c.order {
            self.order = order;
        }
        self.updated_at = now;
    }

    fn arrange(items: &mut [Self]) {
        items.sort_by_key(|s| s.order);
    }
}

impl OrderedResource for SocialMedia {
    fn order(&self) -> i32 {
        self.order
    }

    fn set_order(&mut self, order: i32) {
        self.order = order;
    }

    fn draft_order(draft: &SocialMediaDraft) -> Option<i32> {
        draft.order
    }

    fn assign_order(draft: &mut SocialMediaDraft, order: i32) {
        draft.order = Some(order);
    }
}
