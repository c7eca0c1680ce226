use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::{
    content::domain::{ordering::deserialize_order, OrderedResource, Resource},
    media::domain::ImageSlot,
    shared::validation::{clean_list, ValidationError, Validator},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Public image URL, usually `/project-images/...`.
    pub image: String,
    pub link: String,
    pub tags: Vec<String>,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_tags",
        skip_serializing_if = "Option::is_none"
    )]
    pub tags: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_order",
        skip_serializing_if = "Option::is_none"
    )]
    pub order: Option<i32>,
}

/// Tags arrive as a JSON array, or from forms as one comma separated string.
fn deserialize_tags<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTags {
        List(Vec<String>),
        Text(String),
    }

    Ok(match Option::<RawTags>::deserialize(deserializer)? {
        None => None,
        Some(RawTags::List(tags)) => Some(tags),
        Some(RawTags::Text(text)) => Some(text.split(',').map(str::to_string).collect()),
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub image: String,
    pub link: String,
    pub tags: Vec<String>,
    pub order: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub link: Option<String>,
    pub tags: Option<Vec<String>>,
    pub order: Option<i32>,
}

impl Resource for Project {
    type Payload = ProjectPayload;
    type Draft = ProjectDraft;
    type Changes = ProjectChanges;

    const NAME: &'static str = "Project";
    const COLLECTION: &'static str = "projects";
    const IMAGE: Option<ImageSlot> = Some(ImageSlot::PROJECT_IMAGE);

    fn id(&self) -> Uuid {
        self.id
    }

    fn validate_draft(p: ProjectPayload) -> Result<ProjectDraft, ValidationError> {
        let mut v = Validator::new();
        let title = v.required("title", "Title", p.title);
        let description = v.required("description", "Description", p.description);
        let image = v.required("image", "Image", p.image);
        let link = v.required("link", "Project link", p.link);
        let order = v.non_negative("order", "Order", p.order);

        v.finish(ProjectDraft {
            title,
            description,
            image,
            link,
            tags: clean_list(p.tags.unwrap_or_default()),
            order,
        })
    }

    fn validate_changes(p: ProjectPayload) -> Result<ProjectChanges, ValidationError> {
        let mut v = Validator::new();
        let title = p.title.map(|t| v.required("title", "Title", Some(t)));
        let description = p
            .description
            .map(|d| v.required("description", "Description", Some(d)));
        let image = p.image.map(|i| v.required("image", "Image", Some(i)));
        let link = p.link.map(|l| v.required("link", "Project link", Some(l)));
        let order = v.non_negative("order", "Order", p.order);

        v.finish(ProjectChanges {
            title,
            description,
            image,
            link,
            tags: p.tags.map(clean_list),
            order,
        })
    }

    fn to_payload(&self) -> ProjectPayload {
        ProjectPayload {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            image: Some(self.image.clone()),
            link: Some(self.link.clone()),
            tags: Some(self.tags.clone()),
            order: Some(self.order),
        }
    }

    fn from_draft(id: Uuid, draft: ProjectDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            image: draft.image,
            link: draft.link,
            tags: draft.tags,
            order: draft.order.unwrap_or(0),
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_changes(&mut self, c: ProjectChanges, now: DateTime<Utc>) {
        if let Some(title) = c.title {
            self.title = title;
        }
        if let Some(description) = c.description {
            self.description = description;
        }
        if let Some(image) = c.image {
            self.image = image;
        }
        if let Some(link) = c.link {
            self.link = link;
        }
        if let Some(tags) = c.tags {
            self.tags = tags;
        }
        if let Some(order) = c.order {
            self.order = order;
        }
        self.updated_at = now;
    }

    fn arrange(items: &mut [Self]) {
        items.sort_by_key(|p| p.order);
    }
}

impl OrderedResource for Project {
    fn order(&self) -> i32 {
        self.order
    }

    fn set_order(&mut self, order: i32) {
        self.order = order;
    }

    fn draft_order(draft: &ProjectDraft) -> Option<i32> {
        draft.order
    }

    fn assign_order(draft: &mut ProjectDraft, order: i32) {
        draft.order = Some(order);
    }
}
