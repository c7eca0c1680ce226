use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    content::domain::{Resource, SingletonResource},
    media::domain::ImageSlot,
    shared::validation::{ValidationError, Validator},
};

pub const PLACEHOLDER_PICTURE: &str = "/placeholder.svg";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutMe {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub bio: String,
    pub picture_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutMePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AboutMeDraft {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub picture_url: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AboutMeChanges {
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub picture_url: Option<String>,
}

fn picture_or_placeholder(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| PLACEHOLDER_PICTURE.to_string())
}

impl Resource for AboutMe {
    type Payload = AboutMePayload;
    type Draft = AboutMeDraft;
    type Changes = AboutMeChanges;

    const NAME: &'static str = "About me";
    const COLLECTION: &'static str = "about-me";
    const IMAGE: Option<ImageSlot> = Some(ImageSlot::ABOUT_PICTURE);

    fn id(&self) -> Uuid {
        self.id
    }

    fn validate_draft(p: AboutMePayload) -> Result<AboutMeDraft, ValidationError> {
        let mut v = Validator::new();
        let name = v.required_min("name", "Name", p.name, 2);
        let title = v.required_min("title", "Title", p.title, 2);
        let bio = v.required_min("bio", "Bio", p.bio, 10);

        v.finish(AboutMeDraft {
            name,
            title,
            bio,
            picture_url: picture_or_placeholder(p.picture_url),
        })
    }

    fn validate_changes(p: AboutMePayload) -> Result<AboutMeChanges, ValidationError> {
        let mut v = Validator::new();
        let name = p.name.map(|n| v.required_min("name", "Name", Some(n), 2));
        let title = p.title.map(|t| v.required_min("title", "Title", Some(t), 2));
        let bio = p.bio.map(|b| v.required_min("bio", "Bio", Some(b), 10));

        v.finish(AboutMeChanges {
            name,
            title,
            bio,
            // Clearing the picture falls back to the placeholder.
            picture_url: p.picture_url.map(|url| picture_or_placeholder(Some(url))),
        })
    }

    fn to_payload(&self) -> AboutMePayload {
        AboutMePayload {
            name: Some(self.name.clone()),
            title: Some(self.title.clone()),
            bio: Some(self.bio.clone()),
            picture_url: Some(self.picture_url.clone()),
        }
    }

    fn from_draft(id: Uuid, draft: AboutMeDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            title: draft.title,
            bio: draft.bio,
            picture_url: draft.picture_url,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_changes(&mut self, c: AboutMeChanges, now: DateTime<Utc>) {
        if let Some(name) = c.name {
            self.name = name;
        }
        if let Some(title) = c.title {
            self.title = title;
        }
        if let Some(bio) = c.bio {
            self.bio = bio;
        }
        if let Some(picture_url) = c.picture_url {
            self.picture_url = picture_url;
        }
        self.updated_at = now;
    }
}

impl SingletonResource for AboutMe {
    fn draft_from_changes(c: AboutMeChanges) -> Result<AboutMeDraft, ValidationError> {
        Self::validate_draft(AboutMePayload {
            name: c.name,
            title: c.title,
            bio: c.bio,
            picture_url: c.picture_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, title: &str, bio: &str) -> AboutMePayload {
        AboutMePayload {
            name: Some(name.into()),
            title: Some(title.into()),
            bio: Some(bio.into()),
            picture_url: None,
        }
    }

    #[test]
    fn picture_defaults_to_placeholder() {
        let draft =
            AboutMe::validate_draft(payload("Ada", "Engineer", "Builds analytical engines")).unwrap();
        assert_eq!(draft.picture_url, PLACEHOLDER_PICTURE);
    }

    #[test]
    fn minimum_lengths() {
        let err = AboutMe::validate_draft(payload("A", "Engineer", "Builds engines")).unwrap_err();
        assert_eq!(err.message(), "Name must be at least 2 characters");

        let err = AboutMe::validate_draft(payload("Ada", "Engineer", "too short")).unwrap_err();
        assert_eq!(err.message(), "Bio must be at least 10 characters");
    }

    #[test]
    fn missing_bio_is_required_not_short() {
        let mut p = payload("Ada", "Engineer", "");
        p.bio = None;
        assert_eq!(
            AboutMe::validate_draft(p).unwrap_err().message(),
            "Bio is required"
        );
    }

    #[test]
    fn changes_check_only_submitted_fields() {
        let changes = AboutMe::validate_changes(AboutMePayload {
            title: Some("Staff Engineer".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(changes.title.as_deref(), Some("Staff Engineer"));
        assert!(changes.name.is_none());

        let err = AboutMe::validate_changes(AboutMePayload {
            title: Some("X".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.message(), "Title must be at least 2 characters");
    }

    #[test]
    fn draft_from_partial_changes_needs_full_document() {
        let err = AboutMe::draft_from_changes(AboutMeChanges {
            name: Some("Ada".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.message(), "Title is required");
    }
}
