use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    content::domain::Resource,
    shared::{
        month_year::compare_newest_first,
        patch::PatchField,
        validation::{clean_list, ValidationError, Validator},
    },
};

const RESPONSIBILITIES_REQUIRED: &str = "At least one non-empty responsibility is required";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    /// "Month Year"
    pub start_date: String,
    /// "Month Year", or empty while the position is ongoing.
    pub end_date: String,
    pub responsibilities: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperiencePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// null clears the end date (ongoing).
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub end_date: PatchField<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsibilities: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceDraft {
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExperienceChanges {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub responsibilities: Option<Vec<String>>,
}

impl Resource for Experience {
    type Payload = ExperiencePayload;
    type Draft = ExperienceDraft;
    type Changes = ExperienceChanges;

    const NAME: &'static str = "Experience";
    const COLLECTION: &'static str = "experiences";

    fn id(&self) -> Uuid {
        self.id
    }

    fn validate_draft(p: ExperiencePayload) -> Result<ExperienceDraft, ValidationError> {
        let mut v = Validator::new();
        let title = v.required("title", "Title", p.title);
        let company = v.required("company", "Company", p.company);
        let location = v.required("location", "Location", p.location);
        let start_date = v.required("startDate", "Start date", p.start_date);
        if !start_date.is_empty() {
            v.month_year("startDate", &start_date);
        }
        let end_date = v.optional_month_year("endDate", p.end_date.into_option());
        let responsibilities =
            v.non_empty_list("responsibilities", RESPONSIBILITIES_REQUIRED, p.responsibilities);

        v.finish(ExperienceDraft {
            title,
            company,
            location,
            start_date,
            end_date,
            responsibilities,
        })
    }

    fn validate_changes(p: ExperiencePayload) -> Result<ExperienceChanges, ValidationError> {
        let mut v = Validator::new();
        let title = p.title.map(|t| v.required("title", "Title", Some(t)));
        let company = p.company.map(|c| v.required("company", "Company", Some(c)));
        let location = p.location.map(|l| v.required("location", "Location", Some(l)));
        let start_date = p.start_date.map(|s| {
            let s = v.required("startDate", "Start date", Some(s));
            if !s.is_empty() {
                v.month_year("startDate", &s);
            }
            s
        });
        let end_date = match p.end_date {
            PatchField::Unset => None,
            PatchField::Null => Some(String::new()),
            PatchField::Value(end) => Some(v.optional_month_year("endDate", Some(end))),
        };
        let responsibilities = p.responsibilities.map(|items| {
            v.non_empty_list("responsibilities", RESPONSIBILITIES_REQUIRED, Some(items))
        });

        v.finish(ExperienceChanges {
            title,
            company,
            location,
            start_date,
            end_date,
            responsibilities,
        })
    }

    fn to_payload(&self) -> ExperiencePayload {
        ExperiencePayload {
            title: Some(self.title.clone()),
            company: Some(self.company.clone()),
            location: Some(self.location.clone()),
            start_date: Some(self.start_date.clone()),
            end_date: PatchField::Value(self.end_date.clone()),
            responsibilities: Some(self.responsibilities.clone()),
        }
    }

    fn from_draft(id: Uuid, draft: ExperienceDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            company: draft.company,
            location: draft.location,
            start_date: draft.start_date,
            end_date: draft.end_date,
            responsibilities: draft.responsibilities,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_changes(&mut self, c: ExperienceChanges, now: DateTime<Utc>) {
        if let Some(title) = c.title {
            self.title = title;
        }
        if let Some(company) = c.company {
            self.company = company;
        }
        if let Some(location) = c.location {
            self.location = location;
        }
        if let Some(start_date) = c.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = c.end_date {
            self.end_date = end_date;
        }
        if let Some(responsibilities) = c.responsibilities {
            self.responsibilities = clean_list(responsibilities);
        }
        self.updated_at = now;
    }

    fn arrange(items: &mut [Self]) {
        items.sort_by(|a, b| {
            compare_newest_first(
                (a.start_date.as_str(), a.end_date.as_str()),
                (b.start_date.as_str(), b.end_date.as_str()),
            )
        });
    }
}
