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

const DESCRIPTIONS_REQUIRED: &str = "At least one non-empty description is required";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub degree: String,
    pub institution: String,
    pub location: String,
    /// "Month Year"
    pub start_year: String,
    /// "Month Year", or empty while still enrolled.
    pub end_year: String,
    pub descriptions: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_year: Option<String>,
    /// null clears the end date (ongoing).
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub end_year: PatchField<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descriptions: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EducationDraft {
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub start_year: String,
    pub end_year: String,
    pub descriptions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EducationChanges {
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub location: Option<String>,
    pub start_year: Option<String>,
    pub end_year: Option<String>,
    pub descriptions: Option<Vec<String>>,
}

impl Resource for Education {
    type Payload = EducationPayload;
    type Draft = EducationDraft;
    type Changes = EducationChanges;

    const NAME: &'static str = "Education";
    const COLLECTION: &'static str = "educations";

    fn id(&self) -> Uuid {
        self.id
    }

    fn validate_draft(p: EducationPayload) -> Result<EducationDraft, ValidationError> {
        let mut v = Validator::new();
        let degree = v.required("degree", "Degree", p.degree);
        let institution = v.required("institution", "Institution", p.institution);
        let location = v.required("location", "Location", p.location);
        let start_year = v.required("startYear", "Start year", p.start_year);
        if !start_year.is_empty() {
            v.month_year("startYear", &start_year);
        }
        let end_year = v.optional_month_year("endYear", p.end_year.into_option());
        let descriptions =
            v.non_empty_list("descriptions", DESCRIPTIONS_REQUIRED, p.descriptions);

        v.finish(EducationDraft {
            degree,
            institution,
            location,
            start_year,
            end_year,
            descriptions,
        })
    }

    fn validate_changes(p: EducationPayload) -> Result<EducationChanges, ValidationError> {
        let mut v = Validator::new();
        let degree = p.degree.map(|t| v.required("degree", "Degree", Some(t)));
        let institution = p.institution.map(|c| v.required("institution", "Institution", Some(c)));
        let location = p.location.map(|l| v.required("location", "Location", Some(l)));
        let start_year = p.start_year.map(|s| {
            let s = v.required("startYear", "Start year", Some(s));
            if !s.is_empty() {
                v.month_year("startYear", &s);
            }
            s
        });
        let end_year = match p.end_year {
            PatchField::Unset => None,
            PatchField::Null => Some(String::new()),
            PatchField::Value(end) => Some(v.optional_month_year("endYear", Some(end))),
        };
        let descriptions = p.descriptions.map(|items| {
            v.non_empty_list("descriptions", DESCRIPTIONS_REQUIRED, Some(items))
        });

        v.finish(EducationChanges {
            degree,
            institution,
            location,
            start_year,
            end_year,
            descriptions,
        })
    }

    fn to_payload(&self) -> EducationPayload {
        EducationPayload {
            degree: Some(self.degree.clone()),
            institution: Some(self.institution.clone()),
            location: Some(self.location.clone()),
            start_year: Some(self.start_year.clone()),
            end_year: PatchField::Value(self.end_year.clone()),
            descriptions: Some(self.descriptions.clone()),
        }
    }

    fn from_draft(id: Uuid, draft: EducationDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            degree: draft.degree,
            institution: draft.institution,
            location: draft.location,
            start_year: draft.start_year,
            end_year: draft.end_year,
            descriptions: draft.descriptions,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_changes(&mut self, c: EducationChanges, now: DateTime<Utc>) {
        if let Some(degree) = c.degree {
            self.degree = degree;
        }
        if let Some(institution) = c.institution {
            self.institution = institution;
        }
        if let Some(location) = c.location {
            self.location = location;
        }
        if let Some(start_year) = c.start_year {
            self.start_year = start_year;
        }
        if let Some(end_year) = c.end_year {
            self.end_year = end_year;
        }
        if let Some(descriptions) = c.descriptions {
            self.descriptions = clean_list(descriptions);
        }
        self.updated_at = now;
    }

    fn arrange(items: &mut [Self]) {
        items.sort_by(|a, b| {
            compare_newest_first(
                (a.start_year.as_str(), a.end_year.as_str()),
                (b.start_year.as_str(), b.end_year.as_str()),
            )
        });
    }
}
