use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    content::domain::{Resource, SingletonResource},
    shared::validation::{ValidationError, Validator},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactDraft {
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactChanges {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl Resource for Contact {
    type Payload = ContactPayload;
    type Draft = ContactDraft;
    type Changes = ContactChanges;

    const NAME: &'static str = "Contact";
    const COLLECTION: &'static str = "contact";

    fn id(&self) -> Uuid {
        self.id
    }

    fn validate_draft(p: ContactPayload) -> Result<ContactDraft, ValidationError> {
        let mut v = Validator::new();
        let email = v.required("email", "Email", p.email);
        let phone = v.required("phone", "Phone", p.phone);
        let address = v.required("address", "Address", p.address);

        v.finish(ContactDraft {
            email,
            phone,
            address,
        })
    }

    fn validate_changes(p: ContactPayload) -> Result<ContactChanges, ValidationError> {
        let mut v = Validator::new();
        let email = p.email.map(|e| v.required("email", "Email", Some(e)));
        let phone = p.phone.map(|ph| v.required("phone", "Phone", Some(ph)));
        let address = p.address.map(|a| v.required("address", "Address", Some(a)));

        v.finish(ContactChanges {
            email,
            phone,
            address,
        })
    }

    fn to_payload(&self) -> ContactPayload {
        ContactPayload {
            email: Some(self.email.clone()),
            phone: Some(self.phone.clone()),
            address: Some(self.address.clone()),
        }
    }

    fn from_draft(id: Uuid, draft: ContactDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            email: draft.email,
            phone: draft.phone,
            address: draft.address,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_changes(&mut self, c: ContactChanges, now: DateTime<Utc>) {
        if let Some(email) = c.email {
            self.email = email;
        }
        if let Some(phone) = c.phone {
            self.phone = phone;
        }
        if let Some(address) = c.address {
            self.address = address;
        }
        self.updated_at = now;
    }
}

impl SingletonResource for Contact {
    fn draft_from_changes(c: ContactChanges) -> Result<ContactDraft, ValidationError> {
        Self::validate_draft(ContactPayload {
            email: c.email,
            phone: c.phone,
            address: c.address,
        })
    }
}
