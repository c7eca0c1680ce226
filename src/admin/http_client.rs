use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Deserialize};
use uuid::Uuid;

use super::client::{ClientError, ResourceClient, SingletonClient};
use crate::content::domain::{ReorderItem, Resource, SingletonResource};

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// `reqwest` adapter for the `/api/<collection>` routes.
#[derive(Debug, Clone)]
pub struct HttpResourceClient {
    http: Client,
    base_url: String,
}

impl HttpResourceClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn collection_url<R: Resource>(&self) -> String {
        format!("{}/api/{}", self.base_url, R::COLLECTION)
    }

    fn item_url<R: Resource>(&self, id: Uuid) -> String {
        format!("{}/{}", self.collection_url::<R>(), id)
    }
}

fn transport(e: reqwest::Error) -> ClientError {
    ClientError::Transport(e.to_string())
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    let status = resp.status();
    let bytes = resp.bytes().await.map_err(transport)?;

    if !status.is_success() {
        let message = serde_json::from_slice::<ErrorBody>(&bytes)
            .map(|body| body.error)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string()
            });
        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
}

/// Singleton reads answer `{}` when the slot is empty.
fn optional_document<R: DeserializeOwned>(value: serde_json::Value) -> Result<Option<R>, ClientError> {
    match value {
        serde_json::Value::Object(ref map) if map.is_empty() => Ok(None),
        other => serde_json::from_value(other)
            .map(Some)
            .map_err(|e| ClientError::Decode(e.to_string())),
    }
}

#[async_trait]
impl<R: Resource> ResourceClient<R> for HttpResourceClient {
    async fn list(&self) -> Result<Vec<R>, ClientError> {
        let resp = self
            .http
            .get(self.collection_url::<R>())
            .send()
            .await
            .map_err(transport)?;
        decode(resp).await
    }

    async fn create(&self, payload: &R::Payload) -> Result<R, ClientError> {
        let resp = self
            .http
            .post(self.collection_url::<R>())
            .json(payload)
            .send()
            .await
            .map_err(transport)?;
        decode(resp).await
    }

    async fn update(&self, id: Uuid, payload: &R::Payload) -> Result<R, ClientError> {
        let resp = self
            .http
            .patch(self.item_url::<R>(id))
            .json(payload)
            .send()
            .await
            .map_err(transport)?;
        decode(resp).await
    }

    async fn remove(&self, id: Uuid) -> Result<R, ClientError> {
        let resp = self
            .http
            .delete(self.item_url::<R>(id))
            .send()
            .await
            .map_err(transport)?;
        decode(resp).await
    }

    async fn reorder(&self, items: &[ReorderItem]) -> Result<Vec<R>, ClientError> {
        let resp = self
            .http
            .put(self.collection_url::<R>())
            .json(items)
            .send()
            .await
            .map_err(transport)?;
        decode(resp).await
    }
}

#[async_trait]
impl<R: SingletonResource> SingletonClient<R> for HttpResourceClient {
    async fn fetch(&self) -> Result<Option<R>, ClientError> {
        let resp = self
            .http
            .get(self.collection_url::<R>())
            .send()
            .await
            .map_err(transport)?;
        let value: serde_json::Value = decode(resp).await?;
        optional_document(value)
    }

    async fn save(&self, payload: &R::Payload) -> Result<R, ClientError> {
        let resp = self
            .http
            .put(self.collection_url::<R>())
            .json(payload)
            .send()
            .await
            .map_err(transport)?;
        decode(resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        contact::domain::entities::{Contact, ContactPayload},
        init_routes,
        skill::domain::entities::{Skill, SkillPayload},
        tests::support::{app_state_builder::TestAppStateBuilder, fixtures},
    };
    use actix_web::{App, HttpServer};
    use serde_json::json;

    /// Serves the real routes over in-memory repositories on an ephemeral port.
    fn spawn_server() -> String {
        let state = TestAppStateBuilder::default().build();
        let server = HttpServer::new(move || App::new().app_data(state.clone()).configure(init_routes))
            .workers(1)
            .bind(("127.0.0.1", 0))
            .unwrap();
        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        format!("http://{addr}")
    }

    #[test]
    fn empty_object_is_no_document() {
        let doc: Option<Contact> = optional_document(json!({})).unwrap();
        assert!(doc.is_none());

        let contact = fixtures::contact();
        let doc: Option<Contact> = optional_document(serde_json::to_value(&contact).unwrap()).unwrap();
        assert_eq!(doc, Some(contact));
    }

    #[test]
    fn trailing_slash_is_dropped() {
        let client = HttpResourceClient::new("http://localhost:8080/");
        assert_eq!(
            client.collection_url::<Skill>(),
            "http://localhost:8080/api/skills"
        );
    }

    #[actix_web::test]
    async fn create_and_list_round_trip_through_the_api() {
        let client = HttpResourceClient::new(spawn_server());

        let created: Skill = ResourceClient::<Skill>::create(
            &client,
            &SkillPayload {
                name: Some("Rust".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        let listed: Vec<Skill> = ResourceClient::<Skill>::list(&client).await.unwrap();

        assert_eq!(created.order, 0);
        assert_eq!(listed, vec![created]);
    }

    #[actix_web::test]
    async fn error_body_is_decoded() {
        let client = HttpResourceClient::new(spawn_server());

        let err = ResourceClient::<Skill>::create(&client, &SkillPayload::default())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ClientError::Api {
                status: 400,
                message: "Name is required".into()
            }
        );
    }

    #[actix_web::test]
    async fn singleton_fetch_on_empty_slot_is_none() {
        let client = HttpResourceClient::new(spawn_server());

        let fetched = SingletonClient::<Contact>::fetch(&client).await.unwrap();
        assert!(fetched.is_none());

        let saved = SingletonClient::<Contact>::save(
            &client,
            &ContactPayload {
                email: Some("ada@example.com".into()),
                phone: Some("+62 812".into()),
                address: Some("Kupang".into()),
            },
        )
        .await
        .unwrap();
        let fetched = SingletonClient::<Contact>::fetch(&client).await.unwrap();
        assert_eq!(fetched, Some(saved));
    }
}
