//! Typed face-api port implementation over the request pipeline.

use reqwest::Method;
use serde::Deserialize;
use serde_json::{Value, json};

use facehub_app::ports::{FaceApi, RemoteGroup, RemotePerson};
use facehub_domain::error::ServiceError;
use facehub_domain::id::{GroupId, PersonId};

use crate::client::{AzureFaceClient, Payload};

/// Wire shape of a person group.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersonGroupBody {
    person_group_id: String,
    name: String,
}

/// Wire shape of a person.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersonBody {
    person_id: String,
    name: String,
}

/// Wire shape of a person-creation response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatedPersonBody {
    person_id: String,
}

fn decode<T: serde::de::DeserializeOwned>(answer: Value) -> Result<T, ServiceError> {
    serde_json::from_value(answer)
        .map_err(|_| ServiceError::new("unexpected response from face api"))
}

impl FaceApi for AzureFaceClient {
    async fn list_groups(&self) -> Result<Vec<RemoteGroup>, ServiceError> {
        let answer = self
            .call_api(Method::GET, "persongroups", Payload::None, &[])
            .await?;
        let groups: Vec<PersonGroupBody> = decode(answer)?;
        Ok(groups
            .into_iter()
            .map(|group| RemoteGroup {
                id: GroupId::from_name(&group.person_group_id),
                name: group.name,
            })
            .collect())
    }

    async fn list_persons(&self, group: &GroupId) -> Result<Vec<RemotePerson>, ServiceError> {
        let answer = self
            .call_api(
                Method::GET,
                &format!("persongroups/{group}/persons"),
                Payload::None,
                &[],
            )
            .await?;
        let persons: Vec<PersonBody> = decode(answer)?;
        Ok(persons
            .into_iter()
            .map(|person| RemotePerson {
                id: PersonId::new(person.person_id),
                name: person.name,
            })
            .collect())
    }

    async fn create_group(&self, group: &GroupId, name: &str) -> Result<(), ServiceError> {
        self.call_api(
            Method::PUT,
            &format!("persongroups/{group}"),
            Payload::Json(json!({ "name": name })),
            &[],
        )
        .await?;
        Ok(())
    }

    async fn delete_group(&self, group: &GroupId) -> Result<(), ServiceError> {
        self.call_api(
            Method::DELETE,
            &format!("persongroups/{group}"),
            Payload::None,
            &[],
        )
        .await?;
        Ok(())
    }

    async fn train_group(&self, group: &GroupId) -> Result<(), ServiceError> {
        self.call_api(
            Method::POST,
            &format!("persongroups/{group}/train"),
            Payload::None,
            &[],
        )
        .await?;
        Ok(())
    }

    async fn create_person(&self, group: &GroupId, name: &str) -> Result<PersonId, ServiceError> {
        let answer = self
            .call_api(
                Method::POST,
                &format!("persongroups/{group}/persons"),
                Payload::Json(json!({ "name": name })),
                &[],
            )
            .await?;
        let created: CreatedPersonBody = decode(answer)?;
        Ok(PersonId::new(created.person_id))
    }

    async fn delete_person(&self, group: &GroupId, person: &PersonId) -> Result<(), ServiceError> {
        self.call_api(
            Method::DELETE,
            &format!("persongroups/{group}/persons/{person}"),
            Payload::None,
            &[],
        )
        .await?;
        Ok(())
    }

    async fn add_face(
        &self,
        group: &GroupId,
        person: &PersonId,
        image: Vec<u8>,
    ) -> Result<(), ServiceError> {
        self.call_api(
            Method::POST,
            &format!("persongroups/{group}/persons/{person}/persistedFaces"),
            Payload::Binary(image),
            &[],
        )
        .await?;
        Ok(())
    }
}
