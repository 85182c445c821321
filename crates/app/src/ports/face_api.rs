//! Face API port — typed remote operations against the vision service.

use std::future::Future;

use facehub_domain::error::ServiceError;
use facehub_domain::id::{GroupId, PersonId};

/// A person group as reported by the remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteGroup {
    /// Remote group identifier (a slug, since we created it from a name).
    pub id: GroupId,
    /// Display name stored remotely.
    pub name: String,
}

/// A person as reported by the remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemotePerson {
    /// Opaque remote person identifier.
    pub id: PersonId,
    /// Person name, unique within its group.
    pub name: String,
}

/// Typed operations the face service performs against the remote API.
///
/// Implemented by the Azure adapter. Every failure mode — connection,
/// timeout, non-success status, malformed body — surfaces as the single
/// [`ServiceError`] kind.
pub trait FaceApi {
    /// List all remote person groups.
    fn list_groups(&self)
    -> impl Future<Output = Result<Vec<RemoteGroup>, ServiceError>> + Send;

    /// List the persons of one group.
    fn list_persons(
        &self,
        group: &GroupId,
    ) -> impl Future<Output = Result<Vec<RemotePerson>, ServiceError>> + Send;

    /// Create a remote person group under the given identifier and name.
    fn create_group(
        &self,
        group: &GroupId,
        name: &str,
    ) -> impl Future<Output = Result<(), ServiceError>> + Send;

    /// Delete a remote person group.
    fn delete_group(&self, group: &GroupId)
    -> impl Future<Output = Result<(), ServiceError>> + Send;

    /// Start training a group's recognition model. Remote-only; nothing
    /// is mirrored.
    fn train_group(&self, group: &GroupId)
    -> impl Future<Output = Result<(), ServiceError>> + Send;

    /// Create a person in a group, returning the remote-assigned
    /// identifier.
    fn create_person(
        &self,
        group: &GroupId,
        name: &str,
    ) -> impl Future<Output = Result<PersonId, ServiceError>> + Send;

    /// Delete a person from a group by remote identifier.
    fn delete_person(
        &self,
        group: &GroupId,
        person: &PersonId,
    ) -> impl Future<Output = Result<(), ServiceError>> + Send;

    /// Attach a face image to a person. Write-only; face attachments are
    /// not mirrored.
    fn add_face(
        &self,
        group: &GroupId,
        person: &PersonId,
        image: Vec<u8>,
    ) -> impl Future<Output = Result<(), ServiceError>> + Send;
}
