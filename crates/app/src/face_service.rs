//! Face service — mirrored-store lifecycle and command dispatch.

use std::collections::HashMap;

use facehub_domain::entity::GroupEntity;
use facehub_domain::error::ServiceError;
use facehub_domain::id::GroupId;
use facehub_domain::store::FaceStore;

use crate::command::Command;
use crate::ports::{Camera, FaceApi, StatePresenter};

/// Orchestrates remote face-API calls against the locally mirrored store.
///
/// The service is the sole owner of the store and of the per-group entity
/// handles; mutations require `&mut self`, so operations against the store
/// never interleave mid-flight. Local records change strictly after the
/// corresponding remote call reports success — never optimistically.
///
/// The typed operations return [`ServiceError`] to the caller; the
/// [`handle`](Self::handle) dispatch boundary logs failures and swallows
/// them, so dispatched commands are fire-and-forget.
pub struct FaceService<A, C, P> {
    api: A,
    camera: C,
    presenter: P,
    store: FaceStore,
    entities: HashMap<GroupId, GroupEntity>,
}

impl<A, C, P> FaceService<A, C, P>
where
    A: FaceApi,
    C: Camera,
    P: StatePresenter,
{
    /// Create a service over the given ports with an empty store.
    #[must_use]
    pub fn new(api: A, camera: C, presenter: P) -> Self {
        Self {
            api,
            camera,
            presenter,
            store: FaceStore::new(),
            entities: HashMap::new(),
        }
    }

    /// Read access to the mirrored store.
    #[must_use]
    pub fn store(&self) -> &FaceStore {
        &self.store
    }

    /// Load all remote group and person data into the mirrored store.
    ///
    /// Groups are fetched first; each group's persons are fetched after
    /// its record exists (no ordering is guaranteed across groups). Once
    /// the store is populated, all entity-view renders are issued
    /// concurrently and the call returns only when every one of them has
    /// completed.
    ///
    /// # Errors
    ///
    /// Propagates the first failing API call. Records mirrored before the
    /// failure are kept; there is no rollback.
    pub async fn update_store(&mut self) -> Result<(), ServiceError> {
        let groups = self.api.list_groups().await?;

        for group in groups {
            self.store.insert_group(group.id.clone(), group.name.clone());
            self.entities.insert(
                group.id.clone(),
                GroupEntity::new(group.id.clone(), group.name),
            );

            let persons = self.api.list_persons(&group.id).await?;
            for person in persons {
                self.store.insert_person(&group.id, person.name, person.id);
            }
        }

        let renders = self
            .entities
            .values()
            .map(|entity| self.presenter.upsert(entity.snapshot(&self.store)));
        futures::future::join_all(renders).await;

        Ok(())
    }

    /// Create a person group from a display name.
    ///
    /// # Errors
    ///
    /// Fails when the remote create call fails; the store stays untouched.
    pub async fn create_group(&mut self, name: &str) -> Result<(), ServiceError> {
        let group = GroupId::from_name(name);
        self.api.create_group(&group, name).await?;

        self.store.insert_group(group.clone(), name);
        self.entities
            .insert(group.clone(), GroupEntity::new(group.clone(), name));
        self.render(&group).await;
        Ok(())
    }

    /// Delete a person group by display name.
    ///
    /// # Errors
    ///
    /// Fails when the remote delete call fails; the store stays untouched.
    pub async fn delete_group(&mut self, name: &str) -> Result<(), ServiceError> {
        let group = GroupId::from_name(name);
        self.api.delete_group(&group).await?;

        self.store.remove_group(&group);
        if let Some(entity) = self.entities.remove(&group) {
            self.presenter.remove(&entity.entity_id()).await;
        }
        Ok(())
    }

    /// Start remote training for a group. Nothing is mirrored.
    ///
    /// # Errors
    ///
    /// Fails when the remote train call fails.
    pub async fn train_group(&self, group: &GroupId) -> Result<(), ServiceError> {
        self.api.train_group(group).await
    }

    /// Create a person in a group and mirror the remote-assigned
    /// identifier under its name.
    ///
    /// # Errors
    ///
    /// Fails when the remote create call fails; the store stays untouched.
    pub async fn create_person(&mut self, group: &GroupId, name: &str) -> Result<(), ServiceError> {
        let person_id = self.api.create_person(group, name).await?;

        self.store.insert_person(group, name, person_id);
        self.render(group).await;
        Ok(())
    }

    /// Delete a person from a group.
    ///
    /// An unmirrored name resolves to the placeholder identifier and the
    /// remote delete is issued anyway — it fails remotely rather than
    /// locally.
    ///
    /// # Errors
    ///
    /// Fails when the remote delete call fails; the store stays untouched.
    pub async fn delete_person(&mut self, group: &GroupId, name: &str) -> Result<(), ServiceError> {
        let person_id = self.store.resolve_person(group, name);
        self.api.delete_person(group, &person_id).await?;

        self.store.remove_person(group, name);
        self.render(group).await;
        Ok(())
    }

    /// Capture an image from the named camera source and attach it to a
    /// person as a face. Face attachments are write-only; nothing is
    /// mirrored.
    ///
    /// # Errors
    ///
    /// Fails when the capture or the remote upload fails.
    pub async fn face_person(
        &self,
        group: &GroupId,
        person: &str,
        camera: &str,
    ) -> Result<(), ServiceError> {
        let person_id = self.store.resolve_person(group, person);
        let image = self.camera.capture(camera).await?;
        self.api.add_face(group, &person_id, image).await
    }

    /// Dispatch one command, logging and swallowing any failure.
    ///
    /// The caller always sees the command as accepted; the remote outcome
    /// is only observable through the entity views and the logs.
    pub async fn handle(&mut self, command: Command) {
        match command {
            Command::CreateGroup { name } => {
                if let Err(err) = self.create_group(&name).await {
                    let group = GroupId::from_name(&name);
                    tracing::error!(%group, error = %err, "can't create group");
                }
            }
            Command::DeleteGroup { name } => {
                if let Err(err) = self.delete_group(&name).await {
                    let group = GroupId::from_name(&name);
                    tracing::error!(%group, error = %err, "can't delete group");
                }
            }
            Command::TrainGroup { group } => {
                if let Err(err) = self.train_group(&group).await {
                    tracing::error!(%group, error = %err, "can't train group");
                }
            }
            Command::CreatePerson { group, name } => {
                if let Err(err) = self.create_person(&group, &name).await {
                    tracing::error!(%group, person = %name, error = %err, "can't create person");
                }
            }
            Command::DeletePerson { group, name } => {
                if let Err(err) = self.delete_person(&group, &name).await {
                    tracing::error!(%group, person = %name, error = %err, "can't delete person");
                }
            }
            Command::FacePerson {
                group,
                person,
                camera,
            } => {
                if let Err(err) = self.face_person(&group, &person, &camera).await {
                    tracing::error!(%group, person = %person, error = %err, "can't add face");
                }
            }
        }
    }

    /// Re-render one group's entity view from the current store state.
    async fn render(&self, group: &GroupId) {
        if let Some(entity) = self.entities.get(group) {
            self.presenter.upsert(entity.snapshot(&self.store)).await;
        }
    }
}
