//! # Adoption Repository
//!
//! This module owns the adoption record lifecycle: intake, listing with
//! filters, full updates, status transitions, and the status-gated soft
//! delete. The one hard invariant lives here: a row only gets a
//! `deleted_at` timestamp while its status is `adopted`, so the
//! available+deleted combination can never be produced.

use chrono::Utc;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder, Set,
};

use crate::error::RepositoryError;
use crate::models::adoption::{self, AdoptionStatus, Entity as Adoption, Gender};
use crate::models::breed::{self, Entity as Breed};

/// Request data for creating a new adoption listing
#[derive(Debug, Clone, Default)]
pub struct CreateAdoptionRequest {
    /// Name of the cat (required)
    pub name: String,
    /// Optional reference into the breeds catalog
    pub breed_id: Option<i32>,
    pub age: Option<String>,
    pub gender: Option<Gender>,
    pub temperament: Option<String>,
    pub description: Option<String>,
    /// Defaults to `available` when not supplied
    pub adoption_status: Option<AdoptionStatus>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub location: Option<String>,
    /// Public path returned by file storage when an image was uploaded
    pub image_url: Option<String>,
}

/// Request data for a full-field update of an adoption listing
#[derive(Debug, Clone, Default)]
pub struct UpdateAdoptionRequest {
    pub name: String,
    pub breed_id: Option<i32>,
    pub age: Option<String>,
    pub gender: Option<Gender>,
    pub temperament: Option<String>,
    pub description: Option<String>,
    pub adoption_status: Option<AdoptionStatus>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub location: Option<String>,
    /// A new image path replaces the stored one; `None` keeps it
    pub image_url: Option<String>,
}

/// Listing filter; the default excludes nothing beyond soft-deleted rows.
#[derive(Debug, Clone, Default)]
pub struct AdoptionFilter {
    /// Narrow to a single adoption status
    pub status: Option<AdoptionStatus>,
    /// Case-insensitive substring match over name, breed display name,
    /// location, and description
    pub q: Option<String>,
}

/// An adoption row joined with its breed display name.
#[derive(Debug, Clone)]
pub struct AdoptionWithBreed {
    pub adoption: adoption::Model,
    pub breed_name: Option<String>,
}

impl From<(adoption::Model, Option<breed::Model>)> for AdoptionWithBreed {
    fn from((adoption, breed): (adoption::Model, Option<breed::Model>)) -> Self {
        Self {
            adoption,
            breed_name: breed.map(|b| b.breed),
        }
    }
}

/// Repository for adoption database operations
pub struct AdoptionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdoptionRepository<'a> {
    /// Create a new AdoptionRepository with the given database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a new adoption listing, defaulting the status to `available`.
    pub async fn create_adoption(
        &self,
        request: CreateAdoptionRequest,
    ) -> Result<AdoptionWithBreed, RepositoryError> {
        validate_name(&request.name)?;
        validate_contact(
            request.contact_name.as_deref(),
            request.contact_email.as_deref(),
        )?;
        self.ensure_breed_exists(request.breed_id).await?;

        let now = Utc::now();
        let listing = adoption::ActiveModel {
            name: Set(request.name.trim().to_string()),
            breed_id: Set(request.breed_id),
            age: Set(request.age),
            gender: Set(request.gender),
            temperament: Set(request.temperament),
            description: Set(request.description),
            adoption_status: Set(request
                .adoption_status
                .unwrap_or(AdoptionStatus::Available)),
            contact_name: Set(request.contact_name),
            contact_email: Set(request.contact_email),
            contact_phone: Set(request.contact_phone),
            location: Set(request.location),
            image_url: Set(request.image_url),
            created_at: Set(now.into()),
            deleted_at: Set(None),
            ..Default::default()
        };

        let inserted = listing
            .insert(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        self.require_with_breed(inserted.id).await
    }

    /// List adoption listings, excluding soft-deleted rows, newest first.
    pub async fn list_adoptions(
        &self,
        filter: AdoptionFilter,
    ) -> Result<Vec<AdoptionWithBreed>, RepositoryError> {
        let mut query = Adoption::find()
            .find_also_related(Breed)
            .filter(adoption::Column::DeletedAt.is_null())
            .order_by_desc(adoption::Column::CreatedAt)
            .order_by_desc(adoption::Column::Id);

        if let Some(status) = filter.status {
            query = query.filter(adoption::Column::AdoptionStatus.eq(status));
        }

        if let Some(q) = filter.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            let pattern = format!("%{}%", q.to_lowercase());
            query = query.filter(
                Condition::any()
                    .add(lowered(adoption::Column::Name).like(&pattern))
                    .add(lowered(adoption::Column::Location).like(&pattern))
                    .add(lowered(adoption::Column::Description).like(&pattern))
                    .add(
                        Expr::expr(Func::lower(Expr::col((
                            breed::Entity,
                            breed::Column::Breed,
                        ))))
                        .like(&pattern),
                    ),
            );
        }

        let rows = query
            .all(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(rows.into_iter().map(AdoptionWithBreed::from).collect())
    }

    /// Fetch a single adoption row with its breed name. Soft-deleted rows
    /// are returned too; the row stays in storage after a soft delete.
    pub async fn get_adoption_by_id(
        &self,
        id: i32,
    ) -> Result<Option<AdoptionWithBreed>, RepositoryError> {
        let row = Adoption::find_by_id(id)
            .find_also_related(Breed)
            .one(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(row.map(AdoptionWithBreed::from))
    }

    /// Full-field update of a non-deleted adoption listing.
    ///
    /// Soft-deleted rows are not addressable here; letting an update
    /// through would reopen a removed listing and could clear its adopted
    /// status while `deleted_at` stays set.
    pub async fn update_adoption(
        &self,
        id: i32,
        request: UpdateAdoptionRequest,
    ) -> Result<AdoptionWithBreed, RepositoryError> {
        validate_name(&request.name)?;
        validate_contact(
            request.contact_name.as_deref(),
            request.contact_email.as_deref(),
        )?;
        self.ensure_breed_exists(request.breed_id).await?;

        let existing = self.find_active(id).await?;

        let current_status = existing.adoption_status;
        let mut listing = existing.into_active_model();
        listing.name = Set(request.name.trim().to_string());
        listing.breed_id = Set(request.breed_id);
        listing.age = Set(request.age);
        listing.gender = Set(request.gender);
        listing.temperament = Set(request.temperament);
        listing.description = Set(request.description);
        listing.adoption_status = Set(request.adoption_status.unwrap_or(current_status));
        listing.contact_name = Set(request.contact_name);
        listing.contact_email = Set(request.contact_email);
        listing.contact_phone = Set(request.contact_phone);
        listing.location = Set(request.location);
        if let Some(image_url) = request.image_url {
            listing.image_url = Set(Some(image_url));
        }

        listing
            .update(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        self.require_with_breed(id).await
    }

    /// Transition a non-deleted listing between `available` and `adopted`.
    pub async fn update_status(
        &self,
        id: i32,
        status: AdoptionStatus,
    ) -> Result<AdoptionWithBreed, RepositoryError> {
        let existing = self.find_active(id).await?;

        let mut listing = existing.into_active_model();
        listing.adoption_status = Set(status);
        listing
            .update(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        self.require_with_breed(id).await
    }

    /// Soft-delete a listing by stamping `deleted_at`.
    ///
    /// Only adopted listings may be removed; the precondition is enforced
    /// here rather than trusting callers, so available+deleted can never
    /// occur.
    pub async fn soft_delete_adoption(&self, id: i32) -> Result<(), RepositoryError> {
        let existing = self.find_active(id).await?;

        if existing.adoption_status != AdoptionStatus::Adopted {
            return Err(RepositoryError::precondition(
                "Only adopted records may be removed",
            ));
        }

        let mut listing = existing.into_active_model();
        listing.deleted_at = Set(Some(Utc::now().into()));
        listing
            .update(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(())
    }

    /// Permanently remove a listing with no status precondition.
    ///
    /// Legacy administrative cleanup path; coexists with the soft delete
    /// and is irreversible.
    pub async fn hard_delete_adoption(&self, id: i32) -> Result<u64, RepositoryError> {
        let result = Adoption::delete_by_id(id)
            .exec(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(result.rows_affected)
    }

    /// Fetch a non-deleted row or report it as unknown/already deleted.
    async fn find_active(&self, id: i32) -> Result<adoption::Model, RepositoryError> {
        Adoption::find_by_id(id)
            .filter(adoption::Column::DeletedAt.is_null())
            .one(self.db)
            .await
            .map_err(RepositoryError::database_error)?
            .ok_or_else(|| RepositoryError::not_found("Adoption not found or already deleted"))
    }

    /// Re-fetch a row that must exist, joined with its breed name.
    async fn require_with_breed(&self, id: i32) -> Result<AdoptionWithBreed, RepositoryError> {
        self.get_adoption_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::not_found("Adoption not found"))
    }

    /// Reject breed references that do not resolve to a catalog entry.
    async fn ensure_breed_exists(&self, breed_id: Option<i32>) -> Result<(), RepositoryError> {
        let Some(breed_id) = breed_id else {
            return Ok(());
        };

        let exists = Breed::find_by_id(breed_id)
            .one(self.db)
            .await
            .map_err(RepositoryError::database_error)?
            .is_some();

        if !exists {
            return Err(RepositoryError::validation_error(format!(
                "Breed {} does not exist",
                breed_id
            )));
        }

        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), RepositoryError> {
    if name.trim().is_empty() {
        return Err(RepositoryError::validation_error(
            "Name is required and cannot be empty",
        ));
    }
    Ok(())
}

fn validate_contact(
    contact_name: Option<&str>,
    contact_email: Option<&str>,
) -> Result<(), RepositoryError> {
    if contact_name.map(str::trim).unwrap_or("").is_empty() {
        return Err(RepositoryError::validation_error(
            "Contact name is required",
        ));
    }
    if contact_email.map(str::trim).unwrap_or("").is_empty() {
        return Err(RepositoryError::validation_error(
            "Contact email is required",
        ));
    }
    Ok(())
}

fn lowered(column: adoption::Column) -> Expr {
    Expr::expr(Func::lower(Expr::col((adoption::Entity, column))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::breed::{BreedFields, BreedRepository};
    use migration::MigratorTrait;
    use sea_orm::{Database, PaginatorTrait};

    async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        migration::Migrator::up(&db, None).await.unwrap();
        db
    }

    async fn seed_breed(db: &DatabaseConnection, name: &str) -> i32 {
        let repo = BreedRepository::new(db);
        repo.create_breed(BreedFields {
            breed: name.to_string(),
            country: Some("Thailand".to_string()),
            origin: Some("Natural".to_string()),
            coat: Some("Short".to_string()),
            pattern: Some("Solid".to_string()),
            image_url: None,
        })
        .await
        .unwrap()
        .id
    }

    fn intake(name: &str) -> CreateAdoptionRequest {
        CreateAdoptionRequest {
            name: name.to_string(),
            gender: Some(Gender::Female),
            contact_name: Some("A".to_string()),
            contact_email: Some("a@x.com".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_defaults_to_available() {
        let db = setup_test_db().await;
        let repo = AdoptionRepository::new(&db);

        let created = repo.create_adoption(intake("Mimi")).await.unwrap();

        assert!(created.adoption.id > 0);
        assert_eq!(created.adoption.name, "Mimi");
        assert_eq!(created.adoption.adoption_status, AdoptionStatus::Available);
        assert_eq!(created.adoption.deleted_at, None);
        assert_eq!(created.breed_name, None);
    }

    #[tokio::test]
    async fn create_resolves_breed_display_name() {
        let db = setup_test_db().await;
        let breed_id = seed_breed(&db, "Siamese").await;
        let repo = AdoptionRepository::new(&db);

        let created = repo
            .create_adoption(CreateAdoptionRequest {
                breed_id: Some(breed_id),
                ..intake("Mimi")
            })
            .await
            .unwrap();

        assert_eq!(created.adoption.breed_id, Some(breed_id));
        assert_eq!(created.breed_name.as_deref(), Some("Siamese"));
    }

    #[tokio::test]
    async fn create_with_missing_name_writes_nothing() {
        let db = setup_test_db().await;
        let repo = AdoptionRepository::new(&db);

        let result = repo.create_adoption(intake("  ")).await;
        assert!(matches!(result, Err(RepositoryError::Validation(_))));

        let count = Adoption::find().count(&db).await.unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn create_rejects_unknown_breed() {
        let db = setup_test_db().await;
        let repo = AdoptionRepository::new(&db);

        let result = repo
            .create_adoption(CreateAdoptionRequest {
                breed_id: Some(999),
                ..intake("Mimi")
            })
            .await;

        assert!(matches!(result, Err(RepositoryError::Validation(_))));
    }

    #[tokio::test]
    async fn list_is_newest_first_and_skips_deleted() {
        let db = setup_test_db().await;
        let repo = AdoptionRepository::new(&db);

        let first = repo.create_adoption(intake("Older")).await.unwrap();
        let second = repo.create_adoption(intake("Newer")).await.unwrap();

        repo.update_status(first.adoption.id, AdoptionStatus::Adopted)
            .await
            .unwrap();
        repo.soft_delete_adoption(first.adoption.id).await.unwrap();

        let listed = repo.list_adoptions(AdoptionFilter::default()).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].adoption.id, second.adoption.id);
        assert!(listed.iter().all(|row| row.adoption.deleted_at.is_none()));
    }

    #[tokio::test]
    async fn list_orders_newest_created_first() {
        let db = setup_test_db().await;
        let repo = AdoptionRepository::new(&db);

        for name in ["One", "Two", "Three"] {
            repo.create_adoption(intake(name)).await.unwrap();
        }

        let listed = repo.list_adoptions(AdoptionFilter::default()).await.unwrap();
        let names: Vec<&str> = listed
            .iter()
            .map(|row| row.adoption.name.as_str())
            .collect();
        assert_eq!(names, vec!["Three", "Two", "One"]);
    }

    #[tokio::test]
    async fn list_filters_by_status_and_text() {
        let db = setup_test_db().await;
        let breed_id = seed_breed(&db, "Maine Coon").await;
        let repo = AdoptionRepository::new(&db);

        let matching = repo
            .create_adoption(CreateAdoptionRequest {
                breed_id: Some(breed_id),
                location: Some("Oslo".to_string()),
                ..intake("Whiskerface")
            })
            .await
            .unwrap();
        repo.create_adoption(intake("Plain")).await.unwrap();
        let adopted = repo.create_adoption(intake("Homed")).await.unwrap();
        repo.update_status(adopted.adoption.id, AdoptionStatus::Adopted)
            .await
            .unwrap();

        let by_status = repo
            .list_adoptions(AdoptionFilter {
                status: Some(AdoptionStatus::Adopted),
                q: None,
            })
            .await
            .unwrap();
        assert_eq!(by_status.len(), 1);
        assert_eq!(by_status[0].adoption.id, adopted.adoption.id);

        // Substring match is case-insensitive and reaches the breed name.
        let by_breed = repo
            .list_adoptions(AdoptionFilter {
                status: None,
                q: Some("maine".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(by_breed.len(), 1);
        assert_eq!(by_breed[0].adoption.id, matching.adoption.id);

        let by_location = repo
            .list_adoptions(AdoptionFilter {
                status: None,
                q: Some("OSLO".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(by_location.len(), 1);

        let no_match = repo
            .list_adoptions(AdoptionFilter {
                status: None,
                q: Some("zanzibar".to_string()),
            })
            .await
            .unwrap();
        assert!(no_match.is_empty());
    }

    #[tokio::test]
    async fn status_round_trip_keeps_deleted_at_null() {
        let db = setup_test_db().await;
        let repo = AdoptionRepository::new(&db);
        let created = repo.create_adoption(intake("Mimi")).await.unwrap();

        let adopted = repo
            .update_status(created.adoption.id, AdoptionStatus::Adopted)
            .await
            .unwrap();
        assert_eq!(adopted.adoption.adoption_status, AdoptionStatus::Adopted);

        let back = repo
            .update_status(created.adoption.id, AdoptionStatus::Available)
            .await
            .unwrap();
        assert_eq!(back.adoption.adoption_status, AdoptionStatus::Available);
        assert_eq!(back.adoption.deleted_at, None);
    }

    #[tokio::test]
    async fn update_status_of_unknown_id_is_not_found() {
        let db = setup_test_db().await;
        let repo = AdoptionRepository::new(&db);

        let result = repo.update_status(4242, AdoptionStatus::Adopted).await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn update_status_of_deleted_row_is_not_found() {
        let db = setup_test_db().await;
        let repo = AdoptionRepository::new(&db);
        let created = repo.create_adoption(intake("Mimi")).await.unwrap();
        let id = created.adoption.id;

        repo.update_status(id, AdoptionStatus::Adopted).await.unwrap();
        repo.soft_delete_adoption(id).await.unwrap();

        let result = repo.update_status(id, AdoptionStatus::Available).await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn soft_delete_requires_adopted_status() {
        let db = setup_test_db().await;
        let repo = AdoptionRepository::new(&db);
        let created = repo.create_adoption(intake("Mimi")).await.unwrap();
        let id = created.adoption.id;

        let result = repo.soft_delete_adoption(id).await;
        assert!(matches!(result, Err(RepositoryError::Precondition(_))));

        // The record is left unchanged.
        let unchanged = repo.get_adoption_by_id(id).await.unwrap().unwrap();
        assert_eq!(
            unchanged.adoption.adoption_status,
            AdoptionStatus::Available
        );
        assert_eq!(unchanged.adoption.deleted_at, None);
    }

    #[tokio::test]
    async fn soft_delete_keeps_row_in_storage() {
        let db = setup_test_db().await;
        let repo = AdoptionRepository::new(&db);
        let created = repo.create_adoption(intake("Mimi")).await.unwrap();
        let id = created.adoption.id;

        repo.update_status(id, AdoptionStatus::Adopted).await.unwrap();
        repo.soft_delete_adoption(id).await.unwrap();

        let listed = repo.list_adoptions(AdoptionFilter::default()).await.unwrap();
        assert!(listed.iter().all(|row| row.adoption.id != id));

        // Direct fetch still returns the row with deleted_at set and the
        // invariant holding: deleted implies adopted.
        let fetched = repo.get_adoption_by_id(id).await.unwrap().unwrap();
        assert!(fetched.adoption.deleted_at.is_some());
        assert_eq!(fetched.adoption.adoption_status, AdoptionStatus::Adopted);

        let again = repo.soft_delete_adoption(id).await;
        assert!(matches!(again, Err(RepositoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn hard_delete_removes_any_row() {
        let db = setup_test_db().await;
        let repo = AdoptionRepository::new(&db);
        let created = repo.create_adoption(intake("Mimi")).await.unwrap();
        let id = created.adoption.id;

        // No status precondition on the legacy path.
        let rows = repo.hard_delete_adoption(id).await.unwrap();
        assert_eq!(rows, 1);
        assert!(repo.get_adoption_by_id(id).await.unwrap().is_none());

        let rows = repo.hard_delete_adoption(id).await.unwrap();
        assert_eq!(rows, 0);
    }

    #[tokio::test]
    async fn update_replaces_fields_and_keeps_image_without_new_one() {
        let db = setup_test_db().await;
        let breed_id = seed_breed(&db, "Siamese").await;
        let repo = AdoptionRepository::new(&db);

        let created = repo
            .create_adoption(CreateAdoptionRequest {
                image_url: Some("/uploads/adoptions/1-mimi.jpg".to_string()),
                ..intake("Mimi")
            })
            .await
            .unwrap();

        let updated = repo
            .update_adoption(
                created.adoption.id,
                UpdateAdoptionRequest {
                    name: "Mimi II".to_string(),
                    breed_id: Some(breed_id),
                    age: Some("3 years".to_string()),
                    gender: Some(Gender::Female),
                    adoption_status: Some(AdoptionStatus::Adopted),
                    contact_name: Some("A".to_string()),
                    contact_email: Some("a@x.com".to_string()),
                    image_url: None,
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.adoption.name, "Mimi II");
        assert_eq!(updated.breed_name.as_deref(), Some("Siamese"));
        assert_eq!(updated.adoption.adoption_status, AdoptionStatus::Adopted);
        assert_eq!(
            updated.adoption.image_url.as_deref(),
            Some("/uploads/adoptions/1-mimi.jpg")
        );
        // created_at is immutable through updates.
        assert_eq!(updated.adoption.created_at, created.adoption.created_at);
    }

    #[tokio::test]
    async fn update_of_deleted_row_is_not_found_and_changes_nothing() {
        let db = setup_test_db().await;
        let repo = AdoptionRepository::new(&db);
        let created = repo.create_adoption(intake("Mimi")).await.unwrap();
        let id = created.adoption.id;

        repo.update_status(id, AdoptionStatus::Adopted).await.unwrap();
        repo.soft_delete_adoption(id).await.unwrap();

        let result = repo
            .update_adoption(
                id,
                UpdateAdoptionRequest {
                    name: "Mimi II".to_string(),
                    adoption_status: Some(AdoptionStatus::Available),
                    contact_name: Some("A".to_string()),
                    contact_email: Some("a@x.com".to_string()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));

        // The removed row is untouched: still adopted, still deleted.
        let unchanged = repo.get_adoption_by_id(id).await.unwrap().unwrap();
        assert_eq!(unchanged.adoption.name, "Mimi");
        assert_eq!(unchanged.adoption.adoption_status, AdoptionStatus::Adopted);
        assert!(unchanged.adoption.deleted_at.is_some());
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_not_found() {
        let db = setup_test_db().await;
        let repo = AdoptionRepository::new(&db);

        let result = repo
            .update_adoption(
                99,
                UpdateAdoptionRequest {
                    name: "Ghost".to_string(),
                    contact_name: Some("A".to_string()),
                    contact_email: Some("a@x.com".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }

    // Concurrent update_status/soft_delete on the same id are last-write-wins;
    // there is no optimistic concurrency token. This test documents the
    // sequential equivalent rather than assuming serialization.
    #[tokio::test]
    async fn competing_status_writes_are_last_write_wins() {
        let db = setup_test_db().await;
        let repo = AdoptionRepository::new(&db);
        let created = repo.create_adoption(intake("Mimi")).await.unwrap();
        let id = created.adoption.id;

        repo.update_status(id, AdoptionStatus::Adopted).await.unwrap();
        let last = repo
            .update_status(id, AdoptionStatus::Available)
            .await
            .unwrap();

        assert_eq!(last.adoption.adoption_status, AdoptionStatus::Available);
    }
}
