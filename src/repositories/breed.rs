//! # Breed Repository
//!
//! CRUD operations for the breed catalog adoption listings reference for
//! display-name resolution.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryOrder, Set,
};

use crate::error::RepositoryError;
use crate::models::breed::{self, Entity as Breed};

/// Editable breed attributes shared between create and update.
#[derive(Debug, Clone, Default)]
pub struct BreedFields {
    /// Display name of the breed (required)
    pub breed: String,
    pub country: Option<String>,
    pub origin: Option<String>,
    pub coat: Option<String>,
    pub pattern: Option<String>,
    /// Public path returned by file storage when an image was uploaded;
    /// `None` keeps the stored one on update
    pub image_url: Option<String>,
}

/// Repository for breed database operations
pub struct BreedRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BreedRepository<'a> {
    /// Create a new BreedRepository with the given database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a new breed catalog entry
    pub async fn create_breed(
        &self,
        fields: BreedFields,
    ) -> Result<breed::Model, RepositoryError> {
        validate_breed_name(&fields.breed)?;

        let entry = breed::ActiveModel {
            breed: Set(fields.breed.trim().to_string()),
            country: Set(fields.country),
            origin: Set(fields.origin),
            coat: Set(fields.coat),
            pattern: Set(fields.pattern),
            image_url: Set(fields.image_url),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        };

        entry
            .insert(self.db)
            .await
            .map_err(RepositoryError::database_error)
    }

    /// List all breeds, newest first
    pub async fn list_breeds(&self) -> Result<Vec<breed::Model>, RepositoryError> {
        Breed::find()
            .order_by_desc(breed::Column::CreatedAt)
            .order_by_desc(breed::Column::Id)
            .all(self.db)
            .await
            .map_err(RepositoryError::database_error)
    }

    /// Get breed by ID
    pub async fn get_breed_by_id(
        &self,
        id: i32,
    ) -> Result<Option<breed::Model>, RepositoryError> {
        Breed::find_by_id(id)
            .one(self.db)
            .await
            .map_err(RepositoryError::database_error)
    }

    /// Update an existing breed; a new image path replaces the stored one.
    pub async fn update_breed(
        &self,
        id: i32,
        fields: BreedFields,
    ) -> Result<breed::Model, RepositoryError> {
        validate_breed_name(&fields.breed)?;

        let existing = self
            .get_breed_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::not_found("Breed not found"))?;

        let mut entry = existing.into_active_model();
        entry.breed = Set(fields.breed.trim().to_string());
        entry.country = Set(fields.country);
        entry.origin = Set(fields.origin);
        entry.coat = Set(fields.coat);
        entry.pattern = Set(fields.pattern);
        if let Some(image_url) = fields.image_url {
            entry.image_url = Set(Some(image_url));
        }

        entry
            .update(self.db)
            .await
            .map_err(RepositoryError::database_error)
    }

    /// Permanently delete a breed; referencing adoptions keep running with
    /// a NULL breed via the FK action.
    pub async fn delete_breed(&self, id: i32) -> Result<u64, RepositoryError> {
        let result = Breed::delete_by_id(id)
            .exec(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(result.rows_affected)
    }
}

fn validate_breed_name(name: &str) -> Result<(), RepositoryError> {
    if name.trim().is_empty() {
        return Err(RepositoryError::validation_error(
            "Breed name is required and cannot be empty",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::MigratorTrait;
    use sea_orm::Database;

    async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        migration::Migrator::up(&db, None).await.unwrap();
        db
    }

    fn siamese() -> BreedFields {
        BreedFields {
            breed: "Siamese".to_string(),
            country: Some("Thailand".to_string()),
            origin: Some("Natural".to_string()),
            coat: Some("Short".to_string()),
            pattern: Some("Colorpoint".to_string()),
            image_url: None,
        }
    }

    #[tokio::test]
    async fn create_and_list_round_trip() {
        let db = setup_test_db().await;
        let repo = BreedRepository::new(&db);

        let created = repo.create_breed(siamese()).await.unwrap();
        assert!(created.id > 0);
        assert_eq!(created.breed, "Siamese");

        repo.create_breed(BreedFields {
            breed: "Maine Coon".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

        let listed = repo.list_breeds().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].breed, "Maine Coon"); // newest first
    }

    #[tokio::test]
    async fn create_requires_breed_name() {
        let db = setup_test_db().await;
        let repo = BreedRepository::new(&db);

        let result = repo
            .create_breed(BreedFields {
                breed: " ".to_string(),
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(RepositoryError::Validation(_))));
    }

    #[tokio::test]
    async fn update_keeps_image_when_no_new_one_is_given() {
        let db = setup_test_db().await;
        let repo = BreedRepository::new(&db);

        let created = repo
            .create_breed(BreedFields {
                image_url: Some("/uploads/breeds/1-siamese.jpg".to_string()),
                ..siamese()
            })
            .await
            .unwrap();

        let updated = repo
            .update_breed(
                created.id,
                BreedFields {
                    breed: "Siamese (updated)".to_string(),
                    image_url: None,
                    ..siamese()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.breed, "Siamese (updated)");
        assert_eq!(
            updated.image_url.as_deref(),
            Some("/uploads/breeds/1-siamese.jpg")
        );
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_not_found() {
        let db = setup_test_db().await;
        let repo = BreedRepository::new(&db);

        let result = repo.update_breed(99, siamese()).await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_breed_nulls_adoption_references() {
        use crate::repositories::adoption::{AdoptionRepository, CreateAdoptionRequest};

        let db = setup_test_db().await;
        let repo = BreedRepository::new(&db);
        let created = repo.create_breed(siamese()).await.unwrap();

        let adoptions = AdoptionRepository::new(&db);
        let listing = adoptions
            .create_adoption(CreateAdoptionRequest {
                name: "Mimi".to_string(),
                breed_id: Some(created.id),
                contact_name: Some("A".to_string()),
                contact_email: Some("a@x.com".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let rows = repo.delete_breed(created.id).await.unwrap();
        assert_eq!(rows, 1);

        let refetched = adoptions
            .get_adoption_by_id(listing.adoption.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(refetched.adoption.breed_id, None);
        assert_eq!(refetched.breed_name, None);
    }
}
