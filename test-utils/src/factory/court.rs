//! Court factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test courts.
pub struct CourtFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    court_type: String,
}

impl<'a> CourtFactory<'a> {
    /// Creates a new CourtFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Court {id}"`
    /// - court_type: `"clay"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Court {}", id),
            court_type: "clay".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn court_type(mut self, court_type: impl Into<String>) -> Self {
        self.court_type = court_type.into();
        self
    }

    pub async fn build(self) -> Result<entity::court::Model, DbErr> {
        entity::court::ActiveModel {
            name: ActiveValue::Set(self.name),
            court_type: ActiveValue::Set(self.court_type),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_court(db: &DatabaseConnection) -> Result<entity::court::Model, DbErr> {
    CourtFactory::new(db).build().await
}
