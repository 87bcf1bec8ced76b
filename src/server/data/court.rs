use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::court::{Court, CreateCourtParams, UpdateCourtParams};

pub struct CourtRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CourtRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateCourtParams) -> Result<Court, DbErr> {
        let court = entity::court::ActiveModel {
            name: ActiveValue::Set(params.name),
            court_type: ActiveValue::Set(params.court_type),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Court::from_entity(court))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Court>, DbErr> {
        let court = entity::prelude::Court::find_by_id(id).one(self.db).await?;

        Ok(court.map(Court::from_entity))
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Court>, DbErr> {
        let court = entity::prelude::Court::find()
            .filter(entity::court::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(court.map(Court::from_entity))
    }

    /// Lists all courts ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Court>, DbErr> {
        let courts = entity::prelude::Court::find()
            .order_by_asc(entity::court::Column::Name)
            .all(self.db)
            .await?;

        Ok(courts.into_iter().map(Court::from_entity).collect())
    }

    /// Renames or retypes a court.
    ///
    /// # Returns
    /// - `Err(DbErr::RecordNotUpdated)` - No court with that id
    pub async fn update(&self, params: UpdateCourtParams) -> Result<Court, DbErr> {
        let court = entity::court::ActiveModel {
            id: ActiveValue::Unchanged(params.id),
            name: ActiveValue::Set(params.name),
            court_type: ActiveValue::Set(params.court_type),
        }
        .update(self.db)
        .await?;

        Ok(Court::from_entity(court))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Court::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
