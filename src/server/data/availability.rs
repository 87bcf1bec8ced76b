use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::availability::{AvailabilityParams, CoachAvailability};

pub struct AvailabilityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AvailabilityRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: AvailabilityParams) -> Result<CoachAvailability, DbErr> {
        let availability = entity::coach_availability::ActiveModel {
            coach_id: ActiveValue::Set(params.coach_id),
            day: ActiveValue::Set(params.day),
            start_time: ActiveValue::Set(params.start_time),
            end_time: ActiveValue::Set(params.end_time),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(CoachAvailability::from_entity(availability))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<CoachAvailability>, DbErr> {
        let availability = entity::prelude::CoachAvailability::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(availability.map(CoachAvailability::from_entity))
    }

    /// Lists a coach's windows ordered by day then start.
    pub async fn get_by_coach(&self, coach_id: i32) -> Result<Vec<CoachAvailability>, DbErr> {
        let windows = entity::prelude::CoachAvailability::find()
            .filter(entity::coach_availability::Column::CoachId.eq(coach_id))
            .order_by_asc(entity::coach_availability::Column::Day)
            .order_by_asc(entity::coach_availability::Column::StartTime)
            .all(self.db)
            .await?;

        Ok(windows
            .into_iter()
            .map(CoachAvailability::from_entity)
            .collect())
    }

    /// Replaces the day and times of a window. The owning coach never changes.
    pub async fn update(
        &self,
        id: i32,
        params: AvailabilityParams,
    ) -> Result<CoachAvailability, DbErr> {
        let availability = entity::coach_availability::ActiveModel {
            id: ActiveValue::Unchanged(id),
            coach_id: ActiveValue::NotSet,
            day: ActiveValue::Set(params.day),
            start_time: ActiveValue::Set(params.start_time),
            end_time: ActiveValue::Set(params.end_time),
        }
        .update(self.db)
        .await?;

        Ok(CoachAvailability::from_entity(availability))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::CoachAvailability::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
