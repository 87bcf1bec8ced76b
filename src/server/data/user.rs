use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::user::{CreateUserParams, Role, User},
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateUserParams) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            password_hash: ActiveValue::Set(params.password_hash),
            role: ActiveValue::Set(params.role.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Finds a user by exact first and last name.
    pub async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::FirstName.eq(first_name))
            .filter(entity::user::Column::LastName.eq(last_name))
            .one(self.db)
            .await
    }

    /// Lists users with a role ordered by last then first name.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Matching users as domain models
    /// - `Err(AppError)` - Database error or a row with an unknown role
    pub async fn get_by_role(&self, role: Role) -> Result<Vec<User>, AppError> {
        let users = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(role.as_str()))
            .order_by_asc(entity::user::Column::LastName)
            .order_by_asc(entity::user::Column::FirstName)
            .all(self.db)
            .await?;

        users.into_iter().map(User::from_entity).collect()
    }

    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(Role::Admin.as_str()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn update_password_hash(
        &self,
        id: i32,
        password_hash: String,
    ) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Unchanged(id),
            password_hash: ActiveValue::Set(password_hash),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    /// Deletes a user. Their lessons, availability, teams and memberships cascade.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
