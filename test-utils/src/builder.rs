use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for test contexts with a chosen set of entity tables.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Client, Court, Reservation};
///
/// let test = TestBuilder::new()
///     .with_table(Client)
///     .with_table(Court)
///     .with_table(Reservation)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order by `build()`.
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test schema.
    ///
    /// Tables with foreign keys must be added after the tables they reference.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables used by court reservations: Client, Court and Reservation.
    pub fn with_reservation_tables(self) -> Self {
        self.with_table(Client)
            .with_table(Court)
            .with_table(Reservation)
    }

    /// Adds the tables used by lesson booking: User and Lesson.
    pub fn with_lesson_tables(self) -> Self {
        self.with_table(User).with_table(Lesson)
    }

    /// Adds every club table in dependency order.
    pub fn with_all_tables(self) -> Self {
        self.with_reservation_tables()
            .with_lesson_tables()
            .with_table(CoachAvailability)
            .with_table(Team)
            .with_table(TeamMember)
    }

    /// Connects to a fresh in-memory database and creates the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
