use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored user row carries a role outside the known set.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("User {user_id} has unknown stored role '{role}'")]
    UnknownRole {
        /// Id of the user row
        user_id: i32,
        /// The role text read from the database
        role: String,
    },
}
