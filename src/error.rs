use thiserror::Error;

#[derive(Debug, Error)]
pub enum HeroError {
    #[error("Invalid {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Index is not a non-zero unsigned integer.")]
    InvalidIndex,

    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: String,
        identifier: String,
    },

    #[error("{entity_type} already exists: {identifier}")]
    AlreadyExists {
        entity_type: String,
        identifier: String,
    },

    #[error("Username does not exist")]
    InvalidUsername,

    #[error("Password is incorrect")]
    InvalidPassword,

    #[error("A user is already logged in; log out first")]
    MultipleLogin,

    #[error("No user is logged in")]
    UserLogout,

    #[error("Username is already taken: {username}")]
    DuplicateUsername { username: String },

    #[error("Please log in first")]
    NotLoggedIn,

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Password hashing failed: {0}")]
    PasswordHash(#[from] argon2::password_hash::Error),

    #[error("{0}")]
    Other(String),
}

/// Coarse classification of a [`HeroError`], used by callers that only care
/// about which family of failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Duplicate,
    Account,
    Storage,
}

impl HeroError {
    pub fn invalid(field: &str, message: &str) -> Self {
        HeroError::InvalidValue {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    pub fn not_found(entity_type: &str, identifier: impl ToString) -> Self {
        HeroError::NotFound {
            entity_type: entity_type.to_string(),
            identifier: identifier.to_string(),
        }
    }

    pub fn already_exists(entity_type: &str, identifier: impl ToString) -> Self {
        HeroError::AlreadyExists {
            entity_type: entity_type.to_string(),
            identifier: identifier.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            HeroError::InvalidValue { .. } | HeroError::InvalidIndex => ErrorKind::Validation,
            HeroError::NotFound { .. } => ErrorKind::NotFound,
            HeroError::AlreadyExists { .. } => ErrorKind::Duplicate,
            HeroError::InvalidUsername
            | HeroError::InvalidPassword
            | HeroError::MultipleLogin
            | HeroError::UserLogout
            | HeroError::DuplicateUsername { .. }
            | HeroError::NotLoggedIn
            | HeroError::PasswordHash(_) => ErrorKind::Account,
            HeroError::Database(_)
            | HeroError::Io(_)
            | HeroError::Json(_)
            | HeroError::Other(_) => ErrorKind::Storage,
        }
    }
}

pub type HeroResult<T> = Result<T, HeroError>;
