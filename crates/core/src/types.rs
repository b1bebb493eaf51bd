/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Opaque, stable user identifier supplied by the authentication layer.
///
/// The core never validates or issues these; it only compares them.
pub type UserId = String;
