/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// External reference key addressing a document or template in URLs,
/// distinct from the entity's internal id (e.g. `D250831-0042`).
pub type RefNumber = String;
