/// Backend identifiers are opaque strings (UUIDs for trainers and bookings).
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
