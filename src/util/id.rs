//! Snowflake conversions at the storage boundary.
//!
//! SQLite integers are signed 64-bit, Discord ids are unsigned. The casts are
//! bit-preserving so every `u64` survives a round trip through the database.

/// Converts a Discord id into the value stored in an `INTEGER` column.
pub fn to_db_id(id: u64) -> i64 {
    id as i64
}

/// Converts a stored `INTEGER` column value back into a Discord id.
pub fn from_db_id(id: i64) -> u64 {
    id as u64
}
