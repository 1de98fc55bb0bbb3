//! Common types

/// Store-assigned identity of every persisted entity.
pub type EntityId = i64;

/// Identity carried by an entity that has not been persisted yet.
pub const UNSAVED_ID: EntityId = 0;
