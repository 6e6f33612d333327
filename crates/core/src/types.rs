/// Dog identifiers are opaque store-assigned strings.
pub type DogId = String;

/// Optimistic-lock counter carried by persisted records.
pub type Version = i64;
