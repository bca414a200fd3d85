pub mod blob;
pub mod commit;
pub mod object_id;

/// Length of a full lowercase-hex object id (SHA-1).
pub const OBJECT_ID_LENGTH: usize = 40;
