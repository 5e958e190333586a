pub mod bucket;
pub mod event;
pub mod party;
pub mod weights;
