// Resume records: CRUD, duplication and export.
// Content is stored as the editor's JSON and typed on read.

pub mod handlers;
pub mod store;
