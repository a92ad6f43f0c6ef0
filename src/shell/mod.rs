// Composition root for the notes service.
//
// Responsibilities
// - Read config from environment.
// - Construct the note store and share it with the handlers.
// - Expose the HTTP router.

pub mod config;
pub mod http;
pub mod state;
