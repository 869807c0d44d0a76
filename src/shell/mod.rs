// Composition root for the cycles module.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the clock, the snapshot store, the cycles store and the ticker.
// - Expose the HTTP router.

pub mod config;
pub mod http;
pub mod state;
