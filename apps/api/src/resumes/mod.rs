// Résumé persistence: id generation, the owned in-memory store with its
// on-disk JSON mirror, and the HTTP handlers over it.

pub mod handlers;
pub mod id;
pub mod store;
