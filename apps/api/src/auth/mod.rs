// Credential validation against the upstream list-models endpoint.

pub mod handlers;
