/// Roll-up domain: part model and the pure indexing/traversal services
pub mod domain;
pub mod services;
