// Application layer - Use cases and repository contracts
pub mod page_repository;
pub mod record_service;
