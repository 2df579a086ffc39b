pub mod author_repository;
