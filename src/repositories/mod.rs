// src/repositories/mod.rs
//
// Write-once film catalog, indexed by region, region name and title.

pub mod film_repository;

pub use film_repository::{FilmCatalog, FilmRepository, InMemoryFilmRepository};
