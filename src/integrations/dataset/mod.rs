pub mod client;

pub use client::{parse_dataset, DatasetSource, FileDatasetSource, FilmRecord, HttpDatasetSource};
