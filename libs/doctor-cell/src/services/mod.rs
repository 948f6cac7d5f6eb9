pub mod catalog;
pub mod codec;
pub mod directory;
pub mod engine;
pub mod normalizer;
pub mod source;

pub use catalog::Catalog;
pub use directory::{DoctorDirectory, History, PageLocation, RecordedHistory};
pub use source::{fetch_doctors, DoctorSource, HttpDoctorSource, StaticDoctorSource};
