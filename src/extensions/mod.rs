//! Optional modules that sit outside the view engine.
//!
//! Keep extensions behind the collaborator traits and avoid coupling them
//! into core paths.

pub mod sample_data;

pub use sample_data::SampleDataSource;
