//! Sea-ORM entities and their API shapes.

pub mod station;
pub mod train;
pub mod train_carriage;

pub use station::{Station, StationInput};
pub use train::{Train, TrainInput};
pub use train_carriage::{TrainCarriage, TrainCarriageInput};
