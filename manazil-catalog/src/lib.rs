pub mod hotel;
pub mod directory;

pub use hotel::{Facility, Hotel};
pub use directory::{CatalogError, HotelCatalog};
