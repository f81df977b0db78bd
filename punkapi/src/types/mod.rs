mod beer;
pub use self::beer::{Beer, BeerID};
