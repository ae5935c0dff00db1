pub mod intervals;
pub mod producers;
