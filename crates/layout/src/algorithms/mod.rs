pub mod compensation;
pub mod packing;
