pub mod compress;
pub mod expand;
