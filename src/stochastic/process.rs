pub mod bm;
pub mod bridge;
pub mod meander;
