pub mod gn;
