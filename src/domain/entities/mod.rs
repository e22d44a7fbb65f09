pub mod cell;
pub mod column;
pub mod employee;
pub mod grid;
