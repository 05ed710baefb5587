/**
* filename : mod
* author : HAMA
* date: 2025. 5. 13.
* description:
**/
pub mod moving_average;

pub use moving_average::*;
