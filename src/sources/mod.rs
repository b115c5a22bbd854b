pub mod bsp;
