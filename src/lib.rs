// Library exports for percolate
pub mod monte_carlo;
pub mod percolation;
pub mod union_find;
