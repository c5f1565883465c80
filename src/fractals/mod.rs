pub mod mandelbrot;
pub mod quadratic_map;
