pub mod labour;
pub mod ratio;
pub mod sales;
