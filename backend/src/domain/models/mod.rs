pub mod expense;
pub mod trip;
