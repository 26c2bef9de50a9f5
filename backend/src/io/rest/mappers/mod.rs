pub mod expense_mapper;
pub mod ledger_mapper;
pub mod trip_mapper;

pub use expense_mapper::ExpenseMapper;
pub use ledger_mapper::LedgerMapper;
pub use trip_mapper::TripMapper;
