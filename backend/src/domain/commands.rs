//! Domain-level command types.
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer maps the public DTOs defined in
//! the `shared` crate to these internal types.

pub mod trip {
    /// Input for creating a new trip.
    #[derive(Debug, Clone)]
    pub struct CreateTripCommand {
        pub name: String,
        pub currency: Option<String>,
        pub members: Vec<String>,
    }

    /// Input for updating a trip. `None` leaves a field unchanged.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateTripCommand {
        pub name: Option<String>,
        pub currency: Option<String>,
        pub members: Option<Vec<String>>,
        pub confirm_clear_expenses: bool,
    }
}

pub mod expense {
    /// Input for recording a new expense on a trip.
    #[derive(Debug, Clone)]
    pub struct CreateExpenseCommand {
        pub description: String,
        pub amount: Option<f64>,
        pub paid_by: String,
        pub split_between: Vec<String>,
    }
}
