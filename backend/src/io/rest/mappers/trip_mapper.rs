//! Mapping between trip DTOs and domain trip models.

use chrono::SecondsFormat;
use shared::{CreateTripRequest, Trip as SharedTrip, TripDetail, UpdateTripRequest};

use super::ExpenseMapper;
use crate::domain::commands::trip::{CreateTripCommand, UpdateTripCommand};
use crate::domain::models::expense::Expense;
use crate::domain::models::trip::TripSummary;

/// Mapper to convert between shared Trip DTOs and domain Trip models.
pub struct TripMapper;

impl TripMapper {
    pub fn to_create_command(request: CreateTripRequest) -> CreateTripCommand {
        CreateTripCommand {
            name: request.name,
            currency: request.currency,
            members: request.members,
        }
    }

    pub fn to_update_command(request: UpdateTripRequest) -> UpdateTripCommand {
        UpdateTripCommand {
            name: request.name,
            currency: request.currency,
            members: request.members,
            confirm_clear_expenses: request.confirm_clear_expenses,
        }
    }

    /// Converts a domain trip summary to the shared Trip DTO.
    pub fn to_dto(summary: TripSummary) -> SharedTrip {
        let trip = summary.trip;
        SharedTrip {
            id: trip.id,
            name: trip.name,
            currency: trip.currency,
            members: trip.members,
            created_at: trip.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            updated_at: trip.updated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            expense_count: summary.expense_count,
            total_amount: summary.total_amount,
        }
    }

    pub fn to_detail_dto(summary: TripSummary, expenses: Vec<Expense>) -> TripDetail {
        TripDetail {
            trip: Self::to_dto(summary),
            expenses: expenses.into_iter().map(ExpenseMapper::to_dto).collect(),
        }
    }
}
