//! Mapping between expense DTOs and domain expense models.

use chrono::SecondsFormat;
use shared::{CreateExpenseRequest, Expense as SharedExpense};

use crate::domain::commands::expense::CreateExpenseCommand;
use crate::domain::models::expense::Expense;

pub struct ExpenseMapper;

impl ExpenseMapper {
    pub fn to_create_command(request: CreateExpenseRequest) -> CreateExpenseCommand {
        CreateExpenseCommand {
            description: request.description,
            amount: request.amount,
            paid_by: request.paid_by,
            split_between: request.split_between,
        }
    }

    pub fn to_dto(expense: Expense) -> SharedExpense {
        SharedExpense {
            id: expense.id,
            trip_id: expense.trip_id,
            description: expense.description,
            amount: expense.amount,
            paid_by: expense.paid_by,
            split_between: expense.split_between,
            created_at: expense.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            timestamp: expense.created_at.timestamp_millis(),
        }
    }
}
