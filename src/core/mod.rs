//! Core business logic - framework-agnostic feature operations and the
//! derived-statistics engines (aggregation, progress, streaks, heatmaps).
//! Everything here returns structured data; presentation is someone else's
//! problem.

/// Grouped totals, monthly income/expense flows and daily series
pub mod aggregate;
/// Cross-module dashboard snapshot
pub mod dashboard;
/// Expenses, income, budgets, subscriptions and savings goals
pub mod finance;
/// Habit CRUD, the completion flow and streak tracking
pub mod habits;
/// Daily activity heatmap over the completion log
pub mod heatmap;
/// Generic optimistic entity-list state
pub mod listview;
/// Notes CRUD, pinning and ordering
pub mod notes;
/// Budget and savings-goal progress math
pub mod progress;
/// Task CRUD, status toggling and view filtering
pub mod tasks;
/// Fitness log CRUD and totals
pub mod workouts;
