//! Finance business logic - expenses, income, budgets, subscriptions and
//! savings goals, plus the derived summary and statistics rows.
//!
//! Amounts are validated before any storage round-trip: finite, and
//! non-negative or strictly positive depending on the field. Budget
//! category uniqueness is enforced here because the store does not
//! constrain it.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, Order, Set};

use crate::core::aggregate;
use crate::core::progress::{self, BudgetProgress, GoalProgress};
use crate::entities::subscription::BillingCycle;
use crate::entities::{
    Budget, BudgetColumn, Expense, ExpenseColumn, Income, IncomeColumn, SavingsGoal,
    SavingsGoalColumn, Subscription, SubscriptionColumn, budget, expense, income, savings_goal,
    subscription,
};
use crate::errors::{Error, Result};
use crate::session::User;
use crate::store;

/// Fixed spending categories and their display colors.
pub const CATEGORY_COLORS: &[(&str, &str)] = &[
    ("Food", "#f97316"),
    ("Transport", "#3b82f6"),
    ("Housing", "#8b5cf6"),
    ("Entertainment", "#ec4899"),
    ("Shopping", "#eab308"),
    ("Health", "#10b981"),
    ("General", "#64748b"),
];

/// Color used for categories outside the fixed set.
pub const DEFAULT_CATEGORY_COLOR: &str = "#64748b";

/// Display color for a category, falling back to the default for unknown
/// names.
#[must_use]
pub fn category_color(category: &str) -> &'static str {
    CATEGORY_COLORS
        .iter()
        .find(|(name, _)| *name == category)
        .map_or(DEFAULT_CATEGORY_COLOR, |(_, color)| color)
}

fn ensure_non_negative(amount: f64) -> Result<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::InvalidAmount { amount });
    }
    Ok(())
}

fn ensure_positive(amount: f64) -> Result<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(Error::InvalidAmount { amount });
    }
    Ok(())
}

// --- Expenses ---

/// Fields for a new expense.
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
    pub note: String,
}

/// Records an expense.
pub async fn add_expense(
    db: &DatabaseConnection,
    user: &User,
    new: NewExpense,
) -> Result<expense::Model> {
    ensure_non_negative(new.amount)?;
    if new.category.trim().is_empty() {
        return Err(Error::validation("expense category cannot be empty"));
    }

    let expense = expense::ActiveModel {
        user_id: Set(user.id.clone()),
        amount: Set(new.amount),
        category: Set(new.category),
        date: Set(new.date),
        note: Set(new.note),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    expense.insert(db).await.map_err(Into::into)
}

/// Rewrites an expense's fields.
pub async fn update_expense(
    db: &DatabaseConnection,
    user: &User,
    expense_id: i64,
    edit: NewExpense,
) -> Result<expense::Model> {
    ensure_non_negative(edit.amount)?;
    if edit.category.trim().is_empty() {
        return Err(Error::validation("expense category cannot be empty"));
    }

    let existing = store::fetch_owned::<Expense>(db, &user.id, expense_id).await?;
    let mut active: expense::ActiveModel = existing.into();
    active.amount = Set(edit.amount);
    active.category = Set(edit.category);
    active.date = Set(edit.date);
    active.note = Set(edit.note);

    active.update(db).await.map_err(Into::into)
}

/// Deletes an expense.
pub async fn delete_expense(db: &DatabaseConnection, user: &User, expense_id: i64) -> Result<()> {
    store::delete_owned::<Expense>(db, &user.id, expense_id).await
}

/// Lists a user's expenses, most recent day first.
pub async fn list_expenses(db: &DatabaseConnection, user: &User) -> Result<Vec<expense::Model>> {
    store::list_for_user::<Expense>(db, &user.id, ExpenseColumn::Date, Order::Desc, None).await
}

// --- Income ---

/// Fields for a new income record.
#[derive(Debug, Clone)]
pub struct NewIncome {
    pub amount: f64,
    pub source: String,
    pub date: NaiveDate,
}

/// Records income.
pub async fn add_income(
    db: &DatabaseConnection,
    user: &User,
    new: NewIncome,
) -> Result<income::Model> {
    ensure_non_negative(new.amount)?;
    if new.source.trim().is_empty() {
        return Err(Error::validation("income source cannot be empty"));
    }

    let income = income::ActiveModel {
        user_id: Set(user.id.clone()),
        amount: Set(new.amount),
        source: Set(new.source),
        date: Set(new.date),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    income.insert(db).await.map_err(Into::into)
}

/// Rewrites an income record's fields.
pub async fn update_income(
    db: &DatabaseConnection,
    user: &User,
    income_id: i64,
    edit: NewIncome,
) -> Result<income::Model> {
    ensure_non_negative(edit.amount)?;

    let existing = store::fetch_owned::<Income>(db, &user.id, income_id).await?;
    let mut active: income::ActiveModel = existing.into();
    active.amount = Set(edit.amount);
    active.source = Set(edit.source);
    active.date = Set(edit.date);

    active.update(db).await.map_err(Into::into)
}

/// Deletes an income record.
pub async fn delete_income(db: &DatabaseConnection, user: &User, income_id: i64) -> Result<()> {
    store::delete_owned::<Income>(db, &user.id, income_id).await
}

/// Lists a user's income, most recent day first.
pub async fn list_income(db: &DatabaseConnection, user: &User) -> Result<Vec<income::Model>> {
    store::list_for_user::<Income>(db, &user.id, IncomeColumn::Date, Order::Desc, None).await
}

// --- Budgets ---

async fn budget_category_taken(
    db: &DatabaseConnection,
    user: &User,
    category: &str,
    exclude: Option<i64>,
) -> Result<bool> {
    let mut condition = Condition::all().add(BudgetColumn::Category.eq(category));
    if let Some(id) = exclude {
        condition = condition.add(BudgetColumn::Id.ne(id));
    }
    let count = store::count_for_user_where::<Budget>(db, &user.id, condition).await?;
    Ok(count > 0)
}

/// Sets a spending limit for a category. At most one budget may exist per
/// category per user.
pub async fn set_budget(
    db: &DatabaseConnection,
    user: &User,
    category: String,
    amount: f64,
) -> Result<budget::Model> {
    ensure_positive(amount)?;
    if category.trim().is_empty() {
        return Err(Error::validation("budget category cannot be empty"));
    }
    if budget_category_taken(db, user, &category, None).await? {
        return Err(Error::validation(format!(
            "a budget for '{category}' already exists"
        )));
    }

    let budget = budget::ActiveModel {
        user_id: Set(user.id.clone()),
        category: Set(category),
        amount: Set(amount),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    budget.insert(db).await.map_err(Into::into)
}

/// Changes a budget's category and/or limit. Uniqueness is re-checked when
/// the category moves.
pub async fn update_budget(
    db: &DatabaseConnection,
    user: &User,
    budget_id: i64,
    category: String,
    amount: f64,
) -> Result<budget::Model> {
    ensure_positive(amount)?;

    let existing = store::fetch_owned::<Budget>(db, &user.id, budget_id).await?;
    if category != existing.category
        && budget_category_taken(db, user, &category, Some(budget_id)).await?
    {
        return Err(Error::validation(format!(
            "a budget for '{category}' already exists"
        )));
    }

    let mut active: budget::ActiveModel = existing.into();
    active.category = Set(category);
    active.amount = Set(amount);

    active.update(db).await.map_err(Into::into)
}

/// Deletes a budget.
pub async fn delete_budget(db: &DatabaseConnection, user: &User, budget_id: i64) -> Result<()> {
    store::delete_owned::<Budget>(db, &user.id, budget_id).await
}

/// Lists a user's budgets by category name.
pub async fn list_budgets(db: &DatabaseConnection, user: &User) -> Result<Vec<budget::Model>> {
    store::list_for_user::<Budget>(db, &user.id, BudgetColumn::Category, Order::Asc, None).await
}

// --- Subscriptions ---

/// Fields for a new subscription.
#[derive(Debug, Clone)]
pub struct NewSubscription {
    pub name: String,
    pub amount: f64,
    pub billing_cycle: BillingCycle,
    pub next_payment_date: NaiveDate,
    pub color: Option<String>,
}

/// Records a recurring subscription.
pub async fn add_subscription(
    db: &DatabaseConnection,
    user: &User,
    new: NewSubscription,
) -> Result<subscription::Model> {
    ensure_non_negative(new.amount)?;
    let name = new.name.trim();
    if name.is_empty() {
        return Err(Error::validation("subscription name cannot be empty"));
    }

    let subscription = subscription::ActiveModel {
        user_id: Set(user.id.clone()),
        name: Set(name.to_string()),
        amount: Set(new.amount),
        billing_cycle: Set(new.billing_cycle),
        next_payment_date: Set(new.next_payment_date),
        color: Set(new.color),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    subscription.insert(db).await.map_err(Into::into)
}

/// Rewrites a subscription's fields.
pub async fn update_subscription(
    db: &DatabaseConnection,
    user: &User,
    subscription_id: i64,
    edit: NewSubscription,
) -> Result<subscription::Model> {
    ensure_non_negative(edit.amount)?;

    let existing = store::fetch_owned::<Subscription>(db, &user.id, subscription_id).await?;
    let mut active: subscription::ActiveModel = existing.into();
    active.name = Set(edit.name);
    active.amount = Set(edit.amount);
    active.billing_cycle = Set(edit.billing_cycle);
    active.next_payment_date = Set(edit.next_payment_date);
    active.color = Set(edit.color);

    active.update(db).await.map_err(Into::into)
}

/// Deletes a subscription.
pub async fn delete_subscription(
    db: &DatabaseConnection,
    user: &User,
    subscription_id: i64,
) -> Result<()> {
    store::delete_owned::<Subscription>(db, &user.id, subscription_id).await
}

/// Lists a user's subscriptions, soonest payment first.
pub async fn list_subscriptions(
    db: &DatabaseConnection,
    user: &User,
) -> Result<Vec<subscription::Model>> {
    store::list_for_user::<Subscription>(
        db,
        &user.id,
        SubscriptionColumn::NextPaymentDate,
        Order::Asc,
        None,
    )
    .await
}

/// Effective monthly cost of all subscriptions; yearly plans are spread
/// over twelve months.
#[must_use]
pub fn monthly_subscription_cost(subscriptions: &[subscription::Model]) -> f64 {
    subscriptions
        .iter()
        .map(|sub| match sub.billing_cycle {
            BillingCycle::Monthly => sub.amount,
            BillingCycle::Yearly => sub.amount / 12.0,
        })
        .sum()
}

// --- Savings goals ---

/// Fields for a new savings goal.
#[derive(Debug, Clone)]
pub struct NewGoal {
    pub title: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub deadline: Option<NaiveDate>,
    pub color: Option<String>,
}

/// Creates a savings goal.
pub async fn add_goal(
    db: &DatabaseConnection,
    user: &User,
    new: NewGoal,
) -> Result<savings_goal::Model> {
    ensure_positive(new.target_amount)?;
    ensure_non_negative(new.current_amount)?;
    let title = new.title.trim();
    if title.is_empty() {
        return Err(Error::validation("goal title cannot be empty"));
    }

    let goal = savings_goal::ActiveModel {
        user_id: Set(user.id.clone()),
        title: Set(title.to_string()),
        target_amount: Set(new.target_amount),
        current_amount: Set(new.current_amount),
        deadline: Set(new.deadline),
        color: Set(new.color),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    goal.insert(db).await.map_err(Into::into)
}

/// Rewrites a goal's fields.
pub async fn update_goal(
    db: &DatabaseConnection,
    user: &User,
    goal_id: i64,
    edit: NewGoal,
) -> Result<savings_goal::Model> {
    ensure_positive(edit.target_amount)?;
    ensure_non_negative(edit.current_amount)?;

    let existing = store::fetch_owned::<SavingsGoal>(db, &user.id, goal_id).await?;
    let mut active: savings_goal::ActiveModel = existing.into();
    active.title = Set(edit.title);
    active.target_amount = Set(edit.target_amount);
    active.current_amount = Set(edit.current_amount);
    active.deadline = Set(edit.deadline);
    active.color = Set(edit.color);

    active.update(db).await.map_err(Into::into)
}

/// Adds a contribution to a goal. The stored amount may exceed the target;
/// over-funding is clamped for display only.
pub async fn contribute(
    db: &DatabaseConnection,
    user: &User,
    goal_id: i64,
    amount: f64,
) -> Result<savings_goal::Model> {
    ensure_positive(amount)?;

    let existing = store::fetch_owned::<SavingsGoal>(db, &user.id, goal_id).await?;
    let new_total = existing.current_amount + amount;
    let mut active: savings_goal::ActiveModel = existing.into();
    active.current_amount = Set(new_total);

    active.update(db).await.map_err(Into::into)
}

/// Deletes a savings goal.
pub async fn delete_goal(db: &DatabaseConnection, user: &User, goal_id: i64) -> Result<()> {
    store::delete_owned::<SavingsGoal>(db, &user.id, goal_id).await
}

/// Lists a user's savings goals, newest first.
pub async fn list_goals(db: &DatabaseConnection, user: &User) -> Result<Vec<savings_goal::Model>> {
    store::list_for_user::<SavingsGoal>(
        db,
        &user.id,
        SavingsGoalColumn::CreatedAt,
        Order::Desc,
        None,
    )
    .await
}

/// Display progress for a goal.
#[must_use]
pub fn goal_progress(goal: &savings_goal::Model) -> GoalProgress {
    progress::goal_progress(goal.current_amount, goal.target_amount)
}

// --- Derived statistics ---

/// Headline totals for the finance view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinanceSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    /// Income minus expenses
    pub balance: f64,
    /// Sum of all goals' current amounts
    pub total_savings: f64,
}

/// Computes the headline totals from in-memory lists.
#[must_use]
pub fn summarize(
    income: &[income::Model],
    expenses: &[expense::Model],
    goals: &[savings_goal::Model],
) -> FinanceSummary {
    let total_income: f64 = income.iter().map(|i| i.amount).sum();
    let total_expenses: f64 = expenses.iter().map(|e| e.amount).sum();
    FinanceSummary {
        total_income,
        total_expenses,
        balance: total_income - total_expenses,
        total_savings: goals.iter().map(|g| g.current_amount).sum(),
    }
}

/// One slice of the spending-by-category breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySlice {
    pub category: String,
    pub total: f64,
    pub color: &'static str,
}

/// Spending grouped by category, biggest first.
#[must_use]
pub fn category_breakdown(expenses: &[expense::Model]) -> Vec<CategorySlice> {
    let totals = aggregate::totals_by(expenses, |e| e.category.clone(), |e| e.amount);
    let mut slices: Vec<CategorySlice> = totals
        .into_iter()
        .map(|(category, total)| {
            let color = category_color(&category);
            CategorySlice {
                category,
                total,
                color,
            }
        })
        .collect();
    slices.sort_by(|a, b| b.total.total_cmp(&a.total));
    slices
}

/// One budget with its actual spending and progress.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatus {
    pub budget: budget::Model,
    pub spent: f64,
    pub progress: BudgetProgress,
}

/// Pairs each budget with the total spent in its category. Limits are
/// positive by construction, so the progress math cannot be reached with a
/// bad divisor.
pub fn budget_overview(
    budgets: &[budget::Model],
    expenses: &[expense::Model],
) -> Result<Vec<BudgetStatus>> {
    let spent_by_category = aggregate::totals_by(expenses, |e| e.category.clone(), |e| e.amount);

    budgets
        .iter()
        .map(|budget| {
            let spent = spent_by_category
                .get(&budget.category)
                .copied()
                .unwrap_or(0.0);
            Ok(BudgetStatus {
                budget: budget.clone(),
                spent,
                progress: progress::budget_progress(spent, budget.amount)?,
            })
        })
        .collect()
}
