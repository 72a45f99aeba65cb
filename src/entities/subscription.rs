//! Subscription entity - a recurring payment with a billing cycle.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// How often a subscription bills.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum BillingCycle {
    #[sea_orm(string_value = "monthly")]
    Monthly,
    #[sea_orm(string_value = "yearly")]
    Yearly,
}

/// Subscription database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "subscriptions")]
pub struct Model {
    /// Unique identifier for the subscription
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the user this subscription belongs to
    pub user_id: String,
    /// Service name (e.g. "Spotify")
    pub name: String,
    /// Amount charged per billing cycle
    pub amount: f64,
    /// Monthly or yearly billing
    pub billing_cycle: BillingCycle,
    /// Calendar day the next payment is due
    pub next_payment_date: Date,
    /// Optional display color token
    pub color: Option<String>,
    /// When the record was created
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
