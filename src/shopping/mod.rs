//! Shopping-list cost aggregation.

mod plan;

pub use plan::{
    calculate_total, estimate_savings, group_by_store, ResolvedItem, ShoppingPlan, StoreGroup,
};
