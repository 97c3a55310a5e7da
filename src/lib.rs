pub mod apply;
pub mod category;
pub mod config;
pub mod dry_run;
pub mod error;
pub mod lexorder;
pub mod naming;
pub mod plan;
pub mod slots;
pub mod timeline;

pub use error::*;
pub use plan::{PlanEntry, build_plan, plan_entry, sorted_newest_first};
