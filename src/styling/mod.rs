//! Pattern-driven styling
//!
//! This module keeps inline styles in sync with rules:
//! - Collecting the ranges each rule matches
//! - Reconciling those ranges with the styles already applied
//! - Stripping styles before structural edits

mod collector;
mod driver;
mod guard;
mod matcher;
mod reconciler;
mod rules;

pub use collector::{collect, StyleChange};
pub use driver::{run, run_deferred};
pub use guard::{guard, strip_styles};
pub use matcher::{Matcher, RegexMatcher};
pub use reconciler::{reconcile, Reconciled};
pub use rules::{RuleSet, StyleRule};
