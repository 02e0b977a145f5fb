//! Skill resolution - the modifier aggregation engine.
//!
//! # Architecture
//!
//! ```text
//! [ Catalog rules (env) ] + [ Unit sources ]
//!      ↓
//! [ SkillBreakdown: basic + five bonus shelves ]
//!      ↓
//! [ Shelf filter + sign policy ]
//!      ↓
//! effective value
//! ```
//!
//! ## Principles
//!
//! 1. **Additive shelves**: every shelf is a plain sum, shelves add to each other
//! 2. **Basic-only sign policy**: bonuses are never clamped
//! 3. **Deterministic**: pure functions, identifier-ordered iteration
//! 4. **Floor semantics**: divisor-scaled bonuses round toward negative infinity

pub mod bonus;
pub mod resolve;
pub mod shelf;

pub use bonus::{ceil_div, floor_div, percent_of};
pub use resolve::{UnitSources, breakdown, resolve};
pub use shelf::{Shelf, ShelfTotals, SignPolicy, SkillBreakdown};
