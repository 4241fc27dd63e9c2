//! Unidirectional state primitives shared by the habit store and the UI.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ subscribers / view
//!    ↑                                    │
//!    └────────────────────────────────────┘
//! ```
//!
//! Reducers are the only place transitions happen. Both the habit
//! collection and view-local state (list selection) go through them.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::State;
