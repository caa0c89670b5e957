//! Layout state: the print cursor and the field-size lookahead records.

pub mod sizes;
pub mod state;

pub use sizes::{measure_locals, measure_members, FieldSizes};
pub use state::{BlockKind, ConstructKind, PrintState};
