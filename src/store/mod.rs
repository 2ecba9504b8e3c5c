//!  The habit collection and its persistence.
//!  The basic idea is:
//!   - The whole collection lives in memory inside [habit_store::HabitStore].
//!   - It is loaded once at startup from a single json snapshot file.
//!   - Every mutation takes effect in memory immediately and is then flushed back to the
//!     snapshot as a whole-collection overwrite, best effort.

pub mod entities;
pub mod habit_store;
pub mod snapshot_storage;
