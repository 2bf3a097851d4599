//! Domain layer - Routine state and value types

pub mod affirmation;
pub mod checklist;
pub mod journal;
pub mod routine;

pub use affirmation::{AffirmationPool, DEFAULT_AFFIRMATIONS};
pub use checklist::{Checklist, ChecklistEntry, DEFAULT_CHECKLIST};
pub use journal::{JournalDraft, JournalField, JOURNAL_HEADING};
pub use routine::{Routine, RoutineEvent, SubscriptionId};
