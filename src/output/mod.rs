//! Record writer
//!
//! Persists extracted works, batch summaries, and identifier lists.
//! Every write goes through an atomic replace (temp file + rename in the
//! destination directory), so a crash mid-write never leaves a truncated
//! record behind.

mod records;

pub use records::{record_path, write_id_list, write_record};
