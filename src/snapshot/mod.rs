//! Snapshot engine for dirsnap
//!
//! Recursive copy and recursive delete over directory trees. Both operations
//! are best-effort and report through return values rather than errors: a
//! backup that loses one file to a permission problem still carries the rest,
//! and a delete that cannot fully empty a tree removes what it can.
//!
//! Callers are responsible for collision checks before copying; `copy_tree`
//! invoked against an existing destination merges into it.

mod engine;

pub use engine::{copy_tree, remove_tree};
