//! Filesystem operations for the direct Trash fallback.

mod atomic;
mod copy;
mod helpers;
mod mover;
mod naming;
mod trash_dir;
mod util;

pub use atomic::rename_into_trash;
pub use copy::{copy_recursive, copy_then_remove, remove_all_force};
pub use helpers::io_error_with_help;
pub use mover::{DirectMover, RenameFn};
pub use naming::{trash_destination, trash_destination_at};
pub use trash_dir::locate_trash_dir;
pub use util::is_cross_device;
