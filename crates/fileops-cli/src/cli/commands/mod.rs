//! CLI command handlers. Each command is in its own file.

mod checksum;
mod is_media;
mod join;
mod link;
mod read;
mod read_dir;
mod split;

pub use checksum::run_checksum;
pub use is_media::run_is_media;
pub use join::run_join;
pub use link::run_link;
pub use read::run_read;
pub use read_dir::run_read_dir;
pub use split::run_split;
