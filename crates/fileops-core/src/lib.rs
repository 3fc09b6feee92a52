//! Filesystem helpers for the ingestion step of a retrieval pipeline:
//! media detection, soft-link result sets, chunked reads and file splitting.

pub mod config;
pub mod logging;

pub mod checksum;
pub mod chunking;
pub mod error;
pub mod filter;
pub mod links;
pub mod media;
pub mod reader;
pub mod split;
pub mod storage;

pub use error::{FileOpsError, Result};
pub use links::{make_soft_links, LinkDir};
pub use media::{is_image_or_video, MEDIA_EXTENSIONS};
pub use reader::{get_all_file_data, get_file_data, FileData, ReadOptions};
pub use split::{join_chunks, split_file, SplitSummary};
