pub mod file;
pub mod index;

pub use file::{
    BufferManager, FileHandle, PagedFileManager, RecordId, BUFFER_POOL_SIZE, PAGE_SIZE, PageId,
};
pub use index::{AttrType, BTreeIndex, ScanOp};
