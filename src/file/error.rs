use std::io;
use thiserror::Error;

use super::{PageId, SlotId};

#[derive(Debug, Error)]
pub enum FileError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("File already exists: {0}")]
    FileExists(String),

    #[error("Invalid file handle: {0}")]
    InvalidHandle(usize),

    #[error("Invalid page {page} in file {file}")]
    InvalidPage { file: String, page: PageId },

    #[error("Invalid record slot {slot}")]
    InvalidRecord { slot: SlotId },

    #[error("Insufficient space on page: need {need} bytes, have {free}")]
    InsufficientSpace { need: usize, free: usize },

    #[error("End of file reached")]
    EndOfFile,

    #[error("File handle limit reached")]
    TooManyOpenFiles,
}

pub type FileResult<T> = Result<T, FileError>;

#[derive(Debug, Error)]
pub enum BufferError {
    #[error(transparent)]
    File(#[from] FileError),

    #[error("All buffer frames are pinned")]
    BufferExceeded,

    #[error("Page {page} of file {file} is not pinned (frame {frame})")]
    PageNotPinned {
        file: String,
        page: PageId,
        frame: usize,
    },

    #[error("Page {page} of file {file} is still pinned (frame {frame})")]
    PagePinned {
        file: String,
        page: PageId,
        frame: usize,
    },

    #[error("Invalid frame {frame} encountered during flush")]
    BadBuffer { frame: usize },

    #[error("Page {page} of file {file} is not in the buffer pool")]
    NotInBuffer { file: String, page: PageId },
}

pub type BufferResult<T> = Result<T, BufferError>;
