use super::buffer_manager::BufferManager;
use super::error::{BufferResult, FileError};
use super::file_manager::FileHandle;
use super::page::Page;
use super::{PageId, RecordId, SlotId};

/// Scans every record of a relation file, page by page, slot by slot.
///
/// Pages are read through the buffer manager and unpinned before
/// `scan_next` returns; no pin outlives a call. The scan signals
/// exhaustion with `FileError::EndOfFile`.
pub struct FileScan {
    file: FileHandle,
    page_count: u32,
    current_page: PageId,
    current_slot: SlotId,
}

impl FileScan {
    pub fn new(file: FileHandle, buf: &mut BufferManager) -> BufferResult<Self> {
        let page_count = buf.file_manager_mut().page_count(file)?;
        Ok(Self {
            file,
            page_count,
            current_page: 1,
            current_slot: 0,
        })
    }

    /// Return the next record and its id, or `FileError::EndOfFile`
    pub fn scan_next(&mut self, buf: &mut BufferManager) -> BufferResult<(RecordId, Vec<u8>)> {
        while self.current_page <= self.page_count {
            let page_no = self.current_page;
            let slot = self.current_slot;

            let mut record = None;
            {
                let bytes = buf.read_page(self.file, page_no)?;
                let page = Page::new(bytes);
                if slot < page.record_count() {
                    record = Some(page.get_record(slot).map(|data| data.to_vec()));
                }
            }
            buf.unpin_page(self.file, page_no, false)?;

            match record {
                Some(data) => {
                    self.current_slot += 1;
                    return Ok((RecordId::new(page_no, slot), data?));
                }
                None => {
                    self.current_page += 1;
                    self.current_slot = 0;
                }
            }
        }
        Err(FileError::EndOfFile.into())
    }
}
