use byteorder::{ByteOrder, LittleEndian};

use super::error::{FileError, FileResult};
use super::{PAGE_SIZE, SlotId};

const HEADER_SIZE: usize = 8;
const SLOT_SIZE: usize = 4;

/// Record-level view over a raw page buffer.
///
/// Layout: an 8-byte header (slot count, free-space bounds), a slot
/// directory growing upward from the header, and record bytes packed
/// downward from the end of the page.
///
/// An all-zero buffer reads as an empty page; the free-space bounds are
/// materialized on first wrap.
pub struct Page<'a> {
    buf: &'a mut [u8],
}

impl<'a> Page<'a> {
    /// Wrap a page buffer
    pub fn new(buf: &'a mut [u8]) -> Self {
        debug_assert_eq!(buf.len(), PAGE_SIZE);
        let mut page = Self { buf };
        if page.free_upper() == 0 {
            page.set_free_lower(HEADER_SIZE as u16);
            page.set_free_upper(PAGE_SIZE as u16);
        }
        page
    }

    /// Number of records stored on this page
    pub fn record_count(&self) -> SlotId {
        LittleEndian::read_u16(&self.buf[0..2])
    }

    /// Append a record, returning its slot number
    pub fn insert_record(&mut self, data: &[u8]) -> FileResult<SlotId> {
        let lower = self.free_lower() as usize;
        let upper = self.free_upper() as usize;
        let free = upper - lower;
        let need = data.len() + SLOT_SIZE;
        if need > free {
            return Err(FileError::InsufficientSpace { need, free });
        }

        let slot = self.record_count();
        let offset = upper - data.len();
        self.buf[offset..upper].copy_from_slice(data);

        let slot_at = lower;
        LittleEndian::write_u16(&mut self.buf[slot_at..slot_at + 2], offset as u16);
        LittleEndian::write_u16(&mut self.buf[slot_at + 2..slot_at + 4], data.len() as u16);

        LittleEndian::write_u16(&mut self.buf[0..2], slot + 1);
        self.set_free_lower((lower + SLOT_SIZE) as u16);
        self.set_free_upper(offset as u16);

        Ok(slot)
    }

    /// Read a record by slot number
    pub fn get_record(&self, slot: SlotId) -> FileResult<&[u8]> {
        let (offset, len) = self.slot_entry(slot)?;
        Ok(&self.buf[offset..offset + len])
    }

    /// Overwrite a record in place; the new data must match the old length
    pub fn update_record(&mut self, slot: SlotId, data: &[u8]) -> FileResult<()> {
        let (offset, len) = self.slot_entry(slot)?;
        if data.len() != len {
            return Err(FileError::InsufficientSpace {
                need: data.len(),
                free: len,
            });
        }
        self.buf[offset..offset + len].copy_from_slice(data);
        Ok(())
    }

    fn slot_entry(&self, slot: SlotId) -> FileResult<(usize, usize)> {
        if slot >= self.record_count() {
            return Err(FileError::InvalidRecord { slot });
        }
        let slot_at = HEADER_SIZE + slot as usize * SLOT_SIZE;
        let offset = LittleEndian::read_u16(&self.buf[slot_at..slot_at + 2]) as usize;
        let len = LittleEndian::read_u16(&self.buf[slot_at + 2..slot_at + 4]) as usize;
        Ok((offset, len))
    }

    fn free_lower(&self) -> u16 {
        LittleEndian::read_u16(&self.buf[2..4])
    }

    fn free_upper(&self) -> u16 {
        LittleEndian::read_u16(&self.buf[4..6])
    }

    fn set_free_lower(&mut self, value: u16) {
        LittleEndian::write_u16(&mut self.buf[2..4], value);
    }

    fn set_free_upper(&mut self, value: u16) {
        LittleEndian::write_u16(&mut self.buf[4..6], value);
    }
}
