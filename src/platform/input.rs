//! Latest-value input slot
//!
//! Input handlers may run on another thread than the tick loop. Writes never
//! queue: the tick reads whatever sample is newest. The whole sample lives in
//! one `AtomicU64` so a read never sees a half-written value.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::sim::InputSample;

const POINTER_MASK: u64 = 0xFFFF_FFFF;
const PRESENT_BIT: u64 = 1 << 32;
const QUIT_BIT: u64 = 1 << 33;

/// Shared last-write-wins input sample. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct InputSlot {
    packed: Arc<AtomicU64>,
}

impl InputSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer move. A pending quit request is kept.
    pub fn set_pointer(&self, x: f32) {
        let bits = u64::from(x.to_bits());
        // The closure always returns Some, so this cannot fail
        let _ = self
            .packed
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |old| {
                Some((old & QUIT_BIT) | PRESENT_BIT | bits)
            });
    }

    /// Record the quit key. The last pointer position is kept.
    pub fn request_quit(&self) {
        self.packed.fetch_or(PRESENT_BIT | QUIT_BIT, Ordering::AcqRel);
    }

    /// Newest sample, or `None` before any input arrived
    pub fn latest(&self) -> Option<InputSample> {
        unpack(self.packed.load(Ordering::Acquire))
    }

    /// Forget all input (used when a new session starts)
    pub fn clear(&self) {
        self.packed.store(0, Ordering::Release);
    }
}

fn unpack(packed: u64) -> Option<InputSample> {
    if packed & PRESENT_BIT == 0 {
        return None;
    }
    Some(InputSample {
        pointer_x: f32::from_bits((packed & POINTER_MASK) as u32),
        quit: packed & QUIT_BIT != 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_until_written() {
        let slot = InputSlot::new();
        assert_eq!(slot.latest(), None);
    }

    #[test]
    fn test_last_write_wins() {
        let slot = InputSlot::new();
        slot.set_pointer(10.0);
        slot.set_pointer(-42.5);
        slot.set_pointer(333.25);
        assert_eq!(slot.latest(), Some(InputSample::pointer(333.25)));
        // Reads do not consume
        assert_eq!(slot.latest(), Some(InputSample::pointer(333.25)));
    }

    #[test]
    fn test_quit_survives_pointer_moves() {
        let slot = InputSlot::new();
        slot.set_pointer(100.0);
        slot.request_quit();
        slot.set_pointer(200.0);

        let sample = slot.latest().unwrap();
        assert!(sample.quit);
        assert_eq!(sample.pointer_x, 200.0);
    }

    #[test]
    fn test_quit_before_pointer() {
        let slot = InputSlot::new();
        slot.request_quit();
        assert_eq!(slot.latest(), Some(InputSample::quit()));
    }

    #[test]
    fn test_clear() {
        let slot = InputSlot::new();
        slot.set_pointer(5.0);
        slot.request_quit();
        slot.clear();
        assert_eq!(slot.latest(), None);
    }

    #[test]
    fn test_shared_across_threads() {
        let slot = InputSlot::new();
        let writer = slot.clone();
        let handle = std::thread::spawn(move || {
            for i in 0..1000 {
                writer.set_pointer(i as f32);
            }
        });
        handle.join().unwrap();
        assert_eq!(slot.latest(), Some(InputSample::pointer(999.0)));
    }
}
