use core::ptr;

pub struct Clock {
    millis: *const u32,
}

impl Clock {
    pub const fn bind(slot: usize) -> Self {
        Self {
            millis: slot as *const u32,
        }
    }

    pub fn millis(&self) -> u32 {
        unsafe { ptr::read_volatile(self.millis) }
    }

    /// Busy-waits for `ms` milliseconds.
    pub fn delay_ms(&self, ms: u32) {
        let start = self.millis();
        while self.millis().wrapping_sub(start) < ms {}
    }
}
