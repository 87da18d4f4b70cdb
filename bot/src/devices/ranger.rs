use core::ptr;

/// Forward ultrasonic ranger.
pub struct Ranger {
    distance: *const u16,
}

impl Ranger {
    pub const fn bind(slot: usize) -> Self {
        Self {
            distance: slot as *const u16,
        }
    }

    pub fn distance(&self) -> u16 {
        unsafe { ptr::read_volatile(self.distance) }
    }
}
