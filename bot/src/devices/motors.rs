use core::ptr;

pub struct Motors {
    mem: *mut u8,
}

impl Motors {
    pub const fn bind(slot: usize) -> Self {
        Self {
            mem: slot as *mut u8,
        }
    }

    pub fn set_speed(&mut self, left: u8, right: u8) {
        unsafe {
            ptr::write_volatile(self.mem, left);
            ptr::write_volatile(self.mem.wrapping_add(1), right);
        }
    }

    pub fn set_direction(&mut self, left_backward: bool, right_backward: bool) {
        unsafe {
            ptr::write_volatile(self.mem.wrapping_add(2), left_backward as u8);
            ptr::write_volatile(self.mem.wrapping_add(3), right_backward as u8);
        }
    }
}
