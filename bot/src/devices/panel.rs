use core::ptr;

/// Start button, IR start module latch and battery monitor.
pub struct Panel {
    button: *const u8,
    go: *const u8,
    battery: *const u16,
}

impl Panel {
    pub const fn bind(slot: usize) -> Self {
        Self {
            button: (slot + 0x00) as *const u8,
            go: (slot + 0x01) as *const u8,
            battery: (slot + 0x02) as *const u16,
        }
    }

    /// The button pulls its line low while pressed.
    pub fn button_pressed(&self) -> bool {
        unsafe { ptr::read_volatile(self.button) == 0 }
    }

    pub fn go(&self) -> bool {
        unsafe { ptr::read_volatile(self.go) != 0 }
    }

    pub fn battery_millivolts(&self) -> u16 {
        unsafe { ptr::read_volatile(self.battery) }
    }
}
