use core::ptr;

pub struct Reflectance {
    analog: [*const u16; 4],
    thresholds: [*mut u16; 4],
    digital: *const u8,
}

impl Reflectance {
    pub const fn bind(slot: usize) -> Self {
        Self {
            analog: [
                (slot + 0x00) as *const u16,
                (slot + 0x02) as *const u16,
                (slot + 0x04) as *const u16,
                (slot + 0x06) as *const u16,
            ],
            thresholds: [
                (slot + 0x08) as *mut u16,
                (slot + 0x0A) as *mut u16,
                (slot + 0x0C) as *mut u16,
                (slot + 0x0E) as *mut u16,
            ],
            digital: (slot + 0x10) as *const u8,
        }
    }

    /// Left-outer, left-inner, right-inner, right-outer.
    pub fn analog(&self) -> [u16; 4] {
        unsafe {
            [
                ptr::read_volatile(self.analog[0]),
                ptr::read_volatile(self.analog[1]),
                ptr::read_volatile(self.analog[2]),
                ptr::read_volatile(self.analog[3]),
            ]
        }
    }

    /// Bit `n` set when channel `n` reads past its threshold.
    pub fn digital(&self) -> [bool; 4] {
        let bits = unsafe { ptr::read_volatile(self.digital) };
        core::array::from_fn(|i| bits & (1 << i) != 0)
    }

    pub fn set_thresholds(&mut self, levels: [u16; 4]) {
        for (port, level) in self.thresholds.iter().zip(levels) {
            unsafe { ptr::write_volatile(*port, level) };
        }
    }
}
