use crate::hardware::Hardware;

/// The four reflectance channels, in physical order across the front edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineChannel {
    LeftOuter,
    LeftInner,
    RightInner,
    RightOuter,
}

impl LineChannel {
    pub const ALL: [LineChannel; 4] = [
        LineChannel::LeftOuter,
        LineChannel::LeftInner,
        LineChannel::RightInner,
        LineChannel::RightOuter,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Per-channel digital trigger levels. A channel is over threshold (sitting on
/// the dark boundary line) when its analog value exceeds its level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Thresholds {
    pub left_outer: u16,
    pub left_inner: u16,
    pub right_inner: u16,
    pub right_outer: u16,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            left_outer: 15_000,
            left_inner: 18_000,
            right_inner: 22_500,
            right_outer: 15_000,
        }
    }
}

impl Thresholds {
    pub fn get(&self, channel: LineChannel) -> u16 {
        self.as_array()[channel.index()]
    }

    pub fn as_array(&self) -> [u16; 4] {
        [
            self.left_outer,
            self.left_inner,
            self.right_inner,
            self.right_outer,
        ]
    }

    pub fn digitize(&self, analog: [u16; 4]) -> [bool; 4] {
        let levels = self.as_array();
        core::array::from_fn(|i| analog[i] > levels[i])
    }
}

/// One read of the reflectance array.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineReading {
    pub analog: [u16; 4],
    pub digital: [bool; 4],
}

impl LineReading {
    /// Builds a reading the way the reflectance driver does, digitizing the
    /// analog values against `thresholds`.
    pub fn from_analog(analog: [u16; 4], thresholds: &Thresholds) -> Self {
        Self {
            analog,
            digital: thresholds.digitize(analog),
        }
    }

    pub fn analog(&self, channel: LineChannel) -> u16 {
        self.analog[channel.index()]
    }

    pub fn over(&self, channel: LineChannel) -> bool {
        self.digital[channel.index()]
    }

    /// Both outer channels over threshold: the robot straddles the line.
    pub fn both_outer(&self) -> bool {
        self.over(LineChannel::LeftOuter) && self.over(LineChannel::RightOuter)
    }
}

/// Everything the policies look at in one hunt iteration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SensorSnapshot {
    pub line: LineReading,
    /// Ranger reading, lower is closer.
    pub distance: u16,
}

impl SensorSnapshot {
    pub fn read<H: Hardware + ?Sized>(hardware: &mut H) -> Self {
        let line = hardware.line_sensors();
        let distance = hardware.ranging_distance();
        Self { line, distance }
    }
}
