//! Memory-mapped peripherals of the robot.
//!
//! | Slot  | Device      | Layout |
//! |-------|-------------|--------|
//! | SLOT1 | log         | `char` write port |
//! | SLOT2 | reflectance | 4 × u16 analog (read), 4 × u16 threshold (write) at 0x08, digital bitmask u8 at 0x10 |
//! | SLOT3 | motors      | left speed, right speed, left dir, right dir (u8 each, dir 1 = backward) |
//! | SLOT4 | ranger      | u16 distance |
//! | SLOT5 | panel       | button u8 (0 = pressed), go latch u8, battery mV u16 at 0x02 |
//! | SLOT6 | clock       | u32 milliseconds since reset |

mod clock;
mod log;
mod motors;
mod panel;
mod ranger;
mod reflectance;

pub use clock::Clock;
pub use log::Log;
pub use motors::Motors;
pub use panel::Panel;
pub use ranger::Ranger;
pub use reflectance::Reflectance;
