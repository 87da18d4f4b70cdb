#![no_std]
#![no_main]

use core::{fmt::Write, panic::PanicInfo};

use sumo_bot::{MmioHardware, log};
use sumo_core::{Robot, Tuning};

#[panic_handler]
fn panic(panic: &PanicInfo<'_>) -> ! {
    writeln!(log(), "{}", panic).ok(); // Do not panic in panic
    loop {}
}

#[unsafe(export_name = "main")]
fn main() -> ! {
    writeln!(log(), "Spiral hunter starting up...").ok();

    let robot = Robot::new(MmioHardware::bind(), Tuning::default());
    robot.run()
}
