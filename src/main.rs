mod console;
mod protocol;
mod serial;

use crate::console::Console;
use simplelog as sl;
use std::io;
use std::time::Duration;

const DEVICE_PATH: &str = "/dev/ttyUSB0";
const BAUD_RATE: u32 = 9600;
const READ_TIMEOUT: Duration = Duration::from_secs(1);
// The board resets when the port opens; anything sent before it boots is lost.
const SETTLE_TIME: Duration = Duration::from_secs(2);

fn main() -> console::Result<()> {
    let _ = sl::TermLogger::init(
        sl::LevelFilter::Info,
        sl::Config::default(),
        sl::TerminalMode::Stderr,
        sl::ColorChoice::Auto,
    );

    let conn = serial::new(DEVICE_PATH, BAUD_RATE, READ_TIMEOUT).map_err(|e| {
        log::error!("Failed to open {}: {}", DEVICE_PATH, e);
        e
    })?;
    std::thread::sleep(SETTLE_TIME);

    let stdin = io::stdin();
    let mut cli = Console::new(conn, stdin.lock(), io::stdout());
    cli.run().map_err(|e| {
        log::error!("Session aborted: {}", e);
        e
    })
}
