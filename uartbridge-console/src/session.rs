//! Menu and test sessions
//!
//! Each session reads operator input and writes its output through the
//! bridge rings. Interactive sessions end on their own key or sentinel, or
//! with [`ConsoleError::IdleTimeout`] when an idle timeout is configured.

use core::fmt::Write as _;

use embedded_hal::delay::DelayNs;
use heapless::{String, Vec};
use uartbridge_hal::{ByteTransport, UartConfig};
use uartbridge_protocol::{is_quit_key, ExitDetector, MenuCommand, ESCAPE};

use crate::console::Console;
use crate::error::ConsoleError;

/// Capture buffer size for the receive test, one byte kept spare
pub const CAPTURE_SIZE: usize = 1024;

const BANNER: &str = "\r\n*** Zynq-7000 UART Communication Demo ***\r\n";
const READY: &str = "\r\n=== UART Communication Ready ===\r\n";
const MENU_HEADER: &str = "\r\n=== UART Test Menu ===\r\n";
const MENU_PROMPT: &str = "Select option (1-5): ";
const INVALID_OPTION: &str = "\r\nInvalid option. Please select 1-5.\r\n";

const ECHO_HEADER: &str = "\r\n=== Echo Test ===\r\nType characters (press 'q' to quit):\r\n";
const ECHO_DONE: &str = "\r\nEcho test completed.\r\n";

const TEST_MESSAGES: [&str; 6] = [
    "\r\n=== Sending Test Messages ===\r\n",
    "Message 1: Hello from the Zynq-7000 board!\r\n",
    "Message 2: UART Communication Test\r\n",
    "Message 3: Zynq-7000 SoC UART Demo\r\n",
    "Message 4: 0123456789ABCDEF\r\n",
    "=== Test Messages Complete ===\r\n",
];

const RECEIVE_HEADER: &str = "\r\n=== Receive Data Test ===\r\nSend data (press ESC to stop):\r\n";
const RECEIVE_DONE: &str = "Receive test completed.\r\n";

const CONTINUOUS_HEADER: &str = "\r\n=== Continuous Echo Mode ===\r\n\
All typed characters will be echoed back.\r\n\
Send 'EXIT' to stop.\r\n";
const CONTINUOUS_DONE: &str = "\r\nExiting continuous echo mode.\r\n";

/// Result of one pass through the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuOutcome {
    /// No key within the menu timeout
    TimedOut,
    /// Key did not select a command
    Invalid(u8),
    /// Command ran to completion
    Completed(MenuCommand),
}

impl<T: ByteTransport, D: DelayNs, const N: usize> Console<T, D, N> {
    /// Print the start-up banner
    pub fn start(&mut self, uart: &UartConfig) -> Result<(), ConsoleError> {
        let mut line: String<32> = String::new();
        let _ = write!(line, "Baud Rate: {}\r\n", uart.baudrate);

        self.write_str(BANNER)?;
        self.write_str(&line)?;
        self.write_str(READY)?;
        self.flush()
    }

    /// Show the menu, wait for a key and run the selected command
    pub fn run_once(&mut self) -> Result<MenuOutcome, ConsoleError> {
        self.show_menu()?;
        self.flush()?;

        let Some(key) = self.read_byte(
            Some(self.config.menu_timeout_ms),
            self.config.poll_interval_us,
        ) else {
            return Ok(MenuOutcome::TimedOut);
        };

        // Echo the selection
        self.write_bytes(&[key])?;

        let outcome = match MenuCommand::from_key(key) {
            Some(command) => {
                #[cfg(feature = "defmt")]
                defmt::info!("Menu command: {:?}", command);
                self.run_command(command)?;
                MenuOutcome::Completed(command)
            }
            None => {
                #[cfg(feature = "defmt")]
                defmt::debug!("Invalid menu key: {=u8:#x}", key);
                self.write_str(INVALID_OPTION)?;
                MenuOutcome::Invalid(key)
            }
        };

        self.flush()?;
        Ok(outcome)
    }

    /// Run one menu command
    pub fn run_command(&mut self, command: MenuCommand) -> Result<(), ConsoleError> {
        match command {
            MenuCommand::EchoTest => self.echo_test(),
            MenuCommand::SendMessages => self.send_test_messages(),
            MenuCommand::ReceiveTest => self.receive_test().map(|_| ()),
            MenuCommand::ContinuousEcho => self.continuous_echo(),
            MenuCommand::Statistics => self.show_statistics(),
        }
    }

    /// Queue the menu text
    pub fn show_menu(&mut self) -> Result<(), ConsoleError> {
        self.write_str(MENU_HEADER)?;
        for command in MenuCommand::ALL {
            self.write_bytes(&[command.key()])?;
            self.write_str(". ")?;
            self.write_str(command.label())?;
            self.write_str("\r\n")?;
        }
        self.write_str(MENU_PROMPT)
    }

    /// Echo typed characters until `q` or `Q`
    pub fn echo_test(&mut self) -> Result<(), ConsoleError> {
        self.write_str(ECHO_HEADER)?;

        loop {
            let byte = self.next_session_byte(self.config.poll_interval_us)?;
            if is_quit_key(byte) {
                self.write_str(ECHO_DONE)?;
                return self.flush();
            }

            self.write_bytes(&[byte])?;
            if byte == b'\r' {
                self.write_str("\n")?;
            }
        }
    }

    /// Send the canned messages, pausing after each one
    pub fn send_test_messages(&mut self) -> Result<(), ConsoleError> {
        for message in TEST_MESSAGES {
            self.write_str(message)?;
            self.pause_ms(self.config.message_gap_ms);
        }
        self.flush()
    }

    /// Capture input until ESC and report how much arrived
    ///
    /// Every byte is echoed; at most `CAPTURE_SIZE - 1` are kept.
    pub fn receive_test(&mut self) -> Result<Vec<u8, CAPTURE_SIZE>, ConsoleError> {
        self.write_str(RECEIVE_HEADER)?;

        let mut captured: Vec<u8, CAPTURE_SIZE> = Vec::new();
        loop {
            let byte = self.next_session_byte(self.config.poll_interval_us)?;
            if byte == ESCAPE {
                break;
            }

            if captured.len() < CAPTURE_SIZE - 1 {
                let _ = captured.push(byte);
            }
            self.write_bytes(&[byte])?;
        }

        let mut report: String<48> = String::new();
        let _ = write!(report, "\r\nReceived {} bytes total.\r\n", captured.len());
        self.write_str(&report)?;
        self.write_str(RECEIVE_DONE)?;
        self.flush()?;

        Ok(captured)
    }

    /// Echo everything until the operator sends `EXIT` or `exit`
    pub fn continuous_echo(&mut self) -> Result<(), ConsoleError> {
        self.write_str(CONTINUOUS_HEADER)?;

        let mut detector = ExitDetector::new();
        loop {
            let byte = self.next_session_byte(self.config.echo_poll_interval_us)?;
            self.write_bytes(&[byte])?;

            if detector.feed(byte) {
                self.write_str(CONTINUOUS_DONE)?;
                return self.flush();
            }

            if byte == b'\r' {
                self.write_str("\n")?;
            }
        }
    }

    /// Print the bridge counters and ring levels
    pub fn show_statistics(&mut self) -> Result<(), ConsoleError> {
        let stats = self.bridge.statistics();

        let mut text: String<320> = String::new();
        let _ = write!(
            text,
            "\r\n=== USB-UART Bridge Statistics ===\r\n\
             Bytes Transmitted: {}\r\n\
             Bytes Received: {}\r\n\
             Error Count: {}\r\n\
             RX Data Available: {} bytes\r\n\
             TX Space Available: {} bytes\r\n\
             ===================================\r\n",
            stats.bytes_transmitted,
            stats.bytes_received,
            stats.error_count,
            stats.rx_available,
            stats.tx_space_available,
        );

        self.write_str(&text)?;
        self.flush()
    }

    fn next_session_byte(&mut self, poll_us: u32) -> Result<u8, ConsoleError> {
        self.read_byte(self.config.session_idle_timeout_ms, poll_us)
            .ok_or(ConsoleError::IdleTimeout)
    }
}
