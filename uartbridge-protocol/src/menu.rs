//! Operator menu commands
//!
//! The console shows a numbered menu and reads a single key.

/// ESC key, ends the receive capture test
pub const ESCAPE: u8 = 0x1B;

/// Menu selections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuCommand {
    /// `1` - echo typed characters until `q`
    EchoTest,
    /// `2` - send the canned test messages
    SendMessages,
    /// `3` - capture bytes until ESC and report the count
    ReceiveTest,
    /// `4` - echo everything until `EXIT`
    ContinuousEcho,
    /// `5` - print bridge statistics
    Statistics,
}

impl MenuCommand {
    /// All commands in menu order
    pub const ALL: [MenuCommand; 5] = [
        MenuCommand::EchoTest,
        MenuCommand::SendMessages,
        MenuCommand::ReceiveTest,
        MenuCommand::ContinuousEcho,
        MenuCommand::Statistics,
    ];

    /// Decode a menu key
    pub fn from_key(key: u8) -> Option<Self> {
        match key {
            b'1' => Some(MenuCommand::EchoTest),
            b'2' => Some(MenuCommand::SendMessages),
            b'3' => Some(MenuCommand::ReceiveTest),
            b'4' => Some(MenuCommand::ContinuousEcho),
            b'5' => Some(MenuCommand::Statistics),
            _ => None,
        }
    }

    /// Key that selects this command
    pub fn key(self) -> u8 {
        match self {
            MenuCommand::EchoTest => b'1',
            MenuCommand::SendMessages => b'2',
            MenuCommand::ReceiveTest => b'3',
            MenuCommand::ContinuousEcho => b'4',
            MenuCommand::Statistics => b'5',
        }
    }

    /// Menu line label
    pub fn label(self) -> &'static str {
        match self {
            MenuCommand::EchoTest => "Echo Test (Type and see echo)",
            MenuCommand::SendMessages => "Send Test Message",
            MenuCommand::ReceiveTest => "Receive Data Test",
            MenuCommand::ContinuousEcho => "Continuous Echo Mode",
            MenuCommand::Statistics => "USB Bridge Statistics",
        }
    }
}

/// Check for the echo test quit key
pub fn is_quit_key(byte: u8) -> bool {
    matches!(byte, b'q' | b'Q')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_decode_to_commands() {
        for cmd in MenuCommand::ALL {
            assert_eq!(MenuCommand::from_key(cmd.key()), Some(cmd));
        }
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert_eq!(MenuCommand::from_key(b'0'), None);
        assert_eq!(MenuCommand::from_key(b'6'), None);
        assert_eq!(MenuCommand::from_key(b'a'), None);
        assert_eq!(MenuCommand::from_key(ESCAPE), None);
    }

    #[test]
    fn test_quit_key() {
        assert!(is_quit_key(b'q'));
        assert!(is_quit_key(b'Q'));
        assert!(!is_quit_key(b'x'));
    }
}
