use crate::config::{ADC_MAX, NUM_SENSORS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `v` - report the current sensor readings
    ReadValues,
    /// `t` - report the current thresholds
    ReadThresholds,
    /// `<index digit><value>` - set one sensor's threshold
    SetThreshold { index: usize, value: u16 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    Unknown,
    BadIndex,
    BadValue,
}

impl Command {
    /// Parse one received line, already stripped of its `\n` terminator.
    /// A trailing `\r` from CRLF senders is tolerated.
    pub fn parse(line: &[u8]) -> Result<Self, CommandError> {
        let line = match line.split_last() {
            Some((&b'\r', rest)) => rest,
            _ => line,
        };

        match line.first() {
            None => Err(CommandError::Empty),
            Some(&b'v') => Ok(Command::ReadValues),
            Some(&b't') => Ok(Command::ReadThresholds),
            Some(&(digit @ b'0'..=b'9')) => {
                let index = usize::from(digit - b'0');
                if index >= NUM_SENSORS {
                    return Err(CommandError::BadIndex);
                }
                let value = parse_number(&line[1..])?;
                Ok(Command::SetThreshold {
                    index,
                    value: value.min(ADC_MAX),
                })
            }
            Some(_) => Err(CommandError::Unknown),
        }
    }
}

/// Decimal number, optionally preceded by spaces. Oversized input saturates
/// and is clamped by the caller.
fn parse_number(bytes: &[u8]) -> Result<u16, CommandError> {
    let mut digits = bytes;
    while let Some((&b' ', rest)) = digits.split_first() {
        digits = rest;
    }

    if digits.is_empty() {
        return Err(CommandError::BadValue);
    }

    let mut value: u32 = 0;
    for &byte in digits {
        if !byte.is_ascii_digit() {
            return Err(CommandError::BadValue);
        }
        value = (value * 10 + u32::from(byte - b'0')).min(u32::from(u16::MAX));
    }

    Ok(value as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_values() {
        assert_eq!(Command::parse(b"v"), Ok(Command::ReadValues));
        assert_eq!(Command::parse(b"v\r"), Ok(Command::ReadValues));
    }

    #[test]
    fn read_thresholds() {
        assert_eq!(Command::parse(b"t"), Ok(Command::ReadThresholds));
    }

    #[test]
    fn set_threshold_packed_form() {
        // The backend sends index and value run together: "0450"
        assert_eq!(
            Command::parse(b"0450"),
            Ok(Command::SetThreshold {
                index: 0,
                value: 450
            })
        );
    }

    #[test]
    fn set_threshold_spaced_form() {
        assert_eq!(
            Command::parse(b"3 200"),
            Ok(Command::SetThreshold {
                index: 3,
                value: 200
            })
        );
    }

    #[test]
    fn threshold_value_clamps_to_full_scale() {
        assert_eq!(
            Command::parse(b"09999"),
            Ok(Command::SetThreshold {
                index: 0,
                value: ADC_MAX
            })
        );
        // Larger than u16 on the wire still saturates instead of wrapping
        assert_eq!(
            Command::parse(b"1123456789"),
            Ok(Command::SetThreshold {
                index: 1,
                value: ADC_MAX
            })
        );
    }

    #[test]
    fn index_beyond_panel_is_rejected() {
        assert_eq!(Command::parse(b"9123"), Err(CommandError::BadIndex));
        assert_eq!(Command::parse(b"4100"), Err(CommandError::BadIndex));
    }

    #[test]
    fn missing_or_malformed_value_is_rejected() {
        assert_eq!(Command::parse(b"2"), Err(CommandError::BadValue));
        assert_eq!(Command::parse(b"2 "), Err(CommandError::BadValue));
        assert_eq!(Command::parse(b"2 12x4"), Err(CommandError::BadValue));
    }

    #[test]
    fn empty_and_unknown_lines_are_rejected() {
        assert_eq!(Command::parse(b""), Err(CommandError::Empty));
        assert_eq!(Command::parse(b"\r"), Err(CommandError::Empty));
        assert_eq!(Command::parse(b"x"), Err(CommandError::Unknown));
    }
}
