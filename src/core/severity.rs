//! Severity bitmask definitions
//!
//! Severities are independent categories rather than an ordered scale. Each
//! named level occupies its own bit, so a filter can enable any combination of
//! them and a message is accepted when its bit intersects the filter.

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SeverityRepr", into = "String")]
pub struct Severity(u8);

impl Severity {
    pub const NONE: Severity = Severity(0);
    pub const INFO: Severity = Severity(1);
    pub const WARN: Severity = Severity(1 << 1);
    pub const ERR: Severity = Severity(1 << 2);
    pub const FREQ: Severity = Severity(1 << 3);
    pub const ALL: Severity = Severity(
        Self::INFO.0 | Self::WARN.0 | Self::ERR.0 | Self::FREQ.0,
    );

    /// Named single-bit levels, in bit order.
    pub const LEVELS: [Severity; 4] = [Self::INFO, Self::WARN, Self::ERR, Self::FREQ];

    /// Build a severity from raw bits, rejecting bits outside [`Severity::ALL`].
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if bits & !Self::ALL.0 == 0 {
            Some(Severity(bits))
        } else {
            None
        }
    }

    /// Build a severity from raw bits, discarding unknown bits.
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Severity(bits & Self::ALL.0)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn contains(self, other: Severity) -> bool {
        self.0 & other.0 == other.0
    }

    /// The gating predicate: a message at `level` is delivered under `filter`
    /// iff the two masks share a bit. `NONE` never passes.
    #[inline]
    pub const fn passes(filter: Severity, level: Severity) -> bool {
        filter.0 & level.0 != 0
    }

    fn name(self) -> Option<&'static str> {
        match self {
            Severity::NONE => Some("NONE"),
            Severity::INFO => Some("INFO"),
            Severity::WARN => Some("WARN"),
            Severity::ERR => Some("ERR"),
            Severity::FREQ => Some("FREQ"),
            Severity::ALL => Some("ALL"),
            _ => None,
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(self) -> Option<colored::Color> {
        use colored::Color::*;
        match self {
            Severity::INFO => Some(Green),
            Severity::WARN => Some(Yellow),
            Severity::ERR => Some(Red),
            Severity::FREQ => Some(BrightBlack),
            _ => None,
        }
    }
}

impl Default for Severity {
    fn default() -> Self {
        Severity::INFO
    }
}

impl BitOr for Severity {
    type Output = Severity;

    fn bitor(self, rhs: Severity) -> Severity {
        Severity(self.0 | rhs.0)
    }
}

impl BitOrAssign for Severity {
    fn bitor_assign(&mut self, rhs: Severity) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Severity {
    type Output = Severity;

    fn bitand(self, rhs: Severity) -> Severity {
        Severity(self.0 & rhs.0)
    }
}

impl BitAndAssign for Severity {
    fn bitand_assign(&mut self, rhs: Severity) {
        self.0 &= rhs.0;
    }
}

impl Not for Severity {
    type Output = Severity;

    fn not(self) -> Severity {
        Severity(!self.0 & Self::ALL.0)
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> u8 {
        severity.0
    }
}

impl TryFrom<u8> for Severity {
    type Error = LoggerError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        Severity::from_bits(bits)
            .ok_or_else(|| LoggerError::invalid_severity(format!("bits out of range: {:#x}", bits)))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.name() {
            return f.write_str(name);
        }

        let mut first = true;
        for level in Self::LEVELS.iter().filter(|level| self.contains(**level)) {
            if !first {
                f.write_str("|")?;
            }
            f.write_str(level.name().unwrap_or("?"))?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(LoggerError::invalid_severity("empty severity"));
        }

        let mut mask = Severity::NONE;
        for part in trimmed.split('|').map(str::trim) {
            mask |= match part.to_uppercase().as_str() {
                "NONE" => Severity::NONE,
                "INFO" => Severity::INFO,
                "WARN" | "WARNING" => Severity::WARN,
                "ERR" | "ERROR" => Severity::ERR,
                "FREQ" => Severity::FREQ,
                "ALL" => Severity::ALL,
                other => match other.parse::<u8>() {
                    Ok(bits) => Severity::try_from(bits)?,
                    Err(_) => {
                        return Err(LoggerError::invalid_severity(format!(
                            "unknown severity '{}'",
                            part
                        )))
                    }
                },
            };
        }
        Ok(mask)
    }
}

impl From<Severity> for String {
    fn from(severity: Severity) -> String {
        severity.to_string()
    }
}

/// Wire form accepted when deserializing: either the text form or raw bits.
#[derive(Deserialize)]
#[serde(untagged)]
enum SeverityRepr {
    Bits(u8),
    Text(String),
}

impl TryFrom<SeverityRepr> for Severity {
    type Error = LoggerError;

    fn try_from(repr: SeverityRepr) -> Result<Self, Self::Error> {
        match repr {
            SeverityRepr::Bits(bits) => Severity::try_from(bits),
            SeverityRepr::Text(text) => text.parse(),
        }
    }
}
