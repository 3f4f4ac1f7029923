use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use strum::Display;

/// The eight general-purpose registers. The wire format reserves 5 bits per
/// register field; only 0-7 are valid at the source level.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Default,
    TryFromPrimitive,
    IntoPrimitive,
    Display,
)]
#[repr(u8)]
pub enum Reg {
    #[default]
    #[strum(serialize = "$r0")]
    R0,
    #[strum(serialize = "$r1")]
    R1,
    #[strum(serialize = "$r2")]
    R2,
    #[strum(serialize = "$r3")]
    R3,
    #[strum(serialize = "$r4")]
    R4,
    #[strum(serialize = "$r5")]
    R5,
    #[strum(serialize = "$r6")]
    R6,
    #[strum(serialize = "$r7")]
    R7,
}

impl Reg {
    /// Accepts `R<n>`, `r<n>`, `$r<n>`, `$R<n>` and the alias `$zero`,
    /// with trailing punctuation stripped first.
    pub fn parse(s: &str) -> Result<Self, String> {
        let t = s
            .trim()
            .trim_end_matches(|c: char| c == ',' || c == ')' || c.is_whitespace());
        if t == "$zero" {
            return Ok(Reg::R0);
        }
        let digits = t
            .strip_prefix("$r")
            .or_else(|| t.strip_prefix("$R"))
            .or_else(|| t.strip_prefix('R'))
            .or_else(|| t.strip_prefix('r'));
        match digits
            .and_then(|d| d.parse::<u8>().ok())
            .and_then(|n| Reg::try_from(n).ok())
        {
            Some(reg) => Ok(reg),
            None => Err(format!("Unknown reg name: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!(Reg::parse("R3"), Ok(Reg::R3));
        assert_eq!(Reg::parse("r3"), Ok(Reg::R3));
        assert_eq!(Reg::parse("$r3"), Ok(Reg::R3));
        assert_eq!(Reg::parse("$R3"), Ok(Reg::R3));
        assert_eq!(Reg::parse("$zero"), Ok(Reg::R0));
        assert_eq!(Reg::parse("R1,"), Ok(Reg::R1));
    }

    #[test]
    fn test_parse_rejects() {
        assert!(Reg::parse("R8").is_err());
        assert!(Reg::parse("$r12").is_err());
        assert!(Reg::parse("Rx").is_err());
        assert!(Reg::parse("hoge").is_err());
    }

    #[test]
    fn test_into_field() {
        assert_eq!(u8::from(Reg::R0), 0);
        assert_eq!(u8::from(Reg::R7), 7);
    }
}
