use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Instruction field layout class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// opcode | rd | rs1 | rs2
    RegReg,
    /// opcode | rs | rt | imm16
    RegImm,
    /// opcode | addr16
    Jump,
    /// All-zero word.
    Terminator,
}

/// Operand syntax accepted by the assembler for one mnemonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Args {
    /// `rd, rs1, rs2`
    ThreeReg,
    /// `rt, imm(base)` or `rt, imm` (base defaults to $r0)
    OffsetReg,
    /// `rd, rs, imm`
    ImmArith,
    /// `rs, rt, target` or `rs, target` (rt defaults to $r0)
    Branch,
    /// `target`
    Address,
    /// No operands.
    None,
}

/// The instruction format table: one variant per mnemonic, the `#[repr(u8)]`
/// discriminant is the 6-bit opcode. Mnemonic lookup is case-sensitive.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    TryFromPrimitive,
    IntoPrimitive,
    EnumString,
    Display,
)]
#[repr(u8)]
pub enum Op {
    ADD = 0b010000,
    LOAD = 0b100000,
    STORE = 0b100001,
    ADDI = 0b100010,
    SUBI = 0b100011,
    BEQ = 0b100100,
    BGE = 0b100101,
    JUMP = 0b110000,
    END = 0b000000,
}

impl Op {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.parse::<Self>() {
            Ok(a) => Ok(a),
            Err(_) => Err(format!("Unknown instruction: {s}")),
        }
    }

    pub fn shape(&self) -> Shape {
        match self {
            Op::ADD => Shape::RegReg,
            Op::LOAD | Op::STORE | Op::ADDI | Op::SUBI | Op::BEQ | Op::BGE => Shape::RegImm,
            Op::JUMP => Shape::Jump,
            Op::END => Shape::Terminator,
        }
    }

    pub fn args(&self) -> Args {
        match self {
            Op::ADD => Args::ThreeReg,
            Op::LOAD | Op::STORE => Args::OffsetReg,
            Op::ADDI | Op::SUBI => Args::ImmArith,
            Op::BEQ | Op::BGE => Args::Branch,
            Op::JUMP => Args::Address,
            Op::END => Args::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mnemonic_lookup() {
        assert_eq!(Op::parse("ADD"), Ok(Op::ADD));
        assert_eq!(Op::parse("END"), Ok(Op::END));
        // Mnemonics are case-sensitive.
        assert!(Op::parse("add").is_err());
        assert!(Op::parse("BADOP").is_err());
    }

    #[test]
    fn test_opcode_lookup() {
        assert_eq!(Op::try_from(0b010000_u8).unwrap(), Op::ADD);
        assert_eq!(Op::try_from(0b110000_u8).unwrap(), Op::JUMP);
        assert_eq!(Op::try_from(0b000000_u8).unwrap(), Op::END);
        assert!(Op::try_from(0b000001_u8).is_err());
        assert!(Op::try_from(0b111111_u8).is_err());
    }

    #[test]
    fn test_opcodes_unique() {
        let all = [
            Op::ADD,
            Op::LOAD,
            Op::STORE,
            Op::ADDI,
            Op::SUBI,
            Op::BEQ,
            Op::BGE,
            Op::JUMP,
            Op::END,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(u8::from(*a), u8::from(*b));
                assert_ne!(a.to_string(), b.to_string());
            }
        }
    }
}
