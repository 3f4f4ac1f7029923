use color_print::cformat;

use crate::fmt;
use crate::op::{Op, Shape};

/// A decoded instruction: the descriptor plus the fields of its shape.
///
/// Register operands are raw 5-bit field values, not [`crate::reg::Reg`],
/// so that decoding stays total for arbitrary words. Branch immediates are
/// kept in two's-complement wire form; rendering sign-extends them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inst {
    Reg3 { op: Op, rd: u8, rs1: u8, rs2: u8 },
    RegImm { op: Op, rs: u8, rt: u8, imm: u16 },
    Jump { op: Op, addr: u16 },
    End,
}

impl Inst {
    pub fn to_bin(&self) -> u32 {
        match *self {
            Inst::Reg3 { op, rd, rs1, rs2 } => fmt::enc_rrr(op.into(), rd, rs1, rs2),
            Inst::RegImm { op, rs, rt, imm } => fmt::enc_rri(op.into(), rs, rt, imm),
            Inst::Jump { op, addr } => fmt::enc_j(op.into(), addr),
            Inst::End => 0,
        }
    }

    /// Decode one word. Unknown opcodes come back as `Err` carrying the raw
    /// opcode so the caller can report them and keep going.
    pub fn from_bin(bin: u32) -> Result<Inst, u8> {
        let opcode = fmt::opcode(bin);
        let op = Op::try_from(opcode).map_err(|_| opcode)?;
        Ok(match op.shape() {
            Shape::RegReg => {
                let (rd, rs1, rs2) = fmt::dec_rrr(bin);
                Inst::Reg3 { op, rd, rs1, rs2 }
            }
            Shape::RegImm => {
                let (rs, rt, imm) = fmt::dec_rri(bin);
                Inst::RegImm { op, rs, rt, imm }
            }
            Shape::Jump => Inst::Jump {
                op,
                addr: fmt::dec_j(bin),
            },
            Shape::Terminator => Inst::End,
        })
    }

    pub fn op(&self) -> Op {
        match *self {
            Inst::Reg3 { op, .. } | Inst::RegImm { op, .. } | Inst::Jump { op, .. } => op,
            Inst::End => Op::END,
        }
    }
}

impl Inst {
    /// Mnemonic text for one instruction at `addr`. Branch offsets are
    /// sign-extended and annotated with the target `addr + 1 + offset`.
    pub fn print(&self, addr: u16) -> String {
        match *self {
            Inst::Reg3 { op, rd, rs1, rs2 } => {
                format!("{:<4} $r{}, $r{}, $r{}", op.to_string(), rd, rs1, rs2)
            }
            Inst::RegImm { op, rs, rt, imm } => match op {
                Op::LOAD | Op::STORE => {
                    format!("{:<4} $r{}, {}($r{})", op.to_string(), rt, imm, rs)
                }
                Op::BEQ | Op::BGE => {
                    let offset = imm as i16;
                    format!(
                        "{:<4} $r{}, $r{}, {} (-> 0x{:04X})",
                        op.to_string(),
                        rs,
                        rt,
                        offset,
                        addr as i32 + 1 + offset as i32
                    )
                }
                _ => format!("{:<4} $r{}, $r{}, {}", op.to_string(), rt, rs, imm),
            },
            Inst::Jump { op, addr } => format!("{:<4} 0x{:04X}", op.to_string(), addr),
            Inst::End => "END".to_string(),
        }
    }

    pub fn cformat(&self, addr: u16) -> String {
        match *self {
            Inst::Reg3 { op, .. } | Inst::RegImm { op, .. } | Inst::Jump { op, .. } => {
                let text = self.print(addr);
                let (name, rest) = text.split_at(op.to_string().len());
                cformat!("<red>{}</><blue>{}</>", name, rest)
            }
            Inst::End => cformat!("<red>END</>"),
        }
    }
}
