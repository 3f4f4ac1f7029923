use std::num::ParseIntError;

use arch::{
    inst::Inst,
    op::{Args, Op},
    reg::Reg,
};

use crate::{error::Error, label::Labels};

// ----------------------------------------------------------------------------
// Line

/// One source line with its comment stripped. A line may carry a label
/// (`name:`), an instruction, or both (`LOOP: ADD R1, R1, R2`).
#[derive(Debug, Clone)]
pub struct Line {
    idx: usize,
    raw: String,
    code: String,
}

impl Line {
    pub fn new(idx: usize, raw: &str) -> Self {
        // Both `;` and `#` start a comment.
        let end = raw
            .find(|c: char| c == ';' || c == '#')
            .unwrap_or(raw.len());
        Line {
            idx,
            raw: raw.to_string(),
            code: raw[..end].to_string(),
        }
    }

    pub fn idx(&self) -> usize {
        self.idx
    }

    pub fn no(&self) -> usize {
        self.idx + 1
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Label defined on this line, if any: the token before the colon.
    pub fn label(&self) -> Option<&str> {
        let colon = self.code.find(':')?;
        self.code[..colon].split_whitespace().next()
    }

    /// Instruction text: everything after the label colon, or the whole
    /// (comment-stripped) line when there is no label.
    pub fn text(&self) -> &str {
        match self.code.find(':') {
            Some(colon) => &self.code[colon + 1..],
            None => &self.code,
        }
    }

    /// Blank and label-only lines consume no instruction address.
    pub fn is_blank(&self) -> bool {
        self.text().split_whitespace().next().is_none()
    }
}

// ----------------------------------------------------------------------------
// Code

/// A parsed instruction before label resolution, keyed by operand style.
#[derive(Debug, Clone)]
pub enum Code {
    Reg3 { op: Op, rd: Reg, rs1: Reg, rs2: Reg },
    Mem { op: Op, rt: Reg, imm: u16, base: Reg },
    ImmArith { op: Op, rd: Reg, rs: Reg, imm: u16 },
    Branch { op: Op, rs: Reg, rt: Reg, target: Target },
    Jump { op: Op, target: Target },
    End,
}

impl Code {
    /// Tokenize `mnemonic arg, arg, ...` and dispatch on the descriptor's
    /// operand style. Operands are whitespace/comma delimited.
    pub fn parse(text: &str) -> Result<Code, Error> {
        let tokens: Vec<&str> = text
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .collect();
        let (name, args) = match tokens.split_first() {
            Some(split) => split,
            None => return Err(Error::MissingOperands),
        };
        let op = Op::parse(name).map_err(|_| Error::UnknownInstruction(name.to_string()))?;

        // Get argument by index and parse it as a register.
        macro_rules! reg {
            ($index:expr) => {{
                let arg = args.get($index).ok_or(Error::MissingOperands)?;
                Reg::parse(arg).map_err(|_| Error::InvalidRegister(arg.to_string()))?
            }};
        }

        match op.args() {
            Args::ThreeReg => Ok(Code::Reg3 {
                op,
                rd: reg!(0),
                rs1: reg!(1),
                rs2: reg!(2),
            }),
            Args::OffsetReg => {
                let rt = reg!(0);
                let arg = args.get(1).ok_or(Error::MissingOperands)?;
                // `imm(base)`, or a bare immediate with base defaulting to $r0.
                let (imm, base) = match arg.split_once('(') {
                    Some((imm, base)) => (
                        parse_imm(imm).map_err(|_| Error::InvalidImmediate(imm.to_string()))?,
                        Reg::parse(base).map_err(|_| Error::InvalidRegister(base.to_string()))?,
                    ),
                    None => (
                        parse_imm(arg).map_err(|_| Error::InvalidImmediate(arg.to_string()))?,
                        Reg::R0,
                    ),
                };
                Ok(Code::Mem { op, rt, imm, base })
            }
            Args::ImmArith => {
                let (rd, rs) = (reg!(0), reg!(1));
                let arg = args.get(2).ok_or(Error::MissingOperands)?;
                let imm = parse_imm(arg).map_err(|_| Error::InvalidImmediate(arg.to_string()))?;
                Ok(Code::ImmArith { op, rd, rs, imm })
            }
            Args::Branch => {
                // Three-operand form compares two registers; the two-operand
                // form compares against $r0.
                if args.len() >= 3 {
                    Ok(Code::Branch {
                        op,
                        rs: reg!(0),
                        rt: reg!(1),
                        target: Target(args[2].to_string()),
                    })
                } else {
                    let rs = reg!(0);
                    let arg = args.get(1).ok_or(Error::MissingOperands)?;
                    Ok(Code::Branch {
                        op,
                        rs,
                        rt: Reg::R0,
                        target: Target(arg.to_string()),
                    })
                }
            }
            Args::Address => {
                let arg = args.first().ok_or(Error::MissingOperands)?;
                Ok(Code::Jump {
                    op,
                    target: Target(arg.to_string()),
                })
            }
            Args::None => Ok(Code::End),
        }
    }

    /// Resolve against the label table at instruction index `pc` and build
    /// the encodable instruction.
    pub fn resolve(&self, labels: &Labels, pc: u16) -> Result<Inst, Error> {
        Ok(match self {
            Code::Reg3 { op, rd, rs1, rs2 } => Inst::Reg3 {
                op: *op,
                rd: (*rd).into(),
                rs1: (*rs1).into(),
                rs2: (*rs2).into(),
            },
            Code::Mem { op, rt, imm, base } => Inst::RegImm {
                op: *op,
                rs: (*base).into(),
                rt: (*rt).into(),
                imm: *imm,
            },
            Code::ImmArith { op, rd, rs, imm } => Inst::RegImm {
                op: *op,
                rs: (*rs).into(),
                rt: (*rd).into(),
                imm: *imm,
            },
            Code::Branch { op, rs, rt, target } => Inst::RegImm {
                op: *op,
                rs: (*rs).into(),
                rt: (*rt).into(),
                imm: target.relative(labels, pc)?,
            },
            Code::Jump { op, target } => Inst::Jump {
                op: *op,
                addr: target.absolute(labels)?,
            },
            Code::End => Inst::End,
        })
    }
}

// ----------------------------------------------------------------------------
// Target

/// A branch or jump operand, resolved as a label first and as a literal
/// otherwise.
#[derive(Debug, Clone)]
pub struct Target(pub String);

impl Target {
    /// Branch form: relative to the instruction after the branch, so a
    /// label at `addr` encodes as `addr - pc - 1` in two's complement.
    pub fn relative(&self, labels: &Labels, pc: u16) -> Result<u16, Error> {
        match labels.get(&self.0) {
            Some(addr) => Ok((addr as i32 - pc as i32 - 1) as u16),
            None => parse_imm(&self.0).map_err(|_| Error::InvalidImmediate(self.0.clone())),
        }
    }

    /// Jump form: labels give the absolute instruction index.
    pub fn absolute(&self, labels: &Labels) -> Result<u16, Error> {
        match labels.get(&self.0) {
            Some(addr) => Ok(addr),
            None => parse_imm(&self.0).map_err(|_| Error::InvalidImmediate(self.0.clone())),
        }
    }
}

/// Immediate literal: `0x`/`0o`/`0b` prefixed, or decimal with an optional
/// sign. Signed values land in two's-complement wire form.
pub fn parse_imm(s: &str) -> Result<u16, ParseIntError> {
    if let Some(hex) = s.strip_prefix("0x") {
        u16::from_str_radix(hex, 16)
    } else if let Some(oct) = s.strip_prefix("0o") {
        u16::from_str_radix(oct, 8)
    } else if let Some(bin) = s.strip_prefix("0b") {
        u16::from_str_radix(bin, 2)
    } else {
        s.parse::<i32>().map(|v| v as u16)
    }
}
