//! Bit packers for the three instruction shapes.
//!
//! Every word carries the 6-bit opcode in bits 31-26. The remaining 26 bits
//! are laid out per shape:
//!
//! - RegReg: 25-21 rd, 20-16 rs1, 15-11 rs2, 10-0 zero
//! - RegImm: 25-21 rs, 20-16 rt, 15-0 imm
//! - Jump:   25-16 zero, 15-0 addr
//!
//! Encoding assumes in-range fields (the caller rejects out-of-range
//! registers before getting here); decoding masks every field and is total.

pub fn enc_rrr(op: u8, rd: u8, rs1: u8, rs2: u8) -> u32 {
    ((op as u32) << 26) | ((rd as u32) << 21) | ((rs1 as u32) << 16) | ((rs2 as u32) << 11)
}

pub fn enc_rri(op: u8, rs: u8, rt: u8, imm: u16) -> u32 {
    ((op as u32) << 26) | ((rs as u32) << 21) | ((rt as u32) << 16) | (imm as u32)
}

pub fn enc_j(op: u8, addr: u16) -> u32 {
    ((op as u32) << 26) | (addr as u32)
}

pub fn opcode(bin: u32) -> u8 {
    ((bin >> 26) & 0x3F) as u8
}

pub fn dec_rrr(bin: u32) -> (u8, u8, u8) {
    (
        ((bin >> 21) & 0x1F) as u8,
        ((bin >> 16) & 0x1F) as u8,
        ((bin >> 11) & 0x1F) as u8,
    )
}

pub fn dec_rri(bin: u32) -> (u8, u8, u16) {
    (
        ((bin >> 21) & 0x1F) as u8,
        ((bin >> 16) & 0x1F) as u8,
        (bin & 0xFFFF) as u16,
    )
}

pub fn dec_j(bin: u32) -> u16 {
    (bin & 0xFFFF) as u16
}
