//! Disassembler for the T32 ISA.
//!
//! Reads a flat stream of 32-bit words and renders one line per word in
//! stream order from address 0. A word with an unassigned opcode renders as
//! an `UNKNOWN` entry; it never aborts the rest of the stream.

use arch::inst::Inst;

/// Reassemble little-endian words from a raw byte stream. Length is implied
/// by the file size; a trailing partial word is ignored.
pub fn words_from_bytes(bytes: &[u8]) -> Vec<u32> {
    bytes
        .chunks_exact(4)
        .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect()
}

/// One listing line: address, raw word, decoded text.
pub fn render(addr: u16, word: u32) -> String {
    let text = match Inst::from_bin(word) {
        Ok(inst) => inst.print(addr),
        Err(opcode) => format!("UNKNOWN (opcode: 0x{:02X})", opcode),
    };
    format!("0x{:04X}: 0x{:08X}  {}", addr, word, text)
}

pub fn disassemble_words(words: &[u32]) -> Vec<String> {
    words
        .iter()
        .enumerate()
        .map(|(addr, word)| render(addr as u16, *word))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_from_bytes() {
        let bytes = [0x78, 0x56, 0x34, 0x12, 0xFF, 0xFF, 0xFF, 0xFF, 0x00];
        assert_eq!(words_from_bytes(&bytes), vec![0x12345678, 0xFFFFFFFF]);
    }

    #[test]
    fn test_render_known_and_unknown() {
        assert_eq!(render(0, 0), "0x0000: 0x00000000  END");

        let word = 0b000001 << 26;
        assert_eq!(
            render(2, word),
            "0x0002: 0x04000000  UNKNOWN (opcode: 0x01)"
        );
    }

    #[test]
    fn test_unknown_does_not_stop_stream() {
        let words = [0, 0b000001 << 26, 0];
        let lines = disassemble_words(&words);
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("UNKNOWN"));
        assert!(lines[2].ends_with("END"));
    }
}
