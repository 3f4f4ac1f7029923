use t32asm::assemble_source;
use t32disasm::{disassemble_words, render};

#[test]
fn test_assembled_branch_reconstructs_target() {
    let (words, diags) = assemble_source("LOOP: ADD R1,R1,R2\nBEQ R1,R0,LOOP\nEND\n");
    assert!(diags.is_empty());

    let lines = disassemble_words(&words);
    assert_eq!(lines[0], "0x0000: 0x40211000  ADD  $r1, $r1, $r2");
    // Offset -2 at address 1 points back at LOOP's address 0; the label
    // name itself is not recoverable.
    assert_eq!(lines[1], "0x0001: 0x9020FFFE  BEQ  $r1, $r0, -2 (-> 0x0000)");
    assert_eq!(lines[2], "0x0002: 0x00000000  END");
}

#[test]
fn test_round_trip_operand_values() {
    let source = "\
LOAD R1, 100(R2)
STORE R3, 8
ADDI R4, R5, 42
SUBI R6, R6, 1
JUMP 5
END
";
    let (words, diags) = assemble_source(source);
    assert!(diags.is_empty());

    let lines = disassemble_words(&words);
    assert!(lines[0].ends_with("LOAD $r1, 100($r2)"));
    assert!(lines[1].ends_with("STORE $r3, 8($r0)"));
    assert!(lines[2].ends_with("ADDI $r4, $r5, 42"));
    assert!(lines[3].ends_with("SUBI $r6, $r6, 1"));
    assert!(lines[4].ends_with("JUMP 0x0005"));
    assert!(lines[5].ends_with("END"));
}

#[test]
fn test_unknown_opcode_marker_mid_stream() {
    let (mut words, _) = assemble_source("ADD R1, R2, R3\nEND\n");
    words.insert(1, 0b111111 << 26);

    let lines = disassemble_words(&words);
    assert_eq!(lines.len(), 3);
    assert!(lines[1].ends_with("UNKNOWN (opcode: 0x3F)"));
    assert!(lines[2].ends_with("END"));
}

#[test]
fn test_forward_branch_target() {
    let (words, diags) = assemble_source("BGE R1, R2, SKIP\nADD R1, R1, R1\nSKIP: END\n");
    assert!(diags.is_empty());
    assert_eq!(
        render(0, words[0]),
        "0x0000: 0x94220001  BGE  $r1, $r2, 1 (-> 0x0002)"
    );
}
