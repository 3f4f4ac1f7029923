//! Two-pass assembler for the T32 ISA.
//!
//! Pass 1 collects label addresses; pass 2 re-scans the source, encodes each
//! instruction against the label table and appends it to the program.
//! Per-line errors are reported and the line is skipped; only file I/O
//! failures abort a run.

pub mod error;
pub mod label;
pub mod parser;

pub use error::Error;

use label::Labels;
use parser::{Code, Line};

/// A reported problem: source line index plus the error.
pub type Diag = (usize, Error);

/// One assembly run. Owns the source lines, the label table and the program
/// being built; nothing is shared across runs.
pub struct Assembler {
    lines: Vec<Line>,
    labels: Labels,
    /// Encoded words with the source line index that produced each.
    program: Vec<(u32, usize)>,
}

impl Assembler {
    pub fn new(source: &str) -> Self {
        let lines = source
            .lines()
            .enumerate()
            .map(|(idx, raw)| Line::new(idx, raw))
            .collect();
        Assembler {
            lines,
            labels: Labels::new(),
            program: Vec::new(),
        }
    }

    /// Pass 1: record each label at the count of instruction lines seen so
    /// far. Label-only and blank lines consume no address. Duplicate labels
    /// keep their first address and come back as warnings.
    pub fn collect_labels(&mut self) -> Vec<Diag> {
        let mut warnings = Vec::new();
        let mut pc: u16 = 0;
        for line in &self.lines {
            if let Some(name) = line.label() {
                if self.labels.define(name, pc).is_some() {
                    warnings.push((line.idx(), Error::RedefinedLabel(name.to_string())));
                }
            }
            if !line.is_blank() {
                pc += 1;
            }
        }
        warnings
    }

    /// Pass 2: encode every instruction line. A line that fails to parse
    /// emits no word, so the current instruction index is always the
    /// emitted-word count.
    pub fn emit(&mut self) -> Vec<Diag> {
        let mut diags = Vec::new();
        for line in &self.lines {
            if line.is_blank() {
                continue;
            }
            let pc = self.program.len() as u16;
            let encoded = Code::parse(line.text()).and_then(|code| code.resolve(&self.labels, pc));
            match encoded {
                Ok(inst) => self.program.push((inst.to_bin(), line.idx())),
                Err(err) => diags.push((line.idx(), err)),
            }
        }
        diags
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn program(&self) -> &[(u32, usize)] {
        &self.program
    }

    pub fn words(&self) -> Vec<u32> {
        self.program.iter().map(|(word, _)| *word).collect()
    }
}

/// Assemble source text in one call: encoded words plus every diagnostic
/// from both passes.
pub fn assemble_source(source: &str) -> (Vec<u32>, Vec<Diag>) {
    let mut asm = Assembler::new(source);
    let mut diags = asm.collect_labels();
    diags.extend(asm.emit());
    (asm.words(), diags)
}
