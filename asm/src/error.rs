use color_print::cprintln;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown instruction: `{0}`")]
    UnknownInstruction(String),

    #[error("Missing operands")]
    MissingOperands,

    #[error("Invalid register: `{0}`")]
    InvalidRegister(String),

    #[error("Invalid immediate: `{0}`")]
    InvalidImmediate(String),

    #[error("Re-defined label: `{0}`")]
    RedefinedLabel(String),

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),
}

impl Error {
    /// Print a diagnostic with file location and the offending line.
    /// Per-line errors never abort the run; the caller keeps going.
    pub fn print_diag(&self, file: &str, line_idx: usize, line: &str) {
        match self {
            Error::RedefinedLabel(_) => cprintln!("<yellow,bold>warning</>: {}", self),
            _ => cprintln!("<red,bold>error</>: {}", self),
        }

        let line_num = line_idx + 1;
        cprintln!("     <blue>--></> <underline>{}:{}</>", file, line_num);
        cprintln!("      <blue>|</>");
        cprintln!(" <blue>{:>4} |</> {}", line_num, line);
        cprintln!("      <blue>|</>");
    }
}
