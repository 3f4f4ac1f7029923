use color_print::cprintln;

use t32disasm::{disassemble_words, words_from_bytes};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about = "Disassembler for the T32 ISA", help_template = HELP_TEMPLATE)]
struct Args {
    /// Binary instruction stream
    #[clap(default_value = "out.t32.bin")]
    input: String,
}

fn main() {
    use clap::Parser;

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(
            e.kind(),
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
        ) =>
        {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    let bytes = match std::fs::read(&args.input) {
        Ok(bytes) => bytes,
        Err(e) => {
            cprintln!("<red,bold>error</>: Failed to open file: {}: {}", args.input, e);
            std::process::exit(1);
        }
    };

    println!("Disassembly of {}:", args.input);
    println!("========================================");
    for line in disassemble_words(&words_from_bytes(&bytes)) {
        println!("{}", line);
    }
}
