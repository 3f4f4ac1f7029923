use std::collections::HashMap;
use std::io::Write;

use color_print::cprintln;

use t32asm::{Assembler, Diag, Error};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about = "Assembler for the T32 ISA", help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file
    input: String,

    /// Output file
    #[clap(default_value = "out.t32.bin")]
    output: String,

    /// Dump annotated listing
    #[clap(short, long)]
    dump: bool,
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

    println!("T32 Assembler");

    println!("1. Read Source and Collect Labels");
    println!("  < {}", args.input);
    let source = match std::fs::read_to_string(&args.input) {
        Ok(source) => source,
        Err(e) => {
            cprintln!("<red,bold>error</>: {}", Error::FileOpen(args.input.clone(), e));
            std::process::exit(1);
        }
    };

    let mut asm = Assembler::new(&source);
    let warnings = asm.collect_labels();
    print_diags(&asm, &args.input, &warnings);
    println!("  - found {} labels", asm.labels().len());

    println!("2. Resolve Labels and Generate Binary");
    let diags = asm.emit();
    print_diags(&asm, &args.input, &diags);
    for (addr, (word, idx)) in asm.program().iter().enumerate() {
        println!(
            "0x{:04X}: 0x{:08X}  ; {}",
            addr,
            word,
            asm.lines()[*idx].text().trim()
        );
    }

    println!("  > {}", args.output);
    let mut file = match std::fs::File::create(&args.output) {
        Ok(file) => file,
        Err(e) => {
            cprintln!("<red,bold>error</>: {}", Error::FileCreate(args.output.clone(), e));
            std::process::exit(1);
        }
    };
    for (word, _) in asm.program() {
        if let Err(e) = file.write_all(&word.to_le_bytes()) {
            cprintln!("<red,bold>error</>: {}", Error::FileWrite(args.output.clone(), e));
            std::process::exit(1);
        }
    }

    println!("Generated {} instructions.", asm.program().len());

    if args.dump {
        print_dump(&asm);
    }
}

fn print_diags(asm: &Assembler, file: &str, diags: &[Diag]) {
    for (idx, err) in diags {
        err.print_diag(file, *idx, asm.lines()[*idx].raw());
    }
}

fn print_dump(asm: &Assembler) {
    let mut by_line: HashMap<usize, (usize, u32)> = HashMap::new();
    for (addr, (word, idx)) in asm.program().iter().enumerate() {
        by_line.insert(*idx, (addr, *word));
    }

    println!("------+------+-------------+--------------------------------");
    for line in asm.lines() {
        match by_line.get(&line.idx()) {
            Some((pc, bin)) => cprintln!(
                "| {:>4} | <green>{:04X}</> | {:02X} {:02X} {:02X} {:02X} | {}",
                line.no(),
                pc,
                (bin >> 24) & 0xFF,
                (bin >> 16) & 0xFF,
                (bin >> 8) & 0xFF,
                bin & 0xFF,
                line.raw()
            ),
            None => println!("| {:>4} |      |             | {}", line.no(), line.raw()),
        }
    }
    println!("------+------+-------------+--------------------------------");
}
