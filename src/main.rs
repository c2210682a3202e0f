use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdfside-docx", about = "Convert PDF files to DOCX")]
struct Args {
    /// Input PDF file
    #[arg(value_name = "input.pdf")]
    input: PathBuf,
    /// Output DOCX file
    #[arg(value_name = "output.docx")]
    output: PathBuf,
}

fn main() {
    env_logger::init();

    // Argument errors exit with 1; --help and --version stay at 0.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    match pdfside_docx::convert_pdf_to_docx(&args.input, &args.output) {
        Ok(()) => println!("Conversion successful: {}", args.output.display()),
        Err(e) => {
            eprintln!("Error during conversion: {e}");
            std::process::exit(1);
        }
    }
}
