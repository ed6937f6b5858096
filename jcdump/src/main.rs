use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Print the decoded structure of a JVM class file", long_about = None)]
struct Args {
    /// Class file to decode
    #[arg(short, long, value_name = "PATH")]
    file: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let contents = match fs::read(&args.file) {
        Ok(contents) => contents,
        Err(error) => {
            eprintln!("{}: {error}", args.file.display());
            return ExitCode::FAILURE;
        }
    };
    match jclass::decode(&contents) {
        Ok(class) => {
            print!("{}", class.to_pretty_fmt());
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{}: {error}", args.file.display());
            ExitCode::FAILURE
        }
    }
}
