use std::env::args_os;
use std::process::ExitCode;

use placeholder_icons::{generate_icons, CLIParser};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match generate_icons(&arguments) {
        Ok(_) => {
            println!("Icons created successfully.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Icon generation failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
