use std::process::ExitCode;

fn main() -> ExitCode {
    match jcrs::cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
