use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = notes_merger::run() {
        eprintln!("error: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
