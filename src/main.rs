use std::process::ExitCode;

fn main() -> ExitCode {
    match aws_knowledge_tool::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::FAILURE
        }
    }
}
