use std::process::ExitCode;

fn main() -> ExitCode {
    minimart_observability::init();
    minimart_cli::run()
}
