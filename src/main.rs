use runtests::cli;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    runtests::init();
    cli::run().await
}
