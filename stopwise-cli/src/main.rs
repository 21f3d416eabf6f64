//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use stopwise_cli::CliError;

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn main() {
    match stopwise_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("stopwise: {err}");
            std::process::exit(1);
        }
    }
}
