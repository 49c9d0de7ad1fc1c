use std::process::ExitCode;

use grantflow_core::Profile;

fn main() -> ExitCode {
    grantflow::run(Profile::standard())
}
