// Create the Error, ErrorKind, ResultExt, and Result types.
// Result is a typedef of std `Result` with the error type our own `Error`.
// ResultExt adds the `chain_err` trait method.
use error_chain::*;

error_chain! {

    foreign_links {
        Io(::std::io::Error);
        Json(::serde_json::Error);
    }

    errors {
        ResourceMissing(name: String) {
            description("bundled maze resource missing")
            display("bundled maze resource '{}' could not be fetched", name)
        }
        InvalidBundledMaze(name: String, errors: Vec<String>) {
            description("bundled maze failed validation")
            display("bundled maze '{}' is invalid: {}", name, errors.join("; "))
        }
    }
}
