//! The line-oriented command loop.

use nestkv_core::KvStore;
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Help Menu
---------------------------------------------------------------------------
READ <key>        Reads and prints the value associated with key. If the
                  value is not present an error is printed.
WRITE <key> <val> Stores val in key.
DELETE <key>      Removes a key from the store. Future READ commands on
                  that key will return an error.
START             Start a transaction.
COMMIT            Commit a transaction. All actions in the current
                  transaction are committed to the parent transaction or
                  the root store. If there is no current transaction an
                  error is output.
ABORT             Abort a transaction. All actions in the current
                  transaction are discarded.
QUIT              Exit the shell cleanly.
---------------------------------------------------------------------------
";

/// Runs the command loop over one store until QUIT or end of input.
///
/// Lines are split on single spaces: the first token is the command
/// (case-insensitive), the rest are arguments (case-sensitive, taken
/// as-is — a doubled space yields an empty argument, which the store
/// rejects). Blank lines and unrecognized commands are skipped.
///
/// # Errors
///
/// Returns an error only when reading from `input` or writing to `output`
/// fails; store-level errors are reported on `output` and the loop
/// continues.
pub fn run(input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    let mut store = KvStore::new();

    for line in input.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        let tokens: Vec<&str> = line.split(' ').collect();

        match tokens[0].to_uppercase().as_str() {
            "WRITE" => {
                if tokens.len() <= 2 {
                    writeln!(output, "missing arguments need <key>, <val>")?;
                    continue;
                }
                if let Err(err) = store.set(tokens[1], tokens[2]) {
                    writeln!(output, "unable to create: {err}")?;
                }
            }
            "READ" => {
                if tokens.len() <= 1 {
                    writeln!(output, "missing arguments need <key>")?;
                    continue;
                }
                match store.get(tokens[1]) {
                    Some(value) => writeln!(output, "{value}")?,
                    None => writeln!(output, "Key not found: {}", tokens[1])?,
                }
            }
            "DELETE" => {
                if tokens.len() <= 1 {
                    writeln!(output, "missing arguments need <key>")?;
                    continue;
                }
                store.delete(tokens[1]);
            }
            "START" => store.begin(),
            "COMMIT" => {
                if let Err(err) = store.commit() {
                    writeln!(output, "unable to commit transaction: {err}")?;
                }
            }
            "ABORT" => {
                if let Err(err) = store.abort() {
                    writeln!(output, "unable to abort transaction: {err}")?;
                }
            }
            "HELP" => write!(output, "{HELP}")?,
            "QUIT" => {
                writeln!(output, "Exiting...")?;
                return Ok(());
            }
            _ => {}
        }
    }

    Ok(())
}
