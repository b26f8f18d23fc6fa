//! REPL Session
//!
//! Holds everything a running session owns and drives the read-dispatch loop.

use std::collections::HashMap;
use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::cache::Cache;
use crate::client::PokeApi;
use crate::error::Result;
use crate::models::Pokemon;
use crate::repl::commands::{run_command, Command, Flow};
use crate::repl::input::clean_input;

// == Repl State ==
/// Mutable state shared by every command in a session.
#[derive(Debug)]
pub struct ReplState {
    /// Response cache shared with the API client
    pub cache: Cache,
    /// PokeAPI client
    pub client: PokeApi,
    /// URL of the next location area page, if any
    pub next_url: Option<String>,
    /// URL of the previous location area page, if any
    pub prev_url: Option<String>,
    /// Caught pokemon, keyed by name
    pub caught: HashMap<String, Pokemon>,
}

impl ReplState {
    /// Creates a fresh session state with no pages visited and nothing caught.
    pub fn new(cache: Cache, client: PokeApi) -> Self {
        Self {
            cache,
            client,
            next_url: None,
            prev_url: None,
            caught: HashMap::new(),
        }
    }

    /// Stops the cache's background sweeper. The session is unusable afterwards.
    pub async fn shutdown(self) {
        self.cache.stop().await;
    }
}

// == Run Loop ==
/// Reads lines from stdin and dispatches commands until `exit` or end of input.
///
/// # Arguments
/// * `state` - Session state the commands read and update
///
/// # Returns
/// * `Ok(())` once the loop ends
/// * `Err` on an I/O failure reading stdin or writing the prompt
pub async fn run(state: &mut ReplState) -> Result<()> {
    run_loop(state, tokio::io::BufReader::new(tokio::io::stdin())).await
}

/// Drives the prompt-read-dispatch loop over any buffered line source.
async fn run_loop<R>(state: &mut ReplState, reader: R) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();

    loop {
        print!("Pokedex > ");
        std::io::stdout().flush()?;

        let line = match lines.next_line().await? {
            Some(line) => line,
            None => {
                // stdin is closed, treat it like an `exit`
                println!();
                println!("Closing the Pokedex... Goodbye!");
                break;
            }
        };

        let words = clean_input(&line);
        if words.is_empty() {
            continue;
        }

        let command = match Command::parse(&words[0]) {
            Some(command) => command,
            None => {
                println!("Not a valid command");
                continue;
            }
        };
        let arg = words.get(1).map(String::as_str);
        debug!("Dispatching command {:?} with arg {:?}", command, arg);

        match run_command(state, command, arg).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(err) => {
                println!(
                    "an error occurred during the execution of the {} command: {}",
                    command.name(),
                    err
                );
            }
        }
    }

    Ok(())
}
