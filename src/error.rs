//! Error types for the Pokedex client
//!
//! Provides unified error handling using thiserror. The cache itself never
//! fails; every error here belongs to the fetch layer or the REPL commands
//! built on top of it.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the Pokedex client.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// The request to the server could not be completed
    #[error("error contacting the server: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a status outside the 2xx range
    #[error("response status from the server: {0}")]
    UnexpectedStatus(reqwest::StatusCode),

    /// The response body was not the JSON shape we expected
    #[error("the response JSON could not be decoded: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading user input or writing the prompt failed
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A command that needs an argument was called without one
    #[error("the {0} name was not given")]
    MissingArgument(&'static str),

    /// `map` called while already past the final page of results
    #[error("already on the last page")]
    LastPage,

    /// `mapb` called while on the first page of results
    #[error("already on the first page")]
    FirstPage,

    /// `mapb` called before any `map` established a page cursor
    #[error("map has not been called yet")]
    MapNotCalled,

    /// `inspect` called for a pokemon that has not been caught
    #[error("{0} is not among the pokemon you have caught")]
    NotCaught(String),

    /// `pokedex` called while nothing has been caught
    #[error("no pokemon has been caught yet")]
    EmptyPokedex,
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex client.
pub type Result<T> = std::result::Result<T, PokedexError>;
