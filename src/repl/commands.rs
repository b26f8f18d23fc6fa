//! REPL Commands
//!
//! The command registry and the handlers behind each command word.

use rand::Rng;

use crate::error::{PokedexError, Result};
use crate::repl::session::ReplState;

// == Command ==
/// One of the known command words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
}

impl Command {
    /// Every command, in the order `help` lists them.
    pub const ALL: [Command; 8] = [
        Command::Help,
        Command::Exit,
        Command::Map,
        Command::MapBack,
        Command::Explore,
        Command::Catch,
        Command::Inspect,
        Command::Pokedex,
    ];

    /// Resolves the first input word to a command.
    pub fn parse(word: &str) -> Option<Self> {
        match word {
            "help" => Some(Command::Help),
            "exit" => Some(Command::Exit),
            "map" => Some(Command::Map),
            "mapb" => Some(Command::MapBack),
            "explore" => Some(Command::Explore),
            "catch" => Some(Command::Catch),
            "inspect" => Some(Command::Inspect),
            "pokedex" => Some(Command::Pokedex),
            _ => None,
        }
    }

    /// The word that invokes this command.
    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Map => "map",
            Command::MapBack => "mapb",
            Command::Explore => "explore",
            Command::Catch => "catch",
            Command::Inspect => "inspect",
            Command::Pokedex => "pokedex",
        }
    }

    /// One-line description shown by `help`.
    pub fn description(self) -> &'static str {
        match self {
            Command::Help => "Displays a help message",
            Command::Exit => "Exit the Pokedex",
            Command::Map => "Displays a list of the next 20 locations of the Pokemon world",
            Command::MapBack => "Displays a list of the previous 20 locations of the Pokemon world",
            Command::Explore => "Explore an area and display the pokemon found in it",
            Command::Catch => "Try to catch a pokemon",
            Command::Inspect => "Print the stats of a caught pokemon",
            Command::Pokedex => "List all caught pokemon",
        }
    }
}

// == Flow ==
/// Whether the REPL keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Prompt for the next line
    Continue,
    /// Leave the loop
    Quit,
}

// == Dispatch ==
/// Runs one command against the session state.
///
/// `arg` is the word following the command on the same input line, if any;
/// it never survives into later commands.
pub async fn run_command(
    state: &mut ReplState,
    command: Command,
    arg: Option<&str>,
) -> Result<Flow> {
    match command {
        Command::Exit => {
            println!("Closing the Pokedex... Goodbye!");
            return Ok(Flow::Quit);
        }
        Command::Help => command_help(),
        Command::Map => command_map(state).await?,
        Command::MapBack => command_map_back(state).await?,
        Command::Explore => command_explore(state, arg).await?,
        Command::Catch => command_catch(state, arg).await?,
        Command::Inspect => command_inspect(state, arg)?,
        Command::Pokedex => command_pokedex(state)?,
    }
    Ok(Flow::Continue)
}

// == Help ==
/// Prints the usage banner with every command and its description.
fn command_help() {
    println!("Welcome to the Pokedex!");
    println!("Usage:");
    println!();
    for command in Command::ALL {
        println!("{}: {}", command.name(), command.description());
    }
}

// == Map ==
/// Lists the next page of location areas and advances the page cursors.
async fn command_map(state: &mut ReplState) -> Result<()> {
    // No next page but a previous one: the listing has been walked past its end
    if state.next_url.is_none() && state.prev_url.is_some() {
        return Err(PokedexError::LastPage);
    }

    let page = state
        .client
        .location_areas(&state.cache, state.next_url.as_deref())
        .await?;

    state.next_url = page.next;
    state.prev_url = page.previous;

    for area in &page.results {
        println!("{}", area.name);
    }
    Ok(())
}

// == Map Back ==
/// Lists the previous page of location areas and rewinds the page cursors.
async fn command_map_back(state: &mut ReplState) -> Result<()> {
    if state.next_url.is_some() && state.prev_url.is_none() {
        return Err(PokedexError::FirstPage);
    }
    if state.next_url.is_none() && state.prev_url.is_none() {
        return Err(PokedexError::MapNotCalled);
    }

    let page = state
        .client
        .location_areas(&state.cache, state.prev_url.as_deref())
        .await?;

    state.next_url = page.next;
    state.prev_url = page.previous;

    for area in &page.results {
        println!("{}", area.name);
    }
    Ok(())
}

// == Explore ==
/// Lists the pokemon that can be encountered in the named area.
async fn command_explore(state: &mut ReplState, arg: Option<&str>) -> Result<()> {
    let name = arg.ok_or(PokedexError::MissingArgument("area"))?;

    let area = state.client.location_area(&state.cache, name).await?;

    for encounter in &area.pokemon_encounters {
        println!(" - {}", encounter.pokemon.name);
    }
    Ok(())
}

// == Catch ==
/// Rolls against the pokemon's base experience and records it when caught.
async fn command_catch(state: &mut ReplState, arg: Option<&str>) -> Result<()> {
    let name = arg.ok_or(PokedexError::MissingArgument("pokemon"))?;

    let pokemon = state.client.pokemon(&state.cache, name).await?;

    println!("Throwing a Pokeball at {}...", name);
    let roll: u32 = rand::thread_rng().gen_range(0..650);

    // A missing base experience counts as zero, an almost certain catch
    if roll > pokemon.base_experience.unwrap_or(0) {
        println!("{} was caught!", name);
        state.caught.insert(name.to_string(), pokemon);
    } else {
        println!("{} escaped!", name);
    }
    Ok(())
}

// == Inspect ==
/// Prints the stats of a pokemon that has been caught.
fn command_inspect(state: &mut ReplState, arg: Option<&str>) -> Result<()> {
    let name = arg.ok_or(PokedexError::MissingArgument("pokemon"))?;

    let pokemon = state
        .caught
        .get(name)
        .ok_or_else(|| PokedexError::NotCaught(name.to_string()))?;

    println!("Name:\t\t{}", pokemon.name);
    println!("Height:\t\t{}", pokemon.height);
    println!("Weight:\t\t{}", pokemon.weight);
    println!("Order:\t\t{}", pokemon.order.unwrap_or(0));
    println!("Base Exp:\t{}", pokemon.base_experience.unwrap_or(0));
    Ok(())
}

// == Pokedex ==
/// Lists the names of every caught pokemon.
fn command_pokedex(state: &mut ReplState) -> Result<()> {
    if state.caught.is_empty() {
        return Err(PokedexError::EmptyPokedex);
    }

    println!("Your Pokedex:");
    for name in state.caught.keys() {
        println!(" - {}", name);
    }
    Ok(())
}
