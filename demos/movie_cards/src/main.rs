use anyhow::{bail, Context};
use log::{debug, info};
use movie::{sample_movies, App};
use propkit::{render, InputBag, Value};
use std::{env::VarError, fs};

mod movie;

/// Load the movie list from $MOVIE_CARDS_FILE, or fall back to the sample movies
fn load_movies() -> anyhow::Result<Value> {
    let path = match std::env::var("MOVIE_CARDS_FILE") {
        Ok(path) => path,
        Err(VarError::NotPresent) => {
            debug!("MOVIE_CARDS_FILE not set, using the sample movies");
            return Ok(sample_movies());
        }
        Err(err) => return Err(err).context("Invalid path provided at $MOVIE_CARDS_FILE"),
    };
    let contents =
        fs::read_to_string(&path).with_context(|| format!("Unable to read movie file {}", path))?;
    let movies: Value = serde_json::from_str(&contents)
        .with_context(|| format!("Movie file {} is not valid JSON", path))?;
    if !movies.is_array() {
        bail!("Movie file {} must contain a JSON array of movies", path);
    }
    info!("Loaded movies from {}", path);
    Ok(movies)
}

/// Pass the heading through, or leave it absent when $MOVIE_CARDS_HEADING is not set
fn heading_input(input: &mut InputBag, heading: Result<String, VarError>) -> anyhow::Result<()> {
    match heading {
        Ok(heading) => input.insert("heading", Value::String(heading)),
        // Leaving the heading absent lets the App fall back to its default
        Err(VarError::NotPresent) => input.insert_absent("heading"),
        Err(err) => return Err(err).context("Invalid heading provided at $MOVIE_CARDS_HEADING"),
    };
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();
    env_logger::init();

    let mut input = InputBag::new();
    input.insert("movies", load_movies()?);
    heading_input(&mut input, std::env::var("MOVIE_CARDS_HEADING"))?;

    let page = render(&App, &input).context("Unable to render the movie cards")?;
    println!("{}", page);
    Ok(())
}
