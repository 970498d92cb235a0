use log::warn;
use propkit::{render, Component, InputBag, Value};
use propkit_macros::Props;
use serde_json::Map;

/// The props of a single movie card
#[derive(Debug, Clone, PartialEq, Props)]
pub struct MovieCardProps {
    pub title: String,
    #[name = "posterSrc"]
    #[default_value = "placeholder.png"]
    pub poster_src: String,
    pub genres: Option<Vec<String>>,
}

pub struct MovieCard;

impl Component for MovieCard {
    type Props = MovieCardProps;
    type Output = String;

    fn render(&self, props: &MovieCardProps) -> String {
        let mut card = format!("## {}\nposter: {}\n", props.title, props.poster_src);
        // genres has no default, so it may be missing entirely
        match props.genres.as_deref() {
            Some([]) | None => card.push_str("genres: none listed\n"),
            Some(genres) => card.push_str(&format!("genres: {}\n", genres.join(", "))),
        }
        card
    }
}

/// The props of the page listing every card
#[derive(Debug, Clone, PartialEq, Props)]
pub struct AppProps {
    #[default_value = "Movies"]
    pub heading: String,
    #[default_value([])]
    pub movies: Vec<Map<String, Value>>,
}

pub struct App;

impl Component for App {
    type Props = AppProps;
    type Output = String;

    fn render(&self, props: &AppProps) -> String {
        let cards: Vec<String> = props
            .movies
            .iter()
            .enumerate()
            .filter_map(|(index, movie)| {
                let input = InputBag::from(movie.clone());
                match render(&MovieCard, &input) {
                    Ok(card) => Some(card),
                    Err(err) => {
                        warn!("Skipping movie #{}: {}", index, err);
                        None
                    }
                }
            })
            .collect();
        format!("# {}\n\n{}", props.heading, cards.join("\n"))
    }
}

/// The movies shown when no movie file is configured
pub fn sample_movies() -> Value {
    serde_json::json!([
        { "title": "Mad Max", "genres": ["Action", "Thriller"] },
        { "title": "Heat", "posterSrc": "heat.png", "genres": ["Crime", "Drama"] },
        { "title": "Koyaanisqatsi", "genres": [] },
        { "title": "Alien" },
    ])
}
