use iced::{Element, Task, Theme};
use rfd::FileDialog;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error, info};

use clap::Parser;

mod assets;
mod config;
mod error;
mod logging;
mod state;
mod ui;

use config::{AppConfig, Cli};
use error::CatalogError;
use state::catalog::{load_catalog_async, CatalogSource};
use state::list::MovieList;
use state::movie::Movie;

/// Which screen is showing
#[derive(Debug)]
enum Screen {
    /// Catalog load in flight; the list is not queried yet
    Loading,
    List,
    /// The selected movie, handed over by value, plus its poster file
    Detail(Movie, Option<PathBuf>),
    Failed(Arc<CatalogError>),
}

/// Main application state
struct MoviesLib {
    config: AppConfig,
    /// Movies currently listed
    movies: MovieList,
    /// Poster thumbnails keyed by image reference
    thumbnails: HashMap<String, PathBuf>,
    /// Bumped on every successful catalog load; tags thumbnail results
    generation: u64,
    screen: Screen,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Background catalog load finished
    CatalogLoaded(Result<Vec<Movie>, Arc<CatalogError>>),
    /// Background thumbnail generation finished for a catalog generation
    ThumbnailsReady(u64, Vec<(String, PathBuf)>),
    /// User clicked "Open catalog…"
    OpenCatalog,
    /// User clicked a row
    Select(usize),
    /// User deleted a row
    Delete(usize),
    /// User left the detail screen
    Back,
}

impl MoviesLib {
    /// Create a new instance of the application and start loading its catalog
    fn new(config: AppConfig) -> (Self, Task<Message>) {
        let load = load_catalog(config.catalog.clone());

        (
            MoviesLib {
                config,
                movies: MovieList::default(),
                thumbnails: HashMap::new(),
                generation: 0,
                screen: Screen::Loading,
                status: String::new(),
            },
            load,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CatalogLoaded(Ok(movies)) => {
                self.movies = MovieList::from(movies);
                self.thumbnails.clear();
                self.generation += 1;
                self.screen = Screen::List;
                self.status = format!("Loaded {} movies.", self.movies.count());

                let references = self
                    .movies
                    .iter()
                    .map(|movie| movie.image_reference.clone())
                    .collect();

                let generation = self.generation;
                Task::perform(
                    assets::thumbnail::generate_thumbnails(self.config.assets_dir.clone(), references),
                    move |thumbnails| Message::ThumbnailsReady(generation, thumbnails),
                )
            }
            Message::CatalogLoaded(Err(e)) => {
                error!("❌ {}", e);
                self.movies = MovieList::default();
                self.screen = Screen::Failed(e);
                Task::none()
            }
            Message::ThumbnailsReady(generation, thumbnails) => {
                if generation != self.generation {
                    debug!(generation, current = self.generation, "dropping thumbnails of a replaced catalog");
                    return Task::none();
                }
                info!("📸 {} poster thumbnails ready", thumbnails.len());
                self.thumbnails = thumbnails.into_iter().collect();
                Task::none()
            }
            Message::OpenCatalog => {
                // Show the native file picker dialog
                let file = FileDialog::new()
                    .set_title("Select a movie catalog")
                    .add_filter("JSON", &["json"])
                    .pick_file();

                match file {
                    Some(path) => {
                        self.screen = Screen::Loading;
                        self.status = format!("Loading {}...", path.display());
                        load_catalog(CatalogSource::File(path))
                    }
                    None => Task::none(),
                }
            }
            Message::Select(index) => {
                match self.movies.item_at(index) {
                    Ok(movie) => {
                        let poster = assets::resolve_poster(&self.config.assets_dir, &movie.image_reference);
                        self.screen = Screen::Detail(movie.clone(), poster);
                    }
                    Err(e) => self.report_stale_row(e),
                }
                Task::none()
            }
            Message::Delete(index) => {
                match self.movies.remove(index) {
                    Ok(movie) => {
                        info!("🗑️  Removed {:?}", movie.title);
                        self.status = format!("Removed \"{}\".", movie.title);
                    }
                    Err(e) => self.report_stale_row(e),
                }
                Task::none()
            }
            Message::Back => {
                self.screen = Screen::List;
                Task::none()
            }
        }
    }

    /// A row message pointed past the end of the list, e.g. two deletes
    /// queued before the view was rebuilt.
    fn report_stale_row(&mut self, e: error::ListError) {
        error!("Stale row index: {}", e);
        self.status = format!("Internal error: {}", e);
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        match &self.screen {
            Screen::Loading => ui::loading(),
            Screen::List => ui::list::view(&self.movies, &self.thumbnails, &self.status),
            Screen::Detail(movie, poster) => ui::detail::view(movie, poster.as_ref()),
            Screen::Failed(e) => ui::failed(e),
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Start loading a catalog in the background
fn load_catalog(source: CatalogSource) -> Task<Message> {
    Task::perform(load_catalog_async(source), |result| {
        Message::CatalogLoaded(result.map_err(Arc::new))
    })
}

fn main() -> iced::Result {
    let cli = Cli::parse();
    logging::init_logger();

    let config = AppConfig::load(&cli);

    iced::application("MoviesLib", MoviesLib::update, MoviesLib::view)
        .theme(MoviesLib::theme)
        .centered()
        .run_with(move || MoviesLib::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str) -> Movie {
        Movie {
            title: title.to_string(),
            duration_text: "100 min".to_string(),
            summary: String::new(),
            image_reference: title.to_lowercase(),
            rating: 7.0,
            categories: Vec::new(),
        }
    }

    fn app() -> MoviesLib {
        let config = AppConfig {
            catalog: CatalogSource::Bundled,
            assets_dir: PathBuf::from("/nonexistent/assets"),
        };
        MoviesLib::new(config).0
    }

    fn loaded(titles: &[&str]) -> MoviesLib {
        let mut app = app();
        let _ = app.update(Message::CatalogLoaded(Ok(titles.iter().map(|t| movie(t)).collect())));
        app
    }

    #[test]
    fn test_starts_loading() {
        let app = app();
        assert!(matches!(app.screen, Screen::Loading));
        assert!(app.movies.is_empty());
    }

    #[test]
    fn test_loaded_catalog_shows_list() {
        let app = loaded(&["A", "B"]);
        assert!(matches!(app.screen, Screen::List));
        assert_eq!(app.movies.count(), 2);
        assert_eq!(app.status, "Loaded 2 movies.");
    }

    #[test]
    fn test_failed_load_shows_error() {
        let mut app = loaded(&["A"]);
        let err = CatalogError::Malformed {
            record: Some(3),
            reason: "missing field `rating`".to_string(),
        };
        let _ = app.update(Message::CatalogLoaded(Err(Arc::new(err))));

        assert!(matches!(app.screen, Screen::Failed(_)));
        assert!(app.movies.is_empty());
    }

    #[test]
    fn test_select_hands_over_movie() {
        let mut app = loaded(&["A", "B"]);
        let _ = app.update(Message::Select(1));

        match &app.screen {
            Screen::Detail(movie, poster) => {
                assert_eq!(movie.title, "B");
                assert!(poster.is_none());
            }
            other => panic!("expected detail screen, got {other:?}"),
        }

        let _ = app.update(Message::Back);
        assert!(matches!(app.screen, Screen::List));
    }

    #[test]
    fn test_delete_rows_until_empty() {
        let mut app = loaded(&["A", "B", "C"]);

        let _ = app.update(Message::Delete(0));
        assert_eq!(app.movies.item_at(0).unwrap().title, "B");
        assert_eq!(app.status, "Removed \"A\".");

        let _ = app.update(Message::Delete(1));
        let _ = app.update(Message::Delete(0));
        assert!(app.movies.is_empty());
    }

    #[test]
    fn test_thumbnails_are_keyed_by_reference() {
        let mut app = loaded(&["A"]);
        let generation = app.generation;
        let _ = app.update(Message::ThumbnailsReady(
            generation,
            vec![("a".to_string(), PathBuf::from("/cache/a.png"))],
        ));

        assert_eq!(app.thumbnails.get("a"), Some(&PathBuf::from("/cache/a.png")));
    }

    #[test]
    fn test_thumbnails_from_replaced_catalog_are_dropped() {
        let mut app = loaded(&["A"]);
        let first = app.generation;

        let _ = app.update(Message::CatalogLoaded(Ok(vec![movie("B")])));
        let second = app.generation;
        assert_ne!(first, second);

        // Newer catalog's thumbnails arrive first, then the old ones
        let _ = app.update(Message::ThumbnailsReady(
            second,
            vec![("b".to_string(), PathBuf::from("/cache/b.png"))],
        ));
        let _ = app.update(Message::ThumbnailsReady(
            first,
            vec![("a".to_string(), PathBuf::from("/cache/a.png"))],
        ));

        assert_eq!(app.thumbnails.get("b"), Some(&PathBuf::from("/cache/b.png")));
        assert!(app.thumbnails.get("a").is_none());
    }

    #[test]
    fn test_double_delete_reports_stale_row() {
        let mut app = loaded(&["A"]);

        let _ = app.update(Message::Delete(0));
        let _ = app.update(Message::Delete(0));

        assert!(app.movies.is_empty());
        assert!(app.status.starts_with("Internal error"));
    }

    #[test]
    fn test_stale_select_keeps_list_screen() {
        let mut app = loaded(&["A"]);
        let _ = app.update(Message::Select(3));

        assert!(matches!(app.screen, Screen::List));
        assert!(app.status.contains("out of range"));
    }
}
