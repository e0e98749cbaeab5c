use clap::Parser;
use wasm_bindgen::prelude::*;

mod game;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: game::GameProps,
}

impl Args {
    const BIN_NAME: &'static str = "tictac";

    /// Reads arguments from the URL fragment, e.g. `#--player1=Ada&-vv`.
    fn from_location_hash(location_hash: &str) -> Result<Self, clap::Error> {
        let decoded = js_sys::decode_uri_component(location_hash)
            .map(String::from)
            .unwrap_or_else(|_| location_hash.to_string());
        Self::from_fragment(&decoded)
    }

    /// Empty segments, as left by a leading `#` or a doubled `&`, are skipped.
    fn from_fragment(fragment: &str) -> Result<Self, clap::Error> {
        let segments = fragment
            .split(['#', '&'])
            .filter(|segment| !segment.is_empty());
        Self::try_parse_from(core::iter::once(Self::BIN_NAME).chain(segments))
    }

    fn fallback() -> Self {
        let mut args = Self::parse_from([Self::BIN_NAME]);
        args.verbose = clap_verbosity_flag::Verbosity::new(1, 0);
        args
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let (args, parse_error) = match Args::from_location_hash(&location_hash) {
        Ok(args) => (args, None),
        Err(err) => (Args::fallback(), Some(err)),
    };
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    if let Some(err) = parse_error {
        log::warn!("ignoring invalid arguments in location hash: {}", err);
    }
    log::debug!("players: {:?}", args.game);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, args.game).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_sets_player_names_and_verbosity() {
        let args = Args::from_fragment("#--player1=Ada&--player2=Grace&-vv").unwrap();

        assert_eq!(
            args.game.game_config(),
            tictac_core::GameConfig::new("Ada", "Grace")
        );
        assert_eq!(args.verbose.log_level(), Some(log::Level::Info));
    }

    #[test]
    fn empty_segments_are_ignored() {
        let args = Args::from_fragment("#&--player1=Ada&&-vv").unwrap();

        assert_eq!(
            args.game.game_config(),
            tictac_core::GameConfig::new("Ada", "")
        );
    }

    #[test]
    fn empty_fragment_uses_defaults() {
        let args = Args::from_fragment("").unwrap();

        assert_eq!(args.game.game_config(), tictac_core::GameConfig::default());
        assert_eq!(args.verbose.log_level(), Some(log::Level::Error));
    }

    #[test]
    fn unknown_argument_is_rejected_and_fallback_shows_warnings() {
        assert!(Args::from_fragment("#--colour=blue").is_err());

        assert_eq!(Args::fallback().verbose.log_level(), Some(log::Level::Warn));
    }
}
