use clap::Parser;
use wasm_bindgen::prelude::*;

mod game;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: game::GameProps,
}

/// Options come from the location hash, e.g. `#-vv&--seed=42`.
fn parse_args(location_hash: &str) -> Result<Args, clap::Error> {
    Args::try_parse_from(location_hash.split(['#', '&']))
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{body, document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window().location().hash().unwrap_or_default();
    let args = parse_args(&location_hash).unwrap_or_else(|err| {
        gloo::console::warn!(format!("ignoring options: {err}"));
        Args::parse_from([""])
    });
    if let Some(log_level) = args.verbose.log_level() {
        if let Err(err) = console_log::init_with_level(log_level) {
            gloo::console::error!(format!("Error initializing logger: {err}"));
        }
    }

    let mut props = args.game;
    props.viewport_width = window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or(oddtile_core::GameConfig::MAX_CANVAS_WIDTH);
    log::debug!("options: {:?}", props);

    let root: web_sys::Element = document()
        .get_element_by_id("game")
        .unwrap_or_else(|| body().into());

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, props).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hash_uses_defaults() {
        let args = parse_args("").unwrap();
        assert_eq!(args.game.seed, None);
        assert_eq!(args.game.ceiling, None);
        assert_eq!(args.verbose.log_level(), Some(log::Level::Error));
    }

    #[test]
    fn hash_options_are_split_on_ampersands() {
        let args = parse_args("#-vv&--seed=42&--ceiling=10").unwrap();
        assert_eq!(args.game.seed, Some(42));
        assert_eq!(args.game.ceiling, Some(10));
        assert_eq!(args.verbose.log_level(), Some(log::Level::Info));
    }

    #[test]
    fn bad_seed_is_an_error() {
        assert!(parse_args("#--seed=banana").is_err());
    }
}
