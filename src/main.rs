use iced::{window, Size};
use iced_landing::app::{self, App, Flags};

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        reduce_motion: args.contains("--reduce-motion"),
    };

    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .window(window::Settings {
            size: Size::new(app::WINDOW_DEFAULT_WIDTH, app::WINDOW_DEFAULT_HEIGHT),
            min_size: Some(Size::new(app::MIN_WINDOW_WIDTH, app::MIN_WINDOW_HEIGHT)),
            ..window::Settings::default()
        })
        .run_with(move || App::new(flags.clone()))
}
