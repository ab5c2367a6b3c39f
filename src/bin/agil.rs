use agil as lib;

use flexi_logger::{FileSpec, Logger};
use lib::ctx::Context;
use lib::events::Dispatcher;
use lib::ui::app::App;
use lib::ui::{screens, GridWidgets};
use std::convert::TryFrom;
use std::io::{self, Write};
use std::path::PathBuf;
use structopt::StructOpt;
use termion::input::MouseTerminal;
use termion::raw::IntoRawMode;
use termion::screen::AlternateScreen;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "agil",
    about = "Agil - a terminal month-grid calendar with swipe navigation."
)]
pub struct Args {
    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(
        short = "s",
        long = "show",
        help = "only show the current month non-interactively"
    )]
    pub show: bool,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }

    logger.start()?;

    let config = lib::config::load_suitable_config(args.configfile.as_deref())?;

    if args.show {
        let ctx = Context::new();
        let widgets = GridWidgets::default();
        let stdout = io::stdout();
        return Ok(screens::show(
            &mut stdout.lock(),
            &ctx,
            &config,
            &widgets,
        )?);
    }

    std::panic::set_hook(Box::new(|info| {
        // Switch back to the main terminal screen
        println!("{}{}", termion::screen::ToMainScreen, termion::cursor::Show);

        println!("Agil ran into a fatal error!");
        println!(
            "Consider filing an issue with a log file and the backtrace below at {}",
            env!("CARGO_PKG_REPOSITORY")
        );

        println!("{}", info);
        println!("{:?}", backtrace::Backtrace::new());
    }));

    let dispatcher = Dispatcher::from_config(&config);
    let mut app = App::new(&config);

    let stdout = io::stdout().into_raw_mode()?;
    let mut screen = MouseTerminal::from(AlternateScreen::from(stdout));
    write!(screen, "{}", termion::cursor::Hide)?;

    while !app.should_quit() {
        app.draw(&mut screen)?;

        let event = dispatcher.next()?;
        if let Err(err) = app.handle(event) {
            log::warn!("{}", err);
        }
    }

    write!(screen, "{}", termion::cursor::Show)?;
    screen.flush()?;

    Ok(())
}
