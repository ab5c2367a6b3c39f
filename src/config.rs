use crate::cmds::Cmd;
use crate::error::{Error, ErrorKind, Result};
use crate::gesture::SwipeConfig;
use crate::nav::Screen;
use chrono::Weekday;
use serde::Deserialize;
use std::collections::HashMap;
use std::convert::TryFrom;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use termion::event::Key;

pub type KeyMap = HashMap<Key, Cmd>;

const CONFIG_PATH_ENV_VAR: &str = "AGIL_CONFIG_FILE";

pub(crate) fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(mut dir) = dirs::config_dir() {
        dir.push("agil");
        dir.push("config.toml");
        locations.push(dir);
    }

    if let Some(mut home) = dirs::home_dir() {
        home.push(".agil.toml");
        locations.push(home);
    }

    locations
}

/// Loads the config at `path`, or the first one found in the usual
/// locations, or the defaults when no file exists.
pub fn load_suitable_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return Config::from_file(path);
    }

    for location in find_configfile_locations() {
        if location.exists() {
            return Config::from_file(&location);
        }
    }

    log::info!("no config file found, falling back to defaults");
    Ok(Config::default())
}

#[derive(Debug, Clone)]
pub struct Config {
    pub key_map: KeyMap,
    pub tick_rate: Duration,
    pub week_start: Weekday,
    pub swipe: SwipeConfig,
}

impl Default for Config {
    fn default() -> Config {
        let mut config = Config {
            key_map: HashMap::new(),
            tick_rate: Duration::from_millis(500),
            week_start: Weekday::Mon,
            swipe: SwipeConfig::default(),
        };

        config.key_map.insert(Key::Char('h'), Cmd::PrevMonth);
        config.key_map.insert(Key::Char('l'), Cmd::NextMonth);
        config.key_map.insert(Key::Char('t'), Cmd::Today);
        config.key_map.insert(Key::Char('q'), Cmd::Exit);
        config
            .key_map
            .insert(Key::Char('1'), Cmd::Goto(Screen::Index));
        config
            .key_map
            .insert(Key::Char('2'), Cmd::Goto(Screen::Perfil));
        config
            .key_map
            .insert(Key::Char('3'), Cmd::Goto(Screen::FocusSelector));
        config
            .key_map
            .insert(Key::Char('4'), Cmd::Goto(Screen::FocusSession));
        config
            .key_map
            .insert(Key::Char('5'), Cmd::Goto(Screen::Calendar));

        config
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Config> {
        let raw: ConfigFile = toml::from_str(&fs::read_to_string(path)?)?;
        Config::try_from(raw)
    }
}

/// Raw on-disk shape; keys and weekdays arrive as strings and are
/// validated on conversion.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ConfigFile {
    #[serde(default)]
    keys: HashMap<String, String>,
    tick_rate_ms: Option<u64>,
    week_start: Option<String>,
    swipe: Option<SwipeConfig>,
}

impl TryFrom<ConfigFile> for Config {
    type Error = Error;

    fn try_from(raw: ConfigFile) -> Result<Config> {
        let mut config = Config::default();

        if let Some(ms) = raw.tick_rate_ms {
            config.tick_rate = Duration::from_millis(ms);
        }

        if let Some(day) = raw.week_start {
            config.week_start = day.parse::<Weekday>()?;
        }

        if let Some(swipe) = raw.swipe {
            config.swipe = swipe;
        }

        for (key, cmd) in &raw.keys {
            config.key_map.insert(parse_key(key)?, parse_cmd(cmd)?);
        }

        Ok(config)
    }
}

fn parse_key(name: &str) -> Result<Key> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(Key::Char(c));
    }

    match name {
        "left" => Ok(Key::Left),
        "right" => Ok(Key::Right),
        "up" => Ok(Key::Up),
        "down" => Ok(Key::Down),
        "esc" => Ok(Key::Esc),
        "backspace" => Ok(Key::Backspace),
        _ => Err(Error::new(ErrorKind::KeyParse, name)),
    }
}

fn parse_cmd(name: &str) -> Result<Cmd> {
    match name {
        "noop" => Ok(Cmd::Noop),
        "prev_month" => Ok(Cmd::PrevMonth),
        "next_month" => Ok(Cmd::NextMonth),
        "today" => Ok(Cmd::Today),
        "exit" => Ok(Cmd::Exit),
        "main_view" => Ok(Cmd::Goto(Screen::Index)),
        "perfil_mode" => Ok(Cmd::Goto(Screen::Perfil)),
        "focus_mode_selector" => Ok(Cmd::Goto(Screen::FocusSelector)),
        "focus_mode_session" => Ok(Cmd::Goto(Screen::FocusSession)),
        "calendar" => Ok(Cmd::Goto(Screen::Calendar)),
        _ => Err(Error::new(ErrorKind::CmdParse, name)),
    }
}
