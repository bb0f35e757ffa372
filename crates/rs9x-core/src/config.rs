//! Command-line and config-file option parsing
//!
//! Loading order: hard-coded defaults, then the per-user config file, then
//! the command-line flags, with each recognized flag mutating the
//! configuration immediately. Later assignments of single-valued fields
//! overwrite earlier ones, so command-line flags win over the user config
//! file; key-mapping entries instead accumulate by OR. `--conf FILE`
//! splices the file's tokens in front of the unparsed remainder, so an
//! extra config file behaves as if its flags appeared in its place.

use std::collections::VecDeque;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::input::{EmuActions, JoypadButtons};
use crate::paths::RomPaths;
use crate::settings::{ControllerOption, Settings};
use crate::tokenizer;

/// Number of scancode slots in the key mapping tables.
pub const SCANCODE_COUNT: usize = 256;

/// Per-user config file name, looked up under the home directory.
const USER_CONFIG_FILE: &str = ".rs9x.conf";

/// Platform configuration, built once at startup and passed by reference
/// to the display driver and the emulation core afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub settings: Settings,
    /// Audio output master switch, separate from the core's APU toggle.
    pub enable_audio: bool,
    pub fullscreen: bool,
    pub touchscreen_input: bool,
    /// Unfreeze the previous state when the game starts.
    pub snapshot_load: bool,
    /// Freeze the state when the game exits.
    pub snapshot_save: bool,
    /// Optional compatibility-hack database (snesadvance.dat format).
    pub hacks_file: Option<PathBuf>,
    /// ROM path and derived sibling paths; `None` until a ROM is resolved.
    pub rom: Option<RomPaths>,
    /// Scancode to joypad buttons; entries accumulate by OR.
    pub joypad_mapping: [JoypadButtons; SCANCODE_COUNT],
    /// Scancode to emulator actions; entries accumulate by OR.
    pub action_mapping: [EmuActions; SCANCODE_COUNT],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            enable_audio: true,
            fullscreen: false,
            touchscreen_input: false,
            snapshot_load: false,
            snapshot_save: false,
            hacks_file: None,
            rom: None,
            joypad_mapping: [JoypadButtons::empty(); SCANCODE_COUNT],
            action_mapping: [EmuActions::empty(); SCANCODE_COUNT],
        }
    }
}

impl Config {
    /// Loads the configuration from the user config file and the given
    /// command-line arguments (without the program name).
    ///
    /// `externally_launched` marks that a launcher already selected a ROM,
    /// in which case a missing ROM argument is not an error.
    pub fn load<I>(args: I, externally_launched: bool) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let user_config = dirs::home_dir().map(|home| home.join(USER_CONFIG_FILE));
        Self::load_with(args, externally_launched, user_config.as_deref())
    }

    pub(crate) fn load_with<I>(
        args: I,
        externally_launched: bool,
        user_config: Option<&Path>,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut queue = VecDeque::new();

        // The user config file is optional; its flags are processed first
        // so the command line can override them.
        if let Some(path) = user_config {
            match fs::read_to_string(path) {
                Ok(text) => {
                    let tokens = tokenizer::tokenize(&text)
                        .map_err(|_| ConfigError::UnterminatedQuote(path.to_owned()))?;
                    queue.extend(tokens);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "cannot open config file");
                }
            }
        }
        queue.extend(args);

        let mut parser = Parser {
            config: &mut config,
            queue,
            scancode: 0,
            positionals: Vec::new(),
        };
        parser.run()?;

        if config.rom.is_none() && !externally_launched {
            return Err(ConfigError::NoRomSpecified);
        }
        Ok(config)
    }

    /// Sets the ROM file and recomputes the derived base path.
    pub fn set_rom_file(&mut self, path: &str) {
        self.rom = Some(RomPaths::new(path));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Opt {
    DisableAudio,
    DisplayFramerate,
    SkipFrames,
    Fullscreen,
    Transparency,
    Hacks,
    Pal,
    Ntsc,
    Turbo,
    Conf,
    Mouse,
    SuperScope,
    Snapshot,
    AudioRate,
    AudioBufferSize,
    Touchscreen,
    Scancode,
    Button,
    Action,
    HacksFile,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArgKind {
    None,
    Required,
    /// A value is taken only from the attached `--opt=value` form.
    Optional,
}

struct OptSpec {
    long: &'static str,
    short: Option<char>,
    arg: ArgKind,
    hint: Option<&'static str>,
    help: &'static str,
    opt: Opt,
}

/// Options accepted on the command line.
const COMMON_OPTIONS: &[OptSpec] = &[
    OptSpec {
        long: "disable-audio",
        short: Some('a'),
        arg: ArgKind::None,
        hint: None,
        help: "disable emulation and output of audio",
        opt: Opt::DisableAudio,
    },
    OptSpec {
        long: "display-framerate",
        short: Some('r'),
        arg: ArgKind::None,
        hint: None,
        help: "show a frames per second counter",
        opt: Opt::DisplayFramerate,
    },
    OptSpec {
        long: "skip-frames",
        short: Some('s'),
        arg: ArgKind::Required,
        hint: Some("NUM"),
        help: "render only 1 in every NUM frames",
        opt: Opt::SkipFrames,
    },
    OptSpec {
        long: "fullscreen",
        short: Some('f'),
        arg: ArgKind::None,
        hint: None,
        help: "start in fullscreen mode",
        opt: Opt::Fullscreen,
    },
    OptSpec {
        long: "transparency",
        short: Some('y'),
        arg: ArgKind::None,
        hint: None,
        help: "enable transparency effects (slower)",
        opt: Opt::Transparency,
    },
    OptSpec {
        long: "hacks",
        short: Some('h'),
        arg: ArgKind::Optional,
        hint: Some("option"),
        help: "enable hacks (yes, speed-only, no)",
        opt: Opt::Hacks,
    },
    OptSpec {
        long: "pal",
        short: Some('p'),
        arg: ArgKind::None,
        hint: None,
        help: "run in PAL mode",
        opt: Opt::Pal,
    },
    OptSpec {
        long: "ntsc",
        short: Some('n'),
        arg: ArgKind::None,
        hint: None,
        help: "run in NTSC mode",
        opt: Opt::Ntsc,
    },
    OptSpec {
        long: "turbo",
        short: Some('t'),
        arg: ArgKind::None,
        hint: None,
        help: "turbo mode (do not sleep between frames)",
        opt: Opt::Turbo,
    },
    OptSpec {
        long: "conf",
        short: Some('c'),
        arg: ArgKind::Required,
        hint: Some("FILE"),
        help: "extra configuration file to load",
        opt: Opt::Conf,
    },
    OptSpec {
        long: "mouse",
        short: Some('m'),
        arg: ArgKind::Optional,
        hint: Some("NUM"),
        help: "enable mouse on controller NUM",
        opt: Opt::Mouse,
    },
    OptSpec {
        long: "superscope",
        short: Some('e'),
        arg: ArgKind::None,
        hint: None,
        help: "enable SuperScope",
        opt: Opt::SuperScope,
    },
    OptSpec {
        long: "snapshot",
        short: Some('o'),
        arg: ArgKind::None,
        hint: None,
        help: "unfreeze previous game on start and freeze game on exit",
        opt: Opt::Snapshot,
    },
    OptSpec {
        long: "audio-rate",
        short: Some('u'),
        arg: ArgKind::Required,
        hint: Some("HZ"),
        help: "audio output rate",
        opt: Opt::AudioRate,
    },
    OptSpec {
        long: "audio-buffer-size",
        short: Some('b'),
        arg: ArgKind::Required,
        hint: Some("SAMPLES"),
        help: "audio output buffer size",
        opt: Opt::AudioBufferSize,
    },
    OptSpec {
        long: "touchscreen",
        short: Some('d'),
        arg: ArgKind::None,
        hint: None,
        help: "enable touchscreen controls",
        opt: Opt::Touchscreen,
    },
];

/// Options normally used from config files.
const CONFIG_OPTIONS: &[OptSpec] = &[
    OptSpec {
        long: "scancode",
        short: None,
        arg: ArgKind::Required,
        hint: Some("CODE"),
        help: "scancode to map",
        opt: Opt::Scancode,
    },
    OptSpec {
        long: "button",
        short: None,
        arg: ArgKind::Required,
        hint: Some("NAME"),
        help: "SNES button to press (A, B, X, Y, L, R, Up, Down, Left, Right, Start, Select)",
        opt: Opt::Button,
    },
    OptSpec {
        long: "action",
        short: None,
        arg: ArgKind::Required,
        hint: Some("NAME"),
        help: "emulator action to do (fullscreen, quit)",
        opt: Opt::Action,
    },
    OptSpec {
        long: "hacks-file",
        short: None,
        arg: ArgKind::Required,
        hint: Some("FILE"),
        help: "path to the compatibility hacks database",
        opt: Opt::HacksFile,
    },
];

const HELP_OPTIONS: &[OptSpec] = &[OptSpec {
    long: "help",
    short: Some('?'),
    arg: ArgKind::None,
    hint: None,
    help: "show this help message",
    opt: Opt::Help,
}];

fn all_options() -> impl Iterator<Item = &'static OptSpec> {
    COMMON_OPTIONS
        .iter()
        .chain(CONFIG_OPTIONS)
        .chain(HELP_OPTIONS)
}

fn find_long(name: &str) -> Option<&'static OptSpec> {
    all_options().find(|spec| spec.long == name)
}

fn find_short(c: char) -> Option<&'static OptSpec> {
    all_options().find(|spec| spec.short == Some(c))
}

/// One-line usage summary.
pub fn usage() -> String {
    "Usage: rs9x [OPTION...] <rom>\n".to_owned()
}

/// Full option listing.
pub fn help() -> String {
    let mut out = usage();
    let mut section = |title: &str, specs: &[OptSpec]| {
        out.push('\n');
        out.push_str(title);
        out.push('\n');
        for spec in specs {
            let mut left = String::new();
            match spec.short {
                Some(c) => {
                    let _ = write!(left, "  -{c}, --{}", spec.long);
                }
                None => {
                    let _ = write!(left, "      --{}", spec.long);
                }
            }
            match (spec.arg, spec.hint) {
                (ArgKind::Required, Some(hint)) => {
                    let _ = write!(left, "={hint}");
                }
                (ArgKind::Optional, Some(hint)) => {
                    let _ = write!(left, "[={hint}]");
                }
                _ => {}
            }
            let _ = writeln!(out, "{left:<32} {}", spec.help);
        }
    };
    section("Common options:", COMMON_OPTIONS);
    section("Configuration file options:", CONFIG_OPTIONS);
    section("Help options:", HELP_OPTIONS);
    out
}

/// `atoi` semantics: unparseable values degrade to 0.
fn atoi(s: &str) -> i64 {
    s.trim().parse().unwrap_or(0)
}

struct Parser<'a> {
    config: &'a mut Config,
    /// Unparsed tokens; `--conf` pushes file contents onto the front.
    queue: VecDeque<String>,
    /// State for `--scancode`, carried across flag invocations.
    scancode: u8,
    positionals: Vec<String>,
}

impl Parser<'_> {
    fn run(&mut self) -> Result<(), ConfigError> {
        while let Some(token) = self.queue.pop_front() {
            if token == "--" {
                self.positionals.extend(self.queue.drain(..));
                break;
            }
            if let Some(body) = token.strip_prefix("--") {
                self.long_option(body)?;
            } else if token.len() > 1 && token.starts_with('-') {
                self.short_options(&token[1..])?;
            } else {
                self.positionals.push(token);
            }
        }

        // The first leftover argument is the ROM file; it wins over a ROM
        // path picked up earlier by the `--hacks` fallback.
        if let Some(rom) = self.positionals.first() {
            let rom = rom.clone();
            self.config.set_rom_file(&rom);
        }
        Ok(())
    }

    fn long_option(&mut self, body: &str) -> Result<(), ConfigError> {
        let (name, attached) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value.to_owned())),
            None => (body, None),
        };
        let spec =
            find_long(name).ok_or_else(|| ConfigError::UnknownOption(format!("--{name}")))?;
        let value = self.take_value(spec, attached)?;
        self.apply(spec, value)
    }

    fn short_options(&mut self, body: &str) -> Result<(), ConfigError> {
        let mut chars = body.char_indices();
        while let Some((i, c)) = chars.next() {
            let spec = find_short(c).ok_or_else(|| ConfigError::UnknownOption(format!("-{c}")))?;
            if spec.arg == ArgKind::Required {
                // The rest of the token, or the next one, is the value.
                let rest = &body[i + c.len_utf8()..];
                let attached = (!rest.is_empty()).then(|| rest.to_owned());
                let value = self.take_value(spec, attached)?;
                return self.apply(spec, value);
            }
            self.apply(spec, None)?;
        }
        Ok(())
    }

    fn take_value(
        &mut self,
        spec: &OptSpec,
        attached: Option<String>,
    ) -> Result<Option<String>, ConfigError> {
        match spec.arg {
            ArgKind::None => {
                if attached.is_some() {
                    return Err(ConfigError::UnexpectedValue(spec.long));
                }
                Ok(None)
            }
            ArgKind::Required => match attached {
                Some(value) => Ok(Some(value)),
                None => match self.queue.pop_front() {
                    Some(value) => Ok(Some(value)),
                    None => Err(ConfigError::MissingValue(spec.long)),
                },
            },
            ArgKind::Optional => Ok(attached),
        }
    }

    fn apply(&mut self, spec: &OptSpec, value: Option<String>) -> Result<(), ConfigError> {
        match spec.opt {
            Opt::DisableAudio => self.config.enable_audio = false,
            Opt::DisplayFramerate => self.config.settings.display_frame_rate = true,
            Opt::SkipFrames => {
                self.config.settings.skip_frames = atoi(&value.unwrap_or_default()) as u32;
            }
            Opt::Fullscreen => self.config.fullscreen = true,
            Opt::Transparency => {
                self.config.settings.sixteen_bit = true;
                self.config.settings.transparency = true;
            }
            Opt::Hacks => {
                self.config.settings.hacks_enabled = true;
                if let Some(value) = value {
                    self.set_hacks(&value);
                }
            }
            Opt::Pal => self.config.settings.force_pal = true,
            Opt::Ntsc => self.config.settings.force_ntsc = true,
            Opt::Turbo => self.config.settings.turbo_mode = true,
            Opt::Conf => self.stuff_config_file(&value.unwrap_or_default())?,
            Opt::Mouse => {
                self.config.settings.mouse = true;
                let slot = value.as_deref().map(atoi).unwrap_or(0);
                self.config.settings.controller_option = if slot <= 1 {
                    ControllerOption::MouseSwapped
                } else {
                    ControllerOption::Mouse
                };
            }
            Opt::SuperScope => {
                self.config.settings.superscope = true;
                self.config.settings.controller_option = ControllerOption::SuperScope;
            }
            Opt::Snapshot => {
                self.config.snapshot_load = true;
                self.config.snapshot_save = true;
            }
            Opt::AudioRate => {
                self.config.settings.sound_playback_rate = atoi(&value.unwrap_or_default()) as u32;
            }
            Opt::AudioBufferSize => {
                self.config.settings.sound_buffer_size = atoi(&value.unwrap_or_default()) as u32;
            }
            Opt::Touchscreen => self.config.touchscreen_input = true,
            Opt::Scancode => self.scancode = atoi(&value.unwrap_or_default()) as u8,
            Opt::Button => {
                let button = JoypadButtons::from_name(&value.unwrap_or_default())?;
                self.config.joypad_mapping[self.scancode as usize] |= button;
            }
            Opt::Action => {
                let action = EmuActions::from_name(&value.unwrap_or_default())?;
                self.config.action_mapping[self.scancode as usize] |= action;
            }
            Opt::HacksFile => {
                self.config.hacks_file = Some(PathBuf::from(value.unwrap_or_default()));
            }
            Opt::Help => return Err(ConfigError::HelpRequested),
        }
        Ok(())
    }

    fn set_hacks(&mut self, value: &str) {
        match value.to_ascii_lowercase().as_str() {
            "speed-only" | "speed" | "s" => self.config.settings.hacks_filter = true,
            "yes" | "y" => {}
            "no" | "n" => self.config.settings.hacks_enabled = false,
            // The user probably wants hacks enabled and this argument is
            // really the ROM file. Kept for command-line compatibility;
            // no other option falls back like this.
            _ => self.config.set_rom_file(value),
        }
    }

    fn stuff_config_file(&mut self, path: &str) -> Result<(), ConfigError> {
        let path = PathBuf::from(path);
        let text = fs::read_to_string(&path).map_err(|source| ConfigError::ConfigFile {
            path: path.clone(),
            source,
        })?;
        let tokens =
            tokenizer::tokenize(&text).map_err(|_| ConfigError::UnterminatedQuote(path))?;
        for token in tokens.into_iter().rev() {
            self.queue.push_front(token);
        }
        Ok(())
    }
}
