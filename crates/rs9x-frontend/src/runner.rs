//! Frame and event loop
//!
//! Single-threaded and synchronous: events are polled and handled inline,
//! then the core runs one frame into the display surfaces and the result
//! is presented and paced. Focus loss raises the menu action, which
//! pauses and grabs a screenshot for the task switcher.

use std::time::{Duration, Instant};

use rs9x_core::{
    config::SCANCODE_COUNT, snapshot, Config, EmuActions, EmulationCore, FileType, FrameSize,
    JoypadButtons, PlatformError, IMAGE_HEIGHT, IMAGE_WIDTH,
};
use rs9x_video::{filter_window_event, Display, Result, VideoError};
use sdl2::event::Event;
use sdl2::EventPump;

pub struct Runner {
    config: Config,
    display: Display,
    events: EventPump,
    /// The emulation core, once one is attached.
    core: Option<Box<dyn EmulationCore>>,
    /// Joypad buttons currently held.
    pad: JoypadButtons,
    running: bool,
    paused: bool,
    /// Raised by action handlers that cannot propagate errors directly.
    fatal: Option<VideoError>,
    frames: u32,
    fps_window: Instant,
}

impl Runner {
    pub fn new(config: Config) -> Result<Self> {
        let (display, events) = Display::init(&config)?;
        Ok(Self {
            config,
            display,
            events,
            core: None,
            pad: JoypadButtons::empty(),
            running: true,
            paused: false,
            fatal: None,
            frames: 0,
            fps_window: Instant::now(),
        })
    }

    /// Hands the emulation core to the frontend. Until one is attached
    /// the loop presents the idle surfaces.
    pub fn attach_core(&mut self, core: Box<dyn EmulationCore>) {
        self.core = Some(core);
    }

    pub fn run(&mut self) -> Result<()> {
        if self.config.snapshot_load {
            self.thaw_snapshot();
        }

        while self.running {
            while let Some(event) = self.events.poll_event() {
                self.handle_event(event);
            }
            if let Some(err) = self.fatal.take() {
                return Err(err);
            }
            self.step()?;
            self.pace();
        }

        if self.config.snapshot_save {
            self.save_snapshot();
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Some(action) = filter_window_event(&event) {
            self.dispatch(action);
            return;
        }
        match event {
            Event::Quit { .. } => self.running = false,
            Event::KeyDown {
                scancode: Some(code),
                repeat: false,
                ..
            } => {
                let index = code as usize;
                if index < SCANCODE_COUNT {
                    self.pad |= self.config.joypad_mapping[index];
                    let actions = self.config.action_mapping[index];
                    if !actions.is_empty() {
                        self.dispatch(actions);
                    }
                }
            }
            Event::KeyUp {
                scancode: Some(code),
                ..
            } => {
                let index = code as usize;
                if index < SCANCODE_COUNT {
                    self.pad &= !self.config.joypad_mapping[index];
                }
            }
            _ => {}
        }
    }

    fn dispatch(&mut self, actions: EmuActions) {
        if actions.contains(EmuActions::QUIT) {
            self.running = false;
        }
        if actions.contains(EmuActions::TOGGLE_FULLSCREEN) {
            if let Err(err) = self.display.toggle_fullscreen() {
                self.fatal = Some(err);
            }
        }
        if actions.contains(EmuActions::MENU) {
            self.toggle_menu();
        }
    }

    /// The menu doubles as pause. Entering it grabs a screenshot so the
    /// task switcher has something to show.
    fn toggle_menu(&mut self) {
        self.paused = !self.paused;
        if self.paused {
            match self.display.take_screenshot() {
                Ok(path) => tracing::debug!(path = %path.display(), "menu screenshot"),
                Err(err) => tracing::warn!(%err, "screenshot failed"),
            }
        }
    }

    fn step(&mut self) -> Result<()> {
        if self.paused {
            return Ok(());
        }
        if !self.display.begin_frame() {
            return Ok(());
        }

        let size = match self.core.as_mut() {
            Some(core) => {
                core.set_joypad(self.pad);
                core.run_frame(self.display.surfaces_mut())
            }
            // No core attached: keep presenting the idle surfaces.
            None => FrameSize {
                width: IMAGE_WIDTH as u32,
                height: IMAGE_HEIGHT as u32,
            },
        };
        self.display.present(size)?;
        self.count_frame();
        Ok(())
    }

    fn count_frame(&mut self) {
        if !self.config.settings.display_frame_rate {
            return;
        }
        self.frames += 1;
        let elapsed = self.fps_window.elapsed();
        if elapsed >= Duration::from_secs(1) {
            let fps = f64::from(self.frames) / elapsed.as_secs_f64();
            tracing::info!("frame rate: {fps:.1} fps");
            self.frames = 0;
            self.fps_window = Instant::now();
        }
    }

    fn pace(&self) {
        // Turbo mode never sleeps between frames.
        if self.config.settings.turbo_mode {
            return;
        }
        std::thread::sleep(self.config.settings.frame_time);
    }

    fn thaw_snapshot(&mut self) {
        let (Some(core), Some(rom)) = (self.core.as_mut(), self.config.rom.as_ref()) else {
            return;
        };
        let path = rom.path_for(FileType::Freeze);
        match snapshot::freeze_reader(&path) {
            Ok(mut reader) => match core.unfreeze(&mut reader) {
                Ok(()) => tracing::info!(path = %path.display(), "restored previous state"),
                Err(err) => tracing::warn!(%err, "could not restore state"),
            },
            Err(err) => tracing::warn!(%err, "no previous state to restore"),
        }
    }

    fn save_snapshot(&mut self) {
        let (Some(core), Some(rom)) = (self.core.as_ref(), self.config.rom.as_ref()) else {
            return;
        };
        let path = rom.path_for(FileType::Freeze);
        let result: std::result::Result<(), PlatformError> = snapshot::freeze_writer(&path)
            .and_then(|mut writer| {
                core.freeze(&mut writer)?;
                writer.finish()?;
                Ok(())
            });
        match result {
            Ok(()) => tracing::info!(path = %path.display(), "state frozen on exit"),
            Err(err) => tracing::warn!(%err, "could not freeze state"),
        }
    }
}
