//! ROM path handling and derived file names

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// The auxiliary files that live next to a ROM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Rom,
    /// Battery-backed save RAM.
    Sram,
    /// Compressed freeze state.
    Freeze,
    Cheat,
    /// Soft patch applied to the ROM on load.
    Ips,
    Screenshot,
    /// S-DD1 coprocessor data pack.
    CoprocessorData,
}

impl FileType {
    fn extension(self) -> &'static str {
        match self {
            // The ROM path is returned as-is, see `RomPaths::path_for`.
            FileType::Rom => "",
            FileType::Sram => "srm",
            FileType::Freeze => "frz.gz",
            FileType::Cheat => "cht",
            FileType::Ips => "ips",
            FileType::Screenshot => "png",
            FileType::CoprocessorData => "dat",
        }
    }
}

/// The current ROM path and the base path derived from it.
///
/// The base path is the ROM path with its final extension removed (the
/// whole path when there is none) and is recomputed whenever the ROM path
/// changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomPaths {
    rom: PathBuf,
    base: PathBuf,
}

impl RomPaths {
    pub fn new<P: Into<PathBuf>>(rom: P) -> Self {
        let rom = rom.into();
        let base = rom.with_extension("");
        Self { rom, base }
    }

    pub fn rom(&self) -> &Path {
        &self.rom
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Returns the sibling file path for `file`: the base path with the
    /// fixed extension appended. `FileType::Rom` returns the ROM path
    /// unmodified.
    pub fn path_for(&self, file: FileType) -> PathBuf {
        if file == FileType::Rom {
            return self.rom.clone();
        }
        let mut path = OsString::from(self.base.as_os_str());
        path.push(".");
        path.push(file.extension());
        PathBuf::from(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_path_strips_extension() {
        let paths = RomPaths::new("roms/game.smc");
        assert_eq!(paths.base(), Path::new("roms/game"));
    }

    #[test]
    fn test_base_path_without_extension() {
        let paths = RomPaths::new("roms/game");
        assert_eq!(paths.base(), Path::new("roms/game"));
    }

    #[test]
    fn test_base_path_strips_only_final_extension() {
        let paths = RomPaths::new("game.smc.bak");
        assert_eq!(paths.base(), Path::new("game.smc"));
    }

    #[test]
    fn test_derived_paths() {
        let paths = RomPaths::new("roms/game.smc");
        assert_eq!(paths.path_for(FileType::Sram), Path::new("roms/game.srm"));
        assert_eq!(
            paths.path_for(FileType::Freeze),
            Path::new("roms/game.frz.gz")
        );
        assert_eq!(paths.path_for(FileType::Cheat), Path::new("roms/game.cht"));
        assert_eq!(paths.path_for(FileType::Ips), Path::new("roms/game.ips"));
        assert_eq!(
            paths.path_for(FileType::Screenshot),
            Path::new("roms/game.png")
        );
        assert_eq!(
            paths.path_for(FileType::CoprocessorData),
            Path::new("roms/game.dat")
        );
    }

    #[test]
    fn test_rom_path_returned_unmodified() {
        let paths = RomPaths::new("roms/game.smc");
        assert_eq!(paths.path_for(FileType::Rom), Path::new("roms/game.smc"));
    }
}
