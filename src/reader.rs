//! Mission file reader

use crate::error::{Result, Warning};
use crate::parser::MissionParser;
use crate::types::Mission;
use crate::utils::text::{decode_line, trim_line_ending};
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Reader for `.mis` files
///
/// Lines are decoded one by one as UTF-8 with a Windows-1251 fallback, so
/// files saved by localized game versions need no conversion.
///
/// # Example
///
/// ```no_run
/// use il2fb_mission_parser::MisReader;
///
/// let mission = MisReader::from_path("Dogfight/Moscow.mis")?.read_mission()?;
/// println!("{:?}: {} flights", mission.location_loader, mission.objects.flights.len());
/// # Ok::<(), il2fb_mission_parser::Error>(())
/// ```
#[derive(Debug)]
pub struct MisReader<R: Read> {
    reader: BufReader<R>,
}

impl MisReader<File> {
    /// Create a reader from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Opening mission file {}", path.display());
        let file = File::open(path)?;
        Ok(Self::new(file))
    }
}

impl<R: Read> MisReader<R> {
    /// Create a reader from any `Read` source
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
        }
    }

    /// Read the whole mission, discarding warnings
    pub fn read_mission(self) -> Result<Mission> {
        let mut warnings = Vec::new();
        self.read_mission_with_warnings(&mut warnings)
    }

    /// Read the whole mission, collecting non-fatal issues into `warnings`
    pub fn read_mission_with_warnings(mut self, warnings: &mut Vec<Warning>) -> Result<Mission> {
        let mut parser = MissionParser::new();
        let mut buffer = Vec::new();
        let mut index = 0;

        loop {
            buffer.clear();
            if self.reader.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }

            let line = decode_line(trim_line_ending(&buffer));
            parser.feed_line(index, &line, warnings)?;
            index += 1;
        }

        debug!("Read {index} lines");
        parser.finish(warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use claims::assert_matches;
    use std::io;

    #[test]
    fn crlf_and_cp1251_lines() {
        let mut input = b"[MAIN]\r\n  MAP Moscow/load.ini\r\n  TIME 12.0\r\n".to_vec();
        // "player Лётчик" in Windows-1251
        input.extend_from_slice(b"  player \xcb\xb8\xf2\xf7\xe8\xea\r\n");
        input.extend_from_slice(b"  CloudType 0\r\n  CloudHeight 1000\r\n  army 1\r\n  playerNum 0");

        let mission = MisReader::new(input.as_slice()).read_mission().unwrap();

        let player = mission.player.unwrap();
        assert_eq!(player.flight_id.as_deref(), Some("Лётчик"));
        assert_eq!(mission.location_loader.as_deref(), Some("Moscow/load.ini"));
    }

    #[test]
    fn io_errors_are_propagated() {
        struct Broken;

        impl Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("disk on fire"))
            }
        }

        let result = MisReader::new(Broken).read_mission();
        assert_matches!(result, Err(Error::IoError(_)));
    }

    #[test]
    fn missing_file() {
        let result = MisReader::from_path("does/not/exist.mis");
        assert_matches!(result, Err(Error::IoError(_)));
    }
}
