//! Line dispatcher driving the section decoders

use crate::assemble::assemble;
use crate::error::{MissionParsingError, Result, Warning};
use crate::sections::{FlightInfoDecoder, Fragment, OutputKey, SectionDecoder, default_decoders};
use crate::types::Mission;
use crate::utils::{section_name, strip_comments};
use log::{debug, trace, warn};
use std::collections::{HashMap, HashSet};

/// Streaming mission parser
///
/// Feed it the lines of a `.mis` file in order, then call
/// [`MissionParser::finish`] to get the assembled [`Mission`]. Every parser
/// owns a fresh set of decoders, so one instance parses exactly one file.
///
/// # Example
///
/// ```
/// use il2fb_mission_parser::MissionParser;
///
/// let mut parser = MissionParser::new();
/// let mut warnings = Vec::new();
///
/// parser.feed_line(0, "[Wing]", &mut warnings)?;
/// parser.feed_line(1, "  r0100 ; first flight", &mut warnings)?;
///
/// let mission = parser.finish(&mut warnings)?;
/// assert!(mission.objects.flights.is_empty());
/// assert_eq!(warnings.len(), 1);
/// # Ok::<(), il2fb_mission_parser::Error>(())
/// ```
pub struct MissionParser {
    decoders: Vec<Box<dyn SectionDecoder>>,
    flight_info: FlightInfoDecoder,
    active: Option<Active>,
    fragments: HashMap<OutputKey, Fragment>,
    /// Flight ids listed in `Wing` so far
    known_flights: HashSet<String>,
}

/// Decoder owning the current section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Active {
    Registered(usize),
    FlightInfo,
    /// Unknown section, its lines are dropped
    Skipped,
}

impl MissionParser {
    pub fn new() -> Self {
        Self {
            decoders: default_decoders(),
            flight_info: FlightInfoDecoder::new(),
            active: None,
            fragments: HashMap::new(),
            known_flights: HashSet::new(),
        }
    }

    /// Process one raw line
    ///
    /// `index` is the 0-based position of the line in the input and only
    /// used to locate errors.
    pub fn feed_line(
        &mut self,
        index: usize,
        line: &str,
        warnings: &mut Vec<Warning>,
    ) -> Result<()> {
        let line = strip_comments(line);
        if line.is_empty() {
            return Ok(());
        }

        if let Some(name) = section_name(line) {
            self.finish_section()?;
            self.begin_section(name, warnings);
            return Ok(());
        }

        let decoder: &mut dyn SectionDecoder = match self.active {
            Some(Active::Registered(position)) => self.decoders[position].as_mut(),
            Some(Active::FlightInfo) => &mut self.flight_info,
            Some(Active::Skipped) | None => return Ok(()),
        };

        trace!("{}: {line:?}", decoder.name());
        decoder
            .consume_line(line)
            .map_err(|source| MissionParsingError::in_line(index, line, source))?;
        Ok(())
    }

    /// Finish the last section and assemble the mission
    pub fn finish(mut self, warnings: &mut Vec<Warning>) -> Result<Mission> {
        self.finish_section()?;
        Ok(assemble(self.fragments, warnings))
    }

    /// Feed all `lines` and assemble the mission
    pub fn parse<I>(mut self, lines: I, warnings: &mut Vec<Warning>) -> Result<Mission>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for (index, line) in lines.into_iter().enumerate() {
            self.feed_line(index, line.as_ref(), warnings)?;
        }
        self.finish(warnings)
    }

    fn begin_section(&mut self, name: &str, warnings: &mut Vec<Warning>) {
        let active = if self.known_flights.contains(name) && self.flight_info.can_handle(name) {
            self.flight_info.begin(name);
            debug!("Section {name:?} handled by {}", self.flight_info.name());
            Active::FlightInfo
        } else if let Some(position) = self.decoders.iter().position(|d| d.can_handle(name)) {
            let decoder = &mut self.decoders[position];
            decoder.begin(name);
            debug!("Section {name:?} handled by {}", decoder.name());
            Active::Registered(position)
        } else {
            warn!("Skipping unknown section {name:?}");
            warnings.push(Warning::UnknownSection {
                name: name.to_string(),
            });
            Active::Skipped
        };

        self.active = Some(active);
    }

    fn finish_section(&mut self) -> Result<()> {
        let decoder: &mut dyn SectionDecoder = match self.active.take() {
            Some(Active::Registered(position)) => self.decoders[position].as_mut(),
            Some(Active::FlightInfo) => &mut self.flight_info,
            Some(Active::Skipped) | None => return Ok(()),
        };

        let name = decoder.name();
        let fragment = decoder
            .finish()
            .map_err(|source| MissionParsingError::in_finalization(name, source))?;

        let key = fragment.key();
        debug!("{name} produced {key}");

        if let Fragment::Flights(flights) = &fragment {
            self.known_flights.extend(flights.iter().cloned());
        }
        self.fragments.insert(key, fragment);
        Ok(())
    }
}

impl Default for MissionParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a whole mission from a string
///
/// Warnings are logged and discarded, use [`MissionParser`] to collect them.
///
/// ```
/// let mission = il2fb_mission_parser::parse_str(
///     "[MAIN]\n  MAP Moscow/load.ini\n  TIME 12.0\n  CloudType 0\n  CloudHeight 1000\n  army 1\n  playerNum 0\n",
/// )?;
/// assert_eq!(mission.location_loader.as_deref(), Some("Moscow/load.ini"));
/// # Ok::<(), il2fb_mission_parser::Error>(())
/// ```
pub fn parse_str(input: &str) -> Result<Mission> {
    parse_lines(input.lines())
}

/// Parse a whole mission from already split lines
pub fn parse_lines<I>(lines: I) -> Result<Mission>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut warnings = Vec::new();
    MissionParser::new().parse(lines, &mut warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DecodeError, Error, ErrorLocation};
    use claims::{assert_matches, assert_ok};

    fn parse(lines: &[&str]) -> (Result<Mission>, Vec<Warning>) {
        let mut warnings = Vec::new();
        let result = MissionParser::new().parse(lines, &mut warnings);
        (result, warnings)
    }

    #[test]
    fn empty_input() {
        let (result, warnings) = parse(&[]);
        assert_eq!(assert_ok!(result), Mission::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn lines_before_first_header_are_ignored() {
        let (result, _) = parse(&["MAP Moscow/load.ini", "", "; comment"]);
        assert_eq!(assert_ok!(result), Mission::default());
    }

    #[test]
    fn unknown_section_is_skipped() {
        let (result, warnings) = parse(&[
            "[BornPlaceCountriesX]",
            "de",
            "[FrontMarker]",
            "FrontMarker0 7636.65 94683.02 1",
        ]);

        let mission = assert_ok!(result);
        assert_eq!(mission.objects.markers.len(), 1);
        assert_eq!(
            warnings,
            [Warning::UnknownSection {
                name: "BornPlaceCountriesX".to_string()
            }]
        );
    }

    #[test]
    fn last_write_wins_for_repeated_sections() {
        let (result, _) = parse(&[
            "[FrontMarker]",
            "FrontMarker0 7636.65 94683.02 1",
            "[FrontMarker]",
            "FrontMarker1 0.00 0.00 2",
            "FrontMarker2 0.00 0.00 2",
        ]);

        let markers = assert_ok!(result).objects.markers;
        let ids: Vec<_> = markers.iter().map(|marker| marker.id.as_str()).collect();
        assert_eq!(ids, ["FrontMarker1", "FrontMarker2"]);
    }

    #[test]
    fn flight_info_is_claimed_through_wing() {
        let (result, warnings) = parse(&[
            "[Wing]",
            "r0100",
            "[r0100]",
            "Planes 1",
            "Skill 1",
            "Class air.I_16TYPE24",
            "Fuel 100",
            "weapons default",
            "[g0100]",
            "Planes 1",
        ]);

        let mission = assert_ok!(result);
        assert_eq!(mission.objects.flights.len(), 1);
        assert_eq!(mission.objects.flights[0].code, "I_16TYPE24");
        assert_eq!(
            warnings,
            [Warning::UnknownSection {
                name: "g0100".to_string()
            }]
        );
    }

    #[test]
    fn line_errors_carry_index_and_content() {
        let (result, _) = parse(&["[Target]", "", "  1 1 x 60 750 133960 87552 1350 ; broken"]);
        let Err(Error::MissionParsing(error)) = result else {
            panic!("Expected a parsing error");
        };

        assert_eq!(
            error.location,
            ErrorLocation::Line {
                index: 2,
                content: "1 1 x 60 750 133960 87552 1350".to_string()
            }
        );
        assert_matches!(error.source, DecodeError::InvalidNumber { .. });
    }

    #[test]
    fn finalization_errors_carry_decoder_name() {
        let (result, _) = parse(&["[MAIN]", "MAP Moscow/load.ini", "[Wing]"]);
        let Err(Error::MissionParsing(error)) = result else {
            panic!("Expected a parsing error");
        };

        assert_eq!(error.location, ErrorLocation::Finalization { decoder: "MAIN" });
        assert_matches!(error.source, DecodeError::MissingKey(_));
    }
}
