use crate::error::DecodeError;
use crate::sections::{DecoderState, Fragment, SectionDecoder, unsupported_section};
use crate::types::AllowedAircraft;
use crate::utils::{CONTINUATION_MARK, Fields};

const PREFIX: &str = "BornPlace";

/// Aircraft allowed at the home base with the same ordinal (`BornPlaceN`)
///
/// Line format: `code [limit] [weapons...]`. A line starting with `+`
/// carries more weapon limitations for the previous aircraft.
pub struct BornPlaceAircraftsDecoder {
    state: DecoderState<Roster>,
}

struct Roster {
    index: usize,
    aircrafts: Vec<AllowedAircraft>,
    pending: Option<AllowedAircraft>,
}

impl BornPlaceAircraftsDecoder {
    pub fn new() -> Self {
        Self {
            state: DecoderState::Idle,
        }
    }

    fn index(section_name: &str) -> Option<usize> {
        section_name.strip_prefix(PREFIX)?.parse().ok()
    }
}

impl Default for BornPlaceAircraftsDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionDecoder for BornPlaceAircraftsDecoder {
    fn name(&self) -> &'static str {
        "BornPlaceN"
    }

    fn can_handle(&self, section_name: &str) -> bool {
        Self::index(section_name).is_some()
    }

    fn begin(&mut self, section_name: &str) {
        let Some(index) = Self::index(section_name) else {
            unsupported_section(self.name(), section_name);
        };
        self.state.start(Roster {
            index,
            aircrafts: Vec::new(),
            pending: None,
        });
    }

    fn consume_line(&mut self, line: &str) -> Result<(), DecodeError> {
        let roster = self.state.accumulator();
        let fields = Fields::new(line);

        if fields.get(0)? == CONTINUATION_MARK {
            let pending = roster
                .pending
                .as_mut()
                .ok_or(DecodeError::OrphanContinuation)?;
            pending
                .weapon_limitations
                .extend(fields.rest(1).iter().map(|weapon| weapon.to_string()));
            return Ok(());
        }

        // Negative limits mean "unlimited"
        let limit = match fields.rest(1) {
            [] => None,
            _ => Some(fields.int::<i32>(1)?).filter(|limit| *limit >= 0),
        };
        let aircraft = AllowedAircraft {
            code: fields.get(0)?.to_string(),
            limit,
            weapon_limitations: fields.rest(2).iter().map(|weapon| weapon.to_string()).collect(),
        };

        if let Some(previous) = roster.pending.replace(aircraft) {
            roster.aircrafts.push(previous);
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<Fragment, DecodeError> {
        let Roster {
            index,
            mut aircrafts,
            pending,
        } = self.state.stop();
        aircrafts.extend(pending);
        Ok(Fragment::HomeBaseAircrafts { index, aircrafts })
    }
}
