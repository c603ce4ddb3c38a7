use crate::error::DecodeError;
use crate::sections::{DecoderState, Fragment, SectionDecoder, unsupported_section};

/// A section where every line is one record
pub trait RecordSection {
    /// Decoder identity
    const NAME: &'static str;

    /// Data derived from the section name
    type Key;

    type Record;

    /// Derive the key from a section name, `None` if the section is not ours
    fn key(section_name: &str) -> Option<Self::Key>;

    fn decode_record(line: &str) -> Result<Self::Record, DecodeError>;

    /// Wrap the records in input order
    fn fragment(key: Self::Key, records: Vec<Self::Record>) -> Fragment;
}

/// Decoder for any [`RecordSection`]
pub struct RecordsDecoder<S: RecordSection> {
    state: DecoderState<(S::Key, Vec<S::Record>)>,
}

impl<S: RecordSection> RecordsDecoder<S> {
    pub fn new() -> Self {
        Self {
            state: DecoderState::Idle,
        }
    }
}

impl<S: RecordSection> Default for RecordsDecoder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RecordSection> SectionDecoder for RecordsDecoder<S> {
    fn name(&self) -> &'static str {
        S::NAME
    }

    fn can_handle(&self, section_name: &str) -> bool {
        S::key(section_name).is_some()
    }

    fn begin(&mut self, section_name: &str) {
        let Some(key) = S::key(section_name) else {
            unsupported_section(S::NAME, section_name);
        };
        self.state.start((key, Vec::new()));
    }

    fn consume_line(&mut self, line: &str) -> Result<(), DecodeError> {
        let record = S::decode_record(line)?;
        let (_, records) = self.state.accumulator();
        records.push(record);
        Ok(())
    }

    fn finish(&mut self) -> Result<Fragment, DecodeError> {
        let (key, records) = self.state.stop();
        Ok(S::fragment(key, records))
    }
}
