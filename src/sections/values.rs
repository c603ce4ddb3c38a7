use crate::error::DecodeError;
use crate::sections::{DecoderState, Fragment, SectionDecoder, unsupported_section};
use crate::utils::{parse_float, parse_int, split_key_value, to_bool};
use std::collections::HashMap;
use std::str::FromStr;

/// Raw key/value pairs of a section, last write wins
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Values(HashMap<String, String>);

impl Values {
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Value of a required key
    pub fn require(&self, key: &str) -> Result<&str, DecodeError> {
        self.get(key)
            .ok_or_else(|| DecodeError::MissingKey(key.to_string()))
    }

    pub fn int<T: FromStr>(&self, key: &str) -> Result<T, DecodeError> {
        parse_int(self.require(key)?)
    }

    pub fn float(&self, key: &str) -> Result<f64, DecodeError> {
        parse_float(self.require(key)?)
    }

    pub fn flag(&self, key: &str) -> Result<bool, DecodeError> {
        to_bool(self.require(key)?)
    }
}

/// A section made of `key value` lines
pub trait ValuesSection {
    /// Decoder identity
    const NAME: &'static str;

    /// Data derived from the section name
    type Key;

    /// Derive the key from a section name, `None` if the section is not ours
    fn key(section_name: &str) -> Option<Self::Key>;

    /// Rewrite a raw key before it is stored
    fn normalize_key(key: &str) -> &str {
        key
    }

    /// Interpret the collected values
    fn decode(key: Self::Key, values: &Values) -> Result<Fragment, DecodeError>;
}

/// Decoder for any [`ValuesSection`]
pub struct ValuesDecoder<S: ValuesSection> {
    state: DecoderState<(S::Key, Values)>,
}

impl<S: ValuesSection> ValuesDecoder<S> {
    pub fn new() -> Self {
        Self {
            state: DecoderState::Idle,
        }
    }
}

impl<S: ValuesSection> Default for ValuesDecoder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ValuesSection> SectionDecoder for ValuesDecoder<S> {
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
        self.state.start((key, Values::default()));
    }

    fn consume_line(&mut self, line: &str) -> Result<(), DecodeError> {
        let (key, value) = split_key_value(line)?;
        let (_, values) = self.state.accumulator();
        values.insert(S::normalize_key(key), value);
        Ok(())
    }

    fn finish(&mut self) -> Result<Fragment, DecodeError> {
        let (key, values) = self.state.stop();
        S::decode(key, &values)
    }
}
