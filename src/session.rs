//! Page session state
//!
//! One `EditorSession` owns everything the page mutates: the SRO and
//! syllabics buffers, the user settings, and the conversion library handle.
//! DOM callbacks call into it and write back whatever it returns.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fragment::{self, FragmentError, FragmentState};
use crate::models::buffers::{Authority, BufferId};
use crate::models::settings::{LongAccents, Settings};
use crate::text::buffer::{BufferState, EditResult};

/// Fragment that opens the settings panel
pub const SETTINGS_FRAGMENT: &str = "#settings";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Fragment(#[from] FragmentError),

    #[error("Unknown buffer: {0:?}")]
    UnknownBuffer(String),
}

/// The SRO/syllabics conversion library
pub trait Transliterator {
    fn sro_to_syllabics(&self, sro: &str) -> String;

    fn syllabics_to_sro(&self, syllabics: &str, long_accents: LongAccents) -> String;
}

/// Outcome of restoring state from the location on page load
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitResult {
    pub authority: Authority,
    pub sro: String,
    pub syl: String,
}

/// Outcome of a `hashchange` navigation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HashChange {
    pub open_settings: bool,
    /// Buffers overwritten from the fragment
    pub updated: Vec<BufferId>,
    pub sro: String,
    pub syl: String,
}

/// Input for the JSON conversion handler
#[derive(Debug, Deserialize)]
struct ConversionRequest {
    sro: Option<String>,
    syl: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
enum ConversionResponse {
    Syl(String),
    Sro(String),
    Error(&'static str),
}

pub struct EditorSession<T> {
    converter: T,
    settings: Settings,
    sro: BufferState,
    syl: BufferState,
}

impl<T: Transliterator> EditorSession<T> {
    pub fn new(converter: T, settings: Settings) -> Self {
        Self {
            converter,
            settings,
            sro: BufferState::new(BufferId::Sro, "", settings.double_vowels),
            // Doubling only ever applies to the roman orthography
            syl: BufferState::new(BufferId::Syl, "", false),
        }
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn value(&self, id: BufferId) -> &str {
        self.buffer(id).value()
    }

    /// Look a buffer up by its DOM id / fragment key
    pub fn value_by_name(&self, name: &str) -> Result<&str, SessionError> {
        BufferId::from_key(name)
            .map(|id| self.value(id))
            .ok_or_else(|| SessionError::UnknownBuffer(name.to_string()))
    }

    /// Seed the buffers from the controls' current contents
    pub fn set_values(&mut self, sro: &str, syl: &str) {
        self.sro.set_value(sro);
        self.syl.set_value(syl);
    }

    fn buffer(&self, id: BufferId) -> &BufferState {
        match id {
            BufferId::Sro => &self.sro,
            BufferId::Syl => &self.syl,
        }
    }

    fn buffer_mut(&mut self, id: BufferId) -> &mut BufferState {
        match id {
            BufferId::Sro => &mut self.sro,
            BufferId::Syl => &mut self.syl,
        }
    }

    /// Restore buffers from the location fragment on load and run the first
    /// conversion.
    ///
    /// SRO wins when the fragment carries both buffers.
    pub fn initialize(&mut self, location_fragment: &str) -> Result<InitResult, SessionError> {
        let state = fragment::decode(location_fragment)?;
        let updated = self.apply_fragment(&state);

        let authority = updated
            .first()
            .copied()
            .map(Authority::from)
            .unwrap_or_default();
        log::info!("initial authority: {:?}", authority);

        self.convert_from(authority.buffer());

        Ok(InitResult {
            authority,
            sro: self.sro.value().to_string(),
            syl: self.syl.value().to_string(),
        })
    }

    /// Handle navigation to a new fragment.
    ///
    /// A malformed fragment leaves both buffers untouched.
    pub fn on_hash_change(&mut self, location_fragment: &str) -> Result<HashChange, SessionError> {
        let open_settings = location_fragment == SETTINGS_FRAGMENT;
        if open_settings {
            log::debug!("opening settings panel");
        }

        let state = fragment::decode(location_fragment)?;
        let updated = self.apply_fragment(&state);
        self.convert_from(updated.first().copied());

        Ok(HashChange {
            open_settings,
            updated,
            sro: self.sro.value().to_string(),
            syl: self.syl.value().to_string(),
        })
    }

    /// Overwrite only the buffers named in the fragment, SRO first
    fn apply_fragment(&mut self, state: &FragmentState) -> Vec<BufferId> {
        let mut updated = Vec::new();
        for id in BufferId::ALL {
            if let Some(value) = state.buffer(id) {
                self.buffer_mut(id).set_value(value);
                updated.push(id);
            }
        }
        updated
    }

    fn convert_from(&mut self, source: Option<BufferId>) {
        match source {
            Some(BufferId::Sro) => self.convert_sro(),
            Some(BufferId::Syl) => self.convert_syllabics(),
            None => {}
        }
    }

    fn convert_sro(&mut self) {
        let syl = self.converter.sro_to_syllabics(self.sro.value());
        self.syl.set_value(&syl);
    }

    fn convert_syllabics(&mut self) {
        let sro = self
            .converter
            .syllabics_to_sro(self.syl.value(), self.settings.long_accents);
        self.sro.set_value(&sro);
    }

    /// The SRO control changed. Runs the doubled-vowel rule (if enabled),
    /// then refreshes the syllabics buffer from the result.
    pub fn on_sro_input(&mut self, value: &str) -> EditResult {
        let result = self.sro.apply_edit(value);
        self.convert_sro();
        result
    }

    /// The syllabics control changed; returns the new SRO text
    pub fn on_syl_input(&mut self, value: &str) -> String {
        self.syl.set_value(value);
        self.convert_syllabics();
        self.sro.value().to_string()
    }

    pub fn set_double_vowels(&mut self, enabled: bool) {
        self.settings.double_vowels = enabled;
        self.sro.set_double_vowels(enabled);
    }

    /// Switching the long-vowel style re-renders SRO from syllabics
    pub fn set_long_accents(&mut self, long_accents: LongAccents) -> String {
        self.settings.long_accents = long_accents;
        self.convert_syllabics();
        self.sro.value().to_string()
    }

    /// Encode both buffers into a shareable fragment
    pub fn to_fragment(&self, tag: &str) -> Result<String, FragmentError> {
        let state: FragmentState = BufferId::ALL
            .into_iter()
            .map(|id| (id.key(), self.value(id)))
            .collect();
        fragment::encode(tag, &state)
    }

    /// JSON conversion request: `{"sro": ..}` answers `{"syl": ..}` and
    /// `{"syl": ..}` answers `{"sro": ..}`.
    pub fn handle_request(&self, raw: &str) -> String {
        let response = match serde_json::from_str::<ConversionRequest>(raw) {
            Ok(ConversionRequest { sro: Some(sro), .. }) => {
                ConversionResponse::Syl(self.converter.sro_to_syllabics(&sro))
            }
            Ok(ConversionRequest { syl: Some(syl), .. }) => ConversionResponse::Sro(
                self.converter
                    .syllabics_to_sro(&syl, self.settings.long_accents),
            ),
            _ => ConversionResponse::Error("invalid request"),
        };

        serde_json::to_string(&response)
            .unwrap_or_else(|_| r#"{"error":"invalid request"}"#.to_string())
    }
}
