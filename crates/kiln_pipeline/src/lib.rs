//! Component generation pipeline.
//!
//! Turns a [`kiln_core::GenerationRequest`] into a written, checked and
//! recorded artifact:
//!
//! 1. [`PromptAssembler`] builds the conversation from the [`PromptLibrary`].
//! 2. The backend returns raw text, which [`normalize`] unwraps.
//! 3. The artifact is written and checked; one failed check triggers a single
//!    repair attempt carrying the diagnostic (see [`MAX_REPAIR_ATTEMPTS`]).
//! 4. The manifest entry is upserted under the component name.

mod assembler;
mod library;
mod naming;
mod normalize;
mod pipeline;
mod settings;

pub use assembler::{FEW_SHOT_HEADER, PromptAssembler, REFERENCE_PAGE_LABEL, REPAIR_LEAD_IN};
pub use library::{FEW_SHOT_FILE, PromptLibrary, SYSTEM_PROMPT_FILE};
pub use naming::{FALLBACK_COMPONENT_NAME, MAX_NAME_WORDS, derive_component_name};
pub use normalize::normalize;
pub use pipeline::{
    ComponentPipeline, DIAGNOSTIC_DISPLAY_CHARS, GenerationOutcome, MAX_REPAIR_ATTEMPTS,
};
pub use settings::{
    DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE, GenerationSettings,
    GenerationSettingsBuilder, ProjectLayout,
};
