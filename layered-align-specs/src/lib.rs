#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Fixture-driven regression testing for layered-align.
//!
//! Each fixture is a TOML file declaring a tagged and parsed sentence pair,
//! the paraphrase pairs the relatedness oracle knows, and the alignment the
//! full pipeline must produce.
//!
//! ## Modules
//!
//! - [`fixture`] - Fixture types and TOML parsing
//! - [`loader`] - Loading single fixtures and whole directories
//! - [`runner`] - Running fixtures and comparing alignments
//! - [`errors`] - Error types for the harness

pub mod errors;
pub mod fixture;
pub mod loader;
pub mod runner;

pub use errors::{SpecError, SpecResult};
pub use fixture::{parse_fixture, AlignmentFixture, FixtureSentence, FixtureToken};
pub use loader::{load_all_fixtures, load_fixture};
pub use runner::{format_summary, run_fixture, FixtureOutcome};
