//! # slx - Android String Resource Translator
//!
//! `slx` translates Android `strings.xml` resources into other languages
//! through the free Google web-translate endpoint. Translatable spans are
//! grouped into size-bounded batches, the backend's nested positional
//! response is decoded back onto the original spans, and one
//! `values-<suffix>/strings.xml` is written per target language.
//!
//! ## Features
//!
//! - **Batched queries**: spans are grouped under character and entry
//!   ceilings to keep request counts low
//! - **Placeholder safety**: `<xliff:g>` and other sub-elements pass
//!   through untouched
//! - **Incremental runs**: entries already present in a prior translation
//!   file are reused unless `--overwrite` is given
//! - **Self-throttling**: cooldown pauses keep the endpoint's abuse
//!   protections at bay
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate into Japanese and Korean
//! slx ./app/src/main/res/values/strings.xml --to ja,ko
//!
//! # Force a full re-translation
//! slx --overwrite ./res/values/strings.xml --to fr
//!
//! # List supported language codes
//! slx languages
//! ```
//!
//! ## Configuration
//!
//! Defaults are stored in `~/.config/slx/config.toml`:
//!
//! ```toml
//! [translation]
//! targets = ["ja", "ko", "zh-CN"]
//! batch_chars = 360
//! batch_entries = 28
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// File system utilities.
pub mod fs;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// The per-language translation pipeline.
pub mod pipeline;

/// The strings.xml data model, parser, and serializer.
pub mod resource;

/// Batching, decoding, throttling, and the backend client.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
