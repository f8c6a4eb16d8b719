//! Target languages and locale directory naming.

use anyhow::Result;

use crate::ui::Style;

/// Source-language sentinel asking the backend to detect the language.
pub const AUTO_DETECT: &str = "auto";

/// One translation target: a backend language code and a display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationTarget {
    pub code: &'static str,
    pub name: &'static str,
}

/// Supported target languages, keyed by the backend's language codes.
pub const SUPPORTED_TARGETS: &[TranslationTarget] = &[
    TranslationTarget { code: "af", name: "Afrikaans" },
    TranslationTarget { code: "ar", name: "Arabic" },
    TranslationTarget { code: "be", name: "Belarusian" },
    TranslationTarget { code: "bg", name: "Bulgarian" },
    TranslationTarget { code: "bn", name: "Bengali" },
    TranslationTarget { code: "ca", name: "Catalan" },
    TranslationTarget { code: "cs", name: "Czech" },
    TranslationTarget { code: "da", name: "Danish" },
    TranslationTarget { code: "de", name: "German" },
    TranslationTarget { code: "el", name: "Greek" },
    TranslationTarget { code: "en", name: "English" },
    TranslationTarget { code: "es", name: "Spanish" },
    TranslationTarget { code: "et", name: "Estonian" },
    TranslationTarget { code: "fa", name: "Persian" },
    TranslationTarget { code: "fi", name: "Finnish" },
    TranslationTarget { code: "fr", name: "French" },
    TranslationTarget { code: "hi", name: "Hindi" },
    TranslationTarget { code: "hr", name: "Croatian" },
    TranslationTarget { code: "hu", name: "Hungarian" },
    TranslationTarget { code: "id", name: "Indonesian" },
    TranslationTarget { code: "is", name: "Icelandic" },
    TranslationTarget { code: "it", name: "Italian" },
    TranslationTarget { code: "iw", name: "Hebrew" },
    TranslationTarget { code: "ja", name: "Japanese" },
    TranslationTarget { code: "jw", name: "Javanese" },
    TranslationTarget { code: "ko", name: "Korean" },
    TranslationTarget { code: "lt", name: "Lithuanian" },
    TranslationTarget { code: "lv", name: "Latvian" },
    TranslationTarget { code: "ms", name: "Malay" },
    TranslationTarget { code: "nl", name: "Dutch" },
    TranslationTarget { code: "no", name: "Norwegian" },
    TranslationTarget { code: "pl", name: "Polish" },
    TranslationTarget { code: "pt", name: "Portuguese" },
    TranslationTarget { code: "ro", name: "Romanian" },
    TranslationTarget { code: "ru", name: "Russian" },
    TranslationTarget { code: "sk", name: "Slovak" },
    TranslationTarget { code: "sl", name: "Slovenian" },
    TranslationTarget { code: "sr", name: "Serbian" },
    TranslationTarget { code: "sv", name: "Swedish" },
    TranslationTarget { code: "sw", name: "Swahili" },
    TranslationTarget { code: "ta", name: "Tamil" },
    TranslationTarget { code: "te", name: "Telugu" },
    TranslationTarget { code: "th", name: "Thai" },
    TranslationTarget { code: "tl", name: "Filipino" },
    TranslationTarget { code: "tr", name: "Turkish" },
    TranslationTarget { code: "uk", name: "Ukrainian" },
    TranslationTarget { code: "ur", name: "Urdu" },
    TranslationTarget { code: "vi", name: "Vietnamese" },
    TranslationTarget { code: "zh-CN", name: "Chinese (Simplified)" },
    TranslationTarget { code: "zh-TW", name: "Chinese (Traditional)" },
];

/// Codes whose resource directory suffix differs from the backend code.
const DIR_SUFFIX_OVERRIDES: &[(&str, &str)] = &[
    ("zh-CN", "zh-rCN"),
    ("zh-TW", "zh-rTW"),
    ("tl", "fil"),
    ("id", "in-rID"),
    ("jw", "jv"),
];

/// Resource directory name (`values-<suffix>`) for a language code.
pub fn values_dir_name(code: &str) -> String {
    let suffix = DIR_SUFFIX_OVERRIDES
        .iter()
        .find(|(c, _)| *c == code)
        .map_or(code, |(_, s)| s);
    format!("values-{suffix}")
}

/// Prints all supported target language codes to stdout.
pub fn print_targets() {
    println!("{}", Style::header("Supported target languages"));
    for target in SUPPORTED_TARGETS {
        println!(
            "  {:6} {}",
            Style::code(target.code),
            Style::secondary(target.name)
        );
    }
}

/// Looks up the target for a language code.
///
/// # Errors
///
/// Returns an error if the language code is not supported.
pub fn resolve_target(code: &str) -> Result<TranslationTarget> {
    SUPPORTED_TARGETS
        .iter()
        .copied()
        .find(|t| t.code == code)
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Invalid language code: '{code}'\n\n\
                 Valid codes: ja, ko, fr, de, es, zh-CN, ...\n\
                 Run 'slx languages' to see all supported codes."
            )
        })
}
