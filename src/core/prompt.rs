//! Prompt construction for the vocabulary and sentence templates
//!
//! The prompt is the only contract with the upstream model: it describes the
//! exact layout of the answer. Nothing here parses the answer afterwards.

use crate::core::languages::{language_flag, language_name};
use crate::core::models::{OutputMode, TranslationRequest};

/// Flags the model may pick from when naming the detected language
const DETECTED_FLAGS: &str =
    "🇬🇧🇺🇿🇷🇺🇩🇪🇫🇷🇪🇸🇮🇹🇵🇹🇨🇳🇯🇵🇰🇷🇸🇦🇹🇷🇮🇳🇵🇱🇳🇱🇸🇪🇨🇿🇺🇦🇮🇷🇮🇱🇹🇭🇻🇳🇮🇩🇰🇿🇦🇿🇹🇯🇰🇬🇹🇲";

/// Build the prompt for a request in the given mode
pub fn build_prompt(mode: OutputMode, request: &TranslationRequest) -> String {
    let target = TargetLanguage::of(&request.target_lang);
    let override_rule = source_override_rule(mode, request);

    let (head, rules) = match mode {
        OutputMode::Vocabulary => (vocabulary_template(&target), vocabulary_rules(&target)),
        OutputMode::Sentence => (sentence_template(&target), sentence_rules(&target)),
    };

    let mut prompt = head;
    prompt.push_str("\n\nRULES:\n");
    if let Some(rule) = override_rule {
        prompt.push_str(&rule);
        prompt.push('\n');
    }
    prompt.push_str(&rules);
    prompt.push_str("\n\n");

    if let Some(context) = request.context() {
        let label = match mode {
            OutputMode::Vocabulary => "User context",
            OutputMode::Sentence => "Context",
        };
        prompt.push_str(&format!("{}: {}\n", label, context));
    }

    let label = match mode {
        OutputMode::Vocabulary => "Word to translate",
        OutputMode::Sentence => "Text to translate",
    };
    prompt.push_str(&format!("{}: \"{}\"\n", label, request.text));
    prompt.push_str(&format!("Target language: {} {}", target.name, target.flag));

    prompt
}

struct TargetLanguage<'a> {
    name: &'a str,
    flag: &'static str,
}

impl<'a> TargetLanguage<'a> {
    fn of(code: &'a str) -> Self {
        Self {
            name: language_name(code),
            flag: language_flag(code),
        }
    }
}

/// Rule pinning the source language; absent when the model should detect it
fn source_override_rule(mode: OutputMode, request: &TranslationRequest) -> Option<String> {
    if request.is_auto_source() {
        return None;
    }

    let source = language_name(&request.source_lang);
    let rule = match mode {
        OutputMode::Vocabulary => format!(
            "- CRITICAL: The user has EXPLICITLY set the source language to {source}. \
             You MUST read the input as {source}, even if it looks like another language \
             (e.g. 'Gift' in German means poison, not present)."
        ),
        OutputMode::Sentence => format!(
            "- CRITICAL: The user has EXPLICITLY set the source language to {source}. \
             Treat the input as {source}, even if it looks like another language."
        ),
    };
    Some(rule)
}

fn vocabulary_template(target: &TargetLanguage<'_>) -> String {
    let name = target.name;
    format!(
        "You are an expert linguist and translator. Translate a word or phrase to {name}.

Answer in EXACTLY this layout (plain text, no markdown, no ** symbols):

Detected Language: [Full Language Name] [flag emoji from this list: {DETECTED_FLAGS}]

[Corrected word if misspelled, otherwise the original word] [pronunciation]

1. [emoji showing the meaning] [Translation in {name}] [part of speech: noun, verb, adj., ...]
   [One line in {name} explaining when or how this meaning is used]
   Example: [Short example sentence in the detected language using the original word]

2. [emoji] [Alternative translation] [part of speech]
   [One line explanation in {name}]
   Example: [Example sentence in the detected language]

(keep numbering while more meanings exist)

📝 Note: [Usage tips, cultural or grammar notes, written in {name}]"
    )
}

fn vocabulary_rules(target: &TargetLanguage<'_>) -> String {
    let name = target.name;
    format!(
        "- Pick emojis that picture the meaning (🏦 for a money bank, 🌊 for a river bank, 👋 for hello, 📚 for book)
- Put the pronunciation in [brackets] right after the word
- Write every explanation in {name}; write the examples in the language of the searched word
- If the input has a typo (\"helo\", \"bitee\"), correct it and show the proper spelling
- Include articles where they matter (der/die/das in German) and mention them in the note
- Plain text only: NO asterisks **, NO markdown
- Be concise but informative"
    )
}

fn sentence_template(target: &TargetLanguage<'_>) -> String {
    let name = target.name;
    format!(
        "You are an expert translator. Translate text to {name}.

Answer in EXACTLY this layout (plain text, no markdown, no ** symbols):

Detected Language: [Language Name] [flag emoji]

[Your accurate, natural translation in {name}]"
    )
}

fn sentence_rules(target: &TargetLanguage<'_>) -> String {
    let name = target.name;
    format!(
        "- Output ONLY the translation after the detected language line
- Use natural, native-sounding {name}
- Keep the original meaning, tone and style
- NO explanations, NO alternatives, NO notes
- NO asterisks **, NO markdown
- Give one clean translation"
    )
}
