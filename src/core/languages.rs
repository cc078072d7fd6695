//! Static language metadata: names, native names and flag symbols

use serde::Serialize;

/// Flag shown for codes missing from the table
pub const UNKNOWN_FLAG: &str = "🌐";

/// One supported language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    /// ISO-style code
    pub code: &'static str,
    /// English name
    pub name: &'static str,
    /// Name in the language itself
    pub native_name: &'static str,
    /// Flag emoji
    pub flag: &'static str,
}

const fn lang(
    code: &'static str,
    name: &'static str,
    native_name: &'static str,
    flag: &'static str,
) -> Language {
    Language {
        code,
        name,
        native_name,
        flag,
    }
}

/// Pseudo-language offered as a source option only
pub const AUTO_DETECT: Language = lang("auto", "Auto Detect", "Auto", UNKNOWN_FLAG);

static LANGUAGES: &[Language] = &[
    lang("en", "English", "English", "🇬🇧"),
    lang("uz", "Uzbek", "O'zbek", "🇺🇿"),
    lang("ru", "Russian", "Русский", "🇷🇺"),
    lang("es", "Spanish", "Español", "🇪🇸"),
    lang("fr", "French", "Français", "🇫🇷"),
    lang("de", "German", "Deutsch", "🇩🇪"),
    lang("it", "Italian", "Italiano", "🇮🇹"),
    lang("pt", "Portuguese", "Português", "🇵🇹"),
    lang("zh", "Chinese", "中文", "🇨🇳"),
    lang("ja", "Japanese", "日本語", "🇯🇵"),
    lang("ko", "Korean", "한국어", "🇰🇷"),
    lang("ar", "Arabic", "العربية", "🇸🇦"),
    lang("hi", "Hindi", "हिन्दी", "🇮🇳"),
    lang("tr", "Turkish", "Türkçe", "🇹🇷"),
    lang("pl", "Polish", "Polski", "🇵🇱"),
    lang("nl", "Dutch", "Nederlands", "🇳🇱"),
    lang("sv", "Swedish", "Svenska", "🇸🇪"),
    lang("da", "Danish", "Dansk", "🇩🇰"),
    lang("no", "Norwegian", "Norsk", "🇳🇴"),
    lang("fi", "Finnish", "Suomi", "🇫🇮"),
    lang("cs", "Czech", "Čeština", "🇨🇿"),
    lang("el", "Greek", "Ελληνικά", "🇬🇷"),
    lang("he", "Hebrew", "עברית", "🇮🇱"),
    lang("th", "Thai", "ไทย", "🇹🇭"),
    lang("vi", "Vietnamese", "Tiếng Việt", "🇻🇳"),
    lang("id", "Indonesian", "Bahasa Indonesia", "🇮🇩"),
    lang("ms", "Malay", "Bahasa Melayu", "🇲🇾"),
    lang("uk", "Ukrainian", "Українська", "🇺🇦"),
    lang("ro", "Romanian", "Română", "🇷🇴"),
    lang("hu", "Hungarian", "Magyar", "🇭🇺"),
    lang("bg", "Bulgarian", "Български", "🇧🇬"),
    lang("hr", "Croatian", "Hrvatski", "🇭🇷"),
    lang("sk", "Slovak", "Slovenčina", "🇸🇰"),
    lang("sl", "Slovenian", "Slovenščina", "🇸🇮"),
    lang("sr", "Serbian", "Српски", "🇷🇸"),
    lang("fa", "Persian", "فارسی", "🇮🇷"),
    lang("bn", "Bengali", "বাংলা", "🇧🇩"),
    lang("ta", "Tamil", "தமிழ்", "🇮🇳"),
    lang("te", "Telugu", "తెలుగు", "🇮🇳"),
    lang("ml", "Malayalam", "മലയാളം", "🇮🇳"),
    lang("kn", "Kannada", "ಕನ್ನಡ", "🇮🇳"),
    lang("mr", "Marathi", "मराठी", "🇮🇳"),
    lang("gu", "Gujarati", "ગુજરાતી", "🇮🇳"),
    lang("pa", "Punjabi", "ਪੰਜਾਬੀ", "🇮🇳"),
    lang("sw", "Swahili", "Kiswahili", "🇰🇪"),
    lang("af", "Afrikaans", "Afrikaans", "🇿🇦"),
    lang("tg", "Tajik", "Тоҷикӣ", "🇹🇯"),
    lang("kk", "Kazakh", "Қазақша", "🇰🇿"),
    lang("az", "Azerbaijani", "Azərbaycan", "🇦🇿"),
    lang("ky", "Kyrgyz", "Кыргызча", "🇰🇬"),
    lang("tk", "Turkmen", "Türkmençe", "🇹🇲"),
];

/// Every supported language, in picker order
pub fn all_languages() -> &'static [Language] {
    LANGUAGES
}

/// Look up a language by code
pub fn find_language(code: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|lang| lang.code == code)
}

/// English name of a language, or the code itself if unknown
pub fn language_name(code: &str) -> &str {
    find_language(code).map(|lang| lang.name).unwrap_or(code)
}

/// Flag symbol of a language, or the globe if unknown
pub fn language_flag(code: &str) -> &'static str {
    find_language(code)
        .map(|lang| lang.flag)
        .unwrap_or(UNKNOWN_FLAG)
}

/// Case-insensitive search over name, native name and code
pub fn search_languages(query: &str) -> Vec<&'static Language> {
    let query = query.to_lowercase();
    LANGUAGES
        .iter()
        .filter(|lang| {
            lang.name.to_lowercase().contains(&query)
                || lang.native_name.to_lowercase().contains(&query)
                || lang.code.to_lowercase().contains(&query)
        })
        .collect()
}
