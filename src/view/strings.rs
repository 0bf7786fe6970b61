//! Localized strings for the assessment card
//!
//! `t(key, lang)` returns a static string; unknown keys fall back to the key
//! itself so a missing entry shows up on screen instead of vanishing.
//! Strings with interpolation get their own helpers.

use crate::types::{Language, Referral};

/// Return a localized static string for `key`
pub fn t(key: &'static str, lang: Language) -> &'static str {
    use Language::*;

    match (key, lang) {
        // --- Headers ---
        ("title", English) => "Health Assessment",
        ("title", Hindi) => "स्वास्थ्य आकलन",
        ("question", English) => "Your question",
        ("question", Hindi) => "आपका प्रश्न",
        ("loading", English) => "Analysing your symptoms...",
        ("loading", Hindi) => "आपके लक्षणों का विश्लेषण हो रहा है...",
        ("translating", English) => "Translating...",
        ("translating", Hindi) => "अनुवाद हो रहा है...",

        // --- Field labels ---
        ("label.issue", English) => "Possible issue",
        ("label.issue", Hindi) => "संभावित समस्या",
        ("label.urgency", English) => "Urgency",
        ("label.urgency", Hindi) => "तात्कालिकता",
        ("label.advice", English) => "Advice",
        ("label.advice", Hindi) => "सलाह",

        // --- Referral ---
        ("referral.generic", English) => {
            "We recommend that you consult a doctor about this."
        }
        ("referral.generic", Hindi) => "हम आपको इसके बारे में डॉक्टर से परामर्श करने की सलाह देते हैं।",
        ("referral.none", English) => {
            "This does not appear to need a doctor's visit right now. Monitor your symptoms."
        }
        ("referral.none", Hindi) => {
            "अभी डॉक्टर के पास जाने की आवश्यकता नहीं लगती। अपने लक्षणों पर नज़र रखें।"
        }

        // --- Controls ---
        ("toggle.language", English) => "Language",
        ("toggle.language", Hindi) => "भाषा",
        ("toggle.theme", English) => "Theme",
        ("toggle.theme", Hindi) => "थीम",
        ("theme.light", English) => "Light",
        ("theme.light", Hindi) => "लाइट",
        ("theme.dark", English) => "Dark",
        ("theme.dark", Hindi) => "डार्क",
        ("action.doctor", English) => "Talk to a doctor",
        ("action.doctor", Hindi) => "डॉक्टर से बात करें",
        ("action.home", English) => "Back to home",
        ("action.home", Hindi) => "होम पर वापस जाएं",

        // --- Navigation ---
        ("nav.doctor", English) => "Connecting you with a doctor...",
        ("nav.doctor", Hindi) => "आपको डॉक्टर से जोड़ा जा रहा है...",
        ("nav.home", English) => "Returning to home. Take care!",
        ("nav.home", Hindi) => "होम पर लौट रहे हैं। अपना ख्याल रखें!",

        // --- Errors ---
        ("error.advice", English) => "Failed to get health advice. Please try again.",
        ("error.advice", Hindi) => "स्वास्थ्य सलाह प्राप्त करने में विफल। कृपया पुनः प्रयास करें।",
        ("error.translation", English) => "Failed to translate the advice. Please try again.",
        ("error.translation", Hindi) => "सलाह का अनुवाद करने में विफल। कृपया पुनः प्रयास करें।",

        // --- Disclaimer ---
        ("disclaimer", English) => {
            "This is AI-generated guidance, not a diagnosis."
        }
        ("disclaimer", Hindi) => "यह एआई द्वारा तैयार मार्गदर्शन है, निदान नहीं।",

        (key, _) => key,
    }
}

/// Referral sentence for the card, in `lang`
pub fn referral_sentence(referral: &Referral, lang: Language) -> String {
    match referral {
        Referral::SpecialistReferral(name) => match lang {
            Language::English => format!("We recommend that you see a specialist: {}.", name),
            Language::Hindi => format!("हम आपको विशेषज्ञ से मिलने की सलाह देते हैं: {}।", name),
        },
        Referral::GenericReferral => t("referral.generic", lang).to_string(),
        Referral::NoReferral => t("referral.none", lang).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_has_both_languages() {
        for key in [
            "title",
            "loading",
            "translating",
            "label.issue",
            "label.urgency",
            "label.advice",
            "referral.generic",
            "referral.none",
            "action.doctor",
            "action.home",
            "error.advice",
            "error.translation",
        ] {
            assert_ne!(t(key, Language::English), key, "missing English for {}", key);
            assert_ne!(t(key, Language::Hindi), key, "missing Hindi for {}", key);
            assert_ne!(t(key, Language::English), t(key, Language::Hindi));
        }
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(t("no.such.key", Language::Hindi), "no.such.key");
    }

    #[test]
    fn test_specialist_sentence_interpolates() {
        let referral = Referral::SpecialistReferral("Cardiologist".to_string());
        assert_eq!(
            referral_sentence(&referral, Language::English),
            "We recommend that you see a specialist: Cardiologist."
        );
        assert!(referral_sentence(&referral, Language::Hindi).contains("Cardiologist"));
    }

    #[test]
    fn test_generic_and_none_sentences() {
        assert_eq!(
            referral_sentence(&Referral::GenericReferral, Language::English),
            t("referral.generic", Language::English)
        );
        assert_eq!(
            referral_sentence(&Referral::NoReferral, Language::English),
            t("referral.none", Language::English)
        );
    }
}
