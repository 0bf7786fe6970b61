//! Terminal rendering of the assessment card
//!
//! Rendering is a pure function of the view and the theme; the caller
//! decides where the string goes.

use crate::types::{Assessment, Language};
use crate::view::model::AssessmentView;
use crate::view::state::RenderState;
use crate::view::strings::{referral_sentence, t};
use crate::view::theme::{Palette, Theme};
use colored::Colorize;
use std::fmt::Write;

const CARD_WIDTH: usize = 64;

/// Render the full card for the view's current state
pub fn render_card(view: &AssessmentView, theme: Theme) -> String {
    let palette = theme.palette();
    let lang = view.language();
    let mut out = String::new();

    let rule = "=".repeat(CARD_WIDTH);
    let _ = writeln!(out, "{}", rule.color(palette.muted));
    let _ = writeln!(out, "  {}", t("title", lang).color(palette.heading).bold());

    match view.render_state() {
        RenderState::Loading => {
            let _ = writeln!(out, "  {}", t("loading", lang).color(palette.muted).italic());
        }
        RenderState::Error => {
            let message = view.error().unwrap_or_else(|| t("error.advice", lang));
            let _ = writeln!(out, "  {}", message.red().bold());
        }
        RenderState::Ready => {
            if let Some(question) = view.question() {
                let _ = writeln!(
                    out,
                    "  {}: {}",
                    t("question", lang).color(palette.muted),
                    question.color(palette.muted).italic()
                );
            }
            let _ = writeln!(out, "{}", "-".repeat(CARD_WIDTH).color(palette.muted));
            out.push_str(&render_controls(lang, theme, &palette));
            let _ = writeln!(out, "{}", "-".repeat(CARD_WIDTH).color(palette.muted));

            if view.is_translating() {
                let _ = writeln!(out, "  {}", t("translating", lang).color(palette.muted).italic());
            }

            if let Some(assessment) = view.display() {
                out.push_str(&render_assessment(assessment, lang, &palette));
            }

            let _ = writeln!(out, "{}", "-".repeat(CARD_WIDTH).color(palette.muted));
            let _ = writeln!(
                out,
                "  {} {}    {} {}",
                "/doctor".color(palette.accent).bold(),
                t("action.doctor", lang).color(palette.body),
                "/home".color(palette.accent).bold(),
                t("action.home", lang).color(palette.body),
            );
        }
    }

    let _ = writeln!(out, "{}", rule.color(palette.muted));
    out
}

/// Issue, urgency, advice, and the referral sentence
pub fn render_assessment(assessment: &Assessment, lang: Language, palette: &Palette) -> String {
    let mut out = String::new();
    let urgency_color = palette.urgency(assessment.urgency_level());

    let _ = writeln!(
        out,
        "  {}: {}",
        t("label.issue", lang).color(palette.label).bold(),
        assessment.issue.color(palette.body)
    );
    let _ = writeln!(
        out,
        "  {}: {}",
        t("label.urgency", lang).color(palette.label).bold(),
        assessment.urgency.color(urgency_color).bold()
    );
    let _ = writeln!(
        out,
        "  {}: {}",
        t("label.advice", lang).color(palette.label).bold(),
        assessment.advice.color(palette.body)
    );
    let _ = writeln!(out);

    let sentence = referral_sentence(&assessment.referral, lang);
    let sentence = if assessment.referral.is_referral() {
        sentence.color(urgency_color).bold()
    } else {
        sentence.color(palette.urgency_low)
    };
    let _ = writeln!(out, "  {}", sentence);
    let _ = writeln!(out, "  {}", t("disclaimer", lang).color(palette.muted).italic());
    out
}

/// Language and theme toggles with the active choice highlighted
fn render_controls(lang: Language, theme: Theme, palette: &Palette) -> String {
    let languages: Vec<String> = Language::ALL
        .iter()
        .map(|l| {
            let name = l.native_name();
            if *l == lang {
                format!("[{}]", name).color(palette.accent).bold().to_string()
            } else {
                name.color(palette.muted).to_string()
            }
        })
        .collect();

    let themes: Vec<String> = [Theme::Light, Theme::Dark]
        .iter()
        .map(|th| {
            let name = t(th.label_key(), lang);
            if *th == theme {
                format!("[{}]", name).color(palette.accent).bold().to_string()
            } else {
                name.color(palette.muted).to_string()
            }
        })
        .collect();

    format!(
        "  {}: {}    {}: {}\n",
        t("toggle.language", lang).color(palette.label),
        languages.join(" "),
        t("toggle.theme", lang).color(palette.label),
        themes.join(" "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Referral;

    fn sample(referral: Referral) -> Assessment {
        Assessment {
            issue: "Seasonal allergy".to_string(),
            urgency: "Low".to_string(),
            advice: "Try an antihistamine and avoid pollen.".to_string(),
            referral,
        }
    }

    #[test]
    fn test_render_assessment_contains_fields() {
        let palette = Theme::Light.palette();
        let out = render_assessment(&sample(Referral::NoReferral), Language::English, &palette);
        assert!(out.contains("Seasonal allergy"));
        assert!(out.contains("Low"));
        assert!(out.contains("Try an antihistamine and avoid pollen."));
        assert!(out.contains(t("referral.none", Language::English)));
    }

    #[test]
    fn test_render_assessment_specialist() {
        let palette = Theme::Dark.palette();
        let out = render_assessment(
            &sample(Referral::SpecialistReferral("Allergist".to_string())),
            Language::English,
            &palette,
        );
        assert!(out.contains("We recommend that you see a specialist: Allergist."));
    }

    #[test]
    fn test_controls_highlight_active_language() {
        let palette = Theme::Dark.palette();
        let out = render_controls(Language::Hindi, Theme::Dark, &palette);
        assert!(out.contains("[हिन्दी]"));
        assert!(!out.contains("[English]"));
    }
}
