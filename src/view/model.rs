//! Assessment view model
//!
//! Owns everything the card needs: the question, the selected language, the
//! original assessment, the lazily built Hindi translation, and the single
//! error slot. Operations take `&mut self`, so the write-once translation
//! cache never sees interleaved writers. Progress is published through an
//! [`Activity`] handle that stays readable while an operation is pending.
//!
//! The view holds a [`CancellationToken`] that is handed to every service
//! call. After [`AssessmentView::teardown`] (or drop) in-flight calls return
//! early and any result that still arrives is discarded without touching
//! state.

use crate::errors::Result;
use crate::navigation::NavigationPayload;
use crate::services::{AdviceService, Translator};
use crate::types::{Assessment, Language};
use crate::view::activity::Activity;
use crate::view::state::{RenderEvent, RenderState};
use crate::view::strings::t;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Headless state behind the assessment card
pub struct AssessmentView {
    advice: Arc<dyn AdviceService>,
    translator: Arc<dyn Translator>,
    cancel: CancellationToken,

    question: Option<String>,
    language: Language,
    assessment: Option<Assessment>,
    translation: Option<Assessment>,
    error: Option<String>,
    state: RenderState,
    activity: Activity,
}

impl AssessmentView {
    /// Create a view; `language` defaults to English when absent
    pub fn new(
        advice: Arc<dyn AdviceService>,
        translator: Arc<dyn Translator>,
        language: Option<Language>,
    ) -> Self {
        Self {
            advice,
            translator,
            cancel: CancellationToken::new(),
            question: None,
            language: language.unwrap_or_default(),
            assessment: None,
            translation: None,
            error: None,
            state: RenderState::Loading,
            activity: Activity::new(),
        }
    }

    /// Create a view from a navigation payload and load its question
    pub async fn open(
        advice: Arc<dyn AdviceService>,
        translator: Arc<dyn Translator>,
        payload: &NavigationPayload,
    ) -> Self {
        let mut view = Self::new(advice, translator, payload.language);
        view.load(Some(payload.question.as_str())).await;
        view
    }

    /// Fetch the assessment for `question`.
    ///
    /// No-op for an absent or blank question, for the question already
    /// loaded, and after teardown. A different question starts over from
    /// `Loading`. When Hindi is selected the translation is chained right
    /// after the advice resolves.
    pub async fn load(&mut self, question: Option<&str>) {
        let Some(question) = question.map(str::trim).filter(|q| !q.is_empty()) else {
            debug!("no question supplied, nothing to load");
            return;
        };

        if self.question.as_deref() == Some(question) {
            debug!("question unchanged, skipping advice fetch");
            return;
        }

        if self.cancel.is_cancelled() {
            return;
        }

        self.question = Some(question.to_string());
        self.assessment = None;
        self.translation = None;
        self.error = None;
        self.state = RenderState::Loading;

        let result = {
            let _busy = self.activity.begin_loading();
            self.advice.get_health_advice(question, &self.cancel).await
        };

        if self.cancel.is_cancelled() {
            debug!("view torn down, discarding advice result");
            return;
        }

        match result {
            Ok(assessment) => {
                info!(urgency = %assessment.urgency, "assessment loaded");
                self.assessment = Some(assessment);
                self.apply(RenderEvent::AdviceLoaded);

                if self.language == Language::Hindi && self.translation.is_none() {
                    self.translate().await;
                }
            }
            Err(e) => {
                error!(error = %e, "failed to get health advice");
                self.fail("error.advice", RenderEvent::AdviceFailed);
            }
        }
    }

    /// Build the Hindi translation if it is not cached yet.
    ///
    /// No-op without an assessment, with a cached translation, in the
    /// terminal error state, and after teardown.
    pub async fn translate(&mut self) {
        if self.translation.is_some() || self.state.is_terminal() || self.cancel.is_cancelled() {
            return;
        }

        let Some(original) = self.assessment.clone() else {
            return;
        };

        let result = {
            let _busy = self.activity.begin_translating();
            self.translate_fields(&original).await
        };

        if self.cancel.is_cancelled() {
            debug!("view torn down, discarding translation");
            return;
        }

        match result {
            Ok((issue, advice)) => {
                info!("assessment translated to Hindi");
                self.translation = Some(original.with_translation(issue, advice));
                self.apply(RenderEvent::TranslationLoaded);
            }
            Err(e) => {
                error!(error = %e, "failed to translate assessment");
                self.fail("error.translation", RenderEvent::TranslationFailed);
            }
        }
    }

    async fn translate_fields(&self, original: &Assessment) -> Result<(String, String)> {
        tokio::try_join!(
            self.translator.translate_to_hindi(&original.issue, &self.cancel),
            self.translator.translate_to_hindi(&original.advice, &self.cancel),
        )
    }

    /// Switch the display language.
    ///
    /// `None` (a deselected toggle) and the current language are ignored.
    /// Switching to Hindi translates on first use; switching back to
    /// English keeps the cache.
    pub async fn select_language(&mut self, language: Option<Language>) {
        let Some(language) = language else {
            return;
        };

        if language == self.language {
            return;
        }

        debug!(from = %self.language, to = %language, "language changed");
        self.language = language;

        if language == Language::Hindi && self.translation.is_none() && self.assessment.is_some() {
            self.translate().await;
        }
    }

    /// Record the card shows: the translation in Hindi when it exists,
    /// otherwise the original
    pub fn display(&self) -> Option<&Assessment> {
        match (self.language, &self.translation) {
            (Language::Hindi, Some(translated)) => Some(translated),
            _ => self.assessment.as_ref(),
        }
    }

    /// Cancel in-flight calls and ignore their results
    pub fn teardown(&self) {
        if !self.cancel.is_cancelled() {
            debug!("tearing down assessment view");
            self.cancel.cancel();
        }
    }

    /// Token another task can use to tear this view down
    pub fn cancel_handle(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn is_torn_down(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub fn render_state(&self) -> RenderState {
        self.state
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn question(&self) -> Option<&str> {
        self.question.as_deref()
    }

    pub fn assessment(&self) -> Option<&Assessment> {
        self.assessment.as_ref()
    }

    pub fn translation(&self) -> Option<&Assessment> {
        self.translation.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.activity.is_loading()
    }

    pub fn is_translating(&self) -> bool {
        self.activity.is_translating()
    }

    /// Handle for watching progress while an operation holds the view
    pub fn busy_handle(&self) -> Activity {
        self.activity.clone()
    }

    fn fail(&mut self, key: &'static str, event: RenderEvent) {
        self.error = Some(t(key, self.language).to_string());
        self.apply(event);
    }

    fn apply(&mut self, event: RenderEvent) {
        match self.state.transition(event) {
            Ok(next) => self.state = next,
            Err(e) => warn!(error = %e, "ignoring render event"),
        }
    }
}

impl Drop for AssessmentView {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AdvisorError;
    use crate::types::Referral;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedAdvice {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl AdviceService for FixedAdvice {
        async fn get_health_advice(
            &self,
            _question: &str,
            _cancel: &CancellationToken,
        ) -> Result<Assessment> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Assessment {
                issue: "Tension headache".to_string(),
                urgency: "Low".to_string(),
                advice: "Rest and drink water.".to_string(),
                referral: Referral::NoReferral,
            })
        }
    }

    struct PrefixTranslator;

    #[async_trait]
    impl Translator for PrefixTranslator {
        async fn translate_to_hindi(&self, text: &str, _cancel: &CancellationToken) -> Result<String> {
            Ok(format!("hi:{}", text))
        }
    }

    struct FailingTranslator;

    #[async_trait]
    impl Translator for FailingTranslator {
        async fn translate_to_hindi(&self, _text: &str, _cancel: &CancellationToken) -> Result<String> {
            Err(AdvisorError::OllamaApiError("down".to_string()))
        }
    }

    fn view_with(translator: Arc<dyn Translator>, language: Option<Language>) -> AssessmentView {
        let advice = Arc::new(FixedAdvice {
            calls: AtomicUsize::new(0),
        });
        AssessmentView::new(advice, translator, language)
    }

    #[test]
    fn test_new_view_is_loading_in_english() {
        let view = view_with(Arc::new(PrefixTranslator), None);
        assert_eq!(view.render_state(), RenderState::Loading);
        assert_eq!(view.language(), Language::English);
        assert!(view.display().is_none());
        assert!(view.error().is_none());
    }

    #[tokio::test]
    async fn test_blank_question_is_ignored() {
        let mut view = view_with(Arc::new(PrefixTranslator), None);
        view.load(Some("   ")).await;
        view.load(None).await;
        assert_eq!(view.render_state(), RenderState::Loading);
        assert!(view.question().is_none());
    }

    #[tokio::test]
    async fn test_display_resolves_translation_only_in_hindi() {
        let mut view = view_with(Arc::new(PrefixTranslator), Some(Language::Hindi));
        view.load(Some("headache")).await;
        assert_eq!(view.display().unwrap().issue, "hi:Tension headache");

        view.select_language(Some(Language::English)).await;
        assert_eq!(view.display().unwrap().issue, "Tension headache");
        assert!(view.translation().is_some());
    }

    #[tokio::test]
    async fn test_translation_failure_is_terminal() {
        let mut view = view_with(Arc::new(FailingTranslator), None);
        view.load(Some("headache")).await;
        assert_eq!(view.render_state(), RenderState::Ready);

        view.select_language(Some(Language::Hindi)).await;
        assert_eq!(view.render_state(), RenderState::Error);
        assert!(!view.is_translating());
        assert_eq!(view.error(), Some(t("error.translation", Language::Hindi)));
        assert!(view.translation().is_none());
    }

    #[tokio::test]
    async fn test_teardown_blocks_further_loads() {
        let mut view = view_with(Arc::new(PrefixTranslator), None);
        view.teardown();
        assert!(view.is_torn_down());
        view.load(Some("headache")).await;
        assert!(view.assessment().is_none());
        assert_eq!(view.render_state(), RenderState::Loading);
    }

    #[tokio::test]
    async fn test_cancel_handle_shares_token() {
        let view = view_with(Arc::new(PrefixTranslator), None);
        view.cancel_handle().cancel();
        assert!(view.is_torn_down());
    }
}
