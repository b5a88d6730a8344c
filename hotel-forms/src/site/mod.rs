//! Page-load wiring
//!
//! [`bootstrap`] is what a page runs once its markup is ready: it installs a
//! validator for every configured form present on the page, restricts the
//! arrival date picker and starts the background video. [`load_partials`]
//! injects the shared header and footer and wires the newsletter signup once
//! the footer is in place.

pub mod arrival;
pub mod fragments;
pub mod newsletter;
pub mod video;

use std::sync::Arc;

pub use arrival::{ArrivalWindow, ARRIVAL_INPUT_ID};
pub use fragments::{
    load_fragment, load_fragment_then, FragmentError, FragmentSource, FsFragmentSource,
};
pub use newsletter::{
    NewsletterSignup, SubscriptionOutcome, NEWSLETTER_INPUT_ID, SUBSCRIBE_BUTTON_SELECTOR,
};
pub use video::{VideoRotation, VideoSurface, VIDEO_ELEMENT_ID};

use crate::config::SiteConfig;
use crate::dom::Document;
use crate::forms::FormValidator;
use crate::notify::Notifier;

/// What [`bootstrap`] found on the page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    /// Forms that now validate on submit
    pub installed_forms: Vec<String>,
    /// Configured forms absent from this page
    pub skipped_forms: Vec<String>,
    /// Arrival window applied to the date input, if the input exists
    pub arrival_window: Option<ArrivalWindow>,
    /// First background clip, if the video element and a playlist exist
    pub video_started: Option<String>,
}

/// Install validators, the arrival window and the video rotation on a
/// freshly loaded page
pub fn bootstrap<D: Document>(
    document: &D,
    config: &SiteConfig,
    notifier: Arc<dyn Notifier>,
) -> BootstrapReport {
    let mut report = BootstrapReport::default();
    let duration = config.toast.duration();

    for schema in &config.forms {
        if FormValidator::<D::Form>::install(document, schema, Arc::clone(&notifier), duration) {
            report.installed_forms.push(schema.id().to_string());
        } else {
            report.skipped_forms.push(schema.id().to_string());
        }
    }

    if let Some(input) = document.input(ARRIVAL_INPUT_ID) {
        match ArrivalWindow::from_today(config.booking.advance_years) {
            Some(window) => {
                window.apply(&input);
                report.arrival_window = Some(window);
            }
            None => tracing::warn!(
                years = config.booking.advance_years,
                "arrival window out of calendar range"
            ),
        }
    }

    if let Some(video) = document.video(VIDEO_ELEMENT_ID) {
        match VideoRotation::new(config.site.videos.clone()) {
            Some(rotation) => report.video_started = Some(rotation.start(&video)),
            None => tracing::debug!("no background videos configured"),
        }
    }

    tracing::info!(
        installed = ?report.installed_forms,
        skipped = report.skipped_forms.len(),
        "page initialised"
    );
    report
}

/// Inject the configured header and footer partials
///
/// Once the footer is in place its subscribe button is wired to a
/// [`NewsletterSignup`] reporting through `notifier`. Returns how many
/// partials were loaded; failures are logged.
pub fn load_partials<D: Document>(
    document: &D,
    config: &SiteConfig,
    source: &dyn FragmentSource,
    notifier: Arc<dyn Notifier>,
) -> usize {
    let site = &config.site;
    let header = load_fragment(document, source, &site.header_partial, &site.header_placeholder);
    let footer = load_fragment_then(
        document,
        source,
        &site.footer_partial,
        &site.footer_placeholder,
        || {
            NewsletterSignup::new(notifier, config.toast.duration()).install(document);
        },
    );
    usize::from(header) + usize::from(footer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{InputElement, MemoryDocument, MemoryForm, MemoryInput, MemoryVideo};
    use crate::notify::ToastBoard;

    #[test]
    fn test_bootstrap_empty_page() {
        let report = bootstrap(
            &MemoryDocument::new(),
            &SiteConfig::default(),
            Arc::new(ToastBoard::new()),
        );
        assert!(report.installed_forms.is_empty());
        assert_eq!(report.skipped_forms, vec!["contact-form", "reservation-form"]);
        assert!(report.arrival_window.is_none());
        assert!(report.video_started.is_none());
    }

    #[test]
    fn test_bootstrap_reservation_page() {
        let form = MemoryForm::new("reservation-form")
            .with_field(MemoryInput::text("arrival-date"))
            .with_field(MemoryInput::text("nights"));
        let document = MemoryDocument::new().with_form(form.clone());

        let report = bootstrap(&document, &SiteConfig::default(), Arc::new(ToastBoard::new()));

        assert_eq!(report.installed_forms, vec!["reservation-form"]);
        assert_eq!(report.skipped_forms, vec!["contact-form"]);
        assert_eq!(form.listener_count(), 1);

        let window = report.arrival_window.unwrap();
        let input = form.input_handle("arrival-date").unwrap();
        assert_eq!(input.attribute("min"), Some(window.min_attribute()));
        assert_eq!(input.attribute("max"), Some(window.max_attribute()));
    }

    #[test]
    fn test_load_partials() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("header.html"), "<nav></nav>").unwrap();

        let mut config = SiteConfig::default();
        config.site.partials_dir = dir.path().to_path_buf();
        let document = MemoryDocument::new()
            .with_placeholder("header-placeholder")
            .with_placeholder("footer-placeholder");
        let source = FsFragmentSource::new(&config.site.partials_dir);

        assert_eq!(
            load_partials(&document, &config, &source, Arc::new(ToastBoard::new())),
            1
        );
        assert_eq!(
            document.placeholder_html("header-placeholder").as_deref(),
            Some("<nav></nav>")
        );
        assert_eq!(
            document.placeholder_html("footer-placeholder").as_deref(),
            Some("")
        );
    }

    #[test]
    fn test_bootstrap_starts_video_rotation() {
        let video = MemoryVideo::new(VIDEO_ELEMENT_ID);
        let document = MemoryDocument::new().with_video(video.clone());
        let mut config = SiteConfig::default();
        config.site.videos = vec!["videos/lobby.mp4".into(), "videos/pool.mp4".into()];

        let report = bootstrap(&document, &config, Arc::new(ToastBoard::new()));

        assert_eq!(report.video_started.as_deref(), Some("videos/lobby.mp4"));
        assert!(video.is_playing());
        video.end();
        assert_eq!(video.source().as_deref(), Some("videos/pool.mp4"));
    }

    #[test]
    fn test_bootstrap_without_videos_leaves_element_alone() {
        let video = MemoryVideo::new(VIDEO_ELEMENT_ID);
        let document = MemoryDocument::new().with_video(video.clone());
        let mut config = SiteConfig::default();
        config.site.videos.clear();

        let report = bootstrap(&document, &config, Arc::new(ToastBoard::new()));

        assert!(report.video_started.is_none());
        assert!(video.source().is_none());
    }

    #[test]
    fn test_load_partials_wires_newsletter() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("footer.html"), "<footer></footer>").unwrap();

        let mut config = SiteConfig::default();
        config.site.partials_dir = dir.path().to_path_buf();
        let input = MemoryInput::text(NEWSLETTER_INPUT_ID);
        let document = MemoryDocument::new()
            .with_placeholder("footer-placeholder")
            .with_input(input.clone())
            .with_button(SUBSCRIBE_BUTTON_SELECTOR);
        let source = FsFragmentSource::new(&config.site.partials_dir);
        let toasts = Arc::new(ToastBoard::new());

        assert_eq!(load_partials(&document, &config, &source, toasts.clone()), 1);
        assert_eq!(document.click_listener_count(SUBSCRIBE_BUTTON_SELECTOR), 1);

        input.set_value("not-an-email");
        document.click(SUBSCRIBE_BUTTON_SELECTOR);
        assert_eq!(toasts.visible(), vec![newsletter::INVALID_EMAIL_TOAST.to_string()]);
    }

    #[test]
    fn test_failed_footer_leaves_newsletter_unwired() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SiteConfig::default();
        config.site.partials_dir = dir.path().to_path_buf();
        let document = MemoryDocument::new()
            .with_placeholder("footer-placeholder")
            .with_input(MemoryInput::text(NEWSLETTER_INPUT_ID))
            .with_button(SUBSCRIBE_BUTTON_SELECTOR);
        let source = FsFragmentSource::new(&config.site.partials_dir);

        assert_eq!(
            load_partials(&document, &config, &source, Arc::new(ToastBoard::new())),
            0
        );
        assert_eq!(document.click_listener_count(SUBSCRIBE_BUTTON_SELECTOR), 0);
    }
}
