//! Lightbox rendering
//!
//! Navigator transitions are first turned into a [`RenderPlan`] (pure,
//! testable without a browser) and then applied to the overlay elements.

use crate::dom;
use crate::error::AlbumError;
use lightbox_core::Transition;
use web_sys::{Element, HtmlElement, HtmlImageElement};

/// DOM mutations needed to reflect one transition
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderPlan {
    pub image_src: Option<String>,
    pub counter_text: Option<String>,
    /// CSS `display` for the overlay
    pub overlay_display: Option<&'static str>,
    /// CSS `overflow` for the page body
    pub body_overflow: Option<&'static str>,
}

impl RenderPlan {
    pub fn for_transition(transition: &Transition) -> Self {
        match transition {
            Transition::Ignored => Self::default(),
            Transition::Opened(display) => Self {
                image_src: Some(display.reference.to_string()),
                counter_text: Some(display.counter_label()),
                overlay_display: Some("flex"),
                body_overflow: Some("hidden"),
            },
            Transition::Moved(display) => Self {
                image_src: Some(display.reference.to_string()),
                counter_text: Some(display.counter_label()),
                ..Self::default()
            },
            Transition::Closed => Self {
                overlay_display: Some("none"),
                body_overflow: Some("auto"),
                ..Self::default()
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Elements making up the lightbox overlay
pub struct LightboxView {
    overlay: HtmlElement,
    image: HtmlImageElement,
    counter: Option<Element>,
    body: Option<HtmlElement>,
}

impl LightboxView {
    pub fn new(
        overlay: HtmlElement,
        image: HtmlImageElement,
        counter: Option<Element>,
        body: Option<HtmlElement>,
    ) -> Self {
        Self {
            overlay,
            image,
            counter,
            body,
        }
    }

    pub fn overlay(&self) -> &HtmlElement {
        &self.overlay
    }

    pub fn render(&self, transition: &Transition) -> Result<(), AlbumError> {
        let plan = RenderPlan::for_transition(transition);
        if plan.is_empty() {
            return Ok(());
        }

        if let Some(src) = &plan.image_src {
            self.image.set_src(src);
        }
        if let (Some(counter), Some(text)) = (&self.counter, &plan.counter_text) {
            counter.set_text_content(Some(text.as_str()));
        }
        if let Some(display) = plan.overlay_display {
            dom::set_style(&self.overlay, "display", display)?;
        }
        if let (Some(body), Some(overflow)) = (&self.body, plan.body_overflow) {
            dom::set_style(body, "overflow", overflow)?;
        }
        Ok(())
    }
}
