//! Resolved page elements and action application.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, Node, ScrollBehavior, ScrollToOptions, Window};

use crate::consts::*;
use crate::controller::{Action, ScrollSample};
use crate::dom::{self, set_class};
use crate::error::Result;
use crate::modal::ModalTarget;
use crate::nav::click_inside;
use crate::skills::bar_fill;

/// Element handles looked up once at mount. Every optional feature keeps its
/// elements as `Option` so absent markup turns the feature into a no-op.
pub struct Page {
    pub window: Window,
    pub document: Document,
    pub body: Option<HtmlElement>,
    pub header: Option<HtmlElement>,
    pub hamburger: Option<Element>,
    pub nav_links: Option<Element>,
    pub skills_section: Option<Element>,
    pub skill_bars: Vec<HtmlElement>,
    pub modal: Option<Element>,
    pub backdrop: Option<Element>,
    pub frame: Option<Element>,
}

impl Page {
    /// Look up every element the controller drives.
    ///
    /// # Errors
    ///
    /// Returns an error when there is no document or a selector is rejected.
    pub fn resolve(window: Window) -> Result<Self> {
        let document = dom::document(&window)?;
        let header = dom::query(&document, SEL_HEADER)?.and_then(|el| el.dyn_ref::<HtmlElement>().cloned());
        let modal = document.get_element_by_id(ID_MODAL);
        let (backdrop, frame) = match &modal {
            Some(modal) => (modal.query_selector(SEL_MODAL_BACKDROP)?, modal.query_selector(SEL_MODAL_FRAME)?),
            None => (None, None),
        };

        Ok(Self {
            body: document.body(),
            header,
            hamburger: dom::query(&document, SEL_HAMBURGER)?,
            nav_links: dom::query(&document, SEL_NAV_LINKS)?,
            skills_section: dom::query(&document, SEL_SKILLS_SECTION)?,
            skill_bars: dom::query_all_html(&document, SEL_SKILL_BARS)?,
            modal,
            backdrop,
            frame,
            window,
            document,
        })
    }

    /// Current service cards. Queried per check so late-inserted cards join in.
    ///
    /// # Errors
    ///
    /// Returns an error if the selector is rejected.
    pub fn service_cards(&self) -> Result<Vec<HtmlElement>> {
        dom::query_all_html(&self.document, SEL_SERVICE_CARDS)
    }

    /// Measure what the scroll checks need.
    ///
    /// The skills section is only measured while the skills trigger is armed.
    ///
    /// # Errors
    ///
    /// Returns an error if window metrics cannot be read.
    pub fn sample(&self, cards: &[HtmlElement], measure_skills: bool) -> Result<ScrollSample> {
        let (_, viewport_height) = dom::viewport_size(&self.window)?;
        let skills_top = if measure_skills {
            self.skills_section.as_ref().map(|el| el.get_bounding_client_rect().top())
        } else {
            None
        };
        Ok(ScrollSample {
            scroll_y: self.window.scroll_y()?,
            viewport_height,
            skills_top,
            card_tops: cards.iter().map(|card| card.get_bounding_client_rect().top()).collect(),
        })
    }

    /// Start every skill bar at zero width.
    ///
    /// # Errors
    ///
    /// Returns an error if an inline style is rejected.
    pub fn reset_skill_bars(&self) -> Result<()> {
        for bar in &self.skill_bars {
            bar.style().set_property("width", "0%")?;
        }
        Ok(())
    }

    /// Whether a click landed inside the toggle control or the link list.
    #[must_use]
    pub fn inside_nav(&self, event: &Event) -> bool {
        let target = event.target();
        let Some(node) = target.as_ref().and_then(|t| t.dyn_ref::<Node>()) else {
            return false;
        };
        let hit = |el: &Option<Element>| el.as_ref().map(|el| el.contains(Some(node)));
        click_inside(hit(&self.hamburger), hit(&self.nav_links))
    }

    /// Classify a click inside the modal.
    ///
    /// # Errors
    ///
    /// Returns an error if the close-control selector is rejected.
    pub fn modal_target(&self, event: &Event) -> Result<ModalTarget> {
        let target = event.target();
        let Some(element) = target.as_ref().and_then(|t| t.dyn_ref::<Element>()) else {
            return Ok(ModalTarget::Content);
        };
        let is_backdrop = self.backdrop.as_ref() == Some(element);
        let control_in_modal = element.closest(SEL_MODAL_CLOSE)?.map(|control| {
            let control: &Node = &control;
            self.modal.as_ref().is_some_and(|modal| modal.contains(Some(control)))
        });
        Ok(ModalTarget::classify(is_backdrop, control_in_modal))
    }

    /// Apply controller actions in order. `cards` backs `RevealCard` indices.
    ///
    /// # Errors
    ///
    /// Returns the first DOM rejection; earlier actions stay applied.
    pub fn apply(&self, actions: &[Action], cards: &[HtmlElement]) -> Result<()> {
        for action in actions {
            match action {
                Action::SetNavOpen(open) => {
                    for el in [&self.hamburger, &self.nav_links].into_iter().flatten() {
                        set_class(el, CLASS_ACTIVE, *open)?;
                    }
                }
                Action::SetScrollLock(lock) => {
                    if let Some(body) = &self.body {
                        set_class(body, CLASS_SCROLL_LOCK, *lock)?;
                    }
                }
                Action::FillSkillBars => self.fill_skill_bars()?,
                Action::SetHeaderScrolled(scrolled) => {
                    if let Some(header) = &self.header {
                        set_class(header, CLASS_HEADER_SCROLLED, *scrolled)?;
                    }
                }
                Action::RevealCard { index, delay } => {
                    if let Some(card) = cards.get(*index) {
                        card.style().set_property("animation-delay", delay)?;
                        set_class(card, CLASS_FADE_IN_UP, true)?;
                    }
                }
                Action::SetModalVisible(visible) => {
                    if let Some(modal) = &self.modal {
                        set_class(modal, CLASS_MODAL_VISIBLE, *visible)?;
                    }
                }
                Action::LoadFrame(src) => {
                    if let Some(frame) = &self.frame {
                        frame.set_attribute("src", src)?;
                        log::debug!("modal frame loaded: {src}");
                    }
                }
                Action::ScrollTo { top } => {
                    let options = ScrollToOptions::new();
                    options.set_top(*top);
                    options.set_behavior(ScrollBehavior::Smooth);
                    self.window.scroll_to_with_scroll_to_options(&options);
                }
            }
        }
        Ok(())
    }

    fn fill_skill_bars(&self) -> Result<()> {
        for bar in &self.skill_bars {
            let raw = bar.get_attribute(ATTR_SKILL_WIDTH).unwrap_or_default();
            let fill = bar_fill(&raw);
            match &fill.width {
                Some(width) => bar.style().set_property("width", width)?,
                None => log::warn!("skill bar has unusable {ATTR_SKILL_WIDTH}={raw:?}; width left as is"),
            }
            set_class(bar, CLASS_ANIMATED, fill.animated)?;
        }
        log::debug!("skill bars animated ({})", self.skill_bars.len());
        Ok(())
    }
}
