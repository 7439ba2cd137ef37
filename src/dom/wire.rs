//! Startup and listener wiring.
//!
//! DESIGN
//! ======
//! [`boot`] installs logging, reads the inline config, and mounts once the
//! document is parsed. Each `bind_*` method guards its own markup and binds
//! nothing when the elements it needs are absent.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry, KeyboardEvent};

use crate::config::Config;
use crate::consts::*;
use crate::controller::{Action, ControllerCore};
use crate::dom::page::Page;
use crate::dom::{self, listen, report};
use crate::error::{Error, Result};
use crate::lazy::LazyImages;
use crate::modal::deferred_source;
use crate::util::debounce::debounce;

/// Shared handle captured by every listener.
#[derive(Clone)]
pub struct Controller {
    core: Rc<RefCell<ControllerCore>>,
    page: Rc<Page>,
}

/// Entry point: panic hook, logger, config, then mount on document ready.
pub fn boot() {
    console_error_panic_hook::set_once();

    let document = match dom::window().and_then(|w| dom::document(&w)) {
        Ok(document) => document,
        Err(err) => {
            // No logger yet; the console is the only channel.
            web_sys::console::error_1(&err.to_string().into());
            return;
        }
    };

    let (config, config_err) = match read_config(&document) {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    if console_log::init_with_level(config.level_or_default()).is_err() {
        log::debug!("console logger already installed");
    }
    if let Some(err) = config_err {
        log::warn!("{err}; using defaults");
    }

    report("startup", when_ready(&document, move || report("mount", mount(config))));
}

/// Read `#folio-config`, or defaults when the page has none.
///
/// # Errors
///
/// Returns [`Error::Config`] when the script content is invalid.
pub fn read_config(document: &Document) -> Result<Config> {
    match document.get_element_by_id(ID_CONFIG_SCRIPT).and_then(|el| el.text_content()) {
        Some(raw) if !raw.trim().is_empty() => Config::from_json(&raw),
        _ => Ok(Config::default()),
    }
}

fn when_ready<F>(document: &Document, f: F) -> Result<()>
where
    F: FnOnce() + 'static,
{
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }
    let closure = Closure::once(f);
    document.add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Resolve the page, bind every feature, and run the initial scroll checks.
///
/// # Errors
///
/// Returns an error only if the page cannot be resolved; per-feature failures
/// are logged and do not stop the others.
pub fn mount(config: Config) -> Result<()> {
    let page = Page::resolve(dom::window()?)?;
    let greeting = config.greeting;
    let ctl = Controller {
        core: Rc::new(RefCell::new(ControllerCore::new(config))),
        page: Rc::new(page),
    };

    // Each feature stands alone: a failure is logged and the rest still bind.
    report("skill bars", ctl.page.reset_skill_bars());
    report("nav", ctl.bind_nav());
    report("modal", ctl.bind_modal());
    report("anchors", ctl.bind_anchors());
    report("scroll", ctl.bind_scroll());
    report("download", ctl.bind_download());
    report("lazy images", ctl.bind_lazy_images());
    report("initial scroll checks", ctl.run_scroll_checks());

    if greeting {
        log::info!("{GREETING_BANNER}");
    }
    Ok(())
}

impl Controller {
    /// Run a core transition and apply its actions. The core borrow ends
    /// before any DOM mutation.
    fn dispatch(&self, f: impl FnOnce(&mut ControllerCore) -> Vec<Action>) -> Result<()> {
        let actions = {
            let mut core = self.core.borrow_mut();
            f(&mut core)
        };
        self.page.apply(&actions, &[])
    }

    fn run_scroll_checks(&self) -> Result<()> {
        let cards = self.page.service_cards()?;
        let measure_skills = self.core.borrow().skills_pending();
        let sample = self.page.sample(&cards, measure_skills)?;
        let actions = self.core.borrow_mut().on_scroll(&sample);
        self.page.apply(&actions, &cards)
    }

    fn scroll_to_fragment(&self, href: &str) -> Result<()> {
        let header_height = self.page.header.as_ref().map_or(0.0, |h| f64::from(h.offset_height()));
        let document = &self.page.document;
        let actions = self.core.borrow().on_anchor_click(href, header_height, |id| {
            let target = document.get_element_by_id(id)?;
            target.dyn_ref::<HtmlElement>().map(|el| f64::from(el.offset_top()))
        });
        if actions.is_empty() {
            log::debug!("no scroll target for {href:?}");
        }
        self.page.apply(&actions, &[])
    }

    // --- Features ---

    fn bind_nav(&self) -> Result<()> {
        let (Some(hamburger), Some(_)) = (&self.page.hamburger, &self.page.nav_links) else {
            log::debug!("mobile nav markup absent; toggle not bound");
            return Ok(());
        };

        let ctl = self.clone();
        listen(hamburger, "click", move |_| report("nav toggle", ctl.dispatch(ControllerCore::on_toggle_click)))?;

        for link in dom::query_all(&self.page.document, SEL_NAV_LINK_ANCHORS)? {
            let ctl = self.clone();
            listen(&link, "click", move |_| report("nav link", ctl.dispatch(ControllerCore::on_nav_link_click)))?;
        }

        let ctl = self.clone();
        listen(&self.page.document, "click", move |event: Event| {
            let inside = ctl.page.inside_nav(&event);
            report("nav dismiss", ctl.dispatch(|core| core.on_document_click(inside)));
        })
    }

    fn bind_modal(&self) -> Result<()> {
        let Some(modal) = &self.page.modal else {
            return Ok(());
        };
        let triggers = dom::query_all(&self.page.document, SEL_MODAL_TRIGGERS)?;
        if triggers.is_empty() {
            log::debug!("no modal triggers; modal not bound");
            return Ok(());
        }

        for trigger in &triggers {
            let ctl = self.clone();
            listen(trigger, "click", move |_| {
                let deferred = ctl.page.frame.as_ref().and_then(|frame| {
                    deferred_source(
                        frame.get_attribute("src").as_deref(),
                        frame.get_attribute(ATTR_DEFERRED_SRC).as_deref(),
                    )
                });
                report("modal open", ctl.dispatch(|core| core.open_modal(deferred)));
            })?;
        }

        let ctl = self.clone();
        listen(modal, "click", move |event: Event| {
            let result = ctl
                .page
                .modal_target(&event)
                .and_then(|target| ctl.dispatch(|core| core.on_modal_click(target)));
            report("modal click", result);
        })?;

        let ctl = self.clone();
        listen(&self.page.document, "keydown", move |event: Event| {
            if let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) {
                report("modal key", ctl.dispatch(|core| core.on_key_down(&key)));
            }
        })
    }

    fn bind_anchors(&self) -> Result<()> {
        for anchor in dom::query_all(&self.page.document, SEL_HASH_ANCHORS)? {
            let ctl = self.clone();
            let link = anchor.clone();
            listen(&anchor, "click", move |event: Event| {
                event.prevent_default();
                let href = link.get_attribute("href").unwrap_or_default();
                report("smooth scroll", ctl.scroll_to_fragment(&href));
            })?;
        }
        Ok(())
    }

    fn bind_scroll(&self) -> Result<()> {
        let ctl = self.clone();
        listen(&self.page.window, "scroll", move |_| report("scroll checks", ctl.run_scroll_checks()))?;

        let ctl = self.clone();
        let wait_ms = self.core.borrow().config.resize_debounce_ms;
        let mut on_resize = debounce(wait_ms, false, move || report("resize checks", ctl.run_scroll_checks()));
        listen(&self.page.window, "resize", move |_| on_resize())
    }

    fn bind_download(&self) -> Result<()> {
        let tracked = self.core.borrow().config.tracked_download.clone();
        let selector = format!("a[href*=\"{tracked}\"]");
        let Some(link) = dom::query(&self.page.document, &selector)? else {
            log::debug!("no download link for {tracked}");
            return Ok(());
        };
        listen(&link, "click", |_| log::info!("CV downloaded"))
    }

    fn bind_lazy_images(&self) -> Result<()> {
        let images = dom::query_all(&self.page.document, SEL_LAZY_IMAGES)?;
        if images.is_empty() {
            return Ok(());
        }

        let registry = Rc::new(RefCell::new(LazyImages::new()));
        for img in &images {
            if let Some(src) = img.get_attribute(ATTR_DEFERRED_SRC) {
                registry.borrow_mut().register(img.clone(), src);
            }
        }

        let registry_cb = Rc::clone(&registry);
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let released = registry_cb.borrow_mut().on_intersection(&target, entry.is_intersecting());
                    if let Some(src) = released {
                        observer.unobserve(&target);
                        report("lazy image", load_image(&target, &src));
                    }
                }
            },
        );

        match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => {
                for img in images.iter().filter(|img| registry.borrow().contains(img)) {
                    observer.observe(img);
                }
                callback.forget();
            }
            Err(err) => {
                log::warn!("{}; loading images eagerly", Error::from(err));
                let pending = registry.borrow_mut().drain();
                for (img, src) in pending {
                    report("lazy image", load_image(&img, &src));
                }
            }
        }
        Ok(())
    }
}

fn load_image(img: &Element, src: &str) -> Result<()> {
    img.set_attribute("src", src)?;
    img.class_list().remove_1(CLASS_LAZY)?;
    Ok(())
}
