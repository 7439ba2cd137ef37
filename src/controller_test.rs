use super::*;

const FORM_URL: &str = "https://forms.example.com/hire";

fn core() -> ControllerCore {
    ControllerCore::new(Config::default())
}

fn frame() -> Option<String> {
    Some(FORM_URL.into())
}

const CLOSED: [Action; 2] = [Action::SetModalVisible(false), Action::SetScrollLock(false)];

fn sample(scroll_y: f64) -> ScrollSample {
    ScrollSample { scroll_y, viewport_height: 780.0, skills_top: None, card_tops: Vec::new() }
}

fn header_state(actions: &[Action]) -> Option<bool> {
    actions.iter().find_map(|a| match a {
        Action::SetHeaderScrolled(v) => Some(*v),
        _ => None,
    })
}

fn lock_state(actions: &[Action]) -> Option<bool> {
    actions.iter().find_map(|a| match a {
        Action::SetScrollLock(v) => Some(*v),
        _ => None,
    })
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn toggle_sets_all_nav_participants_together() {
    let mut core = core();
    assert_eq!(core.on_toggle_click(), vec![Action::SetNavOpen(true), Action::SetScrollLock(true)]);
    assert_eq!(core.on_toggle_click(), vec![Action::SetNavOpen(false), Action::SetScrollLock(false)]);
}

#[test]
fn nav_link_click_always_closes() {
    let mut core = core();
    core.on_toggle_click();
    assert_eq!(core.on_nav_link_click(), vec![Action::SetNavOpen(false), Action::SetScrollLock(false)]);
    assert_eq!(core.on_toggle_click()[0], Action::SetNavOpen(true));
}

#[test]
fn outside_click_closes_only_open_menu() {
    let mut core = core();
    assert!(core.on_document_click(false).is_empty());
    core.on_toggle_click();
    assert!(core.on_document_click(true).is_empty());
    assert_eq!(core.on_document_click(false), vec![Action::SetNavOpen(false), Action::SetScrollLock(false)]);
}

// =============================================================
// Scroll: header
// =============================================================

#[test]
fn header_class_follows_scroll_offset() {
    let mut core = core();
    let seen: Vec<Option<bool>> = [0.0, 150.0, 50.0].iter().map(|y| header_state(&core.on_scroll(&sample(*y)))).collect();
    assert_eq!(seen, vec![Some(false), Some(true), Some(false)]);
}

// =============================================================
// Scroll: skills
// =============================================================

#[test]
fn skill_bars_fill_once() {
    let mut core = core();
    let mut s = sample(0.0);
    s.skills_top = Some(900.0);
    assert!(!core.on_scroll(&s).contains(&Action::FillSkillBars));
    assert!(core.skills_pending());

    s.skills_top = Some(300.0);
    assert!(core.on_scroll(&s).contains(&Action::FillSkillBars));
    assert!(!core.skills_pending());

    s.skills_top = Some(2000.0);
    assert!(!core.on_scroll(&s).contains(&Action::FillSkillBars));
    s.skills_top = Some(300.0);
    assert!(!core.on_scroll(&s).contains(&Action::FillSkillBars));
}

#[test]
fn missing_skills_section_never_fills() {
    let mut core = core();
    assert!(!core.on_scroll(&sample(5000.0)).contains(&Action::FillSkillBars));
    assert!(core.skills_pending());
}

// =============================================================
// Scroll: cards
// =============================================================

#[test]
fn cards_in_view_get_staggered_delays() {
    let mut core = core();
    let mut s = sample(0.0);
    s.card_tops = vec![100.0, 200.0, 900.0];
    let reveals: Vec<Action> = core.on_scroll(&s).into_iter().filter(|a| matches!(a, Action::RevealCard { .. })).collect();
    assert_eq!(
        reveals,
        vec![
            Action::RevealCard { index: 0, delay: "0s".into() },
            Action::RevealCard { index: 1, delay: "0.1s".into() },
        ]
    );
}

#[test]
fn card_reveal_repeats_while_in_view() {
    let mut core = core();
    let mut s = sample(0.0);
    s.card_tops = vec![100.0];
    for _ in 0..2 {
        assert!(core.on_scroll(&s).contains(&Action::RevealCard { index: 0, delay: "0s".into() }));
    }
}

#[test]
fn card_delay_keeps_index_when_earlier_cards_are_out_of_view() {
    let mut core = core();
    let mut s = sample(0.0);
    s.card_tops = vec![900.0, 900.0, 300.0];
    assert!(core.on_scroll(&s).contains(&Action::RevealCard { index: 2, delay: "0.2s".into() }));
}

// =============================================================
// Modal
// =============================================================

#[test]
fn first_open_loads_frame() {
    let mut core = core();
    assert_eq!(
        core.open_modal(frame()),
        vec![Action::SetModalVisible(true), Action::SetScrollLock(true), Action::LoadFrame(FORM_URL.into())]
    );
}

#[test]
fn reopening_does_not_reload_frame() {
    let mut core = core();
    core.open_modal(frame());
    assert!(!core.open_modal(frame()).iter().any(|a| matches!(a, Action::LoadFrame(_))));
    core.on_key_down("Escape");
    assert!(!core.open_modal(frame()).iter().any(|a| matches!(a, Action::LoadFrame(_))));
}

#[test]
fn frame_is_checked_at_open_time() {
    let mut core = core();
    // Not deferred at the first open (the page had already set a real src).
    assert!(!core.open_modal(None).iter().any(|a| matches!(a, Action::LoadFrame(_))));
    core.on_key_down("Escape");
    assert!(core.open_modal(frame()).contains(&Action::LoadFrame(FORM_URL.into())));
}

#[test]
fn open_is_idempotent() {
    let mut core = core();
    let first = core.open_modal(None);
    assert_eq!(core.open_modal(None), first);
    assert_eq!(core.on_key_down("Escape"), CLOSED.to_vec());
}

#[test]
fn modal_click_targets() {
    let mut core = core();
    core.open_modal(None);
    assert!(core.on_modal_click(ModalTarget::Content).is_empty());
    assert_eq!(core.on_modal_click(ModalTarget::Backdrop), CLOSED.to_vec());
    assert!(core.on_modal_click(ModalTarget::Backdrop).is_empty());
    core.open_modal(None);
    assert_eq!(core.on_modal_click(ModalTarget::CloseControl), CLOSED.to_vec());
}

#[test]
fn escape_only_acts_when_open() {
    let mut core = core();
    assert!(core.on_key_down("Escape").is_empty());
    core.open_modal(None);
    assert!(core.on_key_down("Tab").is_empty());
    assert_eq!(core.on_key_down("Escape"), CLOSED.to_vec());
    assert!(core.on_key_down("Escape").is_empty());
}

#[test]
fn scroll_lock_held_while_either_overlay_open() {
    let mut core = core();
    core.on_toggle_click();
    assert_eq!(lock_state(&core.open_modal(None)), Some(true));
    assert_eq!(lock_state(&core.on_key_down("Escape")), Some(true));
    assert_eq!(lock_state(&core.on_nav_link_click()), Some(false));
}

// =============================================================
// Anchors
// =============================================================

#[test]
fn anchor_scrolls_below_header() {
    let core = core();
    let actions = core.on_anchor_click("#contact", 72.0, |id| (id == "contact").then_some(1500.0));
    assert_eq!(actions, vec![Action::ScrollTo { top: 1428.0 }]);
}

#[test]
fn unknown_fragment_does_nothing() {
    let core = core();
    assert!(core.on_anchor_click("#missing", 72.0, |_| None).is_empty());
}

#[test]
fn bare_hash_never_looks_up() {
    let core = core();
    let actions = core.on_anchor_click("#", 72.0, |_| -> Option<f64> {
        unreachable!("placeholder link must not resolve a target")
    });
    assert!(actions.is_empty());
}
