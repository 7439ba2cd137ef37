use super::*;

#[test]
fn starts_closed() {
    assert!(!NavMenu::default().is_open());
}

#[test]
fn toggle_strictly_alternates() {
    let mut nav = NavMenu::default();
    let seen: Vec<bool> = (0..5).map(|_| nav.toggle()).collect();
    assert_eq!(seen, vec![true, false, true, false, true]);
}

#[test]
fn close_is_idempotent() {
    let mut nav = NavMenu::default();
    nav.toggle();
    assert!(nav.close());
    assert!(!nav.is_open());
    assert!(!nav.close());
    assert!(!nav.is_open());
}

#[test]
fn outside_click_closes_open_menu() {
    let mut nav = NavMenu::default();
    nav.toggle();
    assert!(nav.dismiss_outside(false));
    assert!(!nav.is_open());
}

#[test]
fn inside_click_keeps_menu_open() {
    let mut nav = NavMenu::default();
    nav.toggle();
    assert!(!nav.dismiss_outside(true));
    assert!(nav.is_open());
}

#[test]
fn outside_click_on_closed_menu_is_noop() {
    let mut nav = NavMenu::default();
    assert!(!nav.dismiss_outside(false));
    assert!(!nav.is_open());
}

#[test]
fn click_inside_either_element_counts() {
    assert!(click_inside(Some(true), Some(false)));
    assert!(click_inside(Some(false), Some(true)));
    assert!(click_inside(None, Some(true)));
}

#[test]
fn click_outside_or_without_markup_is_outside() {
    assert!(!click_inside(Some(false), Some(false)));
    assert!(!click_inside(None, None));
    assert!(!click_inside(Some(false), None));
}
