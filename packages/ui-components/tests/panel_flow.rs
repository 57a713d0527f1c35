//! Integration tests for the params panel and its owner
//!
//! These tests drive [`SettingsHost`] headlessly, the same owner the desktop
//! app delegates to:
//! - Draft edits and Apply
//! - Reset and draft reconciliation
//! - Outside-click dismissal

use iced::Point;
use lectern_core::{ArticleSettings, SettingsField, StyleVar, StyleVars};
use lectern_ui::outside_click::Interaction;
use lectern_ui::params_form::ParamsFormMessage;
use lectern_ui::SettingsHost;

fn click_at(host: &mut SettingsHost, x: f32, y: f32) {
    host.handle_interaction(Interaction::CursorMoved(Point::new(x, y)));
    host.handle_interaction(Interaction::Pressed);
}

/// Deterministic sequence of (field, option index) edits covering every catalog
fn edit_sequence() -> Vec<(SettingsField, usize)> {
    let mut edits = Vec::new();
    for round in 0..4 {
        for field in SettingsField::ALL {
            let len = field.options().len();
            edits.push((field, (round * 3 + 1) % len));
        }
    }
    edits
}

#[test]
fn test_submit_commits_last_written_draft() {
    let mut host = SettingsHost::default();
    host.handle_form(ParamsFormMessage::Toggle);

    let edits = edit_sequence();
    for prefix in 1..=edits.len() {
        let mut expected = *host.form().draft();
        for (field, index) in &edits[..prefix] {
            let option = field.options()[*index];
            host.handle_form(ParamsFormMessage::FieldChanged(*field, option));
            expected.set(*field, option);
        }

        host.handle_form(ParamsFormMessage::Submit);
        assert_eq!(host.settings(), &expected);
        assert_eq!(host.form().draft(), host.settings());
    }
}

#[test]
fn test_reset_always_returns_defaults() {
    let mut host = SettingsHost::default();
    host.handle_form(ParamsFormMessage::Toggle);

    for (field, index) in edit_sequence() {
        host.handle_form(ParamsFormMessage::FieldChanged(field, field.options()[index]));
        if index % 2 == 0 {
            host.handle_form(ParamsFormMessage::Submit);
        }

        host.handle_form(ParamsFormMessage::Reset);
        assert_eq!(host.settings(), &ArticleSettings::DEFAULT);
        assert_eq!(host.form().draft(), &ArticleSettings::DEFAULT);
        assert_eq!(host.style_vars(), &StyleVars::default());
    }
}

#[test]
fn test_discarded_edit_scenario() {
    let mut host = SettingsHost::default();
    assert_eq!(host.settings().font_size.value, "18px");

    host.handle_form(ParamsFormMessage::Toggle);
    host.handle_form(ParamsFormMessage::FieldChanged(
        SettingsField::FontSize,
        SettingsField::FontSize.options()[1],
    ));

    click_at(&mut host, 1100.0, 400.0);

    assert!(!host.form().is_open());
    assert_eq!(host.settings().font_size.value, "18px");

    host.handle_form(ParamsFormMessage::Toggle);
    assert!(host.form().is_open());
    assert_eq!(host.form().draft().font_size.value, "18px");
}

#[test]
fn test_applied_background_reaches_style_vars() {
    let mut host = SettingsHost::default();
    host.handle_form(ParamsFormMessage::Toggle);

    let black = SettingsField::BackgroundColor.options()[1];
    host.handle_form(ParamsFormMessage::FieldChanged(
        SettingsField::BackgroundColor,
        black,
    ));
    host.handle_form(ParamsFormMessage::Submit);

    assert_eq!(host.style_vars().get(StyleVar::BackgroundColor), black.value);
    assert_eq!(host.style_vars().get(StyleVar::BackgroundColor), "#000000");
}

#[test]
fn test_outside_signal_while_closed_is_noop() {
    let mut host = SettingsHost::default();

    click_at(&mut host, 1100.0, 400.0);
    host.handle_interaction(Interaction::FocusLost);

    assert!(!host.form().is_open());
    assert_eq!(host.form().draft(), &ArticleSettings::DEFAULT);
}

#[test]
fn test_arrow_press_while_open_is_inside() {
    let mut host = SettingsHost::default();
    host.handle_form(ParamsFormMessage::Toggle);

    // Arrow button sits right of the panel body
    let region = host.form().region();
    click_at(&mut host, region.width - 10.0, 30.0);
    assert!(host.form().is_open());

    host.handle_form(ParamsFormMessage::Toggle);
    assert!(!host.form().is_open());
}

#[test]
fn test_reopen_after_outside_close_ignores_old_cursor() {
    let mut host = SettingsHost::default();
    host.handle_form(ParamsFormMessage::Toggle);
    click_at(&mut host, 1200.0, 300.0);
    assert!(!host.form().is_open());

    host.handle_form(ParamsFormMessage::Toggle);
    host.handle_interaction(Interaction::Pressed);
    assert!(host.form().is_open());
    assert_eq!(host.subscription().into_recipes().len(), 1);

    host.handle_form(ParamsFormMessage::Toggle);
    assert!(!host.form().is_open());
    assert_eq!(host.subscription().into_recipes().len(), 0);
}
