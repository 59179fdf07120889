//! Tests for marker translation, stripping and fragment expansion.

use chatfmt::{
    Color, Format, Fragment, LegacyText, NamedColor, Style, Translator, plain_text, strip,
    strip_markup, to_fragments, to_legacy, translate,
};

fn describe(fragments: &[Fragment]) -> String {
    fragments
        .iter()
        .map(|f| format!("{:?} [{}]", f.text, f.style))
        .collect::<Vec<_>>()
        .join("\n")
}

const SAMPLES: &[&str] = &[
    "",
    "plain text",
    "&cRed",
    "&6Gold &lBold &rreset",
    "&&c double",
    "trailing &",
    "&zunknown &Qcode",
    "&X&F&F&0&0&0&0hex",
    "日本&a語",
    "&k&l&m&n&o&r",
];

// ============================================================================
// Translation
// ============================================================================

#[test]
fn translate_replaces_known_codes() {
    assert_eq!(translate("&aGreen &lbold", '&').as_str(), "§aGreen §lbold");
}

#[test]
fn translate_leaves_unknown_codes() {
    assert_eq!(translate("&zoo & &", '&').as_str(), "&zoo & &");
}

#[test]
fn translate_without_markers_is_identity() {
    for sample in ["hello", "50% off @ noon", "§ lonely", ""] {
        assert_eq!(translate(sample, '&').as_str(), sample);
    }
}

#[test]
fn translate_is_deterministic() {
    for sample in SAMPLES {
        assert_eq!(translate(sample, '&'), translate(sample, '&'));
    }
}

// ============================================================================
// Stripping
// ============================================================================

#[test]
fn strip_of_translation_equals_direct_strip() {
    for sample in SAMPLES {
        assert_eq!(
            strip(translate(sample, '&').as_str()),
            strip_markup(sample, '&'),
            "sample {sample:?}"
        );
    }
}

#[test]
fn strip_matches_displayed_text() {
    for sample in SAMPLES {
        let text = translate(sample, '&');
        assert_eq!(plain_text(&text.to_fragments()), text.plain(), "sample {sample:?}");
    }
}

#[test]
fn strip_markup_keeps_unrecognised_usages() {
    assert_eq!(strip_markup("&cA&zB&", '&'), "A&zB&");
}

// ============================================================================
// Fragments
// ============================================================================

#[test]
fn empty_input_yields_no_fragments() {
    assert!(Translator::default().to_fragments("").is_empty());
    assert!(to_fragments(&LegacyText::default()).is_empty());
}

#[test]
fn text_without_markers_is_one_plain_fragment() {
    let fragments = Translator::default().to_fragments("just words");
    assert_eq!(fragments, vec![Fragment::new("just words")]);
}

#[test]
fn style_changes_start_new_fragments() {
    let fragments = Translator::default().to_fragments("&6Vote &lnow&r: &7(or not)");
    insta::assert_snapshot!(describe(&fragments), @r#"
    "Vote " [gold]
    "now" [gold bold]
    ": " [plain]
    "(or not)" [gray]
    "#);
}

#[test]
fn redundant_codes_merge() {
    let fragments = Translator::default().to_fragments("&cA&cB&c&cC");
    assert_eq!(fragments.len(), 1);
    assert_eq!(fragments[0].text, "ABC");
}

#[test]
fn hex_color_through_translation() {
    let fragments = Translator::default().to_fragments("&x&F&F&0&0&0&0almost red");
    assert_eq!(fragments.len(), 1);
    assert_eq!(fragments[0].style.color, Some(Color::Rgb(255, 0, 0)));
}

#[test]
fn unknown_codes_are_literal() {
    let fragments = Translator::default().to_fragments("&zoo");
    assert_eq!(fragments, vec![Fragment::new("&zoo")]);
}

#[test]
fn custom_marker() {
    let fragments = Translator::new('~').to_fragments("~9blue &9not");
    assert_eq!(fragments.len(), 1);
    assert_eq!(fragments[0].style, Style::colored(NamedColor::Blue));
    assert_eq!(fragments[0].text, "blue &9not");
}

// ============================================================================
// Re-encoding
// ============================================================================

#[test]
fn legacy_round_trip() {
    for sample in SAMPLES {
        let fragments = translate(sample, '&').to_fragments();
        let legacy = to_legacy(&fragments);
        assert_eq!(strip(&legacy), plain_text(&fragments), "sample {sample:?}");
        assert_eq!(
            to_fragments(&LegacyText::new(legacy)),
            fragments,
            "sample {sample:?}"
        );
    }
}

#[test]
fn legacy_encodes_styles() {
    let fragments = vec![
        Fragment::styled("Bold", Style::new().with_format(Format::BOLD)),
        Fragment::styled(" red", Style::colored(NamedColor::Red)),
    ];
    insta::assert_snapshot!(to_legacy(&fragments), @"§lBold§c red");
}
