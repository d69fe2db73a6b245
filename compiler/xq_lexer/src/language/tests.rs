use super::*;
use crate::{BRACED_URI, COMMENT, TEMPLATE_EXPRESSION, XQDOC};

#[test]
fn presets_register_their_channels() {
    let xquery = xquery_composer();
    assert!(xquery.has_channel(COMMENT));
    assert!(xquery.has_channel(XQDOC));
    assert!(xquery.has_channel(BRACED_URI));
    assert!(!xquery.has_channel(TEMPLATE_EXPRESSION));

    let template = value_template_composer();
    assert!(template.has_channel(TEMPLATE_EXPRESSION));
    assert!(!template.has_channel(COMMENT));

    assert!(!xqdoc_composer().has_channel(XQDOC));
}

#[test]
fn language_names_round_trip() {
    for &language in Language::ALL {
        assert_eq!(language.name().parse(), Ok(language));
        assert_eq!(language.to_string(), language.name());
    }
    assert_eq!("AVT".parse(), Ok(Language::ValueTemplate));
}

#[test]
fn unknown_language() {
    let err = UnknownLanguage("xslt".to_owned());
    assert_eq!("xslt".parse::<Language>(), Err(err.clone()));
    assert!(err.to_string().contains("xslt"));
}
