//! Turning citations into text.
//!
//! Scripture text comes from outside this crate through [`TextProvider`];
//! psalms are taken from the local [`Psalter`] instead.

use log::debug;

use crate::citation;
use crate::error::{Result, TextError};
use crate::lectionary::ReadingSet;
use crate::psalter::Psalter;

/// Source of scripture text for a single citation, e.g. a Bible API client.
pub trait TextProvider {
    /// Returns the text of `citation`, or [`TextError::NotFound`] if no
    /// passage matches.
    fn fetch(&self, citation: &str) -> std::result::Result<String, TextError>;
}

impl<T: TextProvider + ?Sized> TextProvider for &T {
    fn fetch(&self, citation: &str) -> std::result::Result<String, TextError> {
        (**self).fetch(citation)
    }
}

/// Fetches the texts of a [`ReadingSet`].
pub struct PassageSource<P> {
    provider: P,
    psalter: Option<Psalter>,
}

impl<P: TextProvider> PassageSource<P> {
    /// Without a psalter, psalms are fetched from `provider` like any other
    /// passage.
    pub fn new(provider: P, psalter: Option<Psalter>) -> Self {
        Self { provider, psalter }
    }

    /// Text of one citation, taking its first alternative.
    pub fn text(&self, citation: &str) -> Result<String> {
        let chosen = citation::first_option(citation);
        match &self.psalter {
            Some(psalter) if citation::is_psalm(&chosen) => {
                debug!("{chosen}: from psalter");
                Ok(psalter.get_psalm(&chosen)?)
            }
            _ => {
                debug!("{chosen}: from text provider");
                Ok(self.provider.fetch(&chosen)?)
            }
        }
    }

    /// Texts of every reading, in order. Stops at the first failure.
    pub fn texts(&self, readings: &ReadingSet) -> Result<Vec<String>> {
        readings.iter().map(|c| self.text(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::error::{Error, InvalidReference};

    struct Fixed(HashMap<&'static str, &'static str>);

    impl TextProvider for Fixed {
        fn fetch(&self, citation: &str) -> std::result::Result<String, TextError> {
            self.0
                .get(citation)
                .map(|s| s.to_string())
                .ok_or_else(|| TextError::NotFound(citation.to_owned()))
        }
    }

    fn provider() -> Fixed {
        Fixed(HashMap::from([
            ("Isa 64:1-9", "Oh that you would rend the heavens"),
            ("Ps 80", "Give ear, O Shepherd of Israel"),
        ]))
    }

    fn psalter() -> Psalter {
        Psalter::from_json_str(
            r#"{"80": {"1": {"head": "Hear, O Shepherd of Israel,", "tail": "you that led Joseph like a flock;"}}}"#,
        )
        .unwrap()
    }

    #[test]
    fn routes_psalms_to_psalter() {
        let source = PassageSource::new(provider(), Some(psalter()));
        let readings = ReadingSet::new(vec!["Isa 64:1-9".into(), "Ps 80:1 or 80:1-7v".into()]);
        assert_eq!(
            vec![
                "Oh that you would rend the heavens".to_owned(),
                "Psalm 80\n\n1 Hear, O Shepherd of Israel, *\nyou that led Joseph like a flock;"
                    .to_owned(),
            ],
            source.texts(&readings).unwrap()
        );
    }

    #[test]
    fn without_psalter() {
        let source = PassageSource::new(provider(), None);
        assert_eq!(
            "Give ear, O Shepherd of Israel",
            source.text("Ps 80 or 80:1-7v").unwrap()
        );
    }

    #[test]
    fn failures_propagate() {
        let source = PassageSource::new(provider(), Some(psalter()));
        assert!(matches!(
            source.text("Mark 13:24-37"),
            Err(Error::Text(TextError::NotFound(c))) if c == "Mark 13:24-37"
        ));
        assert!(matches!(
            source.text("Ps 151"),
            Err(Error::InvalidReference(InvalidReference::NoSuchPsalm(151)))
        ));
    }
}
