//! Property tests for header rendering.

use proptest::prelude::*;

use greedy_build::{BuildMetadata, HeaderTemplate};

fn value() -> impl Strategy<Value = String> {
    // Values may contain braces and even placeholder text.
    proptest::string::string_regex("[A-Za-z0-9 .<>@(){}-]{0,24}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Rendering never panics on arbitrary templates.
    #[test]
    fn property_render_never_panics(template in "(?s).{0,256}", version in value(), author in value()) {
        let _ = HeaderTemplate::new(template).render(&BuildMetadata::new(version, author));
    }

    /// PROPERTY: A template without placeholders renders unchanged.
    #[test]
    fn property_plain_template_is_literal(template in "[^{]{0,128}", version in value(), author in value()) {
        let rendered = HeaderTemplate::new(template.clone()).render(&BuildMetadata::new(version, author));
        prop_assert_eq!(rendered, template);
    }

    /// PROPERTY: Substituted values are inserted verbatim and never expanded again.
    #[test]
    fn property_values_are_not_reexpanded(version in value(), author in value()) {
        let rendered = HeaderTemplate::new("v{version} by {author}")
            .render(&BuildMetadata::new(version.clone(), author.clone()));
        prop_assert_eq!(rendered, format!("v{} by {}", version, author));
    }
}
