//! Cross-variant agreement: every strategy must produce byte-identical
//! output for the same operands, so `format!` serves as the oracle.

use proptest::prelude::*;

use hyphen_bench::template::CachedTemplate;
use hyphen_bench::variants::{
    STRING_NUMBER_VARIANTS, TWO_STRINGS_VARIANTS, string_number, two_strings,
};
use hyphen_bench::{StringAndNumber, TwoStrings};

proptest! {
    #[test]
    fn two_string_variants_agree(a in ".*", b in ".*") {
        let expected = format!("{a}-{b}");
        let fixture = TwoStrings::new(&a, &b);
        for (name, run) in TWO_STRINGS_VARIANTS {
            prop_assert_eq!(&run(&fixture), &expected, "variant {}", name);
        }
    }

    #[test]
    fn string_number_variants_agree(a in ".*", n in any::<i64>()) {
        let expected = format!("{a}-{n}");
        let fixture = StringAndNumber::new(&a, n);
        for (name, run) in STRING_NUMBER_VARIANTS {
            prop_assert_eq!(&run(&fixture), &expected, "variant {}", name);
        }
    }

    #[test]
    fn cached_variants_agree_with_oracle(a in ".*", b in ".*", n in any::<i64>()) {
        let mut cache = CachedTemplate::new("{0}-{1}");
        cache.refresh().unwrap();

        let strings = TwoStrings::new(&a, &b);
        prop_assert_eq!(
            two_strings::cached_template(&strings, &cache),
            format!("{a}-{b}")
        );

        let number = StringAndNumber::new(&a, n);
        prop_assert_eq!(
            string_number::cached_template(&number, &cache),
            format!("{a}-{n}")
        );
    }
}
