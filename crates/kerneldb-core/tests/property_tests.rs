//! # Property-Based Tests
//!
//! Invariants of the pattern compiler, the selector and the document merge.

use kerneldb_core::selector::select_from_names;
use kerneldb_core::{KernelTypeRecord, MissionDocument, compile};
use proptest::collection::vec;
use proptest::prelude::*;

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Templates without placeholders compile to themselves.
    #[test]
    fn literal_templates_are_unchanged(template in "[A-Za-z0-9_.\\-/*]{0,40}") {
        prop_assert_eq!(compile(&template), template);
    }

    /// One run of N placeholders yields exactly one N-digit class.
    #[test]
    fn run_width_is_preserved(
        prefix in "[a-z_]{0,8}",
        width in 1usize..12,
        suffix in "[a-z.]{0,8}"
    ) {
        let template = format!("{}{}{}", prefix, "?".repeat(width), suffix);
        let expected = format!("{}[0-9]{{{}}}{}", prefix, width, suffix);
        prop_assert_eq!(compile(&template), expected);
    }

    /// Compiled patterns never contain a placeholder.
    #[test]
    fn no_placeholder_survives(template in "[a-z?._]{0,40}") {
        prop_assert!(!compile(&template).contains('?'));
    }

    /// Selection does not depend on enumeration order.
    #[test]
    fn selection_is_order_independent(
        versions in vec(0u32..10000, 1..20),
        with_makedb in any::<bool>()
    ) {
        let mut names: Vec<String> = versions
            .iter()
            .map(|v| format!("kernels.{:04}.db", v))
            .collect();
        if with_makedb {
            names.push("kernels.0001.makedb".to_string());
        }

        let forward = select_from_names(names.iter().map(String::as_str))
            .map(|(name, grammar)| (name.to_string(), grammar));
        names.reverse();
        let backward = select_from_names(names.iter().map(String::as_str))
            .map(|(name, grammar)| (name.to_string(), grammar));

        prop_assert_eq!(forward.clone(), backward);
        if !with_makedb {
            let max = versions.iter().max().copied().unwrap_or_default();
            prop_assert_eq!(
                forward.map(|(name, _)| name),
                Some(format!("kernels.{:04}.db", max))
            );
        }
    }

    /// The first record merged for a kernel type is the one kept.
    #[test]
    fn first_record_always_wins(patterns in vec("[a-z]{1,8}", 1..10)) {
        let mut doc = MissionDocument::new("m");
        for pattern in &patterns {
            doc.insert_record("ck", KernelTypeRecord::with_kernels(vec![pattern.clone()]));
        }

        prop_assert_eq!(
            doc.record("ck").map(|r| r.kernels.clone()),
            Some(vec![patterns[0].clone()])
        );
    }
}
