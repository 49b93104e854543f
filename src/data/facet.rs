use std::collections::BTreeSet;

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Facet resolution: header-name heuristic → concrete column (or absent)
// ---------------------------------------------------------------------------

/// Header-name substrings that designate a categorical filter dimension.
pub const FACET_TARGETS: [&str; 3] = ["role", "team", "region"];

/// A facet target together with the header it resolved to, if any.
///
/// Resolution runs once per dataset so the name heuristic is not scattered
/// across the filter path; downstream code only checks `header`.
#[derive(Debug, Clone)]
pub struct Facet {
    /// Lowercase substring matched against header labels.
    pub target: String,
    /// First header whose lowercased text contains `target`. `None` means
    /// the facet is absent: empty option set, filter is a no-op.
    pub header: Option<String>,
}

/// Resolve every facet target against a header list, in target order.
pub fn resolve_facets(headers: &[String]) -> Vec<Facet> {
    FACET_TARGETS
        .iter()
        .map(|target| Facet {
            target: (*target).to_string(),
            header: headers
                .iter()
                .find(|h| h.to_lowercase().contains(target))
                .cloned(),
        })
        .collect()
}

/// Distinct non-empty values of the facet's column, in ascending
/// lexicographic order. An absent facet yields the empty set.
pub fn facet_options(dataset: &Dataset, facet: &Facet) -> BTreeSet<String> {
    let Some(header) = &facet.header else {
        return BTreeSet::new();
    };
    dataset
        .rows
        .iter()
        .filter_map(|row| row.get(header))
        .filter(|v| !v.is_empty())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset::from_grid(vec![
            vec!["Name".into(), "Job Role".into(), "Team".into()],
            vec!["Alice".into(), "Support".into(), "Atlas".into()],
            vec!["Bob".into(), "Sales".into(), "".into()],
            vec!["Carol".into(), "Support".into(), "Borealis".into()],
        ])
        .unwrap()
    }

    #[test]
    fn resolves_first_header_containing_target() {
        let facets = resolve_facets(&dataset().headers);
        assert_eq!(facets[0].target, "role");
        assert_eq!(facets[0].header.as_deref(), Some("Job Role"));
        assert_eq!(facets[1].header.as_deref(), Some("Team"));
    }

    #[test]
    fn resolution_is_case_insensitive() {
        let headers = vec!["REGION CODE".to_string()];
        let facets = resolve_facets(&headers);
        assert_eq!(facets[2].header.as_deref(), Some("REGION CODE"));
    }

    #[test]
    fn unmatched_target_is_absent() {
        let facets = resolve_facets(&dataset().headers);
        assert!(facets[2].header.is_none());
    }

    #[test]
    fn options_are_sorted_distinct_and_nonempty() {
        let ds = dataset();
        let facets = resolve_facets(&ds.headers);
        let roles = facet_options(&ds, &facets[0]);
        let roles: Vec<&str> = roles.iter().map(String::as_str).collect();
        assert_eq!(roles, vec!["Sales", "Support"]);

        // Bob's empty Team cell is not an option.
        let teams = facet_options(&ds, &facets[1]);
        assert_eq!(teams.len(), 2);
        assert!(!teams.contains(""));
    }

    #[test]
    fn absent_facet_yields_empty_set_without_error() {
        let ds = dataset();
        let facets = resolve_facets(&ds.headers);
        assert!(facet_options(&ds, &facets[2]).is_empty());
    }
}
