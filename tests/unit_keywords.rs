// Unit tests for missing keyword extraction.
//
// Gap containment, ranking order, truncation, degeneracy, and the worked
// examples for a Python/Django posting.

use std::collections::HashMap;

use cvmatch::analysis::{clean, missing_keywords, ranked_terms, DEFAULT_TOP_N};

const JD: &str = "We are hiring a Senior Python Engineer. You will build Django REST APIs, \
    own PostgreSQL schemas, and deploy services on Kubernetes. Python and Django \
    experience required; Kubernetes and Terraform a plus. Python testing with pytest.";

const RESUME: &str = "Software engineer. Python, Flask, MySQL. Deployed services with Docker. \
    Wrote pytest suites.";

fn salience(jd_clean: &str) -> HashMap<String, f64> {
    ranked_terms(jd_clean)
        .into_iter()
        .map(|tw| (tw.term, tw.weight))
        .collect()
}

// ============================================================
// Worked examples
// ============================================================

#[test]
fn django_missing_python_present() {
    let jd = "requires strong python and django experience";
    let resume = "skilled python engineer";
    let missing = missing_keywords(resume, jd, DEFAULT_TOP_N);

    assert!(missing.iter().any(|k| k == "django"), "got {missing:?}");
    assert!(!missing.iter().any(|k| k == "python"), "got {missing:?}");
}

#[test]
fn resume_equal_to_jd_has_no_gaps() {
    let jd = clean(Some(JD));
    assert!(missing_keywords(&jd, &jd, 3).is_empty());
    assert!(missing_keywords(&jd, &jd, DEFAULT_TOP_N).is_empty());
}

#[test]
fn most_repeated_missing_term_comes_first() {
    let jd = clean(Some(JD));
    let resume = clean(Some(RESUME));
    let missing = missing_keywords(&resume, &jd, DEFAULT_TOP_N);
    // "django" and "kubernetes" are both repeated; django wins the tie
    assert_eq!(missing.first().map(String::as_str), Some("django"));
    assert!(missing.iter().any(|k| k == "kubernetes"));
}

// ============================================================
// Properties
// ============================================================

#[test]
fn missing_terms_never_occur_in_resume() {
    let jd = clean(Some(JD));
    let resume = clean(Some(RESUME));
    for term in missing_keywords(&resume, &jd, 500) {
        assert!(!resume.contains(&term), "'{term}' is in the resume");
    }
}

#[test]
fn missing_terms_in_descending_salience() {
    let jd = clean(Some(JD));
    let resume = clean(Some(RESUME));
    let weights = salience(&jd);
    let missing = missing_keywords(&resume, &jd, 500);
    assert!(!missing.is_empty());
    for pair in missing.windows(2) {
        assert!(
            weights[&pair[0]] >= weights[&pair[1]],
            "'{}' ({}) ranked above '{}' ({})",
            pair[0],
            weights[&pair[0]],
            pair[1],
            weights[&pair[1]]
        );
    }
}

#[test]
fn missing_terms_are_unique() {
    let jd = clean(Some(JD));
    let resume = clean(Some(RESUME));
    let missing = missing_keywords(&resume, &jd, 500);
    let mut deduped = missing.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), missing.len());
}

#[test]
fn truncation_respects_top_n() {
    let jd = clean(Some(JD));
    let resume = clean(Some(RESUME));
    for k in [0, 1, 2, 5, 10, 20, 1000] {
        let missing = missing_keywords(&resume, &jd, k);
        assert!(missing.len() <= k, "top_n={k} returned {}", missing.len());
    }
    assert_eq!(missing_keywords(&resume, &jd, 5).len(), 5);
}

#[test]
fn truncation_keeps_prefix() {
    let jd = clean(Some(JD));
    let resume = clean(Some(RESUME));
    let all = missing_keywords(&resume, &jd, 500);
    let top = missing_keywords(&resume, &jd, 4);
    assert_eq!(top, all[..4].to_vec());
}

#[test]
fn degenerate_inputs_yield_nothing() {
    assert!(missing_keywords("", "python django", 20).is_empty());
    assert!(missing_keywords("python django", "", 20).is_empty());
    assert!(missing_keywords("", "", 20).is_empty());
}

#[test]
fn stop_word_only_jd_yields_nothing() {
    assert!(missing_keywords("python", "the and of to", 20).is_empty());
}

#[test]
fn bigram_present_only_as_exact_phrase() {
    // Both words appear in the resume, but not next to each other
    let jd = "rust compiler";
    let resume = "compiler written in rust";
    let missing = missing_keywords(resume, jd, 20);
    assert_eq!(missing, vec!["rust compiler".to_string()]);
}

// ============================================================
// ranked_terms
// ============================================================

#[test]
fn ranked_terms_include_bigrams() {
    let ranked = ranked_terms("kubernetes operators kubernetes operators");
    let terms: Vec<&str> = ranked.iter().map(|tw| tw.term.as_str()).collect();
    assert!(terms.contains(&"kubernetes operators"));
    // Every weight is strictly positive
    assert!(ranked.iter().all(|tw| tw.weight > 0.0));
}

#[test]
fn ranked_terms_vocabulary_is_capped() {
    let jd: String = (0..800).map(|i| format!("term{i} ")).collect();
    let ranked = ranked_terms(jd.trim());
    assert!(ranked.len() <= 500, "got {} terms", ranked.len());
}
