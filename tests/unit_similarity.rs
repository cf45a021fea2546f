// Unit tests for similarity scoring.
//
// Tests cosine_from_weights numerical edge cases and the similarity
// properties: range, symmetry, identity, degeneracy.

use std::collections::BTreeMap;

use cvmatch::analysis::similarity::cosine_from_weights;
use cvmatch::analysis::{clean, similarity};

fn weights(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
    pairs.iter().map(|(t, w)| (t.to_string(), *w)).collect()
}

fn sample_documents() -> Vec<String> {
    [
        "Senior Python developer with Django, PostgreSQL and AWS experience.",
        "Backend engineer: Rust, Tokio, gRPC, Kubernetes, Terraform.",
        "Data scientist skilled in Python, pandas, PyTorch and SQL.",
        "Frontend developer. React, TypeScript, GraphQL, Figma.",
        "Python Django developer, PostgreSQL, Docker, Kubernetes, CI/CD.",
        "the and of to",
        "",
    ]
    .iter()
    .map(|d| clean(Some(d)))
    .collect()
}

// ============================================================
// cosine_from_weights — numerical edge cases
// ============================================================

#[test]
fn cosine_one_empty_one_nonempty() {
    let empty = BTreeMap::new();
    let nonempty = weights(&[("rust", 0.5)]);
    assert_eq!(cosine_from_weights(&empty, &nonempty), 0.0);
    assert_eq!(cosine_from_weights(&nonempty, &empty), 0.0);
}

#[test]
fn cosine_all_zero_weights() {
    let a = weights(&[("a", 0.0), ("b", 0.0)]);
    let b = weights(&[("a", 0.0)]);
    assert_eq!(cosine_from_weights(&a, &b), 0.0);
}

#[test]
fn cosine_negative_weights_clamped_to_zero() {
    let a = weights(&[("x", 1.0)]);
    let b = weights(&[("x", -1.0)]);
    assert_eq!(cosine_from_weights(&a, &b), 0.0);
}

#[test]
fn cosine_large_sparse_vectors() {
    let mut a = BTreeMap::new();
    let mut b = BTreeMap::new();
    for i in 0..100 {
        a.insert(format!("a_kw_{i}"), 0.01);
        b.insert(format!("b_kw_{i}"), 0.01);
    }
    a.insert("shared".to_string(), 0.5);
    b.insert("shared".to_string(), 0.5);

    let result = cosine_from_weights(&a, &b);
    assert!(result > 0.0, "Should have some overlap via 'shared'");
    assert!(result < 1.0, "Should not be identical");
}

// ============================================================
// similarity — properties
// ============================================================

#[test]
fn similarity_in_unit_range() {
    let docs = sample_documents();
    for a in &docs {
        for b in &docs {
            let s = similarity(a, b);
            assert!((0.0..=1.0).contains(&s), "similarity({a:?}, {b:?}) = {s}");
        }
    }
}

#[test]
fn similarity_is_symmetric() {
    let docs = sample_documents();
    for a in &docs {
        for b in &docs {
            assert_eq!(similarity(a, b), similarity(b, a), "asymmetric for {a:?} / {b:?}");
        }
    }
}

#[test]
fn similarity_identity() {
    for doc in sample_documents() {
        if doc.is_empty() || doc == "the and of to" {
            continue;
        }
        let s = similarity(&doc, &doc);
        assert!((s - 1.0).abs() < 1e-9, "similarity(d, d) = {s} for {doc:?}");
    }
}

#[test]
fn similarity_exact_match_example() {
    let s = similarity(
        "python developer experienced",
        "python developer experienced",
    );
    assert!((s - 1.0).abs() < 1e-9, "got {s}");
}

#[test]
fn similarity_degenerate_inputs() {
    assert_eq!(similarity("", "python developer"), 0.0);
    assert_eq!(similarity("python developer", ""), 0.0);
    assert_eq!(similarity("", ""), 0.0);
}

#[test]
fn similarity_only_stop_words_is_zero() {
    // Vocabulary ends up empty: the failure degrades to 0.0
    assert_eq!(similarity("the and of", "to the and"), 0.0);
}

#[test]
fn similarity_is_deterministic() {
    let a = clean(Some("Python Django PostgreSQL Docker Kubernetes"));
    let b = clean(Some("Senior Python developer with Django and AWS"));
    let first = similarity(&a, &b);
    for _ in 0..10 {
        assert_eq!(similarity(&a, &b), first);
    }
}

#[test]
fn closer_resume_scores_higher() {
    let jd = clean(Some(
        "Python Django developer. PostgreSQL, Docker, Kubernetes, REST APIs.",
    ));
    let close = clean(Some(
        "Python developer: Django REST APIs on PostgreSQL, shipped with Docker.",
    ));
    let far = clean(Some("Watercolor painter and pottery instructor."));
    assert!(similarity(&close, &jd) > similarity(&far, &jd));
}
