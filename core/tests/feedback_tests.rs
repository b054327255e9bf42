use kgram_core::tokenizer::tokenize;
use kgram_core::{FeedbackConfig, MemoryStats, Query, QueryExpander, RankedDoc};

fn stats_from(texts: &[&str]) -> (MemoryStats, Vec<RankedDoc>) {
    let mut stats = MemoryStats::new();
    let mut results = Vec::new();
    for (i, text) in texts.iter().enumerate() {
        let id = stats.add_document(format!("doc{i}.txt"), tokenize(text).into_iter().map(|(w, _)| w));
        results.push(RankedDoc::new(id, 1.0 / (i as f64 + 1.0)));
    }
    (stats, results)
}

#[test]
fn no_relevant_documents_leaves_query_unchanged() {
    let (stats, results) = stats_from(&["zombie attack", "zombie movie", "attack plan"]);
    let original = Query::parse("zombie attack");
    let mut q = original.clone();
    q.relevance_feedback(&results, &[false, false, false], &stats, FeedbackConfig::default());
    assert_eq!(q, original);
    q.relevance_feedback(&results, &[], &stats, FeedbackConfig::default());
    assert_eq!(q, original);
}

#[test]
fn only_top_ten_are_consulted() {
    let texts: Vec<String> = (0..12).map(|i| format!("common word{i}")).collect();
    let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
    let (stats, results) = stats_from(&refs);
    let mut flags = vec![false; 12];
    flags[11] = true;
    let mut q = Query::parse("common");
    q.relevance_feedback(&results, &flags, &stats, FeedbackConfig::default());
    assert_eq!(q, Query::parse("common"));

    flags[0] = true;
    q.relevance_feedback(&results, &flags, &stats, FeedbackConfig::default());
    assert!(q.get("word0").is_some());
    assert!(q.get("word11").is_none());
    // one relevant in the window: 0.8 * 1/2
    assert_eq!(q.get("word0").unwrap().weight, 0.4);
}

#[test]
fn existing_term_is_replaced_not_blended() {
    let (stats, results) = stats_from(&["zombie attack", "zombie movie"]);
    let mut q = Query::parse("zombie");
    q.relevance_feedback(&results, &[true, true], &stats, FeedbackConfig::default());
    let accumulated = 0.8 * 0.5 * 0.5 + 0.8 * 0.5 * 0.5;
    assert_eq!(q.get("zombie").unwrap().weight, accumulated + 0.2);
    assert_ne!(q.get("zombie").unwrap().weight, 1.0 + accumulated);
}

#[test]
fn duplicate_query_term_updates_first_occurrence() {
    let (stats, results) = stats_from(&["zombie"]);
    let mut q = Query::parse("zombie zombie");
    q.relevance_feedback(&results, &[true], &stats, FeedbackConfig::default());
    let weights: Vec<f64> = q.terms().map(|t| t.weight).collect();
    assert_eq!(weights, vec![0.8 + 0.2, 1.0]);
}

#[test]
fn expansion_is_deterministic() {
    let (stats, results) = stats_from(&["the quick brown fox", "a lazy brown dog", "quick quick fox"]);
    let run = || {
        let mut q = Query::parse("fox");
        q.relevance_feedback(&results, &[true, false, true], &stats, FeedbackConfig::default());
        q
    };
    let (a, b) = (run(), run());
    assert_eq!(a, b);
    let bits = |q: &Query| q.terms().map(|t| t.weight.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&a), bits(&b));
}

#[test]
fn custom_blend_ratio() {
    let (stats, results) = stats_from(&["alpha beta"]);
    let expander = QueryExpander::new(FeedbackConfig::with_alpha(0.5));
    assert_eq!(expander.config().beta, 0.5);
    let mut q = Query::parse("alpha");
    expander.expand(&mut q, &results, &[true], &stats);
    assert_eq!(q.get("alpha").unwrap().weight, 0.5 * 0.5 + 0.5);
    assert_eq!(q.get("beta").unwrap().weight, 0.5 * 0.5);
}
