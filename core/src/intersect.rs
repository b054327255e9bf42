use crate::kgram::KGramPosting;

/// AND two posting lists sorted ascending by term id.
///
/// A missing `p2` means "no constraint" and yields a copy of `p1`. Wildcard
/// resolution relies on this for k-grams that straddle `*`, which never have
/// postings of their own.
pub fn intersect(p1: &[KGramPosting], p2: Option<&[KGramPosting]>) -> Vec<KGramPosting> {
    let Some(p2) = p2 else {
        let mut result = p1.to_vec();
        result.dedup_by_key(|p| p.term_id);
        return result;
    };

    let mut result: Vec<KGramPosting> = Vec::new();
    let (mut m, mut n) = (0, 0);
    while m < p1.len() && n < p2.len() {
        let (a, b) = (p1[m].term_id, p2[n].term_id);
        if a < b {
            m += 1;
        } else if a == b && result.last().map_or(true, |last| last.term_id != a) {
            // result is ascending, so only the tail can hold `a` already
            result.push(p1[m]);
            m += 1;
            n += 1;
        } else {
            n += 1;
        }
    }

    result.dedup_by_key(|p| p.term_id);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(ids: &[u32]) -> Vec<KGramPosting> { ids.iter().map(|&id| KGramPosting::new(id)).collect() }

    fn ids(p: &[KGramPosting]) -> Vec<u32> { p.iter().map(|p| p.term_id).collect() }

    #[test]
    fn missing_second_operand_is_identity() {
        let p = list(&[0, 3, 7]);
        assert_eq!(intersect(&p, None), p);
        assert!(intersect(&[], None).is_empty());
    }

    #[test]
    fn two_pointer_merge() {
        let a = list(&[0, 2, 4, 6, 8]);
        let b = list(&[1, 2, 3, 6, 9]);
        assert_eq!(ids(&intersect(&a, Some(&b))), vec![2, 6]);
        assert!(intersect(&a, Some(&[])).is_empty());
    }

    #[test]
    fn duplicates_collapse() {
        let a = list(&[1, 1, 2, 5, 5]);
        assert_eq!(ids(&intersect(&a, Some(&a))), vec![1, 2, 5]);
        let b = list(&[1, 5, 5, 5]);
        assert_eq!(ids(&intersect(&a, Some(&b))), vec![1, 5]);
    }
}
