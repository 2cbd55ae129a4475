use crate::model::Candidate;

/// Keeps only candidates whose text mentions the tracked team.
#[derive(Debug, Clone)]
pub struct TeamFilter {
    keyword: String,
}

impl TeamFilter {
    pub fn new(keyword: &str) -> Self {
        Self { keyword: keyword.trim().to_uppercase() }
    }

    pub fn accepts(&self, candidate: &Candidate) -> bool {
        !self.keyword.is_empty() && candidate.text.to_uppercase().contains(&self.keyword)
    }

    pub fn retain(&self, candidates: Vec<Candidate>) -> Vec<Candidate> {
        candidates.into_iter().filter(|c| self.accepts(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(text: &str) -> Candidate {
        Candidate { text: text.to_string(), ..Candidate::default() }
    }

    #[test]
    fn case_insensitive_match() {
        let f = TeamFilter::new("Bunyola");
        assert!(f.accepts(&candidate("CV Rival CV bunyola 3 - 0")));
        assert!(!f.accepts(&candidate("CV Rival Palma Esports")));
    }

    #[test]
    fn retain_drops_unrelated_rows() {
        let f = TeamFilter::new("BUNYOLA");
        let kept = f.retain(vec![candidate("C.V. BUNYOLA x"), candidate("RAFAL VELL x"), candidate("x CV Bunyola")]);
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|c| c.text.to_uppercase().contains("BUNYOLA")));
    }

    #[test]
    fn empty_keyword_accepts_nothing() {
        assert!(!TeamFilter::new("  ").accepts(&candidate("anything")));
    }
}
