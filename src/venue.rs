use serde::{Deserialize, Serialize};

/// Ordered keyword -> canonical venue table. Earlier entries win.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VenueDictionary {
    entries: Vec<(String, String)>,
}

impl VenueDictionary {
    pub fn new<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self { entries: entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for VenueDictionary {
    /// Home courts of the teams in the Mallorca league.
    fn default() -> Self {
        Self::new([
            ("SCANNER CV SON FERRER", "Pav. IES Son Ferrer"),
            ("CASA NOVA VOLEI MURO", "Pav. IES Sta. Margalida"),
            ("RAFAL VELL", "Poliesportiu Germans Escalas"),
            ("PALMA ESPORTS", "Poliesportiu Cide"),
            ("VIAJES LLABRES CV. PÒRTOL", "Pabellón Blanquerna"),
            ("ES CRUCE CV MANACOR", "Na Capellera (Manacor)"),
            ("CV CIUTADELLA BIOSPORT", "Poliesportiu Municipal Ciutadella"),
            ("CLUB VOLEI ES CASTELL", "Zona Esportiva Sergi Llull"),
            ("MAYURQA VOLEY PALMA", "Pol. Germans Escales"),
            ("ANAYA MAYURQA VOLEY PALMA", "Pabellón UIB"),
            ("CVS BAR SON ANGELATS SOLLER", "Pabellón Son Angelats (Sóller)"),
            ("C.V. BUNYOLA", "Pav. Juan Pericas Riera"),
        ])
    }
}

/// Maps a raw venue or home-team string to a display location.
#[derive(Debug, Clone)]
pub struct VenueResolver {
    // Keys pre-normalized once, in dictionary order
    keys: Vec<(String, String)>,
    fallback: String,
}

impl VenueResolver {
    pub fn new(dictionary: &VenueDictionary, fallback: impl Into<String>) -> Self {
        let keys = dictionary
            .entries()
            .iter()
            .map(|(k, v)| (normalize(k), v.clone()))
            .filter(|(k, _)| !k.is_empty())
            .collect();
        let mut fallback = fallback.into();
        if fallback.trim().is_empty() {
            fallback = "Consultar web oficial".to_string();
        }
        Self { keys, fallback }
    }

    /// First entry whose keyword contains, or is contained in, the raw string.
    /// Never fails and never returns an empty string.
    pub fn resolve(&self, raw: &str) -> &str {
        let needle = normalize(raw);
        if needle.is_empty() {
            return &self.fallback;
        }
        self.keys
            .iter()
            .find(|(key, _)| needle.contains(key.as_str()) || key.contains(needle.as_str()))
            .map(|(_, venue)| venue.as_str())
            .unwrap_or(&self.fallback)
    }
}

fn normalize(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ").to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> VenueResolver {
        VenueResolver::new(&VenueDictionary::default(), "Consultar web oficial")
    }

    #[test]
    fn matches_exact_keyword() {
        assert_eq!(resolver().resolve("SCANNER CV SON FERRER"), "Pav. IES Son Ferrer");
    }

    #[test]
    fn ignores_case_and_extra_whitespace() {
        assert_eq!(resolver().resolve("  c.v.   bunyola "), "Pav. Juan Pericas Riera");
    }

    #[test]
    fn raw_string_contained_in_keyword() {
        assert_eq!(resolver().resolve("Rafal"), "Poliesportiu Germans Escalas");
    }

    #[test]
    fn first_match_wins_on_overlapping_keywords() {
        // "MAYURQA VOLEY PALMA" precedes the longer "ANAYA ..." entry
        assert_eq!(resolver().resolve("ANAYA MAYURQA VOLEY PALMA"), "Pol. Germans Escales");
    }

    #[test]
    fn unknown_and_empty_fall_back() {
        let r = resolver();
        assert_eq!(r.resolve("CV Rival"), "Consultar web oficial");
        assert_eq!(r.resolve("   "), "Consultar web oficial");
    }

    #[test]
    fn blank_fallback_is_replaced() {
        let r = VenueResolver::new(&VenueDictionary::new([("A", "B")]), "");
        assert!(!r.resolve("zzz").is_empty());
    }
}
