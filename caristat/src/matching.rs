//! Keyword matching against anchor text.
//!
//! Two flavours are used by the search sources: a plain substring check for
//! navigation links, and a synonym-aware check for statistics and
//! publication links. Both compare lowercased.

/// Related-term groups for common Indonesian statistical topics. A keyword
/// selects a group by exact membership in its term list; the text matches
/// when any term of the selected group occurs in it. This lets "pdrb" find
/// pages labelled "ekonomi" and "poverty" find pages labelled "kemiskinan".
const SYNONYM_GROUPS: &[(&str, &[&str])] = &[
    ("kemiskinan", &["poverty", "miskin", "kemiskinan", "garis kemiskinan"]),
    ("penduduk", &["population", "kependudukan", "demografi", "penduduk"]),
    ("ekonomi", &["economy", "ekonomi", "pdrb", "gdp", "produk domestik"]),
    ("industri", &["industry", "industri", "manufaktur", "produksi"]),
    ("pendidikan", &["education", "pendidikan", "sekolah", "universitas"]),
    ("kesehatan", &["health", "kesehatan", "rumah sakit", "puskesmas"]),
    ("pertanian", &["agriculture", "pertanian", "perkebunan", "kehutanan"]),
    ("perdagangan", &["trade", "perdagangan", "ekspor", "impor"]),
    ("transportasi", &["transport", "transportasi", "angkutan"]),
    ("komunikasi", &["communication", "komunikasi", "telekomunikasi"]),
];

/// Case-insensitive substring match of the keyword in the text.
pub fn matches_directly(keyword: &str, text: &str) -> bool {
    text.to_lowercase().contains(&keyword.to_lowercase())
}

/// Direct match, or a hit through the synonym table: when the keyword is a
/// member of a topic group, any term of that group counts.
pub fn matches_with_synonyms(keyword: &str, text: &str) -> bool {
    let keyword = keyword.to_lowercase();
    let text = text.to_lowercase();

    if text.contains(&keyword) {
        return true;
    }

    for (_, terms) in SYNONYM_GROUPS {
        if terms.contains(&keyword.as_str()) && terms.iter().any(|term| text.contains(term)) {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_match_is_case_insensitive() {
        assert!(matches_directly("kemiskinan", "Data Kemiskinan Kota Medan"));
        assert!(matches_directly("PENDUDUK", "jumlah penduduk 2023"));
        assert!(!matches_directly("ekonomi", "Statistik Kesehatan"));
    }

    #[test]
    fn synonym_match_covers_group_terms() {
        // "kemiskinan" selects the poverty group; "miskin" is in the text
        assert!(matches_with_synonyms(
            "kemiskinan",
            "Persentase Penduduk Miskin"
        ));
        // English term selects the same group
        assert!(matches_with_synonyms("poverty", "Garis Kemiskinan 2023"));
        // "pdrb" sits in the economy group
        assert!(matches_with_synonyms("pdrb", "Pertumbuhan Ekonomi Medan"));
    }

    #[test]
    fn synonym_match_requires_exact_group_membership() {
        // "ekon" is not a member of any group and does not occur in the text
        assert!(!matches_with_synonyms("ekon", "PDRB Kota Medan"));
        // multi-word terms are members too
        assert!(matches_with_synonyms(
            "garis kemiskinan",
            "data kemiskinan terbaru"
        ));
    }

    #[test]
    fn unknown_keyword_still_matches_directly() {
        assert!(matches_with_synonyms("medan", "BPS Kota Medan"));
        assert!(!matches_with_synonyms("jakarta", "BPS Kota Medan"));
    }
}
