use rand::Rng;

use crate::constants::RANDOM_OFFSET_CEILING;

// DBpediaに投げるSPARQLクエリの種類
// label/termはsanitize::escape_query済みの文字列であること
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SparqlQuery {
    // ラベルの完全一致
    Exact { label: String, lang: String },
    // ラベルの部分一致 (bif:contains)
    Fuzzy { term: String, lang: String },
    // OFFSETを使ったランダムな1件
    Random { offset: u32, lang: String },
}

impl SparqlQuery {
    pub fn new(query: &str, lang: &str, fault_tolerant: bool) -> Self {
        if fault_tolerant {
            SparqlQuery::Fuzzy {
                term: query.to_string(),
                lang: lang.to_string(),
            }
        } else {
            SparqlQuery::Exact {
                label: query.to_string(),
                lang: lang.to_string(),
            }
        }
    }

    pub fn random(lang: &str) -> Self {
        let offset = rand::thread_rng().gen_range(0..RANDOM_OFFSET_CEILING);
        SparqlQuery::Random {
            offset,
            lang: lang.to_string(),
        }
    }

    pub fn to_query_string(&self) -> String {
        match self {
            SparqlQuery::Exact { label, lang } => format!(
                "SELECT ?abstract WHERE {{\n\
                 \t?categorie rdfs:label \"{label}\"@{lang} .\n\
                 \t?categorie dbpedia-owl:abstract ?abstract\n\
                 \tfilter langMatches(lang(?abstract),'{lang}')\n\
                 }} LIMIT 1"
            ),
            SparqlQuery::Fuzzy { term, lang } => format!(
                "SELECT ?abstract WHERE {{\n\
                 \t?categorie rdfs:label ?mylabel .\n\
                 \t?mylabel bif:contains \"'{term}'\" .\n\
                 \t?categorie dbpedia-owl:abstract ?abstract\n\
                 \tfilter langMatches(lang(?abstract),'{lang}')\n\
                 }} LIMIT 1"
            ),
            SparqlQuery::Random { offset, lang } => format!(
                "SELECT distinct ?label ?abstract WHERE {{\n\
                 \t?categorie dbpedia-owl:abstract ?abstract .\n\
                 \t?categorie rdfs:label ?label\n\
                 \tfilter langMatches(lang(?abstract),'{lang}')\n\
                 }}\n\
                 ORDER BY ?s OFFSET {offset} LIMIT 1"
            ),
        }
    }
}
